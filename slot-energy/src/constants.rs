//! Protocol constants of the slotted MAC.
//!
//! The timeslot template below is the one the reference calibration was made
//! with: 15 ms slots on a 32 768 Hz sleep timer. Every value can be replaced
//! at build time by setting `SLOT_ENERGY_<NAME>` to a Rust expression, e.g.
//! `SLOT_ENERGY_TS_TX_OFFSET="Duration::from_ticks(140)"`.
#![allow(dead_code)]
pub use customizable::*;

// Constants from section 11.3, Table 11-1, PHY constants
/// The maximum PSDU size (in octets) the PHY shall be able to receive.
pub const MAX_PHY_PACKET_SIZE: usize = 127;
/// Length of the PHY header length field (in octets) that precedes every
/// PSDU on air.
pub const PHY_LENGTH_FIELD: usize = 1;

mod customizable {
    #![allow(dead_code)]
    include!(concat!(env!("OUT_DIR"), "/config.rs"));
}

/// The largest payload that still fits a PSDU next to the CRC.
pub const MAX_PAYLOAD_SIZE: usize = MAX_PHY_PACKET_SIZE - CRC_LENGTH;
