//! Per-slot charge model for IEEE 802.15.4 TSCH radios.
//!
//! A TSCH slot is split into the sub-intervals a node goes through while it
//! sends or receives a frame: wake-up, frame preparation, guard times, the
//! frame on air and the post-processing. Each sub-interval is a [`Segment`]
//! with a {CPU, radio} [`OperatingState`] and the current the device draws in
//! that state. The segments of a slot always tile the slot exactly, and the
//! [`Energy`] of a slot is the sum of their charges.
//!
//! - [`radio`]: the registry of supported chips and the [`RadioProfile`]
//!   holding the constants of one chip at one transmit power.
//! - [`model`]: the decomposition of each [`SlotType`] into segments.
//! - [`trace`]: the current over time of a slot, for plotting.
//!
//! ## Computing the charge of a slot
//! ```
//! use slot_energy::{RadioProfile, SlotType, TxPower};
//!
//! let profile = RadioProfile::new("CC2538", TxPower::from_dbm(3)).unwrap();
//! let model = profile.model();
//!
//! let energy = model.energy(SlotType::TxDataRxAck, 125).unwrap();
//! assert_eq!(format!("{energy}"), "257.43 uC");
//!
//! let segments = model.segments(SlotType::Sleep, 0).unwrap();
//! assert_eq!(segments.len(), 2);
//! ```
#![no_std]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[macro_use]
pub(crate) mod utils;

pub mod constants;
pub mod current;
pub mod model;
pub mod radio;
pub mod state;
pub mod time;
pub mod trace;

mod error;
pub use error::*;

pub use current::{Charge, Current, Energy};
pub use model::{compute_segments, compute_slot, Phase, Segment, Segments, SlotModel, SlotType};
pub use radio::{Calibration, RadioProfile, TxPower};
pub use state::{CpuState, OperatingState, RadioState};
pub use time::{Duration, Instant};
pub use trace::CurrentTrace;
