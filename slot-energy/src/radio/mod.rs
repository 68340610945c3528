//! Radio profile registry.
//!
//! A [`RadioProfile`] holds every constant the slot model needs for one
//! radio chip at one transmit power: the current draw of each
//! {CPU, radio} state, the timeslot template, the chip's prepare bounds and
//! its micro-timing table. Profiles are built from the static
//! [`ChipDescriptor`]s listed in [`CHIPS`]; supporting a new chip only means
//! adding a descriptor there.
//!
//! ```
//! use slot_energy::radio::{RadioProfile, TxPower};
//! use slot_energy::{ConfigError, OperatingState};
//!
//! let profile = RadioProfile::new("cc2538", TxPower::from_dbm(3)).unwrap();
//! assert_eq!(profile.name(), "CC2538");
//! assert_eq!(
//!     profile.current(OperatingState::SLEEP_TX).as_na(),
//!     29_010_000
//! );
//!
//! let err = RadioProfile::new("CC2538", TxPower::from_dbm(7)).unwrap_err();
//! assert_eq!(err, ConfigError::UnsupportedTxPower);
//! ```

mod cc1200;
mod cc2538;

pub use cc1200::CC1200;
pub use cc2538::CC2538;

use crate::constants::*;
use crate::current::Current;
use crate::error::ConfigError;
use crate::model::SlotModel;
use crate::state::{CpuState, OperatingState, RadioState};
use crate::time::Duration;

/// All radio chips known to the registry.
pub static CHIPS: &[&ChipDescriptor] = &[&CC2538, &CC1200];

/// Transmit power setting, in dBm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TxPower(i8);

impl TxPower {
    pub const fn from_dbm(dbm: i8) -> Self {
        Self(dbm)
    }

    pub const fn as_dbm(&self) -> i8 {
        self.0
    }
}

impl From<i8> for TxPower {
    fn from(dbm: i8) -> Self {
        Self(dbm)
    }
}

impl core::fmt::Display for TxPower {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} dBm", self.0)
    }
}

/// Which set of current draws to use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum Calibration {
    /// Bench measurements, with the sleep draws replaced by the values of
    /// the chip datasheets.
    #[default]
    Datasheet,
    /// Raw bench measurements.
    Measured,
}

impl core::fmt::Display for Calibration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Datasheet => write!(f, "datasheet"),
            Self::Measured => write!(f, "measured"),
        }
    }
}

/// Current draw for each radio state other than transmitting, with the CPU
/// in one fixed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioCurrents {
    pub sleep: Current,
    pub idle: Current,
    pub rx: Current,
    pub listen: Current,
}

/// Transmit current draw at one power setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxLevel {
    pub power: TxPower,
    /// Draw while transmitting with the CPU active.
    pub cpu_active: Current,
    /// Draw while transmitting with the CPU sleeping.
    pub cpu_sleep: Current,
}

/// One calibration of a chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationTable {
    pub cpu_active: RadioCurrents,
    pub cpu_sleep: RadioCurrents,
    /// The supported transmit power settings.
    pub tx_levels: &'static [TxLevel],
}

/// Maximum time the MAC budgets for preparing each radio operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrepareBounds {
    pub tx_data: Duration,
    pub rx_data: Duration,
    pub tx_ack: Duration,
    pub rx_ack: Duration,
}

/// A duration that grows linearly with the payload size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearTime {
    pub intercept: Duration,
    pub per_byte: Duration,
}

impl LinearTime {
    pub const fn new(intercept: Duration, per_byte: Duration) -> Self {
        Self {
            intercept,
            per_byte,
        }
    }

    /// Return the duration for a payload of `payload` bytes.
    pub fn at(&self, payload: u16) -> Duration {
        self.intercept + self.per_byte * payload as usize
    }
}

/// Measured firmware timings of a chip.
///
/// The `*_wakeup`, `*_settle_start` and `*_burst` entries are the short
/// periods where the CPU is awake around a radio command. `*_process` are the
/// CPU periods closing a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipTimings {
    /// Timer interrupt handling at the start of a transmit slot.
    pub tx_wakeup: Duration,
    /// Building the data frame and loading it into the radio.
    pub tx_data_prepare: LinearTime,
    /// Issuing the transmit command.
    pub tx_settle_start: Duration,
    /// Start of frame interrupt of a data frame.
    pub tx_data_burst: Duration,
    /// Start of frame interrupt of an ACK.
    pub tx_ack_burst: Duration,
    /// Timer interrupt before the ACK receive window.
    pub rx_ack_wakeup: Duration,
    /// Configuring the radio to receive an ACK.
    pub rx_ack_prepare: Duration,
    /// Issuing the receive command.
    pub rx_listen_start: Duration,
    /// Start of frame interrupt of an ACK.
    pub rx_ack_burst: Duration,
    /// Post-processing of an acknowledged transmission.
    pub tx_process_acked: Duration,
    /// Post-processing of a transmission without ACK request.
    pub tx_process_unacked: Duration,
    /// Post-processing of a transmission whose ACK never came.
    pub tx_process_missing_ack: Duration,

    /// Timer interrupt handling at the start of a receive slot.
    pub rx_wakeup: Duration,
    /// Configuring the radio to receive a data frame.
    pub rx_data_prepare: Duration,
    /// Start of frame interrupt of a data frame.
    pub rx_data_burst: Duration,
    /// Reading and parsing a received data frame.
    pub rx_parse: LinearTime,
    /// Scheduling the ACK after parsing.
    pub tx_ack_wakeup: Duration,
    /// Building the ACK and loading it into the radio.
    pub tx_ack_prepare: Duration,
    /// Post-processing after sending an ACK.
    pub rx_process_acked: Duration,
    /// Post-processing of a received frame without ACK request.
    pub rx_process_unacked: Duration,
    /// Post-processing after an empty receive window.
    pub rx_idle_process: Duration,

    /// Timer interrupt handling of a sleep slot.
    pub sleep_wakeup: Duration,
}

/// Static description of a radio chip.
#[derive(Debug, PartialEq, Eq)]
pub struct ChipDescriptor {
    /// Canonical name, matched case-insensitively.
    pub name: &'static str,
    /// Delay between the transmit command and the start of the transmission.
    pub tx_delay: Duration,
    /// Delay between the receive command and the receiver being ready.
    pub rx_delay: Duration,
    pub max_prepare: PrepareBounds,
    pub datasheet: CalibrationTable,
    pub measured: CalibrationTable,
    pub timings: ChipTimings,
}

impl ChipDescriptor {
    /// Find a chip of the registry by name.
    pub fn lookup(name: &str) -> Option<&'static ChipDescriptor> {
        CHIPS
            .iter()
            .copied()
            .find(|chip| chip.name.eq_ignore_ascii_case(name))
    }

    /// Return the current table of a calibration.
    pub const fn calibration(&self, calibration: Calibration) -> &CalibrationTable {
        match calibration {
            Calibration::Datasheet => &self.datasheet,
            Calibration::Measured => &self.measured,
        }
    }

    /// Return the supported transmit power settings, highest first.
    pub fn tx_powers(&self) -> impl Iterator<Item = TxPower> + '_ {
        self.datasheet.tx_levels.iter().map(|level| level.power)
    }
}

/// Time left before a radio operation once the wake-up, the prepare bound and
/// the radio delay are taken out of the protocol offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleMargins {
    /// Before the data frame.
    pub data: Duration,
    /// Before the ACK.
    pub ack: Duration,
}

/// All constants of one radio chip at one transmit power.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioProfile {
    chip: &'static ChipDescriptor,
    calibration: Calibration,
    cpu_active: RadioCurrents,
    cpu_sleep: RadioCurrents,
    tx: TxLevel,

    slot_duration: Duration,
    tx_offset: Duration,
    tx_ack_delay: Duration,
    long_guard_time: Duration,
    short_guard_time: Duration,

    tx_margin: SettleMargins,
    rx_margin: SettleMargins,
}

impl RadioProfile {
    /// Build the profile of `chip` at `tx_power`, using the datasheet
    /// calibration.
    pub fn new(chip: &str, tx_power: TxPower) -> Result<Self, ConfigError> {
        Self::with_calibration(chip, tx_power, Calibration::default())
    }

    /// Build the profile of `chip` at `tx_power` with the given calibration.
    pub fn with_calibration(
        chip: &str,
        tx_power: TxPower,
        calibration: Calibration,
    ) -> Result<Self, ConfigError> {
        let Some(descriptor) = ChipDescriptor::lookup(chip) else {
            debug!("unsupported radio");
            return Err(ConfigError::UnsupportedRadio);
        };

        Self::from_descriptor(descriptor, tx_power, calibration)
    }

    /// Build a profile from a chip descriptor.
    pub fn from_descriptor(
        chip: &'static ChipDescriptor,
        tx_power: TxPower,
        calibration: Calibration,
    ) -> Result<Self, ConfigError> {
        let table = chip.calibration(calibration);
        let Some(tx) = table.tx_levels.iter().find(|l| l.power == tx_power) else {
            debug!("{} does not support {} dBm", chip.name, tx_power.as_dbm());
            return Err(ConfigError::UnsupportedTxPower);
        };

        let tx_margin = SettleMargins {
            data: TS_TX_OFFSET - chip.tx_delay - chip.max_prepare.tx_data,
            ack: TS_TX_ACK_DELAY - TS_SHORT_GUARD_TIME - chip.rx_delay - chip.max_prepare.rx_ack,
        };
        let rx_margin = SettleMargins {
            data: TS_TX_OFFSET - TS_LONG_GUARD_TIME - chip.rx_delay - chip.max_prepare.rx_data,
            ack: TS_TX_ACK_DELAY - chip.tx_delay - chip.max_prepare.tx_ack,
        };

        Ok(Self {
            chip,
            calibration,
            cpu_active: table.cpu_active,
            cpu_sleep: table.cpu_sleep,
            tx: *tx,
            slot_duration: TS_SLOT_DURATION,
            tx_offset: TS_TX_OFFSET,
            tx_ack_delay: TS_TX_ACK_DELAY,
            long_guard_time: TS_LONG_GUARD_TIME,
            short_guard_time: TS_SHORT_GUARD_TIME,
            tx_margin,
            rx_margin,
        })
    }

    /// Return a model computing slots with this profile.
    pub fn model(&self) -> SlotModel<'_> {
        SlotModel::new(self)
    }

    pub fn chip(&self) -> &'static ChipDescriptor {
        self.chip
    }

    pub fn name(&self) -> &'static str {
        self.chip.name
    }

    pub fn tx_power(&self) -> TxPower {
        self.tx.power
    }

    pub fn calibration(&self) -> Calibration {
        self.calibration
    }

    /// Return the current draw of the device in `state`.
    pub fn current(&self, state: OperatingState) -> Current {
        let (currents, tx) = match state.cpu {
            CpuState::Active => (&self.cpu_active, self.tx.cpu_active),
            CpuState::Sleep => (&self.cpu_sleep, self.tx.cpu_sleep),
        };

        match state.radio {
            RadioState::Sleep => currents.sleep,
            RadioState::Idle => currents.idle,
            RadioState::Rx => currents.rx,
            RadioState::Listen => currents.listen,
            RadioState::Tx => tx,
        }
    }

    pub fn slot_duration(&self) -> Duration {
        self.slot_duration
    }

    /// Offset from the start of the slot to the start of the data frame.
    pub fn tx_offset(&self) -> Duration {
        self.tx_offset
    }

    /// Wait time between the end of the data frame and the start of the ACK.
    pub fn tx_ack_delay(&self) -> Duration {
        self.tx_ack_delay
    }

    /// Guard time of the data frame receive window.
    pub fn long_guard_time(&self) -> Duration {
        self.long_guard_time
    }

    /// Guard time of the ACK receive window.
    pub fn short_guard_time(&self) -> Duration {
        self.short_guard_time
    }

    pub fn tx_delay(&self) -> Duration {
        self.chip.tx_delay
    }

    pub fn rx_delay(&self) -> Duration {
        self.chip.rx_delay
    }

    pub fn max_prepare(&self) -> &PrepareBounds {
        &self.chip.max_prepare
    }

    /// Settle margins of the transmitter side of an exchange.
    pub fn tx_margin(&self) -> SettleMargins {
        self.tx_margin
    }

    /// Settle margins of the receiver side of an exchange.
    pub fn rx_margin(&self) -> SettleMargins {
        self.rx_margin
    }

    pub fn timings(&self) -> &ChipTimings {
        &self.chip.timings
    }

    /// Air time of a PSDU of `len` octets, length field included.
    pub fn air_time(&self, len: usize) -> Duration {
        BYTE_DURATION * (PHY_LENGTH_FIELD + len)
    }
}
