//! Timing and energy model of a single slot.
//!
//! Every [`SlotType`] has a fixed recipe (see [`recipe`]) that splits the
//! slot into [`Segment`]s. The segments are in temporal order, none of them
//! is negative and their durations add up to the slot duration exactly. The
//! energy of a slot is the sum of the charges of its segments, rounded to
//! hundredths of a µC.

mod recipe;

use crate::current::{Charge, Current, Energy};
use crate::error::ModelError;
use crate::radio::RadioProfile;
use crate::state::OperatingState;
use crate::time::Duration;

/// The largest number of segments a slot is split into.
pub const MAX_SEGMENTS: usize = 18;

/// The segments of one slot, in temporal order.
pub type Segments = heapless::Vec<Segment, MAX_SEGMENTS>;

/// The role a node plays during a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum SlotType {
    /// Send a data frame and receive its ACK.
    TxDataRxAck,
    /// Receive a data frame and send an ACK.
    RxDataTxAck,
    /// Send a data frame that does not request an ACK.
    TxData,
    /// Receive a data frame that does not request an ACK.
    RxData,
    /// Listen for a data frame that never comes.
    RxIdle,
    /// Stay asleep, apart from the timer interrupt.
    Sleep,
    /// Send a data frame and wait for an ACK that never comes.
    TxDataMissingAck,
}

impl SlotType {
    /// All slot types, in reporting order.
    pub const ALL: [SlotType; 7] = [
        Self::TxDataRxAck,
        Self::RxDataTxAck,
        Self::TxData,
        Self::RxData,
        Self::RxIdle,
        Self::Sleep,
        Self::TxDataMissingAck,
    ];

    /// Returns the kebab-case name of the slot type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TxDataRxAck => "tx-data-rx-ack",
            Self::RxDataTxAck => "rx-data-tx-ack",
            Self::TxData => "tx-data",
            Self::RxData => "rx-data",
            Self::RxIdle => "rx-idle",
            Self::Sleep => "sleep",
            Self::TxDataMissingAck => "tx-data-missing-ack",
        }
    }

    /// Returns `true` if the payload size has an effect on the slot.
    pub const fn carries_payload(&self) -> bool {
        !matches!(self, Self::RxIdle | Self::Sleep)
    }
}

impl core::fmt::Display for SlotType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown slot type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSlotTypeError;

impl core::fmt::Display for ParseSlotTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown slot type")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseSlotTypeError {}

impl core::str::FromStr for SlotType {
    type Err = ParseSlotTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseSlotTypeError)
    }
}

/// What the node is doing during a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Timer interrupt handling.
    WakeUp,
    /// Waiting for the next radio operation, everything asleep.
    Offset,
    /// Preparing the radio or a frame.
    Prepare,
    /// Prepared, waiting for the radio command.
    Ready,
    /// Issuing the transmit command.
    SettleStart,
    /// Transmitter settling.
    Settle,
    /// Start of frame interrupt.
    Burst,
    /// Rest of the frame on air.
    OnAir,
    /// Issuing the receive command.
    ListenStart,
    /// Receiver on, waiting for a frame.
    Listen,
    /// Parsing a received frame and scheduling the ACK.
    Parse,
    /// Post-processing of the exchange.
    Process,
    /// Asleep until the end of the slot.
    Sleep,
}

impl core::fmt::Display for Phase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::WakeUp => write!(f, "wake-up"),
            Self::Offset => write!(f, "offset"),
            Self::Prepare => write!(f, "prepare"),
            Self::Ready => write!(f, "ready"),
            Self::SettleStart => write!(f, "settle start"),
            Self::Settle => write!(f, "settle"),
            Self::Burst => write!(f, "burst"),
            Self::OnAir => write!(f, "on air"),
            Self::ListenStart => write!(f, "listen start"),
            Self::Listen => write!(f, "listen"),
            Self::Parse => write!(f, "parse"),
            Self::Process => write!(f, "process"),
            Self::Sleep => write!(f, "sleep"),
        }
    }
}

/// A sub-interval of a slot with a constant current draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segment {
    pub phase: Phase,
    pub state: OperatingState,
    pub duration: Duration,
    pub current: Current,
}

impl Segment {
    /// Returns the charge consumed during the segment.
    pub fn charge(&self) -> Charge {
        self.duration * self.current
    }
}

/// Returns the energy of a decomposed slot.
pub fn energy_of(segments: &[Segment]) -> Energy {
    Energy::from(segments.iter().map(Segment::charge).sum::<Charge>())
}

/// Split a slot into its segments.
pub fn compute_segments(
    profile: &RadioProfile,
    slot: SlotType,
    payload: u16,
) -> Result<Segments, ModelError> {
    recipe::decompose(profile, slot, payload)
}

/// Compute the charge consumed during a slot.
pub fn compute_slot(
    profile: &RadioProfile,
    slot: SlotType,
    payload: u16,
) -> Result<Energy, ModelError> {
    Ok(energy_of(&compute_segments(profile, slot, payload)?))
}

/// The slot model of one radio profile.
#[derive(Debug, Clone, Copy)]
pub struct SlotModel<'p> {
    profile: &'p RadioProfile,
}

impl<'p> SlotModel<'p> {
    pub fn new(profile: &'p RadioProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &'p RadioProfile {
        self.profile
    }

    /// Split a slot with a `payload` bytes long data frame into segments.
    pub fn segments(&self, slot: SlotType, payload: u16) -> Result<Segments, ModelError> {
        compute_segments(self.profile, slot, payload)
    }

    /// Compute the charge of a slot with a `payload` bytes long data frame.
    pub fn energy(&self, slot: SlotType, payload: u16) -> Result<Energy, ModelError> {
        compute_slot(self.profile, slot, payload)
    }
}
