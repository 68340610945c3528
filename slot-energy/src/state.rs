/// State of the microcontroller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CpuState {
    Active,
    Sleep,
}

/// State of the radio transceiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioState {
    /// Powered down, oscillator off.
    Sleep,
    /// Oscillator running, receiver and transmitter off.
    Idle,
    /// Receiving a frame.
    Rx,
    /// Receiver on, waiting for a start of frame delimiter.
    Listen,
    /// Transmitter on.
    Tx,
}

/// The combined {CPU, radio} state of the device during a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OperatingState {
    pub cpu: CpuState,
    pub radio: RadioState,
}

impl OperatingState {
    pub const ACTIVE_SLEEP: Self = Self::new(CpuState::Active, RadioState::Sleep);
    pub const ACTIVE_IDLE: Self = Self::new(CpuState::Active, RadioState::Idle);
    pub const ACTIVE_RX: Self = Self::new(CpuState::Active, RadioState::Rx);
    pub const ACTIVE_LISTEN: Self = Self::new(CpuState::Active, RadioState::Listen);
    pub const ACTIVE_TX: Self = Self::new(CpuState::Active, RadioState::Tx);
    pub const SLEEP_SLEEP: Self = Self::new(CpuState::Sleep, RadioState::Sleep);
    pub const SLEEP_IDLE: Self = Self::new(CpuState::Sleep, RadioState::Idle);
    pub const SLEEP_RX: Self = Self::new(CpuState::Sleep, RadioState::Rx);
    pub const SLEEP_LISTEN: Self = Self::new(CpuState::Sleep, RadioState::Listen);
    pub const SLEEP_TX: Self = Self::new(CpuState::Sleep, RadioState::Tx);

    pub const fn new(cpu: CpuState, radio: RadioState) -> Self {
        Self { cpu, radio }
    }

    /// Returns `true` if the transmitter is on in this state.
    pub const fn is_transmitting(&self) -> bool {
        matches!(self.radio, RadioState::Tx)
    }
}

impl core::fmt::Display for CpuState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Sleep => write!(f, "sleep"),
        }
    }
}

impl core::fmt::Display for RadioState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Sleep => write!(f, "sleep"),
            Self::Idle => write!(f, "idle"),
            Self::Rx => write!(f, "rx"),
            Self::Listen => write!(f, "listen"),
            Self::Tx => write!(f, "tx"),
        }
    }
}

impl core::fmt::Display for OperatingState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "cpu {}, radio {}", self.cpu, self.radio)
    }
}
