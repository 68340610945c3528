use crate::model::Phase;

/// An error that can occur when building a [`RadioProfile`].
///
/// [`RadioProfile`]: crate::radio::RadioProfile
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    /// The chip is not in the registry.
    UnsupportedRadio,
    /// The chip does not support the requested transmit power.
    UnsupportedTxPower,
}

/// An error that can occur when decomposing a slot.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ModelError {
    /// A segment came out shorter than zero. The chip timings do not fit the
    /// protocol budget, or the payload is too long for its prepare window.
    ///
    /// Segments are checked in temporal order, so this is reported before
    /// [`ModelError::SlotDurationExceeded`] when both apply.
    NegativeSegment { phase: Phase },
    /// The segments before the closing sleep are longer than the slot.
    SlotDurationExceeded,
    /// The decomposition does not fit the segment buffer.
    TooManySegments,
}

/// Any error of this crate.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    Config(ConfigError),
    Model(ModelError),
}

/// A type alias for `Result<T, slot_energy::Error>`.
pub type Result<T> = core::result::Result<T, Error>;

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ModelError> for Error {
    fn from(err: ModelError) -> Self {
        Self::Model(err)
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedRadio => write!(f, "unsupported radio"),
            Self::UnsupportedTxPower => write!(f, "unsupported transmit power"),
        }
    }
}

impl core::fmt::Display for ModelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NegativeSegment { phase } => write!(f, "negative {phase} segment"),
            Self::SlotDurationExceeded => write!(f, "slot duration exceeded"),
            Self::TooManySegments => write!(f, "too many segments"),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Config(err) => err.fmt(f),
            Self::Model(err) => err.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for ModelError {}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Model(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", Error::from(ConfigError::UnsupportedTxPower)),
            "unsupported transmit power"
        );
        assert_eq!(
            format!(
                "{}",
                Error::from(ModelError::NegativeSegment {
                    phase: Phase::Ready
                })
            ),
            "negative ready segment"
        );
    }
}
