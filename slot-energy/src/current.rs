//! Current draw and electric charge.
//!
//! - [`Current`] is the draw of the device in one operating state.
//! - [`Charge`] is the exact product of a [`Duration`] and a [`Current`].
//! - [`Energy`] is a charge rounded to hundredths of a micro-coulomb, the
//!   value reported per slot.

use crate::time::Duration;

/// `Charge` units (1 fs x 1 nA = 1e-24 C) in one hundredth of a µC.
const CHARGE_PER_CENTI_UC: i128 = 10_000_000_000_000_000;

/// Current draw, stored as an integer number of nanoamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Current(i64);

impl Current {
    pub const ZERO: Self = Self(0);

    /// Create a new `Current` from nanoamps.
    pub const fn from_na(na: i64) -> Self {
        Self(na)
    }

    /// Create a new `Current` from microamps.
    pub const fn from_ua(ua: i64) -> Self {
        Self(ua * 1_000)
    }

    /// Returns the current as nanoamps.
    pub const fn as_na(&self) -> i64 {
        self.0
    }

    /// Returns the current as fractional milliamps.
    pub fn as_ma_f64(&self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }
}

impl core::fmt::Display for Current {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.4}mA", self.as_ma_f64())
    }
}

/// Electric charge with a resolution of 1e-24 C.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Charge(i128);

impl Charge {
    pub const ZERO: Self = Self(0);

    /// Returns the raw value, in units of 1e-24 C.
    pub const fn as_raw(&self) -> i128 {
        self.0
    }

    /// Returns the charge as fractional micro-coulombs.
    pub fn as_uc_f64(&self) -> f64 {
        self.0 as f64 / (CHARGE_PER_CENTI_UC * 100) as f64
    }
}

impl core::ops::Mul<Current> for Duration {
    type Output = Charge;

    fn mul(self, rhs: Current) -> Self::Output {
        Charge(self.as_fs() as i128 * rhs.0 as i128)
    }
}

impl core::ops::Add for Charge {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl core::ops::Sub for Charge {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl core::iter::Sum for Charge {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, c| acc + c)
    }
}

impl core::fmt::Display for Charge {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.4} uC", self.as_uc_f64())
    }
}

/// The charge consumed during one slot, rounded to two decimals of a µC.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Energy {
    centi_uc: i64,
}

impl Energy {
    /// Create a new `Energy` from hundredths of a micro-coulomb.
    pub const fn from_centi_uc(centi_uc: i64) -> Self {
        Self { centi_uc }
    }

    /// Round an exact charge to hundredths of a µC, halves away from zero.
    pub const fn from_charge(charge: Charge) -> Self {
        let raw = charge.0;
        let half = CHARGE_PER_CENTI_UC / 2;
        let centi = if raw < 0 {
            -((-raw + half) / CHARGE_PER_CENTI_UC)
        } else {
            (raw + half) / CHARGE_PER_CENTI_UC
        };

        Self {
            centi_uc: centi as i64,
        }
    }

    /// Returns the energy as hundredths of a micro-coulomb.
    pub const fn as_centi_uc(&self) -> i64 {
        self.centi_uc
    }

    /// Returns the energy as micro-coulombs.
    pub fn as_uc(&self) -> f64 {
        self.centi_uc as f64 / 100.0
    }
}

impl From<Charge> for Energy {
    fn from(charge: Charge) -> Self {
        Self::from_charge(charge)
    }
}

impl core::fmt::Display for Energy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.centi_uc < 0 { "-" } else { "" };
        let abs = self.centi_uc.unsigned_abs();
        write!(f, "{sign}{}.{:02} uC", abs / 100, abs % 100)
    }
}
