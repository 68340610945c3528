//! Time structures.
//!
//! - [`Instant`] is used to represent a point in time inside a slot.
//! - [`Duration`] is used to represent a duration of time.
//!
//! Both are stored as an integer number of femtoseconds. At that resolution a
//! tick of the 32 768 Hz sleep timer (30.517578125 µs) and every per-byte
//! processing coefficient of the radio tables are exact, so sums of durations
//! never drift.

const FS_PER_NS: i64 = 1_000_000;
const FS_PER_US: i64 = 1_000_000_000;
/// Femtoseconds in one tick of the 32 768 Hz reference clock.
const FS_PER_TICK: i64 = 1_000_000_000_000_000 / 32_768;

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant {
    fs: i64,
}

impl Instant {
    /// The start of the slot.
    pub const ZERO: Self = Self { fs: 0 };

    /// Create a new `Instant` from microseconds since the start of the slot.
    pub const fn from_us(us: i64) -> Self {
        Self { fs: us * FS_PER_US }
    }

    /// Returns the point in time as whole microseconds, rounded towards
    /// negative infinity.
    pub const fn as_us(&self) -> i64 {
        self.fs.div_euclid(FS_PER_US)
    }

    /// Returns the point in time as fractional microseconds.
    pub fn as_us_f64(&self) -> f64 {
        self.fs as f64 / FS_PER_US as f64
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Self = Self(0);

    /// Create a new `Duration` from microseconds.
    pub const fn from_us(us: i64) -> Self {
        Self(us * FS_PER_US)
    }

    /// Create a new `Duration` from nanoseconds.
    pub const fn from_ns(ns: i64) -> Self {
        Self(ns * FS_PER_NS)
    }

    /// Create a new `Duration` from ticks of the 32 768 Hz reference clock.
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks * FS_PER_TICK)
    }

    /// Returns the duration as femtoseconds.
    pub const fn as_fs(&self) -> i64 {
        self.0
    }

    /// Returns the duration as fractional microseconds.
    pub fn as_us_f64(&self) -> f64 {
        self.0 as f64 / FS_PER_US as f64
    }

    /// Returns the duration rounded to the nearest microsecond, ties to even.
    pub const fn round_us(&self) -> i64 {
        let quotient = self.0.div_euclid(FS_PER_US);
        let remainder = self.0.rem_euclid(FS_PER_US);
        let half = FS_PER_US / 2;

        if remainder > half || (remainder == half && quotient.rem_euclid(2) == 1) {
            quotient + 1
        } else {
            quotient
        }
    }

    /// Returns `true` when the duration is shorter than zero.
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl core::ops::Sub for Instant {
    type Output = Duration;

    fn sub(self, rhs: Instant) -> Self::Output {
        Duration(self.fs - rhs.fs)
    }
}

impl core::ops::Sub<Duration> for Instant {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self::Output {
        Self {
            fs: self.fs - rhs.0,
        }
    }
}

impl core::ops::Add<Duration> for Instant {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self {
            fs: self.fs + rhs.0,
        }
    }
}

impl core::ops::Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl core::ops::SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Duration) {
        self.0 -= rhs.0;
    }
}

impl core::ops::Add<Duration> for Duration {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl core::ops::AddAssign for Duration {
    fn add_assign(&mut self, rhs: Duration) {
        self.0 += rhs.0;
    }
}

impl core::ops::Mul<usize> for Duration {
    type Output = Self;

    fn mul(self, rhs: usize) -> Self::Output {
        Self(self.0 * rhs as i64)
    }
}

impl core::ops::Div<usize> for Duration {
    type Output = Self;

    fn div(self, rhs: usize) -> Self::Output {
        Self(self.0 / rhs as i64)
    }
}

impl core::iter::Sum for Duration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, d| acc + d)
    }
}

impl<'a> core::iter::Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl core::fmt::Display for Instant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}ms", self.as_us_f64() / 1000.0)
    }
}

impl core::fmt::Display for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}ms", self.as_us_f64() / 1000.0)
    }
}
