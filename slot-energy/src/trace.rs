//! Current over time during a slot.
//!
//! A [`CurrentTrace`] is the piecewise-constant current curve of a decomposed
//! slot, on a whole microsecond grid. Every segment contributes a point one
//! microsecond after its start and a point at its end. Segment boundaries are
//! rounded from their exact position in the slot, so the trace of every slot
//! ends on the slot duration.

use crate::current::Current;
use crate::model::{Segments, MAX_SEGMENTS};
use crate::time::{Duration, Instant};

/// The largest number of points in a trace.
pub const TRACE_CAPACITY: usize = 2 * MAX_SEGMENTS + 1;

/// A point of a [`CurrentTrace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TracePoint {
    pub time: Instant,
    pub current: Current,
}

impl TracePoint {
    const fn new(time: Instant, current: Current) -> Self {
        Self { time, current }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentTrace {
    points: heapless::Vec<TracePoint, TRACE_CAPACITY>,
}

impl CurrentTrace {
    /// Build the trace of a decomposed slot.
    ///
    /// Segments shorter than half a microsecond do not show up on the grid
    /// and are left out.
    pub fn from_segments(segments: &Segments) -> Self {
        let mut points = heapless::Vec::new();

        let Some(first) = segments.first() else {
            return Self { points };
        };
        // At most two points per segment after this one, which always fits.
        let _ = points.push(TracePoint::new(Instant::ZERO, first.current));

        let mut elapsed = Duration::ZERO;
        let mut start = 0;
        for segment in segments {
            elapsed += segment.duration;
            let end = elapsed.round_us();
            if end == start {
                continue;
            }

            let _ = points.push(TracePoint::new(
                Instant::from_us(start + 1),
                segment.current,
            ));
            let _ = points.push(TracePoint::new(Instant::from_us(end), segment.current));
            start = end;
        }

        Self { points }
    }

    /// The points of the trace, in temporal order.
    pub fn points(&self) -> &[TracePoint] {
        &self.points
    }

    /// The last instant of the trace.
    pub fn end(&self) -> Option<Instant> {
        self.points.last().map(|p| p.time)
    }

    /// Return the current drawn at `time`, or `None` when `time` is outside
    /// of the trace.
    pub fn current_at(&self, time: Instant) -> Option<Current> {
        let first = self.points.first()?;
        if time < first.time {
            return None;
        }

        self.points
            .iter()
            .find(|p| p.time >= time)
            .map(|p| p.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Segment, SlotType};
    use crate::radio::{Calibration, RadioProfile, TxPower, CHIPS};
    use crate::state::OperatingState;

    fn na(value: i64) -> Current {
        Current::from_na(value)
    }

    #[test]
    fn sleep_slot() {
        let p = RadioProfile::new("CC2538", TxPower::from_dbm(3)).unwrap();
        let segments = p.model().segments(SlotType::Sleep, 0).unwrap();
        let trace = CurrentTrace::from_segments(&segments);

        assert_eq!(
            trace.points(),
            [
                TracePoint::new(Instant::from_us(0), na(13_970_000)),
                TracePoint::new(Instant::from_us(1), na(13_970_000)),
                TracePoint::new(Instant::from_us(57), na(13_970_000)),
                TracePoint::new(Instant::from_us(58), na(10_060_000)),
                TracePoint::new(Instant::from_us(15_000), na(10_060_000)),
            ]
        );
        assert_eq!(trace.end(), Some(Instant::from_us(15_000)));
    }

    #[test]
    fn current_at() {
        let p = RadioProfile::new("CC2538", TxPower::from_dbm(3)).unwrap();
        let segments = p.model().segments(SlotType::Sleep, 0).unwrap();
        let trace = CurrentTrace::from_segments(&segments);

        assert_eq!(trace.current_at(Instant::ZERO), Some(na(13_970_000)));
        assert_eq!(trace.current_at(Instant::from_us(57)), Some(na(13_970_000)));
        assert_eq!(trace.current_at(Instant::from_us(58)), Some(na(10_060_000)));
        assert_eq!(
            trace.current_at(Instant::from_us(15_000)),
            Some(na(10_060_000))
        );
        assert_eq!(trace.current_at(Instant::from_us(15_001)), None);
        assert_eq!(trace.current_at(Instant::from_us(-1)), None);
    }

    #[test]
    fn rounding_is_cumulative() {
        let p = RadioProfile::new("CC1200", TxPower::from_dbm(0)).unwrap();
        let segment = |duration| Segment {
            phase: crate::model::Phase::Offset,
            state: OperatingState::SLEEP_SLEEP,
            duration,
            current: p.current(OperatingState::SLEEP_SLEEP),
        };

        // Three segments of 1.4 µs end at 1.4, 2.8 and 4.2 µs.
        let mut segments = Segments::new();
        for _ in 0..3 {
            segments.push(segment(Duration::from_ns(1_400))).unwrap();
        }
        let trace = CurrentTrace::from_segments(&segments);
        let times: std::vec::Vec<i64> = trace.points().iter().map(|p| p.time.as_us()).collect();
        assert_eq!(times, [0, 1, 1, 2, 3, 4, 4]);

        // A segment that is not visible on the grid is left out.
        let mut segments = Segments::new();
        segments.push(segment(Duration::from_us(3))).unwrap();
        segments.push(segment(Duration::from_ns(200))).unwrap();
        segments.push(segment(Duration::from_us(2))).unwrap();
        let trace = CurrentTrace::from_segments(&segments);
        assert_eq!(trace.points().len(), 5);
    }

    #[test]
    fn empty() {
        let trace = CurrentTrace::from_segments(&Segments::new());
        assert!(trace.points().is_empty());
        assert_eq!(trace.end(), None);
        assert_eq!(trace.current_at(Instant::ZERO), None);
    }

    #[test]
    fn every_trace_ends_on_the_slot() {
        for chip in CHIPS {
            for power in chip.tx_powers() {
                let p = RadioProfile::from_descriptor(chip, power, Calibration::Measured).unwrap();
                for slot in SlotType::ALL {
                    let segments = p.model().segments(slot, 125).unwrap();
                    let trace = CurrentTrace::from_segments(&segments);
                    assert_eq!(trace.end(), Some(Instant::from_us(15_000)));
                    assert!(trace.points().windows(2).all(|w| w[0].time <= w[1].time));
                    assert_eq!(
                        trace.current_at(Instant::from_us(14_999)),
                        Some(p.current(OperatingState::SLEEP_SLEEP))
                    );
                }
            }
        }
    }
}
