//! Decomposition recipes of the slot types.
//!
//! A transmitter wakes up, sleeps until it can prepare the frame, prepares
//! it, waits for the transmit command, lets the transmitter settle and sends
//! the frame, so that the frame starts exactly at the tx offset. A receiver
//! does the same with its receive window centered on that instant. The ACK
//! follows the same pattern, counted from the end of the data frame with the
//! tx-ack delay. Whatever is left of the slot is spent asleep.

use super::{Phase, Segment, Segments, SlotType};
use crate::constants::{ACK_LENGTH, CRC_LENGTH};
use crate::error::ModelError;
use crate::radio::RadioProfile;
use crate::state::OperatingState;
use crate::time::Duration;

pub(super) fn decompose(
    profile: &RadioProfile,
    slot: SlotType,
    payload: u16,
) -> Result<Segments, ModelError> {
    let timings = profile.timings();
    let mut slot_builder = SlotBuilder::new(profile);

    match slot {
        SlotType::TxDataRxAck => {
            slot_builder.transmit_data(payload)?;
            slot_builder.await_ack(1)?;
            slot_builder.receive_ack()?;
            slot_builder.push(
                Phase::Process,
                OperatingState::ACTIVE_IDLE,
                timings.tx_process_acked,
            )?;
        }
        SlotType::TxData => {
            slot_builder.transmit_data(payload)?;
            slot_builder.push(
                Phase::Process,
                OperatingState::ACTIVE_SLEEP,
                timings.tx_process_unacked,
            )?;
        }
        SlotType::TxDataMissingAck => {
            // The receiver stays on for twice the guard time before it gives
            // up on the ACK.
            slot_builder.transmit_data(payload)?;
            slot_builder.await_ack(2)?;
            slot_builder.push(
                Phase::Process,
                OperatingState::ACTIVE_SLEEP,
                timings.tx_process_missing_ack,
            )?;
        }
        SlotType::RxDataTxAck => {
            slot_builder.await_data(1)?;
            slot_builder.receive_data(payload)?;
            slot_builder.transmit_ack(payload)?;
            slot_builder.push(
                Phase::Process,
                OperatingState::ACTIVE_SLEEP,
                timings.rx_process_acked,
            )?;
        }
        SlotType::RxData => {
            slot_builder.await_data(1)?;
            slot_builder.receive_data(payload)?;
            slot_builder.push(
                Phase::Process,
                OperatingState::ACTIVE_IDLE,
                timings.rx_parse.at(payload) + timings.rx_process_unacked,
            )?;
        }
        SlotType::RxIdle => {
            slot_builder.await_data(2)?;
            slot_builder.push(
                Phase::Process,
                OperatingState::ACTIVE_SLEEP,
                timings.rx_idle_process,
            )?;
        }
        SlotType::Sleep => {
            slot_builder.push(
                Phase::WakeUp,
                OperatingState::ACTIVE_SLEEP,
                timings.sleep_wakeup,
            )?;
        }
    }

    slot_builder.finish()
}

/// Accumulates the segments of a slot.
struct SlotBuilder<'p> {
    profile: &'p RadioProfile,
    segments: Segments,
    elapsed: Duration,
}

impl<'p> SlotBuilder<'p> {
    fn new(profile: &'p RadioProfile) -> Self {
        Self {
            profile,
            segments: Segments::new(),
            elapsed: Duration::ZERO,
        }
    }

    fn push(
        &mut self,
        phase: Phase,
        state: OperatingState,
        duration: Duration,
    ) -> Result<(), ModelError> {
        if duration.is_negative() {
            debug!("negative {} segment ({})", phase, duration);
            return Err(ModelError::NegativeSegment { phase });
        }

        let segment = Segment {
            phase,
            state,
            duration,
            current: self.profile.current(state),
        };
        trace!("{} at {}: {} for {}", phase, self.elapsed, state, duration);

        self.segments
            .push(segment)
            .map_err(|_| ModelError::TooManySegments)?;
        self.elapsed += duration;

        Ok(())
    }

    /// Close the slot with a sleep segment up to the end of the slot.
    fn finish(mut self) -> Result<Segments, ModelError> {
        let remainder = self.profile.slot_duration() - self.elapsed;
        if remainder.is_negative() {
            debug!("slot duration exceeded by {}", Duration::ZERO - remainder);
            return Err(ModelError::SlotDurationExceeded);
        }

        self.push(Phase::Sleep, OperatingState::SLEEP_SLEEP, remainder)?;
        Ok(self.segments)
    }

    /// From the start of the slot up to the end of the data frame.
    fn transmit_data(&mut self, payload: u16) -> Result<(), ModelError> {
        let profile = self.profile;
        let timings = profile.timings();
        let prepare = timings.tx_data_prepare.at(payload);

        self.push(
            Phase::WakeUp,
            OperatingState::ACTIVE_SLEEP,
            timings.tx_wakeup,
        )?;
        self.push(
            Phase::Offset,
            OperatingState::SLEEP_SLEEP,
            profile.tx_margin().data - timings.tx_wakeup,
        )?;
        self.push(Phase::Prepare, OperatingState::ACTIVE_IDLE, prepare)?;
        self.push(
            Phase::Ready,
            OperatingState::SLEEP_IDLE,
            profile.max_prepare().tx_data - prepare,
        )?;
        self.settle_and_send(
            profile.air_time(payload as usize + CRC_LENGTH),
            timings.tx_data_burst,
        )
    }

    /// From the end of the data frame up to the end of the ACK.
    fn transmit_ack(&mut self, payload: u16) -> Result<(), ModelError> {
        let profile = self.profile;
        let timings = profile.timings();
        let parse = timings.rx_parse.at(payload) + timings.tx_ack_wakeup;

        self.push(Phase::Parse, OperatingState::ACTIVE_IDLE, parse)?;
        self.push(
            Phase::Offset,
            OperatingState::SLEEP_SLEEP,
            profile.rx_margin().ack - parse,
        )?;
        self.push(
            Phase::Prepare,
            OperatingState::ACTIVE_IDLE,
            timings.tx_ack_prepare,
        )?;
        self.push(
            Phase::Ready,
            OperatingState::SLEEP_IDLE,
            profile.max_prepare().tx_ack - timings.tx_ack_prepare,
        )?;
        self.settle_and_send(profile.air_time(ACK_LENGTH), timings.tx_ack_burst)
    }

    fn settle_and_send(&mut self, air_time: Duration, burst: Duration) -> Result<(), ModelError> {
        let profile = self.profile;
        let timings = profile.timings();

        self.push(
            Phase::SettleStart,
            OperatingState::ACTIVE_IDLE,
            timings.tx_settle_start,
        )?;
        self.push(
            Phase::Settle,
            OperatingState::SLEEP_TX,
            profile.tx_delay() - timings.tx_settle_start,
        )?;
        self.push(Phase::Burst, OperatingState::ACTIVE_TX, burst)?;
        self.push(Phase::OnAir, OperatingState::SLEEP_TX, air_time - burst)
    }

    /// From the start of the slot up to the end of the data receive window,
    /// `guards` long guard times after the expected start of the frame.
    fn await_data(&mut self, guards: usize) -> Result<(), ModelError> {
        let profile = self.profile;
        let timings = profile.timings();

        self.push(
            Phase::WakeUp,
            OperatingState::ACTIVE_SLEEP,
            timings.rx_wakeup,
        )?;
        self.push(
            Phase::Offset,
            OperatingState::SLEEP_SLEEP,
            profile.rx_margin().data - timings.rx_wakeup,
        )?;
        self.push(
            Phase::Prepare,
            OperatingState::ACTIVE_IDLE,
            timings.rx_data_prepare,
        )?;
        self.push(
            Phase::Ready,
            OperatingState::SLEEP_IDLE,
            profile.max_prepare().rx_data - timings.rx_data_prepare,
        )?;
        self.listen(profile.long_guard_time() * guards)
    }

    /// From the end of the data frame up to the end of the ACK receive
    /// window, `guards` short guard times after the expected start of the
    /// ACK.
    fn await_ack(&mut self, guards: usize) -> Result<(), ModelError> {
        let profile = self.profile;
        let timings = profile.timings();

        self.push(
            Phase::WakeUp,
            OperatingState::ACTIVE_SLEEP,
            timings.rx_ack_wakeup,
        )?;
        self.push(
            Phase::Offset,
            OperatingState::SLEEP_SLEEP,
            profile.tx_margin().ack - timings.rx_ack_wakeup,
        )?;
        self.push(
            Phase::Prepare,
            OperatingState::ACTIVE_IDLE,
            timings.rx_ack_prepare,
        )?;
        self.push(
            Phase::Ready,
            OperatingState::SLEEP_IDLE,
            profile.max_prepare().rx_ack - timings.rx_ack_prepare,
        )?;
        self.listen(profile.short_guard_time() * guards)
    }

    fn listen(&mut self, window: Duration) -> Result<(), ModelError> {
        let profile = self.profile;
        let listen_start = profile.timings().rx_listen_start;

        self.push(
            Phase::ListenStart,
            OperatingState::ACTIVE_IDLE,
            listen_start,
        )?;
        self.push(
            Phase::Listen,
            OperatingState::SLEEP_LISTEN,
            profile.rx_delay() + window - listen_start,
        )
    }

    fn receive_data(&mut self, payload: u16) -> Result<(), ModelError> {
        let profile = self.profile;
        self.receive(
            profile.air_time(payload as usize + CRC_LENGTH),
            profile.timings().rx_data_burst,
        )
    }

    fn receive_ack(&mut self) -> Result<(), ModelError> {
        let profile = self.profile;
        self.receive(profile.air_time(ACK_LENGTH), profile.timings().rx_ack_burst)
    }

    fn receive(&mut self, air_time: Duration, burst: Duration) -> Result<(), ModelError> {
        self.push(Phase::Burst, OperatingState::ACTIVE_RX, burst)?;
        self.push(Phase::OnAir, OperatingState::SLEEP_RX, air_time - burst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radio::{Calibration, TxPower};

    #[test]
    fn builder_rejects_negative_segments() {
        let p = RadioProfile::new("CC2538", TxPower::from_dbm(0)).unwrap();
        let mut builder = SlotBuilder::new(&p);
        builder
            .push(
                Phase::WakeUp,
                OperatingState::ACTIVE_SLEEP,
                Duration::from_us(10),
            )
            .unwrap();
        assert_eq!(
            builder.push(
                Phase::Offset,
                OperatingState::SLEEP_SLEEP,
                Duration::from_ns(-1)
            ),
            Err(ModelError::NegativeSegment {
                phase: Phase::Offset
            })
        );
        assert_eq!(builder.segments.len(), 1);
        assert_eq!(builder.elapsed, Duration::from_us(10));
    }

    #[test]
    fn builder_closes_the_slot() {
        let p = RadioProfile::with_calibration(
            "CC1200",
            TxPower::from_dbm(14),
            Calibration::Measured,
        )
        .unwrap();
        let mut builder = SlotBuilder::new(&p);
        builder
            .push(
                Phase::Listen,
                OperatingState::SLEEP_LISTEN,
                Duration::from_us(14_000),
            )
            .unwrap();
        let segments = builder.finish().unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].phase, Phase::Sleep);
        assert_eq!(segments[1].duration, Duration::from_us(1_000));
        assert_eq!(segments[1].current.as_na(), 12_400_500);

        let mut builder = SlotBuilder::new(&p);
        builder
            .push(
                Phase::Listen,
                OperatingState::SLEEP_LISTEN,
                Duration::from_us(15_001),
            )
            .unwrap();
        assert_eq!(builder.finish(), Err(ModelError::SlotDurationExceeded));
    }

    #[test]
    fn builder_capacity() {
        let p = RadioProfile::new("CC2538", TxPower::from_dbm(3)).unwrap();
        let mut builder = SlotBuilder::new(&p);
        for _ in 0..crate::model::MAX_SEGMENTS {
            builder
                .push(Phase::Offset, OperatingState::SLEEP_SLEEP, Duration::ZERO)
                .unwrap();
        }
        assert_eq!(
            builder.push(Phase::Offset, OperatingState::SLEEP_SLEEP, Duration::ZERO),
            Err(ModelError::TooManySegments)
        );
    }
}
