#![no_main]

use slot_energy::constants::MAX_PAYLOAD_SIZE;
use slot_energy::model::energy_of;
use slot_energy::radio::CHIPS;
use slot_energy::{Calibration, CurrentTrace, Duration, Instant, RadioProfile, SlotType};

use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    chip: u8,
    power: u8,
    calibration: Calibration,
    slot: SlotType,
    payload: u16,
}

fuzz_target!(|input: Input| {
    let chip = CHIPS[input.chip as usize % CHIPS.len()];
    let powers: Vec<_> = chip.tx_powers().collect();
    let power = powers[input.power as usize % powers.len()];
    let profile = RadioProfile::from_descriptor(chip, power, input.calibration).unwrap();
    let model = profile.model();

    match model.segments(input.slot, input.payload) {
        Ok(segments) => {
            assert!(segments.iter().all(|s| !s.duration.is_negative()));
            let total: Duration = segments.iter().map(|s| s.duration).sum();
            assert_eq!(total, profile.slot_duration());
            assert_eq!(
                model.energy(input.slot, input.payload),
                Ok(energy_of(&segments))
            );

            let trace = CurrentTrace::from_segments(&segments);
            assert_eq!(
                trace.end(),
                Some(Instant::from_us(profile.slot_duration().round_us()))
            );
        }
        Err(_) => assert!(input.payload as usize > MAX_PAYLOAD_SIZE),
    }
});
