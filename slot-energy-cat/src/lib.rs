use colored::*;
use slot_energy::radio::{ChipDescriptor, CHIPS};
use slot_energy::*;
use thiserror::Error;

struct Writer<'b> {
    buffer: &'b mut String,
    indent: usize,
}

impl<'b> Writer<'b> {
    fn new(buffer: &'b mut String) -> Self {
        Self { buffer, indent: 0 }
    }

    fn increase_indent(&mut self) {
        self.indent += 2;
    }

    fn decrease_indent(&mut self) {
        self.indent -= 2;
    }

    fn write(&mut self, s: String) {
        self.buffer.push_str(&" ".repeat(self.indent));
        self.buffer.push_str(&s);
    }

    fn writeln(&mut self, s: String) {
        self.write(s);
        self.buffer.push('\n');
    }
}

#[derive(Debug, Error)]
pub enum CatError {
    #[error("{chip} at {power}: {source}")]
    Config {
        chip: String,
        power: TxPower,
        source: ConfigError,
    },
    #[error("{slot} slot with a {payload} byte payload: {source}")]
    Model {
        slot: SlotType,
        payload: u16,
        source: ModelError,
    },
}

pub type Result<T> = core::result::Result<T, CatError>;

/// Renders the output of the `slot-energy` commands.
pub struct Report {
    payload: u16,
    calibration: Calibration,
}

impl Report {
    pub fn new(payload: u16, calibration: Calibration) -> Self {
        Self {
            payload,
            calibration,
        }
    }

    /// The charge of every slot type, for every chip at each of its power
    /// settings.
    pub fn summary(&self) -> Result<String> {
        let mut buffer = String::new();
        let mut w = Writer::new(&mut buffer);

        w.writeln("Slot Energy".underline().bold().to_string());
        w.increase_indent();
        w.writeln(format!("{}: {} bytes", "payload".bold(), self.payload));
        w.writeln(format!("{}: {}", "calibration".bold(), self.calibration));
        w.decrease_indent();

        for chip in CHIPS {
            w.writeln(chip.name.underline().bold().to_string());
            w.increase_indent();

            for power in chip.tx_powers() {
                let profile = self.descriptor_profile(chip, power)?;
                w.writeln(format!("{}", power.to_string().italic()));
                w.increase_indent();

                for slot in SlotType::ALL {
                    // Slots without a data frame are reported with an empty
                    // payload.
                    let payload = if slot.carries_payload() {
                        self.payload
                    } else {
                        0
                    };

                    let energy = match profile.model().energy(slot, payload) {
                        Ok(energy) => energy.to_string().bright_blue(),
                        Err(err) => err.to_string().red(),
                    };
                    w.writeln(format!("{}: {}", slot.to_string().bold(), energy));
                }
                w.decrease_indent();
            }
            w.decrease_indent();
        }

        Ok(buffer)
    }

    /// The segments of one slot and their charge.
    pub fn segments(&self, chip: &str, power: TxPower, slot: SlotType) -> Result<String> {
        let profile = self.profile(chip, power)?;
        let segments = self.compute(&profile, slot)?;

        let mut buffer = String::new();
        let mut w = Writer::new(&mut buffer);

        // -----------------------------------------------------------------
        // Slot
        // -----------------------------------------------------------------
        w.writeln("Slot".underline().bold().to_string());
        w.increase_indent();
        w.writeln(format!("{}: {}", "radio".bold(), profile.name()));
        w.writeln(format!("{}: {}", "tx power".bold(), profile.tx_power()));
        w.writeln(format!("{}: {}", "calibration".bold(), profile.calibration()));
        w.writeln(format!("{}: {}", "slot type".bold(), slot));
        w.writeln(format!("{}: {} bytes", "payload".bold(), self.payload));
        w.decrease_indent();

        // -----------------------------------------------------------------
        // Segments
        // -----------------------------------------------------------------
        w.writeln("Segments".underline().bold().to_string());
        w.increase_indent();
        for segment in &segments {
            w.writeln(format!(
                "{}: {}, {:.3} us, {}, {}",
                segment.phase.to_string().bold(),
                segment.state,
                segment.duration.as_us_f64(),
                segment.current,
                segment.charge()
            ));
        }
        w.decrease_indent();

        // -----------------------------------------------------------------
        // Energy
        // -----------------------------------------------------------------
        w.writeln("Energy".underline().bold().to_string());
        w.increase_indent();
        w.writeln(format!(
            "{}: {}",
            "total".bold(),
            model::energy_of(&segments).to_string().bright_blue()
        ));

        Ok(buffer)
    }

    /// The current trace of one slot as CSV.
    pub fn trace(&self, chip: &str, power: TxPower, slot: SlotType) -> Result<String> {
        let profile = self.profile(chip, power)?;
        let segments = self.compute(&profile, slot)?;
        let trace = CurrentTrace::from_segments(&segments);

        let mut buffer = String::from("time_us,current_ma\n");
        for point in trace.points() {
            buffer.push_str(&format!(
                "{},{:.4}\n",
                point.time.as_us(),
                point.current.as_ma_f64()
            ));
        }

        Ok(buffer)
    }

    fn profile(&self, chip: &str, power: TxPower) -> Result<RadioProfile> {
        let profile = RadioProfile::with_calibration(chip, power, self.calibration);
        let profile = profile.map_err(|source| CatError::Config {
            chip: chip.to_string(),
            power,
            source,
        })?;
        log::debug!(
            "{} at {} with the {} calibration",
            profile.name(),
            power,
            self.calibration
        );

        Ok(profile)
    }

    fn descriptor_profile(
        &self,
        chip: &'static ChipDescriptor,
        power: TxPower,
    ) -> Result<RadioProfile> {
        RadioProfile::from_descriptor(chip, power, self.calibration).map_err(|source| {
            CatError::Config {
                chip: chip.name.to_string(),
                power,
                source,
            }
        })
    }

    fn compute(&self, profile: &RadioProfile, slot: SlotType) -> Result<Segments> {
        log::debug!("{} slot with a {} byte payload", slot, self.payload);
        profile
            .model()
            .segments(slot, self.payload)
            .map_err(|source| CatError::Model {
                slot,
                payload: self.payload,
                source,
            })
    }
}
