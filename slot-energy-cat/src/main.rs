use clap::{Parser, Subcommand, ValueEnum};
use slot_energy::{Calibration, SlotType, TxPower};
use slot_energy_cat::{CatError, Report};

/// Per-slot charge of IEEE 802.15.4 TSCH radios.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the charge of every slot type for every radio.
    Report {
        #[command(flatten)]
        options: Options,
    },
    /// Print the segments of one slot.
    Segments {
        #[command(flatten)]
        slot: SlotArgs,
        #[command(flatten)]
        options: Options,
    },
    /// Print the current trace of one slot as CSV.
    Trace {
        #[command(flatten)]
        slot: SlotArgs,
        #[command(flatten)]
        options: Options,
    },
}

#[derive(clap::Args, Debug)]
struct SlotArgs {
    /// The radio chip, e.g. CC2538.
    #[clap(value_parser(clap::builder::NonEmptyStringValueParser::new()))]
    chip: String,
    /// The transmit power in dBm.
    #[arg(allow_negative_numbers = true)]
    power: i8,
    /// The slot type, e.g. tx-data-rx-ack.
    slot: SlotType,
}

#[derive(clap::Args, Debug)]
struct Options {
    /// Payload length in bytes, CRC excluded.
    #[arg(long, default_value_t = 125)]
    payload: u16,
    /// The current draws to use.
    #[arg(long, value_enum, default_value_t = CalibrationArg::Datasheet)]
    calibration: CalibrationArg,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CalibrationArg {
    Datasheet,
    Measured,
}

impl From<CalibrationArg> for Calibration {
    fn from(arg: CalibrationArg) -> Self {
        match arg {
            CalibrationArg::Datasheet => Calibration::Datasheet,
            CalibrationArg::Measured => Calibration::Measured,
        }
    }
}

impl Options {
    fn report(&self) -> Report {
        Report::new(self.payload, self.calibration.into())
    }
}

fn main() -> Result<(), CatError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let output = match args.command {
        Command::Report { options } => options.report().summary()?,
        Command::Segments { slot, options } => {
            options
                .report()
                .segments(&slot.chip, TxPower::from_dbm(slot.power), slot.slot)?
        }
        Command::Trace { slot, options } => {
            options
                .report()
                .trace(&slot.chip, TxPower::from_dbm(slot.power), slot.slot)?
        }
    };

    print!("{output}");
    Ok(())
}
