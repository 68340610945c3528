use std::collections::BTreeMap;
use std::env;
use std::fmt::Write;
use std::path::PathBuf;

fn main() {
    // (Variable, Type, Default value)
    let mut configs: BTreeMap<&str, (&str, &str)> = BTreeMap::from([
        (
            "TS_SLOT_DURATION",
            ("Duration", "Duration::from_us(15_000)"),
        ),
        ("TS_TX_OFFSET", ("Duration", "Duration::from_ticks(131)")),
        (
            "TS_TX_ACK_DELAY",
            ("Duration", "Duration::from_ticks(151)"),
        ),
        (
            "TS_LONG_GUARD_TIME",
            ("Duration", "Duration::from_ticks(43)"),
        ),
        (
            "TS_SHORT_GUARD_TIME",
            ("Duration", "Duration::from_ticks(16)"),
        ),
        ("BYTE_DURATION", ("Duration", "Duration::from_us(32)")),
        ("ACK_LENGTH", ("usize", "27")),
        ("CRC_LENGTH", ("usize", "2")),
    ]);

    // Make sure we get rerun if needed
    println!("cargo:rerun-if-changed=build.rs");
    for name in configs.keys() {
        println!("cargo:rerun-if-env-changed=SLOT_ENERGY_{name}");
    }

    // Collect environment variables
    let mut data = String::new();
    // Write preamble
    writeln!(data, "use crate::time::Duration;").unwrap();

    for (var, value) in std::env::vars() {
        if let Some(name) = var.strip_prefix("SLOT_ENERGY_") {
            // discard from the map as a way of consuming the setting
            let Some((_, (ty, _))) = configs.remove_entry(name) else {
                panic!("Wrong configuration name {name}");
            };

            writeln!(data, "pub const {name}: {ty} = {value};").unwrap();
        }
    }

    // Take the remaining configs and write the default value to the file
    for (name, (ty, value)) in configs.iter() {
        writeln!(data, "pub const {name}: {ty} = {value};").unwrap();
    }

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").unwrap());
    let out_file = out_dir.join("config.rs");
    std::fs::write(out_file, data).unwrap();
}
