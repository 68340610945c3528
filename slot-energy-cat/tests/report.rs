use slot_energy::{Calibration, ConfigError, ModelError, SlotType, TxPower};
use slot_energy_cat::{CatError, Report};

use strip_ansi_escapes::strip;

fn plain(output: String) -> String {
    String::from_utf8(strip(output)).unwrap()
}

#[test]
fn summary() {
    let report = Report::new(125, Calibration::Datasheet);
    let output = plain(report.summary().unwrap());
    assert_eq!(
        output,
        "Slot Energy
  payload: 125 bytes
  calibration: datasheet
CC2538
  3 dBm
    tx-data-rx-ack: 257.43 uC
    rx-data-tx-ack: 253.14 uC
    tx-data: 236.62 uC
    rx-data: 228.72 uC
    rx-idle: 196.35 uC
    sleep: 151.12 uC
    tx-data-missing-ack: 253.28 uC
  0 dBm
    tx-data-rx-ack: 250.94 uC
    rx-data-tx-ack: 251.32 uC
    tx-data: 230.13 uC
    rx-data: 228.72 uC
    rx-idle: 196.35 uC
    sleep: 151.12 uC
    tx-data-missing-ack: 246.79 uC
CC1200
  14 dBm
    tx-data-rx-ack: 577.52 uC
    rx-data-tx-ack: 465.29 uC
    tx-data: 526.84 uC
    rx-data: 362.12 uC
    rx-idle: 240.98 uC
    sleep: 171.51 uC
    tx-data-missing-ack: 554.66 uC
  0 dBm
    tx-data-rx-ack: 407.81 uC
    rx-data-tx-ack: 417.20 uC
    tx-data: 357.12 uC
    rx-data: 362.12 uC
    rx-idle: 240.98 uC
    sleep: 171.51 uC
    tx-data-missing-ack: 384.94 uC
"
    );
}

#[test]
fn summary_measured() {
    let report = Report::new(125, Calibration::Measured);
    let output = plain(report.summary().unwrap());
    assert!(output.contains("  calibration: measured\n"));
    assert!(output.contains(
        "  14 dBm
    tx-data-rx-ack: 636.91 uC
    rx-data-tx-ack: 512.11 uC
    tx-data: 579.76 uC
    rx-data: 397.01 uC
    rx-idle: 261.15 uC
    sleep: 186.36 uC
    tx-data-missing-ack: 610.59 uC
"
    ));
}

#[test]
fn summary_with_oversized_payload() {
    let report = Report::new(200, Calibration::Datasheet);
    let output = plain(report.summary().unwrap());
    assert!(output.contains("  payload: 200 bytes\n"));
    assert!(output.contains("    tx-data-rx-ack: slot duration exceeded\n"));
    assert!(output.contains("    tx-data-rx-ack: negative ready segment\n"));
    // Slots without a data frame do not depend on the payload.
    assert!(output.contains("    sleep: 151.12 uC\n"));
    assert!(output.contains("    rx-idle: 240.98 uC\n"));
}

#[test]
fn sleep_segments() {
    let report = Report::new(0, Calibration::Datasheet);
    let output = plain(
        report
            .segments("cc2538", TxPower::from_dbm(3), SlotType::Sleep)
            .unwrap(),
    );
    assert_eq!(
        output,
        "Slot
  radio: CC2538
  tx power: 3 dBm
  calibration: datasheet
  slot type: sleep
  payload: 0 bytes
Segments
  wake-up: cpu active, radio sleep, 57.000 us, 13.9700mA, 0.7963 uC
  sleep: cpu sleep, radio sleep, 14943.000 us, 10.0600mA, 150.3266 uC
Energy
  total: 151.12 uC
"
    );
}

#[test]
fn tx_data_segments() {
    let report = Report::new(125, Calibration::Datasheet);
    let output = plain(
        report
            .segments("CC1200", TxPower::from_dbm(14), SlotType::TxData)
            .unwrap(),
    );
    assert_eq!(
        output,
        "Slot
  radio: CC1200
  tx power: 14 dBm
  calibration: datasheet
  slot type: tx-data
  payload: 125 bytes
Segments
  wake-up: cpu active, radio sleep, 105.000 us, 15.0600mA, 1.5813 uC
  offset: cpu sleep, radio sleep, 1451.396 us, 11.4200mA, 16.5749 uC
  prepare: cpu active, radio idle, 1757.000 us, 17.4900mA, 30.7299 uC
  ready: cpu sleep, radio idle, 257.160 us, 13.8200mA, 3.5540 uC
  settle start: cpu active, radio idle, 58.000 us, 17.4900mA, 1.0144 uC
  settle: cpu sleep, radio tx, 369.246 us, 88.2500mA, 32.5860 uC
  burst: cpu active, radio tx, 16.000 us, 91.9400mA, 1.4710 uC
  on air: cpu sleep, radio tx, 4080.000 us, 88.2500mA, 360.0600 uC
  process: cpu active, radio sleep, 109.000 us, 15.0600mA, 1.6415 uC
  sleep: cpu sleep, radio sleep, 6797.197 us, 11.4200mA, 77.6240 uC
Energy
  total: 526.84 uC
"
    );
}

#[test]
fn sleep_trace() {
    let report = Report::new(125, Calibration::Datasheet);
    let output = report
        .trace("CC2538", TxPower::from_dbm(3), SlotType::Sleep)
        .unwrap();
    assert_eq!(
        output,
        "time_us,current_ma
0,13.9700
1,13.9700
57,13.9700
58,10.0600
15000,10.0600
"
    );
}

#[test]
fn tx_data_rx_ack_trace() {
    let report = Report::new(125, Calibration::Measured);
    let output = report
        .trace("CC2538", TxPower::from_dbm(0), SlotType::TxDataRxAck)
        .unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 1 + 1 + 2 * 18);
    assert_eq!(lines[1], "0,18.5253");
    assert_eq!(lines[lines.len() - 1], "15000,12.1690");
}

#[test]
fn errors() {
    let report = Report::new(125, Calibration::Datasheet);

    let err = report
        .segments("CC2420", TxPower::from_dbm(0), SlotType::Sleep)
        .unwrap_err();
    assert!(matches!(
        err,
        CatError::Config {
            source: ConfigError::UnsupportedRadio,
            ..
        }
    ));
    assert_eq!(err.to_string(), "CC2420 at 0 dBm: unsupported radio");

    let err = report
        .trace("CC1200", TxPower::from_dbm(3), SlotType::Sleep)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "CC1200 at 3 dBm: unsupported transmit power"
    );

    let report = Report::new(200, Calibration::Datasheet);
    let err = report
        .segments("CC2538", TxPower::from_dbm(3), SlotType::TxDataRxAck)
        .unwrap_err();
    assert!(matches!(
        err,
        CatError::Model {
            source: ModelError::SlotDurationExceeded,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "tx-data-rx-ack slot with a 200 byte payload: slot duration exceeded"
    );
}
