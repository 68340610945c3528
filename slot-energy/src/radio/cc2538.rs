//! Texas Instruments CC2538, 2.4 GHz O-QPSK SoC.

use super::*;

pub static CC2538: ChipDescriptor = ChipDescriptor {
    name: "CC2538",
    tx_delay: Duration::from_ticks(12),
    rx_delay: Duration::ZERO,
    max_prepare: PrepareBounds {
        tx_data: Duration::from_ticks(66),
        rx_data: Duration::from_ticks(33),
        tx_ack: Duration::from_ticks(22),
        rx_ack: Duration::from_ticks(10),
    },
    // Sleep draws taken from the datasheet.
    datasheet: CalibrationTable {
        cpu_active: RadioCurrents {
            sleep: Current::from_na(13_970_000),
            idle: Current::from_na(13_970_000),
            rx: Current::from_na(26_940_000),
            listen: Current::from_na(31_140_000),
        },
        cpu_sleep: RadioCurrents {
            sleep: Current::from_na(10_060_000),
            idle: Current::from_na(10_060_000),
            rx: Current::from_na(23_160_000),
            listen: Current::from_na(27_180_000),
        },
        tx_levels: &[
            TxLevel {
                power: TxPower::from_dbm(3),
                cpu_active: Current::from_na(33_040_000),
                cpu_sleep: Current::from_na(29_010_000),
            },
            TxLevel {
                power: TxPower::from_dbm(0),
                cpu_active: Current::from_na(31_470_000),
                cpu_sleep: Current::from_na(27_550_000),
            },
        ],
    },
    measured: CalibrationTable {
        cpu_active: RadioCurrents {
            sleep: Current::from_na(18_525_300),
            idle: Current::from_na(18_525_300),
            rx: Current::from_na(32_161_300),
            listen: Current::from_na(36_088_300),
        },
        cpu_sleep: RadioCurrents {
            sleep: Current::from_na(12_169_000),
            idle: Current::from_na(12_169_000),
            rx: Current::from_na(25_527_400),
            listen: Current::from_na(29_614_300),
        },
        tx_levels: &[
            TxLevel {
                power: TxPower::from_dbm(3),
                cpu_active: Current::from_na(37_931_200),
                cpu_sleep: Current::from_na(31_472_000),
            },
            TxLevel {
                power: TxPower::from_dbm(0),
                cpu_active: Current::from_na(36_122_800),
                cpu_sleep: Current::from_na(29_677_900),
            },
        ],
    },
    timings: ChipTimings {
        tx_wakeup: Duration::from_us(105),
        tx_data_prepare: LinearTime::new(Duration::from_us(60), Duration::from_ns(875)),
        tx_settle_start: Duration::from_us(17),
        tx_data_burst: Duration::from_us(16),
        tx_ack_burst: Duration::from_us(16),
        rx_ack_wakeup: Duration::from_us(32),
        rx_ack_prepare: Duration::from_us(38),
        rx_listen_start: Duration::from_us(17),
        rx_ack_burst: Duration::from_us(16),
        tx_process_acked: Duration::from_us(225),
        tx_process_unacked: Duration::from_us(72),
        tx_process_missing_ack: Duration::from_us(44),

        rx_wakeup: Duration::from_us(126),
        rx_data_prepare: Duration::from_us(38),
        rx_data_burst: Duration::from_us(17),
        rx_parse: LinearTime::new(Duration::from_us(32), Duration::from_ns(910)),
        tx_ack_wakeup: Duration::from_us(94),
        tx_ack_prepare: Duration::from_us(153),
        rx_process_acked: Duration::from_us(94),
        rx_process_unacked: Duration::from_us(166),
        rx_idle_process: Duration::from_us(25),

        sleep_wakeup: Duration::from_us(57),
    },
};
