//! Texas Instruments CC1200, sub-GHz transceiver driven by an external MCU.

use super::*;

pub static CC1200: ChipDescriptor = ChipDescriptor {
    name: "CC1200",
    tx_delay: Duration::from_ticks(14),
    rx_delay: Duration::ZERO,
    max_prepare: PrepareBounds {
        tx_data: Duration::from_ticks(66),
        rx_data: Duration::from_ticks(33),
        tx_ack: Duration::from_ticks(33),
        rx_ack: Duration::from_ticks(30),
    },
    datasheet: CalibrationTable {
        cpu_active: RadioCurrents {
            sleep: Current::from_na(15_060_000),
            idle: Current::from_na(17_490_000),
            rx: Current::from_na(50_630_000),
            listen: Current::from_na(40_130_000),
        },
        cpu_sleep: RadioCurrents {
            sleep: Current::from_na(11_420_000),
            idle: Current::from_na(13_820_000),
            rx: Current::from_na(46_730_000),
            listen: Current::from_na(36_180_000),
        },
        tx_levels: &[
            TxLevel {
                power: TxPower::from_dbm(14),
                cpu_active: Current::from_na(91_940_000),
                cpu_sleep: Current::from_na(88_250_000),
            },
            TxLevel {
                power: TxPower::from_dbm(0),
                cpu_active: Current::from_na(54_260_000),
                cpu_sleep: Current::from_na(50_240_000),
            },
        ],
    },
    measured: CalibrationTable {
        cpu_active: RadioCurrents {
            sleep: Current::from_na(18_597_700),
            idle: Current::from_na(21_006_700),
            rx: Current::from_na(57_322_000),
            listen: Current::from_na(43_372_900),
        },
        cpu_sleep: RadioCurrents {
            sleep: Current::from_na(12_400_500),
            idle: Current::from_na(15_032_200),
            rx: Current::from_na(50_776_900),
            listen: Current::from_na(38_289_500),
        },
        tx_levels: &[
            TxLevel {
                power: TxPower::from_dbm(14),
                cpu_active: Current::from_na(102_733_800),
                cpu_sleep: Current::from_na(96_612_300),
            },
            TxLevel {
                power: TxPower::from_dbm(0),
                cpu_active: Current::from_na(59_344_800),
                cpu_sleep: Current::from_na(53_673_200),
            },
        ],
    },
    // The MCU talks to the transceiver over SPI, hence the much longer
    // prepare and parse times.
    timings: ChipTimings {
        tx_wakeup: Duration::from_us(105),
        tx_data_prepare: LinearTime::new(Duration::from_us(738), Duration::from_ns(8_152)),
        tx_settle_start: Duration::from_us(58),
        tx_data_burst: Duration::from_us(16),
        tx_ack_burst: Duration::from_us(15),
        rx_ack_wakeup: Duration::from_us(75),
        rx_ack_prepare: Duration::from_us(587),
        rx_listen_start: Duration::from_us(58),
        rx_ack_burst: Duration::from_us(15),
        tx_process_acked: Duration::from_us(619),
        tx_process_unacked: Duration::from_us(109),
        tx_process_missing_ack: Duration::from_us(137),

        rx_wakeup: Duration::from_us(126),
        rx_data_prepare: Duration::from_us(676),
        rx_data_burst: Duration::from_us(15),
        rx_parse: LinearTime::new(Duration::from_us(220), Duration::from_ns(8_439)),
        tx_ack_wakeup: Duration::from_us(142),
        tx_ack_prepare: Duration::from_us(930),
        rx_process_acked: Duration::from_us(135),
        rx_process_unacked: Duration::from_us(268),
        rx_idle_process: Duration::from_us(118),

        sleep_wakeup: Duration::from_us(57),
    },
};
