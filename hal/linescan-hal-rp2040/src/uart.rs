//! UART transmitter

use embassy_rp::uart::{self, Blocking, UartTx as EmbassyUartTx};
use linescan_hal::uart::{DataBits, Parity, StopBits, UartConfig, UartTx};

/// Convert a shared UART config into the embassy-rp one
pub fn rp_uart_config(config: &UartConfig) -> uart::Config {
    let mut rp = uart::Config::default();
    rp.baudrate = config.baudrate;
    rp.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    rp.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    rp.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    rp
}

/// Blocking TX-only UART
pub struct RpUartTx<'d> {
    tx: EmbassyUartTx<'d, Blocking>,
}

impl<'d> RpUartTx<'d> {
    pub fn new(tx: EmbassyUartTx<'d, Blocking>) -> Self {
        Self { tx }
    }
}

impl UartTx for RpUartTx<'_> {
    type Error = uart::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.blocking_write(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.blocking_flush()
    }
}
