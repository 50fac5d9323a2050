//! Linescan - TSL1401 line-scan camera firmware
//!
//! Main firmware binary for RP2040-based boards. Bit-bangs the sensor's
//! SI/CLK protocol, digitises a decimated slice of each scan and draws it
//! as a bright/dark line on a serial LCD.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::Pull;
use embassy_rp::uart::UartTx;
use {defmt_rtt as _, panic_probe as _};

use linescan_core::config::LINE_WIDTH;
use linescan_core::AcquisitionEngine;
use linescan_drivers::display::SerialLcd;
use linescan_drivers::sensor::Tsl1401;
use linescan_hal_rp2040::{output, rp_uart_config, RpAnalogInput, RpUartTx, SystemTicks};

use crate::config::{CAMERA, LCD_UART};

mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Linescan firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Sensor control lines (board-specific: SI=GPIO2, CLK=GPIO3)
    let si = output(p.PIN_2);
    let clk = output(p.PIN_3);

    // Sensor analog output (board-specific: AO=GPIO26/ADC0)
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let ao = RpAnalogInput::new(adc, Channel::new_pin(p.PIN_26, Pull::None));

    let sensor = Tsl1401::new(si, clk, ao);
    info!("TSL1401 initialized");

    // Serial LCD, TX only (board-specific: GPIO0)
    let lcd_tx = UartTx::new_blocking(p.UART0, p.PIN_0, rp_uart_config(&LCD_UART));
    let lcd = SerialLcd::new(RpUartTx::new(lcd_tx), LINE_WIDTH as u8);
    info!("LCD UART initialized at {} baud", LCD_UART.baudrate);

    info!(
        "Camera config: {} pixels, exposure start at pulse {}, window {}..={} step {} ({} samples), threshold {}",
        CAMERA.sensor.pixel_count,
        CAMERA.sensor.clocks_until_exposure,
        CAMERA.sampling.start,
        CAMERA.sampling.end,
        CAMERA.sampling.stride,
        CAMERA.samples_per_frame(),
        CAMERA.threshold
    );

    let camera = match AcquisitionEngine::new(sensor, SystemTicks::new(), lcd, &CAMERA) {
        Ok(camera) => camera,
        Err(e) => {
            error!("Invalid camera configuration: {:?}", e);
            loop {
                cortex_m::asm::wfi();
            }
        }
    };

    spawner.spawn(tasks::camera_task(camera)).unwrap();
}
