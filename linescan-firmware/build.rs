//! Build script for linescan-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates camera.toml at compile time
//! - Generates the `CAMERA` constants from camera.toml

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Must match `linescan_core::config::LINE_WIDTH`; the firmware re-checks
/// the generated config against the real constant.
const LINE_WIDTH: i64 = 21;

fn main() {
    setup_linker();
    let camera = validate_config();
    generate_config(&camera);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Values read from camera.toml
struct CameraToml {
    pixel_count: i64,
    clocks_until_exposure: i64,
    margin: i64,
    stride: i64,
    time_us: i64,
    threshold: i64,
    baudrate: i64,
}

/// Validate camera.toml configuration at compile time
fn validate_config() -> CameraToml {
    // Re-run if camera.toml changes
    println!("cargo:rerun-if-changed=camera.toml");

    let config_path = Path::new("camera.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: camera.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a camera.toml configuration file.         ║\n\
            ║  Please create one in the linescan-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read camera.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in camera.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    let pixel_count = require_int(&config, "sensor", "pixel_count", 1, 1024, &mut errors);
    let clocks_until_exposure =
        require_int(&config, "sensor", "clocks_until_exposure", 0, 1024, &mut errors);
    let margin = require_int(&config, "sampling", "margin", 0, 1024, &mut errors);
    let stride = require_int(&config, "sampling", "stride", 1, 1024, &mut errors);
    // Upper bound keeps the exposure under half a 32-bit microsecond counter
    let time_us = require_int(&config, "exposure", "time_us", 1, 2_000_000_000, &mut errors);
    let threshold = require_int(&config, "display", "threshold", 0, 4095, &mut errors);
    let baudrate = require_int(&config, "display", "baudrate", 1200, 921_600, &mut errors);

    if errors.is_empty() {
        if clocks_until_exposure >= pixel_count {
            errors.push(format!(
                "[sensor] clocks_until_exposure must be below pixel_count ({})",
                pixel_count
            ));
        }

        let samples = sample_count(pixel_count, margin, stride);
        if samples == 0 {
            errors.push("[sampling] window selects no pixels".to_string());
        } else if samples > LINE_WIDTH {
            errors.push(format!(
                "[sampling] selects {} pixels, LCD line holds {}",
                samples, LINE_WIDTH
            ));
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid camera configuration                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=camera.toml validated successfully");

    CameraToml {
        pixel_count,
        clocks_until_exposure,
        margin,
        stride,
        time_us,
        threshold,
        baudrate,
    }
}

/// Read `[section] key` as an integer within `min..=max`
fn require_int(
    config: &toml::Value,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) -> i64 {
    match config.get(section).and_then(|s| s.get(key)) {
        Some(toml::Value::Integer(v)) if (min..=max).contains(v) => *v,
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
            0
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            0
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            0
        }
    }
}

/// Pixels `j` with `margin <= j <= pixel_count - margin` on the stride
fn sample_count(pixel_count: i64, margin: i64, stride: i64) -> i64 {
    let end = (pixel_count - margin).min(pixel_count - 1);
    if margin > end {
        0
    } else {
        (end - margin) / stride + 1
    }
}

/// Write `camera_config.rs` into OUT_DIR
fn generate_config(camera: &CameraToml) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("camera_config.rs")).unwrap();

    writeln!(f, "// Generated by build.rs from camera.toml").unwrap();
    writeln!(
        f,
        "pub const CAMERA: ::linescan_core::config::CameraConfig = ::linescan_core::config::CameraConfig {{\n\
         \x20   sensor: ::linescan_core::config::SensorConfig {{\n\
         \x20       pixel_count: {},\n\
         \x20       clocks_until_exposure: {},\n\
         \x20   }},\n\
         \x20   sampling: ::linescan_core::config::SamplingWindow::symmetric({}, {}, {}),\n\
         \x20   exposure_us: {},\n\
         \x20   threshold: {},\n\
         }};",
        camera.pixel_count,
        camera.clocks_until_exposure,
        camera.pixel_count,
        camera.margin,
        camera.stride,
        camera.time_us,
        camera.threshold,
    )
    .unwrap();
    writeln!(f, "pub const LCD_BAUDRATE: u32 = {};", camera.baudrate).unwrap();
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
