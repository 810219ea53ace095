//! Build script for monoline-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml at compile time and turns it into constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Largest serial clock the PCD8544 accepts
const MAX_SPI_FREQUENCY: i64 = 4_000_000;

const MODES: [(&str, &str); 4] = [
    ("blank", "Blank"),
    ("all_on", "AllOn"),
    ("normal", "Normal"),
    ("inverse", "Inverse"),
];

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);
    let settings = validate_config();
    generate_config(&out_dir, &settings);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Values pulled out of display.toml
struct Settings {
    contrast: i64,
    temp_coeff: i64,
    bias: i64,
    mode: &'static str,
    spi_frequency: i64,
    backlight: bool,
}

/// Validate display.toml configuration at compile time
fn validate_config() -> Settings {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a display.toml file with the panel        ║\n\
            ║  settings. Please create one in the monoline-firmware directory. ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in display.toml                      ║\n\
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

    let lcd = config.get("lcd");
    if lcd.is_none() {
        errors.push("Missing [lcd] section".to_string());
    }

    let contrast = int_in_range(lcd, "lcd", "contrast", 0x3C, 0, 0x7F, &mut errors);
    let temp_coeff = int_in_range(lcd, "lcd", "temp_coeff", 0, 0, 3, &mut errors);
    let bias = int_in_range(lcd, "lcd", "bias", 3, 0, 7, &mut errors);
    let mode = validate_mode(lcd, &mut errors);

    let spi_frequency = int_in_range(
        config.get("spi"),
        "spi",
        "frequency",
        MAX_SPI_FREQUENCY,
        1,
        MAX_SPI_FREQUENCY,
        &mut errors,
    );

    let backlight = match config.get("backlight").and_then(|b| b.get("enabled")) {
        None => false,
        Some(toml::Value::Boolean(on)) => *on,
        Some(_) => {
            errors.push("backlight.enabled must be true or false".to_string());
            false
        }
    };

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml validation failed                           ║\n\
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

    println!("cargo:warning=display.toml validated successfully");

    Settings {
        contrast,
        temp_coeff,
        bias,
        mode,
        spi_frequency,
        backlight,
    }
}

/// Read an optional integer key and check its range
fn int_in_range(
    section: Option<&toml::Value>,
    section_name: &str,
    key: &str,
    default: i64,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) -> i64 {
    let Some(value) = section.and_then(|s| s.get(key)) else {
        return default;
    };
    match value.as_integer() {
        Some(v) if (min..=max).contains(&v) => v,
        Some(v) => {
            errors.push(format!(
                "{}.{} = {} is outside {}..={}",
                section_name, key, v, min, max
            ));
            default
        }
        None => {
            errors.push(format!("{}.{} must be an integer", section_name, key));
            default
        }
    }
}

/// Map the mode string onto a `DisplayMode` variant name
fn validate_mode(lcd: Option<&toml::Value>, errors: &mut Vec<String>) -> &'static str {
    let Some(value) = lcd.and_then(|s| s.get("mode")) else {
        return "Normal";
    };
    let name = value.as_str().unwrap_or_default();
    match MODES.iter().find(|(key, _)| *key == name) {
        Some((_, variant)) => *variant,
        None => {
            errors.push(format!(
                "lcd.mode = {:?}; expected blank, all_on, normal or inverse",
                name
            ));
            "Normal"
        }
    }
}

/// Write the validated settings as Rust constants
fn generate_config(out_dir: &Path, settings: &Settings) {
    let code = format!(
        "/// Panel settings from display.toml\n\
         pub const LCD_CONFIG: LcdConfig = LcdConfig {{\n    \
             contrast: {:#04x},\n    \
             temp_coeff: {},\n    \
             bias: {},\n    \
             mode: DisplayMode::{},\n\
         }};\n\n\
         /// SPI clock in Hz\n\
         pub const SPI_FREQUENCY: u32 = {};\n\n\
         /// Backlight state at boot\n\
         pub const BACKLIGHT_ON: bool = {};\n",
        settings.contrast,
        settings.temp_coeff,
        settings.bias,
        settings.mode,
        settings.spi_frequency,
        settings.backlight,
    );

    let mut f = File::create(out_dir.join("display_config.rs")).unwrap();
    f.write_all(code.as_bytes()).unwrap();
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
