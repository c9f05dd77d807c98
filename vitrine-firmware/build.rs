//! Build script for vitrine-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml and bakes it into the image as a constant

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use vitrine_core::config::{AudioConfig, ConsoleConfig, DisplayConfig, TouchConfig};
use vitrine_core::BoardConfig;

/// SRAM the frame and audio arenas may take; the rest is stack and statics
const ARENA_BUDGET: usize = 232 * 1024;

fn main() {
    setup_linker();
    let board = validate_config();
    write_board_config(&board);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse and validate board.toml
fn validate_config() -> BoardConfig {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml configuration file.          ║\n\
            ║  Please create one in the vitrine-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let board: BoardConfig = match toml::from_str(&config_content) {
        Ok(board) => board,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid board.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    if let Err(e) = board.validate() {
        errors.push(format!("Invalid board configuration: {:?}", e));
    }
    let arena = arena_bytes(&board);
    if arena > ARENA_BUDGET {
        errors.push(format!(
            "Frame and audio arenas need {} bytes, only {} fit in SRAM",
            arena, ARENA_BUDGET
        ));
        errors.push("Reduce display.height or audio.buffers".to_string());
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml validation failed                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&errors.join("\n"))
        );
    }

    println!("cargo:warning=board.toml validated successfully");
    board
}

/// Bytes of SRAM taken by both frame buffers and the audio pool
fn arena_bytes(board: &BoardConfig) -> usize {
    let frames = 2 * board.display.frame_len();
    let audio = usize::from(board.audio.buffers) * usize::from(board.audio.buffer_samples);
    (frames + audio) * 2
}

/// Format error message lines for the box display
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

/// Write `OUT_DIR/board_config.rs` holding the validated configuration
fn write_board_config(board: &BoardConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("board_config.rs")).unwrap();

    writeln!(f, "// Generated by build.rs from board.toml").unwrap();
    writeln!(f, "pub const BOARD: BoardConfig = BoardConfig {{").unwrap();
    writeln!(f, "    display: {},", display_literal(&board.display)).unwrap();
    writeln!(f, "    touch: {},", touch_literal(&board.touch)).unwrap();
    writeln!(f, "    audio: {},", audio_literal(&board.audio)).unwrap();
    writeln!(f, "    console: {},", console_literal(&board.console)).unwrap();
    writeln!(f, "}};").unwrap();
}

fn display_literal(d: &DisplayConfig) -> String {
    format!(
        "DisplayConfig {{ width: {}, height: {}, stride: {}, spi_hz: {}, brightness: {:#06x}, clear_color: {:#08x} }}",
        d.width, d.height, d.stride, d.spi_hz, d.brightness, d.clear_color
    )
}

fn touch_literal(t: &TouchConfig) -> String {
    format!(
        "TouchConfig {{ enabled: {}, address: {:#04x}, i2c_hz: {}, reset_pulse_ms: {}, boot_wait_ms: {} }}",
        t.enabled, t.address, t.i2c_hz, t.reset_pulse_ms, t.boot_wait_ms
    )
}

fn audio_literal(a: &AudioConfig) -> String {
    format!(
        "AudioConfig {{ enabled: {}, sample_rate: {}, buffer_samples: {}, buffers: {}, primed: {}, \
         pwm_top: {}, divider_int: {}, divider_frac: {} }}",
        a.enabled,
        a.sample_rate,
        a.buffer_samples,
        a.buffers,
        a.primed,
        a.pwm_top,
        a.divider_int,
        a.divider_frac
    )
}

fn console_literal(c: &ConsoleConfig) -> String {
    format!(
        "ConsoleConfig {{ rows: {}, line_width: {}, frame_rows: {}, row_step: {}, color: {:#08x} }}",
        c.rows, c.line_width, c.frame_rows, c.row_step, c.color
    )
}
