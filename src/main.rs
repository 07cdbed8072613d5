//! termtorus - A rotating torus in the terminal
//!
//! termtorus samples a torus surface into a point cloud, spins it with a
//! fixed rotation every frame and draws it with shaded block characters,
//! using a per-cell depth buffer so nearer points hide farther ones.
//!
//! # Pipeline
//!
//! ```text
//! Config ─> TorusSampler ─> Mesh
//!                            │  every frame:
//!                            ├─ rotate (RotationMatrix)
//!                            ├─ sort back to front
//!                            └─ Rasterizer ─> FrameBuffer ─> TerminalOutput
//! ```
//!
//! # Running
//!
//! ```text
//! termtorus          # runs until interrupted (Ctrl+C)
//! ```
//!
//! All settings are compiled in from `termtorus.toml`. The terminal size is
//! read once at startup; resizing during a run is not followed.

mod animation;
mod config;
mod geometry;
mod render;

use std::io;

use anyhow::Context;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::animation::Animation;
use crate::config::Config;
use crate::render::{terminal_size, TerminalOutput};

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> anyhow::Result<()> {
    init_logging();
    info!("termtorus {} starting...", VERSION);

    let result = run();
    if let Err(ref e) = result {
        error!("termtorus stopped: {:#}", e);
    }
    result
}

fn run() -> anyhow::Result<()> {
    let config = Config::builtin().context("Built-in settings are invalid")?;

    let size = terminal_size()?;
    info!("Terminal size: {}x{}", size.cols, size.rows);

    let mut animation = Animation::new(&config, size)?;

    let stdout = io::stdout();
    let mut out = TerminalOutput::new(io::BufWriter::with_capacity(65536, stdout.lock()));
    animation.run(&mut out)?;

    Ok(())
}

/// Log to `~/.termtorus/termtorus.log`; stdout carries the frames
fn init_logging() {
    let log_path = home_dir()
        .map(|h| h.join(".termtorus").join("termtorus.log"))
        .unwrap_or_else(|| std::path::PathBuf::from("termtorus.log"));

    // Create log directory if needed
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    // Open log file (append mode)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::INFO)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

// Get home directory
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
