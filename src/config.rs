//! Configuration for termtorus.
//!
//! This module provides:
//! - The immutable `Config` value handed to the sampler, rotator and rasterizer
//! - The built-in settings document compiled into the binary
//! - Validation of radii, grid size, angle and shading palette
//!
//! # Built-in Settings
//!
//! The settings live in `termtorus.toml` at the crate root and are embedded
//! with `include_str!`, so every tunable is fixed at compile time:
//!
//! ```toml
//! [torus]
//! major_radius = 0.6
//! minor_radius = 0.2
//! grid_size = 500
//!
//! [rotation]
//! theta = 0.1
//!
//! [shading]
//! glyphs = ["░", "▒", "▓", "█"]
//! order = "near-bright"
//! ```

use serde::Deserialize;
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

/// Settings document compiled into the binary
const BUILTIN: &str = include_str!("../termtorus.toml");

/// Number of shading levels in a palette
pub const PALETTE_LEN: usize = 4;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid {name} radius: {value}")]
    InvalidRadius { name: &'static str, value: f32 },

    #[error("Grid size must be at least 1")]
    EmptyGrid,

    #[error("Invalid rotation angle: {0}")]
    InvalidAngle(f32),

    #[error("Palette needs exactly 4 glyphs, got {0}")]
    PaletteSize(usize),

    #[error("Glyph {glyph:?} is {width} cells wide, expected 1")]
    GlyphWidth { glyph: String, width: usize },
}

/// Main configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Torus geometry
    pub torus: TorusConfig,
    /// Per-frame rotation
    pub rotation: RotationConfig,
    /// Depth shading
    pub shading: ShadingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            torus: TorusConfig::default(),
            rotation: RotationConfig::default(),
            shading: ShadingConfig::default(),
        }
    }
}

/// Torus geometry configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TorusConfig {
    /// Distance from the central axis to the tube center (R)
    pub major_radius: f32,
    /// Tube radius (r)
    pub minor_radius: f32,
    /// Samples per axis (N)
    pub grid_size: u32,
}

impl Default for TorusConfig {
    fn default() -> Self {
        Self {
            major_radius: 0.6,
            minor_radius: 0.2,
            grid_size: 500,
        }
    }
}

/// Rotation configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Radians per frame about each axis
    pub theta: f32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self { theta: 0.1 }
    }
}

/// Which end of the palette nearer points use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShadeOrder {
    /// Nearer points get denser glyphs
    #[default]
    NearBright,
    /// Nearer points get sparser glyphs
    NearDark,
}

/// Shading configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShadingConfig {
    /// Glyphs ordered sparsest to densest
    pub glyphs: Vec<String>,
    pub order: ShadeOrder,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            glyphs: ["░", "▒", "▓", "█"].iter().map(|s| s.to_string()).collect(),
            order: ShadeOrder::NearBright,
        }
    }
}

impl Config {
    /// Load the settings compiled into the binary
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml(BUILTIN)
    }

    /// Parse and validate a settings document
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value the pipeline relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_radius("major", self.torus.major_radius)?;
        check_radius("minor", self.torus.minor_radius)?;

        if self.torus.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if !self.rotation.theta.is_finite() {
            return Err(ConfigError::InvalidAngle(self.rotation.theta));
        }

        if self.shading.glyphs.len() != PALETTE_LEN {
            return Err(ConfigError::PaletteSize(self.shading.glyphs.len()));
        }
        for glyph in &self.shading.glyphs {
            let width = glyph.width();
            if width != 1 {
                return Err(ConfigError::GlyphWidth {
                    glyph: glyph.clone(),
                    width,
                });
            }
        }

        Ok(())
    }

    /// Half-width of the sampling and projection domain (R + r)
    pub fn extent(&self) -> f32 {
        self.torus.major_radius + self.torus.minor_radius
    }
}

fn check_radius(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRadius { name, value })
    }
}
