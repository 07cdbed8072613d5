//! Palette - Shading glyphs for the four depth levels

use crate::config::{ConfigError, ShadeOrder, ShadingConfig, PALETTE_LEN};

/// Shading palette, indexed by shade level (0 = farthest, 3 = nearest)
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    glyphs: [String; PALETTE_LEN],
}

impl Palette {
    /// Number of shade levels
    pub const LEVELS: usize = PALETTE_LEN;

    /// Build from glyphs ordered sparsest to densest
    pub fn new(glyphs: [String; PALETTE_LEN], order: ShadeOrder) -> Self {
        let mut glyphs = glyphs;
        if order == ShadeOrder::NearDark {
            glyphs.reverse();
        }
        Self { glyphs }
    }

    pub fn from_config(shading: &ShadingConfig) -> Result<Self, ConfigError> {
        let glyphs: [String; PALETTE_LEN] = shading
            .glyphs
            .clone()
            .try_into()
            .map_err(|g: Vec<String>| ConfigError::PaletteSize(g.len()))?;
        Ok(Self::new(glyphs, shading.order))
    }

    /// Glyph for a shade level; levels past the end use the nearest glyph
    pub fn glyph(&self, shade: u8) -> &str {
        let idx = (shade as usize).min(Self::LEVELS - 1);
        &self.glyphs[idx]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(
            ["░", "▒", "▓", "█"].map(String::from),
            ShadeOrder::NearBright,
        )
    }
}
