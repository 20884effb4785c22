//! Canvas dimensions shared by blobs, the compositor, and rasterizers.

use crate::error::GlowError;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Size of the drawing surface in pixels (or any consistent unit).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A square canvas, as used by the icon generator.
    pub const fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    /// Builds a size from integer pixel dimensions, rejecting zero.
    pub fn from_pixels(width: u32, height: u32) -> Result<Self, GlowError> {
        if width == 0 || height == 0 {
            return Err(GlowError::InvalidDimensions);
        }
        Ok(Self::new(width as f64, height as f64))
    }

    pub fn max_side(self) -> f64 {
        self.width.max(self.height)
    }

    pub fn min_side(self) -> f64 {
        self.width.min(self.height)
    }

    pub fn as_vec(self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Maps a normalized point (canvas fractions) to canvas units.
    pub fn to_canvas(self, normalized: DVec2) -> DVec2 {
        normalized * self.as_vec()
    }
}
