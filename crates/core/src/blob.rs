//! Blob animation: soft radial-gradient shapes drifting over the canvas.
//!
//! A blob's position is a pure function of time and its fixed parameters:
//!
//! ```text
//! x(t) = base.x + amplitude * sin(t * freq.x + phase)
//! y(t) = base.y + amplitude * cos(t * freq.y + phase * 0.7)
//! ```
//!
//! Nothing is carried between frames, so any frame can be rendered (or
//! re-rendered) from its timestamp alone.

use crate::canvas::CanvasSize;
use glam::DVec2;

/// Drift amplitude of the screensaver blobs, in canvas fractions.
pub const SCREENSAVER_AMPLITUDE: f64 = 0.15;

/// Which canvas side a blob's radius fraction is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiusBasis {
    /// `max(width, height)`: fills a wide viewport edge to edge.
    MaxSide,
    /// `min(width, height)`: keeps blobs inside a square icon.
    MinSide,
}

/// Static description of one blob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blob {
    /// Rest position in canvas fractions (y down).
    pub base: DVec2,
    /// Oscillation frequency per axis, radians per second.
    pub freq: DVec2,
    pub phase: f64,
    /// Index of the primary color; the secondary is the next one, wrapping.
    pub color_index: usize,
    /// Radius as a fraction of the side chosen by the set's [`RadiusBasis`].
    pub radius: f64,
    /// Peak opacity. Only the icon falloff uses it.
    pub alpha: f64,
}

impl Blob {
    const fn drifting(
        base_x: f64,
        base_y: f64,
        freq_x: f64,
        freq_y: f64,
        phase: f64,
        color_index: usize,
        radius: f64,
    ) -> Self {
        Self {
            base: DVec2::new(base_x, base_y),
            freq: DVec2::new(freq_x, freq_y),
            phase,
            color_index,
            radius,
            alpha: 1.0,
        }
    }

    const fn fixed(x: f64, y: f64, radius: f64, color_index: usize, alpha: f64) -> Self {
        Self {
            base: DVec2::new(x, y),
            freq: DVec2::ZERO,
            phase: 0.0,
            color_index,
            radius,
            alpha,
        }
    }

    /// Normalized center at time `t` seconds.
    pub fn position(&self, t: f64, amplitude: f64) -> DVec2 {
        DVec2::new(
            self.base.x + amplitude * (t * self.freq.x + self.phase).sin(),
            self.base.y + amplitude * (t * self.freq.y + self.phase * 0.7).cos(),
        )
    }
}

// Corners drift a little, the inner four cover the middle.
const SCREENSAVER_BLOBS: [Blob; 8] = [
    Blob::drifting(0.0, 0.0, 0.08, 0.10, 0.0, 0, 0.8),
    Blob::drifting(1.0, 0.0, 0.10, 0.08, 1.0, 1, 0.8),
    Blob::drifting(0.0, 1.0, 0.09, 0.11, 2.0, 2, 0.8),
    Blob::drifting(1.0, 1.0, 0.11, 0.09, 3.0, 3, 0.8),
    Blob::drifting(0.5, 0.5, 0.12, 0.14, 1.5, 0, 1.0),
    Blob::drifting(0.3, 0.5, 0.14, 0.12, 2.5, 1, 0.7),
    Blob::drifting(0.7, 0.5, 0.13, 0.15, 0.5, 2, 0.7),
    Blob::drifting(0.5, 0.7, 0.15, 0.13, 3.5, 3, 0.7),
];

// Authored in y-up bitmap space; stored here flipped to y-down.
const ICON_BLOBS: [Blob; 14] = [
    // huge soft corners
    Blob::fixed(0.0, 0.0, 1.4, 0, 0.35),
    Blob::fixed(1.0, 0.0, 1.4, 1, 0.35),
    Blob::fixed(0.0, 1.0, 1.4, 2, 0.35),
    Blob::fixed(1.0, 1.0, 1.4, 3, 0.35),
    // center
    Blob::fixed(0.5, 0.5, 1.2, 0, 0.3),
    Blob::fixed(0.5, 0.5, 1.0, 2, 0.25),
    // accents
    Blob::fixed(0.25, 0.25, 0.9, 0, 0.25),
    Blob::fixed(0.75, 0.25, 0.9, 1, 0.25),
    Blob::fixed(0.25, 0.75, 0.9, 2, 0.25),
    Blob::fixed(0.75, 0.75, 0.9, 3, 0.25),
    // blending
    Blob::fixed(0.5, 0.25, 0.8, 1, 0.2),
    Blob::fixed(0.5, 0.75, 0.8, 3, 0.2),
    Blob::fixed(0.25, 0.5, 0.8, 0, 0.2),
    Blob::fixed(0.75, 0.5, 0.8, 2, 0.2),
];

/// An ordered set of blobs sharing an amplitude and radius basis.
///
/// Order is paint order: later blobs are composited over earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct BlobSet {
    blobs: Vec<Blob>,
    amplitude: f64,
    radius_basis: RadiusBasis,
}

impl BlobSet {
    pub fn new(blobs: Vec<Blob>, amplitude: f64, radius_basis: RadiusBasis) -> Self {
        Self {
            blobs,
            amplitude,
            radius_basis,
        }
    }

    /// The eight drifting screensaver blobs: four corners, four inner.
    pub fn screensaver() -> Self {
        Self::new(
            SCREENSAVER_BLOBS.to_vec(),
            SCREENSAVER_AMPLITUDE,
            RadiusBasis::MaxSide,
        )
    }

    /// The fourteen static icon blobs.
    pub fn icon() -> Self {
        Self::new(ICON_BLOBS.to_vec(), 0.0, RadiusBasis::MinSide)
    }

    /// Returns the set with a different drift amplitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn radius_basis(&self) -> RadiusBasis {
        self.radius_basis
    }

    /// Center of `blob` at time `t`, in canvas units.
    pub fn center(&self, blob: &Blob, t: f64, size: CanvasSize) -> DVec2 {
        size.to_canvas(blob.position(t, self.amplitude))
    }

    /// Radius of `blob` in canvas units.
    pub fn radius(&self, blob: &Blob, size: CanvasSize) -> f64 {
        let side = match self.radius_basis {
            RadiusBasis::MaxSide => size.max_side(),
            RadiusBasis::MinSide => size.min_side(),
        };
        blob.radius * side
    }
}
