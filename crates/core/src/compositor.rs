//! Frame compositor: turns colors, blobs, and a timestamp into a draw list.
//!
//! The draw list is in paint order: one full-canvas linear gradient, then
//! one radial gradient per blob in definition order. Hosts composite each
//! command source-over onto the previous result and may blur the whole
//! frame afterwards; blurring is not part of the list.

use crate::blob::{Blob, BlobSet};
use crate::canvas::CanvasSize;
use crate::color::{Rgb, Rgba};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Minimum number of colors a frame needs.
pub const MIN_FRAME_COLORS: usize = 4;

const SCREENSAVER_BACKGROUND_OFFSETS: [f64; 4] = [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0];
const ICON_BACKGROUND_OFFSETS: [f64; 7] = [0.0, 0.15, 0.33, 0.5, 0.66, 0.82, 1.0];

/// Primary, primary, secondary, secondary.
const SCREENSAVER_BLOB_ALPHAS: [f64; 4] = [0.9, 0.6, 0.3, 0.1];
/// Multipliers of the blob's peak alpha.
const ICON_BLOB_FALLOFF: [f64; 5] = [1.0, 0.7, 0.4, 0.15, 0.0];
const ICON_BLOB_OFFSETS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// A color at a position along a gradient, `offset` in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba,
}

impl GradientStop {
    pub fn new(offset: f64, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// One paint operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Fills the whole canvas; stops run from `start` to `end` and pad
    /// beyond them.
    LinearGradient {
        start: DVec2,
        end: DVec2,
        stops: Vec<GradientStop>,
    },
    /// Fills the disc of `radius` around `center`; stops run from the center
    /// outwards. Nothing is painted outside the disc.
    RadialGradient {
        center: DVec2,
        radius: f64,
        stops: Vec<GradientStop>,
    },
}

impl DrawCommand {
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            DrawCommand::LinearGradient { stops, .. } => stops,
            DrawCommand::RadialGradient { stops, .. } => stops,
        }
    }
}

/// Ordered paint operations for one frame.
pub type DrawList = Vec<DrawCommand>;

/// Gradient treatment of background and blobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameStyle {
    /// Four-stop background; blobs fade from their color into the next one.
    Screensaver,
    /// Seven-stop background with midpoints; blobs fade one color to clear.
    Icon,
}

/// Builds draw lists for a fixed blob set and style.
#[derive(Debug, Clone, PartialEq)]
pub struct Compositor {
    blobs: BlobSet,
    style: FrameStyle,
}

impl Compositor {
    pub fn new(blobs: BlobSet, style: FrameStyle) -> Self {
        Self { blobs, style }
    }

    /// The animated screensaver layout.
    pub fn screensaver() -> Self {
        Self::new(BlobSet::screensaver(), FrameStyle::Screensaver)
    }

    /// The static icon layout.
    pub fn icon() -> Self {
        Self::new(BlobSet::icon(), FrameStyle::Icon)
    }

    pub fn blobs(&self) -> &BlobSet {
        &self.blobs
    }

    pub fn style(&self) -> FrameStyle {
        self.style
    }

    /// Builds the draw list for time `t` (seconds since the session began).
    ///
    /// Returns an empty list when fewer than [`MIN_FRAME_COLORS`] colors are
    /// given. The result depends only on the arguments.
    pub fn render_frame(&self, t: f64, size: CanvasSize, colors: &[Rgb]) -> DrawList {
        if colors.len() < MIN_FRAME_COLORS {
            return DrawList::new();
        }
        let mut list = Vec::with_capacity(1 + self.blobs.len());
        list.push(self.background(size, colors));
        list.extend(
            self.blobs
                .blobs()
                .iter()
                .map(|blob| self.blob_gradient(blob, t, size, colors)),
        );
        list
    }

    fn background(&self, size: CanvasSize, colors: &[Rgb]) -> DrawCommand {
        let stops = match self.style {
            FrameStyle::Screensaver => SCREENSAVER_BACKGROUND_OFFSETS
                .iter()
                .zip(colors)
                .map(|(&offset, c)| GradientStop::new(offset, c.with_alpha(1.0)))
                .collect(),
            FrameStyle::Icon => {
                let (c0, c1, c2, c3) = (colors[0], colors[1], colors[2], colors[3]);
                let banded = [
                    c0,
                    c0.midpoint(c1),
                    c1,
                    c1.midpoint(c2),
                    c2,
                    c2.midpoint(c3),
                    c3,
                ];
                ICON_BACKGROUND_OFFSETS
                    .iter()
                    .zip(banded)
                    .map(|(&offset, c)| GradientStop::new(offset, c.with_alpha(1.0)))
                    .collect()
            }
        };
        DrawCommand::LinearGradient {
            start: DVec2::ZERO,
            end: size.as_vec(),
            stops,
        }
    }

    fn blob_gradient(&self, blob: &Blob, t: f64, size: CanvasSize, colors: &[Rgb]) -> DrawCommand {
        let primary = colors[blob.color_index % colors.len()];
        let stops = match self.style {
            FrameStyle::Screensaver => {
                let secondary = colors[(blob.color_index + 1) % colors.len()];
                let hues = [primary, primary, secondary, secondary];
                SCREENSAVER_BACKGROUND_OFFSETS
                    .iter()
                    .zip(hues.iter().zip(SCREENSAVER_BLOB_ALPHAS))
                    .map(|(&offset, (c, a))| GradientStop::new(offset, c.with_alpha(a)))
                    .collect()
            }
            FrameStyle::Icon => ICON_BLOB_OFFSETS
                .iter()
                .zip(ICON_BLOB_FALLOFF)
                .map(|(&offset, k)| GradientStop::new(offset, primary.with_alpha(blob.alpha * k)))
                .collect(),
        };
        DrawCommand::RadialGradient {
            center: self.blobs.center(blob, t, size),
            radius: self.blobs.radius(blob, size),
            stops,
        }
    }
}
