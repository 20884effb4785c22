//! Pure-computation rasterization of a [`DrawList`] into an RGBA8 buffer.
//!
//! This module is always available (no feature gate) so hosts that blit
//! their own pixels can share it with the `png` snapshot path.

use gallery_glow_core::color::Rgba;
use gallery_glow_core::compositor::{DrawCommand, DrawList, GradientStop};
use glam::DVec2;

/// Samples a stop list at `t`, clamping to the end stops.
///
/// Colors and alpha are interpolated linearly between neighboring stops.
/// An empty stop list is transparent.
pub fn sample_stops(stops: &[GradientStop], t: f64) -> Rgba {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Rgba::TRANSPARENT,
    };
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= 0.0 {
                return b.color;
            }
            return a.color.lerp(b.color, (t - a.offset) / span);
        }
    }
    last.color
}

/// Color a command contributes at point `p`, or `None` outside its shape.
fn shade(cmd: &DrawCommand, p: DVec2) -> Option<Rgba> {
    match cmd {
        DrawCommand::LinearGradient { start, end, stops } => {
            let axis = *end - *start;
            let len_sq = axis.length_squared();
            let t = if len_sq > 0.0 {
                (p - *start).dot(axis) / len_sq
            } else {
                0.0
            };
            Some(sample_stops(stops, t))
        }
        DrawCommand::RadialGradient {
            center,
            radius,
            stops,
        } => {
            if *radius <= 0.0 {
                return None;
            }
            let t = p.distance(*center) / radius;
            (t <= 1.0).then(|| sample_stops(stops, t))
        }
    }
}

/// Composites `list` source-over onto a transparent `width x height`
/// canvas and returns RGBA8 bytes, row-major from the top-left corner.
///
/// Pixels are sampled at their centers.
pub fn rasterize(list: &DrawList, width: usize, height: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let p = DVec2::new(x as f64 + 0.5, y as f64 + 0.5);
            let pixel = list
                .iter()
                .filter_map(|cmd| shade(cmd, p))
                .fold(Rgba::TRANSPARENT, |dst, src| src.over(dst));
            out.extend_from_slice(&pixel.to_rgba8());
        }
    }
    out
}
