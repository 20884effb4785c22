//! Color types used by palettes, transitions, and draw lists.
//!
//! Colors are plain RGB triples with components in [0, 1]. Blending is done
//! component-wise in that space; no gamma handling is attempted.

use serde::{Deserialize, Serialize, Serializer};

/// RGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"`, quantized to 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// RGB color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Returns the color with every component clamped to [0, 1].
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Component-wise linear interpolation. `t = 0` gives `self` exactly,
    /// `t = 1` gives `other` exactly.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        Rgb {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
        }
    }

    /// The color halfway between `self` and `other`.
    pub fn midpoint(self, other: Rgb) -> Rgb {
        self.lerp(other, 0.5)
    }

    /// Attaches an alpha value, clamped to [0, 1].
    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Quantizes to 8 bits per channel with rounding.
    pub fn to_rgb8(self) -> [u8; 3] {
        [to_u8(self.r), to_u8(self.g), to_u8(self.b)]
    }
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Drops the alpha channel.
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Component-wise linear interpolation, alpha included.
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        Rgba {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
            a: lerp(self.a, other.a, t),
        }
    }

    /// Composites `self` over `dst` with straight-alpha source-over.
    pub fn over(self, dst: Rgba) -> Rgba {
        let a = self.a + dst.a * (1.0 - self.a);
        if a <= 0.0 {
            return Rgba::TRANSPARENT;
        }
        let mix = |s: f64, d: f64| (s * self.a + d * dst.a * (1.0 - self.a)) / a;
        Rgba {
            r: mix(self.r, dst.r),
            g: mix(self.g, dst.g),
            b: mix(self.b, dst.b),
            a,
        }
    }

    /// Quantizes to 8 bits per channel with rounding.
    pub fn to_rgba8(self) -> [u8; 4] {
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

// exact at both ends, unlike a + (b - a) * t
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

fn to_u8(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = Rgb::new(0.1, 0.7, 0.33);
        let b = Rgb::new(0.9, 0.2, 0.05);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let x = Rgb::new(0.7, 0.1, 0.3);
        let y = Rgb::new(0.2, 0.9, 0.6);
        assert_eq!(x.lerp(y, 1.0), y);
        assert_eq!(
            Rgb::BLACK.with_alpha(0.3).lerp(x.with_alpha(0.8), 1.0),
            x.with_alpha(0.8)
        );
    }

    #[test]
    fn midpoint_is_channel_average() {
        let m = Rgb::new(1.0, 0.0, 0.8).midpoint(Rgb::new(0.7, 0.0, 1.0));
        assert!(approx_eq(m.r, 0.85));
        assert!(approx_eq(m.g, 0.0));
        assert!(approx_eq(m.b, 0.9));
    }

    #[test]
    fn clamped_limits_each_channel() {
        let c = Rgb::new(1.2, -0.1, 0.5).clamped();
        assert_eq!(c, Rgb::new(1.0, 0.0, 0.5));
    }

    #[test]
    fn with_alpha_clamps_alpha() {
        assert_eq!(Rgb::BLACK.with_alpha(1.5).a, 1.0);
        assert_eq!(Rgb::BLACK.with_alpha(-0.5).a, 0.0);
    }

    #[test]
    fn over_opaque_source_replaces_destination() {
        let src = Rgb::new(0.2, 0.4, 0.6).with_alpha(1.0);
        let dst = Rgb::new(1.0, 1.0, 1.0).with_alpha(1.0);
        let out = src.over(dst);
        assert!(approx_eq(out.r, 0.2) && approx_eq(out.g, 0.4) && approx_eq(out.b, 0.6));
        assert!(approx_eq(out.a, 1.0));
    }

    #[test]
    fn over_transparent_source_keeps_destination() {
        let dst = Rgb::new(0.3, 0.3, 0.3).with_alpha(1.0);
        let out = Rgba::TRANSPARENT.over(dst);
        assert!(approx_eq(out.r, 0.3));
        assert!(approx_eq(out.a, 1.0));
    }

    #[test]
    fn over_half_alpha_blends_evenly_on_opaque() {
        let src = Rgb::new(1.0, 0.0, 0.0).with_alpha(0.5);
        let dst = Rgb::new(0.0, 0.0, 1.0).with_alpha(1.0);
        let out = src.over(dst);
        assert!(approx_eq(out.r, 0.5));
        assert!(approx_eq(out.b, 0.5));
        assert!(approx_eq(out.a, 1.0));
    }

    #[test]
    fn over_two_transparent_is_transparent() {
        assert_eq!(Rgba::TRANSPARENT.over(Rgba::TRANSPARENT), Rgba::TRANSPARENT);
    }

    #[test]
    fn to_hex_clamps_out_of_range() {
        assert_eq!(Rgb::new(1.5, -0.1, 0.5).to_hex(), "#ff0080");
    }

    #[test]
    fn rgb_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(json, "\"#ff0000\"");
        let json = serde_json::to_string(&Rgb::new(0.0, 0.5, 1.0)).unwrap();
        assert_eq!(json, "\"#0080ff\"");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn lerp_stays_between_endpoints(
                a in 0.0_f64..=1.0,
                b in 0.0_f64..=1.0,
                t in 0.0_f64..=1.0,
            ) {
                let c = Rgb::new(a, a, a).lerp(Rgb::new(b, b, b), t);
                let (lo, hi) = if a < b { (a, b) } else { (b, a) };
                prop_assert!(c.r >= lo - 1e-12 && c.r <= hi + 1e-12, "{} not in [{lo}, {hi}]", c.r);
            }

            #[test]
            fn over_keeps_alpha_in_unit_interval(
                sa in 0.0_f64..=1.0,
                da in 0.0_f64..=1.0,
            ) {
                let out = Rgb::new(0.5, 0.5, 0.5)
                    .with_alpha(sa)
                    .over(Rgb::new(0.1, 0.2, 0.3).with_alpha(da));
                prop_assert!((0.0..=1.0 + 1e-12).contains(&out.a), "alpha {}", out.a);
            }
        }
    }
}
