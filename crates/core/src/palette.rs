//! Palette catalog: the fixed set of named base-color palettes.
//!
//! Every concrete palette carries exactly four base colors. [`PaletteId::Random`]
//! is a meta-variant with no colors of its own; the
//! [`PaletteSelector`](crate::selector::PaletteSelector) resolves it to a
//! concrete palette on every roll.

use crate::color::Rgb;
use crate::error::GlowError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of base colors in every concrete palette.
pub const PALETTE_LEN: usize = 4;

/// Identifier of a catalog palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaletteId {
    Random,
    MagentaPurple,
    PinkOrange,
    OceanBlue,
    SunriseGold,
    Aurora,
}

const ALL: [PaletteId; 6] = [
    PaletteId::Random,
    PaletteId::MagentaPurple,
    PaletteId::PinkOrange,
    PaletteId::OceanBlue,
    PaletteId::SunriseGold,
    PaletteId::Aurora,
];

impl PaletteId {
    /// Every id, `Random` first, in menu order.
    pub fn all() -> &'static [PaletteId] {
        &ALL
    }

    /// The concrete palettes in catalog order.
    pub fn concrete() -> &'static [PaletteId] {
        &ALL[1..]
    }

    /// Machine name, e.g. `"oceanBlue"`.
    pub fn name(self) -> &'static str {
        match self {
            PaletteId::Random => "random",
            PaletteId::MagentaPurple => "magentaPurple",
            PaletteId::PinkOrange => "pinkOrange",
            PaletteId::OceanBlue => "oceanBlue",
            PaletteId::SunriseGold => "sunriseGold",
            PaletteId::Aurora => "aurora",
        }
    }

    /// Human-readable name, e.g. `"Ocean Blue"`.
    pub fn display_name(self) -> &'static str {
        match self {
            PaletteId::Random => "Random",
            PaletteId::MagentaPurple => "Magenta Purple",
            PaletteId::PinkOrange => "Pink Orange",
            PaletteId::OceanBlue => "Ocean Blue",
            PaletteId::SunriseGold => "Sunrise Gold",
            PaletteId::Aurora => "Aurora",
        }
    }

    /// Looks up an id by machine name or display name (case insensitive).
    pub fn from_name(name: &str) -> Result<PaletteId, GlowError> {
        let wanted = name.trim();
        ALL.iter()
            .copied()
            .find(|id| {
                id.name().eq_ignore_ascii_case(wanted)
                    || id.display_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| GlowError::UnknownPalette(name.to_string()))
    }

    /// Machine names of every id, `random` included.
    pub fn list_names() -> Vec<&'static str> {
        ALL.iter().map(|id| id.name()).collect()
    }

    pub fn is_random(self) -> bool {
        self == PaletteId::Random
    }
}

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteId {
    type Err = GlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaletteId::from_name(s)
    }
}

/// Returns the four base colors of a concrete palette.
///
/// `Random` is not a color sequence and yields `GlowError::UnknownPalette`;
/// resolve it through the selector first.
pub fn base_colors(id: PaletteId) -> Result<[Rgb; PALETTE_LEN], GlowError> {
    let colors = match id {
        PaletteId::Random => return Err(GlowError::UnknownPalette(id.name().to_string())),
        // vibrant neon purples and magentas
        PaletteId::MagentaPurple => [
            Rgb::new(1.0, 0.0, 0.8),
            Rgb::new(0.7, 0.0, 1.0),
            Rgb::new(0.5, 0.0, 0.9),
            Rgb::new(0.9, 0.2, 1.0),
        ],
        // warm sunset
        PaletteId::PinkOrange => [
            Rgb::new(1.0, 0.2, 0.5),
            Rgb::new(1.0, 0.4, 0.1),
            Rgb::new(1.0, 0.6, 0.2),
            Rgb::new(1.0, 0.1, 0.3),
        ],
        // deep sea to cyan
        PaletteId::OceanBlue => [
            Rgb::new(0.0, 0.8, 1.0),
            Rgb::new(0.0, 0.4, 0.9),
            Rgb::new(0.2, 0.6, 1.0),
            Rgb::new(0.0, 0.9, 0.8),
        ],
        PaletteId::SunriseGold => [
            Rgb::new(1.0, 0.85, 0.0),
            Rgb::new(1.0, 0.6, 0.0),
            Rgb::new(1.0, 0.9, 0.3),
            Rgb::new(1.0, 0.5, 0.1),
        ],
        // northern lights
        PaletteId::Aurora => [
            Rgb::new(0.0, 1.0, 0.6),
            Rgb::new(0.3, 0.8, 1.0),
            Rgb::new(0.6, 0.2, 1.0),
            Rgb::new(0.0, 0.9, 0.5),
        ],
    };
    Ok(colors)
}

/// An ordered sequence of colors actually rendered: a resolved palette, or
/// an interpolation between two of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ColorSequence {
    colors: Vec<Rgb>,
}

impl ColorSequence {
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    /// The unjittered, unshuffled base colors of a concrete palette.
    pub fn from_palette(id: PaletteId) -> Result<Self, GlowError> {
        Ok(Self::new(base_colors(id)?.to_vec()))
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, wrapping around the sequence length.
    pub fn wrapping(&self, index: usize) -> Option<Rgb> {
        if self.colors.is_empty() {
            return None;
        }
        Some(self.colors[index % self.colors.len()])
    }

    /// Element-wise linear interpolation toward `other` at `t`.
    ///
    /// Pairs are zipped, so the result is as long as the shorter input.
    pub fn lerp(&self, other: &ColorSequence, t: f64) -> ColorSequence {
        let colors = self
            .colors
            .iter()
            .zip(&other.colors)
            .map(|(a, b)| a.lerp(*b, t))
            .collect();
        ColorSequence { colors }
    }
}

impl From<Vec<Rgb>> for ColorSequence {
    fn from(colors: Vec<Rgb>) -> Self {
        Self::new(colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_concrete_palette_has_four_colors_in_unit_range() {
        for &id in PaletteId::concrete() {
            let colors = base_colors(id).unwrap();
            assert_eq!(colors.len(), PALETTE_LEN);
            for c in colors {
                for ch in [c.r, c.g, c.b] {
                    assert!((0.0..=1.0).contains(&ch), "{id}: channel {ch} out of range");
                }
            }
        }
    }

    #[test]
    fn random_has_no_base_colors() {
        assert!(matches!(
            base_colors(PaletteId::Random),
            Err(GlowError::UnknownPalette(_))
        ));
    }

    #[test]
    fn concrete_excludes_random_and_keeps_catalog_order() {
        let concrete = PaletteId::concrete();
        assert_eq!(concrete.len(), 5);
        assert!(!concrete.contains(&PaletteId::Random));
        assert_eq!(concrete[0], PaletteId::MagentaPurple);
        assert_eq!(concrete[4], PaletteId::Aurora);
    }

    #[test]
    fn from_name_accepts_machine_and_display_names() {
        assert_eq!(PaletteId::from_name("oceanBlue").unwrap(), PaletteId::OceanBlue);
        assert_eq!(PaletteId::from_name("Ocean Blue").unwrap(), PaletteId::OceanBlue);
        assert_eq!(PaletteId::from_name("AURORA").unwrap(), PaletteId::Aurora);
        assert_eq!("random".parse::<PaletteId>().unwrap(), PaletteId::Random);
    }

    #[test]
    fn from_name_rejects_unknown() {
        let err = PaletteId::from_name("tealWave").unwrap_err();
        assert!(err.to_string().contains("tealWave"));
    }

    #[test]
    fn names_round_trip_through_display() {
        for &id in PaletteId::all() {
            assert_eq!(PaletteId::from_name(&id.to_string()).unwrap(), id);
        }
    }

    #[test]
    fn serde_uses_camel_case_names() {
        let json = serde_json::to_string(&PaletteId::SunriseGold).unwrap();
        assert_eq!(json, "\"sunriseGold\"");
        let id: PaletteId = serde_json::from_str("\"pinkOrange\"").unwrap();
        assert_eq!(id, PaletteId::PinkOrange);
    }

    #[test]
    fn list_names_includes_random() {
        let names = PaletteId::list_names();
        assert_eq!(names.len(), 6);
        assert!(names.contains(&"random"));
        assert!(names.contains(&"magentaPurple"));
    }

    #[test]
    fn sequence_wrapping_index() {
        let seq = ColorSequence::from_palette(PaletteId::OceanBlue).unwrap();
        assert_eq!(seq.wrapping(4), seq.wrapping(0));
        assert_eq!(seq.wrapping(7), Some(seq.as_slice()[3]));
        assert_eq!(ColorSequence::new(Vec::new()).wrapping(0), None);
    }

    #[test]
    fn sequence_lerp_zips_to_shorter() {
        let a = ColorSequence::new(vec![Rgb::BLACK; 4]);
        let b = ColorSequence::new(vec![Rgb::new(1.0, 1.0, 1.0); 3]);
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.len(), 3);
        assert_eq!(mid.as_slice()[0], Rgb::new(0.5, 0.5, 0.5));
    }
}
