//! App icon composition: a static, denser variant of the screensaver frame.
//!
//! The icon uses its own, slightly more saturated color table and the
//! fourteen-blob [`Compositor::icon`] layout. Only four palettes have icon
//! colors.

use crate::canvas::CanvasSize;
use crate::color::Rgb;
use crate::compositor::{Compositor, DrawList};
use crate::error::GlowError;
use crate::palette::PaletteId;

/// Palette used when none is named.
pub const DEFAULT_ICON_PALETTE: PaletteId = PaletteId::MagentaPurple;
/// Default icon edge length in pixels.
pub const DEFAULT_ICON_SIZE: u32 = 1280;

const ICON_PALETTES: [PaletteId; 4] = [
    PaletteId::Aurora,
    PaletteId::MagentaPurple,
    PaletteId::OceanBlue,
    PaletteId::PinkOrange,
];

/// Icon colors for `id`, or `UnknownPalette` if the icon has none.
pub fn icon_colors(id: PaletteId) -> Result<[Rgb; 4], GlowError> {
    let colors = match id {
        PaletteId::MagentaPurple => [
            Rgb::new(1.0, 0.0, 0.75),
            Rgb::new(0.75, 0.0, 1.0),
            Rgb::new(0.55, 0.1, 0.95),
            Rgb::new(0.95, 0.3, 0.9),
        ],
        PaletteId::PinkOrange => [
            Rgb::new(1.0, 0.15, 0.45),
            Rgb::new(1.0, 0.45, 0.15),
            Rgb::new(1.0, 0.55, 0.25),
            Rgb::new(1.0, 0.2, 0.35),
        ],
        PaletteId::OceanBlue => [
            Rgb::new(0.0, 0.85, 1.0),
            Rgb::new(0.1, 0.45, 0.95),
            Rgb::new(0.25, 0.65, 1.0),
            Rgb::new(0.0, 0.95, 0.85),
        ],
        PaletteId::Aurora => [
            Rgb::new(0.1, 0.95, 0.55),
            Rgb::new(0.35, 0.85, 1.0),
            Rgb::new(0.55, 0.25, 0.95),
            Rgb::new(0.0, 0.85, 0.45),
        ],
        PaletteId::Random | PaletteId::SunriseGold => {
            return Err(GlowError::UnknownPalette(id.name().to_string()))
        }
    };
    Ok(colors)
}

/// Palette names accepted by the icon generator, sorted alphabetically.
pub fn icon_palette_names() -> Vec<&'static str> {
    ICON_PALETTES.iter().map(|id| id.name()).collect()
}

/// Resolves an icon palette by its machine name (exact match).
pub fn icon_palette(name: &str) -> Result<PaletteId, GlowError> {
    ICON_PALETTES
        .iter()
        .copied()
        .find(|id| id.name() == name)
        .ok_or_else(|| GlowError::UnknownPalette(name.to_string()))
}

/// File name used when no output path is given, e.g. `AppIcon_aurora.png`.
pub fn default_icon_path(palette_name: &str) -> String {
    format!("AppIcon_{palette_name}.png")
}

/// Draw list for a square icon of `side` pixels.
pub fn icon_draw_list(id: PaletteId, side: u32) -> Result<DrawList, GlowError> {
    let colors = icon_colors(id)?;
    let size = CanvasSize::from_pixels(side, side)?;
    Ok(Compositor::icon().render_frame(0.0, size, &colors))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_sorted() {
        let names = icon_palette_names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names, vec!["aurora", "magentaPurple", "oceanBlue", "pinkOrange"]);
    }

    #[test]
    fn every_listed_palette_has_colors() {
        for name in icon_palette_names() {
            let id = icon_palette(name).unwrap();
            let colors = icon_colors(id).unwrap();
            assert!(colors
                .iter()
                .all(|c| [c.r, c.g, c.b].iter().all(|ch| (0.0..=1.0).contains(ch))));
        }
    }

    #[test]
    fn sunrise_gold_and_random_have_no_icon() {
        assert!(icon_colors(PaletteId::SunriseGold).is_err());
        assert!(icon_palette("random").is_err());
        assert!(icon_palette("sunriseGold").is_err());
    }

    #[test]
    fn icon_palette_names_are_exact() {
        assert!(icon_palette("Aurora").is_err());
        assert_eq!(icon_palette("aurora").unwrap(), PaletteId::Aurora);
    }

    #[test]
    fn default_path_embeds_palette_name() {
        assert_eq!(default_icon_path("oceanBlue"), "AppIcon_oceanBlue.png");
    }

    #[test]
    fn icon_draw_list_has_all_layers() {
        let list = icon_draw_list(DEFAULT_ICON_PALETTE, 256).unwrap();
        assert_eq!(list.len(), 15);
    }

    #[test]
    fn zero_size_icon_is_rejected() {
        assert!(matches!(
            icon_draw_list(PaletteId::Aurora, 0),
            Err(GlowError::InvalidDimensions)
        ));
    }
}
