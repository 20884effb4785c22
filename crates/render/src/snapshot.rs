//! PNG output of rasterized draw lists.
//!
//! Feature-gated behind `png` (default on) so embedders that only need the
//! pixel buffer don't pull in the `image` crate.

use gallery_glow_core::compositor::DrawList;
use gallery_glow_core::error::GlowError;
use std::path::Path;
use tracing::info;

use crate::pixel::rasterize;

/// Rasterizes `list` at `width x height` and writes it as a PNG.
///
/// Returns `GlowError::InvalidDimensions` for a zero or oversized canvas,
/// or `GlowError::Io` on write failure.
pub fn write_png(list: &DrawList, width: u32, height: u32, path: &Path) -> Result<(), GlowError> {
    if width == 0 || height == 0 {
        return Err(GlowError::InvalidDimensions);
    }
    let w = usize::try_from(width).map_err(|_| GlowError::InvalidDimensions)?;
    let h = usize::try_from(height).map_err(|_| GlowError::InvalidDimensions)?;
    w.checked_mul(h)
        .and_then(|n| n.checked_mul(4))
        .ok_or(GlowError::InvalidDimensions)?;

    let rgba = rasterize(list, w, h);
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| GlowError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| GlowError::Io(e.to_string()))?;
    info!(path = %path.display(), width, height, commands = list.len(), "wrote png");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_glow_core::icon::icon_draw_list;
    use gallery_glow_core::PaletteId;

    #[test]
    fn write_png_round_trip() {
        let list = icon_draw_list(PaletteId::OceanBlue, 16).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");

        write_png(&list, 16, 16, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 16);
        assert!(img.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn write_png_rejects_zero_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        let result = write_png(&Vec::new(), 0, 16, &path);
        assert!(matches!(result, Err(GlowError::InvalidDimensions)));
        assert!(!path.exists());
    }

    #[test]
    fn write_png_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let result = write_png(&Vec::new(), 4, 4, &path);
        assert!(matches!(result, Err(GlowError::Io(_))));
    }
}
