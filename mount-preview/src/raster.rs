use std::sync::Arc;

use png::{BitDepth, ColorType, Encoder};
use thiserror::Error;

/// Largest pixmap `render_png` will allocate (4 bytes per pixel).
pub const MAX_PIXELS: u64 = 64 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("cannot allocate a {width}x{height} pixmap")]
    PixmapAlloc { width: u32, height: u32 },

    #[error("PNG encoding failed")]
    Png(#[from] png::EncodingError),
}

// Shared PNG encoder: RGBA -> PNG bytes (deterministic for same input)
pub fn encode_rgba_to_png_bytes(
    width: u32,
    height: u32,
    rgba: &[u8],
) -> Result<Vec<u8>, png::EncodingError> {
    let mut buf = Vec::new();
    {
        let mut enc = Encoder::new(&mut buf, width, height);
        enc.set_color(ColorType::Rgba);
        enc.set_depth(BitDepth::Eight);
        let mut writer = enc.write_header()?;
        writer.write_image_data(rgba)?;
    }
    Ok(buf)
}

/// Rasterise a preview SVG at its own pixel size and return PNG bytes.
///
/// Labels use whatever system fonts are installed; without any, the drawing
/// renders without text. Sizes above [`MAX_PIXELS`] are refused before any
/// buffer is allocated.
pub fn render_png(svg: &str, width: u32, height: u32) -> Result<Vec<u8>, PreviewError> {
    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return Err(PreviewError::PixmapAlloc { width, height });
    }
    let mut opt = usvg::Options::default();
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    if fontdb.faces().next().is_none() {
        log::warn!("no system fonts found; preview labels will be missing");
    }
    opt.fontdb = Arc::new(fontdb);
    let tree =
        usvg::Tree::from_str(svg, &opt).map_err(|e| PreviewError::SvgParse(e.to_string()))?;
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(PreviewError::PixmapAlloc { width, height })?;
    let mut pm = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pm);
    Ok(encode_rgba_to_png_bytes(width, height, pixmap.data())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn encodes_png_header() {
        let rgba = vec![255u8; 4 * 3 * 2];
        let bytes = encode_rgba_to_png_bytes(3, 2, &rgba).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
        // deterministic
        assert_eq!(bytes, encode_rgba_to_png_bytes(3, 2, &rgba).unwrap());
    }

    #[test]
    fn renders_simple_svg() {
        let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"4\" height=\"4\"><rect width=\"4\" height=\"4\" fill=\"#f00\"/></svg>";
        let bytes = render_png(svg, 4, 4).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn rejects_invalid_svg_and_empty_pixmap() {
        assert!(matches!(
            render_png("not svg", 4, 4),
            Err(PreviewError::SvgParse(_))
        ));
        let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"4\" height=\"4\"/>";
        assert!(matches!(
            render_png(svg, 0, 4),
            Err(PreviewError::PixmapAlloc { .. })
        ));
    }

    #[test]
    fn refuses_oversized_pixmap() {
        let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"4\" height=\"4\"/>";
        assert!(matches!(
            render_png(svg, 88_800, 126_600),
            Err(PreviewError::PixmapAlloc {
                width: 88_800,
                height: 126_600
            })
        ));
        // one row past the budget
        assert!(render_png(svg, 8192, 8193).is_err());
    }
}
