use super::{RasterBackend, RasterError, RasterOptions, Result};
use std::sync::Arc;

/// Pure-Rust rasterizer built on `usvg` + `resvg` + `tiny-skia`.
///
/// System fonts are loaded once, when the backend is constructed, and shared by every
/// conversion.
#[derive(Clone)]
pub struct ResvgBackend {
    fontdb: Arc<usvg::fontdb::Database>,
    font_family: String,
}

impl Default for ResvgBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ResvgBackend {
    pub fn new() -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        tracing::debug!(faces = fontdb.len(), "loaded system fonts for rasterization");
        Self {
            fontdb: Arc::new(fontdb),
            // Badge text carries no font-family; pick a common sans-serif. System selection
            // may vary, so this is best-effort.
            font_family: "Verdana".to_string(),
        }
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    fn svg_to_pixmap(&self, svg: &str, options: &RasterOptions) -> Result<tiny_skia::Pixmap> {
        let mut opt = usvg::Options::default();
        opt.fontdb = Arc::clone(&self.fontdb);
        opt.font_family = self.font_family.clone();

        let tree = usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;

        let scale = options.scale;
        let size = tree.size();
        let width_px = (size.width() * scale).ceil().max(1.0) as u32;
        let height_px = (size.height() * scale).ceil().max(1.0) as u32;

        let mut pixmap =
            tiny_skia::Pixmap::new(width_px, height_px).ok_or(RasterError::PixmapAlloc)?;

        if let Some(bg) = options.background.as_deref() {
            match parse_tiny_skia_color(bg) {
                Some(color) => pixmap.fill(color),
                None => tracing::warn!(background = bg, "ignoring unparseable background color"),
            }
        }

        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(scale, scale),
            &mut pixmap.as_mut(),
        );
        Ok(pixmap)
    }
}

impl RasterBackend for ResvgBackend {
    fn name(&self) -> &'static str {
        "resvg"
    }

    fn svg_to_png(&self, svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
        let pixmap = self.svg_to_pixmap(svg, options)?;
        pixmap.encode_png().map_err(|_| RasterError::PngEncode)
    }
}

fn parse_tiny_skia_color(text: &str) -> Option<tiny_skia::Color> {
    let s = text.trim().to_ascii_lowercase();
    match s.as_str() {
        "transparent" => return Some(tiny_skia::Color::from_rgba8(0, 0, 0, 0)),
        "white" => return Some(tiny_skia::Color::from_rgba8(255, 255, 255, 255)),
        "black" => return Some(tiny_skia::Color::from_rgba8(0, 0, 0, 255)),
        _ => {}
    }

    let hex = s.strip_prefix('#')?;
    fn hex2(b: &[u8]) -> Option<u8> {
        let hi = (*b.first()? as char).to_digit(16)? as u8;
        let lo = (*b.get(1)? as char).to_digit(16)? as u8;
        Some((hi << 4) | lo)
    }
    fn hex1(c: u8) -> Option<u8> {
        let v = (c as char).to_digit(16)? as u8;
        Some((v << 4) | v)
    }

    let bytes = hex.as_bytes();
    let [r, g, b, a] = match bytes.len() {
        3 => [hex1(bytes[0])?, hex1(bytes[1])?, hex1(bytes[2])?, 255],
        4 => [
            hex1(bytes[0])?,
            hex1(bytes[1])?,
            hex1(bytes[2])?,
            hex1(bytes[3])?,
        ],
        6 => [
            hex2(&bytes[0..2])?,
            hex2(&bytes[2..4])?,
            hex2(&bytes[4..6])?,
            255,
        ],
        8 => [
            hex2(&bytes[0..2])?,
            hex2(&bytes[2..4])?,
            hex2(&bytes[4..6])?,
            hex2(&bytes[6..8])?,
        ],
        _ => return None,
    };
    Some(tiny_skia::Color::from_rgba8(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10"><rect width="10" height="10" fill="black"/></svg>"#;

    #[test]
    fn svg_to_png_produces_png_signature() {
        let bytes = ResvgBackend::new()
            .svg_to_png(SQUARE, &RasterOptions::default())
            .unwrap();
        assert!(bytes.starts_with(crate::PNG_SIGNATURE));
    }

    #[test]
    fn malformed_svg_is_a_parse_error() {
        let err = ResvgBackend::new()
            .svg_to_png("<svg", &RasterOptions::default())
            .unwrap_err();
        assert!(matches!(err, RasterError::SvgParse));
    }

    #[test]
    fn pixmap_size_follows_scale() {
        let backend = ResvgBackend::new();
        let pixmap = backend
            .svg_to_pixmap(SQUARE, &RasterOptions::default().with_scale(2.5))
            .unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (25, 25));
    }

    #[test]
    fn background_fills_transparent_areas() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"/>"#;
        let backend = ResvgBackend::new();
        let pixmap = backend
            .svg_to_pixmap(svg, &RasterOptions::default().with_background("#ff0000"))
            .unwrap();
        let px = pixmap.pixel(0, 0).unwrap();
        assert_eq!((px.red(), px.green(), px.blue(), px.alpha()), (255, 0, 0, 255));
    }

    #[test]
    fn parses_css_hex_colors() {
        let c = parse_tiny_skia_color("#4c1").unwrap();
        assert_eq!(c.to_color_u8().red(), 0x44);
        assert_eq!(c.to_color_u8().green(), 0xcc);
        assert_eq!(c.to_color_u8().blue(), 0x11);

        let c = parse_tiny_skia_color(" #00000080 ").unwrap();
        assert_eq!(c.to_color_u8().alpha(), 0x80);

        assert!(parse_tiny_skia_color("transparent").is_some());
        assert!(parse_tiny_skia_color("#12345").is_none());
        assert!(parse_tiny_skia_color("green").is_none());
    }
}
