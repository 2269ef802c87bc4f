#[cfg(feature = "raster")]
use badgesmith::PNG_SIGNATURE;
use badgesmith::{BadgeRenderer, BadgeSpec, RasterError, Rasterizer};

#[cfg(feature = "raster")]
fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
    let decoder = png::Decoder::new(bytes);
    let reader = decoder.read_info().expect("valid png");
    let info = reader.info();
    (info.width, info.height)
}

#[test]
fn unavailable_rasterizer_is_reported_not_degraded() {
    let renderer = BadgeRenderer::new(Rasterizer::Unavailable);
    assert!(!renderer.can_rasterize());

    let err = renderer
        .render_png("build", "passing", "#555", "#4c1")
        .unwrap_err();
    assert!(matches!(err, RasterError::RasterizationUnavailable));

    // SVG output keeps working.
    let svg = renderer.render_svg("build", "passing", "#555", "#4c1");
    assert!(svg.starts_with("<svg"));
}

#[cfg(feature = "raster")]
#[test]
fn resvg_png_matches_badge_size() {
    let renderer = BadgeRenderer::new(Rasterizer::resvg());
    let bytes = renderer
        .render_png("build", "passing", "#555", "#4c1")
        .unwrap();
    assert!(bytes.starts_with(PNG_SIGNATURE));
    assert_eq!(png_dimensions(&bytes), (134, 20));
}

#[cfg(feature = "raster")]
#[test]
fn resvg_png_respects_scale() {
    let renderer = BadgeRenderer::new(Rasterizer::resvg())
        .with_raster_options(badgesmith::RasterOptions::default().with_scale(2.0));
    let bytes = renderer
        .render_spec_png(&BadgeSpec::new("", ""))
        .unwrap();
    assert!(bytes.starts_with(PNG_SIGNATURE));
    assert_eq!(png_dimensions(&bytes), (160, 40));
}

#[cfg(feature = "raster")]
#[test]
fn hostile_text_still_rasterizes() {
    let renderer = BadgeRenderer::new(Rasterizer::resvg());
    let spec = BadgeSpec::new(r#"<b>"&"</b>"#, "ok").with_left_color("not-a-color");
    let bytes = renderer.render_spec_png(&spec).unwrap();
    assert!(bytes.starts_with(PNG_SIGNATURE));
}

#[cfg(feature = "raster")]
#[test]
fn noncharacters_in_text_still_rasterize() {
    let renderer = BadgeRenderer::new(Rasterizer::resvg());
    let bytes = renderer
        .render_png("\u{FFFF}", "\u{FFFE}", "#555", "#4c1")
        .unwrap();
    assert!(bytes.starts_with(PNG_SIGNATURE));
    assert_eq!(png_dimensions(&bytes), (80, 20));
}

#[cfg(not(feature = "raster"))]
#[test]
fn detect_without_raster_feature_cannot_rasterize() {
    let renderer = BadgeRenderer::detect();
    assert!(!renderer.can_rasterize());
    assert!(
        renderer
            .render_spec_png(&BadgeSpec::default())
            .unwrap_err()
            .is_unavailable()
    );
}
