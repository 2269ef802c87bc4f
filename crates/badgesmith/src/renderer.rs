use crate::raster::{self, RasterOptions, Rasterizer};
use badgesmith_render::{BadgeSpec, render_badge_svg};

/// Stateless badge renderer with an injected rasterization capability.
///
/// Cheap to clone; the web boundary shares one instance across requests.
#[derive(Debug, Clone, Default)]
pub struct BadgeRenderer {
    rasterizer: Rasterizer,
    raster: RasterOptions,
}

impl BadgeRenderer {
    pub fn new(rasterizer: Rasterizer) -> Self {
        Self {
            rasterizer,
            raster: RasterOptions::default(),
        }
    }

    /// Renderer backed by [`Rasterizer::detect`].
    pub fn detect() -> Self {
        Self::new(Rasterizer::detect())
    }

    pub fn with_raster_options(mut self, raster: RasterOptions) -> Self {
        self.raster = raster;
        self
    }

    pub fn rasterizer(&self) -> &Rasterizer {
        &self.rasterizer
    }

    pub fn raster_options(&self) -> &RasterOptions {
        &self.raster
    }

    pub fn can_rasterize(&self) -> bool {
        self.rasterizer.is_available()
    }

    pub fn render_svg(
        &self,
        label: &str,
        message: &str,
        left_color: &str,
        right_color: &str,
    ) -> String {
        badgesmith_render::render_svg(label, message, left_color, right_color)
    }

    /// Renders the badge and converts it to PNG.
    ///
    /// Fails with [`raster::RasterError::RasterizationUnavailable`] before any rendering work
    /// when the renderer has no rasterizer.
    pub fn render_png(
        &self,
        label: &str,
        message: &str,
        left_color: &str,
        right_color: &str,
    ) -> raster::Result<Vec<u8>> {
        if !self.can_rasterize() {
            return Err(raster::RasterError::RasterizationUnavailable);
        }
        let svg = self.render_svg(label, message, left_color, right_color);
        self.rasterizer.svg_to_png(&svg, &self.raster)
    }

    pub fn render_spec_svg(&self, spec: &BadgeSpec) -> String {
        render_badge_svg(spec)
    }

    pub fn render_spec_png(&self, spec: &BadgeSpec) -> raster::Result<Vec<u8>> {
        self.render_png(
            &spec.label,
            &spec.message,
            &spec.left_color,
            &spec.right_color,
        )
    }
}
