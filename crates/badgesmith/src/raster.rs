use std::fmt;
use std::sync::Arc;

#[cfg(feature = "raster")]
mod resvg_backend;

#[cfg(feature = "raster")]
pub use resvg_backend::ResvgBackend;

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error(
        "rasterization unavailable: PNG output needs an SVG rasterizer (build with the `raster` feature)"
    )]
    RasterizationUnavailable,
    #[error("invalid raster scale {0} (expected a finite number > 0)")]
    InvalidScale(f32),
    #[error("failed to parse SVG")]
    SvgParse,
    #[error("failed to allocate pixmap for raster rendering")]
    PixmapAlloc,
    #[error("failed to encode PNG")]
    PngEncode,
}

impl RasterError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::RasterizationUnavailable)
    }
}

pub type Result<T> = std::result::Result<T, RasterError>;

#[derive(Debug, Clone, PartialEq)]
pub struct RasterOptions {
    pub scale: f32,
    /// CSS-ish background fill; `None` keeps the pixmap transparent.
    pub background: Option<String>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
        }
    }
}

impl RasterOptions {
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.scale.is_finite() && self.scale > 0.0 {
            Ok(())
        } else {
            Err(RasterError::InvalidScale(self.scale))
        }
    }
}

/// An SVG-to-PNG conversion capability.
pub trait RasterBackend: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn svg_to_png(&self, svg: &str, options: &RasterOptions) -> Result<Vec<u8>>;
}

/// The rasterization capability handed to a [`crate::BadgeRenderer`].
///
/// `Unavailable` is a first-class state rather than a missing value: every conversion request
/// against it fails with [`RasterError::RasterizationUnavailable`].
#[derive(Clone, Default)]
pub enum Rasterizer {
    Available(Arc<dyn RasterBackend>),
    #[default]
    Unavailable,
}

impl fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(backend) => f.debug_tuple("Available").field(&backend.name()).finish(),
            Self::Unavailable => f.write_str("Unavailable"),
        }
    }
}

impl Rasterizer {
    /// Picks the best capability compiled into this build.
    pub fn detect() -> Self {
        #[cfg(feature = "raster")]
        {
            Self::resvg()
        }
        #[cfg(not(feature = "raster"))]
        {
            tracing::debug!("built without the `raster` feature; PNG output disabled");
            Self::Unavailable
        }
    }

    #[cfg(feature = "raster")]
    pub fn resvg() -> Self {
        Self::from_backend(ResvgBackend::new())
    }

    pub fn from_backend(backend: impl RasterBackend + 'static) -> Self {
        Self::Available(Arc::new(backend))
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn svg_to_png(&self, svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
        match self {
            Self::Available(backend) => {
                options.validate()?;
                tracing::debug!(backend = backend.name(), scale = options.scale, "rasterizing svg");
                backend.svg_to_png(svg, options)
            }
            Self::Unavailable => Err(RasterError::RasterizationUnavailable),
        }
    }
}
