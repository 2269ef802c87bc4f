#![forbid(unsafe_code)]

//! `badgesmith` renders two-segment status badges (`build | passing`) as SVG, and as PNG
//! when an SVG rasterizer is available.
//!
//! # Features
//!
//! - `raster`: enable PNG output via pure-Rust SVG rasterization (`resvg`)
//!
//! Without `raster`, [`Rasterizer::detect`] yields [`Rasterizer::Unavailable`] and every PNG
//! request fails with [`RasterError::RasterizationUnavailable`].

pub use badgesmith_render::layout::{self, BadgeLayout, segment_width};
pub use badgesmith_render::model::{
    self, BadgeSpec, DEFAULT_LABEL, DEFAULT_LEFT_COLOR, DEFAULT_MESSAGE, DEFAULT_RIGHT_COLOR,
};
pub use badgesmith_render::{SVG_NAMESPACE, render_badge_svg, render_svg};

pub mod raster;
mod renderer;

pub use raster::{RasterBackend, RasterError, RasterOptions, Rasterizer};
pub use renderer::BadgeRenderer;

/// PNG file signature, for callers that sniff rasterizer output.
pub const PNG_SIGNATURE: &[u8; 8] = b"\x89PNG\r\n\x1a\n";
