#![forbid(unsafe_code)]

//! Headless layout + SVG emission for two-segment status badges.
//!
//! A badge is a label segment on the left and a message segment on the right, e.g.
//! `build | passing`. Segment widths come from a fixed average glyph advance, so output is
//! deterministic and independent of installed fonts.
//!
//! ```
//! let svg = badgesmith_render::render_svg("build", "passing", "#555", "#4c1");
//! assert!(svg.contains(r#"width="134""#));
//! ```

pub mod layout;
pub mod model;
pub mod svg;
pub mod text;

pub use layout::{BadgeLayout, segment_width};
pub use model::BadgeSpec;
pub use svg::{SVG_NAMESPACE, render_badge_svg, render_svg};
