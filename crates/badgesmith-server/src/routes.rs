use crate::AppState;
use crate::error::ApiError;
use axum::extract::{Query, State};
use axum::http::{HeaderValue, header};
use axum::response::{Html, IntoResponse, Response};
use badgesmith::{
    BadgeSpec, DEFAULT_LABEL, DEFAULT_LEFT_COLOR, DEFAULT_MESSAGE, DEFAULT_RIGHT_COLOR,
};

const INDEX_HTML: &str = include_str!("../assets/index.html");

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";
pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Query string of `GET /api/badge`. Missing fields fall back to `build | passing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeQuery {
    pub label: String,
    pub message: String,
    /// Message (right segment) color.
    pub color: String,
    pub left_color: String,
    /// `svg` or `png`; anything other than `png` renders SVG.
    pub output: String,
}

impl Default for BadgeQuery {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            color: DEFAULT_RIGHT_COLOR.to_string(),
            left_color: DEFAULT_LEFT_COLOR.to_string(),
            output: "svg".to_string(),
        }
    }
}

impl BadgeQuery {
    /// Builds the query from decoded `key=value` pairs. When a key repeats, its first value
    /// wins; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        let mut seen = [false; 5];
        for (key, value) in pairs {
            let (slot, field) = match key.as_str() {
                "label" => (0, &mut query.label),
                "message" => (1, &mut query.message),
                "color" => (2, &mut query.color),
                "left_color" => (3, &mut query.left_color),
                "type" => (4, &mut query.output),
                _ => continue,
            };
            if !std::mem::replace(&mut seen[slot], true) {
                *field = value;
            }
        }
        query
    }

    pub fn wants_png(&self) -> bool {
        self.output.trim().eq_ignore_ascii_case("png")
    }

    pub fn to_spec(&self) -> BadgeSpec {
        BadgeSpec::new(self.label.as_str(), self.message.as_str())
            .with_left_color(self.left_color.as_str())
            .with_right_color(self.color.as_str())
    }
}

/// `{label}-{message}.png`, with characters that would break a quoted
/// `Content-Disposition` filename replaced by `_`.
pub fn attachment_filename(label: &str, message: &str) -> String {
    format!("{label}-{message}.png")
        .chars()
        .map(|c| match c {
            '"' | '\\' | '/' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

fn content_disposition(label: &str, message: &str) -> HeaderValue {
    let value = format!(
        "attachment; filename=\"{}\"",
        attachment_filename(label, message)
    );
    HeaderValue::from_str(&value)
        .unwrap_or_else(|_| HeaderValue::from_static("attachment; filename=\"badge.png\""))
}

pub(crate) async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub(crate) async fn badge(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let query = BadgeQuery::from_pairs(pairs);
    let spec = query.to_spec();

    if !query.wants_png() {
        let svg = state.renderer.render_spec_svg(&spec);
        return Ok(([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], svg).into_response());
    }

    if !state.renderer.can_rasterize() {
        return Err(ApiError::RasterizationUnavailable);
    }

    // CPU-bound; keep it off the async workers.
    let renderer = state.renderer.clone();
    let png = tokio::task::spawn_blocking(move || renderer.render_spec_png(&spec)).await??;

    tracing::debug!(
        label = %query.label,
        message = %query.message,
        bytes = png.len(),
        "rendered png badge"
    );
    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(PNG_CONTENT_TYPE)),
            (
                header::CONTENT_DISPOSITION,
                content_disposition(&query.label, &query.message),
            ),
        ],
        png,
    )
        .into_response())
}
