use serde::{Deserialize, Serialize};

pub const DEFAULT_LABEL: &str = "build";
pub const DEFAULT_MESSAGE: &str = "passing";
/// Neutral gray used behind the label.
pub const DEFAULT_LEFT_COLOR: &str = "#555";
/// Green "success" hue used behind the message.
pub const DEFAULT_RIGHT_COLOR: &str = "#4c1";

/// Input of a single badge render.
///
/// Text and colors are untrusted and are accepted as-is; escaping happens when the SVG is
/// emitted. Malformed colors are a rendering-quality issue, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeSpec {
    pub label: String,
    pub message: String,
    pub left_color: String,
    pub right_color: String,
}

impl Default for BadgeSpec {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            left_color: DEFAULT_LEFT_COLOR.to_string(),
            right_color: DEFAULT_RIGHT_COLOR.to_string(),
        }
    }
}

impl BadgeSpec {
    /// Creates a badge with the given text and the default color pair.
    pub fn new(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_left_color(mut self, color: impl Into<String>) -> Self {
        self.left_color = color.into();
        self
    }

    pub fn with_right_color(mut self, color: impl Into<String>) -> Self {
        self.right_color = color.into();
        self
    }
}
