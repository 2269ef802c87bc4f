use crate::layout::{BadgeLayout, FONT_SIZE};
use crate::model::BadgeSpec;
use crate::text::{escape_attr, escape_xml};
use std::fmt::Write as _;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Renders a badge from its four inputs. See [`render_badge_svg`].
pub fn render_svg(label: &str, message: &str, left_color: &str, right_color: &str) -> String {
    let layout = BadgeLayout::for_text(label, message);
    write_badge_svg(&layout, label, message, left_color, right_color)
}

/// Renders a self-contained SVG document for `spec`.
///
/// The document declares the SVG namespace, references no external resources and is
/// byte-for-byte deterministic for a given input.
pub fn render_badge_svg(spec: &BadgeSpec) -> String {
    render_svg(
        &spec.label,
        &spec.message,
        &spec.left_color,
        &spec.right_color,
    )
}

fn write_badge_svg(
    layout: &BadgeLayout,
    label: &str,
    message: &str,
    left_color: &str,
    right_color: &str,
) -> String {
    let width = layout.width();
    let height = layout.height;
    tracing::debug!(
        width,
        height,
        left_width = layout.left_width,
        right_width = layout.right_width,
        "rendering badge svg"
    );

    let mut out = String::with_capacity(512 + label.len() + message.len());
    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="{SVG_NAMESPACE}" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(
        &mut out,
        r#"  <rect width="{}" height="{height}" fill="{}"/>"#,
        layout.left_width,
        escape_attr(left_color)
    );
    let _ = writeln!(
        &mut out,
        r#"  <rect x="{}" width="{}" height="{height}" fill="{}"/>"#,
        layout.left_width,
        layout.right_width,
        escape_attr(right_color)
    );
    write_text(&mut out, layout.left_text_x(), layout.text_y(), label);
    write_text(&mut out, layout.right_text_x(), layout.text_y(), message);
    out.push_str("</svg>\n");
    out
}

fn write_text(out: &mut String, x: f64, y: u32, text: &str) {
    let _ = writeln!(
        out,
        r#"  <text x="{}" y="{y}" text-anchor="middle" fill="white" font-size="{FONT_SIZE}">{}</text>"#,
        fmt(x),
        escape_xml(text)
    );
}

fn fmt(v: f64) -> String {
    // Round-trippable decimal form without `-0` or float noise: `29.5`, `20`.
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}
