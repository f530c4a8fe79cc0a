//! Theme system for the progress indicator application
//! Small dark/light palette plus the fixed drawing style constants

use iced::{Color, Theme, color};
use std::time::Duration;

// ============================================================================
// Fixed style constants
// ============================================================================

/// Desired edge length of the indicator when the host imposes no constraint
pub const DEFAULT_SIZE: f32 = 96.0;

/// Stroke width of the traced outline
pub const STROKE_WIDTH: f32 = 4.0;

/// Inset between the square outline and the drawing bounds, per side
pub const PADDING: f32 = 8.0;

/// Duration of one edge traversal (platform "medium" animation time)
pub const ANIMATION_DURATION: Duration = Duration::from_millis(400);

/// One-time delay before the first edge traversal (platform "short" time)
pub const START_DELAY: Duration = Duration::from_millis(200);

/// Stroke color used when settings carry no (or an invalid) color
pub const DEFAULT_STROKE: Color = color!(0x2962ff);

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(theme, Theme::Dark)
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x121212);
    pub const TEXT_MUTED: Color = color!(0x888888);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const TEXT_MUTED: Color = color!(0x777777);
}

/// Window background color
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Muted text color for hints
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

// ============================================================================
// Stroke color resolution
// ============================================================================

/// Resolve the configured stroke color, falling back to the default accent
/// when the settings carry no color or an unparsable one.
pub fn stroke_color(configured: Option<&str>) -> Color {
    configured
        .and_then(parse_hex_color)
        .unwrap_or(DEFAULT_STROKE)
}

/// Parse a `#rrggbb` hex string into a Color
fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::from_rgb8(r, g, b))
}
