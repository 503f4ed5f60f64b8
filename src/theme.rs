//! Unified theme and color constants for the dashboard.
//!
//! All UI colors are sourced from here so cards, charts, and the rock band
//! stay visually consistent across pages.

use crate::timeline::{Lithology, RockPalette};
use egui::Color32;

/// Background colors for different layers
pub mod bg {
    use super::*;

    /// Page background - lightest layer
    pub const PAGE: Color32 = Color32::from_rgb(248, 250, 252);

    /// Card/elevated surface backgrounds
    pub const CARD: Color32 = Color32::WHITE;

    /// Inset surfaces (timeline track, stat tiles, code blocks)
    pub const INSET: Color32 = Color32::from_rgb(241, 245, 249);

    /// Status pill backgrounds
    pub const PILL_OK: Color32 = Color32::from_rgb(220, 252, 231);
    pub const PILL_ALERT: Color32 = Color32::from_rgb(254, 226, 226);
}

/// Text colors at different emphasis levels
pub mod text {
    use super::*;

    /// Primary text - high contrast
    pub const PRIMARY: Color32 = Color32::from_rgb(30, 41, 59);

    /// Secondary text - medium contrast
    pub const SECONDARY: Color32 = Color32::from_rgb(71, 85, 105);

    /// Muted text - low contrast for less important info
    pub const MUTED: Color32 = Color32::from_rgb(100, 116, 139);

    /// Faint text - axis labels, units
    pub const FAINT: Color32 = Color32::from_rgb(148, 163, 184);
}

/// Border colors
pub mod border {
    use super::*;

    /// Subtle border for separators inside cards
    pub const SUBTLE: Color32 = Color32::from_rgb(241, 245, 249);

    /// Default border for cards/panels
    pub const DEFAULT: Color32 = Color32::from_rgb(226, 232, 240);
}

/// Accent colors shared by cards and charts
pub mod accent {
    use super::*;

    pub const BLUE: Color32 = Color32::from_rgb(59, 130, 246);
    pub const GREEN: Color32 = Color32::from_rgb(16, 185, 129);
    pub const ORANGE: Color32 = Color32::from_rgb(245, 158, 11);
    pub const PURPLE: Color32 = Color32::from_rgb(139, 92, 246);
    pub const PINK: Color32 = Color32::from_rgb(236, 72, 153);
    pub const RED: Color32 = Color32::from_rgb(239, 68, 68);
}

/// State colors for status indicators
pub mod state {
    use super::*;

    /// Success indicator
    pub const SUCCESS: Color32 = Color32::from_rgb(22, 101, 52);

    /// Error indicator
    pub const ERROR: Color32 = Color32::from_rgb(153, 27, 27);

    /// Warning indicator
    pub const WARNING: Color32 = super::accent::ORANGE;
}

/// Per-class lithology colors shared by the rock band, the efficiency
/// cards, and the advance-rate chart. Built fresh per call so each page
/// owns its own immutable palette value.
pub fn rock_palette() -> RockPalette {
    RockPalette::new([
        (Lithology::Code(0), accent::BLUE),
        (Lithology::Code(1), accent::GREEN),
        (Lithology::Code(2), accent::ORANGE),
        (Lithology::Code(3), accent::PURPLE),
        (Lithology::Code(4), accent::PINK),
    ])
}

/// Helper to create a stroke with consistent styling
pub fn stroke(color: Color32, width: f32) -> egui::Stroke {
    egui::Stroke::new(width, color)
}

/// White rounded card frame used by every page section.
pub fn card() -> egui::Frame {
    egui::Frame::none()
        .fill(bg::CARD)
        .rounding(egui::Rounding::same(12.0))
        .stroke(stroke(border::DEFAULT, 1.0))
        .inner_margin(egui::Margin::same(16.0))
}

/// Switch egui to the dashboard's light style.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = bg::PAGE;
    visuals.window_fill = bg::CARD;
    visuals.override_text_color = Some(text::PRIMARY);
    visuals.widgets.noninteractive.bg_stroke = stroke(border::DEFAULT, 1.0);
    ctx.set_visuals(visuals);
}

/// Skeleton loading placeholder colors
pub mod skeleton {
    use super::*;

    /// Base skeleton background
    pub const BASE: Color32 = Color32::from_rgb(241, 245, 249);

    /// Animated shimmer highlight
    pub const SHIMMER: Color32 = Color32::from_rgb(226, 232, 240);
}

/// Create a skeleton rectangle for loading placeholders
pub fn skeleton_rect(ui: &mut egui::Ui, width: f32, height: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::Vec2::new(width, height), egui::Sense::hover());

    // Animate the shimmer effect
    let time = ui.ctx().input(|i| i.time);
    let phase = (time * 2.0).sin() * 0.5 + 0.5; // 0 to 1 oscillation

    let color = Color32::from_rgb(
        lerp_u8(skeleton::BASE.r(), skeleton::SHIMMER.r(), phase as f32),
        lerp_u8(skeleton::BASE.g(), skeleton::SHIMMER.g(), phase as f32),
        lerp_u8(skeleton::BASE.b(), skeleton::SHIMMER.b(), phase as f32),
    );

    ui.painter().rect_filled(rect, 4.0, color);
    ui.ctx().request_repaint(); // Keep animating
}

/// Create a skeleton text line
pub fn skeleton_text(ui: &mut egui::Ui, width: f32) {
    skeleton_rect(ui, width, 14.0);
}

/// Create multiple skeleton lines (for paragraph placeholders)
pub fn skeleton_lines(ui: &mut egui::Ui, count: usize, base_width: f32) {
    for i in 0..count {
        // Vary widths for visual interest
        let width_factor = match i % 3 {
            0 => 1.0,
            1 => 0.85,
            _ => 0.7,
        };
        skeleton_text(ui, base_width * width_factor);
        if i < count - 1 {
            ui.add_space(4.0);
        }
    }
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    let result = a as f32 + (b as f32 - a as f32) * t;
    result.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rock_palette_assigns_distinct_accents_to_all_five_classes() {
        let palette = rock_palette();
        let colors: Vec<Color32> = (0..5)
            .map(|code| palette.resolve(&Lithology::Code(code)))
            .collect();
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert_eq!(colors[0], accent::BLUE);
    }
}
