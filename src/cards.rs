//! Stat and info cards shared by the dashboard pages.

use crate::theme;
use eframe::egui::{self, Color32, RichText, Sense, Ui, Vec2};

/// Key-metric card with a colored accent bar.
pub fn info_card(ui: &mut Ui, label: &str, value: &str, sub_value: Option<&str>, accent: Color32) {
    theme::card().show(ui, |ui| {
        ui.set_min_width(150.0);
        ui.horizontal(|ui| {
            let (bar, _) = ui.allocate_exact_size(Vec2::new(6.0, 44.0), Sense::hover());
            ui.painter().rect_filled(bar, 3.0, accent);
            ui.vertical(|ui| {
                ui.label(RichText::new(label).size(12.0).color(theme::text::MUTED));
                ui.label(
                    RichText::new(value)
                        .size(20.0)
                        .strong()
                        .color(theme::text::PRIMARY),
                );
                if let Some(sub) = sub_value {
                    ui.label(RichText::new(sub).size(11.0).color(theme::text::FAINT));
                }
            });
        });
    });
}

/// Compact numeric tile, used for per-gas statistics.
pub fn stat_card(ui: &mut Ui, label: &str, value: &str, unit: &str, color: Color32) {
    egui::Frame::none()
        .fill(theme::bg::PAGE)
        .rounding(egui::Rounding::same(12.0))
        .stroke(theme::stroke(theme::border::DEFAULT, 1.0))
        .inner_margin(egui::Margin::same(15.0))
        .show(ui, |ui| {
            ui.set_min_width(120.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(label).size(13.0).color(theme::text::MUTED));
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(value).size(22.0).strong().color(color));
                    if !unit.is_empty() {
                        ui.label(RichText::new(unit).size(13.0).color(theme::text::FAINT));
                    }
                });
            });
        });
}
