//! Settings page: backend connection and refresh policy.

use crate::settings::Settings;
use crate::theme;
use eframe::egui::{self, RichText, Ui};

/// Render the settings editor. Returns true when any field changed; the
/// app shell debounces the save.
pub fn render(ui: &mut Ui, settings: &mut Settings) -> bool {
    let mut changed = false;

    ui.heading("Settings");
    ui.add_space(12.0);

    theme::card().show(ui, |ui| {
        ui.set_min_width(420.0);
        ui.label(RichText::new("Backend").size(15.0).strong());
        ui.add_space(8.0);
        egui::Grid::new("settings_backend")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("API base URL");
                changed |= ui.text_edit_singleline(&mut settings.api_base_url).changed();
                ui.end_row();

                ui.label("Request timeout (s)");
                changed |= ui
                    .add(egui::DragValue::new(&mut settings.request_timeout_secs).range(5..=300))
                    .changed();
                ui.end_row();

                ui.label("Report timeout (s)");
                changed |= ui
                    .add(egui::DragValue::new(&mut settings.report_timeout_secs).range(30..=600))
                    .changed();
                ui.end_row();
            });
        ui.add_space(4.0);
        ui.label(
            RichText::new("Applied to the next request.")
                .size(12.0)
                .color(theme::text::MUTED),
        );
    });

    ui.add_space(12.0);
    theme::card().show(ui, |ui| {
        ui.set_min_width(420.0);
        ui.label(RichText::new("Refresh").size(15.0).strong());
        ui.add_space(8.0);
        changed |= ui
            .checkbox(&mut settings.auto_refresh_enabled, "Auto-refresh dashboard data")
            .changed();
        if settings.auto_refresh_enabled {
            changed |= ui
                .add(
                    egui::Slider::new(&mut settings.refresh_interval_secs, 10..=600)
                        .text("Interval (s)"),
                )
                .changed();
        }
    });

    ui.add_space(12.0);
    if ui.button("Reset to defaults").clicked() {
        *settings = Settings::default();
        changed = true;
    }

    changed
}
