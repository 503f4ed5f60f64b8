//! Shift summary page: advance/stop counts, durations, utilization.

use crate::api::SummaryData;
use crate::cards::info_card;
use crate::charts::{bar_chart, ChartBar};
use crate::fetch::FetchSlot;
use crate::theme;
use eframe::egui::{self, RichText, Ui};

pub fn render(ui: &mut Ui, slot: &FetchSlot<SummaryData>, compact: bool) {
    if let Some(err) = slot.error() {
        ui.colored_label(theme::state::ERROR, format!("Failed to load summary: {}", err));
    }
    let Some(data) = slot.data() else {
        if slot.is_loading() {
            theme::skeleton_lines(ui, 4, ui.available_width() * 0.6);
        }
        return;
    };

    if !compact {
        ui.heading("TBM Shift Summary");
        ui.label(
            RichText::new("Advance efficiency and downtime at a glance")
                .size(13.0)
                .color(theme::text::MUTED),
        );
        ui.add_space(12.0);
    }

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
        info_card(
            ui,
            "Advance segments",
            &data.work_count.to_string(),
            None,
            theme::accent::BLUE,
        );
        info_card(
            ui,
            "Total advance time",
            &format!("{:.1} min", data.work_total_min),
            Some(&format!("{:.1}% of shift", data.work_rate())),
            theme::accent::BLUE,
        );
        info_card(
            ui,
            "Stop segments",
            &data.stop_count.to_string(),
            None,
            theme::accent::ORANGE,
        );
        info_card(
            ui,
            "Total stop time",
            &format!("{:.1} min", data.stop_total_min),
            Some(&format!("{:.1}% of shift", data.stop_rate())),
            theme::accent::ORANGE,
        );
    });

    if compact {
        return;
    }

    ui.add_space(16.0);
    theme::card().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Advance vs stop duration (min)")
                    .size(15.0)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                legend_dot(ui, "Stop", theme::accent::ORANGE);
                legend_dot(ui, "Advance", theme::accent::BLUE);
            });
        });
        ui.add_space(8.0);
        bar_chart(
            ui,
            "summary_durations",
            &[
                ChartBar::new("Advance", data.work_total_min, theme::accent::BLUE),
                ChartBar::new("Stop", data.stop_total_min, theme::accent::ORANGE),
            ],
            240.0,
        );
    });
}

fn legend_dot(ui: &mut Ui, label: &str, color: egui::Color32) {
    ui.label(RichText::new(label).size(13.0).color(theme::text::MUTED));
    let (dot, _) = ui.allocate_exact_size(egui::Vec2::splat(10.0), egui::Sense::hover());
    ui.painter().circle_filled(dot.center(), 5.0, color);
}
