//! Gas monitoring page: oxygen status, per-gas statistics, exceedances.

use crate::api::GasData;
use crate::cards::stat_card;
use crate::charts::{bar_chart, ChartBar};
use crate::fetch::FetchSlot;
use crate::theme;
use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

/// Human-readable names for the backend's gas keys. Unknown channels fall
/// back to the raw key.
fn display_name(key: &str) -> &str {
    match key {
        "oxygen" => "O2",
        "carbon_monoxide" => "CO",
        "hydrogen_sulfide" => "H2S",
        "dust" => "Dust",
        "methane_main_drive" => "CH4 main drive",
        "methane_bridge" => "CH4 bridge",
        "methane_fan_outlet" => "CH4 fan outlet",
        "carbon_dioxide" => "CO2",
        "nitric_oxide" => "NO",
        "sulfur_dioxide" => "SO2",
        other => other,
    }
}

/// Cycle through the accent palette for chart bars.
fn chart_color(index: usize) -> Color32 {
    const COLORS: [Color32; 6] = [
        theme::accent::BLUE,
        theme::accent::GREEN,
        theme::accent::ORANGE,
        theme::accent::PURPLE,
        theme::accent::PINK,
        theme::accent::RED,
    ];
    COLORS[index % COLORS.len()]
}

pub fn render(ui: &mut Ui, slot: &FetchSlot<GasData>, compact: bool) {
    if let Some(err) = slot.error() {
        ui.colored_label(theme::state::ERROR, format!("Failed to load gas data: {}", err));
    }
    let Some(data) = slot.data() else {
        if slot.is_loading() {
            theme::skeleton_lines(ui, 4, ui.available_width() * 0.6);
        }
        return;
    };

    if !compact {
        ui.heading("Gas Monitoring");
        ui.add_space(12.0);
    }

    // Oxygen status card
    theme::card().show(ui, |ui| {
        let oxygen = data.get("oxygen");
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Oxygen concentration (O2)")
                    .size(15.0)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(o2) = oxygen {
                    status_pill(ui, o2.is_exceeding());
                }
            });
        });
        ui.add_space(8.0);

        match oxygen {
            Some(o2) => {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                    stat_card(ui, "Mean", &format!("{:.2}", o2.mean), "%", theme::accent::BLUE);
                    stat_card(ui, "Max", &format!("{:.2}", o2.max), "%", theme::text::PRIMARY);
                    stat_card(ui, "Min", &format!("{:.2}", o2.min), "%", theme::text::PRIMARY);
                    let exceed = o2.exceed_count.unwrap_or(0);
                    let color = if exceed > 0 {
                        theme::accent::RED
                    } else {
                        theme::text::PRIMARY
                    };
                    stat_card(ui, "Exceedances", &exceed.to_string(), "", color);
                });
            }
            None => {
                ui.label(
                    RichText::new("No oxygen channel in this dataset")
                        .color(theme::text::MUTED)
                        .italics(),
                );
            }
        }
    });

    if compact {
        return;
    }

    ui.add_space(16.0);
    theme::card().show(ui, |ui| {
        ui.label(
            RichText::new("Mean concentration by gas")
                .size(15.0)
                .strong(),
        );
        ui.add_space(8.0);
        let bars: Vec<ChartBar> = data
            .iter()
            .enumerate()
            .map(|(i, (key, stat))| ChartBar::new(display_name(key), stat.mean, chart_color(i)))
            .collect();
        bar_chart(ui, "gas_means", &bars, 280.0);
    });

    ui.add_space(16.0);
    theme::card().show(ui, |ui| {
        ui.label(RichText::new("Threshold exceedances").size(15.0).strong());
        ui.add_space(8.0);

        let exceeding: Vec<(&String, &crate::api::GasStat)> =
            data.iter().filter(|(_, stat)| stat.is_exceeding()).collect();
        if exceeding.is_empty() {
            ui.label(
                RichText::new("No exceedances recorded this shift")
                    .color(theme::state::SUCCESS),
            );
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(140.0))
            .column(Column::auto().at_least(70.0))
            .column(Column::remainder())
            .header(22.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Gas");
                });
                header.col(|ui| {
                    ui.strong("Count");
                });
                header.col(|ui| {
                    ui.strong("Longest interval");
                });
            })
            .body(|mut body| {
                for (key, stat) in exceeding {
                    body.row(22.0, |mut row| {
                        row.col(|ui| {
                            ui.label(display_name(key));
                        });
                        row.col(|ui| {
                            ui.colored_label(
                                theme::accent::RED,
                                stat.exceed_count.unwrap_or(0).to_string(),
                            );
                        });
                        row.col(|ui| match stat.longest_exceedance() {
                            Some(seg) => {
                                ui.label(format!(
                                    "{} - {} ({:.1} s)",
                                    seg.start, seg.end, seg.duration_sec
                                ));
                            }
                            None => {
                                ui.label(RichText::new("-").color(theme::text::MUTED));
                            }
                        });
                    });
                }
            });
    });
}

fn status_pill(ui: &mut Ui, alert: bool) {
    let (bg, fg, label) = if alert {
        (theme::bg::PILL_ALERT, theme::state::ERROR, "Alert")
    } else {
        (theme::bg::PILL_OK, theme::state::SUCCESS, "Normal")
    };
    egui::Frame::none()
        .fill(bg)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::symmetric(12.0, 4.0))
        .show(ui, |ui| {
            ui.label(RichText::new(label).size(13.0).strong().color(fg));
        });
}
