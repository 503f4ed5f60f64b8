//! Geology page: the lithology timeline, per-class efficiency cards, and
//! the advance-rate comparison chart.

use crate::api::{EfficiencyRow, LithologyData};
use crate::charts::{bar_chart, ChartBar};
use crate::fetch::FetchSlot;
use crate::theme;
use crate::timeline::{RockBand, RockPalette};
use eframe::egui::{RichText, Sense, Ui, Vec2};

/// Page state: the palette this page owns and the band layout cached from
/// the latest lithology batch. Rebuilding only on data arrival keeps
/// hover interaction free of re-sorting and re-scaling.
pub struct GeologyPage {
    palette: RockPalette,
    band: RockBand,
}

impl GeologyPage {
    pub fn new() -> Self {
        Self {
            palette: theme::rock_palette(),
            band: RockBand::empty(),
        }
    }

    /// Rebuild the cached band layout for a fresh batch of segments.
    pub fn set_data(&mut self, data: &LithologyData) {
        self.band = RockBand::new(&data.segments, &self.palette);
    }

    pub fn render(&mut self, ui: &mut Ui, slot: &FetchSlot<LithologyData>, compact: bool) {
        if let Some(err) = slot.error() {
            ui.colored_label(
                theme::state::ERROR,
                format!("Failed to load lithology data: {}", err),
            );
        }
        let Some(data) = slot.data() else {
            if slot.is_loading() {
                theme::skeleton_lines(ui, 4, ui.available_width() * 0.6);
            }
            return;
        };

        if !compact {
            ui.heading("Lithology Analysis");
            ui.label(
                RichText::new("Rock-class distribution and advance efficiency by class")
                    .size(13.0)
                    .color(theme::text::MUTED),
            );
            ui.add_space(12.0);
        }

        theme::card().show(ui, |ui| {
            ui.label(
                RichText::new("Lithology distribution over the shift")
                    .size(15.0)
                    .strong(),
            );
            ui.add_space(8.0);
            self.band.show(ui);
        });

        if compact {
            return;
        }

        ui.add_space(16.0);
        ui.columns(2, |cols| {
            cols[0].label(
                RichText::new("Per-class metrics")
                    .size(14.0)
                    .color(theme::text::MUTED),
            );
            cols[0].add_space(8.0);
            for row in &data.efficiency {
                efficiency_card(&mut cols[0], row, &self.palette);
            }

            theme::card().show(&mut cols[1], |ui| {
                ui.label(
                    RichText::new("Advance rate by class (mm/min)")
                        .size(15.0)
                        .strong(),
                );
                ui.add_space(8.0);
                let bars: Vec<ChartBar> = data
                    .efficiency
                    .iter()
                    .map(|row| {
                        ChartBar::new(
                            format!("Lithology {}", row.label),
                            row.mean_advance_rate,
                            self.palette.resolve(&row.label),
                        )
                    })
                    .collect();
                bar_chart(ui, "advance_rate_by_class", &bars, 300.0);
            });
        });
    }
}

/// Detail card for one lithology class.
fn efficiency_card(ui: &mut Ui, row: &EfficiencyRow, palette: &RockPalette) {
    let color = palette.resolve(&row.label);
    theme::card().show(ui, |ui| {
        ui.horizontal(|ui| {
            let (dot, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter().circle_filled(dot.center(), 5.0, color);
            ui.label(
                RichText::new(format!("Lithology {}", row.label))
                    .size(15.0)
                    .strong(),
            );
        });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 30.0;
            metric(ui, "Advance rate", row.mean_advance_rate, "mm/min");
            metric(ui, "Penetration", row.mean_penetration, "mm/r");
            metric(ui, "Thrust", row.mean_thrust, "kN");
            if let Some(energy) = row.specific_energy {
                metric(ui, "Specific energy", energy, "kN/mm");
            }
        });
    });
    ui.add_space(8.0);
}

fn metric(ui: &mut Ui, label: &str, value: f64, unit: &str) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).size(12.0).color(theme::text::FAINT));
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{:.2}", value))
                    .size(18.0)
                    .strong()
                    .color(theme::text::PRIMARY),
            );
            ui.label(RichText::new(unit).size(11.0).color(theme::text::FAINT));
        });
    });
}
