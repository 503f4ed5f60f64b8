//! Report page: server-generated Markdown shift report with copy and
//! save-to-file actions.

use crate::fetch::FetchSlot;
use crate::theme;
use chrono::Local;
use eframe::egui::{self, RichText, ScrollArea, Ui};
use std::path::PathBuf;
use std::time::Instant;

/// Actions the page asks the app shell to perform.
pub enum ReportAction {
    Generate,
}

/// Local page state: clipboard/save feedback only. The report text itself
/// lives in the fetch slot.
pub struct ReportPage {
    copied_at: Option<Instant>,
    save_result: Option<Result<PathBuf, String>>,
}

impl ReportPage {
    pub fn new() -> Self {
        Self {
            copied_at: None,
            save_result: None,
        }
    }

    pub fn render(
        &mut self,
        ui: &mut Ui,
        slot: &FetchSlot<String>,
        compact: bool,
    ) -> Option<ReportAction> {
        let mut action = None;

        if !compact {
            ui.vertical_centered(|ui| {
                ui.heading("Shift Report");
                ui.label(
                    RichText::new("Generated from live monitoring data and advance history")
                        .size(13.0)
                        .color(theme::text::MUTED),
                );
            });
            ui.add_space(12.0);
        }

        ui.vertical_centered(|ui| {
            let label = if slot.is_loading() {
                "Analyzing shift data..."
            } else {
                "Generate report"
            };
            if ui
                .add_enabled(!slot.is_loading(), egui::Button::new(label))
                .clicked()
            {
                action = Some(ReportAction::Generate);
                self.save_result = None;
            }
        });

        if let Some(err) = slot.error() {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(
                    theme::state::ERROR,
                    format!("Report generation failed: {}", err),
                );
            });
        }

        if slot.is_loading() {
            ui.add_space(12.0);
            theme::card().show(ui, |ui| {
                theme::skeleton_lines(ui, 5, ui.available_width() * 0.9);
            });
            return action;
        }

        let Some(report) = slot.data() else {
            return action;
        };

        ui.add_space(12.0);
        theme::card().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save").clicked() {
                        self.save_result = Some(save_report(report));
                    }
                    let recently_copied =
                        self.copied_at.is_some_and(|t| t.elapsed().as_secs() < 2);
                    let copy_label = if recently_copied { "Copied!" } else { "Copy" };
                    if ui.button(copy_label).clicked() {
                        ui.ctx().output_mut(|o| o.copied_text = report.clone());
                        self.copied_at = Some(Instant::now());
                    }
                    if recently_copied {
                        // Flip the label back once the feedback window ends.
                        ui.ctx().request_repaint_after(std::time::Duration::from_millis(300));
                    }
                });
            });
            match &self.save_result {
                Some(Ok(path)) => {
                    ui.label(
                        RichText::new(format!("Saved to {}", path.display()))
                            .size(12.0)
                            .color(theme::state::SUCCESS),
                    );
                }
                Some(Err(err)) => {
                    ui.label(RichText::new(err).size(12.0).color(theme::state::ERROR));
                }
                None => {}
            }
            ui.separator();

            let height = if compact { 180.0 } else { 420.0 };
            ScrollArea::vertical()
                .id_salt("report_scroll")
                .max_height(height)
                .show(ui, |ui| {
                    markdown_text(ui, report);
                });
        });

        action
    }
}

/// Minimal Markdown-ish rendering: headings, bullets, fenced code. The
/// report is display-only; anything fancier belongs in an external viewer.
fn markdown_text(ui: &mut Ui, text: &str) {
    let mut in_code = false;
    for line in text.lines() {
        if line.trim_start().starts_with("```") {
            in_code = !in_code;
            continue;
        }
        if in_code {
            egui::Frame::none()
                .fill(theme::bg::INSET)
                .inner_margin(egui::Margin::symmetric(8.0, 2.0))
                .show(ui, |ui| {
                    ui.monospace(line);
                });
        } else if let Some(rest) = line.strip_prefix("### ") {
            ui.label(RichText::new(rest).size(15.0).strong());
        } else if let Some(rest) = line.strip_prefix("## ") {
            ui.add_space(6.0);
            ui.label(RichText::new(rest).size(17.0).strong());
        } else if let Some(rest) = line.strip_prefix("# ") {
            ui.label(RichText::new(rest).size(20.0).strong());
            ui.separator();
        } else if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("•").color(theme::text::MUTED));
                ui.label(rest);
            });
        } else if line.trim().is_empty() {
            ui.add_space(6.0);
        } else {
            ui.label(line);
        }
    }
}

/// Write the report to the user's download directory with a dated name.
fn save_report(report: &str) -> Result<PathBuf, String> {
    let dir = dirs::download_dir().unwrap_or_else(std::env::temp_dir);
    let path = dir.join(format!("tbm_report_{}.md", Local::now().format("%Y-%m-%d")));
    std::fs::write(&path, report)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    Ok(path)
}
