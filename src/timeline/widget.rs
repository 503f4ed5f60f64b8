//! Rock-band rendering: tick row, segment track, hover detail, legend.

use super::layout::{Band, BandLayout};
use super::types::{Lithology, RockPalette, RockSegment};
use crate::theme;
use eframe::egui::{
    self, Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Stroke, Ui, Vec2,
};

/// Height of the hour-tick row above the track.
const TICK_ROW_HEIGHT: f32 = 24.0;
/// Height of the segment track.
const TRACK_HEIGHT: f32 = 48.0;
/// Separator stroke between adjacent bands.
const SEPARATOR_WIDTH: f32 = 2.0;

/// Snapshot of the segment under the pointer, refreshed on every pointer
/// move and cleared when the pointer leaves the track.
#[derive(Debug, Clone)]
pub struct HoverInfo {
    pub pos: Pos2,
    /// Index into the sorted segment list.
    pub segment: usize,
    pub label: Lithology,
    pub start: String,
    pub end: String,
    pub duration_min: f64,
    pub color: Color32,
}

/// Rock-band widget state.
///
/// The layout is derived once per data batch in [`RockBand::new`]; between
/// frames only the hover state changes, so pointer interaction never
/// triggers re-sorting or re-scaling.
pub struct RockBand {
    layout: Option<BandLayout>,
    hover: Option<HoverInfo>,
}

impl RockBand {
    /// Widget with no data; renders the placeholder.
    pub fn empty() -> Self {
        Self {
            layout: None,
            hover: None,
        }
    }

    /// Derive the layout for a fresh batch of segments. The palette is
    /// owned by the calling page and only read here.
    pub fn new(segments: &[RockSegment], palette: &RockPalette) -> Self {
        Self {
            layout: BandLayout::new(segments, palette),
            hover: None,
        }
    }

    /// Current hover detail, if a band is under the pointer.
    pub fn hover(&self) -> Option<&HoverInfo> {
        self.hover.as_ref()
    }

    pub fn show(&mut self, ui: &mut Ui) {
        let Some(layout) = &self.layout else {
            self.hover = None;
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.label(
                    RichText::new("No segment data")
                        .color(theme::text::MUTED)
                        .italics(),
                );
                ui.add_space(20.0);
            });
            return;
        };

        let width = ui.available_width();

        // Hour-tick row
        let (tick_rect, _) =
            ui.allocate_exact_size(Vec2::new(width, TICK_ROW_HEIGHT), Sense::hover());
        let painter = ui.painter();
        for tick in &layout.ticks {
            let x = tick_rect.left() + tick_rect.width() * tick.percent / 100.0;
            painter.text(
                Pos2::new(x, tick_rect.top()),
                Align2::CENTER_TOP,
                tick.label(),
                FontId::proportional(12.0),
                theme::text::FAINT,
            );
            painter.line_segment(
                [
                    Pos2::new(x, tick_rect.bottom() - 5.0),
                    Pos2::new(x, tick_rect.bottom() - 1.0),
                ],
                theme::stroke(theme::border::DEFAULT, 1.0),
            );
        }

        ui.add_space(4.0);

        // Track with one band per segment
        let (track_rect, response) =
            ui.allocate_exact_size(Vec2::new(width, TRACK_HEIGHT), Sense::hover());
        let track_painter = ui.painter().with_clip_rect(track_rect);
        track_painter.rect_filled(track_rect, 12.0, theme::bg::INSET);

        let pointer = response.hover_pos();
        // Later segments paint on top of earlier ones, so hit-test from the
        // end to match what is visible.
        let hovered_segment = pointer.and_then(|pos| {
            layout
                .bands
                .iter()
                .rev()
                .find(|band| band_rect(track_rect, band).contains(pos))
                .map(|band| band.segment)
        });

        for band in &layout.bands {
            let rect = band_rect(track_rect, band);
            let fill = if hovered_segment == Some(band.segment) {
                band.color.gamma_multiply(0.8)
            } else {
                band.color
            };
            track_painter.rect_filled(rect, 0.0, fill);
            track_painter.line_segment(
                [rect.right_top(), rect.right_bottom()],
                Stroke::new(SEPARATOR_WIDTH, theme::bg::CARD),
            );
        }
        ui.painter()
            .rect_stroke(track_rect, 12.0, theme::stroke(theme::border::DEFAULT, 1.0));

        // Hover tracking: last pointer wins, cleared on leave.
        self.hover = match (pointer, hovered_segment) {
            (Some(pos), Some(index)) => {
                let seg = &layout.segments[index];
                Some(HoverInfo {
                    pos,
                    segment: index,
                    label: seg.label.clone(),
                    start: seg.start.clone(),
                    end: seg.end.clone(),
                    duration_min: seg.duration / 60.0,
                    color: layout.bands[index].color,
                })
            }
            _ => None,
        };

        if let Some(hover) = &self.hover {
            show_hover_panel(ui, hover);
        }

        // Legend
        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 16.0;
            for entry in &layout.legend {
                ui.horizontal(|ui| {
                    let (dot, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
                    ui.painter().circle_filled(dot.center(), 6.0, entry.color);
                    ui.label(
                        RichText::new(format!("Lithology {}", entry.label))
                            .size(13.0)
                            .color(theme::text::SECONDARY),
                    );
                });
            }
        });
    }
}

fn band_rect(track: Rect, band: &Band) -> Rect {
    let left = track.left() + track.width() * band.left_pct / 100.0;
    let width = track.width() * band.width_pct / 100.0;
    Rect::from_min_size(Pos2::new(left, track.top()), Vec2::new(width, track.height()))
}

/// Floating detail panel that follows the cursor.
fn show_hover_panel(ui: &Ui, hover: &HoverInfo) {
    egui::Area::new(egui::Id::new("rock_band_hover"))
        .order(egui::Order::Tooltip)
        .fixed_pos(hover.pos + Vec2::new(16.0, 16.0))
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style())
                .fill(theme::bg::CARD)
                .stroke(theme::stroke(theme::border::SUBTLE, 1.0))
                .show(ui, |ui| {
                    ui.set_min_width(150.0);
                    ui.horizontal(|ui| {
                        let (dot, _) = ui.allocate_exact_size(Vec2::splat(8.0), Sense::hover());
                        ui.painter().circle_filled(dot.center(), 4.0, hover.color);
                        ui.label(RichText::new(format!("Lithology {}", hover.label)).strong());
                    });
                    ui.label(
                        RichText::new(format!("{} - {}", hover.start, hover.end))
                            .color(theme::text::MUTED),
                    );
                    ui.label(
                        RichText::new(format!("{:.1} min", hover.duration_min))
                            .color(theme::text::SECONDARY),
                    );
                });
        });
}
