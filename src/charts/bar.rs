//! Category bar chart used by the summary, geology, and gas pages.

use crate::theme;
use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Plot};

/// One labeled category bar.
#[derive(Debug, Clone)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
    pub color: Color32,
}

impl ChartBar {
    pub fn new(label: impl Into<String>, value: f64, color: Color32) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }
}

/// Vertical bar chart with one bar per category. Interaction is limited to
/// hover readout; the dashboard charts are not pannable.
pub fn bar_chart(ui: &mut Ui, id_salt: &str, bars: &[ChartBar], height: f32) {
    if bars.is_empty() {
        ui.label(
            RichText::new("No data")
                .color(theme::text::MUTED)
                .italics(),
        );
        return;
    }

    let chart = BarChart::new(
        bars.iter()
            .enumerate()
            .map(|(i, bar)| {
                Bar::new(i as f64, bar.value)
                    .width(0.6)
                    .fill(bar.color)
                    .name(&bar.label)
            })
            .collect(),
    );

    let labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();
    Plot::new(id_salt)
        .height(height)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid([false, true])
        .x_axis_formatter(move |mark, _range| {
            // Only whole-bar positions carry a category label.
            let index = mark.value.round();
            if (mark.value - index).abs() < 0.05 && index >= 0.0 && (index as usize) < labels.len()
            {
                labels[index as usize].clone()
            } else {
                String::new()
            }
        })
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{}: {:.2}", name, value.y)
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
