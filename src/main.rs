//! Native TBM operation monitoring dashboard.
//!
//! A desktop app that fetches shift summary, lithology, gas, and report
//! data from the analysis backend and renders them as cards and charts.

mod api;
mod app;
mod cards;
mod charts;
mod fetch;
mod pages;
mod settings;
mod theme;
mod timeline;

use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("TBM Monitoring Dashboard"),
        persist_window: true, // Persist window state and egui memory between sessions
        ..Default::default()
    };

    eframe::run_native(
        "TBM Monitoring Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(app::DashboardApp::new(cc)))),
    )
}
