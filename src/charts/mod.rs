//! Chart wrappers around egui_plot.

pub mod bar;

pub use bar::{bar_chart, ChartBar};
