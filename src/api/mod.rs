//! API client module for communicating with the analysis backend.

mod client;
mod types;

pub use client::ApiClient;
pub use types::{EfficiencyRow, ExceedSegment, GasData, GasStat, LithologyData, SummaryData};
