//! Segmented lithology timeline ("rock band").
//!
//! Converts irregular time-stamped lithology segments into a proportionally
//! scaled horizontal band: hourly tick marks, colored segments with hover
//! detail, and a legend of the classes present.

pub mod layout;
pub mod scale;
pub mod types;
pub mod widget;

pub use layout::BandLayout;
pub use types::{Lithology, RockPalette, RockSegment};
pub use widget::{HoverInfo, RockBand};
