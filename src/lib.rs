//! Chart of the Dutch gender pay gap.
//!
//! Reads the CBS StatLine datasets 81901NED (pay gap by age) and 81920NED
//! (pay gap by sector), aligns them on their shared years and renders a
//! three-panel figure that is shown in a window and saved as PNG.

pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod state;
pub mod ui;
