//! rankbar: ranked category bar chart engine.
//!
//! Loads category/count records from CSV, ranks them, and drives an
//! animated horizontal bar chart (top entries first, expandable to the
//! full dataset) through backend-agnostic render frames.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartPhase, ChartState};
pub use data::{Dataset, MalformedRowPolicy, RankedView, Record, load_csv_path, rank, top_n};
pub use error::{ChartError, ChartResult};
