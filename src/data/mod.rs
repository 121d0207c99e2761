//! Data preparation: CSV loading and ranked views.

mod loader;
mod ranking;
mod record;

pub use loader::{
    COUNT_COLUMN, LoadOutcome, LoadReport, MalformedRowPolicy, REASON_COLUMN, SkippedRow,
    load_csv_path, load_csv_reader,
};
pub use ranking::{RankedView, rank, top_n};
pub use record::{Dataset, Record};
