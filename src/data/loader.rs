use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::data::{Dataset, Record};
use crate::error::{ChartError, ChartResult};

/// Header of the category column. Matched with exact casing.
pub const REASON_COLUMN: &str = "reason";
/// Header of the count column. Matched with exact casing.
pub const COUNT_COLUMN: &str = "Count";

/// What to do with a row whose count does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MalformedRowPolicy {
    /// Fail the whole load with `ChartError::DataFormat` on the first bad row.
    #[default]
    Reject,
    /// Drop the row, log a warning and list it in the load report.
    Skip,
}

/// A row dropped under [`MalformedRowPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based data row index, header excluded.
    pub row: usize,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub origin: String,
    pub rows_read: usize,
    pub skipped_rows: Vec<SkippedRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub dataset: Dataset,
    pub report: LoadReport,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    reason: String,
    #[serde(rename = "Count")]
    count: String,
}

/// Loads a CSV file with `reason` and `Count` columns.
pub fn load_csv_path(path: impl AsRef<Path>, policy: MalformedRowPolicy) -> ChartResult<LoadOutcome> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|err| ChartError::data_load(origin.as_str(), err))?;
    load_csv_reader(file, origin, policy)
}

/// Loads CSV text from any reader. `origin` names the source in errors and logs.
pub fn load_csv_reader<R: Read>(
    reader: R,
    origin: impl Into<String>,
    policy: MalformedRowPolicy,
) -> ChartResult<LoadOutcome> {
    let origin = origin.into();
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|err| ChartError::data_load(origin.as_str(), err))?
        .clone();
    for required in [REASON_COLUMN, COUNT_COLUMN] {
        if !headers.iter().any(|header| header == required) {
            return Err(ChartError::data_load(
                origin.as_str(),
                format!("missing required column `{required}`"),
            ));
        }
    }

    let mut records = Vec::new();
    let mut skipped_rows = Vec::new();
    let mut rows_read = 0;
    for (index, row) in csv_reader.deserialize::<RawRow>().enumerate() {
        let row_number = index + 1;
        let raw = row.map_err(|err| ChartError::data_load(origin.as_str(), err))?;
        rows_read += 1;

        match parse_count(&raw.count) {
            Some(count) => records.push(Record {
                reason: raw.reason,
                count,
            }),
            None => match policy {
                MalformedRowPolicy::Reject => {
                    return Err(ChartError::DataFormat {
                        row: row_number,
                        value: raw.count,
                    });
                }
                MalformedRowPolicy::Skip => {
                    warn!(
                        origin = %origin,
                        row = row_number,
                        value = %raw.count,
                        "skipping row with malformed count"
                    );
                    skipped_rows.push(SkippedRow {
                        row: row_number,
                        value: raw.count,
                    });
                }
            },
        }
    }

    debug!(
        origin = %origin,
        rows_read,
        loaded = records.len(),
        skipped = skipped_rows.len(),
        "loaded dataset"
    );

    Ok(LoadOutcome {
        dataset: Dataset::new(records),
        report: LoadReport {
            origin,
            rows_read,
            skipped_rows,
        },
    })
}

fn parse_count(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|count| count.is_finite() && *count >= 0.0)
}
