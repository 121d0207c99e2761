use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One category/count pair from the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordFields")]
pub struct Record {
    pub reason: String,
    pub count: f64,
}

#[derive(Deserialize)]
struct RecordFields {
    reason: String,
    count: f64,
}

impl TryFrom<RecordFields> for Record {
    type Error = ChartError;

    fn try_from(fields: RecordFields) -> ChartResult<Self> {
        Self::new(fields.reason, fields.count)
    }
}

impl Record {
    /// Creates a record; `count` must be finite and `>= 0`.
    pub fn new(reason: impl Into<String>, count: f64) -> ChartResult<Self> {
        let record = Self {
            reason: reason.into(),
            count,
        };
        record.validate()?;
        Ok(record)
    }

    /// Re-checks the count invariant, for records built field by field.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.count.is_finite() || self.count < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "record `{}` count must be finite and >= 0",
                self.reason
            )));
        }
        Ok(())
    }
}

/// Records in source order. Built once at load time and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.records.iter().try_for_each(Record::validate)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
