use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::data::{Dataset, Record};

/// Records sorted by `count` descending, possibly truncated.
///
/// Views are derived from a [`Dataset`] and replaced, never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedView {
    records: Vec<Record>,
}

impl RankedView {
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

    /// Largest count in the view; `None` for an empty view.
    #[must_use]
    pub fn max_count(&self) -> Option<f64> {
        self.records
            .iter()
            .map(|record| OrderedFloat(record.count))
            .max()
            .map(|count| count.0)
    }

    pub fn reasons(&self) -> impl ExactSizeIterator<Item = &str> {
        self.records.iter().map(|record| record.reason.as_str())
    }
}

/// Stable sort by count, descending; equal counts keep source order.
#[must_use]
pub fn rank(dataset: &Dataset) -> RankedView {
    let mut records = dataset.records().to_vec();
    records.sort_by_key(|record| Reverse(OrderedFloat(record.count)));
    RankedView { records }
}

/// First `n` entries of an already ranked view.
///
/// `n` past the end returns the whole view unchanged.
#[must_use]
pub fn top_n(view: &RankedView, n: usize) -> RankedView {
    let take = n.min(view.records.len());
    RankedView {
        records: view.records[..take].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(reason: &str, count: f64) -> Record {
        Record::new(reason, count).expect("valid record")
    }

    #[test]
    fn rank_sorts_descending() {
        let dataset = Dataset::new(vec![record("A", 5.0), record("B", 12.0), record("C", 3.0)]);
        let ranked = rank(&dataset);
        let reasons: Vec<&str> = ranked.reasons().collect();
        assert_eq!(reasons, vec!["B", "A", "C"]);
    }

    #[test]
    fn ties_keep_source_order() {
        let dataset = Dataset::new(vec![
            record("first", 7.0),
            record("big", 9.0),
            record("second", 7.0),
            record("third", 7.0),
        ]);
        let ranked = rank(&dataset);
        let reasons: Vec<&str> = ranked.reasons().collect();
        assert_eq!(reasons, vec!["big", "first", "second", "third"]);
    }

    #[test]
    fn top_n_past_end_returns_whole_view() {
        let dataset = Dataset::new(vec![record("A", 1.0), record("B", 2.0)]);
        let ranked = rank(&dataset);
        assert_eq!(top_n(&ranked, 10), ranked);
        assert!(top_n(&ranked, 0).is_empty());
    }

    #[test]
    fn empty_view_has_no_max() {
        assert_eq!(rank(&Dataset::default()).max_count(), None);
    }
}
