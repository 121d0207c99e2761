use proptest::prelude::*;
use rankbar::data::{Dataset, Record, rank, top_n};

fn dataset_from_counts(counts: &[u32]) -> Dataset {
    counts
        .iter()
        .enumerate()
        .map(|(index, count)| Record::new(format!("r{index}"), f64::from(*count)).expect("record"))
        .collect()
}

fn source_index(reason: &str) -> usize {
    reason[1..].parse().expect("generated reason")
}

#[test]
fn rank_matches_worked_example() {
    let dataset: Dataset = [("A", 5.0), ("B", 12.0), ("C", 3.0)]
        .into_iter()
        .map(|(reason, count)| Record::new(reason, count).expect("record"))
        .collect();

    let ranked = rank(&dataset);
    let pairs: Vec<(&str, f64)> = ranked
        .records()
        .iter()
        .map(|record| (record.reason.as_str(), record.count))
        .collect();
    assert_eq!(pairs, vec![("B", 12.0), ("A", 5.0), ("C", 3.0)]);
}

#[test]
fn top_ten_of_fifteen_keeps_the_largest_counts() {
    let counts = [4, 90, 17, 3, 55, 8, 61, 29, 12, 70, 1, 44, 33, 6, 25];
    let ranked = rank(&dataset_from_counts(&counts));
    let top = top_n(&ranked, 10);

    assert_eq!(top.len(), 10);
    let smallest_kept = top
        .records()
        .iter()
        .map(|record| record.count)
        .fold(f64::INFINITY, f64::min);
    for excluded in &ranked.records()[10..] {
        assert!(smallest_kept >= excluded.count);
    }
}

#[test]
fn ranking_does_not_touch_the_dataset() {
    let dataset = dataset_from_counts(&[1, 3, 2]);
    let before = dataset.clone();
    let _ = rank(&dataset);
    assert_eq!(dataset, before);
}

proptest! {
    #[test]
    fn rank_is_a_sorted_permutation(counts in prop::collection::vec(0u32..50, 0..60)) {
        let dataset = dataset_from_counts(&counts);
        let ranked = rank(&dataset);

        prop_assert_eq!(ranked.len(), dataset.len());
        for pair in ranked.records().windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }

        let mut seen: Vec<usize> = ranked.reasons().map(source_index).collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..counts.len()).collect::<Vec<_>>());
    }

    #[test]
    fn equal_counts_keep_source_order(counts in prop::collection::vec(0u32..5, 0..60)) {
        let ranked = rank(&dataset_from_counts(&counts));
        for pair in ranked.records().windows(2) {
            if pair[0].count == pair[1].count {
                prop_assert!(source_index(&pair[0].reason) < source_index(&pair[1].reason));
            }
        }
    }

    #[test]
    fn top_n_is_a_prefix(counts in prop::collection::vec(0u32..1_000, 0..40), n in 0usize..50) {
        let ranked = rank(&dataset_from_counts(&counts));
        let top = top_n(&ranked, n);

        prop_assert_eq!(top.len(), n.min(ranked.len()));
        prop_assert_eq!(top.records(), &ranked.records()[..top.len()]);
    }
}
