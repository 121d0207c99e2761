use indexmap::IndexSet;

use crate::error::{ChartError, ChartResult};

/// Categorical scale assigning each distinct label a band inside a range.
///
/// Bands are laid out in domain order with `padding_inner` (fraction of a
/// step left empty between bands) and `padding_outer` (fraction of a step
/// before the first and after the last band), centered in the range.
/// Repeated labels keep the band of their first occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: IndexSet<String>,
    range_start: f64,
    range_end: f64,
    padding_inner: f64,
    padding_outer: f64,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new<I, S>(
        domain: I,
        range_start: f64,
        range_end: f64,
        padding_inner: f64,
        padding_outer: f64,
    ) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "band scale range must be finite".to_owned(),
            ));
        }
        if !padding_inner.is_finite() || !(0.0..1.0).contains(&padding_inner) {
            return Err(ChartError::InvalidData(
                "band scale inner padding must be in [0, 1)".to_owned(),
            ));
        }
        if !padding_outer.is_finite() || padding_outer < 0.0 {
            return Err(ChartError::InvalidData(
                "band scale outer padding must be finite and >= 0".to_owned(),
            ));
        }

        let mut scale = Self {
            domain: domain.into_iter().map(Into::into).collect(),
            range_start,
            range_end,
            padding_inner,
            padding_outer,
            start: range_start,
            step: 0.0,
            bandwidth: 0.0,
        };
        scale.rescale();
        Ok(scale)
    }

    /// Same padding on both sides, the usual bar-chart setup.
    pub fn with_padding<I, S>(
        domain: I,
        range_start: f64,
        range_end: f64,
        padding: f64,
    ) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(domain, range_start, range_end, padding, padding)
    }

    fn rescale(&mut self) {
        let count = self.domain.len() as f64;
        let (low, high) = if self.range_end < self.range_start {
            (self.range_end, self.range_start)
        } else {
            (self.range_start, self.range_end)
        };
        let denominator = (count - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        self.step = (high - low) / denominator;
        let used = self.step * (count - self.padding_inner);
        self.start = low + (high - low - used) * 0.5;
        self.bandwidth = self.step * (1.0 - self.padding_inner);
    }

    #[must_use]
    pub fn domain(&self) -> impl ExactSizeIterator<Item = &str> {
        self.domain.iter().map(String::as_str)
    }

    #[must_use]
    pub fn domain_vec(&self) -> Vec<String> {
        self.domain.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.domain.get_index_of(label)
    }

    /// Start pixel of the band for `label`, `None` when not in the domain.
    #[must_use]
    pub fn position(&self, label: &str) -> Option<f64> {
        self.index_of(label).map(|index| self.band_start(index))
    }

    #[must_use]
    pub fn band_start(&self, index: usize) -> f64 {
        let index = if self.range_end < self.range_start {
            self.domain.len().saturating_sub(1 + index)
        } else {
            index
        };
        self.start + self.step * index as f64
    }

    #[must_use]
    pub fn center(&self, label: &str) -> Option<f64> {
        self.position(label).map(|start| start + self.bandwidth * 0.5)
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Label whose band contains `pixel`; the padding between bands is a miss.
    #[must_use]
    pub fn label_at(&self, pixel: f64) -> Option<&str> {
        if !pixel.is_finite() || self.step <= 0.0 {
            return None;
        }
        let offset = pixel - self.start;
        if offset < 0.0 {
            return None;
        }
        let slot = (offset / self.step).floor() as usize;
        if slot >= self.domain.len() || offset - slot as f64 * self.step > self.bandwidth {
            return None;
        }
        let index = if self.range_end < self.range_start {
            self.domain.len() - 1 - slot
        } else {
            slot
        };
        self.domain.get_index(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bands_are_centered_with_symmetric_padding() {
        let scale = BandScale::with_padding(["a", "b", "c"], 0.0, 380.0, 0.2).expect("scale");
        // step = 380 / (3 - 0.2 + 0.4)
        assert_relative_eq!(scale.step(), 118.75, epsilon = 1e-9);
        assert_relative_eq!(scale.bandwidth(), 95.0, epsilon = 1e-9);
        assert_relative_eq!(scale.position("a").expect("a"), 23.75, epsilon = 1e-9);
        assert_relative_eq!(
            scale.position("c").expect("c"),
            23.75 + 2.0 * 118.75,
            epsilon = 1e-9
        );
    }

    #[test]
    fn duplicate_labels_keep_first_band() {
        let scale = BandScale::with_padding(["a", "b", "a"], 0.0, 100.0, 0.0).expect("scale");
        assert_eq!(scale.len(), 2);
        assert_eq!(scale.index_of("a"), Some(0));
    }

    #[test]
    fn empty_domain_has_no_bands() {
        let scale = BandScale::with_padding(Vec::<String>::new(), 0.0, 100.0, 0.2).expect("scale");
        assert!(scale.is_empty());
        assert_eq!(scale.position("missing"), None);
        assert_eq!(scale.label_at(50.0), None);
    }

    #[test]
    fn label_at_skips_padding() {
        let scale = BandScale::with_padding(["a", "b"], 0.0, 100.0, 0.5).expect("scale");
        let a_center = scale.center("a").expect("a");
        assert_eq!(scale.label_at(a_center), Some("a"));
        assert_eq!(scale.label_at(scale.range().0 + 0.1), None);
    }

    #[test]
    fn invalid_padding_is_rejected() {
        assert!(BandScale::with_padding(["a"], 0.0, 100.0, 1.0).is_err());
        assert!(BandScale::new(["a"], 0.0, 100.0, 0.2, -0.1).is_err());
    }
}
