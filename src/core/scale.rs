use serde::{Deserialize, Serialize};

use crate::core::ticks::linear_ticks;
use crate::error::{ChartError, ChartResult};

/// Continuous mapping from a numeric domain to a pixel range.
///
/// A degenerate domain (`start == end`) maps every value to `range_start`,
/// so a view whose counts are all zero still produces valid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Count axis: `[0, max_count]` onto `[0, length_px]`.
    pub fn for_counts(max_count: f64, length_px: f64) -> ChartResult<Self> {
        if max_count < 0.0 {
            return Err(ChartError::InvalidData(
                "max count must be >= 0".to_owned(),
            ));
        }
        Self::new(0.0, max_count, 0.0, length_px)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return self.range_start;
        }
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Human-friendly tick values inside the domain, about `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain_start, self.domain_end, count)
    }
}
