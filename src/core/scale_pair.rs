use crate::core::{BandScale, LinearScale, PlotArea};
use crate::data::RankedView;
use crate::error::ChartResult;

/// Band padding used by the bar chart, both inner and outer.
pub const DEFAULT_BAND_PADDING: f64 = 0.2;

/// Categorical (reason -> vertical band) and linear (count -> bar length)
/// scales derived from one view.
///
/// Always rebuilt from the view it belongs to; never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalePair {
    pub band: BandScale,
    pub linear: LinearScale,
}

impl ScalePair {
    pub fn for_view(view: &RankedView, plot: PlotArea, band_padding: f64) -> ChartResult<Self> {
        let band = BandScale::with_padding(view.reasons(), 0.0, plot.height, band_padding)?;
        let linear = LinearScale::for_counts(view.max_count().unwrap_or(0.0), plot.width)?;
        Ok(Self { band, linear })
    }

    /// Plot-local y of the band holding `reason`.
    #[must_use]
    pub fn band_y(&self, reason: &str) -> Option<f64> {
        self.band.position(reason)
    }

    /// Plot-local bar length for `count`.
    #[must_use]
    pub fn bar_length(&self, count: f64) -> f64 {
        self.linear.map(count)
    }
}
