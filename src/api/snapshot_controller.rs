use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{BarGeometry, ChartPhase, ChartState};

/// One displayed bar in a [`ChartSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSnapshot {
    pub rank: usize,
    pub reason: String,
    pub count: f64,
    pub geometry: BarGeometry,
    pub fill_rgb: (u8, u8, u8),
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub phase: ChartPhase,
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub band_domain: Vec<String>,
    pub bandwidth: f64,
    pub count_domain: (f64, f64),
    pub displayed_axis_max: f64,
    pub transition_progress: Option<f64>,
    pub hovered_index: Option<usize>,
    pub bars: Vec<BarSnapshot>,
}

impl<R: Renderer> ChartState<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            phase: self.phase,
            viewport: self.config.viewport,
            plot: self.plot,
            band_domain: self.scales.band.domain_vec(),
            bandwidth: self.scales.band.bandwidth(),
            count_domain: self.scales.linear.domain(),
            displayed_axis_max: self.displayed_axis_max(),
            transition_progress: self.transition_progress(),
            hovered_index: self.hovered_index(),
            bars: self
                .displayed_bars()
                .iter()
                .map(|bar| BarSnapshot {
                    rank: bar.rank,
                    reason: bar.record.reason.clone(),
                    count: bar.record.count,
                    geometry: bar.geometry,
                    fill_rgb: self.bar_fill(bar).to_rgb8(),
                })
                .collect(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
