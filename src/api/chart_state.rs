use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PlotArea, ScalePair};
use crate::data::{Dataset, RankedView, Record};
use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::{ChartConfig, transition::BarTransition};

/// Which view the chart currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartPhase {
    /// No dataset bound yet.
    Initial,
    /// The top `config.top_n` entries.
    ShowingTop10,
    /// Every entry of the dataset.
    ShowingFull,
}

/// Plot-local geometry of one bar. Bars always start at the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub y: f64,
    pub height: f64,
    pub width: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        Self {
            y: self.y + (target.y - self.y) * t,
            height: self.height + (target.height - self.height) * t,
            width: self.width + (target.width - self.width) * t,
        }
    }

    /// Same band, zero length.
    #[must_use]
    pub fn collapsed(self) -> Self {
        Self { width: 0.0, ..self }
    }
}

/// One displayed bar with its in-bar label.
///
/// `rank` is the position in the bar list and drives the fill color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarElement {
    pub record: Record,
    pub rank: usize,
    pub geometry: BarGeometry,
}

/// Chart state machine driving a renderer.
///
/// Owns the loaded dataset, the one bound view with its scales, the
/// displayed bar geometry (which lags the bound view while a transition
/// runs) and hover state.
pub struct ChartState<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) plot: PlotArea,
    pub(super) phase: ChartPhase,
    pub(super) dataset: Dataset,
    pub(super) ranked: RankedView,
    pub(super) view: RankedView,
    pub(super) scales: ScalePair,
    pub(super) bars: Vec<BarElement>,
    pub(super) axis_max: f64,
    pub(super) transition: Option<BarTransition>,
    pub(super) interaction: InteractionState,
}

impl<R: Renderer> ChartState<R> {
    /// Creates an empty chart; nothing is drawn until `load`.
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        let plot = config.validate()?;
        let view = RankedView::default();
        let scales = ScalePair::for_view(&view, plot, config.band_padding)?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            top_n = config.top_n,
            "chart state created"
        );

        Ok(Self {
            renderer,
            config,
            plot,
            phase: ChartPhase::Initial,
            dataset: Dataset::default(),
            ranked: RankedView::default(),
            view,
            scales,
            bars: Vec::new(),
            axis_max: 0.0,
            transition: None,
            interaction: InteractionState::default(),
        })
    }

    /// Target bars for `view` under `scales`, one per record in view order.
    pub(super) fn target_bars(view: &RankedView, scales: &ScalePair) -> Vec<BarElement> {
        let height = scales.band.bandwidth();
        view.records()
            .iter()
            .enumerate()
            .map(|(rank, record)| BarElement {
                record: record.clone(),
                rank,
                geometry: BarGeometry {
                    y: scales.band_y(&record.reason).unwrap_or(0.0),
                    height,
                    width: scales.bar_length(record.count),
                },
            })
            .collect()
    }
}
