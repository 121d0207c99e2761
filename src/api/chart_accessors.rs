use crate::core::{PlotArea, ScalePair};
use crate::data::{Dataset, RankedView};
use crate::render::Renderer;

use super::{BarElement, ChartConfig, ChartPhase, ChartState};

impl<R: Renderer> ChartState<R> {
    #[must_use]
    pub fn phase(&self) -> ChartPhase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    /// Dataset bound by the last `load`, in source order.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The bound view. During a transition this is already the target view.
    #[must_use]
    pub fn view(&self) -> &RankedView {
        &self.view
    }

    /// Scales of the bound view.
    #[must_use]
    pub fn scales(&self) -> &ScalePair {
        &self.scales
    }

    /// Bars as currently drawn, including bars still exiting a transition.
    #[must_use]
    pub fn displayed_bars(&self) -> &[BarElement] {
        match &self.transition {
            Some(transition) => transition.displayed(),
            None => &self.bars,
        }
    }

    /// Upper bound of the count axis as currently drawn.
    #[must_use]
    pub fn displayed_axis_max(&self) -> f64 {
        match &self.transition {
            Some(transition) => transition.axis_max(),
            None => self.axis_max,
        }
    }

    #[must_use]
    pub fn hovered_index(&self) -> Option<usize> {
        self.interaction.hovered_index()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
