use tracing::debug;

use crate::core::ScalePair;
use crate::data::{Dataset, RankedView, rank, top_n};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{BarElement, ChartPhase, ChartState, transition::BarTransition};

impl<R: Renderer> ChartState<R> {
    /// Binds a freshly loaded dataset and shows its top entries.
    ///
    /// Draws immediately, without animation. Calling it again replaces the
    /// dataset and returns to the top view from any phase. On error the
    /// previous dataset, view and phase are kept.
    pub fn load(&mut self, dataset: Dataset) -> ChartResult<()> {
        dataset.validate()?;
        let ranked = rank(&dataset);
        let view = top_n(&ranked, self.config.top_n);
        let (scales, bars) = self.layout(&view)?;
        debug!(
            records = dataset.len(),
            shown = view.len(),
            from = ?self.phase,
            "load dataset"
        );

        self.dataset = dataset;
        self.ranked = ranked;
        self.commit_immediate(view, scales, bars);
        self.phase = ChartPhase::ShowingTop10;
        self.render()
    }

    /// Switches from the top entries to the full dataset with a transition.
    ///
    /// Returns `false` without side effects unless the chart shows the top
    /// entries, so repeated clicks do not restart the animation.
    pub fn expand(&mut self) -> ChartResult<bool> {
        if self.phase != ChartPhase::ShowingTop10 {
            debug!(phase = ?self.phase, "expand ignored");
            return Ok(false);
        }

        let full = self.ranked.clone();
        self.begin_transition(full)?;
        self.phase = ChartPhase::ShowingFull;
        debug!(shown = self.view.len(), "expanded to full view");
        self.render()?;
        Ok(true)
    }

    /// Reverse of [`expand`](Self::expand): animates back to the top entries.
    pub fn collapse(&mut self) -> ChartResult<bool> {
        if self.phase != ChartPhase::ShowingFull {
            debug!(phase = ?self.phase, "collapse ignored");
            return Ok(false);
        }

        let top = top_n(&self.ranked, self.config.top_n);
        self.begin_transition(top)?;
        self.phase = ChartPhase::ShowingTop10;
        debug!(shown = self.view.len(), "collapsed to top view");
        self.render()?;
        Ok(true)
    }

    /// Binds `view` without animation and draws it.
    ///
    /// The phase is left untouched; any running transition is dropped.
    pub fn render_view(&mut self, view: RankedView) -> ChartResult<()> {
        self.bind_immediate(view)?;
        self.render()
    }

    /// Draws the displayed state through the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    fn layout(&self, view: &RankedView) -> ChartResult<(ScalePair, Vec<BarElement>)> {
        let scales = ScalePair::for_view(view, self.plot, self.config.band_padding)?;
        let bars = Self::target_bars(view, &scales);
        Ok((scales, bars))
    }

    fn bind_immediate(&mut self, view: RankedView) -> ChartResult<()> {
        let (scales, bars) = self.layout(&view)?;
        self.commit_immediate(view, scales, bars);
        Ok(())
    }

    fn commit_immediate(&mut self, view: RankedView, scales: ScalePair, bars: Vec<BarElement>) {
        self.bars = bars;
        self.axis_max = scales.linear.domain().1;
        self.scales = scales;
        self.view = view;
        self.transition = None;
        self.refresh_hover();
    }

    fn begin_transition(&mut self, view: RankedView) -> ChartResult<()> {
        let (scales, targets) = self.layout(&view)?;
        let axis_to = scales.linear.domain().1;

        let mut transition = BarTransition::new(
            self.displayed_bars(),
            targets,
            self.displayed_axis_max(),
            axis_to,
            self.config.transition_duration_ms,
        );
        transition.step(0.0);

        self.scales = scales;
        self.view = view;
        self.transition = Some(transition);
        self.settle_if_finished();
        Ok(())
    }

    /// Promotes a finished transition to the settled bar list.
    pub(super) fn settle_if_finished(&mut self) {
        if let Some(transition) = self
            .transition
            .take_if(|transition| transition.is_finished())
        {
            self.bars = transition.into_targets();
            self.axis_max = self.scales.linear.domain().1;
            debug!(bars = self.bars.len(), "transition finished");
        }
        self.refresh_hover();
    }
}
