use tracing::trace;

use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartState;

impl<R: Renderer> ChartState<R> {
    /// Advances a running transition by `elapsed_ms` and redraws.
    ///
    /// Returns whether the transition is still running afterwards. Without
    /// a running transition this is a no-op returning `false`.
    pub fn advance(&mut self, elapsed_ms: f64) -> ChartResult<bool> {
        let Some(transition) = self.transition.as_mut() else {
            return Ok(false);
        };

        transition.step(elapsed_ms);
        trace!(progress = transition.progress(), "transition step");
        self.settle_if_finished();
        self.render()?;
        Ok(self.transition.is_some())
    }

    /// Jumps a running transition to its end state.
    pub fn finish_transition(&mut self) -> ChartResult<()> {
        let Some(transition) = self.transition.as_mut() else {
            return Ok(());
        };

        trace!(remaining_ms = transition.remaining_ms(), "finish transition");
        transition.complete();
        self.settle_if_finished();
        self.render()
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Progress of the running transition in `[0, 1]`, before easing.
    #[must_use]
    pub fn transition_progress(&self) -> Option<f64> {
        self.transition.as_ref().map(|transition| transition.progress())
    }
}
