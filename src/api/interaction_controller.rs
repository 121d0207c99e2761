use tracing::{debug, trace};

use crate::error::ChartResult;
use crate::interaction::InputEvent;
use crate::render::{Color, HIGHLIGHT_COLOR, Renderer, index_color};

use super::{BarElement, ChartState};

impl<R: Renderer> ChartState<R> {
    /// Dispatches one host input event to the matching handler.
    pub fn handle_event(&mut self, event: InputEvent) -> ChartResult<()> {
        trace!(?event, "input event");
        match event {
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::ExpandClicked => self.expand().map(|_| ()),
            InputEvent::CollapseClicked => self.collapse().map(|_| ()),
            InputEvent::Tick { elapsed_ms } => self.advance(elapsed_ms).map(|_| ()),
        }
    }

    /// Updates the hovered bar from a pointer position in viewport pixels.
    ///
    /// Redraws only when the hovered bar changes.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        self.interaction.on_pointer_move(x, y);
        if self.refresh_hover() {
            debug!(hovered = ?self.interaction.hovered_index(), "hover changed");
            self.render()?;
        }
        Ok(())
    }

    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        let was_hovering = self.interaction.hovered_index().is_some();
        self.interaction.on_pointer_leave();
        if was_hovering {
            debug!("hover cleared");
            self.render()?;
        }
        Ok(())
    }

    /// Index of the displayed bar under viewport pixel `(x, y)`.
    ///
    /// The bar's far end is exclusive, so zero-width bars are never hit.
    #[must_use]
    pub fn bar_at(&self, x: f64, y: f64) -> Option<usize> {
        let (local_x, local_y) = self.plot.to_local(x, y);
        self.displayed_bars().iter().position(|bar| {
            let geometry = bar.geometry;
            (0.0..geometry.width).contains(&local_x)
                && (geometry.y..=geometry.y + geometry.height).contains(&local_y)
        })
    }

    /// Fill of a bar: the highlight while hovered, its rank color otherwise.
    #[must_use]
    pub fn bar_fill(&self, bar: &BarElement) -> Color {
        if self.interaction.hovered_index() == Some(bar.rank) {
            HIGHLIGHT_COLOR
        } else {
            index_color(bar.rank)
        }
    }

    /// Re-runs hit testing at the last pointer position.
    ///
    /// Returns `true` when the hovered bar changed.
    pub(super) fn refresh_hover(&mut self) -> bool {
        let hovered = self
            .interaction
            .cursor()
            .and_then(|(x, y)| self.bar_at(x, y));
        self.interaction.set_hovered(hovered)
    }
}
