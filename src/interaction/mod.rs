use serde::{Deserialize, Serialize};

/// Input delivered by the host surface, processed one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer moved to viewport pixel `(x, y)`.
    PointerMove { x: f64, y: f64 },
    /// Pointer left the chart surface.
    PointerLeave,
    /// The "Show Extended Chart" button was clicked.
    ExpandClicked,
    /// Return from the extended chart to the top entries.
    CollapseClicked,
    /// Animation clock tick.
    Tick { elapsed_ms: f64 },
}

/// Pointer and hover state.
///
/// Purely presentational: hover never touches the bound view or scales.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    pointer_inside: bool,
    cursor_x: f64,
    cursor_y: f64,
    hovered_index: Option<usize>,
}

impl InteractionState {
    /// Last pointer position while the pointer is over the surface.
    #[must_use]
    pub fn cursor(self) -> Option<(f64, f64)> {
        self.pointer_inside
            .then_some((self.cursor_x, self.cursor_y))
    }

    #[must_use]
    pub fn hovered_index(self) -> Option<usize> {
        self.hovered_index
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer_inside = true;
        self.cursor_x = x;
        self.cursor_y = y;
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer_inside = false;
        self.hovered_index = None;
    }

    /// Returns `true` when the hovered element changed.
    pub fn set_hovered(&mut self, index: Option<usize>) -> bool {
        let changed = self.hovered_index != index;
        self.hovered_index = index;
        changed
    }
}
