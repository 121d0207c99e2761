mod chart_accessors;
mod chart_config;
mod chart_state;
mod interaction_controller;
mod render_frame_builder;
mod snapshot_controller;
mod transition;
mod transition_controller;
mod view_controller;

pub use chart_config::{ChartConfig, DEFAULT_TOP_N, DEFAULT_TRANSITION_DURATION_MS};
pub use chart_state::{BarElement, BarGeometry, ChartPhase, ChartState};
pub use snapshot_controller::{BarSnapshot, ChartSnapshot};
pub use transition::ease_cubic_in_out;
