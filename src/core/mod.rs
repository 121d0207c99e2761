pub mod band_scale;
pub mod scale;
pub mod scale_pair;
pub mod ticks;
pub mod types;

pub use band_scale::BandScale;
pub use scale::LinearScale;
pub use scale_pair::{DEFAULT_BAND_PADDING, ScalePair};
pub use ticks::{format_tick_label, linear_ticks, tick_step};
pub use types::{Margins, PlotArea, Viewport};
