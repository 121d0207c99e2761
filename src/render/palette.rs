use crate::render::Color;

/// Fill of a hovered bar.
pub const HIGHLIGHT_COLOR: Color = Color::rgb(1.0, 165.0 / 255.0, 0.0);
/// Fill of in-bar labels.
pub const LABEL_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);
/// Axis lines, ticks and tick labels.
pub const AXIS_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);

/// Bar fill for rank position `index`: `rgb(25i, 10i, 5i)`, channels
/// saturating at 255.
///
/// The color follows the position, not the category: when the view grows
/// or reorders, a category's color moves with its rank.
#[must_use]
pub fn index_color(index: usize) -> Color {
    let channel = |factor: usize| index.saturating_mul(factor).min(255) as u8;
    Color::rgb8(channel(25), channel(10), channel(5))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_color_follows_position_gradient() {
        assert_eq!(index_color(0).to_rgb8(), (0, 0, 0));
        assert_eq!(index_color(3).to_rgb8(), (75, 30, 15));
        assert_eq!(index_color(11).to_rgb8(), (255, 110, 55));
        assert_eq!(index_color(usize::MAX).to_rgb8(), (255, 255, 255));
    }
}
