use indexmap::IndexSet;

use crate::core::{LinearScale, format_tick_label, tick_step};
use crate::error::ChartResult;
use crate::render::{
    AXIS_COLOR, LABEL_COLOR, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::ChartState;

const AXIS_STROKE_WIDTH: f64 = 1.0;
const AXIS_TICK_SIZE_PX: f64 = 6.0;
const AXIS_TICK_PADDING_PX: f64 = 3.0;
const LABEL_INSET_PX: f64 = 5.0;
const ATTRIBUTION_FONT_SIZE_PX: f64 = 12.0;

impl<R: Renderer> ChartState<R> {
    /// Materializes the displayed state as draw primitives.
    ///
    /// Rects hold one bar per displayed element in rank order; texts start
    /// with the matching in-bar labels, followed by axis labels and the
    /// attribution line.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.config.viewport);
        let plot = self.plot;
        let bars = self.displayed_bars();

        for bar in bars {
            let geometry = bar.geometry;
            frame.rects.push(RectPrimitive::new(
                plot.left,
                plot.top + geometry.y,
                geometry.width,
                geometry.height,
                self.bar_fill(bar),
            ));
        }

        for bar in bars.iter().filter(|bar| !bar.record.reason.is_empty()) {
            let geometry = bar.geometry;
            frame.texts.push(TextPrimitive::new(
                bar.record.reason.as_str(),
                plot.left + LABEL_INSET_PX,
                plot.top + geometry.y + geometry.height / 2.0,
                self.config.label_font_size_px,
                LABEL_COLOR,
                TextHAlign::Left,
            ));
        }

        self.push_category_axis(&mut frame);
        self.push_count_axis(&mut frame)?;

        if let Some(attribution) = self
            .config
            .attribution
            .as_deref()
            .filter(|text| !text.is_empty())
        {
            frame.texts.push(TextPrimitive::new(
                attribution,
                plot.left + plot.width / 2.0,
                plot.bottom() + self.config.margins.bottom * 0.75,
                ATTRIBUTION_FONT_SIZE_PX,
                AXIS_COLOR,
                TextHAlign::Left,
            ));
        }

        Ok(frame)
    }

    /// Left axis: domain line plus one tick and label per displayed band.
    fn push_category_axis(&self, frame: &mut RenderFrame) {
        let plot = self.plot;
        frame.lines.push(LinePrimitive::new(
            plot.left,
            plot.top,
            plot.left,
            plot.bottom(),
            AXIS_STROKE_WIDTH,
            AXIS_COLOR,
        ));

        let mut seen = IndexSet::new();
        for bar in self.displayed_bars() {
            if !seen.insert(bar.record.reason.as_str()) {
                continue;
            }
            let center_y = plot.top + bar.geometry.y + bar.geometry.height / 2.0;
            frame.lines.push(LinePrimitive::new(
                plot.left - AXIS_TICK_SIZE_PX,
                center_y,
                plot.left,
                center_y,
                AXIS_STROKE_WIDTH,
                AXIS_COLOR,
            ));
            if !bar.record.reason.is_empty() {
                frame.texts.push(TextPrimitive::new(
                    bar.record.reason.as_str(),
                    plot.left - AXIS_TICK_SIZE_PX - AXIS_TICK_PADDING_PX,
                    center_y,
                    self.config.axis_font_size_px,
                    AXIS_COLOR,
                    TextHAlign::Right,
                ));
            }
        }
    }

    /// Bottom axis: domain line plus nice ticks over the displayed count range.
    fn push_count_axis(&self, frame: &mut RenderFrame) -> ChartResult<()> {
        let plot = self.plot;
        let axis_y = plot.bottom();
        frame.lines.push(LinePrimitive::new(
            plot.left,
            axis_y,
            plot.right(),
            axis_y,
            AXIS_STROKE_WIDTH,
            AXIS_COLOR,
        ));

        let axis_max = self.displayed_axis_max();
        let scale = LinearScale::for_counts(axis_max, plot.width)?;
        let tick_count = self.config.axis_tick_count;
        let step = tick_step(0.0, axis_max, tick_count).unwrap_or(1.0);
        let label_y = axis_y
            + AXIS_TICK_SIZE_PX
            + AXIS_TICK_PADDING_PX
            + self.config.axis_font_size_px / 2.0;

        for value in scale.ticks(tick_count) {
            let x = plot.left + scale.map(value);
            frame.lines.push(LinePrimitive::new(
                x,
                axis_y,
                x,
                axis_y + AXIS_TICK_SIZE_PX,
                AXIS_STROKE_WIDTH,
                AXIS_COLOR,
            ));
            frame.texts.push(TextPrimitive::new(
                format_tick_label(value, step),
                x,
                label_y,
                self.config.axis_font_size_px,
                AXIS_COLOR,
                TextHAlign::Center,
            ));
        }

        Ok(())
    }
}
