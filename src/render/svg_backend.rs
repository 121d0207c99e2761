use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Pure-Rust SVG backend.
///
/// Every `render` call produces a complete standalone document. When an
/// output path is set the document is also written to disk.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    output_path: Option<PathBuf>,
    document: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_output_path(path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn set_output_path(&mut self, path: Option<PathBuf>) {
        self.output_path = path;
    }

    #[must_use]
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    /// Markup of the last rendered frame; empty before the first render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let (document, stats) = frame_to_svg(frame);

        if let Some(path) = &self.output_path {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|err| write_error(path, err))?;
            }
            fs::write(path, &document).map_err(|err| write_error(path, err))?;
        }

        self.document = document;
        self.last_stats = stats;
        Ok(())
    }
}

fn frame_to_svg(frame: &RenderFrame) -> (String, SvgRenderStats) {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    let mut stats = SvgRenderStats::default();
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{width}' height='{height}' viewBox='0 0 {width} {height}'>"
    );
    let _ = writeln!(
        svg,
        "  <rect width='{width}' height='{height}' fill='{}'{}/>",
        css_color(frame.background),
        opacity_attr("fill-opacity", frame.background),
    );

    for rect in &frame.rects {
        let _ = write!(
            svg,
            "  <rect x='{:.2}' y='{:.2}' width='{:.2}' height='{:.2}' fill='{}'{}",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            css_color(rect.fill_color),
            opacity_attr("fill-opacity", rect.fill_color),
        );
        if rect.corner_radius > 0.0 {
            let _ = write!(svg, " rx='{:.2}'", rect.corner_radius);
        }
        if rect.border_width > 0.0 {
            let _ = write!(
                svg,
                " stroke='{}' stroke-width='{:.2}'{}",
                css_color(rect.border_color),
                rect.border_width,
                opacity_attr("stroke-opacity", rect.border_color),
            );
        }
        let _ = writeln!(svg, "/>");
        stats.rects_drawn += 1;
    }

    for line in &frame.lines {
        let _ = writeln!(
            svg,
            "  <line x1='{:.2}' y1='{:.2}' x2='{:.2}' y2='{:.2}' stroke='{}' stroke-width='{:.2}'{}/>",
            line.x1,
            line.y1,
            line.x2,
            line.y2,
            css_color(line.color),
            line.stroke_width,
            opacity_attr("stroke-opacity", line.color),
        );
        stats.lines_drawn += 1;
    }

    for text in &frame.texts {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        let _ = writeln!(
            svg,
            "  <text x='{:.2}' y='{:.2}' font-family='sans-serif' font-size='{:.1}' fill='{}' text-anchor='{anchor}' dominant-baseline='central'{}>{}</text>",
            text.x,
            text.y,
            text.font_size_px,
            css_color(text.color),
            opacity_attr("fill-opacity", text.color),
            escape_text(&text.text),
        );
        stats.texts_drawn += 1;
    }

    let _ = writeln!(svg, "</svg>");
    (svg, stats)
}

fn css_color(color: Color) -> String {
    let (red, green, blue) = color.to_rgb8();
    format!("rgb({red},{green},{blue})")
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.alpha >= 1.0 {
        String::new()
    } else {
        format!(" {name}='{:.3}'", color.alpha)
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn write_error(path: &Path, err: std::io::Error) -> ChartError {
    ChartError::InvalidData(format!("failed to write svg to `{}`: {err}", path.display()))
}
