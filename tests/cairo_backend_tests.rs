#![cfg(feature = "cairo-backend")]

use rankbar::api::{ChartConfig, ChartState};
use rankbar::data::{Dataset, Record};
use rankbar::render::{CairoRenderer, Renderer};

#[test]
fn cairo_renderer_draws_chart_frame_and_exports_png() {
    let dataset: Dataset = [("Street Lights", 40.0), ("Graffiti", 25.0), ("Noise", 10.0)]
        .into_iter()
        .map(|(reason, count)| Record::new(reason, count).expect("record"))
        .collect();

    let renderer = CairoRenderer::new(800, 500).expect("cairo surface");
    let config = ChartConfig::default().with_attribution("Source: boston.gov");
    let mut chart = ChartState::new(renderer, config).expect("chart init");
    chart.load(dataset).expect("load");

    let stats = chart.renderer().last_stats();
    assert_eq!(stats.rects_drawn, 3);
    assert!(stats.texts_drawn >= 7);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("chart.png");
    chart.renderer().write_png(&path).expect("write png");
    let bytes = std::fs::read(&path).expect("png written");
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn cairo_renderer_rejects_empty_surface() {
    assert!(CairoRenderer::new(0, 500).is_err());

    let mut renderer = CairoRenderer::new(10, 10).expect("cairo surface");
    let frame = rankbar::render::RenderFrame::new(rankbar::core::Viewport::new(0, 10));
    assert!(renderer.render(&frame).is_err());
}
