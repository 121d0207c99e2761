use approx::assert_relative_eq;
use rankbar::api::{ChartConfig, ChartPhase, ChartState};
use rankbar::core::Viewport;
use rankbar::data::{Dataset, MalformedRowPolicy, Record, load_csv_reader, rank};
use rankbar::render::{NullRenderer, index_color};

const REASONS: [&str; 15] = [
    "Street Lights",
    "Sanitation",
    "Needle Pickup",
    "Pothole",
    "Graffiti",
    "Tree Maintenance",
    "Abandoned Vehicles",
    "Snow Plowing",
    "Parking Enforcement",
    "Missed Trash",
    "Rodent Activity",
    "Sidewalk Repair",
    "Noise",
    "Signs & Signals",
    "Park Maintenance",
];

fn service_dataset() -> Dataset {
    REASONS
        .iter()
        .enumerate()
        .map(|(index, reason)| {
            let count = ((index * 37) % 15 + 1) as f64 * 100.0;
            Record::new(*reason, count).expect("record")
        })
        .collect()
}

fn loaded_chart(config: ChartConfig) -> ChartState<NullRenderer> {
    let mut chart = ChartState::new(NullRenderer::default(), config).expect("chart init");
    chart.load(service_dataset()).expect("load");
    chart
}

#[test]
fn new_chart_starts_initial_and_draws_nothing() {
    let chart = ChartState::new(NullRenderer::default(), ChartConfig::default()).expect("init");
    assert_eq!(chart.phase(), ChartPhase::Initial);
    assert_eq!(chart.renderer().render_count, 0);
    assert!(chart.displayed_bars().is_empty());
}

#[test]
fn invalid_viewport_is_rejected() {
    let config = ChartConfig::new(Viewport::new(0, 500));
    assert!(ChartState::new(NullRenderer::default(), config).is_err());
}

#[test]
fn load_shows_top_ten_in_rank_order() {
    let chart = loaded_chart(ChartConfig::default());

    assert_eq!(chart.phase(), ChartPhase::ShowingTop10);
    assert_eq!(chart.renderer().render_count, 1);
    assert_eq!(chart.renderer().last_rect_count, 10);
    assert_eq!(chart.view().len(), 10);
    assert_eq!(chart.dataset().len(), 15);

    let expected: Vec<String> = rank(&service_dataset())
        .reasons()
        .take(10)
        .map(str::to_owned)
        .collect();
    assert_eq!(chart.scales().band.domain_vec(), expected);

    let frame = chart.renderer().last_frame.as_ref().expect("frame");
    for (index, rect) in frame.rects.iter().enumerate() {
        assert_eq!(rect.fill_color, index_color(index));
    }
}

#[test]
fn bar_geometry_follows_scales() {
    let chart = loaded_chart(ChartConfig::default());
    let plot = chart.plot_area();
    assert_eq!((plot.left, plot.top, plot.width, plot.height), (200.0, 40.0, 560.0, 380.0));

    let step = 380.0 / 10.2;
    let bars = chart.displayed_bars();
    assert_relative_eq!(bars[0].geometry.width, 560.0, epsilon = 1e-9);
    assert_relative_eq!(bars[0].geometry.height, step * 0.8, epsilon = 1e-9);
    assert_relative_eq!(bars[0].geometry.y, step * 0.2, epsilon = 1e-9);
    assert_relative_eq!(bars[1].geometry.y - bars[0].geometry.y, step, epsilon = 1e-9);

    let max = chart.view().max_count().expect("max");
    for bar in bars {
        assert_relative_eq!(bar.geometry.width, bar.record.count / max * 560.0, epsilon = 1e-9);
    }
}

#[test]
fn empty_dataset_renders_no_bars() {
    let mut chart = ChartState::new(NullRenderer::default(), ChartConfig::default()).expect("init");
    chart.load(Dataset::default()).expect("empty load");
    chart.render().expect("render");

    assert_eq!(chart.phase(), ChartPhase::ShowingTop10);
    assert_eq!(chart.renderer().last_rect_count, 0);
    assert!(chart.scales().linear.is_degenerate());
    assert!(chart.expand().expect("expand"));
    chart.finish_transition().expect("finish");
    assert!(chart.displayed_bars().is_empty());
}

#[test]
fn expand_binds_the_full_dataset() {
    let mut chart = loaded_chart(ChartConfig::default());
    assert!(chart.expand().expect("expand"));

    assert_eq!(chart.phase(), ChartPhase::ShowingFull);
    assert_eq!(chart.view().len(), 15);
    let full_max = service_dataset()
        .records()
        .iter()
        .map(|record| record.count)
        .fold(0.0, f64::max);
    assert_eq!(chart.scales().linear.domain(), (0.0, full_max));
    assert_eq!(chart.scales().band.len(), 15);
}

#[test]
fn expand_is_idempotent() {
    let mut chart = loaded_chart(ChartConfig::default());
    chart.expand().expect("expand");
    chart.finish_transition().expect("finish");
    let settled = chart.snapshot();
    let renders = chart.renderer().render_count;

    assert!(!chart.expand().expect("second expand"));
    assert_eq!(chart.snapshot(), settled);
    assert_eq!(chart.renderer().render_count, renders);
}

#[test]
fn expand_before_load_is_ignored() {
    let mut chart = ChartState::new(NullRenderer::default(), ChartConfig::default()).expect("init");
    assert!(!chart.expand().expect("expand"));
    assert!(!chart.collapse().expect("collapse"));
    assert_eq!(chart.phase(), ChartPhase::Initial);
    assert_eq!(chart.renderer().render_count, 0);
}

#[test]
fn render_view_keeps_phase_and_rebinds_scales() {
    let mut chart = loaded_chart(ChartConfig::default());
    let full = rank(chart.dataset());
    chart.render_view(full.clone()).expect("render view");

    assert_eq!(chart.phase(), ChartPhase::ShowingTop10);
    assert_eq!(chart.view(), &full);
    assert_eq!(chart.renderer().last_rect_count, 15);
    assert_eq!(
        chart.scales().band.domain_vec(),
        full.reasons().map(str::to_owned).collect::<Vec<_>>()
    );
}

#[test]
fn collapse_returns_to_top_entries() {
    let mut chart = loaded_chart(ChartConfig::default());
    let top = chart.snapshot();
    chart.expand().expect("expand");
    chart.finish_transition().expect("finish");

    assert!(chart.collapse().expect("collapse"));
    assert_eq!(chart.phase(), ChartPhase::ShowingTop10);
    assert_eq!(chart.displayed_bars().len(), 15);
    chart.finish_transition().expect("finish");

    assert_eq!(chart.displayed_bars().len(), 10);
    assert_eq!(chart.snapshot(), top);
}

#[test]
fn reload_replaces_dataset_from_any_phase() {
    let mut chart = loaded_chart(ChartConfig::default());
    chart.expand().expect("expand");

    let small: Dataset = [("Noise", 3.0), ("Pothole", 9.0)]
        .into_iter()
        .map(|(reason, count)| Record::new(reason, count).expect("record"))
        .collect();
    chart.load(small).expect("reload");

    assert_eq!(chart.phase(), ChartPhase::ShowingTop10);
    assert!(!chart.is_transitioning());
    assert_eq!(chart.scales().band.domain_vec(), vec!["Pothole", "Noise"]);
}

#[test]
fn failed_load_keeps_the_previous_dataset_and_view() {
    let mut chart = loaded_chart(ChartConfig::default());
    let dataset = chart.dataset().clone();
    let view = chart.view().clone();
    let renders = chart.renderer().render_count;

    let broken = Dataset::new(vec![Record {
        reason: "X".to_owned(),
        count: f64::NAN,
    }]);
    assert!(chart.load(broken).is_err());

    assert_eq!(chart.dataset(), &dataset);
    assert_eq!(chart.view(), &view);
    assert_eq!(chart.phase(), ChartPhase::ShowingTop10);
    assert_eq!(chart.renderer().render_count, renders);

    chart.expand().expect("expand");
    assert_eq!(chart.view().len(), REASONS.len());
}

#[test]
fn records_deserialize_only_with_valid_counts() {
    let record: Record =
        serde_json::from_str(r#"{"reason":"Noise","count":4.0}"#).expect("valid record");
    assert_eq!(record, Record::new("Noise", 4.0).expect("record"));
    assert!(serde_json::from_str::<Record>(r#"{"reason":"Noise","count":-1.0}"#).is_err());
    assert!(
        serde_json::from_str::<Dataset>(r#"{"records":[{"reason":"A","count":-2.0}]}"#).is_err()
    );
}

#[test]
fn subnormal_counts_render_without_ticks() {
    let outcome = load_csv_reader(
        "reason,Count\nTiny,1e-320\n".as_bytes(),
        "inline",
        MalformedRowPolicy::Reject,
    )
    .expect("load csv");
    let mut chart = ChartState::new(NullRenderer::default(), ChartConfig::default()).expect("init");
    chart.load(outcome.dataset).expect("load");

    let frame = chart.renderer().last_frame.as_ref().expect("frame");
    frame.validate().expect("valid frame");
    assert_eq!(frame.rects.len(), 1);
    assert_relative_eq!(frame.rects[0].width, chart.plot_area().width, epsilon = 1e-9);
}

#[test]
fn duplicate_reasons_share_a_band() {
    let dataset: Dataset = [("Noise", 9.0), ("Graffiti", 5.0), ("Noise", 2.0)]
        .into_iter()
        .map(|(reason, count)| Record::new(reason, count).expect("record"))
        .collect();
    let mut chart = ChartState::new(NullRenderer::default(), ChartConfig::default()).expect("init");
    chart.load(dataset).expect("load");

    let bars = chart.displayed_bars();
    assert_eq!(bars.len(), 3);
    assert_eq!(chart.scales().band.len(), 2);
    assert_eq!(bars[0].geometry.y, bars[2].geometry.y);
}

#[test]
fn frame_lists_axes_labels_and_attribution() {
    let chart = loaded_chart(ChartConfig::default().with_attribution("Source: boston.gov"));
    let frame = chart.build_render_frame().expect("frame");

    assert_eq!(frame.rects.len(), 10);
    for (text, bar) in frame.texts.iter().zip(chart.displayed_bars()) {
        assert_eq!(text.text, bar.record.reason);
    }
    assert!(frame.texts.iter().any(|text| text.text == "1,400"));
    assert_eq!(
        frame.texts.last().map(|text| text.text.as_str()),
        Some("Source: boston.gov")
    );
    frame.validate().expect("valid frame");
}

#[test]
fn snapshot_serializes_to_json() {
    let chart = loaded_chart(ChartConfig::default());
    let json = chart.snapshot_json_pretty().expect("snapshot json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");

    assert_eq!(value["phase"], "ShowingTop10");
    assert_eq!(value["bars"].as_array().map(Vec::len), Some(10));
    assert_eq!(value["bars"][3]["fill_rgb"], serde_json::json!([75, 30, 15]));
}
