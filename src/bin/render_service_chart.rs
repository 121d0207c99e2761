use std::fs;
use std::path::PathBuf;

use rankbar::api::{ChartConfig, ChartState};
use rankbar::data::{MalformedRowPolicy, load_csv_path};
use rankbar::interaction::InputEvent;
use rankbar::render::SvgRenderer;

const DEFAULT_OUTPUT_DIR: &str = "target/out";
const DEFAULT_ATTRIBUTION: &str = "Source: boston.gov";
const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

#[derive(Debug)]
struct CliArgs {
    input_path: PathBuf,
    output_dir: PathBuf,
    config_path: Option<PathBuf>,
    policy: MalformedRowPolicy,
}

fn main() {
    let _ = rankbar::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartConfig::default().with_attribution(DEFAULT_ATTRIBUTION),
    };

    let outcome = load_csv_path(&args.input_path, args.policy).map_err(|err| err.to_string())?;
    println!(
        "loaded {} record(s) from {} ({} skipped)",
        outcome.dataset.len(),
        outcome.report.origin,
        outcome.report.skipped_rows.len()
    );

    let top_path = args.output_dir.join("top10.svg");
    let extended_path = args.output_dir.join("extended.svg");
    let snapshot_path = args.output_dir.join("snapshot.json");

    let renderer = SvgRenderer::with_output_path(&top_path);
    let mut chart = ChartState::new(renderer, config).map_err(|err| err.to_string())?;
    chart.load(outcome.dataset).map_err(|err| err.to_string())?;
    println!("wrote {}", top_path.display());

    // Intermediate frames go to the extended file and get overwritten by the final one.
    chart
        .renderer_mut()
        .set_output_path(Some(extended_path.clone()));
    chart
        .handle_event(InputEvent::ExpandClicked)
        .map_err(|err| err.to_string())?;
    let mut frames = 0usize;
    while chart.is_transitioning() {
        chart
            .handle_event(InputEvent::Tick {
                elapsed_ms: FRAME_INTERVAL_MS,
            })
            .map_err(|err| err.to_string())?;
        frames += 1;
    }
    println!("wrote {} after {frames} frame(s)", extended_path.display());

    #[cfg(feature = "cairo-backend")]
    write_png(&chart, &args.output_dir.join("extended.png"))?;

    let snapshot = chart.snapshot_json_pretty().map_err(|err| err.to_string())?;
    fs::write(&snapshot_path, snapshot).map_err(|err| {
        format!(
            "failed to write snapshot `{}`: {err}",
            snapshot_path.display()
        )
    })?;
    println!("wrote {}", snapshot_path.display());

    Ok(())
}

/// Rasterizes the current chart state next to the SVG output.
#[cfg(feature = "cairo-backend")]
fn write_png(chart: &ChartState<SvgRenderer>, path: &std::path::Path) -> Result<(), String> {
    use rankbar::render::{CairoRenderer, Renderer};

    let viewport = chart.config().viewport;
    let width = i32::try_from(viewport.width).map_err(|err| err.to_string())?;
    let height = i32::try_from(viewport.height).map_err(|err| err.to_string())?;
    let frame = chart.build_render_frame().map_err(|err| err.to_string())?;

    let mut renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
    renderer.render(&frame).map_err(|err| err.to_string())?;
    renderer.write_png(path).map_err(|err| err.to_string())?;
    println!("wrote {}", path.display());
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input_path: Option<PathBuf> = None;
    let mut output_dir: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut policy = MalformedRowPolicy::Reject;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--skip-bad-rows" => policy = MalformedRowPolicy::Skip,
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ if arg.starts_with('-') => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
            _ if input_path.is_none() => input_path = Some(PathBuf::from(&arg)),
            _ if output_dir.is_none() => output_dir = Some(PathBuf::from(&arg)),
            _ => {
                return Err(format!(
                    "unexpected extra argument `{arg}`\n\n{}",
                    usage_message()
                ));
            }
        }
    }

    let input_path =
        input_path.ok_or_else(|| format!("missing input csv path\n\n{}", usage_message()))?;
    Ok(CliArgs {
        input_path,
        output_dir: output_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        config_path,
        policy,
    })
}

fn usage_message() -> String {
    format!(
        "Usage: cargo run --bin render_service_chart -- <input.csv> [output_dir] [options]\n\nWrites top10.svg, extended.svg and snapshot.json into output_dir (default: {DEFAULT_OUTPUT_DIR}).\n\nOptions:\n  --config <path>       Chart config JSON\n  --skip-bad-rows       Drop rows with a malformed Count instead of failing\n  -h, --help            Show this message"
    )
}
