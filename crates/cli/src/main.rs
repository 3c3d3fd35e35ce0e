mod settings;

use std::io::BufRead;
use std::path::PathBuf;
use std::process;
use std::thread;

use clap::Parser;
use crossbeam_channel::Sender;

use eyeblow_core::capture::infrastructure::image_sequence_source::ImageSequenceSource;
use eyeblow_core::detection::infrastructure::replay_detector::ReplayDetector;
use eyeblow_core::display::infrastructure::image_file_sink::ImageFileSink;
use eyeblow_core::overlay::domain::overlay_style::{OverlayStyle, ResampleFilter};
use eyeblow_core::overlay::infrastructure::renderer_factory::create_renderer;
use eyeblow_core::pipeline::frame_loop::FrameLoop;
use eyeblow_core::pipeline::infrastructure::frame_loop_runner::FrameLoopRunner;
use eyeblow_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use eyeblow_core::settings::domain::toggle_event::{Key, ToggleEvent};
use eyeblow_core::settings::infrastructure::configuration_store::ConfigurationStore;

use settings::{Settings, SettingsError};

/// Live face and eye overlays: outlines, a stylized mask and a magnified eye.
#[derive(Parser)]
#[command(name = "eyeblow")]
struct Cli {
    /// Directory of captured frames, played back in name order.
    #[arg(long)]
    frames: PathBuf,

    /// JSON recording of detector output, one entry per frame.
    #[arg(long)]
    detections: PathBuf,

    /// Directory that receives the displayed frames.
    #[arg(long)]
    output: PathBuf,

    /// Display surface size, WIDTHxHEIGHT.
    #[arg(long, default_value = "640x480", value_parser = parse_display_size)]
    display_size: (u32, u32),

    /// Milliseconds between ticks (overrides settings).
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Stop after this many ticks (default: one pass over the frames).
    #[arg(long)]
    ticks: Option<usize>,

    /// Restart the frame directory when it runs out.
    #[arg(long)]
    loop_input: bool,

    /// Read toggle keys from stdin, one per line (b, f, e, m, k, r, f12, esc; q quits).
    #[arg(long)]
    interactive: bool,

    /// Do not mirror captured frames.
    #[arg(long)]
    no_mirror: bool,

    /// Start with the stylized mask on.
    #[arg(long)]
    mask: bool,

    /// Start with eye magnification off.
    #[arg(long)]
    no_magnify: bool,

    /// Use nearest-neighbour instead of bilinear resampling for the magnified eye.
    #[arg(long)]
    nearest: bool,

    /// Settings file (default: the user configuration directory).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write the effective settings back to the settings file.
    #[arg(long)]
    save_settings: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let settings_path = cli.settings.clone().or_else(Settings::default_path);
    let mut settings = match &settings_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    apply_overrides(&cli, &mut settings);
    settings.configuration.validate()?;

    if cli.save_settings {
        let path = settings_path.as_ref().ok_or(SettingsError::NoConfigDir)?;
        settings.save(path)?;
    }

    let source = ImageSequenceSource::open(&cli.frames, cli.loop_input)?;
    let max_ticks = cli.ticks.or((!cli.loop_input).then(|| source.len()));
    let detector = ReplayDetector::from_file(&cli.detections)?;
    if detector.is_empty() {
        log::warn!("Detection recording is empty, no overlays will be drawn");
    } else if detector.len() != source.len() {
        log::warn!(
            "Detection recording has {} entries for {} frames, entries repeat by frame index",
            detector.len(),
            source.len()
        );
    }
    let style = OverlayStyle {
        resample: settings.resample,
        ..OverlayStyle::default()
    };
    let sink = ImageFileSink::new(&cli.output, cli.display_size);

    let configuration = settings.configuration;
    let store = ConfigurationStore::new(configuration);
    let (shutdown_tx, shutdown_rx) = crossbeam_channel::bounded(1);
    if cli.interactive {
        spawn_key_reader(store.clone(), shutdown_tx.clone());
    }

    let mut frame_loop = FrameLoop::new(
        Box::new(source),
        Box::new(detector),
        create_renderer(&style),
        Box::new(sink),
        store,
        Box::new(StdoutPipelineLogger::default()),
    );
    let runner = FrameLoopRunner::new(configuration.tick_interval(), max_ticks);
    let report = runner.run(&mut frame_loop, &shutdown_rx);
    drop(shutdown_tx);

    log::info!(
        "{} ticks: {} displayed, {} frozen, {} without a frame, {} failed",
        report.ticks,
        report.displayed,
        report.frozen,
        report.skipped,
        report.failed
    );
    log::info!("Output written to {}", cli.output.display());
    Ok(())
}

fn apply_overrides(cli: &Cli, settings: &mut Settings) {
    let config = &mut settings.configuration;
    if let Some(ms) = cli.interval_ms {
        config.tick_interval_ms = ms;
    }
    if cli.no_mirror {
        config.mirror_input = false;
    }
    if cli.mask {
        config.draw_stylized_mask = true;
    }
    if cli.no_magnify {
        config.magnify_primary_eye = false;
    }
    if cli.nearest {
        settings.resample = ResampleFilter::Nearest;
    }
}

/// Maps stdin lines to toggle events until `q` or end of input.
fn spawn_key_reader(store: ConfigurationStore, shutdown: Sender<()>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let name = line.trim();
            if name.is_empty() {
                continue;
            }
            if matches!(name, "q" | "quit") {
                break;
            }
            match Key::from_name(name) {
                Some(key) => {
                    let event = ToggleEvent::from_key(key);
                    let flag = event.flag();
                    let config = store.apply(event);
                    log::info!("{flag:?} {}", if config.flag(flag) { "on" } else { "off" });
                }
                None => log::warn!("Unknown key '{name}'"),
            }
        }
        let _ = shutdown.try_send(());
    });
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.frames.is_dir() {
        return Err(format!("Frame directory not found: {}", cli.frames.display()).into());
    }
    if !cli.detections.is_file() {
        return Err(format!(
            "Detection recording not found: {}",
            cli.detections.display()
        )
        .into());
    }
    if cli.output.exists() && !cli.output.is_dir() {
        return Err(format!(
            "Output must be a directory, got file {}",
            cli.output.display()
        )
        .into());
    }
    if cli.interval_ms == Some(0) {
        return Err("Interval must be at least 1 ms".into());
    }
    if cli.ticks == Some(0) {
        return Err("Tick count must be positive".into());
    }
    Ok(())
}

fn parse_display_size(value: &str) -> Result<(u32, u32), String> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| format!("invalid dimension '{s}' in '{value}'"))
    };
    Ok((parse(w)?, parse(h)?))
}
