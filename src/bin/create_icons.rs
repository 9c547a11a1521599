//! create_icons - build an SVG symbol sprite from an icon manifest
//!
//! Usage: create_icons [OPTIONS] <manifest-file> <output-file>

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use serde_json::json;

use webassets::application::{SpriteBuilder, SpriteReport};
use webassets::config::{load_or_default, Config};
use webassets::domain::ports::{AssetEvent, EventSink};
use webassets::infrastructure::{ScratchTracker, SystemRunner};
use webassets::ui::json::events::{CompleteEvent, ErrorEvent, StartEvent};
use webassets::ui::json::emit_event;
use webassets::ui::{terminal, ConsoleEventSink, JsonEventSink};
use webassets::AssetsResult;

const COMMAND: &str = "create_icons";

/// Exit status after Ctrl-C (128 + SIGINT)
const INTERRUPTED: i32 = 130;

const USAGE: &str = "usage: create_icons [manifest file] [output file]

  generates an svg sprite file for Material Design Icons from a manifest";

/// Build an SVG sprite for Material Design Icons from a manifest
#[derive(Parser, Debug)]
#[command(name = "create_icons")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Manifest file followed by output file
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Icon repository to clone instead of the configured one
    #[arg(long, value_name = "URL")]
    repository: Option<String>,

    /// Config file (defaults to ./webassets.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Emit NDJSON events instead of text
    #[arg(long)]
    json: bool,

    /// Show every staged icon
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let [manifest, output] = cli.files.as_slice() else {
        println!("{USAGE}");
        return Ok(());
    };

    let tracker = ScratchTracker::new();
    install_interrupt_cleanup(tracker.clone())?;

    if cli.json {
        let sink = JsonEventSink::stdout();
        let _ = emit_event(&StartEvent::new(COMMAND));
        run(&cli, manifest, output, &tracker, &sink).map_err(|err| {
            let _ = emit_event(&ErrorEvent::new(COMMAND, err.code(), err.to_string()));
            err.into()
        })
    } else {
        let sink = ConsoleEventSink::new(cli.verbose, terminal::stdout_supports_color());
        Ok(run(&cli, manifest, output, &tracker, &sink)?)
    }
}

/// Remove the scratch directory on Ctrl-C; `TempDir` cleanup never runs
/// when the process is interrupted.
fn install_interrupt_cleanup(tracker: ScratchTracker) -> Result<()> {
    ctrlc::set_handler(move || {
        if let Err(err) = tracker.remove_active() {
            eprintln!("warn: could not remove scratch directory: {err}");
        }
        eprintln!("interrupted");
        std::process::exit(INTERRUPTED);
    })?;
    Ok(())
}

fn run<E: EventSink>(
    cli: &Cli,
    manifest: &Path,
    output: &Path,
    tracker: &ScratchTracker,
    events: E,
) -> AssetsResult<()> {
    let config = load_config(cli, &events)?;

    let runner = SystemRunner::new().quiet(cli.json);
    let report = SpriteBuilder::new(config.icons, runner, &events)
        .with_scratch_tracker(tracker.clone())
        .build(manifest, output)?;

    print_summary(cli.json, &report)
}

fn load_config<E: EventSink>(cli: &Cli, events: &E) -> AssetsResult<Config> {
    let (mut config, warnings) = load_or_default(cli.config.as_deref(), Path::new("."))?;
    for warning in warnings {
        events.on_event(AssetEvent::ConfigWarning {
            message: warning.to_string(),
        });
    }
    if let Some(repository) = &cli.repository {
        config.icons.repository = repository.clone();
    }
    Ok(config)
}

fn print_summary(json: bool, report: &SpriteReport) -> AssetsResult<()> {
    if json {
        emit_event(&CompleteEvent::success(
            COMMAND,
            json!({
                "icons": report.icons,
                "output": report.output.display().to_string(),
            }),
        ))?;
    } else {
        println!(
            "created {} with {} icons",
            report.output.display(),
            report.icon_count()
        );
    }
    Ok(())
}
