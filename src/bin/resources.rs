//! resources - compile Sass/JS and resync template integrity digests
//!
//! Usage: resources [OPTIONS]

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use serde_json::json;

use webassets::application::{ResourceCompiler, ResourcesReport};
use webassets::config::{load_or_default, Config};
use webassets::domain::ports::{AssetEvent, EventSink};
use webassets::infrastructure::{SystemRunner, Toolchain};
use webassets::ui::json::events::{CompleteEvent, ErrorEvent, StartEvent};
use webassets::ui::json::emit_event;
use webassets::ui::{terminal, ConsoleEventSink, JsonEventSink};
use webassets::AssetsResult;

const COMMAND: &str = "resources";

/// Compile web resources and update integrity digests in templates
#[derive(Parser, Debug)]
#[command(name = "resources")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Project root the web paths are relative to
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Config file (defaults to <root>/webassets.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Emit NDJSON events instead of text
    #[arg(long)]
    json: bool,

    /// Print a diff of every template rewrite
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.json {
        let sink = JsonEventSink::stdout();
        let _ = emit_event(&StartEvent::new(COMMAND));
        run(&cli, &sink).map_err(|err| {
            let _ = emit_event(&ErrorEvent::new(COMMAND, err.code(), err.to_string()));
            err.into()
        })
    } else {
        let sink = ConsoleEventSink::new(cli.verbose, terminal::stdout_supports_color());
        Ok(run(&cli, &sink)?)
    }
}

fn run<E: EventSink>(cli: &Cli, events: E) -> AssetsResult<()> {
    let config = load_config(cli, &events)?;
    let toolchain = Toolchain::discover(&config.resources.sass, &config.resources.babel);

    let runner = SystemRunner::new().quiet(cli.json);
    let report =
        ResourceCompiler::new(config.resources, &cli.root, toolchain, runner, &events).run()?;

    print_summary(cli.json, &report)
}

fn load_config<E: EventSink>(cli: &Cli, events: &E) -> AssetsResult<Config> {
    let (config, warnings) = load_or_default(cli.config.as_deref(), &cli.root)?;
    for warning in warnings {
        events.on_event(AssetEvent::ConfigWarning {
            message: warning.to_string(),
        });
    }
    Ok(config)
}

fn print_summary(json: bool, report: &ResourcesReport) -> AssetsResult<()> {
    if json {
        emit_event(&CompleteEvent::success(
            COMMAND,
            json!({
                "compiled": report.compiled.len(),
                "skipped": report.skipped.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
                "changed": report.changed.iter().map(|c| display(&c.path)).collect::<Vec<_>>(),
                "added": report.added.iter().map(|p| display(p)).collect::<Vec<_>>(),
                "removed": report.removed.iter().map(|p| display(p)).collect::<Vec<_>>(),
                "templates_scanned": report.templates_scanned,
                "templates_updated": report.templates_updated.len(),
                "replacements": report.replacements(),
            }),
        ))?;
    } else if report.is_up_to_date() {
        println!(
            "all digests up to date ({} templates scanned)",
            report.templates_scanned
        );
    } else {
        println!(
            "{} assets changed, {} of {} templates updated ({} replacements)",
            report.changed.len(),
            report.templates_updated.len(),
            report.templates_scanned,
            report.replacements()
        );
    }
    Ok(())
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
