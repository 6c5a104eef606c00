//! Documentation panel replay tool.
//!
//! Runs the panel against a scripted in-memory editor and prints every
//! message the panel receives as one JSON line on stdout. Logs go to stderr
//! and are filtered by `DOCPANE_LOG`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use docpane_panel::PanelConfig;

mod host;
mod output;
mod provider;
mod replay;
mod script;

use crate::output::{JsonLinesSink, LogIndicator};
use crate::script::Script;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "DOCPANE_LOG";

#[derive(Parser, Debug)]
#[command(name = "docpane")]
#[command(about = "Documentation panel replay tool")]
struct Cli {
	/// Verbose logging when no filter is set in DOCPANE_LOG
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Replay a JSON script against the panel
	Replay {
		/// Script to replay
		#[arg(value_name = "SCRIPT")]
		script: PathBuf,

		/// Panel configuration (TOML)
		#[arg(short, long, value_name = "PATH")]
		config: Option<PathBuf>,

		/// Override the progress indicator delay
		#[arg(long, value_name = "MS")]
		indicator_delay_ms: Option<u64>,
	},
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	match cli.command {
		Command::Replay {
			script,
			config,
			indicator_delay_ms,
		} => {
			let mut config = match config {
				Some(path) => PanelConfig::load(&path).with_context(|| format!("failed to load config {}", path.display()))?,
				None => PanelConfig::default(),
			};
			if let Some(ms) = indicator_delay_ms {
				config.indicator_delay_ms = ms;
			}
			let script = Script::load(&script)?;
			tracing::info!(steps = script.steps.len(), ?config, "replay.start");

			replay::replay(script, config, Arc::new(JsonLinesSink::new(std::io::stdout())), Arc::new(LogIndicator)).await
		}
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("docpane=debug,docpane_panel=debug,docpane_hover=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}
