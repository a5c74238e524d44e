//! graph-search: runs UCS, A* Euclidean and A* Manhattan on a graph file and reports each.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use env_logger::Env;
use log::debug;

use graph_search::driver::{run, RunConfig, SearchMode};
use graph_search::graph::Graph;
use graph_search::report::write_report;

/// Shortest paths on a weighted undirected graph with three search modes
#[derive(Parser, Debug)]
#[command(name = "graph-search")]
#[command(author, version, about, long_about = None)]
struct Cli {
	/// Graph file with S,<id> / D,<id> / <id>,<cell> / <a>,<b>,<weight> lines
	input: PathBuf,

	/// Only run the given modes, in the given order (default: all three)
	#[arg(long, short, value_enum)]
	mode: Vec<Mode>,

	/// Run the modes one after another instead of in parallel
	#[arg(long)]
	sequential: bool,

	/// Log more to stderr (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence
	#[arg(long, short, action = ArgAction::Count)]
	verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
	Ucs,
	Euclidean,
	Manhattan,
}

impl From<Mode> for SearchMode {
	fn from(mode: Mode) -> SearchMode {
		match mode {
			Mode::Ucs => SearchMode::Ucs,
			Mode::Euclidean => SearchMode::Euclidean,
			Mode::Manhattan => SearchMode::Manhattan,
		}
	}
}

impl Cli {
	fn config(&self) -> RunConfig {
		let mut config = RunConfig {
			parallel: !self.sequential,
			..Default::default()
		};
		if !self.mode.is_empty() {
			config.modes = self.mode.iter().copied().map(SearchMode::from).collect();
		}
		config
	}
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	env_logger::Builder::from_env(Env::default().default_filter_or(level))
		.target(env_logger::Target::Stderr)
		.init();
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let graph = match Graph::from_file(&cli.input) {
		Ok(graph) => graph,
		Err(err) => {
			eprintln!("error: {}", err);
			return ExitCode::FAILURE;
		}
	};

	let config = cli.config();
	debug!("running {:?}", config);

	let stdout = io::stdout();
	let mut out = stdout.lock();
	for (mode, result) in run(&graph, &config) {
		if let Err(err) = write_report(&mut out, mode.label(), &result) {
			eprintln!("error: failed to write report: {}", err);
			return ExitCode::FAILURE;
		}
	}
	if let Err(err) = out.flush() {
		eprintln!("error: failed to write report: {}", err);
		return ExitCode::FAILURE;
	}

	ExitCode::SUCCESS
}
