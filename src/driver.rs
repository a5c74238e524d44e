//! Running several search modes on one Graph.

use crate::graph::Graph;
use crate::heuristics::{Euclidean, Manhattan, Zero};
use crate::search::{search, SearchResult};

use log::debug;
use std::time::Instant;

/// One of the supported search configurations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchMode {
	/// uniform-cost search, using the [`Zero`] Heuristic
	Ucs,
	/// A* with the [`Euclidean`] Heuristic
	Euclidean,
	/// A* with the [`Manhattan`] Heuristic
	Manhattan,
}

impl SearchMode {
	/// all modes in report order
	pub const ALL: [SearchMode; 3] = [SearchMode::Ucs, SearchMode::Euclidean, SearchMode::Manhattan];

	/// the name used in reports
	pub fn label(self) -> &'static str {
		match self {
			SearchMode::Ucs => "UCS (h=0)",
			SearchMode::Euclidean => "A* Euclidean",
			SearchMode::Manhattan => "A* Manhattan",
		}
	}

	/// Searches from the source to the destination of `graph` with this mode's Heuristic.
	///
	/// A Graph without source or destination yields the same result as unknown endpoints.
	///
	/// ## Examples
	/// ```
	/// # use graph_search::driver::SearchMode;
	/// # use graph_search::graph::Graph;
	/// let graph = Graph::parse("S,1\nD,2\n1,0\n2,0\n1,2,4");
	///
	/// let result = SearchMode::Euclidean.run(&graph);
	/// assert_eq!(result.cost, 4.0);
	/// ```
	pub fn run(self, graph: &Graph) -> SearchResult {
		let started = Instant::now();
		let (Some(start), Some(goal)) = (graph.source(), graph.destination()) else {
			debug!("{}: graph has no source or destination", self.label());
			return SearchResult::invalid_endpoints(started.elapsed());
		};
		match self {
			SearchMode::Ucs => search(graph, start, goal, &Zero),
			SearchMode::Euclidean => search(graph, start, goal, &Euclidean),
			SearchMode::Manhattan => search(graph, start, goal, &Manhattan),
		}
	}
}

/// Options for [`run`]
///
/// Default options:
/// ```
/// # use graph_search::driver::{RunConfig, SearchMode};
/// assert_eq!(
/// 	RunConfig {
/// 		modes: SearchMode::ALL.to_vec(),
/// 		parallel: true,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
	/// the modes to run, in the order their results are returned.
	///
	/// An empty list runs all of [`SearchMode::ALL`], which is what [`RunConfig::SEQUENTIAL`] relies on.
	pub modes: Vec<SearchMode>,
	/// `true` (default): run the modes on the rayon thread pool.
	///
	/// Only has an effect with the `parallel` feature. The order of the results and the
	/// runtime of each search are not affected.
	pub parallel: bool,
}

impl RunConfig {
	/// runs all modes one after another
	pub const SEQUENTIAL: RunConfig = RunConfig {
		modes: Vec::new(),
		parallel: false,
	};

	/// the modes to run, falling back to [`SearchMode::ALL`] if none were given
	pub fn modes(&self) -> &[SearchMode] {
		const ALL: &[SearchMode] = &SearchMode::ALL;
		if self.modes.is_empty() {
			ALL
		} else {
			&self.modes
		}
	}
}

impl Default for RunConfig {
	fn default() -> RunConfig {
		RunConfig {
			modes: SearchMode::ALL.to_vec(),
			parallel: true,
		}
	}
}

/// Runs every configured mode on `graph` and returns the results in the configured order.
///
/// ## Examples
/// ```
/// # use graph_search::driver::{run, RunConfig, SearchMode};
/// # use graph_search::graph::Graph;
/// let graph = Graph::parse("S,1\nD,3\n1,0\n2,1\n3,11\n1,2,1\n2,3,1");
///
/// let results = run(&graph, &RunConfig::default());
///
/// assert_eq!(results.len(), 3);
/// for (mode, result) in &results {
/// 	assert_eq!(result.path, vec![1, 2, 3], "{}", mode.label());
/// }
/// ```
pub fn run(graph: &Graph, config: &RunConfig) -> Vec<(SearchMode, SearchResult)> {
	let modes = config.modes();

	#[cfg(feature = "parallel")]
	{
		if config.parallel && modes.len() > 1 {
			use rayon::prelude::*;
			return modes
				.par_iter()
				.map(|&mode| (mode, mode.run(graph)))
				.collect();
		}
	}

	modes.iter().map(|&mode| (mode, mode.run(graph))).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn line() -> Graph {
		Graph::parse("S,1\nD,3\n1,0\n2,1\n3,11\n1,2,1\n2,3,1\n")
	}

	#[test]
	fn labels() {
		let labels: Vec<&str> = SearchMode::ALL.iter().map(|m| m.label()).collect();
		assert_eq!(labels, vec!["UCS (h=0)", "A* Euclidean", "A* Manhattan"]);
	}

	#[test]
	fn order_is_kept() {
		let graph = line();
		let config = RunConfig {
			modes: vec![SearchMode::Manhattan, SearchMode::Ucs],
			parallel: true,
		};
		let modes: Vec<SearchMode> = run(&graph, &config).into_iter().map(|(m, _)| m).collect();
		assert_eq!(modes, vec![SearchMode::Manhattan, SearchMode::Ucs]);
	}

	#[test]
	fn sequential_matches_parallel() {
		let graph = line();
		let sequential = run(&graph, &RunConfig::SEQUENTIAL);
		let parallel = run(&graph, &RunConfig::default());
		assert_eq!(sequential.len(), 3);
		for ((a_mode, a), (b_mode, b)) in sequential.iter().zip(parallel.iter()) {
			assert_eq!(a_mode, b_mode);
			assert!(a.same_search(b));
		}
	}

	#[test]
	fn missing_source() {
		let graph = Graph::parse("D,3\n1,0\n3,11\n1,3,1\n");
		for mode in SearchMode::ALL {
			let result = mode.run(&graph);
			assert_eq!(result.outcome, crate::search::Outcome::InvalidEndpoints);
			assert_eq!(result.pushes, 0);
		}
	}

	#[test]
	fn missing_endpoints_are_timed() {
		let graph = Graph::parse("S,1\n1,0\n");
		let result = SearchMode::Manhattan.run(&graph);
		assert!(!result.found());
		assert!(result.runtime > std::time::Duration::ZERO);
	}

	#[test]
	fn empty_modes_run_all() {
		let graph = line();
		let config = RunConfig {
			modes: vec![],
			parallel: false,
		};
		assert_eq!(config.modes(), &SearchMode::ALL);
		let modes: Vec<SearchMode> = run(&graph, &config).into_iter().map(|(m, _)| m).collect();
		assert_eq!(modes, SearchMode::ALL.to_vec());
	}
}
