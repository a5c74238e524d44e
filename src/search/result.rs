use crate::{Cost, NodeID};

use std::time::Duration;

/// How a search ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
	/// the goal was reached
	Found,
	/// every reachable Node was expanded without reaching the goal
	Exhausted,
	/// the start or the goal is not a Node of the Graph, so no search was run
	InvalidEndpoints,
}

/// The Path and the statistics of a single search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
	/// how the search ended
	pub outcome: Outcome,
	/// the total Cost of `path`. `0` unless the goal was found
	pub cost: Cost,
	/// the Nodes from start to goal, both included. Empty unless the goal was found
	pub path: Vec<NodeID>,
	/// the number of Nodes taken off the Frontier and expanded. Stale entries are not counted
	pub expanded: usize,
	/// the number of entries pushed onto the Frontier, including the start
	pub pushes: usize,
	/// the largest size the Frontier reached
	pub max_frontier: usize,
	/// the wall-clock time spent in the search
	pub runtime: Duration,
}

impl SearchResult {
	pub(crate) fn invalid_endpoints(runtime: Duration) -> SearchResult {
		SearchResult {
			outcome: Outcome::InvalidEndpoints,
			cost: 0.0,
			path: vec![],
			expanded: 0,
			pushes: 0,
			max_frontier: 0,
			runtime,
		}
	}

	/// `true` if the goal was reached
	pub fn found(&self) -> bool {
		self.outcome == Outcome::Found
	}

	/// `runtime` in seconds
	pub fn runtime_secs(&self) -> f64 {
		self.runtime.as_secs_f64()
	}

	/// compares everything except `runtime`, which differs between otherwise identical runs
	pub fn same_search(&self, other: &SearchResult) -> bool {
		self.outcome == other.outcome
			&& self.cost == other.cost
			&& self.path == other.path
			&& self.expanded == other.expanded
			&& self.pushes == other.pushes
			&& self.max_frontier == other.max_frontier
	}
}
