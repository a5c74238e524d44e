//! The best-first search shared by all search modes.

mod element;
use element::HeuristicElement;

mod result;
pub use result::{Outcome, SearchResult};

use crate::graph::Graph;
use crate::heuristics::Heuristic;
use crate::node_id::node_id_map_with_cap;
use crate::NodeID;

use log::{debug, trace};
use std::collections::BinaryHeap;
use std::time::Instant;

/// Searches `graph` for the cheapest Path from `start` to `goal` using the
/// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The Frontier is ordered by `f = g + h`. Entries with equal `f` are taken in ascending id
/// order, so repeated searches always expand the same Nodes in the same order. Instead of
/// decreasing the key of an entry, an improved Node is pushed again and the outdated entry is
/// skipped when it comes up.
///
/// If `heuristic` is admissible and consistent, the Path is optimal. [`Zero`](crate::heuristics::Zero)
/// always is, and turns the search into uniform-cost search.
///
/// Edge weights are expected to be non-negative. Edges leading to ids that are not Nodes of the
/// Graph are followed with an estimate of 0.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use graph_search::{graph::Graph, heuristics::Manhattan, search::search};
/// //  1 --1-- 2 --1-- 3
/// //   \             /
/// //    ------5------
/// let mut graph = Graph::new();
/// graph.add_node(1, 0);
/// graph.add_node(2, 1);
/// graph.add_node(3, 11);
/// graph.add_edge(1, 2, 1.0);
/// graph.add_edge(2, 3, 1.0);
/// graph.add_edge(1, 3, 5.0);
///
/// let result = search(&graph, 1, 3, &Manhattan);
///
/// assert!(result.found());
/// assert_eq!(result.cost, 2.0);
/// assert_eq!(result.path, vec![1, 2, 3]);
/// ```
///
/// If the start or the goal is not part of the Graph, nothing is searched:
/// ```
/// # use graph_search::{graph::Graph, heuristics::Zero, search::{search, Outcome}};
/// # let mut graph = Graph::new();
/// # graph.add_node(1, 0);
/// let result = search(&graph, 1, 42, &Zero);
///
/// assert_eq!(result.outcome, Outcome::InvalidEndpoints);
/// assert_eq!(result.pushes, 0);
/// ```
///
/// ## Returns
/// A [`SearchResult`] with the Path, if one was found, and the statistics of the search.
/// The first Node in the Path is always `start` and the last is `goal`.
pub fn search<H: Heuristic + ?Sized>(
	graph: &Graph,
	start: NodeID,
	goal: NodeID,
	heuristic: &H,
) -> SearchResult {
	let started = Instant::now();

	let (start_node, goal_node) = match (graph.node(start), graph.node(goal)) {
		(Some(start_node), Some(goal_node)) => (start_node, goal_node),
		_ => {
			debug!("search {} -> {}: endpoint is not in the graph", start, goal);
			return SearchResult::invalid_endpoints(started.elapsed());
		}
	};
	debug!("search {} -> {} on {} nodes", start, goal, graph.len());

	let estimate = |id: NodeID| {
		graph
			.node(id)
			.map_or(0.0, |node| heuristic.estimate(node, goal_node))
	};

	// best known cost and parent of every discovered Node
	let mut visited = node_id_map_with_cap(graph.len());
	visited.insert(start, (0.0, start));

	let mut next = BinaryHeap::with_capacity(graph.len() / 2);
	next.push(HeuristicElement(
		start,
		0.0,
		heuristic.estimate(start_node, goal_node),
	));
	let mut pushes = 1;
	let mut max_frontier = 1;
	let mut expanded = 0;

	while let Some(HeuristicElement(current_id, current_cost, _)) = next.pop() {
		let best_cost = visited.get(&current_id).map_or(f64::INFINITY, |&(cost, _)| cost);
		if current_cost > best_cost {
			trace!("skipping stale entry for {} ({} > {})", current_id, current_cost, best_cost);
			continue;
		}

		expanded += 1;
		trace!("expanding {} at cost {}", current_id, current_cost);

		if current_id == goal {
			let steps = {
				let mut steps = vec![goal];
				let mut current = goal;

				while current != start {
					let Some(&(_, prev)) = visited.get(&current) else {
						break;
					};
					steps.push(prev);
					current = prev;
				}
				steps.reverse();
				steps
			};

			let result = SearchResult {
				outcome: Outcome::Found,
				cost: current_cost,
				path: steps,
				expanded,
				pushes,
				max_frontier,
				runtime: started.elapsed(),
			};
			debug!(
				"found {} -> {} at cost {}: {} expanded, {} pushes, frontier peak {}",
				start, goal, result.cost, expanded, pushes, max_frontier
			);
			return result;
		}

		for edge in graph.edges(current_id) {
			let other_cost = current_cost + edge.weight;

			let mut needs_visit = true;
			if let Some((prev_cost, prev_id)) = visited.get_mut(&edge.to) {
				if *prev_cost > other_cost {
					*prev_cost = other_cost;
					*prev_id = current_id;
				} else {
					needs_visit = false;
				}
			} else {
				visited.insert(edge.to, (other_cost, current_id));
			}

			if needs_visit {
				next.push(HeuristicElement(
					edge.to,
					other_cost,
					other_cost + estimate(edge.to),
				));
				pushes += 1;
				max_frontier = max_frontier.max(next.len());
			}
		}
	}

	debug!(
		"no path {} -> {}: {} expanded, {} pushes, frontier peak {}",
		start, goal, expanded, pushes, max_frontier
	);
	SearchResult {
		outcome: Outcome::Exhausted,
		cost: 0.0,
		path: vec![],
		expanded,
		pushes,
		max_frontier,
		runtime: started.elapsed(),
	}
}
