//! The Heuristics used to guide the search

use crate::graph::Node;

/// Estimates the remaining cost from a Node to the goal.
///
/// The search only returns optimal Paths if the estimate never exceeds the true remaining cost
/// (admissible) and never drops by more than the weight of an Edge from one Node to the next
/// (consistent). Estimates must be finite and non-negative.
///
/// If there is no proper way of calculating the estimate, simply return 0. This turns A* into
/// uniform-cost search, which takes longer but is always correct.
///
/// The most common implementations are provided by this Module:
/// - [`Zero`] for uniform-cost search
/// - [`Euclidean`] for the straight-line distance between two positions
/// - [`Manhattan`] for the sum of the coordinate differences
///
/// Any `Fn(&Node, &Node) -> f64` is a Heuristic as well:
/// ```
/// # use graph_search::{graph::Node, heuristics::Heuristic};
/// let chebyshev = |a: &Node, b: &Node| (a.x - b.x).abs().max((a.y - b.y).abs()) as f64;
///
/// assert_eq!(chebyshev.estimate(&Node::new(0, 0, 0), &Node::new(1, 3, 1)), 3.0);
/// ```
pub trait Heuristic {
	/// Gives the estimated cost of reaching `goal` from `node`.
	fn estimate(&self, node: &Node, goal: &Node) -> f64;
}

impl<F: Fn(&Node, &Node) -> f64> Heuristic for F {
	fn estimate(&self, node: &Node, goal: &Node) -> f64 {
		self(node, goal)
	}
}

/// Always estimates 0, which reduces A* to uniform-cost search (Dijkstra).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
	fn estimate(&self, _: &Node, _: &Node) -> f64 {
		0.0
	}
}

/// The straight-line distance between the positions of two Nodes.
///
/// ```
/// # use graph_search::{graph::Node, heuristics::*};
/// let (a, b) = (Node::new(1, 0, 0), Node::new(2, 3, 4));
///
/// assert_eq!(Euclidean.estimate(&a, &b), 5.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Heuristic for Euclidean {
	fn estimate(&self, node: &Node, goal: &Node) -> f64 {
		let dx = (node.x - goal.x) as f64;
		let dy = (node.y - goal.y) as f64;
		dx.hypot(dy)
	}
}

/// The distance between two positions when moving only along the axes.
///
/// Also known as [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```
/// # use graph_search::{graph::Node, heuristics::*};
/// let (a, b) = (Node::new(1, 0, 0), Node::new(2, 3, 4));
///
/// assert_eq!(Manhattan.estimate(&a, &b), 7.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
	fn estimate(&self, node: &Node, goal: &Node) -> f64 {
		((node.x - goal.x).abs() + (node.y - goal.y).abs()) as f64
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_everywhere() {
		let a = Node::from_cell(1, 0);
		let b = Node::from_cell(2, 99);
		assert_eq!(Zero.estimate(&a, &b), 0.0);
		assert_eq!(Zero.estimate(&b, &a), 0.0);
	}

	#[test]
	fn same_position() {
		let a = Node::from_cell(1, 42);
		let b = Node::from_cell(2, 42);
		assert_eq!(Euclidean.estimate(&a, &b), 0.0);
		assert_eq!(Manhattan.estimate(&a, &b), 0.0);
	}

	#[test]
	fn symmetric_and_ordered() {
		let a = Node::from_cell(1, 3);
		let b = Node::from_cell(2, 58);
		for (x, y) in [(&a, &b), (&b, &a)] {
			let euclid = Euclidean.estimate(x, y);
			let manhattan = Manhattan.estimate(x, y);
			assert!((euclid - 50f64.sqrt()).abs() < 1e-12);
			assert_eq!(manhattan, 10.0);
			assert!(euclid <= manhattan);
		}
	}

	#[test]
	fn usable_as_trait_object() {
		let all: [&dyn Heuristic; 3] = [&Zero, &Euclidean, &Manhattan];
		let a = Node::new(1, 0, 0);
		let b = Node::new(2, 1, 1);
		let estimates: Vec<f64> = all.iter().map(|h| h.estimate(&a, &b)).collect();
		assert_eq!(estimates[0], 0.0);
		assert_eq!(estimates[2], 2.0);
	}
}
