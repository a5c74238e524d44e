#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find the cheapest Path between two Nodes of a weighted, undirected Graph.
//!
//! ## Introduction
//! All searches in this crate share a single best-first search engine: A* with a pluggable
//! [`Heuristic`](heuristics::Heuristic). Three configurations are provided:
//! - uniform-cost search, which uses an estimate of 0 everywhere,
//! - A* guided by the straight-line (Euclidean) distance between Node positions,
//! - A* guided by the Manhattan distance between Node positions.
//!
//! As long as the Heuristic never overestimates and never drops by more than the weight of an
//! Edge, all three find a Path with the same optimal Cost. They differ in how much work it takes
//! to get there, which is why every search also reports how many Nodes it expanded, how many
//! entries it pushed onto the Frontier, how large the Frontier got and how long it took.
//!
//! Every search is deterministic: entries with the same priority are taken in ascending id
//! order, so running a query twice gives the exact same Path and statistics.
//!
//! ## Examples
//! Loading a Graph and running all modes:
//! ```
//! use graph_search::prelude::*;
//!
//! let graph = Graph::parse("
//!     S,1
//!     D,3
//!     # id,cell: the cell code 11 is the position (1, 1)
//!     1,0
//!     2,1
//!     3,11
//!     # a,b,weight
//!     1,2,1
//!     2,3,1
//! ");
//!
//! for (mode, result) in run(&graph, &RunConfig::default()) {
//!     assert!(result.found());
//!     assert_eq!(result.cost, 2.0);
//!     print!("{}", result.report(mode.label()));
//! }
//! ```
//!
//! ### Searching directly
//! [`search`](search::search) accepts any start, goal and Heuristic, including closures:
//! ```
//! use graph_search::prelude::*;
//!
//! let mut graph = Graph::new();
//! graph.add_node(1, 0);
//! graph.add_node(2, 99);
//! graph.add_edge(1, 2, 20.0);
//!
//! let result = search(&graph, 1, 2, &Euclidean);
//! assert_eq!(result.path, vec![1, 2]);
//!
//! let twice_manhattan = |a: &Node, b: &Node| 2.0 * Manhattan.estimate(a, b);
//! let result = search(&graph, 1, 2, &twice_manhattan);
//! assert_eq!(result.cost, 20.0);
//! ```
//!
//! ### Unknown Nodes
//! A start or goal that is not part of the Graph is not an error. The search simply reports
//! that nothing was found:
//! ```
//! use graph_search::prelude::*;
//!
//! let graph = Graph::parse("1,0");
//! let result = search(&graph, 1, 2, &Zero);
//!
//! assert_eq!(result.outcome, Outcome::InvalidEndpoints);
//! assert_eq!(result.expanded, 0);
//! ```

/// The Type used to reference a Node in the Graph
pub type NodeID = i64;

/// The Type used for Edge weights and Path Costs
pub type Cost = f64;

pub mod node_id;

pub mod graph;

pub mod heuristics;

pub mod search;

pub mod report;

pub mod driver;

mod error;
pub use self::error::{Error, Result};

/// The most commonly used items of this crate
pub mod prelude {
	pub use crate::driver::{run, RunConfig, SearchMode};
	pub use crate::graph::{Edge, Graph, Node};
	pub use crate::heuristics::{Euclidean, Heuristic, Manhattan, Zero};
	pub use crate::search::{search, Outcome, SearchResult};
	pub use crate::{Cost, NodeID};
}
