//! The static Graph that all searches run on.

mod node;
pub use node::{Edge, Node};

mod parser;

use crate::node_id::{node_id_map, NodeIDMap};
use crate::NodeID;

/// A weighted, undirected Graph together with the designated source and destination Nodes.
///
/// Every undirected Edge is stored twice, once in the adjacency list of each endpoint.
/// Edges may reference ids that were never defined as Nodes; the search treats those
/// gracefully instead of relying on the Graph being consistent.
///
/// ## Examples
/// ```
/// # use graph_search::graph::Graph;
/// let mut graph = Graph::new();
/// graph.add_node(1, 0);
/// graph.add_node(2, 11);
/// graph.add_edge(1, 2, 1.5);
/// graph.set_source(1);
/// graph.set_destination(2);
///
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.edges(2)[0].to, 1);
/// assert_eq!(graph.source(), Some(1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
	nodes: NodeIDMap<Node>,
	adjacency: NodeIDMap<Vec<Edge>>,
	source: Option<NodeID>,
	destination: Option<NodeID>,
}

impl Graph {
	/// creates an empty Graph without source or destination
	pub fn new() -> Graph {
		Graph {
			nodes: node_id_map(),
			adjacency: node_id_map(),
			source: None,
			destination: None,
		}
	}

	/// defines the Node `id` at the position encoded by `cell`, replacing any previous definition
	pub fn add_node(&mut self, id: NodeID, cell: i64) {
		self.insert_node(Node::from_cell(id, cell));
	}

	/// inserts a Node, replacing any previous Node with the same id
	pub fn insert_node(&mut self, node: Node) {
		self.nodes.insert(node.id, node);
	}

	/// adds an undirected Edge between `a` and `b`
	///
	/// Self-loops and parallel Edges are kept as they are. `weight` is stored unchecked; the
	/// parser never passes a negative one, and searches only guarantee optimal Paths without them.
	pub fn add_edge(&mut self, a: NodeID, b: NodeID, weight: f64) {
		self.adjacency
			.entry(a)
			.or_default()
			.push(Edge::new(b, weight));
		self.adjacency
			.entry(b)
			.or_default()
			.push(Edge::new(a, weight));
	}

	/// sets the source Node
	pub fn set_source(&mut self, id: NodeID) {
		self.source = Some(id);
	}

	/// sets the destination Node
	pub fn set_destination(&mut self, id: NodeID) {
		self.destination = Some(id);
	}

	/// the source Node, if one was set
	pub fn source(&self) -> Option<NodeID> {
		self.source
	}

	/// the destination Node, if one was set
	pub fn destination(&self) -> Option<NodeID> {
		self.destination
	}

	/// the Node with the given id
	pub fn node(&self, id: NodeID) -> Option<&Node> {
		self.nodes.get(&id)
	}

	/// checks if a Node with the given id was defined
	pub fn contains(&self, id: NodeID) -> bool {
		self.nodes.contains_key(&id)
	}

	/// all outgoing Edges of `id` in insertion order. Empty for unknown ids
	pub fn edges(&self, id: NodeID) -> &[Edge] {
		self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
	}

	/// iterates over all defined Nodes in no particular order
	pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
		self.nodes.values()
	}

	/// the number of defined Nodes
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// checks if no Nodes are defined
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// the number of undirected Edges
	pub fn edge_count(&self) -> usize {
		let directed: usize = self.adjacency.values().map(Vec::len).sum();
		directed / 2
	}
}
