use crate::NodeID;

/// A Node of the [`Graph`](super::Graph) with its position on the Grid
///
/// Positions are decoded from a two-digit cell code: `x = cell / 10`, `y = cell % 10`.
///
/// ## Examples
/// ```
/// # use graph_search::graph::Node;
/// let node = Node::from_cell(4, 37);
///
/// assert_eq!(node.id, 4);
/// assert_eq!((node.x, node.y), (3, 7));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Node {
	/// the unique id of the Node
	pub id: NodeID,
	/// the first coordinate
	pub x: i64,
	/// the second coordinate
	pub y: i64,
}

impl Node {
	/// creates a Node at an explicit position
	pub fn new(id: NodeID, x: i64, y: i64) -> Node {
		Node { id, x, y }
	}

	/// creates a Node by decoding `cell` into a position
	///
	/// Uses floored division, so `y` is always in `0..10`, even for negative cell codes.
	pub fn from_cell(id: NodeID, cell: i64) -> Node {
		Node::new(id, cell.div_euclid(10), cell.rem_euclid(10))
	}
}

/// One direction of an undirected Edge, stored in the adjacency list of its source Node
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	/// the Node at the other end
	pub to: NodeID,
	/// the non-negative cost of traversing the Edge
	pub weight: f64,
}

impl Edge {
	/// creates a new Edge
	pub fn new(to: NodeID, weight: f64) -> Edge {
		Edge { to, weight }
	}
}
