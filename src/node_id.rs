//! A Module with some utilities for working with NodeIDs

use super::NodeID;

/// A specialized [`HashMap`](hashbrown::HashMap) for NodeIDs with a faster Hasher
pub type NodeIDMap<V> = hashbrown::HashMap<NodeID, V, BuildNodeIDHasher>;
/// A specialized [`HashSet`](hashbrown::HashSet) for NodeIDs with a faster Hasher
pub type NodeIDSet = hashbrown::HashSet<NodeID, BuildNodeIDHasher>;

/// A [`BuildHasher`](std::hash::BuildHasher) specialized on NodeIDs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildNodeIDHasher;

/// A [`Hasher`](std::hash::Hasher) specialized on NodeIDs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeIDHasher(u64);

// Fibonacci hashing spreads sequential ids over the high bits hashbrown uses for its control bytes.
const MULTIPLIER: u64 = 0x9E37_79B9_7F4A_7C15;

impl std::hash::BuildHasher for BuildNodeIDHasher {
	type Hasher = NodeIDHasher;
	fn build_hasher(&self) -> NodeIDHasher {
		NodeIDHasher(0)
	}
}
impl std::hash::Hasher for NodeIDHasher {
	/// panics, since only NodeIDs are supposed to be used
	fn write(&mut self, _: &[u8]) {
		unreachable!("This Hasher only works with NodeIDs")
	}
	/// Writes a single NodeID into this hasher.
	fn write_i64(&mut self, id: NodeID) {
		self.0 = (id as u64).wrapping_mul(MULTIPLIER);
	}
	fn finish(&self) -> u64 {
		self.0
	}
}

/// create a new [`NodeIDMap`] by calling the [`with_hasher`](hashbrown::HashMap::with_hasher) Function
pub fn node_id_map<V>() -> NodeIDMap<V> {
	NodeIDMap::with_hasher(BuildNodeIDHasher)
}
/// create a new [`NodeIDSet`] by calling the [`with_hasher`](hashbrown::HashSet::with_hasher) Function
pub fn node_id_set() -> NodeIDSet {
	NodeIDSet::with_hasher(BuildNodeIDHasher)
}

/// create a new [`NodeIDMap`] by calling the [`with_capacity_and_hasher`](hashbrown::HashMap::with_capacity_and_hasher) Function
pub fn node_id_map_with_cap<V>(capacity: usize) -> NodeIDMap<V> {
	NodeIDMap::with_capacity_and_hasher(capacity, BuildNodeIDHasher)
}
