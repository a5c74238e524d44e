use crate::{Cost, NodeID};

use std::cmp::Ordering;

/// A Frontier entry: `HeuristicElement(id, g, f)`.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed: the entry with the lowest `f` is the
/// greatest, and among equal `f` the one with the lowest id wins.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HeuristicElement(pub NodeID, pub Cost, pub Cost);

impl PartialEq for HeuristicElement {
	fn eq(&self, rhs: &Self) -> bool {
		self.cmp(rhs) == Ordering::Equal
	}
}
impl Eq for HeuristicElement {}

impl PartialOrd for HeuristicElement {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl Ord for HeuristicElement {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.2
			.total_cmp(&self.2)
			.then_with(|| rhs.0.cmp(&self.0))
			.then_with(|| rhs.1.total_cmp(&self.1))
	}
}
