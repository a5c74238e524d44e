//! Human-readable reports of a [`SearchResult`]

use crate::search::SearchResult;
use crate::Cost;

use std::fmt;
use std::io;

/// A labelled [`SearchResult`] that formats as a report block.
///
/// ## Examples
/// ```
/// # use graph_search::{graph::Graph, heuristics::Zero, search::search};
/// let graph = Graph::parse("1,0\n2,1\n1,2,2.5");
/// let result = search(&graph, 1, 2, &Zero);
///
/// let text = result.report("UCS (h=0)").to_string();
/// assert!(text.starts_with("MODE: UCS (h=0)\nOptimal cost: 2.500000\nPath: 1 -> 2\n"));
/// assert!(text.ends_with("\n\n"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Report<'a> {
	label: &'a str,
	result: &'a SearchResult,
}

impl SearchResult {
	/// creates a [`Report`] of this result under the given mode label
	pub fn report<'a>(&'a self, label: &'a str) -> Report<'a> {
		Report {
			label,
			result: self,
		}
	}
}

/// Formats a Cost without a fractional part if it is within `1e-9` of an integer,
/// and with six decimals otherwise.
pub fn format_cost(cost: Cost) -> String {
	let rounded = cost.round();
	if (cost - rounded).abs() < 1e-9 {
		format!("{:.0}", rounded)
	} else {
		format!("{:.6}", cost)
	}
}

impl fmt::Display for Report<'_> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		let result = self.result;
		writeln!(fmt, "MODE: {}", self.label)?;
		if result.found() {
			writeln!(fmt, "Optimal cost: {}", format_cost(result.cost))?;
			write!(fmt, "Path: ")?;
			if let Some((first, rest)) = result.path.split_first() {
				write!(fmt, "{}", first)?;
				for id in rest {
					write!(fmt, " -> {}", id)?;
				}
			}
			writeln!(fmt)?;
		} else {
			writeln!(fmt, "Optimal cost: NO PATH")?;
		}
		writeln!(fmt, "Expanded: {}", result.expanded)?;
		writeln!(fmt, "Pushes: {}", result.pushes)?;
		writeln!(fmt, "Max frontier: {}", result.max_frontier)?;
		writeln!(fmt, "Runtime (s): {:.6}", result.runtime_secs())?;
		writeln!(fmt)
	}
}

/// renders the report block of `result` into a String
pub fn render(label: &str, result: &SearchResult) -> String {
	result.report(label).to_string()
}

/// writes the report block of `result` to `out`
pub fn write_report(mut out: impl io::Write, label: &str, result: &SearchResult) -> io::Result<()> {
	write!(out, "{}", result.report(label))
}
