use super::Graph;
use crate::error::{Error, Result};
use crate::NodeID;

use log::{info, warn};
use std::convert::Infallible;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A single meaningful line of the input format
#[derive(Clone, Copy, Debug, PartialEq)]
enum Record {
	Source(NodeID),
	Destination(NodeID),
	Vertex { id: NodeID, cell: i64 },
	Edge { a: NodeID, b: NodeID, weight: f64 },
}

/// Why a line was skipped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Skip {
	Blank,
	Malformed,
}

fn parse_line(line: &str) -> std::result::Result<Record, Skip> {
	let line = line.trim();
	if line.is_empty() || line.starts_with('#') {
		return Err(Skip::Blank);
	}

	let fields: Vec<&str> = line.split(',').map(str::trim).collect();

	if line.starts_with('S') || line.starts_with('D') {
		let id = fields
			.get(1)
			.and_then(|f| f.parse().ok())
			.ok_or(Skip::Malformed)?;
		return Ok(if line.starts_with('S') {
			Record::Source(id)
		} else {
			Record::Destination(id)
		});
	}

	match fields.as_slice() {
		[id, cell] => Ok(Record::Vertex {
			id: id.parse().map_err(|_| Skip::Malformed)?,
			cell: cell.parse().map_err(|_| Skip::Malformed)?,
		}),
		[a, b, weight, ..] => {
			let weight: f64 = weight.parse().map_err(|_| Skip::Malformed)?;
			if !weight.is_finite() || weight < 0.0 {
				return Err(Skip::Malformed);
			}
			Ok(Record::Edge {
				a: a.parse().map_err(|_| Skip::Malformed)?,
				b: b.parse().map_err(|_| Skip::Malformed)?,
				weight,
			})
		}
		_ => Err(Skip::Malformed),
	}
}

impl Graph {
	/// Builds a Graph from the line-based text format.
	///
	/// ```text
	/// # comment
	/// S,<source id>
	/// D,<destination id>
	/// <id>,<cell code>     vertex
	/// <a>,<b>,<weight>     undirected edge
	/// ```
	///
	/// Lines that cannot be parsed are skipped with a warning. Later `S`/`D` lines and later
	/// vertex definitions overwrite earlier ones.
	///
	/// ## Examples
	/// ```
	/// # use graph_search::graph::Graph;
	/// let graph = Graph::parse("
	///     # a tiny graph
	///     S,1
	///     D,3
	///     1,0
	///     2,1
	///     3,11
	///     1,2,1
	///     2,3,1
	///     this line is ignored
	/// ");
	///
	/// assert_eq!(graph.len(), 3);
	/// assert_eq!(graph.edge_count(), 2);
	/// assert_eq!(graph.source(), Some(1));
	/// assert_eq!(graph.destination(), Some(3));
	/// ```
	pub fn parse(input: &str) -> Graph {
		let mut graph = Graph::new();
		for (index, line) in input.lines().enumerate() {
			graph.apply_line(index + 1, line);
		}
		graph
	}

	/// Builds a Graph from a reader. See [`Graph::parse`] for the format.
	///
	/// Only failures of the reader itself are returned as errors; `path` is used to describe them.
	pub fn from_reader(reader: impl BufRead, path: impl Into<PathBuf>) -> Result<Graph> {
		let path = path.into();
		let mut graph = Graph::new();
		for (index, line) in reader.lines().enumerate() {
			let line = line.map_err(|source| Error::Io {
				path: path.clone(),
				source,
			})?;
			graph.apply_line(index + 1, &line);
		}
		info!(
			"loaded {} nodes and {} edges from {}",
			graph.len(),
			graph.edge_count(),
			path.display()
		);
		Ok(graph)
	}

	/// Reads and parses the file at `path`. See [`Graph::parse`] for the format.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Graph> {
		let path = path.as_ref();
		let file = File::open(path).map_err(|source| Error::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Graph::from_reader(BufReader::new(file), path)
	}

	fn apply_line(&mut self, number: usize, line: &str) {
		match parse_line(line) {
			Ok(Record::Source(id)) => self.set_source(id),
			Ok(Record::Destination(id)) => self.set_destination(id),
			Ok(Record::Vertex { id, cell }) => self.add_node(id, cell),
			Ok(Record::Edge { a, b, weight }) => self.add_edge(a, b, weight),
			Err(Skip::Blank) => {}
			Err(Skip::Malformed) => warn!("skipping malformed line {}: {:?}", number, line.trim()),
		}
	}
}

impl FromStr for Graph {
	type Err = Infallible;
	fn from_str(s: &str) -> std::result::Result<Graph, Infallible> {
		Ok(Graph::parse(s))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{Edge, Node};

	#[test]
	fn records() {
		assert_eq!(parse_line("S,4"), Ok(Record::Source(4)));
		assert_eq!(parse_line(" D , 9 "), Ok(Record::Destination(9)));
		assert_eq!(parse_line("3,27"), Ok(Record::Vertex { id: 3, cell: 27 }));
		assert_eq!(
			parse_line("1,2,0.5"),
			Ok(Record::Edge {
				a: 1,
				b: 2,
				weight: 0.5
			})
		);
		assert_eq!(
			parse_line("1,2,3,extra"),
			Ok(Record::Edge {
				a: 1,
				b: 2,
				weight: 3.0
			})
		);
	}

	#[test]
	fn skipped_lines() {
		assert_eq!(parse_line(""), Err(Skip::Blank));
		assert_eq!(parse_line("   "), Err(Skip::Blank));
		assert_eq!(parse_line("# 1,2,3"), Err(Skip::Blank));
		assert_eq!(parse_line("S"), Err(Skip::Malformed));
		assert_eq!(parse_line("S,x"), Err(Skip::Malformed));
		assert_eq!(parse_line("hello"), Err(Skip::Malformed));
		assert_eq!(parse_line("1,a"), Err(Skip::Malformed));
		assert_eq!(parse_line("1,2,heavy"), Err(Skip::Malformed));
		assert_eq!(parse_line("1,2,-1"), Err(Skip::Malformed));
		assert_eq!(parse_line("1,2,NaN"), Err(Skip::Malformed));
		assert_eq!(parse_line("1,2,inf"), Err(Skip::Malformed));
	}

	#[test]
	fn overwrites() {
		let graph = Graph::parse("S,1\nS,2\nD,3\nD,4\n5,12\n5,34\n");
		assert_eq!(graph.source(), Some(2));
		assert_eq!(graph.destination(), Some(4));
		assert_eq!(graph.node(5), Some(&Node::new(5, 3, 4)));
	}

	#[test]
	fn edges_to_undefined_nodes_are_kept() {
		let graph = Graph::parse("1,0\n1,99,2.5\n");
		assert_eq!(graph.len(), 1);
		assert_eq!(graph.edges(1), &[Edge::new(99, 2.5)]);
		assert_eq!(graph.edges(99), &[Edge::new(1, 2.5)]);
	}

	#[test]
	fn from_str() {
		let graph: Graph = "S,1\nD,1\n1,0".parse().unwrap();
		assert_eq!(graph.source(), graph.destination());
		assert!(graph.contains(1));
	}

	#[test]
	fn reader_matches_parse() {
		let text = "S,1\nD,2\n1,0\n2,5\n1,2,7\n";
		let graph = Graph::from_reader(text.as_bytes(), "memory").unwrap();
		assert_eq!(graph.len(), 2);
		assert_eq!(graph.edges(2), &[Edge::new(1, 7.0)]);
		assert_eq!(graph.destination(), Some(2));
	}

	#[test]
	fn missing_file() {
		let err = Graph::from_file("/definitely/not/here.txt").unwrap_err();
		let Error::Io { path, source } = err;
		assert_eq!(path, PathBuf::from("/definitely/not/here.txt"));
		assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
	}
}
