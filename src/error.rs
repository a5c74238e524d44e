//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort loading a [`Graph`](crate::graph::Graph).
///
/// Malformed lines, unknown endpoints and unreachable goals are not errors; only a failure
/// to read the input at all is.
#[derive(Debug, Error)]
pub enum Error {
	/// The input file could not be opened or read
	#[error("failed to read {}: {source}", path.display())]
	Io {
		/// the file that was being read
		path: PathBuf,
		/// the underlying error
		#[source]
		source: std::io::Error,
	},
}

/// A shorthand for results whose error type is [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
