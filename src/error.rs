//! Failures of a collection load.

use thiserror::Error;

/// Reasons a collection could not be loaded. Every variant aborts the whole load.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoadError {
	/// The file held nothing but whitespace.
	#[error("File is empty or could not be read.")]
	EmptyInput,

	/// One line was not a valid page record.
	#[error("Error parsing JSON on line {line}: {message}")]
	LineParse {
		/// 1-based position among the non-blank lines.
		line: usize,
		/// Message from the JSON parser.
		message: String,
	},

	/// The browser could not read the selected file.
	#[error("Failed to read the file: {0}")]
	Io(String),
}

impl LoadError {
	/// Offending line, when the failure is tied to one.
	pub fn line(&self) -> Option<usize> {
		match self {
			Self::LineParse { line, .. } => Some(*line),
			Self::EmptyInput | Self::Io(_) => None,
		}
	}
}
