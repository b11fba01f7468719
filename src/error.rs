//! Error types for graph loading and canvas setup.

use thiserror::Error;

/// Failures while reading a graph description. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
	/// The input had no header line at all.
	#[error("missing header line, expected \"<vertices> <edges>\"")]
	MissingHeader,

	/// The header was not exactly two non-negative integers.
	#[error("line {line}: malformed header {text:?}, expected \"<vertices> <edges>\"")]
	MalformedHeader { line: usize, text: String },

	/// An edge line was not exactly three integers.
	#[error("line {line}: malformed edge {text:?}, expected \"<start> <end> <weight>\"")]
	MalformedEdge { line: usize, text: String },

	/// An edge referenced a vertex outside `1..=vertices`.
	#[error("line {line}: vertex {index} out of range 1..={vertices} in {text:?}")]
	VertexOutOfRange {
		line: usize,
		text: String,
		index: i64,
		vertices: usize,
	},

	/// Fewer edge lines than the header declared.
	#[error("expected {expected} edges, found {found}")]
	MissingEdges { expected: usize, found: usize },

	/// A non-blank line after the declared edges.
	#[error("line {line}: unexpected line {text:?} after {expected} edges")]
	TrailingLine {
		line: usize,
		text: String,
		expected: usize,
	},
}

/// Failures while wiring the scene to the browser canvas.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
	#[error("window is not available")]
	WindowNotAvailable,

	#[error("failed to read window size: {0}")]
	WindowSize(String),

	#[error("failed to get 2d context: {0}")]
	ContextUnavailable(String),

	#[error("failed to add {event} listener: {reason}")]
	ListenerFailed { event: &'static str, reason: String },

	#[error("failed to request animation frame: {0}")]
	RequestFrameFailed(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn load_error_names_the_line() {
		let err = LoadError::MalformedEdge {
			line: 3,
			text: "1 x 4".into(),
		};
		assert_eq!(
			err.to_string(),
			"line 3: malformed edge \"1 x 4\", expected \"<start> <end> <weight>\""
		);
	}

	#[test]
	fn out_of_range_reports_bounds() {
		let err = LoadError::VertexOutOfRange {
			line: 2,
			text: "1 9 3".into(),
			index: 9,
			vertices: 4,
		};
		assert!(err.to_string().contains("vertex 9 out of range 1..=4"));
	}

	#[test]
	fn canvas_error_display() {
		let err = CanvasError::ListenerFailed {
			event: "resize",
			reason: "denied".into(),
		};
		assert_eq!(err.to_string(), "failed to add resize listener: denied");
	}
}
