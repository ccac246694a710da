//! Error types for router-classic.

use thiserror::Error;

/// Errors raised while declaring or rendering a [`Path`](crate::Path).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
	/// A regex-constrained parameter was declared with an invalid pattern.
	#[error("Invalid pattern for {name}: {message}")]
	InvalidPattern {
		/// Parameter name.
		name: String,
		/// Message reported by the regex compiler.
		message: String,
	},

	/// The property bag has no value for a parametric segment.
	#[error("Missing parameter: {0}")]
	MissingParameter(String),

	/// The property bag holds a value of the wrong type for a parametric segment.
	#[error("Parameter {name} expected a value of type {expected}")]
	TypeMismatch {
		/// Parameter name.
		name: String,
		/// Rust type name the segment serializes.
		expected: &'static str,
	},
}

/// Errors raised by [`History`](crate::History) backends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
	/// Navigation was attempted on a [`StaticHistory`](crate::StaticHistory).
	///
	/// The static backend panics with this message; navigating it is a bug in
	/// the caller.
	#[error("You cannot call {operation} on a static history")]
	StaticHistory {
		/// The rejected operation (`navigate` or `pop`).
		operation: &'static str,
	},

	/// The host navigation mechanism is not available.
	#[error("History unavailable: {0}")]
	Unavailable(String),

	/// The host rejected a navigation request.
	#[error("Navigation failed: {0}")]
	Host(String),
}

/// Errors raised while loading a [`HistoryConfig`](crate::HistoryConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The configuration document could not be parsed.
	#[error("Invalid history configuration: {0}")]
	Parse(#[from] toml::de::Error),

	/// The configured backend could not be created.
	#[error(transparent)]
	History(#[from] HistoryError),
}

/// Result type alias for path operations.
pub type PathResult<T> = Result<T, PathError>;

/// Result type alias for history operations.
pub type HistoryResult<T> = Result<T, HistoryError>;
