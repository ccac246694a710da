//! Success-or-failure container returned by parameter parsers.
//!
//! [`Outcome`] is deliberately small: parsers report validation problems
//! through [`Outcome::Failure`], and callers that want to treat a failure as a
//! bug call [`unwrap`]. Conversions to and from [`Result`] are provided so an
//! outcome can be propagated with `?` once it has left the parser.

use std::fmt;

/// The result of converting a raw path segment into a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Outcome<T, E> {
	/// Conversion succeeded.
	Success(T),
	/// Conversion failed; the payload describes why.
	Failure(E),
}

/// Creates a successful outcome.
pub fn success<T, E>(value: T) -> Outcome<T, E> {
	Outcome::Success(value)
}

/// Creates a failed outcome.
pub fn failure<T, E>(value: E) -> Outcome<T, E> {
	Outcome::Failure(value)
}

/// Returns the success payload.
///
/// # Panics
///
/// Panics with `unwrap failed: {payload}` when `outcome` is a failure.
#[track_caller]
pub fn unwrap<T, E: fmt::Display>(outcome: Outcome<T, E>) -> T {
	outcome.unwrap()
}

impl<T, E> Outcome<T, E> {
	/// Returns `true` for [`Outcome::Success`].
	pub fn is_success(&self) -> bool {
		matches!(self, Self::Success(_))
	}

	/// Returns `true` for [`Outcome::Failure`].
	pub fn is_failure(&self) -> bool {
		matches!(self, Self::Failure(_))
	}

	/// Returns the success payload, discarding a failure.
	pub fn success(self) -> Option<T> {
		match self {
			Self::Success(value) => Some(value),
			Self::Failure(_) => None,
		}
	}

	/// Returns the failure payload, discarding a success.
	pub fn failure(self) -> Option<E> {
		match self {
			Self::Success(_) => None,
			Self::Failure(error) => Some(error),
		}
	}

	/// Maps the success payload.
	pub fn map<U, F>(self, f: F) -> Outcome<U, E>
	where
		F: FnOnce(T) -> U,
	{
		match self {
			Self::Success(value) => Outcome::Success(f(value)),
			Self::Failure(error) => Outcome::Failure(error),
		}
	}

	/// Maps the failure payload.
	pub fn map_failure<G, F>(self, f: F) -> Outcome<T, G>
	where
		F: FnOnce(E) -> G,
	{
		match self {
			Self::Success(value) => Outcome::Success(value),
			Self::Failure(error) => Outcome::Failure(f(error)),
		}
	}

	/// Converts into a [`Result`].
	pub fn into_result(self) -> Result<T, E> {
		self.into()
	}
}

impl<T, E: fmt::Display> Outcome<T, E> {
	/// Returns the success payload.
	///
	/// # Panics
	///
	/// Panics with `unwrap failed: {payload}` when `self` is a failure.
	#[track_caller]
	pub fn unwrap(self) -> T {
		match self {
			Self::Success(value) => value,
			Self::Failure(error) => panic!("unwrap failed: {}", error),
		}
	}
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
	fn from(result: Result<T, E>) -> Self {
		match result {
			Ok(value) => Self::Success(value),
			Err(error) => Self::Failure(error),
		}
	}
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
	fn from(outcome: Outcome<T, E>) -> Self {
		match outcome {
			Outcome::Success(value) => Ok(value),
			Outcome::Failure(error) => Err(error),
		}
	}
}
