//! Fixed, non-interactive history.

use super::{History, HistoryLocation, NavigateOptions};
use crate::error::{HistoryError, HistoryResult};
use crate::logging::warn_log;

/// A history that always reports the location it was created with.
///
/// Used when rendering a single snapshot, such as server-side output, where
/// navigating is a bug in the caller. [`navigate`](History::navigate) and
/// [`pop`](History::pop) always panic with the
/// [`HistoryError::StaticHistory`] message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticHistory {
	location: HistoryLocation,
}

impl StaticHistory {
	/// Creates a history fixed at `location`.
	pub fn new(location: HistoryLocation) -> Self {
		Self { location }
	}

	#[track_caller]
	fn reject(operation: &'static str) -> ! {
		let error = HistoryError::StaticHistory { operation };
		warn_log!("{}", error);
		panic!("{}", error)
	}
}

impl History for StaticHistory {
	#[track_caller]
	fn navigate(
		&mut self,
		_location: HistoryLocation,
		_options: NavigateOptions,
	) -> HistoryResult<()> {
		Self::reject("navigate")
	}

	#[track_caller]
	fn pop(&mut self) -> HistoryResult<()> {
		Self::reject("pop")
	}

	fn location(&self) -> HistoryLocation {
		self.location.clone()
	}
}
