//! In-memory history stack.

use super::{History, HistoryLocation, NavigateOptions};
use crate::error::HistoryResult;
use crate::logging::debug_log;

/// A history kept in memory as a stack of locations and a cursor.
///
/// Pushing after a pop discards the entries that were ahead of the cursor;
/// popping at the first entry does nothing.
///
/// # Example
///
/// ```
/// use router_classic::{History, MemoryHistory};
///
/// let mut history = MemoryHistory::new("/".into());
/// history.push("/customers".into()).unwrap();
/// assert_eq!(history.location().path, "/customers");
///
/// history.pop().unwrap();
/// assert_eq!(history.location().path, "/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
	stack: Vec<HistoryLocation>,
	index: usize,
}

impl MemoryHistory {
	/// Creates a history whose only entry is `initial`.
	pub fn new(initial: HistoryLocation) -> Self {
		Self {
			stack: vec![initial],
			index: 0,
		}
	}

	/// Returns the cursor position.
	pub fn index(&self) -> usize {
		self.index
	}

	/// Returns the entries up to and including the cursor.
	pub fn entries(&self) -> &[HistoryLocation] {
		&self.stack[..=self.index]
	}
}

impl Default for MemoryHistory {
	fn default() -> Self {
		Self::new(HistoryLocation::default())
	}
}

impl History for MemoryHistory {
	fn navigate(
		&mut self,
		location: HistoryLocation,
		options: NavigateOptions,
	) -> HistoryResult<()> {
		if options.replace {
			debug_log!("replace {} at index {}", location, self.index);
			self.stack[self.index] = location;
		} else {
			self.index += 1;
			debug_log!("push {} at index {}", location, self.index);
			self.stack.truncate(self.index);
			self.stack.push(location);
		}
		Ok(())
	}

	fn pop(&mut self) -> HistoryResult<()> {
		if self.index > 0 {
			self.index -= 1;
			debug_log!("pop to index {}", self.index);
		}
		Ok(())
	}

	fn location(&self) -> HistoryLocation {
		self.stack[self.index].clone()
	}
}
