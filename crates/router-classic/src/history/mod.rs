//! Navigation history.
//!
//! The [`History`] trait is the one contract the rest of an application
//! depends on. Three backends implement it:
//!
//! - [`BrowserHistory`] (wasm32 only): the browser's History API.
//! - [`StaticHistory`]: one fixed location, for non-interactive rendering.
//! - [`MemoryHistory`]: an in-memory stack, for tests and embedding.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HistoryResult;

#[cfg(target_arch = "wasm32")]
mod browser;
mod memory;
mod static_history;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserHistory;
pub use memory::MemoryHistory;
pub use static_history::StaticHistory;

/// The history backend used by default on the current target.
#[cfg(target_arch = "wasm32")]
pub type DefaultHistory = BrowserHistory;

/// The history backend used by default on the current target.
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultHistory = MemoryHistory;

/// A location: the path portion of a URL and its query string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryLocation {
	/// Path portion of the URL, without the query string.
	pub path: String,
	/// Query string, passed through verbatim (the browser includes the `?`).
	#[serde(default)]
	pub search: String,
}

impl HistoryLocation {
	/// Creates a location from a path and a query string.
	pub fn new(path: impl Into<String>, search: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			search: search.into(),
		}
	}

	/// Splits `url` at the first `?`. The search part keeps the `?`.
	pub fn parse(url: &str) -> Self {
		match url.find('?') {
			Some(index) => Self::new(&url[..index], &url[index..]),
			None => Self::new(url, ""),
		}
	}

	/// Returns `path + search`.
	pub fn url(&self) -> String {
		format!("{}{}", self.path, self.search)
	}
}

impl Default for HistoryLocation {
	fn default() -> Self {
		Self::new("/", "")
	}
}

impl fmt::Display for HistoryLocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}", self.path, self.search)
	}
}

impl From<&str> for HistoryLocation {
	fn from(url: &str) -> Self {
		Self::parse(url)
	}
}

/// Options for [`History::navigate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigateOptions {
	/// Overwrite the current entry instead of pushing a new one.
	#[serde(default)]
	pub replace: bool,
}

impl NavigateOptions {
	/// Options for a navigation that pushes a new entry.
	pub fn push() -> Self {
		Self { replace: false }
	}

	/// Options for a navigation that overwrites the current entry.
	pub fn replace() -> Self {
		Self { replace: true }
	}
}

/// Where the user currently is, and how to move them.
///
/// A history is created once per application, session or test and held for
/// its whole lifetime by a single owner.
pub trait History {
	/// Moves to `location`, pushing a new entry or replacing the current one.
	fn navigate(
		&mut self,
		location: HistoryLocation,
		options: NavigateOptions,
	) -> HistoryResult<()>;

	/// Undoes the most recent push.
	fn pop(&mut self) -> HistoryResult<()>;

	/// Returns the current location.
	fn location(&self) -> HistoryLocation;

	/// Pushes `location` as a new entry.
	fn push(&mut self, location: HistoryLocation) -> HistoryResult<()> {
		self.navigate(location, NavigateOptions::push())
	}

	/// Replaces the current entry with `location`.
	fn replace(&mut self, location: HistoryLocation) -> HistoryResult<()> {
		self.navigate(location, NavigateOptions::replace())
	}
}

impl<H: History + ?Sized> History for Box<H> {
	fn navigate(
		&mut self,
		location: HistoryLocation,
		options: NavigateOptions,
	) -> HistoryResult<()> {
		(**self).navigate(location, options)
	}

	fn pop(&mut self) -> HistoryResult<()> {
		(**self).pop()
	}

	fn location(&self) -> HistoryLocation {
		(**self).location()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/customers?page=2", "/customers", "?page=2")]
	#[case("/customers", "/customers", "")]
	#[case("/a?b?c", "/a", "?b?c")]
	#[case("?only", "", "?only")]
	fn test_location_parse(#[case] url: &str, #[case] path: &str, #[case] search: &str) {
		let location = HistoryLocation::parse(url);

		assert_eq!(location, HistoryLocation::new(path, search));
		assert_eq!(location.url(), url);
		assert_eq!(location.to_string(), url);
	}

	#[rstest]
	fn test_location_default_is_root() {
		assert_eq!(HistoryLocation::default(), HistoryLocation::new("/", ""));
	}

	#[rstest]
	fn test_navigate_options() {
		assert!(!NavigateOptions::default().replace);
		assert!(!NavigateOptions::push().replace);
		assert!(NavigateOptions::replace().replace);
	}

	#[rstest]
	fn test_boxed_history_delegates() {
		let mut history: Box<dyn History> = Box::new(MemoryHistory::new("/".into()));

		history.push("/next".into()).unwrap();
		assert_eq!(history.location().path, "/next");

		history.pop().unwrap();
		assert_eq!(history.location().path, "/");
	}
}
