//! Browser History API backend (wasm32 only).

use std::fmt;

use wasm_bindgen::JsValue;
use web_sys::Window;

use super::{History, HistoryLocation, NavigateOptions};
use crate::error::{HistoryError, HistoryResult};
use crate::logging::error_log;

/// A history backed by `window.history` and `window.location`.
///
/// [`location`](History::location) reads the browser state on every call,
/// and [`pop`](History::pop) only asks the browser to go back: the location
/// changes once the browser has processed the request.
pub struct BrowserHistory {
	window: Window,
}

impl BrowserHistory {
	/// Creates a history bound to the global `window`.
	///
	/// # Errors
	///
	/// Returns [`HistoryError::Unavailable`] when there is no global window,
	/// for example inside a web worker.
	pub fn new() -> HistoryResult<Self> {
		let window = web_sys::window()
			.ok_or_else(|| HistoryError::Unavailable("no global `window` exists".to_string()))?;
		Ok(Self { window })
	}

	fn history(&self) -> HistoryResult<web_sys::History> {
		self.window.history().map_err(host_error)
	}
}

impl fmt::Debug for BrowserHistory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BrowserHistory").finish_non_exhaustive()
	}
}

fn host_error(value: JsValue) -> HistoryError {
	let message = value.as_string().unwrap_or_else(|| format!("{:?}", value));
	error_log!("History API call failed: {}", message);
	HistoryError::Host(message)
}

impl History for BrowserHistory {
	fn navigate(
		&mut self,
		location: HistoryLocation,
		options: NavigateOptions,
	) -> HistoryResult<()> {
		let url = location.url();
		let history = self.history()?;

		let result = if options.replace {
			history.replace_state_with_url(&JsValue::NULL, "", Some(&url))
		} else {
			history.push_state_with_url(&JsValue::NULL, "", Some(&url))
		};
		result.map_err(host_error)
	}

	fn pop(&mut self) -> HistoryResult<()> {
		self.history()?.back().map_err(host_error)
	}

	fn location(&self) -> HistoryLocation {
		let location = self.window.location();
		let path = location.pathname().map_err(host_error).unwrap_or_default();
		let search = location.search().map_err(host_error).unwrap_or_default();
		HistoryLocation { path, search }
	}
}
