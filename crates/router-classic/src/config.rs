//! History configuration.
//!
//! A [`HistoryConfig`] names the backend an application should use and the
//! location it starts at. It deserializes from TOML:
//!
//! ```toml
//! backend = "static"
//!
//! [initial]
//! path = "/customers"
//! search = "?page=2"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, HistoryResult};
use crate::history::{History, HistoryLocation, MemoryHistory, StaticHistory};
use crate::logging::{error_log, info_log};

/// The history backends that can be configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryBackend {
	/// The browser's History API. Ignores the initial location.
	Browser,
	/// A fixed location.
	Static,
	/// An in-memory stack.
	#[default]
	Memory,
}

/// Which history to create, and where it starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
	/// Backend to create.
	pub backend: HistoryBackend,
	/// Starting location for the static and memory backends.
	pub initial: HistoryLocation,
}

impl HistoryConfig {
	/// Creates a configuration for `backend` starting at `initial`.
	pub fn new(backend: HistoryBackend, initial: HistoryLocation) -> Self {
		Self { backend, initial }
	}

	/// Parses a configuration from a TOML document.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Parse`] if the document is malformed or names an
	/// unknown backend.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}

	/// Creates the configured history.
	///
	/// # Errors
	///
	/// Returns [`HistoryError::Unavailable`](crate::HistoryError::Unavailable)
	/// if the browser backend is requested outside a browser.
	pub fn build(&self) -> HistoryResult<Box<dyn History>> {
		info_log!("creating {:?} history at {}", self.backend, self.initial);

		match self.backend {
			HistoryBackend::Browser => browser_history(),
			HistoryBackend::Static => Ok(Box::new(StaticHistory::new(self.initial.clone()))),
			HistoryBackend::Memory => Ok(Box::new(MemoryHistory::new(self.initial.clone()))),
		}
	}
}

#[cfg(target_arch = "wasm32")]
fn browser_history() -> HistoryResult<Box<dyn History>> {
	crate::history::BrowserHistory::new()
		.map(|history| Box::new(history) as Box<dyn History>)
		.inspect_err(|error| error_log!("{}", error))
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_history() -> HistoryResult<Box<dyn History>> {
	let error = crate::error::HistoryError::Unavailable(
		"the browser history requires a wasm32 target".to_string(),
	);
	error_log!("{}", error);
	Err(error)
}
