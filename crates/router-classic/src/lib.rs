//! router-classic - typed paths and navigation history for client-side routing
//!
//! Path shapes are declared as composable, typed segments; a declared path
//! knows which parameters it requires and renders to a concrete URL string.
//! Where the user currently is lives behind the [`History`] trait, with one
//! backend for the browser, one fixed location for non-interactive rendering,
//! and one in-memory stack for tests and embedding.
//!
//! ## Architecture
//!
//! - [`outcome`]: [`Outcome`], the success-or-failure container parsers return
//! - [`params`]: [`NamedParser`] and the built-in parsers re-exported as [`p`]
//! - [`path`](mod@path): [`Path`], [`RoutePart`] and composition
//! - [`render`](mod@render): [`Props`] and [`render()`]
//! - [`history`]: the [`History`] contract and its backends
//! - [`config`]: [`HistoryConfig`], for choosing a backend from TOML
//!
//! ## Example
//!
//! ```
//! use router_classic::{History, HistoryLocation, MemoryHistory, p, path, props};
//!
//! let api = path!["api"];
//! let customer = path!["customers", p::string("customerId")];
//! let order = path!["orders", p::regex("orderId", "[A-F]{3}-[0-9]{3}").unwrap()];
//! let customer_order = path![api, customer, order];
//!
//! let url = customer_order
//!     .render(&props! { "customerId" => "abc123", "orderId" => "DEF-123" })
//!     .unwrap();
//! assert_eq!(url, "api/customers/abc123/orders/DEF-123");
//!
//! let mut history = MemoryHistory::new(HistoryLocation::new("/", ""));
//! history.push(HistoryLocation::new(format!("/{}", url), "")).unwrap();
//! assert_eq!(history.location().path, "/api/customers/abc123/orders/DEF-123");
//! ```

pub(crate) mod logging;

pub mod config;
pub mod error;
pub mod history;
pub mod outcome;
pub mod params;
pub mod path;
pub mod render;

/// Built-in parameter parsers.
pub mod p {
	pub use crate::params::{number, parsed, regex, string};
}

pub use config::{HistoryBackend, HistoryConfig};
pub use error::{ConfigError, HistoryError, HistoryResult, PathError, PathResult};
#[cfg(target_arch = "wasm32")]
pub use history::BrowserHistory;
pub use history::{
	DefaultHistory, History, HistoryLocation, MemoryHistory, NavigateOptions, StaticHistory,
};
pub use outcome::{Outcome, failure, success, unwrap};
pub use params::{NamedParser, ParamSegment};
pub use path::{Path, PathItem, RoutePart, sub_path};
pub use render::{Props, render};
