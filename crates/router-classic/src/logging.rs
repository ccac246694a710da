//! Logging abstraction layer for router-classic
//!
//! These macros work across WASM and native targets. On WASM they write to
//! the browser console (debug builds only); on native targets they emit
//! `tracing` events, so the host application decides what is recorded by
//! installing a subscriber.
//!
//! ## Macro Overview
//!
//! | Macro | WASM | Non-WASM |
//! |-------|------|----------|
//! | `debug_log!` | `console.debug` (debug builds) | `tracing::debug!` |
//! | `info_log!` | `console.info` (debug builds) | `tracing::info!` |
//! | `warn_log!` | `console.warn` (debug builds) | `tracing::warn!` |
//! | `error_log!` | `console.error` (debug builds) | `tracing::error!` |
//!
//! ## Example
//!
//! ```ignore
//! use crate::logging::{debug_log, warn_log};
//!
//! debug_log!("push {} (index {})", location, index);
//! warn_log!("You cannot call {} on a static history", operation);
//! ```

/// Logs a debug message.
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		tracing::debug!(target: "router_classic", $($arg)*);
	}};
}

/// No-op debug_log in release WASM builds
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs an info message.
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		tracing::info!(target: "router_classic", $($arg)*);
	}};
}

#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning message.
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		tracing::warn!(target: "router_classic", $($arg)*);
	}};
}

#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// Logs an error message.
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		tracing::error!(target: "router_classic", $($arg)*);
	}};
}

#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{}};
}

pub(crate) use debug_log;
pub(crate) use error_log;
pub(crate) use info_log;
pub(crate) use warn_log;
