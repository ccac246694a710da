//! Integration tests for navigation history
//!
//! These tests verify:
//! 1. The memory backend's push/replace/pop state machine
//! 2. The static backend's fixed location and rejected navigation
//! 3. Backends used through the `History` contract and configuration

use router_classic::{
	DefaultHistory, History, HistoryBackend, HistoryConfig, HistoryError, HistoryLocation,
	MemoryHistory, NavigateOptions, StaticHistory, p, path, props,
};
use rstest::*;

#[fixture]
fn l0() -> HistoryLocation {
	HistoryLocation::new("/", "")
}

#[fixture]
fn l1() -> HistoryLocation {
	HistoryLocation::new("/customers", "?page=1")
}

#[fixture]
fn l2() -> HistoryLocation {
	HistoryLocation::new("/customers/abc123", "")
}

/// Navigates through the contract only, as a UI binding would.
fn visit(history: &mut dyn History, url: &str) -> Result<(), HistoryError> {
	history.navigate(HistoryLocation::parse(url), NavigateOptions::default())
}

/// Memory backend: push moves forward, pop moves back, pop at start is absorbed
#[rstest]
fn test_memory_push_pop(l0: HistoryLocation, l1: HistoryLocation) {
	let mut history = MemoryHistory::new(l0.clone());
	assert_eq!(history.index(), 0);

	history.navigate(l1.clone(), NavigateOptions::default()).unwrap();
	assert_eq!(history.index(), 1);
	assert_eq!(history.location(), l1);

	history.pop().unwrap();
	assert_eq!(history.index(), 0);
	assert_eq!(history.location(), l0);

	history.pop().unwrap();
	assert_eq!(history.index(), 0);
	assert_eq!(history.location(), l0);
}

/// Memory backend: replace overwrites the current entry
#[rstest]
fn test_memory_replace(l0: HistoryLocation, l1: HistoryLocation, l2: HistoryLocation) {
	let mut history = MemoryHistory::new(l0.clone());

	history.navigate(l1, NavigateOptions::default()).unwrap();
	history.navigate(l2.clone(), NavigateOptions { replace: true }).unwrap();

	assert_eq!(history.index(), 1);
	assert_eq!(history.location(), l2);
	assert_eq!(history.entries(), &[l0, l2]);
}

/// Static backend: location never changes
#[rstest]
fn test_static_history_location(l1: HistoryLocation) {
	let history = StaticHistory::new(l1.clone());
	assert_eq!(history.location(), l1);
	assert_eq!(history.location(), history.location());
}

/// Static backend: navigating is fatal
#[rstest]
#[case(NavigateOptions::push())]
#[case(NavigateOptions::replace())]
#[should_panic(expected = "You cannot call navigate on a static history")]
fn test_static_history_navigate_fatal(
	l1: HistoryLocation,
	l2: HistoryLocation,
	#[case] options: NavigateOptions,
) {
	let mut history = StaticHistory::new(l1);
	let _ = history.navigate(l2, options);
}

/// Static backend: popping is fatal even when the result is discarded
#[rstest]
#[should_panic(expected = "You cannot call pop on a static history")]
fn test_static_history_pop_fatal(l1: HistoryLocation) {
	let mut history = StaticHistory::new(l1);
	let _ = history.pop();
}

/// Contract: backends are interchangeable behind `dyn History`
#[rstest]
fn test_history_contract_object_safe(l0: HistoryLocation) {
	let mut memory = MemoryHistory::new(l0.clone());
	let fixed = StaticHistory::new(l0.clone());

	assert!(visit(&mut memory, "/search?q=rust").is_ok());
	assert_eq!(memory.location(), HistoryLocation::new("/search", "?q=rust"));

	let backends: [&dyn History; 2] = [&memory, &fixed];
	assert_eq!(backends[1].location(), l0);
}

/// Contract: a static backend behind `dyn History` still rejects navigation
#[rstest]
#[should_panic(expected = "You cannot call navigate on a static history")]
fn test_history_contract_static_navigate(l0: HistoryLocation) {
	let mut fixed = StaticHistory::new(l0);
	let _ = visit(&mut fixed, "/search?q=rust");
}

/// Paths and history together: navigate to a rendered path
#[rstest]
fn test_navigate_to_rendered_path() {
	let order = path![
		"customers",
		p::string("customerId"),
		"orders",
		p::parsed::<u32>("orderNo")
	];
	let url = order
		.render(&props! { "customerId" => "abc123", "orderNo" => 7_u32 })
		.unwrap();

	let mut history = DefaultHistory::default();
	history
		.push(HistoryLocation::new(format!("/{}", url), "?tab=items"))
		.unwrap();

	assert_eq!(history.location().url(), "/customers/abc123/orders/7?tab=items");
}

/// Configuration: a TOML document selects and seeds the backend
#[rstest]
#[case("backend = \"memory\"\n[initial]\npath = \"/start\"\n", HistoryBackend::Memory)]
#[case("backend = \"static\"\n[initial]\npath = \"/start\"\n", HistoryBackend::Static)]
fn test_config_builds_backend(#[case] source: &str, #[case] backend: HistoryBackend) {
	let config = HistoryConfig::from_toml_str(source).unwrap();
	let history = config.build().unwrap();

	assert_eq!(config.backend, backend);
	assert_eq!(history.location(), HistoryLocation::new("/start", ""));
}

/// Configuration: a configured memory backend navigates
#[rstest]
fn test_config_memory_navigates() {
	let config = HistoryConfig::from_toml_str("backend = \"memory\"\n").unwrap();
	let mut history = config.build().unwrap();

	history.push("/next".into()).unwrap();
	assert_eq!(history.location().path, "/next");
}

/// Configuration: a configured static backend is fatal to navigate
#[rstest]
#[should_panic(expected = "You cannot call navigate on a static history")]
fn test_config_static_navigate_fatal() {
	let config = HistoryConfig::from_toml_str("backend = \"static\"\n").unwrap();
	let mut history = config.build().unwrap();

	let _ = history.push("/next".into());
}

/// Serialization: locations keep their path and search verbatim
#[rstest]
fn test_location_serde(l1: HistoryLocation) {
	let json = serde_json::to_string(&l1).unwrap();
	assert_eq!(json, r#"{"path":"/customers","search":"?page=1"}"#);

	let parsed: HistoryLocation = serde_json::from_str(r#"{"path":"/a"}"#).unwrap();
	assert_eq!(parsed, HistoryLocation::new("/a", ""));
}
