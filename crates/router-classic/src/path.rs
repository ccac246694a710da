//! Typed path declarations.
//!
//! A [`Path`] is an ordered list of [`RoutePart`]s. Paths are built from a
//! mixed list of literals, parameter parsers and previously built paths with
//! [`Path::build`] or the [`path!`](crate::path!) macro, and two paths are
//! joined with [`Path::join`] or [`sub_path`].
//!
//! # Example
//!
//! ```
//! use router_classic::{Path, p, path};
//!
//! let api = path!["api"];
//! let customer = path!["customers", p::string("customerId")];
//! let order = path!["orders", p::regex("orderId", "[A-F]{3}-[0-9]{3}").unwrap()];
//!
//! let customer_order: Path = path![api, customer, order];
//! assert_eq!(customer_order.len(), 5);
//! assert_eq!(
//!     customer_order.route_pattern(),
//!     "/api/customers/:customerId/orders/:orderId"
//! );
//! ```

use std::ops::Add;

use crate::error::PathResult;
use crate::params::{NamedParser, ParamSegment};
use crate::render::{Props, render};

/// One segment of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePart {
	/// A segment with a fixed literal value.
	Static(String),
	/// A segment whose value is supplied when the path is rendered.
	Param(ParamSegment),
}

impl RoutePart {
	/// Returns `true` for [`RoutePart::Static`].
	pub fn is_static(&self) -> bool {
		matches!(self, Self::Static(_))
	}

	/// Returns the parameter segment, if this part is parametric.
	pub fn as_param(&self) -> Option<&ParamSegment> {
		match self {
			Self::Param(segment) => Some(segment),
			Self::Static(_) => None,
		}
	}
}

/// An item accepted by [`Path::build`].
#[derive(Debug, Clone)]
pub enum PathItem {
	/// Becomes exactly one static part. No `/` splitting is performed.
	Literal(String),
	/// Becomes one parametric part.
	Param(ParamSegment),
	/// Contributes every part of the nested path, in order.
	Nested(Path),
}

impl From<&str> for PathItem {
	fn from(value: &str) -> Self {
		Self::Literal(value.to_string())
	}
}

impl From<String> for PathItem {
	fn from(value: String) -> Self {
		Self::Literal(value)
	}
}

impl<T: Send + 'static> From<NamedParser<T>> for PathItem {
	fn from(parser: NamedParser<T>) -> Self {
		Self::Param(parser.into())
	}
}

impl<T: Send + 'static> From<&NamedParser<T>> for PathItem {
	fn from(parser: &NamedParser<T>) -> Self {
		Self::Param(parser.clone().into())
	}
}

impl From<ParamSegment> for PathItem {
	fn from(segment: ParamSegment) -> Self {
		Self::Param(segment)
	}
}

impl From<Path> for PathItem {
	fn from(path: Path) -> Self {
		Self::Nested(path)
	}
}

impl From<&Path> for PathItem {
	fn from(path: &Path) -> Self {
		Self::Nested(path.clone())
	}
}

/// An ordered, immutable sequence of route parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
	parts: Vec<RoutePart>,
}

impl Path {
	/// Creates the empty path. It renders to `""`.
	pub fn new() -> Self {
		Self::default()
	}

	/// Flattens a mixed list of items into one path.
	pub fn build<I>(items: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<PathItem>,
	{
		let mut parts = Vec::new();
		for item in items {
			match item.into() {
				PathItem::Literal(value) => parts.push(RoutePart::Static(value)),
				PathItem::Param(segment) => parts.push(RoutePart::Param(segment)),
				PathItem::Nested(path) => parts.extend(path.parts),
			}
		}
		Self { parts }
	}

	/// Returns a new path with the parts of `other` appended to this one.
	pub fn join(&self, other: &Path) -> Path {
		let mut parts = Vec::with_capacity(self.parts.len() + other.parts.len());
		parts.extend_from_slice(&self.parts);
		parts.extend_from_slice(&other.parts);
		Self { parts }
	}

	/// Returns the parts in order.
	pub fn parts(&self) -> &[RoutePart] {
		&self.parts
	}

	/// Returns the number of parts.
	pub fn len(&self) -> usize {
		self.parts.len()
	}

	/// Returns `true` if the path has no parts.
	pub fn is_empty(&self) -> bool {
		self.parts.is_empty()
	}

	/// Returns the parametric segments in order.
	///
	/// This is the set of properties [`render`](Path::render) requires.
	pub fn params(&self) -> impl Iterator<Item = &ParamSegment> + '_ {
		self.parts.iter().filter_map(RoutePart::as_param)
	}

	/// Returns the names of parameters that are declared more than once.
	pub fn duplicate_params(&self) -> Vec<&str> {
		let mut seen = Vec::new();
		let mut duplicates = Vec::new();
		for name in self.params().map(ParamSegment::name) {
			if seen.contains(&name) {
				if !duplicates.contains(&name) {
					duplicates.push(name);
				}
			} else {
				seen.push(name);
			}
		}
		duplicates
	}

	/// Prints the path as a route pattern: static parts as `/{value}` and
	/// parameters as `/:{name}`.
	pub fn route_pattern(&self) -> String {
		self.parts
			.iter()
			.map(|part| match part {
				RoutePart::Static(value) => format!("/{}", value),
				RoutePart::Param(segment) => format!("/:{}", segment.name()),
			})
			.collect()
	}

	/// Renders the path with values from `props`. See [`render`].
	pub fn render(&self, props: &Props) -> PathResult<String> {
		render(self, props)
	}
}

/// Appends `child` to `parent`.
pub fn sub_path(parent: &Path, child: &Path) -> Path {
	parent.join(child)
}

impl Add for Path {
	type Output = Path;

	fn add(mut self, other: Path) -> Path {
		self.parts.extend(other.parts);
		self
	}
}

impl Add<&Path> for &Path {
	type Output = Path;

	fn add(self, other: &Path) -> Path {
		self.join(other)
	}
}

impl FromIterator<RoutePart> for Path {
	fn from_iter<I: IntoIterator<Item = RoutePart>>(iter: I) -> Self {
		Self {
			parts: iter.into_iter().collect(),
		}
	}
}

impl Extend<RoutePart> for Path {
	fn extend<I: IntoIterator<Item = RoutePart>>(&mut self, iter: I) {
		self.parts.extend(iter);
	}
}

impl<'a> Extend<&'a RoutePart> for Path {
	fn extend<I: IntoIterator<Item = &'a RoutePart>>(&mut self, iter: I) {
		self.parts.extend(iter.into_iter().cloned());
	}
}

impl IntoIterator for Path {
	type Item = RoutePart;
	type IntoIter = std::vec::IntoIter<RoutePart>;

	fn into_iter(self) -> Self::IntoIter {
		self.parts.into_iter()
	}
}

impl<'a> IntoIterator for &'a Path {
	type Item = &'a RoutePart;
	type IntoIter = std::slice::Iter<'a, RoutePart>;

	fn into_iter(self) -> Self::IntoIter {
		self.parts.iter()
	}
}

/// Builds a [`Path`] from literals, parsers and nested paths.
///
/// ```
/// use router_classic::{p, path};
///
/// let orders = path!["customers", p::string("customerId"), "orders"];
/// assert_eq!(orders.route_pattern(), "/customers/:customerId/orders");
/// assert!(path![].is_empty());
/// ```
#[macro_export]
macro_rules! path {
	() => {
		$crate::Path::new()
	};
	($($item:expr),+ $(,)?) => {
		$crate::Path::build([$($crate::PathItem::from($item)),+])
	};
}
