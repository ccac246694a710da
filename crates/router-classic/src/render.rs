//! Path stringification.
//!
//! [`render`] walks a [`Path`] and joins one string per part with `/`:
//! the literal for a static part, and the serialized property value for a
//! parametric part. Property values are looked up by parameter name in a
//! [`Props`] bag and must have the type the segment's parser serializes.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{PathError, PathResult};
use crate::path::{Path, RoutePart};

/// Property bag supplying one typed value per parametric segment.
#[derive(Default)]
pub struct Props {
	values: BTreeMap<String, Box<dyn Any + Send + Sync>>,
}

impl Props {
	/// Creates an empty bag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a value and returns the bag.
	pub fn with<T>(mut self, name: impl Into<String>, value: T) -> Self
	where
		T: Any + Send + Sync,
	{
		self.insert(name, value);
		self
	}

	/// Adds a value, replacing any previous value with the same name.
	pub fn insert<T>(&mut self, name: impl Into<String>, value: T)
	where
		T: Any + Send + Sync,
	{
		self.values.insert(name.into(), Box::new(value));
	}

	/// Returns the value stored under `name` if it has type `T`.
	pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
		self.values.get(name)?.downcast_ref::<T>()
	}

	/// Returns `true` if a value is stored under `name`.
	pub fn contains(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	/// Returns the stored names in order.
	pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
		self.values.keys().map(String::as_str)
	}

	/// Returns the number of stored values.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns `true` if the bag is empty.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	fn value(&self, name: &str) -> Option<&dyn Any> {
		self.values.get(name).map(|value| &**value as &dyn Any)
	}
}

impl fmt::Debug for Props {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.names()).finish()
	}
}

/// Builds a [`Props`] bag from `name => value` pairs.
///
/// ```
/// use router_classic::props;
///
/// let props = props! { "customerId" => "abc123", "page" => 2.0 };
/// assert_eq!(props.len(), 2);
/// assert_eq!(props.get::<f64>("page"), Some(&2.0));
/// ```
#[macro_export]
macro_rules! props {
	() => {
		$crate::Props::new()
	};
	($($name:expr => $value:expr),+ $(,)?) => {
		$crate::Props::new()$(.with($name, $value))+
	};
}

/// Renders `path` into a URL path string.
///
/// Parts are joined with `/`; no leading or trailing separator is added. A
/// parameter declared more than once renders the same value at every
/// occurrence.
///
/// # Errors
///
/// - [`PathError::MissingParameter`] if `props` has no value for a parameter.
/// - [`PathError::TypeMismatch`] if the value is not of the parameter's type.
///
/// # Example
///
/// ```
/// use router_classic::{p, path, props, render};
///
/// let path = path![
///     "customers",
///     p::string("customerId"),
///     "orders",
///     p::string("orderId"),
/// ];
/// let url = render(&path, &props! { "customerId" => "abc123", "orderId" => "DEF123" });
/// assert_eq!(url.unwrap(), "customers/abc123/orders/DEF123");
/// ```
pub fn render(path: &Path, props: &Props) -> PathResult<String> {
	let segments = path
		.parts()
		.iter()
		.map(|part| match part {
			RoutePart::Static(value) => Ok(value.clone()),
			RoutePart::Param(segment) => {
				let value = props
					.value(segment.name())
					.ok_or_else(|| PathError::MissingParameter(segment.name().to_string()))?;
				segment
					.serialize(value)
					.ok_or_else(|| PathError::TypeMismatch {
						name: segment.name().to_string(),
						expected: segment.value_type(),
					})
			}
		})
		.collect::<PathResult<Vec<_>>>()?;

	Ok(segments.join("/"))
}
