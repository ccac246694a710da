//! Named parameter parsers for parametric path segments.
//!
//! A [`NamedParser`] couples a parameter name with a `parse` function
//! (raw segment to typed value) and a `serialize` function (typed value back
//! to a segment). Rendering a [`Path`](crate::Path) only serializes; `parse`
//! is kept for resolving concrete URLs against declared paths.
//!
//! # Example
//!
//! ```
//! use router_classic::{Outcome, p};
//!
//! let id = p::number("id");
//! assert_eq!(id.parse("42"), Outcome::Success(42.0));
//! assert_eq!(id.serialize(&42.0), "42");
//! assert_eq!(
//!     id.parse("abc"),
//!     Outcome::Failure("Expected id to be a number".to_string())
//! );
//! ```

use std::any::{Any, type_name};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use regex::Regex;

use crate::error::{PathError, PathResult};
use crate::outcome::{Outcome, failure, success};

type ParseFn<T> = Arc<dyn Fn(&str) -> Outcome<T, String> + Send + Sync>;
type SerializeFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// A named converter between a raw path segment and a value of type `T`.
///
/// Cloning is cheap: the conversion functions are shared.
pub struct NamedParser<T> {
	name: String,
	parse: ParseFn<T>,
	serialize: SerializeFn<T>,
}

impl<T> NamedParser<T> {
	/// Creates a parser from a name and a pair of conversion functions.
	///
	/// `parse(serialize(x))` should succeed with a value equal to `x` for every
	/// valid `x`.
	pub fn new<P, S>(name: impl Into<String>, parse: P, serialize: S) -> Self
	where
		P: Fn(&str) -> Outcome<T, String> + Send + Sync + 'static,
		S: Fn(&T) -> String + Send + Sync + 'static,
	{
		Self {
			name: name.into(),
			parse: Arc::new(parse),
			serialize: Arc::new(serialize),
		}
	}

	/// Returns the parameter name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Converts a raw segment into a typed value.
	pub fn parse(&self, raw: &str) -> Outcome<T, String> {
		(self.parse)(raw)
	}

	/// Converts a typed value into a segment.
	pub fn serialize(&self, value: &T) -> String {
		(self.serialize)(value)
	}
}

impl<T> Clone for NamedParser<T> {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			parse: Arc::clone(&self.parse),
			serialize: Arc::clone(&self.serialize),
		}
	}
}

impl<T> fmt::Debug for NamedParser<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NamedParser")
			.field("name", &self.name)
			.field("value_type", &type_name::<T>())
			.finish()
	}
}

/// Object-safe view of a [`NamedParser`] with its value type erased.
trait ErasedParser: Send + Sync {
	fn name(&self) -> &str;
	fn value_type(&self) -> &'static str;
	fn parse_any(&self, raw: &str) -> Outcome<Box<dyn Any + Send>, String>;
	fn serialize_any(&self, value: &dyn Any) -> Option<String>;
}

impl<T: Send + 'static> ErasedParser for NamedParser<T> {
	fn name(&self) -> &str {
		&self.name
	}

	fn value_type(&self) -> &'static str {
		type_name::<T>()
	}

	fn parse_any(&self, raw: &str) -> Outcome<Box<dyn Any + Send>, String> {
		self.parse(raw).map(|value| Box::new(value) as Box<dyn Any + Send>)
	}

	fn serialize_any(&self, value: &dyn Any) -> Option<String> {
		if let Some(value) = value.downcast_ref::<T>() {
			return Some(self.serialize(value));
		}

		// String literals stand in for `String` values.
		let text = value.downcast_ref::<&'static str>()?;
		let owned = (*text).to_string();
		(&owned as &dyn Any)
			.downcast_ref::<T>()
			.map(|value| self.serialize(value))
	}
}

/// A parametric path segment: a [`NamedParser`] with its value type erased.
///
/// Segments compare equal when their names and value types match.
#[derive(Clone)]
pub struct ParamSegment {
	inner: Arc<dyn ErasedParser>,
}

impl ParamSegment {
	/// Returns the parameter name.
	pub fn name(&self) -> &str {
		self.inner.name()
	}

	/// Returns the Rust type name of the values this segment serializes.
	pub fn value_type(&self) -> &'static str {
		self.inner.value_type()
	}

	/// Parses a raw segment into a boxed value of the segment's type.
	pub fn parse(&self, raw: &str) -> Outcome<Box<dyn Any + Send>, String> {
		self.inner.parse_any(raw)
	}

	/// Serializes `value`, or returns `None` if it is not of the segment's type.
	pub fn serialize(&self, value: &dyn Any) -> Option<String> {
		self.inner.serialize_any(value)
	}
}

impl<T: Send + 'static> From<NamedParser<T>> for ParamSegment {
	fn from(parser: NamedParser<T>) -> Self {
		Self {
			inner: Arc::new(parser),
		}
	}
}

impl PartialEq for ParamSegment {
	fn eq(&self, other: &Self) -> bool {
		self.name() == other.name() && self.value_type() == other.value_type()
	}
}

impl Eq for ParamSegment {}

impl fmt::Debug for ParamSegment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ParamSegment")
			.field("name", &self.name())
			.field("value_type", &self.value_type())
			.finish()
	}
}

/// Creates a numeric parameter.
///
/// Parsing fails with `Expected {name} to be a number` unless the trimmed
/// input is a finite decimal literal. Surrounding whitespace is accepted, so
/// `" 7 "` parses as `7.0`; the round trip holds for serialized values, not
/// for every accepted input.
pub fn number(name: impl Into<String>) -> NamedParser<f64> {
	let name = name.into();
	let message = format!("Expected {} to be a number", name);

	NamedParser::new(
		name,
		move |raw| match raw.trim().parse::<f64>() {
			Ok(value) if value.is_finite() => success(value),
			_ => failure(message.clone()),
		},
		|value: &f64| value.to_string(),
	)
}

/// Creates a free-text parameter. Parsing never fails.
pub fn string(name: impl Into<String>) -> NamedParser<String> {
	NamedParser::new(name, |raw| success(raw.to_string()), String::clone)
}

/// Creates a parameter constrained by a regular expression.
///
/// The whole segment must match `pattern`; otherwise parsing fails with
/// `Expected {name} to match {pattern}`.
///
/// # Errors
///
/// Returns [`PathError::InvalidPattern`] if `pattern` does not compile.
pub fn regex(name: impl Into<String>, pattern: &str) -> PathResult<NamedParser<String>> {
	let name = name.into();
	let invalid = |error: regex::Error| PathError::InvalidPattern {
		name: name.clone(),
		message: error.to_string(),
	};

	Regex::new(pattern).map_err(invalid)?;
	let anchored = anchor(pattern).map_err(invalid)?;
	let message = format!("Expected {} to match {}", name, pattern);

	Ok(NamedParser::new(
		name,
		move |raw| {
			if anchored.is_match(raw) {
				success(raw.to_string())
			} else {
				failure(message.clone())
			}
		},
		String::clone,
	))
}

/// Compiles `pattern` so that it only matches a whole segment.
///
/// A pattern that ends in verbose mode with a `#` comment would swallow the
/// closing anchor, so the anchor is retried on its own line.
fn anchor(pattern: &str) -> Result<Regex, regex::Error> {
	Regex::new(&format!("^(?:{})$", pattern))
		.or_else(|_| Regex::new(&format!("^(?:{}\n)$", pattern)))
}

/// Creates a parameter for any type that round-trips through
/// [`FromStr`] and [`Display`](fmt::Display), such as integer ids.
///
/// Parsing fails with `Expected {name} to be a {type}`.
pub fn parsed<T>(name: impl Into<String>) -> NamedParser<T>
where
	T: FromStr + fmt::Display + 'static,
{
	let name = name.into();
	let message = format!("Expected {} to be a {}", name, type_name::<T>());

	NamedParser::new(
		name,
		move |raw| match raw.parse::<T>() {
			Ok(value) => success(value),
			Err(_) => failure(message.clone()),
		},
		|value: &T| value.to_string(),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("42", 42.0)]
	#[case("-3.5", -3.5)]
	#[case(" 7 ", 7.0)]
	#[case("1e3", 1000.0)]
	fn test_number_parses(#[case] raw: &str, #[case] expected: f64) {
		assert_eq!(number("id").parse(raw), Outcome::Success(expected));
	}

	#[rstest]
	#[case("abc")]
	#[case("")]
	#[case("NaN")]
	#[case("inf")]
	#[case("12px")]
	fn test_number_rejects(#[case] raw: &str) {
		assert_eq!(
			number("customerId").parse(raw),
			Outcome::Failure("Expected customerId to be a number".to_string())
		);
	}

	#[rstest]
	#[case(42.0, "42")]
	#[case(1.5, "1.5")]
	#[case(-0.25, "-0.25")]
	fn test_number_serializes_canonically(#[case] value: f64, #[case] expected: &str) {
		assert_eq!(number("id").serialize(&value), expected);
	}

	#[rstest]
	fn test_string_is_identity() {
		let parser = string("slug");
		assert_eq!(parser.parse("a b/c"), Outcome::Success("a b/c".to_string()));
		assert_eq!(parser.serialize(&"hello".to_string()), "hello");
	}

	#[rstest]
	#[case("ABC-123", true)]
	#[case("FED-000", true)]
	#[case("FOO123", false)]
	#[case("foo123", false)]
	#[case("xABC-123", false)]
	#[case("ABC-1234", false)]
	fn test_regex_requires_full_match(#[case] raw: &str, #[case] accepted: bool) {
		let parser = regex("orderId", "[A-F]{3}-[0-9]{3}").unwrap();
		let outcome = parser.parse(raw);

		if accepted {
			assert_eq!(outcome, Outcome::Success(raw.to_string()));
		} else {
			assert_eq!(
				outcome,
				Outcome::Failure("Expected orderId to match [A-F]{3}-[0-9]{3}".to_string())
			);
		}
	}

	#[rstest]
	fn test_regex_alternation_is_anchored_as_a_whole() {
		let parser = regex("kind", "a|ab").unwrap();
		assert!(parser.parse("ab").is_success());
		assert!(parser.parse("abc").is_failure());
	}

	#[rstest]
	#[case("a)|(b")]
	#[case("[unclosed")]
	fn test_regex_invalid_pattern(#[case] pattern: &str) {
		let error = regex("slug", pattern).unwrap_err();
		assert!(matches!(error, PathError::InvalidPattern { ref name, .. } if name == "slug"));
	}

	#[rstest]
	fn test_parsed_integer() {
		let parser = parsed::<u32>("page");
		assert_eq!(parser.parse("12"), Outcome::Success(12));
		assert_eq!(
			parser.parse("-1"),
			Outcome::Failure("Expected page to be a u32".to_string())
		);
		assert_eq!(parser.serialize(&7), "7");
	}

	#[rstest]
	fn test_named_parser_custom() {
		let flag = NamedParser::new(
			"flag",
			|raw| match raw {
				"on" => success(true),
				"off" => success(false),
				_ => failure(format!("Expected flag to be on or off, got {}", raw)),
			},
			|value: &bool| (if *value { "on" } else { "off" }).to_string(),
		);

		assert_eq!(flag.name(), "flag");
		assert_eq!(flag.parse(&flag.serialize(&true)), Outcome::Success(true));
		assert!(flag.parse("maybe").is_failure());
	}

	#[rstest]
	fn test_param_segment_erases_type() {
		let segment = ParamSegment::from(number("id"));

		assert_eq!(segment.name(), "id");
		assert_eq!(segment.value_type(), "f64");
		assert_eq!(segment.serialize(&42.0_f64), Some("42".to_string()));
		assert_eq!(segment.serialize(&"42"), None);

		let parsed = segment.parse("42").unwrap();
		assert_eq!(parsed.downcast_ref::<f64>(), Some(&42.0));
	}

	#[rstest]
	fn test_param_segment_accepts_str_for_string() {
		let segment = ParamSegment::from(string("customerId"));

		assert_eq!(segment.serialize(&"abc123"), Some("abc123".to_string()));
		assert_eq!(
			segment.serialize(&"abc123".to_string()),
			Some("abc123".to_string())
		);
		assert_eq!(segment.serialize(&5_i32), None);
	}

	#[rstest]
	fn test_param_segment_equality_by_shape() {
		let a = ParamSegment::from(string("customerId"));
		let b = ParamSegment::from(regex("customerId", "[a-z0-9]+").unwrap());
		let c = ParamSegment::from(number("customerId"));

		assert_eq!(a, b);
		assert_ne!(a, c);
	}
}
