/// Codec error.
///
/// Only raised for *declared* vocabulary data: keys the schema does not
/// declare never fail, they are preserved in the entity's [`UnknownMap`]
/// instead.
///
/// [`UnknownMap`]: crate::UnknownMap
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	/// The input value of a whole-entity decode is not a JSON object.
	#[error("expected a JSON object, found {0:?}")]
	Unexpected(json_syntax::Kind),

	/// Every allowed kind of a strict property was exhausted.
	///
	/// Most properties tolerate falling back to an unknown slot; this is
	/// only raised for properties the schema marks strict, such as `id`.
	#[error("value of property `{property}` matches none of its allowed kinds")]
	Decode {
		property: &'static str,
		value: json_syntax::Value,
	},

	/// A functional (at most one value) property was given a JSON array.
	#[error("functional property `{0}` cannot hold an array")]
	FunctionalArray(&'static str),

	/// Indexed access or removal past the end of a repeated property.
	///
	/// The property's value list is left untouched.
	#[error("no value at index {index} of property `{property}` (length {len})")]
	IndexOutOfRange {
		property: &'static str,
		index: usize,
		len: usize,
	},

	/// A language map value is not a JSON object.
	#[error("malformed language map for property `{property}`, found {found:?}")]
	MalformedLanguageMap {
		property: &'static str,
		found: json_syntax::Kind,
	},

	/// A list mutation was applied to a functional property.
	#[error("property `{0}` is functional and holds at most one value")]
	FunctionalProperty(&'static str),

	/// A named property is not declared by the entity's schema.
	#[error("property `{0}` is not declared by the schema")]
	UndeclaredProperty(String),
}
