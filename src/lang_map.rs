//! Natural-language map codec.
//!
//! A language map is a side-channel associating BCP47 language tags with
//! alternate string values of a textual property. It is serialized under the
//! property's `<name>Map` key, independently of the property's ordinary
//! value list, and is never compacted to a bare value: the tag key carries
//! meaning.

use indexmap::IndexMap;
use langtag::LangTag;

use crate::Error;

/// Map from BCP47 language tag to alternate string value.
///
/// Tags are compared case-insensitively and keep their original spelling.
/// Entry order is the decode/insertion order; tags form a set of
/// alternatives, not a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageMap(IndexMap<String, String>);

impl LanguageMap {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of tagged alternatives.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Value associated to the given tag, if any.
	pub fn get(&self, tag: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|(t, _)| t.eq_ignore_ascii_case(tag))
			.map(|(_, value)| value.as_str())
	}

	/// Associates a value to a language tag, replacing and returning any
	/// previous value for the same tag (compared case-insensitively).
	pub fn insert(&mut self, tag: &LangTag, value: impl Into<String>) -> Option<String> {
		self.insert_raw(tag.as_str(), value.into())
	}

	fn insert_raw(&mut self, tag: &str, value: String) -> Option<String> {
		match self.0.keys().position(|t| t.eq_ignore_ascii_case(tag)) {
			Some(i) => {
				let (_, old) = self.0.get_index_mut(i)?;
				Some(std::mem::replace(old, value))
			}
			None => {
				self.0.insert(tag.to_owned(), value);
				None
			}
		}
	}

	/// Removes the value associated to the given tag, preserving the order
	/// of the remaining entries.
	pub fn remove(&mut self, tag: &str) -> Option<String> {
		let i = self.0.keys().position(|t| t.eq_ignore_ascii_case(tag))?;
		self.0.shift_remove_index(i).map(|(_, value)| value)
	}

	/// Iterates over the (tag, value) entries.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(t, v)| (t.as_str(), v.as_str()))
	}

	/// Decodes the raw JSON form of the map.
	///
	/// The value must be a JSON object. A non-string value for a single tag
	/// is a per-key failure: the entry is dropped with a warning and the
	/// rest of the map still decodes. Ill-formed tags are kept as-is.
	pub(crate) fn decode(
		property: &'static str,
		value: &json_syntax::Value,
	) -> Result<Self, Error> {
		match value {
			json_syntax::Value::Object(object) => {
				let mut map = Self::new();

				for entry in object.entries() {
					let tag = entry.key.as_str();

					if LangTag::new(tag).is_err() {
						log::warn!("property `{property}`: ill-formed language tag `{tag}`");
					}

					match entry.value.as_str() {
						Some(v) => {
							map.insert_raw(tag, v.to_owned());
						}
						None => log::warn!(
							"property `{property}`: dropping non-string value of language tag `{tag}`"
						),
					}
				}

				Ok(map)
			}
			other => Err(Error::MalformedLanguageMap {
				property,
				found: other.kind(),
			}),
		}
	}

	/// Serializes the map back to its JSON form, or nothing if it is empty.
	pub(crate) fn to_json(&self) -> Option<json_syntax::Value> {
		if self.0.is_empty() {
			return None;
		}

		let mut object = json_syntax::Object::new();

		for (tag, value) in &self.0 {
			object.insert(tag.as_str().into(), value.as_str().into());
		}

		Some(json_syntax::Value::Object(object))
	}
}

impl<'a> IntoIterator for &'a LanguageMap {
	type Item = (&'a str, &'a str);
	type IntoIter = Iter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		Iter(self.0.iter())
	}
}

/// Iterator over the entries of a [`LanguageMap`].
pub struct Iter<'a>(indexmap::map::Iter<'a, String, String>);

impl<'a> Iterator for Iter<'a> {
	type Item = (&'a str, &'a str);

	fn next(&mut self) -> Option<Self::Item> {
		self.0.next().map(|(t, v)| (t.as_str(), v.as_str()))
	}
}
