//! Extension data preservation.

use indexmap::IndexMap;

/// Raw values of top-level JSON keys the schema does not declare.
///
/// Entries are preserved verbatim across a decode/encode round trip, in
/// decode order. Declared properties never live here: a declared property
/// whose value matched no allowed kind keeps the raw value in its own
/// unknown slot, so an extension entry can never shadow declared data.
///
/// The literal key `@context` is protocol envelope, not vocabulary data,
/// and is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnknownMap(IndexMap<String, json_syntax::Value>);

impl UnknownMap {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn contains(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Raw value stored under the given key, if any.
	pub fn get(&self, key: &str) -> Option<&json_syntax::Value> {
		self.0.get(key)
	}

	/// Stores a raw value, returning the previous value for the key.
	///
	/// `@context` entries are ignored.
	pub fn insert(
		&mut self,
		key: impl Into<String>,
		value: json_syntax::Value,
	) -> Option<json_syntax::Value> {
		let key = key.into();

		if key == "@context" {
			log::debug!("ignoring `@context` extension entry");
			return None;
		}

		self.0.insert(key, value)
	}

	/// Removes the value stored under the given key, preserving the order
	/// of the remaining entries.
	pub fn remove(&mut self, key: &str) -> Option<json_syntax::Value> {
		self.0.shift_remove(key)
	}

	/// Iterates over the stored keys.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// Iterates over the (key, raw value) entries.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &json_syntax::Value)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}
}
