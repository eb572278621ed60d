//! Type registry and discriminator resolution.
//!
//! The registry maps vocabulary type names to their schemas, split into two
//! capability views: object-like and link-like. A single name may appear in
//! zero, one or both views.
//!
//! Registries are read-mostly: populate once, then share immutably.
//! Concurrent reads are safe; concurrent registration must be externally
//! synchronized.

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::TypeSchema;

/// Capability views a registered type participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
	pub object: bool,
	pub link: bool,
}

impl Capability {
	pub const OBJECT: Self = Self {
		object: true,
		link: false,
	};

	pub const LINK: Self = Self {
		object: false,
		link: true,
	};

	pub const OBJECT_AND_LINK: Self = Self {
		object: true,
		link: true,
	};
}

/// Mapping from vocabulary type name to schema.
#[derive(Debug, Clone, Default)]
pub struct Registry {
	objects: HashMap<&'static str, &'static TypeSchema>,
	links: HashMap<&'static str, &'static TypeSchema>,
}

impl Registry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a type schema under the given capability views.
	pub fn register(&mut self, schema: &'static TypeSchema, capability: Capability) {
		if capability.object && self.objects.insert(schema.name, schema).is_some() {
			log::warn!("object-like type `{}` registered twice", schema.name);
		}

		if capability.link && self.links.insert(schema.name, schema).is_some() {
			log::warn!("link-like type `{}` registered twice", schema.name);
		}
	}

	/// Resolves a type name through the object-like view.
	pub fn resolve_object_type(&self, name: &str) -> Option<&'static TypeSchema> {
		self.objects.get(name).copied()
	}

	/// Resolves a type name through the link-like view.
	pub fn resolve_link_type(&self, name: &str) -> Option<&'static TypeSchema> {
		self.links.get(name).copied()
	}
}

/// Candidate type names of an embedded JSON object, in declaration order.
///
/// A bare `"type"` string is a singleton list; an array contributes its
/// string elements in order. An object without a usable discriminator has no
/// candidates and stays structurally opaque.
pub(crate) fn type_candidates(object: &json_syntax::Object) -> SmallVec<[&str; 2]> {
	let discriminator = object
		.entries()
		.iter()
		.find(|e| e.key.as_str() == "type")
		.map(|e| &e.value);

	match discriminator {
		Some(json_syntax::Value::String(s)) => {
			let mut candidates = SmallVec::new();
			candidates.push(s.as_str());
			candidates
		}
		Some(json_syntax::Value::Array(items)) => {
			items.iter().filter_map(|item| item.as_str()).collect()
		}
		_ => SmallVec::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::vocab;
	use json_syntax::Parse;

	#[test]
	fn capability_views_are_independent() {
		let registry = vocab::registry();

		assert!(registry.resolve_object_type("Note").is_some());
		assert!(registry.resolve_link_type("Note").is_none());

		assert!(registry.resolve_link_type("Mention").is_some());
		assert!(registry.resolve_object_type("Mention").is_none());

		assert!(registry.resolve_object_type("NoSuchType").is_none());
	}

	#[test]
	fn discriminator_normalization() {
		let (value, _) =
			json_syntax::Value::parse_str(r#"{"type": ["Mention", "Note"], "name": "x"}"#)
				.unwrap();
		let object = match value {
			json_syntax::Value::Object(o) => o,
			_ => unreachable!(),
		};

		let candidates = type_candidates(&object);
		assert_eq!(candidates.as_slice(), ["Mention", "Note"]);
	}
}
