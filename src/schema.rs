//! Declarative per-type schemas driving the generic codec.
//!
//! A vocabulary type is entirely described by a [`TypeSchema`]: an ordered
//! list of property declarations, each carrying the kinds it may hold (in
//! disambiguation priority order), its multiplicity and whether it owns a
//! natural-language side map.

/// Value kind a property slot may hold.
///
/// The order in which kinds appear in a [`PropertySchema`] is the order in
/// which they are attempted on decode and checked on encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// JSON boolean.
	Boolean,

	/// IEEE-754 double, from a JSON number.
	Float,

	/// Plain string.
	///
	/// This kind accepts *any* JSON string: any string-shaped kind listed
	/// after it is unreachable.
	String,

	/// Language-taggable string.
	LangString,

	/// `xsd:dateTime` literal.
	DateTime,

	/// `xsd:duration` literal.
	Duration,

	/// MIME type literal.
	MimeType,

	/// Bare IRI reference to another entity.
	Iri,

	/// Embedded object, resolved through the object-like registry view.
	Object,

	/// Embedded link, resolved through the link-like registry view.
	Link,
}

/// Declaration of a single vocabulary property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySchema {
	/// JSON key of the property.
	pub name: &'static str,

	/// Allowed kinds, in disambiguation priority order.
	pub kinds: &'static [Kind],

	/// Functional properties hold at most one value; non-functional
	/// properties hold an ordered list.
	pub functional: bool,

	/// Whether the property owns a `<name>Map` natural-language side map.
	pub language_mappable: bool,

	/// Strict properties reject values matching no allowed kind instead of
	/// preserving them as unknown slots.
	pub strict: bool,
}

impl PropertySchema {
	/// Declares a functional (at most one value) property.
	pub const fn functional(name: &'static str, kinds: &'static [Kind]) -> Self {
		Self {
			name,
			kinds,
			functional: true,
			language_mappable: false,
			strict: false,
		}
	}

	/// Declares a non-functional (ordered list) property.
	pub const fn repeated(name: &'static str, kinds: &'static [Kind]) -> Self {
		Self {
			name,
			kinds,
			functional: false,
			language_mappable: false,
			strict: false,
		}
	}

	/// Attaches a `<name>Map` natural-language side map to the property.
	pub const fn with_language_map(mut self) -> Self {
		self.language_mappable = true;
		self
	}

	/// Makes kind exhaustion a decode error instead of an unknown slot.
	pub const fn strict(mut self) -> Self {
		self.strict = true;
		self
	}

	/// Checks if the property allows the given kind.
	pub fn allows(&self, kind: Kind) -> bool {
		self.kinds.contains(&kind)
	}

	/// JSON key of the property's language map, if it has one.
	pub fn language_map_key(&self) -> Option<String> {
		self.language_mappable.then(|| format!("{}Map", self.name))
	}
}

/// Declaration of a vocabulary type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSchema {
	/// Canonical type name, as it appears in the `type` discriminator.
	pub name: &'static str,

	/// Declared properties, in serialization order.
	pub properties: &'static [PropertySchema],
}

impl TypeSchema {
	pub const fn new(name: &'static str, properties: &'static [PropertySchema]) -> Self {
		Self { name, properties }
	}

	/// Position of the declared property with the given JSON key.
	pub fn property_index(&self, name: &str) -> Option<usize> {
		self.properties.iter().position(|p| p.name == name)
	}

	/// Declared property with the given JSON key.
	pub fn property(&self, name: &str) -> Option<&PropertySchema> {
		self.properties.iter().find(|p| p.name == name)
	}

	/// Position of the language-mappable property owning the given
	/// `<name>Map` JSON key.
	pub fn language_map_index(&self, key: &str) -> Option<usize> {
		let base = key.strip_suffix("Map")?;
		let i = self.property_index(base)?;
		self.properties[i].language_mappable.then_some(i)
	}
}
