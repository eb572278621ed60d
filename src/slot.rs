//! Property slot codec.
//!
//! A slot holds exactly one populated alternative of a polymorphic property
//! value. Decoding tries the property's declared kinds in priority order and
//! falls back to an opaque unknown slot when every kind is exhausted, so
//! forward-compatible data is preserved instead of rejected.

use iref::{Iri, IriBuf};

use crate::{
	registry::{type_candidates, Registry},
	Entity, Kind, Primitive,
};

/// A single decoded property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
	/// Literal value.
	Primitive(Primitive),

	/// Embedded object, resolved through the object-like registry view.
	Object(Box<Entity>),

	/// Embedded link, resolved through the link-like registry view.
	Link(Box<Entity>),

	/// Bare reference to another entity.
	Iri(IriBuf),

	/// Raw value none of the allowed kinds could interpret, preserved for
	/// round-trip fidelity.
	Unknown(json_syntax::Value),
}

impl Slot {
	/// Decodes a raw element value against an ordered kind list.
	///
	/// JSON objects are resolved through the registry using their `"type"`
	/// discriminator: the declared kind order is the outer loop and the
	/// discriminator candidates the inner one, so a property listing
	/// object-like kinds before link-like kinds (or vice versa) keeps that
	/// priority. The first candidate that both resolves and successfully
	/// decodes wins. Anything else is preserved as [`Slot::Unknown`].
	pub fn decode(kinds: &[Kind], value: &json_syntax::Value, registry: &Registry) -> Self {
		match value {
			json_syntax::Value::Object(object) => {
				let candidates = type_candidates(object);

				if candidates.is_empty() {
					// No usable discriminator: the schema cannot tell what
					// this is, but the bytes are kept.
					return Self::Unknown(value.clone());
				}

				for kind in kinds {
					match kind {
						Kind::Object => {
							for name in &candidates {
								if let Some(schema) = registry.resolve_object_type(name) {
									if let Ok(entity) =
										Entity::from_json_object(schema, object, registry)
									{
										return Self::Object(Box::new(entity));
									}
								}
							}
						}
						Kind::Link => {
							for name in &candidates {
								if let Some(schema) = registry.resolve_link_type(name) {
									if let Ok(entity) =
										Entity::from_json_object(schema, object, registry)
									{
										return Self::Link(Box::new(entity));
									}
								}
							}
						}
						_ => (),
					}
				}

				Self::Unknown(value.clone())
			}
			scalar => {
				for kind in kinds {
					match kind {
						Kind::Iri => {
							if let Some(s) = scalar.as_str() {
								if let Ok(iri) = Iri::new(s) {
									return Self::Iri(iri.to_owned());
								}
							}
						}
						Kind::Object | Kind::Link => (),
						kind => {
							if let Ok(primitive) = Primitive::parse(*kind, scalar) {
								return Self::Primitive(primitive);
							}
						}
					}
				}

				Self::Unknown(scalar.clone())
			}
		}
	}

	/// Serializes the populated alternative back to its JSON form.
	///
	/// Unknown slots re-emit the stored raw value unchanged.
	pub fn to_json(&self) -> json_syntax::Value {
		match self {
			Self::Primitive(p) => p.to_json(),
			Self::Object(e) | Self::Link(e) => json_syntax::Value::Object(e.to_json_object()),
			Self::Iri(iri) => iri.as_str().into(),
			Self::Unknown(value) => value.clone(),
		}
	}

	pub fn is_unknown(&self) -> bool {
		matches!(self, Self::Unknown(_))
	}

	/// Returns this slot as a literal, if it is one.
	pub fn as_primitive(&self) -> Option<&Primitive> {
		match self {
			Self::Primitive(p) => Some(p),
			_ => None,
		}
	}

	/// Returns this slot as an embedded object, if it is one.
	pub fn as_object(&self) -> Option<&Entity> {
		match self {
			Self::Object(e) => Some(e),
			_ => None,
		}
	}

	/// Returns this slot as an embedded link, if it is one.
	pub fn as_link(&self) -> Option<&Entity> {
		match self {
			Self::Link(e) => Some(e),
			_ => None,
		}
	}

	/// Returns this slot as a bare reference, if it is one.
	pub fn as_iri(&self) -> Option<&Iri> {
		match self {
			Self::Iri(iri) => Some(iri),
			_ => None,
		}
	}

	/// Returns this slot as a string if the populated alternative is
	/// string-shaped.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Primitive(p) => p.as_str(),
			Self::Iri(iri) => Some(iri.as_str()),
			_ => None,
		}
	}
}

impl From<Primitive> for Slot {
	fn from(p: Primitive) -> Self {
		Self::Primitive(p)
	}
}

impl From<IriBuf> for Slot {
	fn from(iri: IriBuf) -> Self {
		Self::Iri(iri)
	}
}
