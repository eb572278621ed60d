//! Runtime codec for an ActivityStreams-flavored JSON-LD vocabulary.
//!
//! Most properties of the vocabulary are polymorphic: a single named slot
//! may hold a literal, an embedded object of one of several vocabulary
//! types, a bare IRI reference, or an opaque unrecognized value kept for
//! forward compatibility. This crate implements the generic discipline every
//! such property obeys:
//!
//! - multi-kind disambiguation on decode, in declared priority order;
//! - priority-ordered kind selection on encode;
//! - functional vs. repeated multiplicity with the JSON compaction rule
//!   (a one-element list serializes as a bare value);
//! - natural-language maps attached to textual properties;
//! - lossless preservation of data the schema does not understand;
//! - a registry resolving the `"type"` discriminator of embedded objects.
//!
//! Vocabulary types are small declarative [`TypeSchema`] values consumed by
//! the generic engine; [`vocab`] declares a built-in set.
//!
//! # Example
//!
//! ```
//! use activity_vocab::{vocab, Entity, Slot};
//! use json_syntax::{Parse, Value};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (json, _) = Value::parse_str(
//! 	r#"{
//! 		"type": "Note",
//! 		"name": "A Note",
//! 		"to": {"type": "Person", "id": "https://example.com/sam"}
//! 	}"#,
//! )?;
//!
//! let note = Entity::from_json(&vocab::NOTE, &json, vocab::registry())?;
//!
//! let name = note.property("name").unwrap();
//! assert_eq!(name.first().and_then(Slot::as_str), Some("A Note"));
//!
//! let to = note.property("to").unwrap();
//! let person = to.first().and_then(Slot::as_object).unwrap();
//! assert_eq!(person.type_name(), "Person");
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod lang_map;
pub mod lang_string;
pub mod primitive;
pub mod property;
pub mod registry;
pub mod schema;
pub mod slot;
pub mod unknown;
pub mod vocab;

pub use entity::Entity;
pub use error::Error;
pub use lang_map::LanguageMap;
pub use lang_string::LangString;
pub use primitive::Primitive;
pub use property::Property;
pub use registry::{Capability, Registry};
pub use schema::{Kind, PropertySchema, TypeSchema};
pub use slot::Slot;
pub use unknown::UnknownMap;
