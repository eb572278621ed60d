//! Built-in vocabulary declarations.
//!
//! Each vocabulary type is a declarative [`TypeSchema`]: the property names,
//! allowed kind lists (in disambiguation priority order), multiplicity and
//! language-mappability the generic codec consumes. Kind orderings follow
//! the upstream vocabulary definitions verbatim.

use once_cell::sync::Lazy;

use crate::{Capability, Kind, PropertySchema, Registry, TypeSchema};

const ID: PropertySchema = PropertySchema::functional("id", &[Kind::Iri]).strict();
const TYPE: PropertySchema = PropertySchema::repeated("type", &[Kind::String]);

// TODO: the plain string kind shadows the language-tagged kind on these
// three, so a tagged value only survives through the *Map form. This mirrors
// the upstream kind ordering; revisit if upstream reorders it.
const NAME: PropertySchema =
	PropertySchema::repeated("name", &[Kind::String, Kind::LangString]).with_language_map();
const SUMMARY: PropertySchema =
	PropertySchema::repeated("summary", &[Kind::String, Kind::LangString]).with_language_map();
const CONTENT: PropertySchema =
	PropertySchema::repeated("content", &[Kind::String, Kind::LangString]).with_language_map();

const PUBLISHED: PropertySchema = PropertySchema::functional("published", &[Kind::DateTime]);
const UPDATED: PropertySchema = PropertySchema::functional("updated", &[Kind::DateTime]);
const START_TIME: PropertySchema = PropertySchema::functional("startTime", &[Kind::DateTime]);
const END_TIME: PropertySchema = PropertySchema::functional("endTime", &[Kind::DateTime]);
const DURATION: PropertySchema = PropertySchema::functional("duration", &[Kind::Duration]);
const MEDIA_TYPE: PropertySchema = PropertySchema::functional("mediaType", &[Kind::MimeType]);

const URL: PropertySchema = PropertySchema::repeated("url", &[Kind::Iri, Kind::Link]);
const ICON: PropertySchema = PropertySchema::repeated("icon", &[Kind::Object, Kind::Link, Kind::Iri]);
const IMAGE: PropertySchema =
	PropertySchema::repeated("image", &[Kind::Object, Kind::Link, Kind::Iri]);
const ATTACHMENT: PropertySchema =
	PropertySchema::repeated("attachment", &[Kind::Object, Kind::Link, Kind::Iri]);
const ATTRIBUTED_TO: PropertySchema =
	PropertySchema::repeated("attributedTo", &[Kind::Object, Kind::Link, Kind::Iri]);
const IN_REPLY_TO: PropertySchema =
	PropertySchema::repeated("inReplyTo", &[Kind::Object, Kind::Link, Kind::Iri]);
const TAG: PropertySchema = PropertySchema::repeated("tag", &[Kind::Object, Kind::Link, Kind::Iri]);
const AUDIENCE: PropertySchema =
	PropertySchema::repeated("audience", &[Kind::Object, Kind::Link, Kind::Iri]);
const TO: PropertySchema = PropertySchema::repeated("to", &[Kind::Object, Kind::Link, Kind::Iri]);
const BTO: PropertySchema = PropertySchema::repeated("bto", &[Kind::Object, Kind::Link, Kind::Iri]);
const CC: PropertySchema = PropertySchema::repeated("cc", &[Kind::Object, Kind::Link, Kind::Iri]);
const BCC: PropertySchema = PropertySchema::repeated("bcc", &[Kind::Object, Kind::Link, Kind::Iri]);
const PREVIEW: PropertySchema =
	PropertySchema::repeated("preview", &[Kind::Object, Kind::Link, Kind::Iri]);

// Activity participants.
const ACTOR: PropertySchema =
	PropertySchema::repeated("actor", &[Kind::Object, Kind::Link, Kind::Iri]);
const OBJECT: PropertySchema =
	PropertySchema::repeated("object", &[Kind::Object, Kind::Link, Kind::Iri]);
const TARGET: PropertySchema =
	PropertySchema::repeated("target", &[Kind::Object, Kind::Link, Kind::Iri]);
const RESULT: PropertySchema =
	PropertySchema::repeated("result", &[Kind::Object, Kind::Link, Kind::Iri]);
const ORIGIN: PropertySchema =
	PropertySchema::repeated("origin", &[Kind::Object, Kind::Link, Kind::Iri]);
const INSTRUMENT: PropertySchema =
	PropertySchema::repeated("instrument", &[Kind::Object, Kind::Link, Kind::Iri]);

// Collections.
const TOTAL_ITEMS: PropertySchema = PropertySchema::functional("totalItems", &[Kind::Float]);
const CURRENT: PropertySchema =
	PropertySchema::functional("current", &[Kind::Object, Kind::Link, Kind::Iri]);
const FIRST: PropertySchema =
	PropertySchema::functional("first", &[Kind::Object, Kind::Link, Kind::Iri]);
const LAST: PropertySchema =
	PropertySchema::functional("last", &[Kind::Object, Kind::Link, Kind::Iri]);
const ITEMS: PropertySchema =
	PropertySchema::repeated("items", &[Kind::Object, Kind::Link, Kind::Iri]);

// Links.
const HREF: PropertySchema = PropertySchema::functional("href", &[Kind::Iri]);
const REL: PropertySchema = PropertySchema::repeated("rel", &[Kind::String]);
const HREFLANG: PropertySchema = PropertySchema::functional("hreflang", &[Kind::String]);
const HEIGHT: PropertySchema = PropertySchema::functional("height", &[Kind::Float]);
const WIDTH: PropertySchema = PropertySchema::functional("width", &[Kind::Float]);

// Type-specific properties.
const FORMER_TYPE: PropertySchema =
	PropertySchema::repeated("formerType", &[Kind::String, Kind::Object]);
const DELETED: PropertySchema = PropertySchema::functional("deleted", &[Kind::DateTime]);
const PREFERRED_USERNAME: PropertySchema =
	PropertySchema::functional("preferredUsername", &[Kind::String, Kind::LangString])
		.with_language_map();
const DESCRIBES: PropertySchema =
	PropertySchema::functional("describes", &[Kind::Object, Kind::Iri]);
const ONE_OF: PropertySchema =
	PropertySchema::repeated("oneOf", &[Kind::Object, Kind::Link, Kind::Iri]);
const ANY_OF: PropertySchema =
	PropertySchema::repeated("anyOf", &[Kind::Object, Kind::Link, Kind::Iri]);
const CLOSED: PropertySchema =
	PropertySchema::repeated("closed", &[Kind::Object, Kind::Link, Kind::DateTime, Kind::Boolean]);

const OBJECT_PROPS: &[PropertySchema] = &[
	ID, TYPE, NAME, SUMMARY, CONTENT, ATTACHMENT, ATTRIBUTED_TO, AUDIENCE, ICON, IMAGE,
	IN_REPLY_TO, TAG, TO, BTO, CC, BCC, PUBLISHED, UPDATED, START_TIME, END_TIME, DURATION,
	MEDIA_TYPE, URL, PREVIEW,
];

const LINK_PROPS: &[PropertySchema] = &[
	ID, TYPE, HREF, REL, MEDIA_TYPE, NAME, HREFLANG, HEIGHT, WIDTH, PREVIEW,
];

pub const OBJECT_TYPE: TypeSchema = TypeSchema::new("Object", OBJECT_PROPS);
pub const NOTE: TypeSchema = TypeSchema::new("Note", OBJECT_PROPS);
pub const ARTICLE: TypeSchema = TypeSchema::new("Article", OBJECT_PROPS);
pub const IMAGE_TYPE: TypeSchema = TypeSchema::new("Image", OBJECT_PROPS);

pub const PERSON: TypeSchema = TypeSchema::new(
	"Person",
	&[
		ID, TYPE, NAME, SUMMARY, CONTENT, PREFERRED_USERNAME, ATTACHMENT, ICON, IMAGE, TAG,
		PUBLISHED, UPDATED, URL,
	],
);

pub const TOMBSTONE: TypeSchema = TypeSchema::new(
	"Tombstone",
	&[
		ID, TYPE, NAME, SUMMARY, CONTENT, FORMER_TYPE, DELETED, PUBLISHED, UPDATED, URL,
	],
);

pub const PROFILE: TypeSchema = TypeSchema::new(
	"Profile",
	&[
		ID, TYPE, NAME, SUMMARY, CONTENT, DESCRIBES, ATTACHMENT, PUBLISHED, UPDATED, URL,
	],
);

pub const QUESTION: TypeSchema = TypeSchema::new(
	"Question",
	&[
		ID, TYPE, NAME, SUMMARY, CONTENT, ONE_OF, ANY_OF, CLOSED, ATTRIBUTED_TO, TO, CC,
		PUBLISHED, UPDATED, URL,
	],
);

pub const ACTIVITY: TypeSchema = TypeSchema::new(
	"Activity",
	&[
		ID, TYPE, NAME, SUMMARY, CONTENT, ACTOR, OBJECT, TARGET, RESULT, ORIGIN, INSTRUMENT,
		ATTRIBUTED_TO, AUDIENCE, TO, BTO, CC, BCC, PUBLISHED, UPDATED, URL,
	],
);

pub const COLLECTION: TypeSchema = TypeSchema::new(
	"Collection",
	&[
		ID, TYPE, NAME, SUMMARY, CONTENT, TOTAL_ITEMS, CURRENT, FIRST, LAST, ITEMS,
		ATTRIBUTED_TO, TO, CC, PUBLISHED, UPDATED, URL,
	],
);

pub const LINK: TypeSchema = TypeSchema::new("Link", LINK_PROPS);
pub const MENTION: TypeSchema = TypeSchema::new("Mention", LINK_PROPS);

/// Registry of the built-in vocabulary.
///
/// Built on first use and immutable afterwards; concurrent reads are safe.
/// Callers extending the vocabulary build their own [`Registry`] instead.
pub fn registry() -> &'static Registry {
	static REGISTRY: Lazy<Registry> = Lazy::new(|| {
		let mut registry = Registry::new();

		registry.register(&OBJECT_TYPE, Capability::OBJECT);
		registry.register(&NOTE, Capability::OBJECT);
		registry.register(&ARTICLE, Capability::OBJECT);
		registry.register(&IMAGE_TYPE, Capability::OBJECT);
		registry.register(&PERSON, Capability::OBJECT);
		registry.register(&TOMBSTONE, Capability::OBJECT);
		registry.register(&PROFILE, Capability::OBJECT);
		registry.register(&QUESTION, Capability::OBJECT);
		registry.register(&ACTIVITY, Capability::OBJECT);
		registry.register(&COLLECTION, Capability::OBJECT);

		registry.register(&LINK, Capability::LINK);
		registry.register(&MENTION, Capability::LINK);

		registry
	});

	&REGISTRY
}
