use activity_vocab::{vocab, Entity, Error, Kind, LangString, Primitive, PropertySchema, Slot, TypeSchema};
use json_syntax::{BorrowUnordered, Parse};
use langtag::LangTag;
use static_iref::iri;

fn parse(s: &str) -> json_syntax::Value {
	let (value, _) = json_syntax::Value::parse_str(s).unwrap();
	value
}

fn decode(schema: &'static TypeSchema, s: &str) -> Entity {
	Entity::from_json(schema, &parse(s), vocab::registry()).unwrap()
}

#[test]
fn round_trip() {
	let mut person = Entity::new(&vocab::PERSON);
	person
		.append("type", Primitive::String("Person".into()).into())
		.unwrap();
	person
		.set("id", Slot::Iri(iri!("https://example.com/sam").to_owned()))
		.unwrap();
	person
		.append("name", Primitive::String("Sam".into()).into())
		.unwrap();

	let mut note = Entity::new(&vocab::NOTE);
	note.append("type", Primitive::String("Note".into()).into())
		.unwrap();
	note.set("id", Slot::Iri(iri!("https://example.com/note/1").to_owned()))
		.unwrap();
	note.append("name", Primitive::String("A Note".into()).into())
		.unwrap();
	note.set(
		"published",
		Primitive::DateTime("2024-01-01T10:00:00Z".parse().unwrap()).into(),
	)
	.unwrap();
	note.set(
		"duration",
		Primitive::Duration("PT2H".parse().unwrap()).into(),
	)
	.unwrap();
	note.set(
		"mediaType",
		Primitive::MimeType("text/html".parse().unwrap()).into(),
	)
	.unwrap();
	note.append("to", Slot::Object(Box::new(person))).unwrap();
	note.append("cc", Slot::Iri(iri!("https://example.com/kim").to_owned()))
		.unwrap();

	let encoded = note.to_json();
	let decoded = Entity::from_json(&vocab::NOTE, &encoded, vocab::registry()).unwrap();

	assert_eq!(decoded, note);
}

#[test]
fn compaction_inverse() {
	let bare = decode(&vocab::NOTE, r#"{"type": "Note", "to": "https://example.com/sam"}"#);
	let singleton = decode(
		&vocab::NOTE,
		r#"{"type": "Note", "to": ["https://example.com/sam"]}"#,
	);

	assert_eq!(bare, singleton);
	assert_eq!(bare.property("to").unwrap().len(), 1);

	// A one-element list re-encodes as the bare value.
	let expected = parse(r#"{"type": "Note", "to": "https://example.com/sam"}"#);
	assert_eq!(
		singleton.to_json().as_unordered(),
		expected.as_unordered()
	);
}

#[test]
fn priority_order_is_deterministic() {
	// `name` declares the plain string kind before the language-tagged
	// kind; both accept any JSON string, so the first always wins.
	let note = decode(&vocab::NOTE, r#"{"type": "Note", "name": "A Note"}"#);
	let slot = note.property("name").unwrap().first().unwrap();

	assert!(matches!(
		slot,
		Slot::Primitive(Primitive::String(s)) if s.as_str() == "A Note"
	));
}

#[test]
fn unknown_keys_are_preserved() {
	let note = decode(&vocab::NOTE, r#"{"type": "Note", "x": 42}"#);
	assert_eq!(note.unknown().get("x"), Some(&parse("42")));

	let expected = parse(r#"{"type": "Note", "x": 42}"#);
	assert_eq!(note.to_json().as_unordered(), expected.as_unordered());
}

#[test]
fn context_is_envelope_not_data() {
	let note = decode(
		&vocab::NOTE,
		r#"{"@context": "https://www.w3.org/ns/activitystreams", "type": "Note"}"#,
	);

	assert!(note.unknown().is_empty());

	let expected = parse(r#"{"type": "Note"}"#);
	assert_eq!(note.to_json().as_unordered(), expected.as_unordered());
}

#[test]
fn type_injection_is_idempotent() {
	let tombstone = decode(&vocab::TOMBSTONE, r#"{"type": ["Tombstone"]}"#);
	let expected = parse(r#"{"type": "Tombstone"}"#);
	assert_eq!(tombstone.to_json().as_unordered(), expected.as_unordered());

	// With `type` unset, the canonical name is injected.
	let empty = Entity::new(&vocab::TOMBSTONE);
	assert_eq!(empty.to_json().as_unordered(), expected.as_unordered());

	// Other declared type values are kept, in order.
	let both = decode(&vocab::TOMBSTONE, r#"{"type": ["Tombstone", "Memorial"]}"#);
	let expected = parse(r#"{"type": ["Tombstone", "Memorial"]}"#);
	assert_eq!(both.to_json().as_unordered(), expected.as_unordered());
}

#[test]
fn non_object_input_is_rejected() {
	let err = Entity::from_json(&vocab::NOTE, &parse("[]"), vocab::registry()).unwrap_err();
	assert_eq!(err, Error::Unexpected(json_syntax::Kind::Array));

	let err = Entity::from_json(&vocab::NOTE, &parse(r#""Note""#), vocab::registry()).unwrap_err();
	assert_eq!(err, Error::Unexpected(json_syntax::Kind::String));
}

#[test]
fn undeclared_type_discriminator_is_preserved() {
	// A schema that does not declare `type` keeps the decoded discriminator
	// in its extension data; the canonical name joins it on encode.
	const GADGET: TypeSchema = TypeSchema::new(
		"Gadget",
		&[PropertySchema::repeated("name", &[Kind::String])],
	);

	let gadget = decode(&GADGET, r#"{"type": "Widget", "x": 1}"#);
	assert_eq!(gadget.unknown().get("type"), Some(&parse(r#""Widget""#)));

	let expected = parse(r#"{"type": ["Widget", "Gadget"], "x": 1}"#);
	assert_eq!(gadget.to_json().as_unordered(), expected.as_unordered());

	// Already carrying the canonical name: nothing to inject.
	let named = decode(&GADGET, r#"{"type": "Gadget"}"#);
	let expected = parse(r#"{"type": "Gadget"}"#);
	assert_eq!(named.to_json().as_unordered(), expected.as_unordered());

	// No decoded discriminator at all: the canonical name alone.
	let empty = Entity::new(&GADGET);
	assert_eq!(empty.to_json().as_unordered(), expected.as_unordered());
}

#[test]
fn language_map_is_independent() {
	let mut note = Entity::new(&vocab::NOTE);
	note.language_map_mut("name")
		.unwrap()
		.insert(LangTag::new("en").unwrap(), "Hello");

	// The ordinary value list stays empty.
	assert!(note.property("name").unwrap().is_empty());

	let expected = parse(r#"{"type": "Note", "nameMap": {"en": "Hello"}}"#);
	assert_eq!(note.to_json().as_unordered(), expected.as_unordered());

	let decoded = decode(&vocab::NOTE, r#"{"type": "Note", "nameMap": {"en": "Hello"}}"#);
	assert!(decoded.property("name").unwrap().is_empty());
	assert_eq!(decoded.language_map("name").unwrap().get("en"), Some("Hello"));

	// And the other way around: a plain value never forces a map out.
	let plain = decode(&vocab::NOTE, r#"{"type": "Note", "name": "Hello"}"#);
	assert!(plain.language_map("name").unwrap().is_empty());
	let expected = parse(r#"{"type": "Note", "name": "Hello"}"#);
	assert_eq!(plain.to_json().as_unordered(), expected.as_unordered());
}

#[test]
fn example_scenario() {
	let input = r#"{
		"type": "Note",
		"name": "A Note",
		"to": {"type": "Person", "id": "https://example.com/sam"}
	}"#;

	let note = decode(&vocab::NOTE, input);

	let name = note.property("name").unwrap();
	assert_eq!(name.len(), 1);
	assert!(matches!(
		name.first().unwrap(),
		Slot::Primitive(Primitive::String(_))
	));

	let to = note.property("to").unwrap();
	assert_eq!(to.len(), 1);
	let person = to.first().unwrap().as_object().unwrap();
	assert_eq!(person.type_name(), "Person");
	assert_eq!(
		person.property("id").unwrap().first().unwrap().as_iri(),
		Some(iri!("https://example.com/sam"))
	);

	assert_eq!(note.to_json().as_unordered(), parse(input).as_unordered());
}

#[test]
fn embedded_object_without_discriminator_is_opaque() {
	let note = decode(&vocab::NOTE, r#"{"type": "Note", "to": {"foo": 1}}"#);
	let slot = note.property("to").unwrap().first().unwrap();
	assert_eq!(slot, &Slot::Unknown(parse(r#"{"foo": 1}"#)));

	let expected = parse(r#"{"type": "Note", "to": {"foo": 1}}"#);
	assert_eq!(note.to_json().as_unordered(), expected.as_unordered());
}

#[test]
fn unresolvable_discriminator_is_opaque() {
	let note = decode(
		&vocab::NOTE,
		r#"{"type": "Note", "to": {"type": "NoSuchType", "id": "https://example.com/x"}}"#,
	);
	assert!(note.property("to").unwrap().first().unwrap().is_unknown());
}

#[test]
fn link_kind_resolves_through_link_view() {
	let note = decode(
		&vocab::NOTE,
		r#"{"type": "Note", "tag": {"type": "Mention", "href": "https://example.com/sam"}}"#,
	);

	let slot = note.property("tag").unwrap().first().unwrap();
	let mention = slot.as_link().unwrap();
	assert_eq!(mention.type_name(), "Mention");
	assert_eq!(
		mention.property("href").unwrap().first().unwrap().as_iri(),
		Some(iri!("https://example.com/sam"))
	);
}

#[test]
fn scalar_kind_exhaustion_is_preserved() {
	// `published` only allows xsd:dateTime; the raw scalar is kept.
	let note = decode(&vocab::NOTE, r#"{"type": "Note", "published": "yesterday"}"#);
	let slot = note.property("published").unwrap().first().unwrap();
	assert_eq!(slot, &Slot::Unknown(parse(r#""yesterday""#)));

	let expected = parse(r#"{"type": "Note", "published": "yesterday"}"#);
	assert_eq!(note.to_json().as_unordered(), expected.as_unordered());
}

#[test]
fn strict_property_rejects_kind_exhaustion() {
	let err = Entity::from_json(
		&vocab::NOTE,
		&parse(r#"{"type": "Note", "id": "not an iri"}"#),
		vocab::registry(),
	)
	.unwrap_err();

	assert!(matches!(err, Error::Decode { property: "id", .. }));
}

#[test]
fn functional_property_rejects_array() {
	let err = Entity::from_json(
		&vocab::NOTE,
		&parse(r#"{"type": "Note", "published": ["2024-01-01T10:00:00Z"]}"#),
		vocab::registry(),
	)
	.unwrap_err();

	assert_eq!(err, Error::FunctionalArray("published"));
}

#[test]
fn mutations_preserve_order() {
	let mut note = decode(&vocab::NOTE, r#"{"type": "Note", "to": ["a:1", "a:2"]}"#);

	note.append("to", Slot::Iri(iri!("a:3").to_owned())).unwrap();
	note.prepend("to", Slot::Iri(iri!("a:0").to_owned())).unwrap();

	let order: Vec<_> = note
		.property("to")
		.unwrap()
		.iter()
		.filter_map(Slot::as_str)
		.collect();
	assert_eq!(order, ["a:0", "a:1", "a:2", "a:3"]);

	let removed = note.remove_at("to", 2).unwrap();
	assert_eq!(removed.as_str(), Some("a:2"));

	let order: Vec<_> = note
		.property("to")
		.unwrap()
		.iter()
		.filter_map(Slot::as_str)
		.collect();
	assert_eq!(order, ["a:0", "a:1", "a:3"]);

	let err = note.remove_at("to", 3).unwrap_err();
	assert!(matches!(
		err,
		Error::IndexOutOfRange {
			property: "to",
			index: 3,
			len: 3
		}
	));
}

#[test]
fn mutation_boundaries() {
	let mut note = Entity::new(&vocab::NOTE);

	let err = note
		.append("published", Primitive::Boolean(true).into())
		.unwrap_err();
	assert_eq!(err, Error::FunctionalProperty("published"));

	let err = note
		.append("missing", Primitive::Boolean(true).into())
		.unwrap_err();
	assert_eq!(err, Error::UndeclaredProperty("missing".to_owned()));
}

#[test]
fn declared_properties_shadow_stale_extension_entries() {
	let mut note = decode(&vocab::NOTE, r#"{"type": "Note", "name": "Fresh"}"#);
	note.unknown_mut()
		.insert("name", parse(r#""Stale""#));

	let expected = parse(r#"{"type": "Note", "name": "Fresh"}"#);
	assert_eq!(note.to_json().as_unordered(), expected.as_unordered());
}

#[test]
fn deserialize_is_idempotent() {
	let raw = parse(r#"{"type": "Note", "name": "A Note", "x": 42}"#);
	let object = match raw {
		json_syntax::Value::Object(ref o) => o,
		_ => unreachable!(),
	};

	let mut note = Entity::new(&vocab::NOTE);
	note.deserialize(object, vocab::registry()).unwrap();
	let first = note.clone();
	note.deserialize(object, vocab::registry()).unwrap();

	assert_eq!(note, first);
}

#[test]
fn question_closed_kinds() {
	let question = decode(
		&vocab::QUESTION,
		r#"{"type": "Question", "closed": [true, "2024-01-01T10:00:00Z"]}"#,
	);

	let closed = question.property("closed").unwrap();
	assert_eq!(
		closed.get(0).and_then(Slot::as_primitive).and_then(Primitive::as_bool),
		Some(true)
	);
	assert!(matches!(
		closed.get(1).unwrap(),
		Slot::Primitive(Primitive::DateTime(_))
	));
}

#[test]
fn functional_language_map() {
	let person = decode(
		&vocab::PERSON,
		r#"{"type": "Person", "preferredUsername": "sam", "preferredUsernameMap": {"fr": "Samuel"}}"#,
	);

	assert_eq!(
		person
			.property("preferredUsername")
			.unwrap()
			.first()
			.and_then(Slot::as_str),
		Some("sam")
	);
	assert_eq!(
		person.language_map("preferredUsername").unwrap().get("fr"),
		Some("Samuel")
	);

	let expected = parse(
		r#"{"type": "Person", "preferredUsername": "sam", "preferredUsernameMap": {"fr": "Samuel"}}"#,
	);
	assert_eq!(person.to_json().as_unordered(), expected.as_unordered());
}

#[test]
fn tagged_string_survives_through_the_map_only() {
	// The plain string kind shadows the language-tagged kind, so a tag set
	// programmatically does not survive the bare JSON form.
	let mut note = Entity::new(&vocab::NOTE);
	let tag = LangTag::new("en").unwrap();
	note.append(
		"name",
		Primitive::LangString(LangString::new("Hello", Some(tag.to_owned()))).into(),
	)
	.unwrap();

	let encoded = note.to_json();
	let decoded = Entity::from_json(&vocab::NOTE, &encoded, vocab::registry()).unwrap();
	let slot = decoded.property("name").unwrap().first().unwrap();

	assert!(matches!(slot, Slot::Primitive(Primitive::String(_))));
}
