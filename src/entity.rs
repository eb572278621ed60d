//! Whole-entity decode/encode protocol.

use crate::{
	Error, LanguageMap, Property, Registry, Slot, TypeSchema, UnknownMap,
};

/// A vocabulary entity: one value of a declared vocabulary type.
///
/// An entity is driven entirely by its schema: it holds one [`Property`] per
/// declared property (in schema order), one [`LanguageMap`] per
/// language-mappable property, and an [`UnknownMap`] preserving extension
/// data. It is created empty and mutated through the property codecs or the
/// convenience operations below.
///
/// Distinct entities are independent and may be decoded or encoded in
/// parallel; a single entity must not be mutated concurrently.
#[derive(Debug, Clone)]
pub struct Entity {
	schema: &'static TypeSchema,
	properties: Vec<Property>,
	language_maps: Vec<LanguageMap>,
	unknown: UnknownMap,
}

impl Entity {
	/// Creates the empty entity of the given vocabulary type.
	pub fn new(schema: &'static TypeSchema) -> Self {
		Self {
			schema,
			properties: schema.properties.iter().map(Property::empty).collect(),
			language_maps: schema
				.properties
				.iter()
				.map(|_| LanguageMap::new())
				.collect(),
			unknown: UnknownMap::new(),
		}
	}

	/// Schema of the entity's vocabulary type.
	pub fn schema(&self) -> &'static TypeSchema {
		self.schema
	}

	/// Canonical type name of the entity.
	pub fn type_name(&self) -> &'static str {
		self.schema.name
	}

	/// Decodes an entity of the given type from a raw JSON value.
	///
	/// Fails with the first kind-specific decode error encountered for a
	/// declared key. Keys the schema does not declare never fail: they are
	/// preserved in the unknown map, except `@context`, which is protocol
	/// envelope and is skipped entirely.
	pub fn from_json(
		schema: &'static TypeSchema,
		value: &json_syntax::Value,
		registry: &Registry,
	) -> Result<Self, Error> {
		match value {
			json_syntax::Value::Object(object) => {
				Self::from_json_object(schema, object, registry)
			}
			other => Err(Error::Unexpected(other.kind())),
		}
	}

	/// Decodes an entity of the given type from a raw JSON object.
	pub fn from_json_object(
		schema: &'static TypeSchema,
		object: &json_syntax::Object,
		registry: &Registry,
	) -> Result<Self, Error> {
		let mut entity = Self::new(schema);

		for entry in object.entries() {
			let key = entry.key.as_str();

			if key == "@context" {
				continue;
			}

			if let Some(i) = schema.property_index(key) {
				entity.properties[i] =
					Property::decode(&schema.properties[i], &entry.value, registry)?;
			} else if let Some(i) = schema.language_map_index(key) {
				entity.language_maps[i] =
					LanguageMap::decode(schema.properties[i].name, &entry.value)?;
			} else {
				entity.unknown.insert(key.to_owned(), entry.value.clone());
			}
		}

		Ok(entity)
	}

	/// Replaces the entity's state with the decoded input.
	///
	/// Idempotent: deserializing the same input twice yields the same
	/// observable state.
	pub fn deserialize(
		&mut self,
		object: &json_syntax::Object,
		registry: &Registry,
	) -> Result<(), Error> {
		*self = Self::from_json_object(self.schema, object, registry)?;
		Ok(())
	}

	/// Serializes the entity to its raw JSON object form.
	///
	/// Extension data is merged first so declared properties always win over
	/// a same-named stale extension entry. Declared properties follow in
	/// schema order, with the entity's canonical type name injected into
	/// `type` if absent (the injection scans existing values first and is
	/// idempotent).
	pub fn to_json_object(&self) -> json_syntax::Object {
		let mut obj = json_syntax::Object::new();

		for (key, value) in self.unknown.iter() {
			if self.schema.property_index(key).is_some()
				|| self.schema.language_map_index(key).is_some()
			{
				continue;
			}

			if key == "type" {
				// The schema declares no `type` property, so the decoded
				// discriminator lives here; the canonical name joins the
				// preserved values instead of replacing them.
				let values = match value {
					json_syntax::Value::Array(items) => items.clone(),
					other => vec![other.clone()],
				};

				obj.insert("type".into(), self.injected_type(values));
			} else {
				obj.insert(key.into(), value.clone());
			}
		}

		for (i, prop) in self.schema.properties.iter().enumerate() {
			if prop.name == "type" {
				let values = self.properties[i].to_json_values();
				obj.insert("type".into(), self.injected_type(values));
			} else if let Some(value) = self.properties[i].to_json() {
				obj.insert(prop.name.into(), value);
			}

			if let Some(key) = prop.language_map_key() {
				if let Some(map) = self.language_maps[i].to_json() {
					obj.insert(key.as_str().into(), map);
				}
			}
		}

		// A schema without a declared `type` property still identifies
		// itself on the wire.
		if self.schema.property_index("type").is_none() && !self.unknown.contains("type") {
			obj.insert("type".into(), self.schema.name.into());
		}

		obj
	}

	/// Appends the canonical type name to the given `type` values if absent,
	/// then applies the compaction rule.
	fn injected_type(&self, mut values: Vec<json_syntax::Value>) -> json_syntax::Value {
		if !values
			.iter()
			.any(|v| v.as_str() == Some(self.schema.name))
		{
			values.push(self.schema.name.into());
		}

		if values.len() > 1 {
			json_syntax::Value::Array(values)
		} else {
			values.pop().unwrap_or_else(|| self.schema.name.into())
		}
	}

	/// Serializes the entity to a raw JSON value.
	pub fn to_json(&self) -> json_syntax::Value {
		json_syntax::Value::Object(self.to_json_object())
	}

	/// Values of the declared property with the given JSON key.
	pub fn property(&self, name: &str) -> Option<&Property> {
		let i = self.schema.property_index(name)?;
		Some(&self.properties[i])
	}

	/// Mutable values of the declared property with the given JSON key.
	pub fn property_mut(&mut self, name: &str) -> Option<&mut Property> {
		let i = self.schema.property_index(name)?;
		Some(&mut self.properties[i])
	}

	/// Language map of the given property, if the schema declares one.
	pub fn language_map(&self, name: &str) -> Option<&LanguageMap> {
		let i = self.schema.property_index(name)?;
		self.schema.properties[i]
			.language_mappable
			.then(|| &self.language_maps[i])
	}

	/// Mutable language map of the given property, if the schema declares
	/// one.
	pub fn language_map_mut(&mut self, name: &str) -> Option<&mut LanguageMap> {
		let i = self.schema.property_index(name)?;
		self.schema.properties[i]
			.language_mappable
			.then(|| &mut self.language_maps[i])
	}

	/// Extension data preserved from decode.
	pub fn unknown(&self) -> &UnknownMap {
		&self.unknown
	}

	pub fn unknown_mut(&mut self) -> &mut UnknownMap {
		&mut self.unknown
	}

	/// Replaces the values of a declared property with the given one.
	pub fn set(&mut self, property: &str, slot: Slot) -> Result<(), Error> {
		self.declared_mut(property)?.0.set(slot);
		Ok(())
	}

	/// Appends a value to a repeated property, preserving existing order.
	pub fn append(&mut self, property: &str, slot: Slot) -> Result<(), Error> {
		let (prop, name) = self.declared_mut(property)?;
		prop.as_repeated_mut()
			.ok_or(Error::FunctionalProperty(name))?
			.push(slot);
		Ok(())
	}

	/// Prepends a value to a repeated property, preserving existing order.
	pub fn prepend(&mut self, property: &str, slot: Slot) -> Result<(), Error> {
		let (prop, name) = self.declared_mut(property)?;
		prop.as_repeated_mut()
			.ok_or(Error::FunctionalProperty(name))?
			.insert(0, slot);
		Ok(())
	}

	/// Removes and returns the value at the given index of a repeated
	/// property. Fails fast on an out-of-range index, leaving the list
	/// untouched.
	pub fn remove_at(&mut self, property: &str, index: usize) -> Result<Slot, Error> {
		let (prop, name) = self.declared_mut(property)?;

		if !prop.is_functional() {
			let len = prop.len();
			return prop.remove_at(index).ok_or(Error::IndexOutOfRange {
				property: name,
				index,
				len,
			});
		}

		Err(Error::FunctionalProperty(name))
	}

	fn declared_mut(&mut self, property: &str) -> Result<(&mut Property, &'static str), Error> {
		match self.schema.property_index(property) {
			Some(i) => Ok((&mut self.properties[i], self.schema.properties[i].name)),
			None => Err(Error::UndeclaredProperty(property.to_owned())),
		}
	}
}

impl PartialEq for Entity {
	fn eq(&self, other: &Self) -> bool {
		self.schema.name == other.schema.name
			&& self.properties == other.properties
			&& self.language_maps == other.language_maps
			&& self.unknown == other.unknown
	}
}
