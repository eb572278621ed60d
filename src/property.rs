//! Multiplicity and list codec.
//!
//! Wraps the slot codec with the property's declared multiplicity and the
//! JSON compaction rule: a repeated property encodes an empty list as
//! nothing, a one-element list as the bare value and anything longer as an
//! array; decoding accepts all three shapes.

use crate::{registry::Registry, Error, PropertySchema, Slot};

/// Decoded values of a single property, with their declared multiplicity.
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
	/// At most one value.
	Functional(Option<Slot>),

	/// Ordered list of zero or more values.
	Repeated(Vec<Slot>),
}

impl Property {
	/// Creates the empty value of the given declaration.
	pub fn empty(schema: &PropertySchema) -> Self {
		if schema.functional {
			Self::Functional(None)
		} else {
			Self::Repeated(Vec::new())
		}
	}

	/// Decodes the raw JSON value of a property.
	///
	/// A functional property must not hold an array. A repeated property
	/// accepts a bare value, a single object or an array, in which case
	/// element order is preserved.
	pub fn decode(
		schema: &PropertySchema,
		value: &json_syntax::Value,
		registry: &Registry,
	) -> Result<Self, Error> {
		let decoded = if schema.functional {
			match value {
				json_syntax::Value::Array(_) => {
					return Err(Error::FunctionalArray(schema.name))
				}
				value => Self::Functional(Some(Slot::decode(schema.kinds, value, registry))),
			}
		} else {
			match value {
				json_syntax::Value::Array(items) => Self::Repeated(
					items
						.iter()
						.map(|item| Slot::decode(schema.kinds, item, registry))
						.collect(),
				),
				value => Self::Repeated(vec![Slot::decode(schema.kinds, value, registry)]),
			}
		};

		if schema.strict {
			for slot in decoded.iter() {
				if let Slot::Unknown(raw) = slot {
					return Err(Error::Decode {
						property: schema.name,
						value: raw.clone(),
					});
				}
			}
		}

		Ok(decoded)
	}

	/// Serializes the property back to its raw JSON value, applying the
	/// compaction rule. Returns `None` when the key must be omitted.
	pub fn to_json(&self) -> Option<json_syntax::Value> {
		match self {
			Self::Functional(slot) => slot.as_ref().map(Slot::to_json),
			Self::Repeated(slots) => match slots.len() {
				0 => None,
				1 => Some(slots[0].to_json()),
				_ => Some(json_syntax::Value::Array(
					slots.iter().map(Slot::to_json).collect(),
				)),
			},
		}
	}

	/// Serializes every populated slot, without compaction.
	pub(crate) fn to_json_values(&self) -> Vec<json_syntax::Value> {
		self.iter().map(Slot::to_json).collect()
	}

	pub fn is_functional(&self) -> bool {
		matches!(self, Self::Functional(_))
	}

	/// Number of populated values.
	pub fn len(&self) -> usize {
		self.as_slice().len()
	}

	pub fn is_empty(&self) -> bool {
		self.as_slice().is_empty()
	}

	/// Populated values, in order.
	pub fn as_slice(&self) -> &[Slot] {
		match self {
			Self::Functional(slot) => slot.as_slice(),
			Self::Repeated(slots) => slots,
		}
	}

	/// Value at the given index.
	pub fn get(&self, index: usize) -> Option<&Slot> {
		self.as_slice().get(index)
	}

	/// First populated value, if any.
	pub fn first(&self) -> Option<&Slot> {
		self.as_slice().first()
	}

	pub fn iter(&self) -> std::slice::Iter<Slot> {
		self.as_slice().iter()
	}

	/// Replaces the property's values with the single given one.
	pub fn set(&mut self, slot: Slot) {
		match self {
			Self::Functional(value) => *value = Some(slot),
			Self::Repeated(slots) => {
				slots.clear();
				slots.push(slot);
			}
		}
	}

	/// Removes every value.
	pub fn clear(&mut self) {
		match self {
			Self::Functional(value) => *value = None,
			Self::Repeated(slots) => slots.clear(),
		}
	}

	/// Mutable access to the value list of a repeated property.
	///
	/// Returns `None` for functional properties, which hold no list.
	pub fn as_repeated_mut(&mut self) -> Option<&mut Vec<Slot>> {
		match self {
			Self::Repeated(slots) => Some(slots),
			Self::Functional(_) => None,
		}
	}

	/// Removes and returns the value at the given index of a repeated
	/// property, preserving the order of the remaining values.
	///
	/// Returns `None` when the index is out of range or the property is
	/// functional; the list is left untouched.
	pub fn remove_at(&mut self, index: usize) -> Option<Slot> {
		match self {
			Self::Repeated(slots) if index < slots.len() => Some(slots.remove(index)),
			_ => None,
		}
	}
}

impl<'a> IntoIterator for &'a Property {
	type Item = &'a Slot;
	type IntoIter = std::slice::Iter<'a, Slot>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
