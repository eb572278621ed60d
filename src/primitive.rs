//! Literal kind parsers and serializers.
//!
//! One stateless parser/serializer pair per literal kind. Parsers are
//! fallible with a recoverable [`KindMismatch`]: the slot codec catches the
//! mismatch and tries the property's next declared kind.

use std::str::FromStr;

use mime::Mime;
use xsd_types::{DateTime, Duration};

use crate::{Kind, LangString};

/// Recoverable kind parser failure.
///
/// Never surfaces to the caller: it only tells the slot codec to try the
/// next candidate kind.
#[derive(Debug, Clone, Copy)]
pub(crate) struct KindMismatch;

/// Typed literal value.
#[derive(Debug, Clone)]
pub enum Primitive {
	/// Boolean value.
	Boolean(bool),

	/// IEEE-754 double.
	Float(f64),

	/// Plain string.
	String(json_syntax::String),

	/// Language-taggable string.
	LangString(LangString),

	/// `xsd:dateTime` literal.
	DateTime(DateTime),

	/// `xsd:duration` literal.
	Duration(Duration),

	/// MIME type literal.
	MimeType(Mime),
}

impl Primitive {
	/// Attempts to interpret an already-decoded JSON value as the given
	/// literal kind.
	///
	/// Object and embedded kinds ([`Kind::Iri`], [`Kind::Object`],
	/// [`Kind::Link`]) are not literals and always mismatch here; the slot
	/// codec handles them before reaching for this parser.
	pub(crate) fn parse(kind: Kind, value: &json_syntax::Value) -> Result<Self, KindMismatch> {
		match kind {
			Kind::Boolean => match value {
				json_syntax::Value::Boolean(b) => Ok(Self::Boolean(*b)),
				_ => Err(KindMismatch),
			},
			Kind::Float => match value {
				json_syntax::Value::Number(n) => Ok(Self::Float(n.as_f64_lossy())),
				_ => Err(KindMismatch),
			},
			Kind::String => match value {
				json_syntax::Value::String(s) => Ok(Self::String(s.clone())),
				_ => Err(KindMismatch),
			},
			Kind::LangString => match value {
				// The bare JSON form carries no tag.
				json_syntax::Value::String(s) => {
					Ok(Self::LangString(LangString::new(s.clone(), None)))
				}
				_ => Err(KindMismatch),
			},
			Kind::DateTime => match value.as_str() {
				Some(s) => match DateTime::from_str(s) {
					Ok(d) => Ok(Self::DateTime(d)),
					Err(_) => Err(KindMismatch),
				},
				None => Err(KindMismatch),
			},
			Kind::Duration => match value.as_str() {
				Some(s) => match Duration::from_str(s) {
					Ok(d) => Ok(Self::Duration(d)),
					Err(_) => Err(KindMismatch),
				},
				None => Err(KindMismatch),
			},
			Kind::MimeType => match value.as_str() {
				Some(s) => match Mime::from_str(s) {
					Ok(m) => Ok(Self::MimeType(m)),
					Err(_) => Err(KindMismatch),
				},
				None => Err(KindMismatch),
			},
			Kind::Iri | Kind::Object | Kind::Link => Err(KindMismatch),
		}
	}

	/// Kind of this literal.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Boolean(_) => Kind::Boolean,
			Self::Float(_) => Kind::Float,
			Self::String(_) => Kind::String,
			Self::LangString(_) => Kind::LangString,
			Self::DateTime(_) => Kind::DateTime,
			Self::Duration(_) => Kind::Duration,
			Self::MimeType(_) => Kind::MimeType,
		}
	}

	/// Returns this value as a string if it is string-shaped.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(s) => Some(s.as_str()),
			Self::LangString(s) => Some(s.as_str()),
			_ => None,
		}
	}

	/// Returns this value as a boolean if it is one.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Boolean(b) => Some(*b),
			_ => None,
		}
	}

	/// Returns this value as a double if it is one.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Float(f) => Some(*f),
			_ => None,
		}
	}

	/// Serializes this literal back to its JSON form.
	pub fn to_json(&self) -> json_syntax::Value {
		match self {
			Self::Boolean(b) => json_syntax::Value::Boolean(*b),
			Self::Float(f) => {
				let mut buffer = ryu_js::Buffer::new();
				match json_syntax::NumberBuf::from_str(buffer.format(*f)) {
					Ok(n) => json_syntax::Value::Number(n),
					// Non-finite doubles have no JSON number form.
					Err(_) => json_syntax::Value::Null,
				}
			}
			Self::String(s) => json_syntax::Value::String(s.clone()),
			Self::LangString(s) => s.to_json(),
			Self::DateTime(d) => json_syntax::Value::String(d.to_string().into()),
			Self::Duration(d) => json_syntax::Value::String(d.to_string().into()),
			Self::MimeType(m) => json_syntax::Value::String(m.to_string().into()),
		}
	}
}

impl PartialEq for Primitive {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Boolean(a), Self::Boolean(b)) => a == b,
			(Self::Float(a), Self::Float(b)) => a == b,
			(Self::String(a), Self::String(b)) => a == b,
			(Self::LangString(a), Self::LangString(b)) => a == b,
			(Self::DateTime(a), Self::DateTime(b)) => a == b,
			// `xsd_types::Duration` has no `PartialEq`; durations compare by
			// their canonical lexical form.
			(Self::Duration(a), Self::Duration(b)) => a.to_string() == b.to_string(),
			(Self::MimeType(a), Self::MimeType(b)) => a == b,
			_ => false,
		}
	}
}
