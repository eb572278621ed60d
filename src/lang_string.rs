use langtag::{LangTag, LangTagBuf};

/// Language-taggable string.
///
/// The bare JSON form of this kind carries no tag: a tagged alternative of a
/// textual property only survives serialization through the property's
/// language map.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LangString {
	data: json_syntax::String,
	language: Option<LangTagBuf>,
}

impl LangString {
	/// Creates a new language string.
	pub fn new(data: impl Into<json_syntax::String>, language: Option<LangTagBuf>) -> Self {
		Self {
			data: data.into(),
			language,
		}
	}

	/// Reference to the underlying `str`.
	#[inline(always)]
	pub fn as_str(&self) -> &str {
		self.data.as_str()
	}

	/// Gets the associated language tag, if any.
	pub fn language(&self) -> Option<&LangTag> {
		self.language.as_deref()
	}

	/// Sets the associated language tag.
	pub fn set_language(&mut self, language: Option<LangTagBuf>) {
		self.language = language
	}

	pub fn into_parts(self) -> (json_syntax::String, Option<LangTagBuf>) {
		(self.data, self.language)
	}

	pub(crate) fn to_json(&self) -> json_syntax::Value {
		json_syntax::Value::String(self.data.clone())
	}
}
