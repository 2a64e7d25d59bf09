//! Grid cell identity and declared field types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::props::EditorProps;

/// Attribute types an editor entry can provide a dedicated factory for.
///
/// Any other tag reported by the data source (`varchar`, `date`, ...) has no
/// variant here and resolves only through an entry's `defaultEditor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
	String,
	Int,
	Number,
}

impl FieldType {
	pub const ALL: [FieldType; 3] = [FieldType::String, FieldType::Int, FieldType::Number];

	/// Parses a type tag. Matching is exact: `"String"` and `"integer"` are
	/// unsupported.
	pub fn parse(tag: &str) -> Option<Self> {
		match tag {
			"string" => Some(FieldType::String),
			"int" => Some(FieldType::Int),
			"number" => Some(FieldType::Number),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			FieldType::String => "string",
			FieldType::Int => "int",
			FieldType::Number => "number",
		}
	}

	pub fn is_numeric(self) -> bool {
		matches!(self, FieldType::Int | FieldType::Number)
	}
}

impl fmt::Display for FieldType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The cell being edited: attribute name plus the layer it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDescriptor {
	pub attribute: String,
	/// Service URL of the layer.
	pub url: Option<String>,
	/// Qualified layer name, e.g. `topp:states`.
	pub type_name: Option<String>,
}

impl FieldDescriptor {
	pub fn new(attribute: impl Into<String>) -> Self {
		Self {
			attribute: attribute.into(),
			..Self::default()
		}
	}

	pub fn with_url(mut self, url: impl Into<String>) -> Self {
		self.url = Some(url.into());
		self
	}

	pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
		self.type_name = Some(type_name.into());
		self
	}
}

/// Declared type of the edited attribute plus per-column extra props.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FieldTypeInfo {
	/// Raw type tag as reported by the data source.
	#[serde(rename = "type")]
	pub type_tag: String,
	#[serde(default)]
	pub props: EditorProps,
}

impl FieldTypeInfo {
	pub fn new(type_tag: impl Into<String>) -> Self {
		Self {
			type_tag: type_tag.into(),
			props: EditorProps::new(),
		}
	}

	pub fn with_props(mut self, props: EditorProps) -> Self {
		self.props = props;
		self
	}

	/// The supported type this tag names, if any.
	pub fn field_type(&self) -> Option<FieldType> {
		FieldType::parse(&self.type_tag)
	}
}
