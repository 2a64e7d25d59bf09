//! Editors shipped with every grid.
//!
//! | name                       | slots       |
//! |----------------------------|-------------|
//! | `DropDownEditor`           | string      |
//! | `NumberEditor`             | int, number |
//! | `FormatEditor`             | string      |
//! | `CustomAutocompleteEditor` | string      |
//!
//! [`attribute_editor`] is the plain text control grids render when no custom
//! editor applies. It is not registered under a name of its own; entries use
//! it as their `defaultEditor`.

mod autocomplete;
mod drop_down;
mod format;
mod number;

use std::sync::Arc;

pub use autocomplete::{AutocompleteOptions, autocomplete_editor};
pub use drop_down::{DropDownOptions, drop_down_editor};
pub use format::{FormatOptions, format_editor};
pub use number::{NumberOptions, number_editor};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::entry::{EditorEntry, EditorSlot};
use crate::factory::{EditorFactory, EditorSpec};
use crate::field::FieldType;
use crate::props::EditorProps;
use crate::registry::EditorMap;

pub const ATTRIBUTE_EDITOR: &str = "AttributeEditor";
pub const DROP_DOWN_EDITOR: &str = "DropDownEditor";
pub const NUMBER_EDITOR: &str = "NumberEditor";
pub const FORMAT_EDITOR: &str = "FormatEditor";
pub const AUTOCOMPLETE_EDITOR: &str = "CustomAutocompleteEditor";

/// Which control an [`EditorSpec`] describes, with its typed options.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "editor", content = "options")]
pub enum EditorKind {
	#[serde(rename = "AttributeEditor")]
	Attribute,
	#[serde(rename = "DropDownEditor")]
	DropDown(DropDownOptions),
	#[serde(rename = "NumberEditor")]
	Number(NumberOptions),
	#[serde(rename = "FormatEditor")]
	Format(FormatOptions),
	#[serde(rename = "CustomAutocompleteEditor")]
	Autocomplete(AutocompleteOptions),
	/// Caller-supplied control, identified by name only.
	Custom(String),
}

impl EditorKind {
	pub fn name(&self) -> &str {
		match self {
			EditorKind::Attribute => ATTRIBUTE_EDITOR,
			EditorKind::DropDown(_) => DROP_DOWN_EDITOR,
			EditorKind::Number(_) => NUMBER_EDITOR,
			EditorKind::Format(_) => FORMAT_EDITOR,
			EditorKind::Autocomplete(_) => AUTOCOMPLETE_EDITOR,
			EditorKind::Custom(name) => name,
		}
	}

	/// Whether the control accepts `value`. `null` (a cleared cell) is always
	/// accepted.
	pub fn validate(&self, value: &Value, data_type: Option<FieldType>) -> bool {
		if value.is_null() {
			return true;
		}
		match self {
			EditorKind::DropDown(options) => options.validate(value),
			EditorKind::Number(options) => options.validate(value, data_type),
			EditorKind::Format(options) => options.validate(value),
			EditorKind::Attribute | EditorKind::Autocomplete(_) | EditorKind::Custom(_) => true,
		}
	}
}

/// Plain text editor accepting any value.
pub fn attribute_editor() -> impl EditorFactory {
	|props: &EditorProps| EditorSpec::new(EditorKind::Attribute, None, props.clone())
}

/// The built-in name to entry map.
pub fn builtin_editors() -> EditorMap {
	let mut map = EditorMap::default();
	map.insert(
		Box::from(DROP_DOWN_EDITOR),
		Arc::new(EditorEntry::new().with(EditorSlot::String, drop_down_editor(FieldType::String))),
	);
	map.insert(
		Box::from(NUMBER_EDITOR),
		Arc::new(
			EditorEntry::new()
				.with(EditorSlot::Int, number_editor(FieldType::Int))
				.with(EditorSlot::Number, number_editor(FieldType::Number)),
		),
	);
	map.insert(
		Box::from(FORMAT_EDITOR),
		Arc::new(EditorEntry::new().with(EditorSlot::String, format_editor(FieldType::String))),
	);
	map.insert(
		Box::from(AUTOCOMPLETE_EDITOR),
		Arc::new(
			EditorEntry::new().with(EditorSlot::String, autocomplete_editor(FieldType::String)),
		),
	);
	map
}

/// Reads typed editor options from `props`, falling back to defaults when
/// the bag does not fit the option schema.
fn parse_options<T: DeserializeOwned + Default>(editor: &'static str, props: &EditorProps) -> T {
	props.parse().unwrap_or_else(|error| {
		tracing::warn!(editor, %error, "malformed editor props; using defaults");
		T::default()
	})
}

/// Display form of a scalar cell value, as the grid would show it.
fn display_value(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn builtin_names_and_slots() {
		let map = builtin_editors();
		let slots = |name: &str| map[name].slots().collect::<Vec<_>>();

		assert_eq!(slots(DROP_DOWN_EDITOR), [EditorSlot::String]);
		assert_eq!(slots(NUMBER_EDITOR), [EditorSlot::Int, EditorSlot::Number]);
		assert_eq!(slots(FORMAT_EDITOR), [EditorSlot::String]);
		assert_eq!(slots(AUTOCOMPLETE_EDITOR), [EditorSlot::String]);
		assert_eq!(map.len(), 4);
	}

	#[test]
	fn attribute_editor_accepts_anything() {
		let spec = attribute_editor().create(&EditorProps::new());
		assert_eq!(spec.kind.name(), ATTRIBUTE_EDITOR);
		assert!(spec.validate(&json!("text")));
		assert!(spec.validate(&json!(12)));
	}

	#[test]
	fn null_is_always_valid() {
		let props = EditorProps::new().with("values", json!(["a"])).with("forceSelection", true);
		let spec = drop_down_editor(FieldType::String).create(&props);
		assert!(spec.validate(&Value::Null));
	}

	#[test]
	fn kind_serializes_with_editor_tag() {
		let props = EditorProps::new().with("values", json!(["a", "b"]));
		let spec = drop_down_editor(FieldType::String).create(&props);
		let value = serde_json::to_value(&spec.kind).unwrap();
		assert_eq!(value["editor"], json!("DropDownEditor"));
		assert_eq!(value["options"]["values"], json!(["a", "b"]));
	}
}
