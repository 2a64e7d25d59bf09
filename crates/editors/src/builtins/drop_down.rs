use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{DROP_DOWN_EDITOR, EditorKind, display_value, parse_options};
use crate::factory::{EditorFactory, EditorSpec};
use crate::field::FieldType;
use crate::props::EditorProps;

/// Choice from a pre-configured list of values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropDownOptions {
	pub values: Vec<String>,
	/// Reject values outside `values` instead of treating the list as
	/// suggestions.
	pub force_selection: bool,
}

impl DropDownOptions {
	pub fn validate(&self, value: &Value) -> bool {
		if !self.force_selection {
			return true;
		}
		let shown = display_value(value);
		self.values.iter().any(|v| *v == shown)
	}
}

pub fn drop_down_editor(data_type: FieldType) -> impl EditorFactory {
	move |props: &EditorProps| {
		let options: DropDownOptions = parse_options(DROP_DOWN_EDITOR, props);
		EditorSpec::new(EditorKind::DropDown(options), Some(data_type), props.clone())
	}
}
