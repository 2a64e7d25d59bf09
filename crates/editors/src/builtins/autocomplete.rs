use serde::{Deserialize, Serialize};

use super::{AUTOCOMPLETE_EDITOR, EditorKind, parse_options};
use crate::factory::{EditorFactory, EditorSpec};
use crate::field::FieldType;
use crate::props::EditorProps;

/// Suggests values drawn from a source layer's unique attribute values.
///
/// The grid fetches suggestions from `url`/`typeName`; this crate only
/// carries the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutocompleteOptions {
	pub autocomplete_enabled: bool,
	/// Service the suggestions are read from.
	pub url: Option<String>,
	/// Source layer name.
	pub type_name: Option<String>,
	pub max_features: Option<u32>,
}

impl Default for AutocompleteOptions {
	fn default() -> Self {
		Self {
			autocomplete_enabled: true,
			url: None,
			type_name: None,
			max_features: None,
		}
	}
}

pub fn autocomplete_editor(data_type: FieldType) -> impl EditorFactory {
	move |props: &EditorProps| {
		let options: AutocompleteOptions = parse_options(AUTOCOMPLETE_EDITOR, props);
		EditorSpec::new(EditorKind::Autocomplete(options), Some(data_type), props.clone())
	}
}
