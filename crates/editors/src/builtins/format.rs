use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{EditorKind, FORMAT_EDITOR, display_value, parse_options};
use crate::factory::{EditorFactory, EditorSpec};
use crate::field::FieldType;
use crate::props::EditorProps;

/// Free text checked against a regular expression.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
	/// Pattern as configured. Not anchored: include `^`/`$` to match whole
	/// values.
	pub regex: Option<String>,
	#[serde(skip)]
	compiled: Option<Regex>,
}

impl FormatOptions {
	pub fn new(regex: impl Into<String>) -> Self {
		Self {
			regex: Some(regex.into()),
			compiled: None,
		}
		.compile()
	}

	fn compile(mut self) -> Self {
		self.compiled = match self.regex.as_deref() {
			Some(pattern) => match Regex::new(pattern) {
				Ok(re) => Some(re),
				Err(error) => {
					tracing::warn!(
						editor = FORMAT_EDITOR,
						pattern,
						%error,
						"invalid format pattern; validation disabled",
					);
					None
				}
			},
			None => None,
		};
		self
	}

	/// Whether validation is active.
	pub fn is_enforced(&self) -> bool {
		self.compiled.is_some()
	}

	pub fn validate(&self, value: &Value) -> bool {
		match &self.compiled {
			Some(re) => re.is_match(&display_value(value)),
			None => true,
		}
	}
}

pub fn format_editor(data_type: FieldType) -> impl EditorFactory {
	move |props: &EditorProps| {
		let options = parse_options::<FormatOptions>(FORMAT_EDITOR, props).compile();
		EditorSpec::new(EditorKind::Format(options), Some(data_type), props.clone())
	}
}
