use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{EditorKind, NUMBER_EDITOR, parse_options};
use crate::factory::{EditorFactory, EditorSpec};
use crate::field::FieldType;
use crate::props::EditorProps;

/// Numeric input with optional inclusive bounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberOptions {
	pub min_value: Option<f64>,
	pub max_value: Option<f64>,
	pub step: Option<f64>,
}

impl NumberOptions {
	pub fn validate(&self, value: &Value, data_type: Option<FieldType>) -> bool {
		let Some(number) = as_number(value) else {
			return false;
		};
		if data_type == Some(FieldType::Int) && number.fract() != 0.0 {
			return false;
		}
		self.min_value.is_none_or(|min| number >= min) && self.max_value.is_none_or(|max| number <= max)
	}
}

/// Numbers and numeric strings; grid cells often carry numbers as text.
fn as_number(value: &Value) -> Option<f64> {
	let number = match value {
		Value::Number(n) => n.as_f64()?,
		Value::String(s) => s.trim().parse().ok()?,
		_ => return None,
	};
	number.is_finite().then_some(number)
}

pub fn number_editor(data_type: FieldType) -> impl EditorFactory {
	move |props: &EditorProps| {
		let options: NumberOptions = parse_options(NUMBER_EDITOR, props);
		EditorSpec::new(EditorKind::Number(options), Some(data_type), props.clone())
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;
	use serde_json::json;

	use super::*;

	#[rstest]
	#[case(json!(5), true)]
	#[case(json!(5.5), false)]
	#[case(json!("7"), true)]
	#[case(json!("7.25"), false)]
	#[case(json!(11), false)]
	#[case(json!(-1), false)]
	#[case(json!("abc"), false)]
	#[case(json!(true), false)]
	fn int_with_bounds(#[case] value: Value, #[case] expected: bool) {
		let props = EditorProps::new().with("minValue", 0).with("maxValue", 10);
		let spec = number_editor(FieldType::Int).create(&props);
		assert_eq!(spec.validate(&value), expected, "value {value}");
	}

	#[test]
	fn number_accepts_fractions() {
		let spec = number_editor(FieldType::Number).create(&EditorProps::new());
		assert!(spec.validate(&json!(5.5)));
		assert!(spec.validate(&json!(" 1e3 ")));
	}

	#[test]
	fn non_finite_strings_are_rejected() {
		let spec = number_editor(FieldType::Number).create(&EditorProps::new());
		assert!(!spec.validate(&json!("inf")));
		assert!(!spec.validate(&json!("NaN")));
	}

	#[test]
	fn reads_bounds() {
		let props = EditorProps::new().with("minValue", 1.5).with("step", 0.5);
		let spec = number_editor(FieldType::Number).create(&props);
		let EditorKind::Number(options) = spec.kind else {
			panic!("expected number editor");
		};
		assert_eq!(options.min_value, Some(1.5));
		assert_eq!(options.max_value, None);
		assert_eq!(options.step, Some(0.5));
	}
}
