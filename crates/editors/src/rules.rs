//! Attribute match rules.
//!
//! A rule binds a set of field patterns to an editor name and the props the
//! editor is created with. In configuration a rule reads:
//!
//! ```json
//! {
//!   "regex": { "attribute": "STATE_NAME", "typeName": "topp:.*" },
//!   "editor": "DropDownEditor",
//!   "editorProps": { "values": ["Opt1", "Opt2"], "forceSelection": true }
//! }
//! ```
//!
//! Every pattern must match its field value in full; a rule without patterns
//! never matches.

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::RuleError;
use crate::field::FieldDescriptor;
use crate::props::EditorProps;

/// Field a rule pattern is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleKey {
	Attribute,
	Url,
	TypeName,
}

impl RuleKey {
	pub fn key(self) -> &'static str {
		match self {
			RuleKey::Attribute => "attribute",
			RuleKey::Url => "url",
			RuleKey::TypeName => "typeName",
		}
	}

	pub fn from_key(key: &str) -> Option<Self> {
		match key {
			"attribute" => Some(RuleKey::Attribute),
			"url" => Some(RuleKey::Url),
			"typeName" => Some(RuleKey::TypeName),
			_ => None,
		}
	}

	fn value_of(self, field: &FieldDescriptor) -> Option<&str> {
		match self {
			RuleKey::Attribute => Some(&field.attribute),
			RuleKey::Url => field.url.as_deref(),
			RuleKey::TypeName => field.type_name.as_deref(),
		}
	}
}

impl fmt::Display for RuleKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

#[derive(Debug, Clone)]
struct RulePattern {
	key: RuleKey,
	source: String,
	anchored: Regex,
}

impl RulePattern {
	fn compile(key: RuleKey, source: &str) -> Result<Self, RuleError> {
		let anchored =
			Regex::new(&format!("^(?:{source})$")).map_err(|source_err| RuleError::InvalidPattern {
				key,
				pattern: source.to_string(),
				source: source_err,
			})?;
		Ok(Self {
			key,
			source: source.to_string(),
			anchored,
		})
	}

	fn matches(&self, field: &FieldDescriptor) -> bool {
		self.key
			.value_of(field)
			.is_some_and(|value| self.anchored.is_match(value))
	}
}

/// Binds field patterns to an editor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "RawMatchRule")]
pub struct MatchRule {
	patterns: Vec<RulePattern>,
	editor: Option<String>,
	editor_props: EditorProps,
}

impl MatchRule {
	/// Rule selecting `editor` for attributes matching `pattern`.
	pub fn for_attribute(pattern: &str, editor: impl Into<String>) -> Result<Self, RuleError> {
		Self::default()
			.with_editor(editor)
			.with_pattern(RuleKey::Attribute, pattern)
	}

	/// Adds or replaces the pattern for `key`.
	pub fn with_pattern(mut self, key: RuleKey, pattern: &str) -> Result<Self, RuleError> {
		let compiled = RulePattern::compile(key, pattern)?;
		self.patterns.retain(|p| p.key != key);
		self.patterns.push(compiled);
		self.patterns.sort_by_key(|p| p.key);
		Ok(self)
	}

	pub fn with_editor(mut self, editor: impl Into<String>) -> Self {
		self.editor = Some(editor.into());
		self
	}

	pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.editor_props.insert(key, value);
		self
	}

	pub fn with_editor_props(mut self, props: EditorProps) -> Self {
		self.editor_props = props;
		self
	}

	/// Registry name of the editor this rule selects.
	pub fn editor(&self) -> Option<&str> {
		self.editor.as_deref()
	}

	pub fn editor_props(&self) -> &EditorProps {
		&self.editor_props
	}

	/// Patterns as written in configuration, ordered by key.
	pub fn patterns(&self) -> impl Iterator<Item = (RuleKey, &str)> {
		self.patterns.iter().map(|p| (p.key, p.source.as_str()))
	}

	/// A rule can only match once it has at least one pattern.
	pub fn is_usable(&self) -> bool {
		!self.patterns.is_empty()
	}

	pub fn matches(&self, field: &FieldDescriptor) -> bool {
		self.is_usable() && self.patterns.iter().all(|p| p.matches(field))
	}
}

/// First rule in `rules` matching `field`.
pub fn find_match<'a>(rules: &'a [MatchRule], field: &FieldDescriptor) -> Option<&'a MatchRule> {
	rules.iter().find(|rule| rule.matches(field))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMatchRule {
	#[serde(default)]
	regex: Option<BTreeMap<String, String>>,
	#[serde(default)]
	editor: Option<String>,
	#[serde(default)]
	editor_props: EditorProps,
}

impl TryFrom<RawMatchRule> for MatchRule {
	type Error = RuleError;

	fn try_from(raw: RawMatchRule) -> Result<Self, Self::Error> {
		let mut rule = MatchRule {
			patterns: Vec::new(),
			editor: raw.editor,
			editor_props: raw.editor_props,
		};
		for (key, pattern) in raw.regex.unwrap_or_default() {
			let key = RuleKey::from_key(&key).ok_or(RuleError::UnknownKey(key))?;
			rule = rule.with_pattern(key, &pattern)?;
		}
		Ok(rule)
	}
}
