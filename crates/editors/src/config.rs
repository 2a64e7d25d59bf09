//! Grid editor configuration files.
//!
//! Rules live under `customEditorsRules` (alias `rules`), in TOML:
//!
//! ```toml
//! [[customEditorsRules]]
//! editor = "DropDownEditor"
//! regex = { attribute = "STATE_NAME" }
//! editorProps = { values = ["Opt1", "Opt2"], forceSelection = true }
//! ```
//!
//! or the equivalent JSON object.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::rules::MatchRule;

/// Parsed grid editor configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridEditorsConfig {
	/// Rules in priority order; the first match wins.
	#[serde(default, alias = "rules")]
	pub custom_editors_rules: Vec<MatchRule>,
}

impl GridEditorsConfig {
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(content)?)
	}

	pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(content)?)
	}

	/// Loads a `.toml` or `.json` file.
	pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let parse: fn(&str) -> Result<Self, ConfigError> =
			match path.extension().and_then(|ext| ext.to_str()) {
				Some("toml") => Self::from_toml_str,
				Some("json") => Self::from_json_str,
				_ => {
					return Err(ConfigError::UnsupportedFormat {
						path: path.to_path_buf(),
					});
				}
			};

		let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let config = parse(&content)?;
		tracing::debug!(
			path = %path.display(),
			rules = config.custom_editors_rules.len(),
			"loaded grid editor config",
		);
		Ok(config)
	}

	pub fn rules(&self) -> &[MatchRule] {
		&self.custom_editors_rules
	}
}
