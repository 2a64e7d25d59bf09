use std::path::PathBuf;

use crate::rules::RuleKey;

/// A match rule could not be built.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
	/// A `regex` entry did not compile.
	#[error("invalid {key} pattern {pattern:?}: {source}")]
	InvalidPattern {
		key: RuleKey,
		pattern: String,
		#[source]
		source: regex::Error,
	},

	/// The `regex` object names a field the grid does not expose.
	#[error("unknown rule key {0:?} (expected attribute, url or typeName)")]
	UnknownKey(String),
}

/// Grid editor configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON parse error: {0}")]
	Json(#[from] serde_json::Error),

	/// The file extension does not name a supported format.
	#[error("unsupported config format: {} (expected .toml or .json)", .path.display())]
	UnsupportedFormat { path: PathBuf },
}
