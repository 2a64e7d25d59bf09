//! Custom cell editors for attribute grids.
//!
//! An attribute grid asks one question per editable cell: which editor
//! control, if any, replaces the default cell renderer for this attribute?
//! The answer comes from two inputs:
//!
//! - an [`EditorRegistry`] mapping editor names (e.g. `"DropDownEditor"`) to
//!   an [`EditorEntry`] of per-type factories, and
//! - an ordered list of [`MatchRule`]s, usually loaded from configuration,
//!   that bind attribute patterns to editor names and editor props.
//!
//! [`EditorRegistry::get_custom_editor`] combines both: the first matching
//! rule picks the editor, the field type picks the factory (falling back to
//! the entry's `defaultEditor`), and the result is a [`BoundEditor`] ready to
//! produce an [`EditorSpec`] for the cell.
//!
//! # Example
//!
//! ```
//! use featuregrid_editors::{EditorRegistry, FieldDescriptor, FieldTypeInfo, MatchRule};
//!
//! let registry = EditorRegistry::with_builtins();
//! let rules = vec![
//! 	MatchRule::for_attribute("STATE_NAME", "DropDownEditor")
//! 		.unwrap()
//! 		.with_prop("values", serde_json::json!(["Opt1", "Opt2"])),
//! ];
//!
//! let field = FieldDescriptor::new("STATE_NAME");
//! let editor = registry
//! 	.get_custom_editor(&field, &rules, &FieldTypeInfo::new("string"))
//! 	.expect("dropdown editor");
//! assert_eq!(editor.render_default().kind.name(), "DropDownEditor");
//! ```

pub mod builtins;
pub mod config;
pub mod entry;
pub mod error;
pub mod factory;
pub mod field;
pub mod props;
pub mod registry;
pub mod rules;

pub use builtins::{
	AutocompleteOptions, DropDownOptions, EditorKind, FormatOptions, NumberOptions,
	builtin_editors,
};
pub use config::GridEditorsConfig;
pub use entry::{EditorEntry, EditorSlot};
pub use error::{ConfigError, RuleError};
pub use factory::{BoundEditor, EditorFactory, EditorSpec};
pub use field::{FieldDescriptor, FieldType, FieldTypeInfo};
pub use props::EditorProps;
pub use registry::{EditorMap, EditorRegistry};
pub use rules::{MatchRule, RuleKey};
