//! Editor factories and the render descriptions they produce.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::builtins::EditorKind;
use crate::entry::EditorSlot;
use crate::field::FieldType;
use crate::props::EditorProps;

/// Produces the editor control for one cell from its props.
///
/// Factories must be pure: the same props yield an equivalent spec. Any
/// `Fn(&EditorProps) -> EditorSpec + Send + Sync` closure is a factory.
pub trait EditorFactory: Send + Sync {
	fn create(&self, props: &EditorProps) -> EditorSpec;
}

impl<F> EditorFactory for F
where
	F: Fn(&EditorProps) -> EditorSpec + Send + Sync,
{
	fn create(&self, props: &EditorProps) -> EditorSpec {
		self(props)
	}
}

/// Renderable description of an editor control.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSpec {
	pub kind: EditorKind,
	/// Attribute type the control edits; `None` for untyped fallbacks.
	pub data_type: Option<FieldType>,
	/// Full props the factory was invoked with.
	pub props: EditorProps,
}

impl EditorSpec {
	pub fn new(kind: EditorKind, data_type: Option<FieldType>, props: EditorProps) -> Self {
		Self {
			kind,
			data_type,
			props,
		}
	}

	/// Whether `value` is acceptable input for this control.
	pub fn validate(&self, value: &Value) -> bool {
		self.kind.validate(value, self.data_type)
	}
}

/// A resolved factory curried with the props of the rule and column that
/// selected it.
#[derive(Clone)]
pub struct BoundEditor {
	editor: Box<str>,
	slot: EditorSlot,
	factory: Arc<dyn EditorFactory>,
	props: EditorProps,
}

impl BoundEditor {
	pub(crate) fn new(
		editor: &str,
		slot: EditorSlot,
		factory: Arc<dyn EditorFactory>,
		props: EditorProps,
	) -> Self {
		Self {
			editor: Box::from(editor),
			slot,
			factory,
			props,
		}
	}

	/// Registry name of the editor entry.
	pub fn editor(&self) -> &str {
		&self.editor
	}

	/// Which slot of the entry was picked.
	pub fn slot(&self) -> EditorSlot {
		self.slot
	}

	/// Props bound at resolution time.
	pub fn props(&self) -> &EditorProps {
		&self.props
	}

	pub fn factory(&self) -> &Arc<dyn EditorFactory> {
		&self.factory
	}

	/// Builds the control for a cell. Bound props override `cell_props`.
	pub fn render(&self, cell_props: &EditorProps) -> EditorSpec {
		let props = EditorProps::layered([cell_props, &self.props]);
		self.factory.create(&props)
	}

	pub fn render_default(&self) -> EditorSpec {
		self.factory.create(&self.props)
	}
}

impl fmt::Debug for BoundEditor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BoundEditor")
			.field("editor", &self.editor)
			.field("slot", &self.slot)
			.field("props", &self.props)
			.finish_non_exhaustive()
	}
}
