use std::fmt;
use std::sync::Arc;

use crate::factory::EditorFactory;
use crate::field::FieldType;

/// Position of a factory inside an [`EditorEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorSlot {
	String,
	Int,
	Number,
	/// Fallback used when the field's type has no dedicated factory.
	Default,
}

impl EditorSlot {
	pub const ALL: [EditorSlot; 4] = [
		EditorSlot::String,
		EditorSlot::Int,
		EditorSlot::Number,
		EditorSlot::Default,
	];

	/// Configuration key of the slot (`"string"`, ..., `"defaultEditor"`).
	pub fn key(self) -> &'static str {
		match self {
			EditorSlot::String => "string",
			EditorSlot::Int => "int",
			EditorSlot::Number => "number",
			EditorSlot::Default => "defaultEditor",
		}
	}

	pub fn from_key(key: &str) -> Option<Self> {
		match key {
			"defaultEditor" => Some(EditorSlot::Default),
			other => FieldType::parse(other).map(Self::from),
		}
	}
}

impl From<FieldType> for EditorSlot {
	fn from(ty: FieldType) -> Self {
		match ty {
			FieldType::String => EditorSlot::String,
			FieldType::Int => EditorSlot::Int,
			FieldType::Number => EditorSlot::Number,
		}
	}
}

impl fmt::Display for EditorSlot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

/// Per-type factories registered under one editor name.
#[derive(Clone, Default)]
pub struct EditorEntry {
	string: Option<Arc<dyn EditorFactory>>,
	int: Option<Arc<dyn EditorFactory>>,
	number: Option<Arc<dyn EditorFactory>>,
	default_editor: Option<Arc<dyn EditorFactory>>,
}

impl EditorEntry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder form of [`EditorEntry::set`].
	pub fn with(mut self, slot: EditorSlot, factory: impl EditorFactory + 'static) -> Self {
		self.set(slot, Arc::new(factory));
		self
	}

	/// Installs `factory` in `slot`, returning the factory it replaced.
	pub fn set(
		&mut self,
		slot: EditorSlot,
		factory: Arc<dyn EditorFactory>,
	) -> Option<Arc<dyn EditorFactory>> {
		self.slot_mut(slot).replace(factory)
	}

	pub fn unset(&mut self, slot: EditorSlot) -> Option<Arc<dyn EditorFactory>> {
		self.slot_mut(slot).take()
	}

	pub fn get(&self, slot: EditorSlot) -> Option<&Arc<dyn EditorFactory>> {
		match slot {
			EditorSlot::String => self.string.as_ref(),
			EditorSlot::Int => self.int.as_ref(),
			EditorSlot::Number => self.number.as_ref(),
			EditorSlot::Default => self.default_editor.as_ref(),
		}
	}

	fn slot_mut(&mut self, slot: EditorSlot) -> &mut Option<Arc<dyn EditorFactory>> {
		match slot {
			EditorSlot::String => &mut self.string,
			EditorSlot::Int => &mut self.int,
			EditorSlot::Number => &mut self.number,
			EditorSlot::Default => &mut self.default_editor,
		}
	}

	pub fn contains(&self, slot: EditorSlot) -> bool {
		self.get(slot).is_some()
	}

	/// Occupied slots in declaration order.
	pub fn slots(&self) -> impl Iterator<Item = EditorSlot> + '_ {
		EditorSlot::ALL.into_iter().filter(|slot| self.contains(*slot))
	}

	pub fn len(&self) -> usize {
		self.slots().count()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Picks the factory for a field type: the dedicated slot when present,
	/// otherwise `defaultEditor`.
	pub fn resolve(
		&self,
		field_type: Option<FieldType>,
	) -> Option<(EditorSlot, &Arc<dyn EditorFactory>)> {
		if let Some(ty) = field_type
			&& let Some(factory) = self.get(ty.into())
		{
			return Some((ty.into(), factory));
		}
		self.default_editor
			.as_ref()
			.map(|factory| (EditorSlot::Default, factory))
	}
}

impl fmt::Debug for EditorEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.slots().map(EditorSlot::key)).finish()
	}
}
