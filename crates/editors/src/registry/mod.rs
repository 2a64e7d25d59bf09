//! Named editor registry and cell editor resolution.
//!
//! The registry is an explicit context object: each grid (or test) owns its
//! own [`EditorRegistry`]. Readers get an immutable snapshot of the whole map;
//! writers publish a new map atomically, so a reader never observes a
//! half-applied [`EditorRegistry::set`] or [`EditorRegistry::clean`].

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap as HashMap;

use crate::builtins::builtin_editors;
use crate::entry::EditorEntry;
use crate::factory::BoundEditor;
use crate::field::{FieldDescriptor, FieldTypeInfo};
use crate::props::EditorProps;
use crate::rules::{MatchRule, find_match};


/// Registration name to editor entry.
pub type EditorMap = HashMap<Box<str>, Arc<EditorEntry>>;

pub struct EditorRegistry {
	snap: ArcSwap<EditorMap>,
}

impl EditorRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::from_map(EditorMap::default())
	}

	/// Creates a registry holding the [built-in editors](crate::builtins).
	pub fn with_builtins() -> Self {
		Self::from_map(builtin_editors())
	}

	pub fn from_map(map: EditorMap) -> Self {
		Self {
			snap: ArcSwap::from_pointee(map),
		}
	}

	/// Current contents. The snapshot is unaffected by later mutation.
	#[inline]
	pub fn get(&self) -> Arc<EditorMap> {
		self.snap.load_full()
	}

	/// Replaces the entire contents.
	pub fn set(&self, map: EditorMap) {
		tracing::debug!(entries = map.len(), "replacing editor registry");
		self.snap.store(Arc::new(map));
	}

	/// Removes every entry.
	pub fn clean(&self) {
		self.set(EditorMap::default());
	}

	/// Registers `entry` under `name`, replacing any previous entry.
	///
	/// Registering without an entry leaves `name` unresolvable: nothing is
	/// stored and a previous entry under `name` is dropped.
	pub fn register(&self, name: impl Into<Box<str>>, entry: Option<Arc<EditorEntry>>) {
		let name = name.into();
		match entry {
			Some(entry) => {
				let replaced = self.update(|map| map.insert(name.clone(), entry.clone()).is_some());
				tracing::debug!(name = &*name, slots = ?entry, replaced, "registered editor");
			}
			None => {
				let dropped = self.remove_entry(&name);
				tracing::debug!(name = &*name, dropped, "registered editor without entry");
			}
		}
	}

	/// Removes `name`, returning whether it was registered.
	pub fn remove(&self, name: &str) -> bool {
		let removed = self.remove_entry(name);
		tracing::debug!(name, removed, "removed editor");
		removed
	}

	fn remove_entry(&self, name: &str) -> bool {
		if !self.snap.load().contains_key(name) {
			return false;
		}
		self.update(|map| map.remove(name).is_some())
	}

	/// Applies `f` to a copy of the current map and publishes it, retrying if
	/// another writer published first.
	fn update<R>(&self, f: impl Fn(&mut EditorMap) -> R) -> R {
		loop {
			let cur = self.snap.load_full();
			let mut next = (*cur).clone();
			let out = f(&mut next);

			let prev = self.snap.compare_and_swap(&cur, Arc::new(next));
			if Arc::ptr_eq(&prev, &cur) {
				return out;
			}
		}
	}

	pub fn entry(&self, name: &str) -> Option<Arc<EditorEntry>> {
		self.snap.load().get(name).cloned()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.snap.load().contains_key(name)
	}

	/// Registered names, sorted.
	pub fn names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.snap.load().keys().map(|k| k.to_string()).collect();
		names.sort_unstable();
		names
	}

	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.snap.load().is_empty()
	}

	/// Picks the custom editor for a grid cell.
	///
	/// Only the first rule matching `field` is considered. Its editor entry
	/// provides the factory for the field's type, or its `defaultEditor` when
	/// the type has none. The factory comes back bound with the rule's
	/// `editorProps` overlaid by `type_info.props`.
	///
	/// `None` means the grid should use its default cell renderer.
	pub fn get_custom_editor(
		&self,
		field: &FieldDescriptor,
		rules: &[MatchRule],
		type_info: &FieldTypeInfo,
	) -> Option<BoundEditor> {
		let Some(rule) = find_match(rules, field) else {
			tracing::trace!(attribute = %field.attribute, "no editor rule matches");
			return None;
		};
		let Some(name) = rule.editor() else {
			tracing::trace!(attribute = %field.attribute, "matching rule names no editor");
			return None;
		};

		let snap = self.snap.load();
		let Some(entry) = snap.get(name) else {
			tracing::trace!(attribute = %field.attribute, editor = name, "editor not registered");
			return None;
		};
		let Some((slot, factory)) = entry.resolve(type_info.field_type()) else {
			tracing::trace!(
				attribute = %field.attribute,
				editor = name,
				type_tag = %type_info.type_tag,
				"editor has no factory for type and no defaultEditor",
			);
			return None;
		};

		tracing::trace!(attribute = %field.attribute, editor = name, %slot, "resolved custom editor");
		let props = EditorProps::layered([rule.editor_props(), &type_info.props]);
		Some(BoundEditor::new(name, slot, factory.clone(), props))
	}
}

impl Default for EditorRegistry {
	fn default() -> Self {
		Self::with_builtins()
	}
}

impl fmt::Debug for EditorRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EditorRegistry")
			.field("names", &self.names())
			.finish()
	}
}
