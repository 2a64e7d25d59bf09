use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Property bag handed to editor factories.
///
/// Keys follow the grid's camelCase convention (`forceSelection`,
/// `minValue`, ...). Merging is shallow: a later layer replaces a key wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditorProps(Map<String, Value>);

impl EditorProps {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.0.insert(key.into(), value.into())
	}

	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(key, value);
		self
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.0.iter()
	}

	/// Overlays `other` onto `self`; keys from `other` win.
	pub fn merge(&mut self, other: &EditorProps) {
		for (key, value) in &other.0 {
			self.0.insert(key.clone(), value.clone());
		}
	}

	/// Returns a new bag with each layer applied in order.
	pub fn layered<'a>(layers: impl IntoIterator<Item = &'a EditorProps>) -> Self {
		let mut merged = Self::new();
		for layer in layers {
			merged.merge(layer);
		}
		merged
	}

	/// Deserializes the bag into a typed option struct.
	pub fn parse<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
		serde_json::from_value(Value::Object(self.0.clone()))
	}

	pub fn into_inner(self) -> Map<String, Value> {
		self.0
	}
}

impl From<Map<String, Value>> for EditorProps {
	fn from(map: Map<String, Value>) -> Self {
		Self(map)
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for EditorProps {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}
