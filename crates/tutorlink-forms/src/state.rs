//! Per-form mutable state

use crate::field::FieldKind;
use crate::registry::FieldRegistry;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Current values keyed by field name.
pub type FormValues = HashMap<String, Value>;

/// Key for form-level (non-field-specific) errors.
pub const ALL_FIELDS_KEY: &str = "_all";

/// Validation messages keyed by field name, one message per field.
///
/// # Examples
///
/// ```
/// use tutorlink_forms::FieldErrors;
///
/// let mut errors = FieldErrors::new();
/// errors.insert("subject", "This field is required.");
/// errors.insert("subject", "ignored, first message wins");
///
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors.get("subject"), Some("This field is required."));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
	errors: BTreeMap<String, String>,
}

impl fmt::Display for FieldErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let fields: Vec<&str> = self.errors.keys().map(String::as_str).collect();
		write!(f, "Invalid fields: {}", fields.join(", "))
	}
}

impl std::error::Error for FieldErrors {}

impl FieldErrors {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record `message` for `field` unless the field already has one.
	pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
		self.errors.entry(field.into()).or_insert_with(|| message.into());
	}

	pub fn get(&self, field: &str) -> Option<&str> {
		self.errors.get(field).map(String::as_str)
	}

	/// Form-level errors stored under [`ALL_FIELDS_KEY`].
	pub fn non_field(&self) -> Option<&str> {
		self.get(ALL_FIELDS_KEY)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	/// Merge `other` into `self`; existing messages are kept.
	pub fn extend(&mut self, other: FieldErrors) {
		for (field, message) in other.errors {
			self.insert(field, message);
		}
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldErrors {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut errors = Self::new();
		for (k, v) in iter {
			errors.insert(k, v);
		}
		errors
	}
}

/// Values and errors of one mounted form.
///
/// Owned by exactly one form; every mutation goes through `&mut self`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
	values: FormValues,
	defaults: FormValues,
	errors: FieldErrors,
}

/// Value a field starts with when no initial value is supplied.
pub(crate) fn default_value(kind: FieldKind) -> Value {
	match kind {
		FieldKind::Text { .. } | FieldKind::Textarea { .. } => Value::String(String::new()),
		FieldKind::Number { .. } | FieldKind::Select { .. } => Value::Null,
	}
}

impl FormState {
	/// Create state for every field in `registry` using kind defaults.
	pub fn mount(registry: &FieldRegistry) -> Self {
		Self::mount_with_initial(registry, FormValues::new())
	}

	/// Create state using `initial` where provided; keys not in the registry are dropped.
	pub fn mount_with_initial(registry: &FieldRegistry, mut initial: FormValues) -> Self {
		let defaults: FormValues = registry
			.fields()
			.iter()
			.map(|field| {
				let value = initial
					.remove(field.name())
					.unwrap_or_else(|| default_value(field.kind()));
				(field.name().to_string(), value)
			})
			.collect();

		if !initial.is_empty() {
			tracing::debug!(
				ignored = ?initial.keys().collect::<Vec<_>>(),
				"initial values without a matching field"
			);
		}

		Self {
			values: defaults.clone(),
			defaults,
			errors: FieldErrors::new(),
		}
	}

	pub fn value(&self, name: &str) -> Option<&Value> {
		self.values.get(name)
	}

	pub fn values(&self) -> &FormValues {
		&self.values
	}

	pub fn has_field(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	/// Store `value` for an existing field; returns `false` for unknown names.
	pub(crate) fn store(&mut self, name: &str, value: Value) -> bool {
		match self.values.get_mut(name) {
			Some(slot) => {
				*slot = value;
				true
			}
			None => false,
		}
	}

	pub fn error(&self, name: &str) -> Option<&str> {
		self.errors.get(name)
	}

	pub fn errors(&self) -> &FieldErrors {
		&self.errors
	}

	pub fn set_errors(&mut self, errors: FieldErrors) {
		self.errors = errors;
	}

	pub fn clear_errors(&mut self) {
		self.errors = FieldErrors::new();
	}

	/// Whether any value differs from what the form was mounted with.
	pub fn is_dirty(&self) -> bool {
		self.values != self.defaults
	}

	/// Restore mount-time values and drop all errors.
	pub fn reset(&mut self) {
		self.values = self.defaults.clone();
		self.clear_errors();
	}
}
