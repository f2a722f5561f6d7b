//! Shared option lists for select fields

use serde::Serialize;

/// One `{value, label}` pair of a select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
	pub value: &'static str,
	pub label: &'static str,
}

impl SelectOption {
	pub const fn new(value: &'static str, label: &'static str) -> Self {
		Self { value, label }
	}
}

/// Mapping from options reference to an ordered option list.
///
/// # Examples
///
/// ```
/// use tutorlink_forms::{OptionsTable, SelectOption};
///
/// static GENDERS: &[SelectOption] = &[
///     SelectOption::new("any", "Any"),
///     SelectOption::new("female", "Female"),
/// ];
///
/// let table = OptionsTable::new().with("tutor_gender", GENDERS);
/// assert_eq!(table.get("tutor_gender").map(|o| o.len()), Some(2));
/// assert!(table.contains("tutor_gender", "female"));
/// assert!(!table.contains("tutor_gender", "male"));
/// assert!(table.get("missing").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionsTable {
	lists: Vec<(&'static str, &'static [SelectOption])>,
}

impl OptionsTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a list under `options_ref`, replacing any earlier registration.
	pub fn with(mut self, options_ref: &'static str, options: &'static [SelectOption]) -> Self {
		self.insert(options_ref, options);
		self
	}

	pub fn insert(&mut self, options_ref: &'static str, options: &'static [SelectOption]) {
		match self.lists.iter_mut().find(|(key, _)| *key == options_ref) {
			Some(entry) => entry.1 = options,
			None => self.lists.push((options_ref, options)),
		}
	}

	pub fn get(&self, options_ref: &str) -> Option<&'static [SelectOption]> {
		self.lists
			.iter()
			.find(|(key, _)| *key == options_ref)
			.map(|(_, options)| *options)
	}

	/// Whether `value` is one of the values registered under `options_ref`.
	pub fn contains(&self, options_ref: &str, value: &str) -> bool {
		self.get(options_ref)
			.is_some_and(|options| options.iter().any(|o| o.value == value))
	}

	pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.lists.iter().map(|(key, _)| *key)
	}

	pub fn len(&self) -> usize {
		self.lists.len()
	}

	pub fn is_empty(&self) -> bool {
		self.lists.is_empty()
	}
}
