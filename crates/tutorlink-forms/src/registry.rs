//! Validated field lists

use crate::field::{FieldConfig, FieldKind};
use crate::options::{OptionsTable, SelectOption};
use std::collections::HashSet;

/// A field list that cannot be rendered safely.
///
/// Only produced while building a [`FieldRegistry`], so it surfaces at startup
/// or in tests rather than during rendering.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
	#[error("Duplicate field name: {name}")]
	DuplicateField { name: String },

	#[error("Field {field} references unknown options list {options_ref}")]
	UnresolvedOptions { field: String, options_ref: String },

	#[error("Field {field} references empty options list {options_ref}")]
	EmptyOptions { field: String, options_ref: String },

	#[error("Options list {options_ref} of field {field} repeats the value {value}")]
	DuplicateOption {
		field: String,
		options_ref: String,
		value: String,
	},

	#[error("Field {field} has a minimum greater than its maximum")]
	InvalidBounds { field: String },
}

/// An ordered field list whose select options are resolved and whose names are unique.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
	fields: Vec<FieldConfig>,
	options: Vec<&'static [SelectOption]>,
}

impl FieldRegistry {
	/// Validate `fields` against `options`.
	///
	/// # Examples
	///
	/// ```
	/// use tutorlink_forms::{ConfigurationError, FieldConfig, FieldRegistry, OptionsTable};
	///
	/// let fields = [
	///     FieldConfig::text("name", "Name"),
	///     FieldConfig::select("district", "District", "districts"),
	/// ];
	///
	/// let err = FieldRegistry::new(&fields, &OptionsTable::new()).unwrap_err();
	/// assert_eq!(
	///     err,
	///     ConfigurationError::UnresolvedOptions {
	///         field: "district".to_string(),
	///         options_ref: "districts".to_string(),
	///     }
	/// );
	/// ```
	pub fn new(fields: &[FieldConfig], options: &OptionsTable) -> Result<Self, ConfigurationError> {
		let mut seen = HashSet::with_capacity(fields.len());
		let mut resolved = Vec::with_capacity(fields.len());

		for field in fields {
			if !seen.insert(field.name()) {
				return Err(ConfigurationError::DuplicateField {
					name: field.name().to_string(),
				});
			}

			let list: &'static [SelectOption] = match field.kind() {
				FieldKind::Select { options_ref } => {
					let list = options.get(options_ref).ok_or_else(|| {
						ConfigurationError::UnresolvedOptions {
							field: field.name().to_string(),
							options_ref: options_ref.to_string(),
						}
					})?;
					if list.is_empty() {
						return Err(ConfigurationError::EmptyOptions {
							field: field.name().to_string(),
							options_ref: options_ref.to_string(),
						});
					}
					let mut values = HashSet::with_capacity(list.len());
					if let Some(repeated) = list.iter().find(|o| !values.insert(o.value)) {
						return Err(ConfigurationError::DuplicateOption {
							field: field.name().to_string(),
							options_ref: options_ref.to_string(),
							value: repeated.value.to_string(),
						});
					}
					list
				}
				FieldKind::Number {
					min: Some(min),
					max: Some(max),
					..
				} if min > max => {
					return Err(ConfigurationError::InvalidBounds {
						field: field.name().to_string(),
					});
				}
				FieldKind::Text { .. } | FieldKind::Number { .. } | FieldKind::Textarea { .. } => {
					&[]
				}
			};
			resolved.push(list);
		}

		tracing::debug!(fields = fields.len(), "field registry validated");

		Ok(Self {
			fields: fields.to_vec(),
			options: resolved,
		})
	}

	pub fn fields(&self) -> &[FieldConfig] {
		&self.fields
	}

	pub fn field(&self, name: &str) -> Option<&FieldConfig> {
		self.fields.iter().find(|f| f.name() == name)
	}

	pub(crate) fn position(&self, name: &str) -> Option<usize> {
		self.fields.iter().position(|f| f.name() == name)
	}

	/// Resolved options of the field at `index`; empty for non-select fields.
	pub(crate) fn options_at(&self, index: usize) -> &'static [SelectOption] {
		self.options.get(index).copied().unwrap_or(&[])
	}

	/// Resolved options for the named field; empty for non-select or unknown fields.
	pub fn options_for(&self, name: &str) -> &'static [SelectOption] {
		self.position(name)
			.map(|index| self.options_at(index))
			.unwrap_or(&[])
	}

	/// Fields paired with their resolved options, in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (&FieldConfig, &'static [SelectOption])> + '_ {
		self.fields.iter().zip(self.options.iter().copied())
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	static DAYS: &[SelectOption] = &[
		SelectOption::new("3", "3 days"),
		SelectOption::new("5", "5 days"),
	];
	static NOTHING: &[SelectOption] = &[];
	static REPEATED: &[SelectOption] = &[
		SelectOption::new("dhaka", "Dhaka"),
		SelectOption::new("sylhet", "Sylhet"),
		SelectOption::new("dhaka", "Dhaka City"),
	];

	#[fixture]
	fn options() -> OptionsTable {
		OptionsTable::new()
			.with("days", DAYS)
			.with("nothing", NOTHING)
			.with("repeated", REPEATED)
	}

	#[rstest]
	fn test_valid_registry(options: OptionsTable) {
		let fields = [
			FieldConfig::text("subject", "Subject"),
			FieldConfig::select("days", "Days per week", "days"),
		];
		let registry = FieldRegistry::new(&fields, &options).unwrap();

		assert_eq!(registry.len(), 2);
		assert_eq!(registry.options_for("days"), DAYS);
		assert!(registry.options_for("subject").is_empty());
		assert!(registry.field("missing").is_none());
	}

	#[rstest]
	fn test_duplicate_names_rejected(options: OptionsTable) {
		let fields = [
			FieldConfig::text("subject", "Subject"),
			FieldConfig::textarea("subject", "Subject again"),
		];
		let err = FieldRegistry::new(&fields, &options).unwrap_err();
		assert_eq!(
			err,
			ConfigurationError::DuplicateField {
				name: "subject".to_string()
			}
		);
	}

	#[rstest]
	fn test_empty_options_rejected(options: OptionsTable) {
		let fields = [FieldConfig::select("x", "X", "nothing")];
		let err = FieldRegistry::new(&fields, &options).unwrap_err();
		assert!(matches!(err, ConfigurationError::EmptyOptions { .. }));
	}

	#[rstest]
	fn test_repeated_option_value_rejected(options: OptionsTable) {
		let fields = [FieldConfig::select("district", "District", "repeated")];
		let err = FieldRegistry::new(&fields, &options).unwrap_err();
		assert_eq!(
			err,
			ConfigurationError::DuplicateOption {
				field: "district".to_string(),
				options_ref: "repeated".to_string(),
				value: "dhaka".to_string(),
			}
		);
		assert_eq!(
			err.to_string(),
			"Options list repeated of field district repeats the value dhaka"
		);
	}

	#[rstest]
	fn test_inverted_bounds_rejected(options: OptionsTable) {
		let fields = [FieldConfig::number("salary", "Salary").min(10.0).max(1.0)];
		let err = FieldRegistry::new(&fields, &options).unwrap_err();
		assert_eq!(err.to_string(), "Field salary has a minimum greater than its maximum");
	}

	#[rstest]
	fn test_iter_pairs_fields_with_options(options: OptionsTable) {
		let fields = [
			FieldConfig::number("salary", "Salary"),
			FieldConfig::select("days", "Days", "days"),
		];
		let registry = FieldRegistry::new(&fields, &options).unwrap();
		let pairs: Vec<_> = registry.iter().map(|(f, o)| (f.name(), o.len())).collect();
		assert_eq!(pairs, vec![("salary", 0), ("days", 2)]);
	}
}
