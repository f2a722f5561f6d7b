//! Validation schemas

use crate::field::FieldKind;
use crate::registry::FieldRegistry;
use crate::state::{ALL_FIELDS_KEY, FieldErrors, FormValues};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::marker::PhantomData;

/// Turns raw form values into typed data or per-field messages.
pub trait ValidationSchema {
	type Output;

	fn validate(&self, values: &FormValues) -> Result<Self::Output, FieldErrors>;
}

type CleanFunction = Box<dyn Fn(&FormValues) -> Result<(), FieldErrors> + Send + Sync>;

pub(crate) const REQUIRED_MESSAGE: &str = "This field is required.";
pub(crate) const NUMBER_MESSAGE: &str = "Enter a number.";
pub(crate) const WHOLE_NUMBER_MESSAGE: &str = "Enter a whole number.";
pub(crate) const INVALID_DATA_MESSAGE: &str =
	"Some values could not be processed. Check the form and try again.";

/// Schema derived from a registry's field configuration.
///
/// Checks required fields, number bounds, text length limits and select
/// membership, runs any extra clean functions, then deserialises the values
/// into `T`. Blank optional fields are passed to `T` as `null`, except text
/// fields which keep their empty string.
pub struct ConfigSchema<'r, T> {
	registry: &'r FieldRegistry,
	clean_functions: Vec<CleanFunction>,
	_output: PhantomData<fn() -> T>,
}

impl<'r, T: DeserializeOwned> ConfigSchema<'r, T> {
	pub fn new(registry: &'r FieldRegistry) -> Self {
		Self {
			registry,
			clean_functions: Vec::new(),
			_output: PhantomData,
		}
	}

	/// Add a cross-field check run after every field passed its own checks.
	///
	/// # Examples
	///
	/// ```
	/// use tutorlink_forms::{ConfigSchema, FieldConfig, FieldErrors, FieldRegistry, OptionsTable, ValidationSchema};
	/// use serde_json::json;
	///
	/// let fields = [
	///     FieldConfig::number("min_salary", "From"),
	///     FieldConfig::number("max_salary", "To"),
	/// ];
	/// let registry = FieldRegistry::new(&fields, &OptionsTable::new()).unwrap();
	///
	/// let schema = ConfigSchema::<serde_json::Value>::new(&registry).with_clean(|values| {
	///     let lo = values.get("min_salary").and_then(|v| v.as_f64());
	///     let hi = values.get("max_salary").and_then(|v| v.as_f64());
	///     match (lo, hi) {
	///         (Some(lo), Some(hi)) if lo > hi => Err(FieldErrors::from_iter([(
	///             "max_salary",
	///             "Must not be lower than the starting salary.",
	///         )])),
	///         _ => Ok(()),
	///     }
	/// });
	///
	/// let values = [("min_salary", json!(9000)), ("max_salary", json!(5000))]
	///     .into_iter()
	///     .map(|(k, v)| (k.to_string(), v))
	///     .collect();
	/// let errors = schema.validate(&values).unwrap_err();
	/// assert_eq!(errors.get("max_salary"), Some("Must not be lower than the starting salary."));
	/// ```
	pub fn with_clean<F>(mut self, clean: F) -> Self
	where
		F: Fn(&FormValues) -> Result<(), FieldErrors> + Send + Sync + 'static,
	{
		self.clean_functions.push(Box::new(clean));
		self
	}
}

fn is_blank(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::String(s) => s.trim().is_empty(),
		_ => false,
	}
}

fn format_bound(bound: f64) -> String {
	if bound.fract() == 0.0 && bound.abs() < 1e15 {
		format!("{}", bound as i64)
	} else {
		bound.to_string()
	}
}

impl<T: DeserializeOwned> ValidationSchema for ConfigSchema<'_, T> {
	type Output = T;

	fn validate(&self, values: &FormValues) -> Result<T, FieldErrors> {
		let mut errors = FieldErrors::new();
		let mut cleaned = Map::new();

		for (field, options) in self.registry.iter() {
			let name = field.name();
			let value = values.get(name).cloned().unwrap_or(Value::Null);

			if is_blank(&value) {
				if field.is_required() {
					errors.insert(name, REQUIRED_MESSAGE);
				} else {
					let blank = match field.kind() {
						FieldKind::Text { .. } | FieldKind::Textarea { .. } => {
							Value::String(String::new())
						}
						FieldKind::Number { .. } | FieldKind::Select { .. } => Value::Null,
					};
					cleaned.insert(name.to_string(), blank);
				}
				continue;
			}

			match field.kind() {
				FieldKind::Text { max_length } | FieldKind::Textarea { max_length, .. } => {
					let Some(text) = value.as_str() else {
						errors.insert(name, "Enter a valid value.");
						continue;
					};
					let count = text.chars().count();
					if let Some(limit) = max_length
						&& count > limit
					{
						errors.insert(
							name,
							format!(
								"Ensure this value has at most {} characters (it has {}).",
								limit, count
							),
						);
						continue;
					}
				}
				FieldKind::Number { min, max, integer } => {
					let Some(number) = value.as_f64() else {
						errors.insert(name, NUMBER_MESSAGE);
						continue;
					};
					if integer && number.fract() != 0.0 {
						errors.insert(name, WHOLE_NUMBER_MESSAGE);
						continue;
					}
					if let Some(min) = min
						&& number < min
					{
						errors.insert(
							name,
							format!(
								"Ensure this value is greater than or equal to {}.",
								format_bound(min)
							),
						);
						continue;
					}
					if let Some(max) = max
						&& number > max
					{
						errors.insert(
							name,
							format!(
								"Ensure this value is less than or equal to {}.",
								format_bound(max)
							),
						);
						continue;
					}
					if integer && !value.is_i64() && !value.is_u64() && number.abs() < 9.0e15 {
						cleaned.insert(name.to_string(), Value::from(number as i64));
						continue;
					}
				}
				FieldKind::Select { .. } => {
					let chosen = value.as_str().unwrap_or_default();
					if !options.iter().any(|o| o.value == chosen) {
						errors.insert(
							name,
							format!(
								"Select a valid choice. {} is not one of the available choices.",
								value
							),
						);
						continue;
					}
				}
			}

			cleaned.insert(name.to_string(), value);
		}

		if !errors.is_empty() {
			return Err(errors);
		}

		let cleaned_values: FormValues = cleaned.clone().into_iter().collect();
		for clean in &self.clean_functions {
			if let Err(e) = clean(&cleaned_values) {
				errors.extend(e);
			}
		}
		if !errors.is_empty() {
			return Err(errors);
		}

		serde_json::from_value(Value::Object(cleaned)).map_err(|e| {
			tracing::warn!(error = %e, "validated form values do not match the output type");
			FieldErrors::from_iter([(ALL_FIELDS_KEY, INVALID_DATA_MESSAGE)])
		})
	}
}
