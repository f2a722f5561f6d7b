//! Read/write bindings between a field and its form state

use crate::field::{FieldConfig, FieldKind};
use crate::options::SelectOption;
use crate::state::FormState;
use serde_json::{Number, Value};

/// Rejected write-back.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WriteError {
	#[error("Unknown field: {name}")]
	UnknownField { name: String },

	#[error("{value} is not an option of field {field}")]
	NotAnOption { field: String, value: String },
}

static NULL: Value = Value::Null;

/// Convert raw numeric input to a JSON value.
///
/// Blank input becomes `null`. Input that is not a finite number is kept as a
/// string so validation can report it.
pub(crate) fn coerce_number(raw: &str) -> Value {
	let trimmed = raw.trim();
	if trimmed.is_empty() {
		return Value::Null;
	}
	if let Ok(int) = trimmed.parse::<i64>() {
		return Value::Number(int.into());
	}
	trimmed
		.parse::<f64>()
		.ok()
		.and_then(Number::from_f64)
		.map(Value::Number)
		.unwrap_or_else(|| Value::String(raw.to_string()))
}

/// Read-only snapshot of one field for rendering.
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
	pub config: &'a FieldConfig,
	pub options: &'static [SelectOption],
	pub value: &'a Value,
	pub error: Option<&'a str>,
}

impl FieldView<'_> {
	/// The value as it should appear inside the control.
	pub fn display_value(&self) -> String {
		match self.value {
			Value::Null => String::new(),
			Value::String(s) => s.clone(),
			other => other.to_string(),
		}
	}
}

/// Exclusive binding of one field to its [`FormState`] slot.
///
/// Obtained from [`Form::bind`](crate::Form::bind).
#[derive(Debug)]
pub struct FieldBinding<'a> {
	config: &'a FieldConfig,
	options: &'static [SelectOption],
	state: &'a mut FormState,
}

impl<'a> FieldBinding<'a> {
	pub(crate) fn new(
		config: &'a FieldConfig,
		options: &'static [SelectOption],
		state: &'a mut FormState,
	) -> Self {
		Self {
			config,
			options,
			state,
		}
	}

	pub fn config(&self) -> &FieldConfig {
		self.config
	}

	pub fn value(&self) -> &Value {
		self.state.value(self.config.name()).unwrap_or(&NULL)
	}

	pub fn error(&self) -> Option<&str> {
		self.state.error(self.config.name())
	}

	pub fn view(&self) -> FieldView<'_> {
		FieldView {
			config: self.config,
			options: self.options,
			value: self.value(),
			error: self.error(),
		}
	}

	/// Write raw control input back into the form state.
	///
	/// Number fields store a JSON number, select fields only accept one of
	/// their option values (or blank, which clears the choice).
	pub fn write(&mut self, raw: &str) -> Result<(), WriteError> {
		let value = match self.config.kind() {
			FieldKind::Text { .. } | FieldKind::Textarea { .. } => Value::String(raw.to_string()),
			FieldKind::Number { .. } => coerce_number(raw),
			FieldKind::Select { .. } => {
				if raw.is_empty() {
					Value::Null
				} else if self.options.iter().any(|o| o.value == raw) {
					Value::String(raw.to_string())
				} else {
					return Err(WriteError::NotAnOption {
						field: self.config.name().to_string(),
						value: raw.to_string(),
					});
				}
			}
		};

		tracing::trace!(field = self.config.name(), kind = self.config.kind().tag(), "write-back");

		if self.state.store(self.config.name(), value) {
			Ok(())
		} else {
			Err(WriteError::UnknownField {
				name: self.config.name().to_string(),
			})
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("42", json!(42))]
	#[case(" 7 ", json!(7))]
	#[case("-3", json!(-3))]
	#[case("4.5", json!(4.5))]
	#[case("", Value::Null)]
	#[case("   ", Value::Null)]
	#[case("forty", json!("forty"))]
	#[case("NaN", json!("NaN"))]
	#[case("inf", json!("inf"))]
	fn test_coerce_number(#[case] raw: &str, #[case] expected: Value) {
		assert_eq!(coerce_number(raw), expected);
	}

	#[rstest]
	fn test_display_value() {
		let config = FieldConfig::number("salary", "Salary");
		let number = json!(42);
		let view = FieldView {
			config: &config,
			options: &[],
			value: &number,
			error: None,
		};
		assert_eq!(view.display_value(), "42");

		let null = Value::Null;
		let view = FieldView { value: &null, ..view };
		assert_eq!(view.display_value(), "");
	}
}
