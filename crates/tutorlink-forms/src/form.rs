//! Mounted forms and submission

use crate::binding::{FieldBinding, FieldView, WriteError};
use crate::registry::FieldRegistry;
use crate::render::{FieldRenderer, RenderedField};
use crate::schema::ValidationSchema;
use crate::state::{ALL_FIELDS_KEY, FieldErrors, FormState, FormValues};

/// Result of [`Form::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// The handler received the validated data and the form was reset.
	Submitted,
	/// Validation failed; errors are now shown next to their fields.
	Invalid(FieldErrors),
}

impl SubmitOutcome {
	pub fn is_submitted(&self) -> bool {
		matches!(self, SubmitOutcome::Submitted)
	}
}

/// A form mounted from a [`FieldRegistry`], owning its [`FormState`].
#[derive(Debug, Clone)]
pub struct Form<'r> {
	registry: &'r FieldRegistry,
	state: FormState,
}

impl<'r> Form<'r> {
	/// Mount with kind defaults.
	pub fn mount(registry: &'r FieldRegistry) -> Self {
		Self {
			registry,
			state: FormState::mount(registry),
		}
	}

	/// Mount with initial values, e.g. when editing an existing profile.
	pub fn mount_with_initial(registry: &'r FieldRegistry, initial: FormValues) -> Self {
		Self {
			registry,
			state: FormState::mount_with_initial(registry, initial),
		}
	}

	pub fn registry(&self) -> &'r FieldRegistry {
		self.registry
	}

	pub fn state(&self) -> &FormState {
		&self.state
	}

	/// Exclusive binding to the named field.
	pub fn bind(&mut self, name: &str) -> Result<FieldBinding<'_>, WriteError> {
		let registry = self.registry;
		let index = registry
			.position(name)
			.ok_or_else(|| WriteError::UnknownField {
				name: name.to_string(),
			})?;
		Ok(FieldBinding::new(
			&registry.fields()[index],
			registry.options_at(index),
			&mut self.state,
		))
	}

	/// Shorthand for `bind(name)?.write(raw)`.
	pub fn write(&mut self, name: &str, raw: &str) -> Result<(), WriteError> {
		self.bind(name)?.write(raw)
	}

	/// Read-only views of every field in declaration order.
	pub fn views(&self) -> impl Iterator<Item = FieldView<'_>> + '_ {
		static NULL: serde_json::Value = serde_json::Value::Null;

		self.registry.iter().map(|(config, options)| FieldView {
			config,
			options,
			value: self.state.value(config.name()).unwrap_or(&NULL),
			error: self.state.error(config.name()),
		})
	}

	/// Render one control per field, in declaration order.
	pub fn render(&self, renderer: &FieldRenderer) -> Vec<RenderedField> {
		self.views().map(|view| renderer.render(view)).collect()
	}

	/// Errors not shown next to a field: the non-field error first, then
	/// messages stored under names the registry does not know.
	pub fn non_field_errors(&self) -> Vec<&str> {
		let errors = self.state.errors();
		errors
			.non_field()
			.into_iter()
			.chain(
				errors
					.iter()
					.filter(|(name, _)| {
						*name != ALL_FIELDS_KEY && self.registry.field(name).is_none()
					})
					.map(|(_, message)| message),
			)
			.collect()
	}

	/// Render the whole form as HTML: form-level errors, then every field.
	pub fn render_html(&self, renderer: &FieldRenderer) -> String {
		let mut html = renderer.render_non_field_errors(&self.non_field_errors());
		for field in self.render(renderer) {
			html.push_str(&field.to_html());
		}
		html
	}

	/// Validate the current values and hand valid data to `handler`.
	///
	/// On failure the errors are stored for display and `handler` is not
	/// called. On success the errors are cleared, `handler` runs once, and the
	/// form is reset to its mount-time values.
	pub fn submit<S, H>(&mut self, schema: &S, handler: H) -> SubmitOutcome
	where
		S: ValidationSchema,
		H: FnOnce(S::Output),
	{
		match schema.validate(self.state.values()) {
			Ok(data) => {
				tracing::debug!(fields = self.registry.len(), "form submitted");
				self.state.clear_errors();
				handler(data);
				self.state.reset();
				SubmitOutcome::Submitted
			}
			Err(errors) => {
				tracing::debug!(invalid = errors.len(), "form rejected by schema");
				self.state.set_errors(errors.clone());
				SubmitOutcome::Invalid(errors)
			}
		}
	}
}
