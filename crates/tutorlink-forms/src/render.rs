//! Field rendering
//!
//! [`FieldRenderer`] turns a [`FieldView`] into a declarative [`RenderedField`].
//! The dispatch over [`FieldKind`] is exhaustive, so adding a kind does not
//! compile until the renderer handles it.

use crate::binding::FieldView;
use crate::field::FieldKind;
use crate::options::SelectOption;
use std::fmt::Write as _;

/// `type` attribute of a single-line input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
	Text,
	Number,
}

impl InputType {
	pub fn as_str(&self) -> &'static str {
		match self {
			InputType::Text => "text",
			InputType::Number => "number",
		}
	}
}

/// The interactive control chosen for a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
	Input {
		input_type: InputType,
		value: String,
	},
	Textarea {
		rows: u32,
		value: String,
	},
	Select {
		options: &'static [SelectOption],
		selected: Option<String>,
	},
}

/// Output of rendering one field: the control plus its caption, hints and error.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedField {
	pub name: &'static str,
	pub label: &'static str,
	pub placeholder: Option<&'static str>,
	pub description: Option<&'static str>,
	pub required: bool,
	pub control: Control,
	pub error: Option<String>,
	error_class: &'static str,
	help_class: &'static str,
}

impl RenderedField {
	/// HTML `id` of the control, referenced by the label.
	pub fn id(&self) -> String {
		format!("id_{}", self.name)
	}

	/// Render as an HTML fragment.
	pub fn to_html(&self) -> String {
		let id = self.id();
		let mut html = String::new();

		let kind = match self.control {
			Control::Input { input_type, .. } => input_type.as_str(),
			Control::Textarea { .. } => "textarea",
			Control::Select { .. } => "select",
		};
		let _ = write!(html, r#"<div class="form-field" data-kind="{}">"#, kind);
		let _ = write!(
			html,
			r#"<label for="{}">{}</label>"#,
			html_escape(&id),
			html_escape(self.label)
		);

		let mut attrs = format!(r#" name="{}" id="{}""#, html_escape(self.name), html_escape(&id));
		if let Some(placeholder) = self.placeholder
			&& !matches!(self.control, Control::Select { .. })
		{
			let _ = write!(attrs, r#" placeholder="{}""#, html_escape(placeholder));
		}
		if self.required {
			attrs.push_str(" required");
		}
		if self.error.is_some() {
			attrs.push_str(r#" aria-invalid="true""#);
		}

		match &self.control {
			Control::Input { input_type, value } => {
				let _ = write!(
					html,
					r#"<input type="{}"{} value="{}" />"#,
					input_type.as_str(),
					attrs,
					html_escape(value)
				);
			}
			Control::Textarea { rows, value } => {
				let _ = write!(
					html,
					r#"<textarea{} rows="{}">{}</textarea>"#,
					attrs,
					rows,
					html_escape(value)
				);
			}
			Control::Select { options, selected } => {
				let _ = write!(html, "<select{}>", attrs);
				if let Some(placeholder) = self.placeholder {
					let _ = write!(html, r#"<option value="">{}</option>"#, html_escape(placeholder));
				}
				for option in options.iter() {
					html.push_str("<option");
					let _ = write!(html, r#" value="{}""#, html_escape(option.value));
					if selected.as_deref() == Some(option.value) {
						html.push_str(" selected");
					}
					html.push('>');
					html.push_str(&html_escape(option.label));
					html.push_str("</option>");
				}
				html.push_str("</select>");
			}
		}

		if let Some(description) = self.description {
			let _ = write!(
				html,
				r#"<small class="{}">{}</small>"#,
				self.help_class,
				html_escape(description)
			);
		}
		if let Some(error) = &self.error {
			let _ = write!(
				html,
				r#"<p class="{}" role="alert">{}</p>"#,
				self.error_class,
				html_escape(error)
			);
		}

		html.push_str("</div>");
		html
	}
}

/// Maps field configuration to controls.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tutorlink_forms::{Control, FieldConfig, FieldRenderer, FieldView, InputType};
///
/// let config = FieldConfig::number("salary", "Salary");
/// let value = json!(6000);
/// let rendered = FieldRenderer::new().render(FieldView {
///     config: &config,
///     options: &[],
///     value: &value,
///     error: Some("Ensure this value is greater than or equal to 8000."),
/// });
///
/// assert_eq!(
///     rendered.control,
///     Control::Input { input_type: InputType::Number, value: "6000".to_string() }
/// );
/// assert_eq!(rendered.to_html().matches("greater than or equal to 8000").count(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FieldRenderer {
	error_class: &'static str,
	help_class: &'static str,
	non_field_class: &'static str,
}

impl Default for FieldRenderer {
	fn default() -> Self {
		Self::new()
	}
}

impl FieldRenderer {
	pub fn new() -> Self {
		Self {
			error_class: "field-error",
			help_class: "help-text",
			non_field_class: "non-field-errors",
		}
	}

	/// CSS class of the error paragraph.
	pub fn error_class(mut self, class: &'static str) -> Self {
		self.error_class = class;
		self
	}

	/// CSS class of the description element.
	pub fn help_class(mut self, class: &'static str) -> Self {
		self.help_class = class;
		self
	}

	/// CSS class of the block holding errors that belong to no single field.
	pub fn non_field_class(mut self, class: &'static str) -> Self {
		self.non_field_class = class;
		self
	}

	/// Render form-level messages as one alert block; empty when there are none.
	///
	/// # Examples
	///
	/// ```
	/// use tutorlink_forms::FieldRenderer;
	///
	/// let html = FieldRenderer::new().render_non_field_errors(&["Try again."]);
	/// assert_eq!(
	///     html,
	///     r#"<div class="non-field-errors" role="alert"><p class="field-error">Try again.</p></div>"#
	/// );
	/// assert!(FieldRenderer::new().render_non_field_errors(&[]).is_empty());
	/// ```
	pub fn render_non_field_errors(&self, messages: &[&str]) -> String {
		if messages.is_empty() {
			return String::new();
		}
		let mut html = format!(r#"<div class="{}" role="alert">"#, self.non_field_class);
		for message in messages {
			let _ = write!(
				html,
				r#"<p class="{}">{}</p>"#,
				self.error_class,
				html_escape(message)
			);
		}
		html.push_str("</div>");
		html
	}

	pub fn render(&self, view: FieldView<'_>) -> RenderedField {
		let config = view.config;
		let control = match config.kind() {
			FieldKind::Text { .. } => Control::Input {
				input_type: InputType::Text,
				value: view.display_value(),
			},
			FieldKind::Number { .. } => Control::Input {
				input_type: InputType::Number,
				value: view.display_value(),
			},
			FieldKind::Textarea { rows, .. } => Control::Textarea {
				rows,
				value: view.display_value(),
			},
			FieldKind::Select { .. } => Control::Select {
				options: view.options,
				selected: view.value.as_str().map(str::to_string),
			},
		};

		RenderedField {
			name: config.name(),
			label: config.label(),
			placeholder: config.placeholder_text(),
			description: config.description_text(),
			required: config.is_required(),
			control,
			error: view.error.map(str::to_string),
			error_class: self.error_class,
			help_class: self.help_class,
		}
	}
}

/// HTML escape utility
pub fn html_escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::FieldConfig;
	use rstest::rstest;
	use serde_json::{Value, json};

	static DISTRICTS: &[SelectOption] = &[
		SelectOption::new("dhaka", "Dhaka"),
		SelectOption::new("sylhet", "Sylhet"),
	];

	fn view<'a>(config: &'a FieldConfig, value: &'a Value, error: Option<&'a str>) -> FieldView<'a> {
		FieldView {
			config,
			options: if config.options_ref().is_some() { DISTRICTS } else { &[] },
			value,
			error,
		}
	}

	#[rstest]
	fn test_text_renders_single_line_input() {
		let config = FieldConfig::text("location", "Location").placeholder("Area, road");
		let value = json!("Mirpur 10");
		let rendered = FieldRenderer::new().render(view(&config, &value, None));

		assert_eq!(
			rendered.to_html(),
			concat!(
				r#"<div class="form-field" data-kind="text">"#,
				r#"<label for="id_location">Location</label>"#,
				r#"<input type="text" name="location" id="id_location" placeholder="Area, road" value="Mirpur 10" />"#,
				"</div>"
			)
		);
	}

	#[rstest]
	fn test_textarea_rows_and_escaping() {
		let config = FieldConfig::textarea("details", "Details").rows(3);
		let value = json!("<b>2 kids</b>");
		let html = FieldRenderer::new().render(view(&config, &value, None)).to_html();

		assert!(html.contains(r#"<textarea name="details" id="id_details" rows="3">&lt;b&gt;2 kids&lt;/b&gt;</textarea>"#));
	}

	#[rstest]
	fn test_select_marks_selected_option() {
		let config = FieldConfig::select("district", "District", "districts")
			.placeholder("Choose a district")
			.required();
		let value = json!("sylhet");
		let rendered = FieldRenderer::new().render(view(&config, &value, None));

		assert_eq!(
			rendered.control,
			Control::Select {
				options: DISTRICTS,
				selected: Some("sylhet".to_string())
			}
		);
		let html = rendered.to_html();
		assert!(html.contains(r#"<select name="district" id="id_district" required>"#));
		assert!(html.contains(r#"<option value="">Choose a district</option>"#));
		assert!(html.contains(r#"<option value="dhaka">Dhaka</option>"#));
		assert!(html.contains(r#"<option value="sylhet" selected>Sylhet</option>"#));
	}

	#[rstest]
	fn test_error_rendered_exactly_once() {
		let config = FieldConfig::text("subject", "Subject").required();
		let value = json!("");
		let html = FieldRenderer::new()
			.render(view(&config, &value, Some("This field is required.")))
			.to_html();

		assert_eq!(html.matches("This field is required.").count(), 1);
		assert!(html.contains(r#"<p class="field-error" role="alert">This field is required.</p>"#));
		assert!(html.contains(r#"aria-invalid="true""#));
	}

	#[rstest]
	fn test_no_error_renders_no_error_element() {
		let config = FieldConfig::text("subject", "Subject");
		let value = json!("Math");
		let rendered = FieldRenderer::new().render(view(&config, &value, None));

		assert!(rendered.error.is_none());
		let html = rendered.to_html();
		assert!(!html.contains("field-error"));
		assert!(!html.contains("role=\"alert\""));
	}

	#[rstest]
	fn test_custom_classes_and_description() {
		let config = FieldConfig::number("experience_years", "Experience")
			.description("Whole years of tutoring");
		let value = Value::Null;
		let html = FieldRenderer::new()
			.error_class("invalid-feedback")
			.help_class("form-text")
			.render(view(&config, &value, Some("Enter a number.")))
			.to_html();

		assert!(html.contains(r#"<small class="form-text">Whole years of tutoring</small>"#));
		assert!(html.contains(r#"<p class="invalid-feedback" role="alert">Enter a number.</p>"#));
		assert!(html.contains(r#"type="number""#));
		assert!(html.contains(r#"value="""#));
	}

	#[rstest]
	fn test_html_escape() {
		assert_eq!(html_escape("<script>"), "&lt;script&gt;");
		assert_eq!(html_escape("A & B"), "A &amp; B");
		assert_eq!(html_escape(r#"He said "hi""#), "He said &quot;hi&quot;");
	}
}
