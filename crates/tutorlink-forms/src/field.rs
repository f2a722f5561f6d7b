//! Static field configuration

/// Input kind of a field, with the hints that only make sense for that kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
	/// Single-line text.
	Text { max_length: Option<usize> },
	/// Single-line numeric input; written values are coerced to JSON numbers.
	/// `integer` rejects values with a fractional part.
	Number {
		min: Option<f64>,
		max: Option<f64>,
		integer: bool,
	},
	/// Multi-line text.
	Textarea { rows: u32, max_length: Option<usize> },
	/// Closed choice over the options list registered under `options_ref`.
	Select { options_ref: &'static str },
}

impl FieldKind {
	/// Short tag used in logs and HTML data attributes.
	pub fn tag(&self) -> &'static str {
		match self {
			FieldKind::Text { .. } => "text",
			FieldKind::Number { .. } => "number",
			FieldKind::Textarea { .. } => "textarea",
			FieldKind::Select { .. } => "select",
		}
	}
}

/// Default number of visible rows for textareas.
pub const DEFAULT_TEXTAREA_ROWS: u32 = 4;

/// Description of one form field.
///
/// Field lists are meant to be declared as `static` slices, so every builder is
/// a `const fn`.
///
/// # Examples
///
/// ```
/// use tutorlink_forms::{FieldConfig, FieldKind};
///
/// static SALARY: FieldConfig = FieldConfig::number("salary", "Salary (BDT)")
///     .placeholder("e.g. 6000")
///     .min(1000.0)
///     .required();
///
/// assert_eq!(SALARY.name(), "salary");
/// assert!(SALARY.is_required());
/// assert_eq!(
///     SALARY.kind(),
///     FieldKind::Number { min: Some(1000.0), max: None, integer: false }
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
	name: &'static str,
	label: &'static str,
	kind: FieldKind,
	placeholder: Option<&'static str>,
	description: Option<&'static str>,
	required: bool,
}

impl FieldConfig {
	const fn with_kind(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
		Self {
			name,
			label,
			kind,
			placeholder: None,
			description: None,
			required: false,
		}
	}

	pub const fn text(name: &'static str, label: &'static str) -> Self {
		Self::with_kind(name, label, FieldKind::Text { max_length: None })
	}

	pub const fn number(name: &'static str, label: &'static str) -> Self {
		Self::with_kind(
			name,
			label,
			FieldKind::Number {
				min: None,
				max: None,
				integer: false,
			},
		)
	}

	pub const fn textarea(name: &'static str, label: &'static str) -> Self {
		Self::with_kind(
			name,
			label,
			FieldKind::Textarea {
				rows: DEFAULT_TEXTAREA_ROWS,
				max_length: None,
			},
		)
	}

	pub const fn select(name: &'static str, label: &'static str, options_ref: &'static str) -> Self {
		Self::with_kind(name, label, FieldKind::Select { options_ref })
	}

	pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
		self.placeholder = Some(placeholder);
		self
	}

	pub const fn description(mut self, description: &'static str) -> Self {
		self.description = Some(description);
		self
	}

	pub const fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Lower bound for number fields. Ignored for other kinds.
	pub const fn min(mut self, value: f64) -> Self {
		if let FieldKind::Number { max, integer, .. } = self.kind {
			self.kind = FieldKind::Number {
				min: Some(value),
				max,
				integer,
			};
		}
		self
	}

	/// Upper bound for number fields. Ignored for other kinds.
	pub const fn max(mut self, value: f64) -> Self {
		if let FieldKind::Number { min, integer, .. } = self.kind {
			self.kind = FieldKind::Number {
				min,
				max: Some(value),
				integer,
			};
		}
		self
	}

	/// Accept whole numbers only. Ignored for non-number kinds.
	pub const fn integer(mut self) -> Self {
		if let FieldKind::Number { min, max, .. } = self.kind {
			self.kind = FieldKind::Number {
				min,
				max,
				integer: true,
			};
		}
		self
	}

	/// Character limit for text and textarea fields. Ignored for other kinds.
	pub const fn max_length(mut self, limit: usize) -> Self {
		match self.kind {
			FieldKind::Text { .. } => {
				self.kind = FieldKind::Text {
					max_length: Some(limit),
				}
			}
			FieldKind::Textarea { rows, .. } => {
				self.kind = FieldKind::Textarea {
					rows,
					max_length: Some(limit),
				}
			}
			FieldKind::Number { .. } | FieldKind::Select { .. } => {}
		}
		self
	}

	/// Visible rows for textarea fields. Ignored for other kinds.
	pub const fn rows(mut self, rows: u32) -> Self {
		if let FieldKind::Textarea { max_length, .. } = self.kind {
			self.kind = FieldKind::Textarea { rows, max_length };
		}
		self
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn label(&self) -> &'static str {
		self.label
	}

	pub fn kind(&self) -> FieldKind {
		self.kind
	}

	pub fn placeholder_text(&self) -> Option<&'static str> {
		self.placeholder
	}

	pub fn description_text(&self) -> Option<&'static str> {
		self.description
	}

	pub fn is_required(&self) -> bool {
		self.required
	}

	/// Options table key for select fields.
	pub fn options_ref(&self) -> Option<&'static str> {
		match self.kind {
			FieldKind::Select { options_ref } => Some(options_ref),
			_ => None,
		}
	}
}
