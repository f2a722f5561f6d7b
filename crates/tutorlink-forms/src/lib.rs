//! Declarative forms for tutorlink
//!
//! Forms are described by static [`FieldConfig`] lists. A list is checked once
//! against an [`OptionsTable`] when a [`FieldRegistry`] is built; after that,
//! rendering and validation cannot hit configuration errors.
//!
//! ## Flow
//!
//! ```text
//! &[FieldConfig] + OptionsTable ──► FieldRegistry::new ──► Form::mount
//!                                                            │
//!                        FieldBinding::write  ◄── keystrokes ┤
//!                        FieldRenderer::render ──► controls  │
//!                        Form::submit(schema, handler) ◄─────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use tutorlink_forms::{
//!     ConfigSchema, FieldConfig, FieldRegistry, Form, OptionsTable, SelectOption, SubmitOutcome,
//! };
//!
//! static MEDIUMS: &[SelectOption] = &[
//!     SelectOption::new("bangla", "Bangla"),
//!     SelectOption::new("english", "English"),
//! ];
//! static FIELDS: &[FieldConfig] = &[
//!     FieldConfig::text("subject", "Subject").required(),
//!     FieldConfig::select("medium", "Medium", "mediums").required(),
//!     FieldConfig::number("salary", "Monthly salary").min(0.0),
//! ];
//!
//! #[derive(serde::Deserialize)]
//! struct Post {
//!     subject: String,
//!     medium: String,
//!     salary: Option<u32>,
//! }
//!
//! let options = OptionsTable::new().with("mediums", MEDIUMS);
//! let registry = FieldRegistry::new(FIELDS, &options).unwrap();
//!
//! let mut form = Form::mount(&registry);
//! form.write("subject", "Physics").unwrap();
//! form.write("medium", "english").unwrap();
//! form.write("salary", "8000").unwrap();
//!
//! let mut submitted = None;
//! let outcome = form.submit(&ConfigSchema::<Post>::new(&registry), |post| submitted = Some(post));
//!
//! assert_eq!(outcome, SubmitOutcome::Submitted);
//! let post = submitted.unwrap();
//! assert_eq!(post.subject, "Physics");
//! assert_eq!(post.medium, "english");
//! assert_eq!(post.salary, Some(8000));
//! ```

pub mod binding;
pub mod field;
pub mod form;
pub mod options;
pub mod registry;
pub mod render;
pub mod schema;
pub mod state;

pub use binding::{FieldBinding, FieldView, WriteError};
pub use field::{FieldConfig, FieldKind};
pub use form::{Form, SubmitOutcome};
pub use options::{OptionsTable, SelectOption};
pub use registry::{ConfigurationError, FieldRegistry};
pub use render::{Control, FieldRenderer, InputType, RenderedField, html_escape};
pub use schema::{ConfigSchema, ValidationSchema};
pub use state::{ALL_FIELDS_KEY, FieldErrors, FormState, FormValues};
