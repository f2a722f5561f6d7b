//! The marketplace's forms, option lists and routes
//!
//! [`Catalog::load`] validates every form against the option table once at
//! startup. A loaded catalog can mount any of its forms without further
//! configuration checks.

mod forms;
mod options;
mod routes;

pub use forms::{
	SIGN_IN_FIELDS, SignInRequest, TUITION_POST_FIELDS, TUITION_REVIEW_FIELDS,
	TUTOR_PROFILE_FIELDS, TuitionPost, TuitionReview, TuitionStatus, TutorGender, TutorProfile,
};
pub use options::{
	CLASS_LEVELS, DAYS_PER_WEEK, DISTRICTS, MEDIUMS, SUBJECTS, TUITION_STATUS, TUTOR_GENDER,
	options_table,
};
pub use routes::router;

use tutorlink_conf::AccessSettings;
use tutorlink_forms::{ConfigSchema, ConfigurationError, FieldConfig, FieldRegistry, OptionsTable};
use tutorlink_pages::RouteAccessController;

/// A form of the catalog failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid configuration for form {form}: {source}")]
pub struct CatalogError {
	pub form: &'static str,
	#[source]
	pub source: ConfigurationError,
}

/// Validated registries for every form of the marketplace.
#[derive(Debug, Clone)]
pub struct Catalog {
	options: OptionsTable,
	tuition_post: FieldRegistry,
	tutor_profile: FieldRegistry,
	tuition_review: FieldRegistry,
	sign_in: FieldRegistry,
}

fn registry(
	form: &'static str,
	fields: &[FieldConfig],
	options: &OptionsTable,
) -> Result<FieldRegistry, CatalogError> {
	FieldRegistry::new(fields, options).map_err(|source| {
		tracing::error!(form, error = %source, "form configuration rejected");
		CatalogError { form, source }
	})
}

impl Catalog {
	/// Validate all forms against [`options_table`].
	pub fn load() -> Result<Self, CatalogError> {
		let options = options_table();
		let catalog = Self {
			tuition_post: registry("tuition_post", TUITION_POST_FIELDS, &options)?,
			tutor_profile: registry("tutor_profile", TUTOR_PROFILE_FIELDS, &options)?,
			tuition_review: registry("tuition_review", TUITION_REVIEW_FIELDS, &options)?,
			sign_in: registry("sign_in", SIGN_IN_FIELDS, &options)?,
			options,
		};
		tracing::info!(
			forms = 4,
			option_lists = catalog.options.len(),
			"form catalog loaded"
		);
		Ok(catalog)
	}

	pub fn options(&self) -> &OptionsTable {
		&self.options
	}

	/// Registry of the form called `name`.
	pub fn form(&self, name: &str) -> Option<&FieldRegistry> {
		match name {
			"tuition_post" => Some(&self.tuition_post),
			"tutor_profile" => Some(&self.tutor_profile),
			"tuition_review" => Some(&self.tuition_review),
			"sign_in" => Some(&self.sign_in),
			_ => None,
		}
	}

	/// All forms with their names.
	pub fn forms(&self) -> [(&'static str, &FieldRegistry); 4] {
		[
			("tuition_post", &self.tuition_post),
			("tutor_profile", &self.tutor_profile),
			("tuition_review", &self.tuition_review),
			("sign_in", &self.sign_in),
		]
	}

	pub fn tuition_post(&self) -> &FieldRegistry {
		&self.tuition_post
	}

	pub fn tutor_profile(&self) -> &FieldRegistry {
		&self.tutor_profile
	}

	pub fn tuition_review(&self) -> &FieldRegistry {
		&self.tuition_review
	}

	pub fn sign_in(&self) -> &FieldRegistry {
		&self.sign_in
	}

	pub fn tuition_post_schema(&self) -> ConfigSchema<'_, TuitionPost> {
		forms::tuition_post_schema(&self.tuition_post)
	}

	pub fn tutor_profile_schema(&self) -> ConfigSchema<'_, TutorProfile> {
		forms::tutor_profile_schema(&self.tutor_profile)
	}

	/// Requires a note when a post is rejected.
	pub fn tuition_review_schema(&self) -> ConfigSchema<'_, TuitionReview> {
		forms::tuition_review_schema(&self.tuition_review)
	}

	pub fn sign_in_schema(&self) -> ConfigSchema<'_, SignInRequest> {
		forms::sign_in_schema(&self.sign_in)
	}

	/// Access controller over the marketplace's [`router`].
	pub fn access_controller(&self, settings: AccessSettings) -> RouteAccessController {
		RouteAccessController::new(router(), settings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_catalog_loads() {
		let catalog = Catalog::load().unwrap();
		assert_eq!(catalog.tuition_post().len(), TUITION_POST_FIELDS.len());
		assert_eq!(catalog.options().len(), 7);
	}

	#[rstest]
	#[case("tuition_post")]
	#[case("tutor_profile")]
	#[case("tuition_review")]
	#[case("sign_in")]
	fn test_form_lookup(#[case] name: &str) {
		let catalog = Catalog::load().unwrap();
		assert!(catalog.form(name).is_some());
	}

	#[rstest]
	fn test_unknown_form() {
		assert!(Catalog::load().unwrap().form("payment").is_none());
	}

	#[rstest]
	fn test_catalog_error_names_form() {
		let err = registry("broken", &[FieldConfig::select("x", "X", "nope")], &OptionsTable::new())
			.unwrap_err();
		assert_eq!(err.form, "broken");
		assert_eq!(
			err.to_string(),
			"Invalid configuration for form broken: Field x references unknown options list nope"
		);
	}
}
