//! Field lists and typed outputs of the marketplace's forms

use serde::{Deserialize, Serialize};
use tutorlink_forms::{ConfigSchema, FieldConfig, FieldErrors, FieldRegistry, FormValues};

pub static TUITION_POST_FIELDS: &[FieldConfig] = &[
	FieldConfig::select("subject", "Subject", "subjects").required(),
	FieldConfig::select("class_level", "Class", "class_levels").required(),
	FieldConfig::select("medium", "Medium", "mediums").required(),
	FieldConfig::select("district", "District", "districts").required(),
	FieldConfig::text("location", "Area / Location")
		.placeholder("e.g. Dhanmondi 27")
		.max_length(120)
		.required(),
	FieldConfig::select("days_per_week", "Days per week", "days_per_week").required(),
	FieldConfig::number("salary", "Monthly salary (BDT)")
		.integer()
		.min(1000.0)
		.max(100000.0)
		.required(),
	FieldConfig::select("tutor_gender", "Preferred tutor", "tutor_gender").required(),
	FieldConfig::textarea("details", "Additional details")
		.rows(5)
		.max_length(1000)
		.description("Schedule, syllabus or anything a tutor should know."),
];

pub static TUTOR_PROFILE_FIELDS: &[FieldConfig] = &[
	FieldConfig::text("full_name", "Full name").max_length(80).required(),
	FieldConfig::text("institution", "Institution")
		.placeholder("e.g. University of Dhaka")
		.max_length(120)
		.required(),
	FieldConfig::select("subject_expertise", "Subject expertise", "subjects").required(),
	FieldConfig::number("experience_years", "Years of experience")
		.integer()
		.min(0.0)
		.max(50.0)
		.required(),
	FieldConfig::select("district", "District", "districts").required(),
	FieldConfig::number("expected_salary", "Expected salary (BDT)")
		.integer()
		.min(0.0)
		.max(1_000_000.0)
		.description("Leave blank if negotiable."),
	FieldConfig::textarea("bio", "About you").rows(6).max_length(2000),
];

pub static TUITION_REVIEW_FIELDS: &[FieldConfig] = &[
	FieldConfig::select("status", "Status", "tuition_status").required(),
	FieldConfig::textarea("admin_note", "Note to the student")
		.rows(3)
		.max_length(500)
		.description("Required when rejecting a post."),
];

pub static SIGN_IN_FIELDS: &[FieldConfig] = &[
	FieldConfig::text("email", "Email")
		.placeholder("you@example.com")
		.max_length(254)
		.required(),
	FieldConfig::text("password", "Password").required(),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TutorGender {
	Any,
	Male,
	Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TuitionStatus {
	Pending,
	Approved,
	Rejected,
}

/// A student's request for a tutor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuitionPost {
	pub subject: String,
	pub class_level: String,
	pub medium: String,
	pub district: String,
	pub location: String,
	pub days_per_week: String,
	pub salary: u32,
	pub tutor_gender: TutorGender,
	pub details: String,
}

impl TuitionPost {
	pub fn days(&self) -> Option<u8> {
		self.days_per_week.parse().ok()
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorProfile {
	pub full_name: String,
	pub institution: String,
	pub subject_expertise: String,
	pub experience_years: u8,
	pub district: String,
	pub expected_salary: Option<u32>,
	pub bio: String,
}

/// An admin's verdict on a tuition post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuitionReview {
	pub status: TuitionStatus,
	pub admin_note: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInRequest {
	pub email: String,
	pub password: String,
}

impl std::fmt::Debug for SignInRequest {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SignInRequest")
			.field("email", &self.email)
			.field("password", &"[REDACTED]")
			.finish()
	}
}

fn text<'a>(values: &'a FormValues, name: &str) -> &'a str {
	values.get(name).and_then(|v| v.as_str()).unwrap_or_default()
}

pub(crate) fn tuition_post_schema(registry: &FieldRegistry) -> ConfigSchema<'_, TuitionPost> {
	ConfigSchema::new(registry)
}

pub(crate) fn tutor_profile_schema(registry: &FieldRegistry) -> ConfigSchema<'_, TutorProfile> {
	ConfigSchema::new(registry)
}

pub(crate) fn tuition_review_schema(registry: &FieldRegistry) -> ConfigSchema<'_, TuitionReview> {
	ConfigSchema::new(registry).with_clean(|values| {
		if text(values, "status") == "rejected" && text(values, "admin_note").trim().is_empty() {
			return Err(FieldErrors::from_iter([(
				"admin_note",
				"Give the student a reason for the rejection.",
			)]));
		}
		Ok(())
	})
}

pub(crate) fn sign_in_schema(registry: &FieldRegistry) -> ConfigSchema<'_, SignInRequest> {
	ConfigSchema::new(registry).with_clean(|values| {
		let email = text(values, "email").trim();
		let valid = email
			.split_once('@')
			.is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
		if !valid {
			return Err(FieldErrors::from_iter([(
				"email",
				"Enter a valid email address.",
			)]));
		}
		Ok(())
	})
}
