//! Option lists shared by the marketplace's select fields

use tutorlink_forms::{OptionsTable, SelectOption};

pub static DISTRICTS: &[SelectOption] = &[
	SelectOption::new("dhaka", "Dhaka"),
	SelectOption::new("chattogram", "Chattogram"),
	SelectOption::new("rajshahi", "Rajshahi"),
	SelectOption::new("khulna", "Khulna"),
	SelectOption::new("barishal", "Barishal"),
	SelectOption::new("sylhet", "Sylhet"),
	SelectOption::new("rangpur", "Rangpur"),
	SelectOption::new("mymensingh", "Mymensingh"),
	SelectOption::new("cumilla", "Cumilla"),
	SelectOption::new("gazipur", "Gazipur"),
	SelectOption::new("narayanganj", "Narayanganj"),
];

pub static CLASS_LEVELS: &[SelectOption] = &[
	SelectOption::new("class-1", "Class 1"),
	SelectOption::new("class-2", "Class 2"),
	SelectOption::new("class-3", "Class 3"),
	SelectOption::new("class-4", "Class 4"),
	SelectOption::new("class-5", "Class 5"),
	SelectOption::new("class-6", "Class 6"),
	SelectOption::new("class-7", "Class 7"),
	SelectOption::new("class-8", "Class 8"),
	SelectOption::new("class-9", "Class 9"),
	SelectOption::new("class-10", "Class 10"),
	SelectOption::new("class-11", "Class 11"),
	SelectOption::new("class-12", "Class 12"),
	SelectOption::new("hsc", "HSC"),
	SelectOption::new("admission", "Admission"),
];

pub static SUBJECTS: &[SelectOption] = &[
	SelectOption::new("bangla", "Bangla"),
	SelectOption::new("english", "English"),
	SelectOption::new("mathematics", "Mathematics"),
	SelectOption::new("higher-math", "Higher Mathematics"),
	SelectOption::new("physics", "Physics"),
	SelectOption::new("chemistry", "Chemistry"),
	SelectOption::new("biology", "Biology"),
	SelectOption::new("ict", "ICT"),
	SelectOption::new("accounting", "Accounting"),
	SelectOption::new("economics", "Economics"),
	SelectOption::new("all-subjects", "All Subjects"),
];

pub static MEDIUMS: &[SelectOption] = &[
	SelectOption::new("bangla", "Bangla"),
	SelectOption::new("english", "English"),
	SelectOption::new("english-version", "English Version"),
	SelectOption::new("madrasah", "Madrasah"),
];

pub static DAYS_PER_WEEK: &[SelectOption] = &[
	SelectOption::new("1", "1 day"),
	SelectOption::new("2", "2 days"),
	SelectOption::new("3", "3 days"),
	SelectOption::new("4", "4 days"),
	SelectOption::new("5", "5 days"),
	SelectOption::new("6", "6 days"),
	SelectOption::new("7", "7 days"),
];

pub static TUTOR_GENDER: &[SelectOption] = &[
	SelectOption::new("any", "Any"),
	SelectOption::new("male", "Male"),
	SelectOption::new("female", "Female"),
];

pub static TUITION_STATUS: &[SelectOption] = &[
	SelectOption::new("pending", "Pending"),
	SelectOption::new("approved", "Approved"),
	SelectOption::new("rejected", "Rejected"),
];

/// Table keyed by the `options_ref` names used in the catalog's forms.
pub fn options_table() -> OptionsTable {
	OptionsTable::new()
		.with("districts", DISTRICTS)
		.with("class_levels", CLASS_LEVELS)
		.with("subjects", SUBJECTS)
		.with("mediums", MEDIUMS)
		.with("days_per_week", DAYS_PER_WEEK)
		.with("tutor_gender", TUTOR_GENDER)
		.with("tuition_status", TUITION_STATUS)
}
