//! Property tests for registry validation, write-back coercion and error display

use proptest::prelude::*;
use std::collections::HashSet;
use tutorlink_forms::{
	ConfigurationError, FieldConfig, FieldRegistry, FieldRenderer, Form, OptionsTable, SelectOption,
};

static NAMES: &[&str] = &["subject", "salary", "district", "details", "medium", "days"];
static DAYS: &[SelectOption] = &[SelectOption::new("3", "3 days")];

fn field_for(name: &'static str, kind: u8) -> FieldConfig {
	match kind % 4 {
		0 => FieldConfig::text(name, "Label"),
		1 => FieldConfig::number(name, "Label"),
		2 => FieldConfig::textarea(name, "Label"),
		_ => FieldConfig::select(name, "Label", "days"),
	}
}

proptest! {
	#[test]
	fn registry_accepts_exactly_the_unique_lists(
		picks in prop::collection::vec((prop::sample::select(NAMES), any::<u8>()), 0..8)
	) {
		let fields: Vec<FieldConfig> = picks.iter().map(|(n, k)| field_for(*n, *k)).collect();
		let options = OptionsTable::new().with("days", DAYS);

		let unique = picks.iter().map(|(n, _)| *n).collect::<HashSet<_>>().len() == picks.len();
		match FieldRegistry::new(&fields, &options) {
			Ok(registry) => {
				prop_assert!(unique);
				let names: HashSet<_> = registry.fields().iter().map(|f| f.name()).collect();
				prop_assert_eq!(names.len(), registry.len());
			}
			Err(ConfigurationError::DuplicateField { .. }) => prop_assert!(!unique),
			Err(other) => prop_assert!(false, "unexpected error: {}", other),
		}
	}

	#[test]
	fn number_write_back_round_trips_integers(n in any::<i64>()) {
		let fields = [FieldConfig::number("salary", "Salary")];
		let registry = FieldRegistry::new(&fields, &OptionsTable::new()).unwrap();
		let mut form = Form::mount(&registry);

		form.write("salary", &n.to_string()).unwrap();
		prop_assert_eq!(form.state().value("salary"), Some(&serde_json::json!(n)));
	}

	#[test]
	fn supplied_error_rendered_once(code in "[A-Z]{6}") {
		let fields = [FieldConfig::text("subject", "Subject")];
		let registry = FieldRegistry::new(&fields, &OptionsTable::new()).unwrap();
		let form = Form::mount(&registry);
		let message = format!("ERR-{}", code);

		let mut view = form.views().next().unwrap();
		view.error = Some(&message);
		let html = FieldRenderer::new().render(view).to_html();

		prop_assert_eq!(html.matches(message.as_str()).count(), 1);
	}
}
