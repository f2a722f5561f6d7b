//! Settings file loading tests

use rstest::rstest;
use std::io::Write;
use tutorlink_conf::{EnvSource, Settings, SettingsError, TomlSource};

#[rstest]
fn test_load_from_toml_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(
		file,
		"[access]\nsign_in_path = \"/auth/login\"\nnot_authorized_path = \"/403\"\n\n[logging]\nlevel = \"tutorlink_pages=debug\""
	)
	.unwrap();

	let settings = Settings::builder()
		.source(TomlSource::from_path(file.path()))
		.build()
		.unwrap();

	assert_eq!(settings.access.sign_in_path, "/auth/login");
	assert_eq!(settings.access.not_authorized_path, "/403");
	assert_eq!(settings.access.next_param, "next");
	assert_eq!(settings.logging.level, "tutorlink_pages=debug");
}

#[rstest]
fn test_missing_file_is_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let result = Settings::builder()
		.source(TomlSource::from_path(dir.path().join("absent.toml")))
		.build();

	assert!(matches!(result, Err(SettingsError::Io { .. })));
}

#[rstest]
fn test_env_layer_wins_over_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();

	let settings = Settings::builder()
		.source(TomlSource::from_path(file.path()))
		.source(EnvSource::from_vars([("TUTORLINK_LOG_LEVEL", "error")]))
		.build()
		.unwrap();

	assert_eq!(settings.logging.level, "error");
}

#[rstest]
fn test_empty_next_param_in_file_is_rejected() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "[access]\nnext_param = \"\"").unwrap();

	let err = Settings::builder()
		.source(TomlSource::from_path(file.path()))
		.build()
		.unwrap_err();

	assert!(matches!(err, SettingsError::Invalid { .. }));
	assert!(
		err.to_string()
			.starts_with("Invalid value for access.next_param in TOML file (")
	);
	assert!(err.to_string().ends_with("): must not be empty"));
}
