//! Configuration sources for the layered settings system
//!
//! Provides sources that are merged in priority order
//! (environment variables > TOML file > defaults).

use crate::settings::{Settings, SettingsError};
use serde::Deserialize;
use std::path::PathBuf;

/// Prefix shared by every environment variable tutorlink reads.
pub const ENV_PREFIX: &str = "TUTORLINK_";

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Overlay this source's values onto `settings`.
	fn apply(&self, settings: &mut Settings) -> Result<(), SettingsError>;

	/// Get the priority of this source (higher = applied later)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

#[derive(Debug, Default, Deserialize)]
struct PartialSettings {
	#[serde(default)]
	access: PartialAccess,
	#[serde(default)]
	logging: PartialLogging,
}

#[derive(Debug, Default, Deserialize)]
struct PartialAccess {
	sign_in_path: Option<String>,
	not_authorized_path: Option<String>,
	next_param: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PartialLogging {
	level: Option<String>,
}

impl PartialSettings {
	/// Overlay the values present in this layer, checking them the same way
	/// as environment overrides.
	fn overlay(self, settings: &mut Settings, source_name: &str) -> Result<(), SettingsError> {
		let invalid = |key: &str, reason: String| SettingsError::Invalid {
			source_name: source_name.to_string(),
			key: key.to_string(),
			reason,
		};

		if let Some(v) = self.access.sign_in_path {
			settings.access.sign_in_path =
				check_path(&v).map_err(|r| invalid("access.sign_in_path", r))?;
		}
		if let Some(v) = self.access.not_authorized_path {
			settings.access.not_authorized_path =
				check_path(&v).map_err(|r| invalid("access.not_authorized_path", r))?;
		}
		if let Some(v) = self.access.next_param {
			settings.access.next_param =
				check_non_empty(&v).map_err(|r| invalid("access.next_param", r))?;
		}
		if let Some(v) = self.logging.level {
			settings.logging.level =
				check_non_empty(&v).map_err(|r| invalid("logging.level", r))?;
		}
		Ok(())
	}
}

enum TomlInput {
	Inline(String),
	File(PathBuf),
}

/// TOML configuration source, either inline text or a file on disk
pub struct TomlSource {
	input: TomlInput,
}

impl TomlSource {
	/// Create a source from TOML text.
	///
	/// # Examples
	///
	/// ```
	/// use tutorlink_conf::{Settings, TomlSource};
	///
	/// let settings = Settings::builder()
	///     .source(TomlSource::from_toml("[logging]\nlevel = \"debug\""))
	///     .build()
	///     .unwrap();
	/// assert_eq!(settings.logging.level, "debug");
	/// ```
	pub fn from_toml(text: impl Into<String>) -> Self {
		Self {
			input: TomlInput::Inline(text.into()),
		}
	}

	/// Create a source reading the given TOML file when applied.
	pub fn from_path(path: impl Into<PathBuf>) -> Self {
		Self {
			input: TomlInput::File(path.into()),
		}
	}
}

impl ConfigSource for TomlSource {
	fn apply(&self, settings: &mut Settings) -> Result<(), SettingsError> {
		let text = match &self.input {
			TomlInput::Inline(text) => text.clone(),
			TomlInput::File(path) => {
				std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
					path: path.display().to_string(),
					source,
				})?
			}
		};

		let partial: PartialSettings = toml::from_str(&text)?;
		partial.overlay(settings, &self.description())
	}

	fn priority(&self) -> u8 {
		50
	}

	fn description(&self) -> String {
		match &self.input {
			TomlInput::Inline(_) => "Inline TOML".to_string(),
			TomlInput::File(path) => format!("TOML file ({})", path.display()),
		}
	}
}

/// Environment variable configuration source
///
/// Recognised keys (after the [`ENV_PREFIX`]): `SIGN_IN_PATH`,
/// `NOT_AUTHORIZED_PATH`, `NEXT_PARAM` and `LOG_LEVEL`. Unknown keys are ignored.
pub struct EnvSource {
	prefix: String,
	vars: Option<Vec<(String, String)>>,
}

impl EnvSource {
	/// Read from the process environment using the default prefix.
	pub fn new() -> Self {
		Self {
			prefix: ENV_PREFIX.to_string(),
			vars: None,
		}
	}

	/// Read from a fixed set of variables instead of the process environment.
	///
	/// # Examples
	///
	/// ```
	/// use tutorlink_conf::{EnvSource, Settings};
	///
	/// let settings = Settings::builder()
	///     .source(EnvSource::from_vars([("TUTORLINK_LOG_LEVEL", "warn")]))
	///     .build()
	///     .unwrap();
	/// assert_eq!(settings.logging.level, "warn");
	/// ```
	pub fn from_vars<I, K, V>(vars: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			prefix: ENV_PREFIX.to_string(),
			vars: Some(
				vars.into_iter()
					.map(|(k, v)| (k.into(), v.into()))
					.collect(),
			),
		}
	}

	/// Override the variable prefix.
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

fn check_path(value: &str) -> Result<String, String> {
	if !value.starts_with('/') {
		return Err("path must start with '/'".to_string());
	}
	Ok(value.to_string())
}

fn check_non_empty(value: &str) -> Result<String, String> {
	let trimmed = value.trim();
	if trimmed.is_empty() {
		return Err("must not be empty".to_string());
	}
	Ok(trimmed.to_string())
}

fn env_error(key: &str) -> impl FnOnce(String) -> SettingsError + '_ {
	move |reason| SettingsError::Env {
		key: key.to_string(),
		reason,
	}
}

fn require_path(key: &str, value: &str) -> Result<String, SettingsError> {
	check_path(value).map_err(env_error(key))
}

fn require_non_empty(key: &str, value: &str) -> Result<String, SettingsError> {
	check_non_empty(value).map_err(env_error(key))
}

impl ConfigSource for EnvSource {
	fn apply(&self, settings: &mut Settings) -> Result<(), SettingsError> {
		let vars = match &self.vars {
			Some(vars) => vars.clone(),
			None => std::env::vars().collect(),
		};

		for (key, value) in vars {
			let Some(name) = key.strip_prefix(&self.prefix) else {
				continue;
			};

			match name {
				"SIGN_IN_PATH" => settings.access.sign_in_path = require_path(&key, &value)?,
				"NOT_AUTHORIZED_PATH" => {
					settings.access.not_authorized_path = require_path(&key, &value)?
				}
				"NEXT_PARAM" => settings.access.next_param = require_non_empty(&key, &value)?,
				"LOG_LEVEL" => settings.logging.level = require_non_empty(&key, &value)?,
				_ => {}
			}
		}
		Ok(())
	}

	fn priority(&self) -> u8 {
		100 // Highest priority
	}

	fn description(&self) -> String {
		format!("Environment variables (prefix: {})", self.prefix)
	}
}
