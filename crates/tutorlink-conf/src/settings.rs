//! Typed settings and the layered builder

use crate::sources::ConfigSource;
use serde::{Deserialize, Serialize};

/// Error type for settings resolution
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error reading {path}: {source}")]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Invalid value for environment variable {key}: {reason}")]
	Env { key: String, reason: String },

	#[error("Invalid value for {key} in {source_name}: {reason}")]
	Invalid {
		source_name: String,
		key: String,
		reason: String,
	},
}

/// Redirect targets used by the route access controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessSettings {
	/// Where unauthenticated visitors are sent.
	pub sign_in_path: String,
	/// Where authenticated users without the required role are sent.
	pub not_authorized_path: String,
	/// Query parameter carrying the originally requested path on sign-in redirects.
	pub next_param: String,
}

impl Default for AccessSettings {
	fn default() -> Self {
		Self {
			sign_in_path: "/signin".to_string(),
			not_authorized_path: "/unauthorized".to_string(),
			next_param: "next".to_string(),
		}
	}
}

/// Logging configuration consumed by the tracing initialiser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
	/// An `EnvFilter` directive, e.g. `info` or `tutorlink_pages=debug`.
	pub level: String,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
		}
	}
}

/// Application settings
///
/// # Examples
///
/// ```
/// use tutorlink_conf::Settings;
///
/// let settings = Settings::default();
/// assert_eq!(settings.access.sign_in_path, "/signin");
/// assert_eq!(settings.logging.level, "info");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub access: AccessSettings,
	pub logging: LoggingSettings,
}

impl Settings {
	/// Start a layered build from the defaults.
	pub fn builder() -> SettingsBuilder {
		SettingsBuilder::new()
	}
}

/// Builder applying configuration sources in priority order
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	/// Create a builder with no sources.
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a configuration source.
	///
	/// Sources are applied lowest priority first regardless of insertion order.
	pub fn source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Resolve all sources on top of [`Settings::default`].
	pub fn build(mut self) -> Result<Settings, SettingsError> {
		self.sources.sort_by_key(|s| s.priority());

		let mut settings = Settings::default();
		for source in &self.sources {
			tracing::debug!(source = %source.description(), "applying settings source");
			source.apply(&mut settings)?;
		}
		Ok(settings)
	}
}
