//! Settings management for tutorlink
//!
//! Settings are resolved in layers, later layers overriding earlier ones:
//!
//! 1. Built-in defaults ([`Settings::default`])
//! 2. A TOML file ([`TomlSource`])
//! 3. Environment variables with the `TUTORLINK_` prefix ([`EnvSource`])
//!
//! ## Example
//!
//! ```
//! use tutorlink_conf::{EnvSource, Settings, TomlSource};
//!
//! let settings = Settings::builder()
//!     .source(TomlSource::from_toml("[access]\nsign_in_path = \"/login\""))
//!     .source(EnvSource::from_vars([("TUTORLINK_NEXT_PARAM", "redirect")]))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(settings.access.sign_in_path, "/login");
//! assert_eq!(settings.access.next_param, "redirect");
//! assert_eq!(settings.access.not_authorized_path, "/unauthorized");
//! ```

pub mod settings;
pub mod sources;

pub use settings::{AccessSettings, LoggingSettings, Settings, SettingsBuilder, SettingsError};
pub use sources::{ConfigSource, EnvSource, TomlSource, ENV_PREFIX};
