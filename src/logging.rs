//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The library crates only emit events. Binaries call [`init_tracing`] once at
//! startup to print them.
//!
//! `RUST_LOG` takes precedence over the configured level when set.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use tutorlink_conf::LoggingSettings;

fn build_env_filter(settings: &LoggingSettings) -> EnvFilter {
	EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(&settings.level))
		.unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a global fmt subscriber filtered by `settings.level`.
///
/// Returns `false` if a global subscriber was already installed, in which case
/// the call has no effect.
pub fn init_tracing(settings: &LoggingSettings) -> bool {
	let installed = tracing_subscriber::registry()
		.with(build_env_filter(settings))
		.with(fmt::layer().with_target(true))
		.try_init()
		.is_ok();
	if installed {
		tracing::debug!(level = %settings.level, "tracing initialised");
	}
	installed
}
