//! # tutorlink
//!
//! Client core of the tutorlink tutoring marketplace, which connects students
//! looking for home tuition with tutors across Bangladesh.
//!
//! Two mechanisms make up the core:
//!
//! - **Declarative forms** ([`forms`]): static field lists are validated once
//!   against the shared option lists, then mounted, rendered and submitted
//!   through a validation schema.
//! - **Role-guarded routes** ([`pages`]): each navigation resolves the session
//!   and yields a [`RouteDecision`](pages::RouteDecision) that the UI applies.
//!
//! The [`catalog`] module holds the concrete forms, option lists and route
//! tree of the marketplace.
//!
//! ## Example
//!
//! ```
//! use tutorlink::auth::{Role, SessionHandle, SessionUser};
//! use tutorlink::catalog::Catalog;
//! use tutorlink::conf::Settings;
//! use tutorlink::pages::RouteDecision;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::default();
//! tutorlink::init_tracing(&settings.logging);
//!
//! let catalog = Catalog::load()?;
//! let controller = catalog.access_controller(settings.access.clone());
//!
//! let session = SessionHandle::new();
//! session.sign_in(SessionUser::new("Farhana", "farhana@example.com", Role::Student));
//!
//! let decision = controller.navigate("/dashboard/student", &session).await;
//! assert_eq!(decision, RouteDecision::Render { route: "student_dashboard".to_string() });
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod catalog;
pub mod conf;
pub mod forms;
pub mod logging;
pub mod pages;

pub use catalog::{Catalog, CatalogError};
pub use logging::init_tracing;

// Re-export settings from dedicated crate
pub use tutorlink_conf::{AccessSettings, LoggingSettings, Settings, SettingsError};
