//! Guarded routing for tutorlink
//!
//! A [`Router`] maps paths to routes, some of which carry a
//! [`RouteRequirement`]. On every navigation the [`RouteAccessController`]
//! resolves the session and produces a [`RouteDecision`]: a value the
//! surrounding UI consumes to show a loading placeholder, render the route, or
//! redirect. The controller itself never navigates.
//!
//! ## Example
//!
//! ```
//! use tutorlink_auth::{Role, SessionHandle, SessionUser};
//! use tutorlink_conf::AccessSettings;
//! use tutorlink_pages::{RedirectReason, RouteAccessController, RouteDecision, RouteRequirement, Router};
//!
//! let router = Router::new()
//!     .route("home", "/")
//!     .guarded_route("student_dashboard", "/dashboard/student/*", RouteRequirement::only(Role::Student));
//! let controller = RouteAccessController::new(router, AccessSettings::default());
//!
//! let session = SessionHandle::new();
//! session.sign_in(SessionUser::new("Tania", "tania@example.com", Role::Tutor));
//!
//! let ticket = controller.begin_navigation("/dashboard/student/tuitions");
//! assert_eq!(controller.decision(), RouteDecision::Loading);
//!
//! controller.complete(ticket, Ok(session.current()));
//! assert_eq!(
//!     controller.decision(),
//!     RouteDecision::Redirect { to: "/unauthorized".to_string(), reason: RedirectReason::NotAuthorized }
//! );
//! ```

pub mod access;
pub mod requirement;
pub mod router;

pub use access::{
	AccessState, NavigationTicket, RedirectReason, RouteAccessController, RouteDecision, decide,
	resolve_state, sign_in_redirect,
};
pub use requirement::RouteRequirement;
pub use router::{PathPattern, Route, RouteMatch, Router, RouterError};
