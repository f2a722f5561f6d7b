//! Role-based route access control
//!
//! Each navigation to a guarded route goes through these states:
//!
//! ```text
//!            ┌── no user ─────────────► Unauthenticated ──► redirect to sign-in (?next=path)
//!            │   (or resolution error)
//! Unknown ───┼── role allowed ────────► AuthenticatedAllowed ──► render
//!    │       └── role not allowed ────► AuthenticatedDenied ──► redirect to not-authorized
//!    └──► loading placeholder
//! ```
//!
//! Navigations are numbered. A session resolution only lands if it belongs to
//! the newest navigation; late answers for abandoned navigations are dropped.

use crate::requirement::RouteRequirement;
use crate::router::{Router, RouterError};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tutorlink_auth::{Session, SessionError, SessionResolver};
use tutorlink_conf::AccessSettings;

/// Session-dependent state of a guarded navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
	/// Session not resolved yet.
	Unknown,
	Unauthenticated,
	AuthenticatedAllowed,
	AuthenticatedDenied,
}

/// Why a navigation was redirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
	SignIn,
	NotAuthorized,
}

/// What the UI should show for the current navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
	/// Neutral placeholder while the session resolves.
	Loading,
	/// Mount the named route.
	Render { route: String },
	Redirect { to: String, reason: RedirectReason },
	/// No route matches the path.
	NotFound,
}

/// Transition out of [`AccessState::Unknown`] once resolution finished.
///
/// Resolution errors fail closed into [`AccessState::Unauthenticated`].
pub fn resolve_state(
	requirement: &RouteRequirement,
	resolution: &Result<Session, SessionError>,
) -> AccessState {
	match resolution {
		Ok(session) => match session.role() {
			None => AccessState::Unauthenticated,
			Some(role) if requirement.allows(role) => AccessState::AuthenticatedAllowed,
			Some(_) => AccessState::AuthenticatedDenied,
		},
		Err(_) => AccessState::Unauthenticated,
	}
}

/// Sign-in URL carrying `requested_path` for the post-login redirect.
///
/// # Examples
///
/// ```
/// use tutorlink_conf::AccessSettings;
/// use tutorlink_pages::sign_in_redirect;
///
/// let url = sign_in_redirect(&AccessSettings::default(), "/dashboard/tutor?tab=offers");
/// assert_eq!(url, "/signin?next=%2Fdashboard%2Ftutor%3Ftab%3Doffers");
/// ```
pub fn sign_in_redirect(settings: &AccessSettings, requested_path: &str) -> String {
	let separator = if settings.sign_in_path.contains('?') {
		'&'
	} else {
		'?'
	};
	format!(
		"{}{}{}={}",
		settings.sign_in_path,
		separator,
		urlencoding::encode(&settings.next_param),
		urlencoding::encode(requested_path)
	)
}

/// Decision for a guarded route in `state`.
pub fn decide(
	route: &str,
	state: AccessState,
	requested_path: &str,
	settings: &AccessSettings,
) -> RouteDecision {
	match state {
		AccessState::Unknown => RouteDecision::Loading,
		AccessState::Unauthenticated => RouteDecision::Redirect {
			to: sign_in_redirect(settings, requested_path),
			reason: RedirectReason::SignIn,
		},
		AccessState::AuthenticatedDenied => RouteDecision::Redirect {
			to: settings.not_authorized_path.clone(),
			reason: RedirectReason::NotAuthorized,
		},
		AccessState::AuthenticatedAllowed => RouteDecision::Render {
			route: route.to_string(),
		},
	}
}

/// Receipt for a started navigation, redeemed with [`RouteAccessController::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationTicket {
	generation: u64,
	needs_session: bool,
}

impl NavigationTicket {
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Whether the target route is guarded and waits for a session.
	pub fn needs_session(&self) -> bool {
		self.needs_session
	}
}

#[derive(Debug, Clone)]
enum Target {
	Idle,
	NotFound,
	Public {
		route: String,
	},
	Guarded {
		route: String,
		requirement: RouteRequirement,
		state: AccessState,
	},
}

#[derive(Debug, Clone)]
struct Navigation {
	generation: u64,
	path: String,
	target: Target,
}

/// Gates route rendering on session state.
///
/// Safe to share between the UI event loop and the task resolving the session.
#[derive(Debug)]
pub struct RouteAccessController {
	router: Router,
	settings: AccessSettings,
	generation: AtomicU64,
	current: RwLock<Navigation>,
}

impl RouteAccessController {
	pub fn new(router: Router, settings: AccessSettings) -> Self {
		Self {
			router,
			settings,
			generation: AtomicU64::new(0),
			current: RwLock::new(Navigation {
				generation: 0,
				path: String::new(),
				target: Target::Idle,
			}),
		}
	}

	pub fn router(&self) -> &Router {
		&self.router
	}

	pub fn settings(&self) -> &AccessSettings {
		&self.settings
	}

	/// Requirement of the route serving `path`; `Ok(None)` for public routes.
	pub fn requirement_for(&self, path: &str) -> Result<Option<&RouteRequirement>, RouterError> {
		self.router
			.match_path(path)
			.map(|m| m.route.requirement())
			.ok_or_else(|| RouterError::NotFound(path.to_string()))
	}

	/// Start navigating to `path`, superseding any navigation in flight.
	///
	/// Guarded routes enter [`AccessState::Unknown`] until [`complete`](Self::complete)
	/// is called with this navigation's ticket.
	pub fn begin_navigation(&self, path: &str) -> NavigationTicket {
		let target = match self.router.match_path(path) {
			None => Target::NotFound,
			Some(m) => match m.route.requirement() {
				None => Target::Public {
					route: m.route.name().to_string(),
				},
				Some(requirement) => Target::Guarded {
					route: m.route.name().to_string(),
					requirement: requirement.clone(),
					state: AccessState::Unknown,
				},
			},
		};
		let needs_session = matches!(target, Target::Guarded { .. });

		let mut current = self.current.write();
		let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
		*current = Navigation {
			generation,
			path: path.to_string(),
			target,
		};

		tracing::debug!(generation, path, needs_session, "navigation started");
		NavigationTicket {
			generation,
			needs_session,
		}
	}

	/// Apply a session resolution for `ticket`.
	///
	/// Returns `false` if a newer navigation started in the meantime; the
	/// resolution is then discarded.
	pub fn complete(&self, ticket: NavigationTicket, resolution: Result<Session, SessionError>) -> bool {
		let mut current = self.current.write();
		if current.generation != ticket.generation {
			tracing::debug!(
				stale = ticket.generation,
				current = current.generation,
				"discarding stale session resolution"
			);
			return false;
		}

		if let Err(error) = &resolution {
			tracing::warn!(%error, path = %current.path, "session resolution failed, treating as signed out");
		}

		if let Target::Guarded {
			requirement, state, ..
		} = &mut current.target
		{
			*state = resolve_state(requirement, &resolution);
			tracing::debug!(generation = ticket.generation, state = ?*state, "navigation resolved");
		}
		true
	}

	/// Re-evaluate the current navigation against a changed session, e.g. after sign-out.
	pub fn revalidate(&self, session: &Session) {
		let mut current = self.current.write();
		if let Target::Guarded {
			requirement, state, ..
		} = &mut current.target
			&& *state != AccessState::Unknown
		{
			*state = resolve_state(requirement, &Ok(session.clone()));
			tracing::debug!(state = ?*state, "navigation revalidated");
		}
	}

	/// Begin a navigation, resolve the session and apply the result.
	///
	/// Returns the decision for this navigation, or for whichever newer
	/// navigation superseded it while the session was resolving.
	pub async fn navigate<R>(&self, path: &str, resolver: &R) -> RouteDecision
	where
		R: SessionResolver + ?Sized,
	{
		let ticket = self.begin_navigation(path);
		if ticket.needs_session() {
			let resolution = resolver.resolve().await;
			self.complete(ticket, resolution);
		}
		self.decision()
	}

	/// Access state of the current navigation; `None` unless it targets a guarded route.
	pub fn state(&self) -> Option<AccessState> {
		match &self.current.read().target {
			Target::Guarded { state, .. } => Some(*state),
			Target::Idle | Target::NotFound | Target::Public { .. } => None,
		}
	}

	/// Path of the current navigation.
	pub fn current_path(&self) -> String {
		self.current.read().path.clone()
	}

	/// What to show for the current navigation.
	pub fn decision(&self) -> RouteDecision {
		let current = self.current.read();
		match &current.target {
			Target::Idle => RouteDecision::Loading,
			Target::NotFound => RouteDecision::NotFound,
			Target::Public { route } => RouteDecision::Render {
				route: route.clone(),
			},
			Target::Guarded { route, state, .. } => {
				decide(route, *state, &current.path, &self.settings)
			}
		}
	}
}
