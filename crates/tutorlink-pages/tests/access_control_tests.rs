//! Route access decisions across asynchronous session resolution

use async_trait::async_trait;
use rstest::{fixture, rstest};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, oneshot};
use tutorlink_auth::{Role, Session, SessionError, SessionHandle, SessionResolver, SessionUser};
use tutorlink_conf::AccessSettings;
use tutorlink_pages::{
	AccessState, RedirectReason, RouteAccessController, RouteDecision, RouteRequirement, Router,
};

/// Resolver that answers only when the test releases it.
struct GatedResolver {
	started: Mutex<Option<oneshot::Sender<()>>>,
	answer: Mutex<Option<oneshot::Receiver<Result<Session, SessionError>>>>,
}

impl GatedResolver {
	fn new() -> (
		Self,
		oneshot::Receiver<()>,
		oneshot::Sender<Result<Session, SessionError>>,
	) {
		let (started_tx, started_rx) = oneshot::channel();
		let (answer_tx, answer_rx) = oneshot::channel();
		let resolver = Self {
			started: Mutex::new(Some(started_tx)),
			answer: Mutex::new(Some(answer_rx)),
		};
		(resolver, started_rx, answer_tx)
	}
}

#[async_trait]
impl SessionResolver for GatedResolver {
	async fn resolve(&self) -> Result<Session, SessionError> {
		if let Some(started) = self.started.lock().await.take() {
			let _ = started.send(());
		}
		let answer = self.answer.lock().await.take();
		match answer {
			Some(rx) => rx
				.await
				.unwrap_or_else(|_| Err(SessionError::Backend("resolver dropped".to_string()))),
			None => Err(SessionError::Expired),
		}
	}
}

struct FailingResolver;

#[async_trait]
impl SessionResolver for FailingResolver {
	async fn resolve(&self) -> Result<Session, SessionError> {
		Err(SessionError::Backend("503 Service Unavailable".to_string()))
	}
}

fn user(role: Role) -> SessionUser {
	SessionUser::new("Nusrat", "nusrat@example.com", role)
}

#[fixture]
fn controller() -> Arc<RouteAccessController> {
	let router = Router::new()
		.route("home", "/")
		.route("tuitions", "/tuitions")
		.guarded_route(
			"student_dashboard",
			"/dashboard/student/*",
			RouteRequirement::only(Role::Student),
		)
		.guarded_route(
			"tutor_dashboard",
			"/dashboard/tutor/*",
			RouteRequirement::only(Role::Tutor),
		)
		.guarded_route(
			"new_tuition",
			"/tuitions/new",
			RouteRequirement::any_of([Role::Student, Role::Admin]),
		);
	Arc::new(RouteAccessController::new(router, AccessSettings::default()))
}

#[rstest]
#[tokio::test]
async fn test_allowed_role_renders(controller: Arc<RouteAccessController>) {
	let session = SessionHandle::new();
	session.sign_in(user(Role::Admin));

	let decision = controller.navigate("/tuitions/new", &session).await;
	assert_eq!(
		decision,
		RouteDecision::Render {
			route: "new_tuition".to_string()
		}
	);
}

#[rstest]
#[tokio::test]
async fn test_tutor_on_student_route_is_not_authorized(controller: Arc<RouteAccessController>) {
	let session = SessionHandle::new();
	session.sign_in(user(Role::Tutor));

	let decision = controller.navigate("/dashboard/student/requests", &session).await;
	assert_eq!(
		decision,
		RouteDecision::Redirect {
			to: "/unauthorized".to_string(),
			reason: RedirectReason::NotAuthorized
		}
	);
}

#[rstest]
#[tokio::test]
async fn test_anonymous_redirects_to_sign_in_with_query(controller: Arc<RouteAccessController>) {
	let session = SessionHandle::new();

	let decision = controller
		.navigate("/dashboard/tutor/offers?page=2", &session)
		.await;
	assert_eq!(
		decision,
		RouteDecision::Redirect {
			to: "/signin?next=%2Fdashboard%2Ftutor%2Foffers%3Fpage%3D2".to_string(),
			reason: RedirectReason::SignIn
		}
	);
}

#[rstest]
#[tokio::test]
async fn test_session_error_redirects_to_sign_in(controller: Arc<RouteAccessController>) {
	let decision = controller
		.navigate("/dashboard/student", &FailingResolver)
		.await;
	assert_eq!(
		decision,
		RouteDecision::Redirect {
			to: "/signin?next=%2Fdashboard%2Fstudent".to_string(),
			reason: RedirectReason::SignIn
		}
	);
}

#[rstest]
#[tokio::test]
async fn test_public_route_skips_resolver(controller: Arc<RouteAccessController>) {
	let decision = controller.navigate("/tuitions", &FailingResolver).await;
	assert_eq!(
		decision,
		RouteDecision::Render {
			route: "tuitions".to_string()
		}
	);
}

#[rstest]
#[tokio::test]
async fn test_pending_resolution_shows_loading(controller: Arc<RouteAccessController>) {
	let (resolver, started, answer) = GatedResolver::new();

	let task = {
		let controller = Arc::clone(&controller);
		tokio::spawn(async move { controller.navigate("/dashboard/student", &resolver).await })
	};

	started.await.unwrap();
	assert_eq!(controller.state(), Some(AccessState::Unknown));
	assert_eq!(controller.decision(), RouteDecision::Loading);

	answer
		.send(Ok(Session::authenticated(user(Role::Student))))
		.unwrap();
	let decision = task.await.unwrap();
	assert_eq!(
		decision,
		RouteDecision::Render {
			route: "student_dashboard".to_string()
		}
	);
}

#[rstest]
#[tokio::test]
async fn test_stale_resolution_does_not_override_newer_navigation(
	controller: Arc<RouteAccessController>,
) {
	let (slow, started, slow_answer) = GatedResolver::new();

	// Navigation A is still resolving when navigation B starts and finishes.
	let first = {
		let controller = Arc::clone(&controller);
		tokio::spawn(async move { controller.navigate("/dashboard/student", &slow).await })
	};
	started.await.unwrap();

	let tutor_session = SessionHandle::new();
	tutor_session.sign_in(user(Role::Tutor));
	let second = controller.navigate("/dashboard/tutor", &tutor_session).await;
	assert_eq!(
		second,
		RouteDecision::Render {
			route: "tutor_dashboard".to_string()
		}
	);

	slow_answer.send(Ok(Session::anonymous())).unwrap();
	let first = first.await.unwrap();

	assert_eq!(first, second);
	assert_eq!(controller.current_path(), "/dashboard/tutor");
	assert_eq!(controller.state(), Some(AccessState::AuthenticatedAllowed));
}

#[rstest]
#[tokio::test]
async fn test_sign_out_revalidates_current_route(controller: Arc<RouteAccessController>) {
	let session = SessionHandle::new();
	session.sign_in(user(Role::Student));
	controller.navigate("/dashboard/student", &session).await;

	let mut changes = session.subscribe();
	let writer = session.clone();
	tokio::spawn(async move {
		tokio::time::sleep(Duration::from_millis(10)).await;
		writer.sign_out();
	});

	changes.changed().await.unwrap();
	let latest = changes.borrow().clone();
	controller.revalidate(&latest);

	assert_eq!(
		controller.decision(),
		RouteDecision::Redirect {
			to: "/signin?next=%2Fdashboard%2Fstudent".to_string(),
			reason: RedirectReason::SignIn
		}
	);
}
