//! Route tree of the marketplace

use tutorlink_auth::Role;
use tutorlink_pages::{RouteRequirement, Router};

/// Public pages plus the role dashboards, each guarding its whole subtree.
pub fn router() -> Router {
	Router::new()
		.route("home", "/")
		.route("tuitions", "/tuitions")
		.route("tuition_detail", "/tuitions/{id}")
		.route("sign_in", "/signin")
		.route("not_authorized", "/unauthorized")
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
			"admin_dashboard",
			"/dashboard/admin/*",
			RouteRequirement::only(Role::Admin),
		)
		.guarded_route(
			"new_tuition",
			"/tuitions/new",
			RouteRequirement::any_of([Role::Student, Role::Admin]),
		)
		.guarded_route(
			"applications",
			"/applications/*",
			RouteRequirement::only(Role::Tutor),
		)
}
