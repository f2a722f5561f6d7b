use std::collections::BTreeSet;
use tutorlink_auth::Role;

/// Roles allowed to view a guarded route subtree.
///
/// # Examples
///
/// ```
/// use tutorlink_auth::Role;
/// use tutorlink_pages::RouteRequirement;
///
/// let requirement = RouteRequirement::any_of([Role::Student, Role::Admin]);
/// assert!(requirement.allows(Role::Admin));
/// assert!(!requirement.allows(Role::Tutor));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequirement {
	allowed_roles: BTreeSet<Role>,
}

impl RouteRequirement {
	pub fn only(role: Role) -> Self {
		Self::any_of([role])
	}

	pub fn any_of(roles: impl IntoIterator<Item = Role>) -> Self {
		Self {
			allowed_roles: roles.into_iter().collect(),
		}
	}

	/// Any signed-in user, whatever the role.
	pub fn authenticated() -> Self {
		Self::any_of(Role::ALL)
	}

	pub fn allows(&self, role: Role) -> bool {
		self.allowed_roles.contains(&role)
	}

	pub fn allowed_roles(&self) -> &BTreeSet<Role> {
		&self.allowed_roles
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_only_allows_single_role() {
		let requirement = RouteRequirement::only(Role::Tutor);
		assert!(requirement.allows(Role::Tutor));
		assert!(!requirement.allows(Role::Student));
		assert!(!requirement.allows(Role::Admin));
	}

	#[rstest]
	fn test_authenticated_allows_every_role() {
		let requirement = RouteRequirement::authenticated();
		assert!(Role::ALL.iter().all(|r| requirement.allows(*r)));
	}

	#[rstest]
	fn test_empty_requirement_allows_nobody() {
		let requirement = RouteRequirement::any_of([]);
		assert!(Role::ALL.iter().all(|r| !requirement.allows(*r)));
	}
}
