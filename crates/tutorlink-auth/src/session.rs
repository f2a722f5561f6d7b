//! Session state and its owning handle
//!
//! A [`SessionHandle`] is created once when the application starts, cloned into
//! every consumer, and cleared on sign-out. Changes are broadcast through a
//! `tokio::sync::watch` channel so route guards can re-evaluate.

use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;

/// The signed-in user as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
	pub name: String,
	pub email: String,
	pub role: Role,
}

impl SessionUser {
	pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
		Self {
			name: name.into(),
			email: email.into(),
			role,
		}
	}
}

/// Resolved authentication state.
///
/// # Examples
///
/// ```
/// use tutorlink_auth::{Role, Session, SessionUser};
///
/// let anonymous = Session::anonymous();
/// assert!(!anonymous.is_authenticated());
/// assert_eq!(anonymous.role(), None);
///
/// let session = Session::authenticated(SessionUser::new("Nusrat", "nusrat@example.com", Role::Tutor));
/// assert_eq!(session.role(), Some(Role::Tutor));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
	pub user: Option<SessionUser>,
}

impl Session {
	/// A session with no signed-in user.
	pub fn anonymous() -> Self {
		Self { user: None }
	}

	pub fn authenticated(user: SessionUser) -> Self {
		Self { user: Some(user) }
	}

	pub fn is_authenticated(&self) -> bool {
		self.user.is_some()
	}

	/// Role of the signed-in user, if any.
	pub fn role(&self) -> Option<Role> {
		self.user.as_ref().map(|u| u.role)
	}
}

/// Shared, explicitly passed owner of the current [`Session`].
///
/// Cloning the handle shares the same underlying session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
	sender: Arc<watch::Sender<Session>>,
}

impl Default for SessionHandle {
	fn default() -> Self {
		Self::new()
	}
}

impl SessionHandle {
	/// Initialise an anonymous session at application start.
	pub fn new() -> Self {
		let (sender, _) = watch::channel(Session::anonymous());
		Self {
			sender: Arc::new(sender),
		}
	}

	/// Snapshot of the current session.
	pub fn current(&self) -> Session {
		self.sender.borrow().clone()
	}

	/// Replace the session with a signed-in user.
	pub fn sign_in(&self, user: SessionUser) {
		tracing::info!(email = %user.email, role = %user.role, "session started");
		self.sender.send_replace(Session::authenticated(user));
	}

	/// Tear the session down.
	pub fn sign_out(&self) {
		let previous = self.sender.send_replace(Session::anonymous());
		if let Some(user) = previous.user {
			tracing::info!(email = %user.email, "session ended");
		}
	}

	/// Replace the session wholesale, e.g. after the auth backend refreshed it.
	pub fn refresh(&self, session: Session) {
		tracing::debug!(authenticated = session.is_authenticated(), "session refreshed");
		self.sender.send_replace(session);
	}

	/// Receive every subsequent session change.
	pub fn subscribe(&self) -> watch::Receiver<Session> {
		self.sender.subscribe()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn tutor() -> SessionUser {
		SessionUser::new("Rahim Uddin", "rahim@example.com", Role::Tutor)
	}

	#[rstest]
	fn test_handle_starts_anonymous() {
		let handle = SessionHandle::new();
		assert_eq!(handle.current(), Session::anonymous());
	}

	#[rstest]
	fn test_sign_in_and_out(tutor: SessionUser) {
		let handle = SessionHandle::new();

		handle.sign_in(tutor.clone());
		assert_eq!(handle.current().user, Some(tutor));

		handle.sign_out();
		assert!(!handle.current().is_authenticated());
	}

	#[rstest]
	fn test_clones_share_state(tutor: SessionUser) {
		let handle = SessionHandle::new();
		let other = handle.clone();

		handle.sign_in(tutor);
		assert_eq!(other.current().role(), Some(Role::Tutor));
	}

	#[rstest]
	#[tokio::test]
	async fn test_subscriber_sees_changes(tutor: SessionUser) {
		let handle = SessionHandle::new();
		let mut rx = handle.subscribe();

		handle.sign_in(tutor);
		rx.changed().await.unwrap();
		assert_eq!(rx.borrow_and_update().role(), Some(Role::Tutor));

		handle.sign_out();
		rx.changed().await.unwrap();
		assert!(!rx.borrow().is_authenticated());
	}
}
