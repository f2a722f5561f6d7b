//! Session resolution collaborator

use crate::session::{Session, SessionHandle};
use async_trait::async_trait;
use std::sync::Arc;

/// Failure to determine the current session.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
	/// The auth backend could not be reached or answered with an error.
	#[error("Session backend error: {0}")]
	Backend(String),
	/// A stored session existed but is no longer valid.
	#[error("Session expired")]
	Expired,
}

/// Source of the current [`Session`], possibly asynchronous.
#[async_trait]
pub trait SessionResolver: Send + Sync {
	async fn resolve(&self) -> Result<Session, SessionError>;
}

#[async_trait]
impl SessionResolver for SessionHandle {
	async fn resolve(&self) -> Result<Session, SessionError> {
		Ok(self.current())
	}
}

#[async_trait]
impl<R: SessionResolver + ?Sized> SessionResolver for Arc<R> {
	async fn resolve(&self) -> Result<Session, SessionError> {
		(**self).resolve().await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Role, SessionUser};
	use rstest::rstest;

	struct Failing;

	#[async_trait]
	impl SessionResolver for Failing {
		async fn resolve(&self) -> Result<Session, SessionError> {
			Err(SessionError::Backend("connection refused".to_string()))
		}
	}

	#[rstest]
	#[tokio::test]
	async fn test_handle_resolves_current_session() {
		let handle = SessionHandle::new();
		handle.sign_in(SessionUser::new("Ayesha", "ayesha@example.com", Role::Student));

		let session = handle.resolve().await.unwrap();
		assert_eq!(session.role(), Some(Role::Student));
	}

	#[rstest]
	#[tokio::test]
	async fn test_arc_dyn_resolver() {
		let resolver: Arc<dyn SessionResolver> = Arc::new(Failing);
		let err = resolver.resolve().await.unwrap_err();
		assert_eq!(err.to_string(), "Session backend error: connection refused");
	}
}
