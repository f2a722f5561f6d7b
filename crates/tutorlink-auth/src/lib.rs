//! Authentication state for tutorlink
//!
//! The session is owned by an explicit [`SessionHandle`] created at application
//! start and passed to whatever needs it. Consumers that only need to read the
//! session go through the [`SessionResolver`] trait so that asynchronous or
//! failing backends can be substituted.

pub mod resolver;
pub mod role;
pub mod session;

pub use resolver::{SessionError, SessionResolver};
pub use role::{ParseRoleError, Role};
pub use session::{Session, SessionHandle, SessionUser};
