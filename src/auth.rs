//! Roles and the signed-in session

pub use tutorlink_auth::*;
