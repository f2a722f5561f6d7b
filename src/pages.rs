//! Guarded routing and access decisions
//!
//! Re-exports `tutorlink-pages`.

pub use tutorlink_pages::*;
