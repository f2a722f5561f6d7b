//! Declarative form fields, rendering and validation
//!
//! Re-exports `tutorlink-forms`. See [`crate::catalog`] for the marketplace's
//! concrete forms.

pub use tutorlink_forms::*;
