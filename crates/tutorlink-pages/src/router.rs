//! Route table with optional role guards.

mod core;
mod pattern;

pub use self::core::{Route, RouteMatch, Router, RouterError};
pub use self::pattern::PathPattern;
