//! Layered settings

pub use tutorlink_conf::*;
