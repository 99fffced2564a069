//! Language model backend protocol definitions.
//!
//! A backend is the on-device model capability. It hands out sessions, and
//! a session answers prompts.

mod traits;

pub use traits::*;
