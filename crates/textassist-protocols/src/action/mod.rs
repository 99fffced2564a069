//! Action protocol definitions.
//!
//! An action is one supported text transformation. Requests and results are
//! plain values with no shared state, so they cross task and process
//! boundaries freely.

mod kind;
mod origin;
mod params;
mod request;

pub use kind::*;
pub use origin::*;
pub use params::*;
pub use request::*;
