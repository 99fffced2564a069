//! Error types for the TextAssist protocol layer.

mod backend;
mod protocol;
mod session;

pub use backend::*;
pub use protocol::*;
pub use session::*;
