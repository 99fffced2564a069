//! # TextAssist Runtime
//!
//! The text action engine: model-backed transformations guarded by
//! deadlines, a single-flight session manager, and deterministic offline
//! fallback rules for when the model is unavailable or too slow.

pub mod action;
pub mod backend;
pub mod deadline;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod prompts;
pub mod session;

pub use action::ResolvedAction;
pub use backend::UnavailableBackend;
pub use deadline::{Deadline, DeadlineError};
pub use engine::{ActionEngine, ActionEngineConfig, RequestState};
pub use error::ModelFailure;
pub use session::{SessionManager, SessionStatus};
