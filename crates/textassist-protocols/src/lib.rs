//! # TextAssist Protocols
//!
//! Value types, wire messages and backend traits shared by every TextAssist
//! crate. Contains no I/O and no runtime behaviour.
//!
//! ## Core Types
//!
//! - [`ActionRequest`] / [`ActionResult`] - typed request and result values
//! - [`RequestMessage`] / [`ReplyMessage`] - the JSON contract spoken with page-side hosts
//! - [`LanguageModel`] / [`ModelSession`] - the on-device model backend seam
//! - [`Settings`] - feature toggles and the target language catalogue
//! - [`FieldFocus`] - focus state of an editable field on the page side

pub mod action;
pub mod backend;
pub mod error;
pub mod focus;
pub mod message;
pub mod settings;

pub use action::{
    ActionKind, ActionParameters, ActionRequest, ActionResult, FieldSpan, RequestOrigin,
    RewriteStyle, SummaryLength, Tone, TranslateParams,
};
pub use backend::{Availability, LanguageModel, ModelSession, SessionOptions};
pub use error::{BackendError, ProtocolError, SessionError};
pub use focus::FieldFocus;
pub use message::{ReplyMessage, RequestMessage, ResultMessage};
pub use settings::{Features, Language, Settings};
