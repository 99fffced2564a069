//! # TextAssist API
//!
//! The outer surfaces of TextAssist. Every transport hands raw messages to
//! the [`RequestRouter`], which validates them, consults the feature
//! switches and dispatches to the action engine.
//!
//! - **Stdio host**: newline-delimited JSON or browser native-messaging framing
//! - **HTTP**: a small axum service for local clients

pub mod error;
pub mod host;
pub mod http;
pub mod router;
pub mod server;
pub mod state;

pub use error::{HostError, RouterError};
pub use host::{Framing, MessageHost};
pub use http::routes::create_router;
pub use router::{RequestRouter, SharedSettings};
pub use server::{HttpServer, HttpServerConfig};
pub use state::AppState;
