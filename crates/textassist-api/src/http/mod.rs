//! HTTP surface.
//!
//! - `POST /v1/actions` - run one action message
//! - `GET|PUT /v1/settings` - read or replace feature switches and languages
//! - `POST /v1/session/reset` - drop the model session
//! - `GET /health` - liveness plus session status

pub mod handlers;
pub mod routes;
