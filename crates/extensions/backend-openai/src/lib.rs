//! OpenAI-compatible language model backend for TextAssist.
//!
//! Talks to a chat-completions server on the local machine, such as
//! llama.cpp's server or Ollama.

mod api;
mod backend;

pub use backend::{OpenAiCompatBackend, OpenAiCompatConfig, OpenAiCompatSession};
