//! CLI definitions for TextAssist.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use textassist_api::Framing;

/// TextAssist CLI.
#[derive(Parser)]
#[command(name = "textassist")]
#[command(about = "Writing assistant actions backed by an on-device language model")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Serve action requests over stdin/stdout (default)
    Host {
        /// Message framing: lines or native
        #[arg(long, default_value_t = Framing::Lines, env = "TEXTASSIST_FRAMING")]
        framing: Framing,
    },

    /// Run the HTTP API in foreground
    Serve {
        /// Server host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run a single action and print the JSON reply
    Run {
        /// Action: translate, proofread, rewrite, summarize, change-tone, generate
        action: String,

        /// Input text
        text: String,

        /// Target language code for translate
        #[arg(long)]
        target_language: Option<String>,

        /// Tone id for change-tone
        #[arg(long)]
        tone: Option<String>,

        /// Rewrite style: formal, casual, concise, improve
        #[arg(long)]
        style: Option<String>,

        /// Summary length: short, medium, long
        #[arg(long)]
        length: Option<String>,
    },
}

impl Commands {
    /// Whether stdout carries protocol output and logs must stay off it.
    pub fn owns_stdout(&self) -> bool {
        matches!(self, Commands::Host { .. } | Commands::Run { .. })
    }
}
