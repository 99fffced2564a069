//! Stdio message host.
//!
//! Reads request messages from an input stream and writes replies to an
//! output stream. Each request runs on its own task, so replies are written
//! in completion order; hosts match them up by `id`.
//!
//! Two framings are supported: one JSON document per line, and the browser
//! native-messaging framing (a 32-bit length prefix in native byte order
//! followed by UTF-8 JSON).
//!
//! A bad line (too long, or not UTF-8) is rejected and reading resumes at
//! the next newline. A native frame whose length prefix exceeds the limit
//! leaves the stream unsynchronised, so the host rejects it and stops.

use std::fmt;
use std::pin::Pin;
use std::str::FromStr;
use std::sync::Arc;

use bytes::{Bytes, BytesMut};
use futures::{SinkExt, Stream, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::codec::{
    Decoder, FramedRead, FramedWrite, LengthDelimitedCodec, LinesCodec, LinesCodecError,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use textassist_protocols::ReplyMessage;

use crate::error::HostError;
use crate::router::RequestRouter;

/// Largest accepted message in either direction.
pub const MAX_MESSAGE_BYTES: usize = 8 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Framing {
    /// Newline-delimited JSON.
    #[default]
    Lines,
    /// 32-bit native-endian length prefix per message.
    Native,
}

impl FromStr for Framing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lines" | "jsonl" | "ndjson" => Ok(Framing::Lines),
            "native" | "native-messaging" => Ok(Framing::Native),
            other => Err(format!("unknown framing '{other}' (expected 'lines' or 'native')")),
        }
    }
}

impl fmt::Display for Framing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Framing::Lines => write!(f, "lines"),
            Framing::Native => write!(f, "native"),
        }
    }
}

type Inbound<'a> = Pin<Box<dyn Stream<Item = Result<String, HostError>> + Send + 'a>>;

pub struct MessageHost {
    router: Arc<RequestRouter>,
    framing: Framing,
}

impl MessageHost {
    pub fn new(router: Arc<RequestRouter>, framing: Framing) -> Self {
        Self { router, framing }
    }

    /// Serve over the process's stdin and stdout until stdin closes or
    /// `shutdown` fires.
    pub async fn run_stdio(&self, shutdown: CancellationToken) -> Result<(), HostError> {
        self.run(tokio::io::stdin(), tokio::io::stdout(), shutdown)
            .await
    }

    pub async fn run<R, W>(
        &self,
        reader: R,
        writer: W,
        shutdown: CancellationToken,
    ) -> Result<(), HostError>
    where
        R: AsyncRead + Unpin + Send,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        info!(framing = %self.framing, "Message host started");

        let (out_tx, out_rx) = mpsc::unbounded_channel::<String>();
        let writer_task = tokio::spawn(write_replies(writer, self.framing, out_rx));

        let mut inbound = inbound(reader, self.framing);
        let mut tasks = JoinSet::new();

        loop {
            let frame = tokio::select! {
                _ = shutdown.cancelled() => {
                    debug!("Shutdown requested, no longer reading input");
                    break;
                }
                frame = inbound.next() => frame,
            };

            let raw = match frame {
                None => break,
                Some(Ok(raw)) => raw,
                Some(Err(e)) => {
                    error!(error = %e, "Failed to read message");
                    send_reply(&out_tx, &ReplyMessage::rejected(None, None, e.to_string()));
                    if e.is_resumable() {
                        continue;
                    }
                    warn!("Input stream cannot be resynchronised, stopping");
                    break;
                }
            };

            if raw.trim().is_empty() {
                continue;
            }

            let router = Arc::clone(&self.router);
            let out_tx = out_tx.clone();
            tasks.spawn(async move {
                let reply = router.dispatch_json(&raw).await;
                send_reply(&out_tx, &reply);
            });

            while let Some(joined) = tasks.try_join_next() {
                if let Err(e) = joined {
                    error!(error = %e, "Request task failed");
                }
            }
        }

        debug!(in_flight = tasks.len(), "Input closed, draining requests");
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                error!(error = %e, "Request task failed");
            }
        }

        drop(out_tx);
        writer_task
            .await
            .map_err(|e| HostError::Writer(e.to_string()))??;

        info!("Message host stopped");
        Ok(())
    }
}

fn inbound<'a, R>(reader: R, framing: Framing) -> Inbound<'a>
where
    R: AsyncRead + Unpin + Send + 'a,
{
    match framing {
        Framing::Lines => FramedRead::new(reader, ResumableLines::new(MAX_MESSAGE_BYTES))
            .map(|line| -> Result<String, HostError> { Ok(line??) })
            .boxed(),
        Framing::Native => FramedRead::new(reader, native_codec())
            .map(|frame| -> Result<String, HostError> {
                let frame = frame?;
                Ok(String::from_utf8(frame.to_vec())?)
            })
            .boxed(),
    }
}

/// `LinesCodec` that reports a bad line as an item instead of ending the
/// stream. `FramedRead` stops after the first decoder error, while the inner
/// codec can skip to the next newline on its own.
struct ResumableLines {
    inner: LinesCodec,
}

impl ResumableLines {
    fn new(max_length: usize) -> Self {
        Self {
            inner: LinesCodec::new_with_max_length(max_length),
        }
    }
}

impl Decoder for ResumableLines {
    type Item = Result<String, LinesCodecError>;
    type Error = LinesCodecError;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.inner.decode(buf) {
            Ok(line) => Ok(line.map(Ok)),
            Err(e) => Ok(Some(Err(e))),
        }
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.inner.decode_eof(buf) {
            Ok(line) => Ok(line.map(Ok)),
            Err(e) => Ok(Some(Err(e))),
        }
    }
}

fn native_codec() -> LengthDelimitedCodec {
    LengthDelimitedCodec::builder()
        .length_field_length(4)
        .native_endian()
        .max_frame_length(MAX_MESSAGE_BYTES)
        .new_codec()
}

fn send_reply(out_tx: &mpsc::UnboundedSender<String>, reply: &ReplyMessage) {
    match serde_json::to_string(reply) {
        Ok(json) => {
            if out_tx.send(json).is_err() {
                warn!("Reply writer closed, dropping reply");
            }
        }
        Err(e) => error!(error = %e, "Failed to serialize reply"),
    }
}

async fn write_replies<W>(
    writer: W,
    framing: Framing,
    mut replies: mpsc::UnboundedReceiver<String>,
) -> Result<(), HostError>
where
    W: AsyncWrite + Unpin,
{
    match framing {
        Framing::Lines => {
            let mut sink = FramedWrite::new(writer, LinesCodec::new());
            while let Some(json) = replies.recv().await {
                sink.send(json).await?;
            }
        }
        Framing::Native => {
            let mut sink = FramedWrite::new(writer, native_codec());
            while let Some(json) = replies.recv().await {
                sink.send(Bytes::from(json)).await?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
