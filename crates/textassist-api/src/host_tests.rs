use super::*;

use std::collections::HashMap;
use std::time::Duration;

use tokio::io::AsyncReadExt;

use textassist_protocols::{SessionOptions, Settings};
use textassist_runtime::{ActionEngine, ActionEngineConfig, SessionManager, UnavailableBackend};

fn host(framing: Framing) -> MessageHost {
    let sessions = Arc::new(SessionManager::new(
        Arc::new(UnavailableBackend),
        SessionOptions::new("system", "en"),
        Duration::from_secs(5),
    ));
    let engine = Arc::new(ActionEngine::new(sessions, ActionEngineConfig::default()));
    let router = Arc::new(RequestRouter::new(engine, Settings::default()));
    MessageHost::new(router, framing)
}

fn native_frame(json: &str) -> Vec<u8> {
    let mut frame = (json.len() as u32).to_ne_bytes().to_vec();
    frame.extend_from_slice(json.as_bytes());
    frame
}

fn parse_native(mut bytes: &[u8]) -> Vec<ReplyMessage> {
    let mut replies = Vec::new();
    while bytes.len() >= 4 {
        let len = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
        let body = &bytes[4..4 + len];
        replies.push(serde_json::from_slice(body).unwrap());
        bytes = &bytes[4 + len..];
    }
    replies
}

fn by_id(replies: Vec<ReplyMessage>) -> HashMap<String, ReplyMessage> {
    replies
        .into_iter()
        .filter_map(|reply| reply.id().map(str::to_string).map(|id| (id, reply)))
        .collect()
}

#[test]
fn test_framing_from_str() {
    assert_eq!("lines".parse::<Framing>(), Ok(Framing::Lines));
    assert_eq!("Native".parse::<Framing>(), Ok(Framing::Native));
    assert_eq!("native-messaging".parse::<Framing>(), Ok(Framing::Native));
    assert!("xml".parse::<Framing>().is_err());
    assert_eq!(Framing::default().to_string(), "lines");
}

#[tokio::test]
async fn test_lines_host_replies_to_every_message() {
    let input = concat!(
        r#"{"id":"1","action":"proofread","text":"I recieve teh package"}"#,
        "\n\n",
        r#"{"id":"2","action":"dance","text":"x"}"#,
        "\n",
        "not json\n",
        r#"{"id":"3","action":"summarize","text":"S1. S2. S3. S4. S5."}"#,
        "\n",
    );
    let (client, server) = tokio::io::duplex(64 * 1024);

    host(Framing::Lines)
        .run(input.as_bytes(), server, CancellationToken::new())
        .await
        .unwrap();

    let mut output = String::new();
    let mut client = client;
    client.read_to_string(&mut output).await.unwrap();

    let replies: Vec<ReplyMessage> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(replies.len(), 4);

    let replies = by_id(replies);
    assert_eq!(
        replies["1"].as_result().unwrap().result,
        "I receive the package"
    );
    assert!(matches!(replies["2"], ReplyMessage::Rejected { .. }));
    assert_eq!(replies["3"].as_result().unwrap().result, "S1. S3. S5.");
}

#[tokio::test]
async fn test_native_host_round_trip() {
    let mut input = native_frame(r#"{"id":"t","action":"translate","text":"Hi","targetLanguage":"es"}"#);
    input.extend(native_frame(
        r#"{"id":"g","action":"rewrite","text":"gonna do it","isInputField":true,"isFullText":true}"#,
    ));
    let (client, server) = tokio::io::duplex(64 * 1024);

    host(Framing::Native)
        .run(input.as_slice(), server, CancellationToken::new())
        .await
        .unwrap();

    let mut output = Vec::new();
    let mut client = client;
    client.read_to_end(&mut output).await.unwrap();

    let replies = by_id(parse_native(&output));
    let translated = replies["t"].as_result().unwrap();
    assert_eq!(translated.result, "Hi");
    assert!(translated.used_fallback);
    assert_eq!(translated.language_name.as_deref(), Some("Spanish"));

    let rewritten = replies["g"].as_result().unwrap();
    assert_eq!(rewritten.result, "going to do it");
    assert!(rewritten.is_input_field);
    assert!(rewritten.is_full_text);
}

#[tokio::test]
async fn test_cancelled_host_stops_reading() {
    let (_input_writer, input_reader) = tokio::io::duplex(1024);
    let (_client, server) = tokio::io::duplex(1024);
    let shutdown = CancellationToken::new();
    shutdown.cancel();

    host(Framing::Lines)
        .run(input_reader, server, shutdown)
        .await
        .unwrap();
}

async fn run_lines(input: Vec<u8>) -> Vec<ReplyMessage> {
    let (client, server) = tokio::io::duplex(64 * 1024);
    host(Framing::Lines)
        .run(input.as_slice(), server, CancellationToken::new())
        .await
        .unwrap();

    let mut output = String::new();
    let mut client = client;
    client.read_to_string(&mut output).await.unwrap();
    output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

const FOLLOW_UP: &str = r#"{"id":"after","action":"proofread","text":"teh"}"#;

#[tokio::test]
async fn test_lines_host_recovers_from_oversized_line() {
    let mut input = vec![b'a'; MAX_MESSAGE_BYTES + 10];
    input.push(b'\n');
    input.extend_from_slice(FOLLOW_UP.as_bytes());
    input.push(b'\n');

    let replies = run_lines(input).await;
    assert_eq!(replies.len(), 2);
    assert!(matches!(
        &replies[0],
        ReplyMessage::Rejected { reason, .. } if reason.contains("max line length")
    ));
    let replies = by_id(replies);
    assert_eq!(replies["after"].as_result().unwrap().result, "The");
}

#[tokio::test]
async fn test_lines_host_recovers_from_invalid_utf8() {
    let mut input = vec![0xff, 0xfe, b'\n'];
    input.extend_from_slice(FOLLOW_UP.as_bytes());
    input.push(b'\n');

    let replies = run_lines(input).await;
    assert_eq!(replies.len(), 2);
    assert!(matches!(replies[0], ReplyMessage::Rejected { id: None, .. }));
    let replies = by_id(replies);
    assert_eq!(replies["after"].as_result().unwrap().result, "The");
}

#[tokio::test]
async fn test_native_host_stops_after_oversized_frame() {
    let mut input = ((MAX_MESSAGE_BYTES + 1) as u32).to_ne_bytes().to_vec();
    input.extend(native_frame(FOLLOW_UP));
    let (client, server) = tokio::io::duplex(64 * 1024);

    host(Framing::Native)
        .run(input.as_slice(), server, CancellationToken::new())
        .await
        .unwrap();

    let mut output = Vec::new();
    let mut client = client;
    client.read_to_end(&mut output).await.unwrap();

    let replies = parse_native(&output);
    assert_eq!(replies.len(), 1);
    assert!(matches!(replies[0], ReplyMessage::Rejected { .. }));
}
