use super::*;

#[test]
fn test_reset_response_serialize() {
    let json = serde_json::to_value(ResetResponse {
        session: SessionStatus::Idle,
    })
    .unwrap();
    assert_eq!(json, serde_json::json!({"session": "idle"}));
}

#[test]
fn test_health_response_round_trip_fields() {
    let resp = HealthResponse {
        status: "ok".to_string(),
        version: "0.1.0".to_string(),
        uptime_seconds: 3,
        started_at: Utc::now(),
        requests: 2,
        backend: "openai_compat".to_string(),
        session: SessionStatus::Initializing,
    };
    let json = serde_json::to_string(&resp).unwrap();
    assert!(json.contains("\"session\":\"initializing\""));
    assert!(json.contains("\"backend\":\"openai_compat\""));
}
