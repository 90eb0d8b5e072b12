use super::*;

// =============================================================
// ChatResponse decoding
// =============================================================

#[test]
fn chat_response_decodes_full_body() {
    let raw = r#"{
        "answer": "Lakers beat Celtics 120-115",
        "evidence": [
            {"table": "game_details", "id": 42, "details": "LAL 120 vs BOS 115", "date": "2023-12-25"}
        ]
    }"#;
    let resp: ChatResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.answer.as_deref(), Some("Lakers beat Celtics 120-115"));
    let evidence = resp.evidence.unwrap();
    assert_eq!(evidence.len(), 1);
    assert_eq!(evidence[0].table, "game_details");
    assert_eq!(evidence[0].id, 42);
    assert_eq!(evidence[0].details.as_deref(), Some("LAL 120 vs BOS 115"));
    assert_eq!(evidence[0].date.as_deref(), Some("2023-12-25"));
}

#[test]
fn chat_response_decodes_empty_object() {
    let resp: ChatResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp, ChatResponse::default());
}

#[test]
fn chat_response_accepts_nulls() {
    let resp: ChatResponse = serde_json::from_str(r#"{"answer": null, "evidence": null}"#).unwrap();
    assert!(resp.answer.is_none());
    assert!(resp.evidence.is_none());
}

#[test]
fn evidence_record_optional_fields_default_to_none() {
    let record: EvidenceRecord = serde_json::from_str(r#"{"table": "games", "id": 7}"#).unwrap();
    assert_eq!(record.table, "games");
    assert_eq!(record.id, 7);
    assert!(record.details.is_none());
    assert!(record.date.is_none());
}

#[test]
fn evidence_record_rejects_missing_id() {
    let result = serde_json::from_str::<EvidenceRecord>(r#"{"table": "games"}"#);
    assert!(result.is_err());
}

// =============================================================
// ChatRequest encoding
// =============================================================

#[test]
fn chat_request_serializes_question_field() {
    let req = ChatRequest { question: "Victor Wembanyama debut stats".to_owned() };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "question": "Victor Wembanyama debut stats" }));
}

// =============================================================
// GatewayError
// =============================================================

#[test]
fn gateway_error_status_display_includes_code() {
    assert_eq!(GatewayError::Status(502).to_string(), "chat request failed: 502");
}

#[test]
fn gateway_error_network_display_includes_reason() {
    let err = GatewayError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}
