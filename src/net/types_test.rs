use super::*;

#[test]
fn store_record_reads_korean_column_names() {
    let json = r#"{
        "상호명": "부평순대국",
        "상권업종대분류명": "음식",
        "법정동명": "부평동",
        "도로명": "경원대로 1",
        "경도": 126.7052,
        "위도": 37.4563
    }"#;
    let record: StoreRecord = serde_json::from_str(json).expect("valid record");
    assert_eq!(record.name, "부평순대국");
    assert_eq!(record.district, "부평동");
    assert!((record.longitude - 126.7052).abs() < f64::EPSILON);
}

#[test]
fn chat_message_maps_mongo_id_and_role() {
    let json = r#"{
        "_id": "m1",
        "roomId": "r1",
        "userId": "abc123",
        "role": "assistant",
        "text": "hello",
        "createdAt": "2025-08-16T10:00:00Z"
    }"#;
    let msg: ChatMessage = serde_json::from_str(json).expect("valid message");
    assert_eq!(msg.id, "m1");
    assert_eq!(msg.role, ChatRole::Assistant);
}

#[test]
fn chat_exchange_reads_mixed_case_doc_keys() {
    let json = r#"{
        "AIDoc": {
            "_id": "m2",
            "roomId": "r1",
            "userId": "abc123",
            "role": "assistant",
            "text": "reply",
            "createdAt": "2025-08-16T10:00:01Z"
        }
    }"#;
    let exchange: ChatExchange = serde_json::from_str(json).expect("valid exchange");
    assert!(exchange.user_doc.is_none());
    assert_eq!(exchange.ai_doc.id, "m2");
}

#[test]
fn llm_turn_serializes_lowercase_role() {
    let turn = LlmTurn {
        role: ChatRole::User,
        content: "hi".to_owned(),
    };
    let json = serde_json::to_string(&turn).expect("serializable");
    assert_eq!(json, r#"{"role":"user","content":"hi"}"#);
}

#[test]
fn forecast_envelope_flattens_to_items() {
    let json = r#"{
        "response": {
            "body": {
                "items": {
                    "item": [{
                        "baseDate": "20250816",
                        "baseTime": "0500",
                        "category": "TMP",
                        "fcstDate": "20250816",
                        "fcstTime": "0600",
                        "fcstValue": "24",
                        "nx": 55,
                        "ny": 125
                    }]
                }
            }
        }
    }"#;
    let envelope: ForecastEnvelope = serde_json::from_str(json).expect("valid envelope");
    let items = envelope.into_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category, "TMP");
}

#[test]
fn forecast_envelope_without_body_is_empty() {
    let envelope: ForecastEnvelope =
        serde_json::from_str(r#"{"response":{}}"#).expect("valid envelope");
    assert!(envelope.into_items().is_empty());
}

#[test]
fn sign_in_ok_email_is_optional() {
    let ok: SignInOk = serde_json::from_str(r#"{"token":"abc123"}"#).expect("valid body");
    assert_eq!(ok.token, "abc123");
    assert!(ok.email.is_none());
}
