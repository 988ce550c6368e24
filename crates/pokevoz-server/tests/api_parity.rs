//! API parity tests: response shapes the page script and `pokevoz-client`
//! read: field names and JSON types, not values.

mod common;

use axum::http::StatusCode;
use common::*;
use pokevoz_core::{ChatReply, DescribeResponse, ErrorBody};
use serde_json::json;

/// `{ respuesta, sprite?, tipos?, habilidades?, ataquesRecomendados?, estadisticas? }`
#[tokio::test]
async fn test_describe_response_shape() {
    let h = harness(false);
    let (_, body) = send(&h.router, post_json("/api/pokemon", json!({"pokemon": "pikachu"}))).await;

    assert!(body["respuesta"].is_string());
    for key in ["sprite", "tipos", "habilidades", "ataquesRecomendados", "estadisticas"] {
        assert!(body[key].is_string(), "{} should be a string", key);
    }
    // No alternate narrative keys leak out.
    assert!(body.get("response").is_none());
    assert!(body.get("narrative").is_none());

    let typed: DescribeResponse = serde_json::from_value(body).unwrap();
    assert_eq!(typed.respuesta, PIKACHU_TEXT);
}

/// Minimal body (what the generation-only handlers used to return) still parses.
#[test]
fn test_describe_response_minimal_shape() {
    let typed: DescribeResponse =
        serde_json::from_value(json!({"respuesta": "Tipo: Agua"})).unwrap();
    assert_eq!(typed.respuesta, "Tipo: Agua");
    assert_eq!(typed.sprite, None);
}

/// `{ response }`
#[tokio::test]
async fn test_chat_response_shape() {
    let h = harness(false);
    let (status, body) = send(&h.router, post_json("/api/chat", json!({"prompt": "hola"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["response"].is_string());
    let _: ChatReply = serde_json::from_value(body).unwrap();
}

/// `{ error }` on every failure path.
#[tokio::test]
async fn test_error_shape() {
    let h = harness(true);
    let cases = [
        post_json("/api/pokemon", json!({})),
        post_json("/api/chat", json!({"prompt": "x"})),
        get("/api/proxy-pokemon/qwertyunknown"),
    ];
    for req in cases {
        let (status, body) = send(&h.router, req).await;
        assert!(status.is_client_error() || status.is_server_error());
        let typed: ErrorBody = serde_json::from_value(body).unwrap();
        assert!(!typed.error.is_empty());
    }
}
