//! Relay routes exercised through the router with fake upstreams.

mod common;

use std::sync::atomic::Ordering;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_describe_enriched() {
    let h = harness(false);
    let request = post_json("/api/pokemon", json!({"pokemon": "Pikachu"}));
    let (status, body) = send(&h.router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["respuesta"], PIKACHU_TEXT);
    assert_eq!(body["sprite"], "https://artwork/25.png");
    assert_eq!(body["tipos"], "electric");
    assert_eq!(body["habilidades"], "static, lightning-rod");
    assert_eq!(body["ataquesRecomendados"], "thunder-shock, quick-attack, thunderbolt, iron-tail");
    assert_eq!(body["estadisticas"], "hp 35, speed 90");
}

#[tokio::test]
async fn test_blank_name_is_rejected_without_upstream_calls() {
    let h = harness(false);

    for body in [json!({"pokemon": ""}), json!({"pokemon": "   "}), json!({})] {
        let (status, resp) = send(&h.router, post_json("/api/pokemon", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(resp["error"].is_string());
    }

    assert_eq!(h.species.calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.generator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unreadable_body_is_rejected() {
    let h = harness(false);
    let req = Request::builder()
        .method("POST")
        .uri("/api/pokemon")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, resp) = send(&h.router, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "Falta el nombre del Pokémon");
    assert_eq!(h.species.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unknown_species_still_gets_narrative() {
    let h = harness(false);
    let (status, body) =
        send(&h.router, post_json("/api/pokemon", json!({"pokemon": "qwertyunknown"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["respuesta"].as_str().unwrap().contains("qwertyunknown"));
    assert!(body.get("sprite").is_none());
    assert!(body.get("tipos").is_none());
}

#[tokio::test]
async fn test_species_outage_still_gets_narrative() {
    let h = harness(false);
    let request = post_json("/api/pokemon", json!({"pokemon": "outage"}));
    let (status, body) = send(&h.router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["respuesta"].is_string());
    assert!(body.get("sprite").is_none());
}

#[tokio::test]
async fn test_generation_failure_returns_fallback() {
    let h = harness(true);
    let request = post_json("/api/pokemon", json!({"pokemon": "pikachu"}));
    let (status, body) = send(&h.router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["respuesta"], pokevoz_runtime::FALLBACK_NARRATIVE);
    assert_eq!(body["sprite"], "https://artwork/25.png");
}

#[tokio::test]
async fn test_missing_api_key_returns_fallback() {
    let h = harness_without_generation();
    let request = post_json("/api/pokemon", json!({"pokemon": "pikachu"}));
    let (status, body) = send(&h.router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["respuesta"], pokevoz_runtime::FALLBACK_NARRATIVE);
}

#[tokio::test]
async fn test_deprecated_aliases() {
    let h = harness(false);

    let request = post_json("/pokemon", json!({"pokemon": "pikachu"}));

    let (status, body) = send(&h.router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["respuesta"], PIKACHU_TEXT);

    let request = post_json("/api/pokemon", json!({"name": "pikachu"}));

    let (status, body) = send(&h.router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["respuesta"], PIKACHU_TEXT);

    let (status, body) = send(&h.router, get("/api/pokemon/PIKACHU")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sprite"], "https://artwork/25.png");
}

#[tokio::test]
async fn test_wrong_method_is_405() {
    let h = harness(false);
    let req = Request::builder()
        .method("DELETE")
        .uri("/api/pokemon")
        .body(Body::empty())
        .unwrap();
    let resp = tower::ServiceExt::oneshot(h.router.clone(), req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_proxy_passthrough() {
    let h = harness(false);
    let (status, body) = send(&h.router, get("/api/proxy-pokemon/pikachu")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 25);
    assert_eq!(
        body["sprites"]["other"]["official-artwork"]["front_default"],
        "https://artwork/25.png"
    );
}

#[tokio::test]
async fn test_proxy_not_found() {
    let h = harness(false);
    let (status, body) = send(&h.router, get("/api/proxy-pokemon/qwertyunknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_proxy_outage_is_generic_500() {
    let h = harness(false);
    let (status, body) = send(&h.router, get("/api/proxy-pokemon/outage")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["error"].as_str().unwrap().contains("503"));
}

#[tokio::test]
async fn test_chat() {
    let h = harness(false);
    let (status, body) = send(&h.router, post_json("/api/chat", json!({"prompt": "Hola"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Respuesta para: Hola");
}

#[tokio::test]
async fn test_chat_missing_prompt() {
    let h = harness(false);
    let (status, body) = send(&h.router, post_json("/api/chat", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Falta el prompt");
    assert_eq!(h.generator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_chat_generation_failure_is_500() {
    let h = harness(true);
    let (status, body) = send(&h.router, post_json("/api/chat", json!({"prompt": "Hola"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error procesando solicitud.");
}

#[tokio::test]
async fn test_health() {
    let h = harness(false);
    let (status, body) = send(&h.router, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["generation"], true);

    let h = harness_without_generation();
    let (_, body) = send(&h.router, get("/api/health")).await;
    assert_eq!(body["generation"], false);
}
