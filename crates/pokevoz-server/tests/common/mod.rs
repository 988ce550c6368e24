//! In-process stand-ins for the upstream APIs and a router built on them.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use pokevoz_chat::{GenerationConfig, Generator};
use pokevoz_core::{Error, PokevozConfig, Result};
use pokevoz_runtime::Relay;
use pokevoz_server::{build_router, AppState};
use pokevoz_species::SpeciesSource;
use serde_json::{json, Value};
use tower::ServiceExt;

pub const PIKACHU_TEXT: &str =
    "Tipo: Eléctrico\n\nDebilidades: Tierra\n\nEstrategia: Usa Impactrueno.";

#[derive(Default)]
pub struct FakeSpecies {
    pub calls: AtomicUsize,
}

#[async_trait]
impl SpeciesSource for FakeSpecies {
    async fn fetch_raw(&self, name: &str) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match name {
            "pikachu" => Ok(json!({
                "id": 25,
                "name": "pikachu",
                "sprites": {
                    "front_default": "https://sprites/25.png",
                    "other": {"official-artwork": {"front_default": "https://artwork/25.png"}}
                },
                "types": [{"slot": 1, "type": named("type", "electric")}],
                "abilities": [
                    {"ability": named("ability", "static"), "is_hidden": false, "slot": 1},
                    {"ability": named("ability", "lightning-rod"), "is_hidden": true, "slot": 3}
                ],
                "moves": [
                    move_entry("thunder-shock"),
                    move_entry("quick-attack"),
                    move_entry("thunderbolt"),
                    move_entry("iron-tail"),
                    move_entry("thunder")
                ],
                "stats": [
                    {"base_stat": 35, "effort": 0, "stat": named("stat", "hp")},
                    {"base_stat": 90, "effort": 2, "stat": named("stat", "speed")}
                ]
            })),
            "outage" => Err(Error::Upstream("species API returned 503".into())),
            other => Err(Error::NotFound(other.to_string())),
        }
    }
}

fn named(kind: &str, name: &str) -> Value {
    json!({"name": name, "url": format!("https://pokeapi.co/api/v2/{}/{}/", kind, name)})
}

fn move_entry(name: &str) -> Value {
    json!({"move": named("move", name), "version_group_details": []})
}

#[derive(Default)]
pub struct FakeGenerator {
    pub fail: bool,
    pub calls: AtomicUsize,
}

#[async_trait]
impl Generator for FakeGenerator {
    fn model(&self) -> &str {
        "fake-model"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::Upstream("RESOURCE_EXHAUSTED".into()));
        }
        if prompt.contains(" pikachu ") {
            Ok(PIKACHU_TEXT.into())
        } else {
            Ok(format!("Respuesta para: {}", prompt.lines().next().unwrap_or("")))
        }
    }
}

pub struct Harness {
    pub router: Router,
    pub species: Arc<FakeSpecies>,
    pub generator: Arc<FakeGenerator>,
}

pub fn harness(generation_fails: bool) -> Harness {
    let species = Arc::new(FakeSpecies::default());
    let generator = Arc::new(FakeGenerator {
        fail: generation_fails,
        ..Default::default()
    });
    let relay = Relay::new(species.clone(), Some(generator.clone() as Arc<dyn Generator>));
    let state = AppState::new(
        PokevozConfig::default(),
        GenerationConfig {
            api_key: Some("test".into()),
            ..Default::default()
        },
        relay,
    );
    Harness {
        router: build_router(Arc::new(state)),
        species,
        generator,
    }
}

pub fn harness_without_generation() -> Harness {
    let species = Arc::new(FakeSpecies::default());
    let relay = Relay::new(species.clone(), None);
    let state = AppState::new(PokevozConfig::default(), GenerationConfig::default(), relay);
    Harness {
        router: build_router(Arc::new(state)),
        species,
        generator: Arc::new(FakeGenerator::default()),
    }
}

pub async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, value)
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
