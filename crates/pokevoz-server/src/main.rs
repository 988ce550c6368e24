//! Pokevoz — relay between a Pokédex page, PokeAPI and Gemini.

use std::sync::Arc;

use pokevoz_chat::GenerationConfig;
use pokevoz_core::PokevozConfig;
use pokevoz_server::{build_router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    let config = PokevozConfig::from_env();
    let generation = GenerationConfig::from_env();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "--check" | "check" => {
                println!("listen:      {}", config.listen_addr());
                println!("species API: {}", config.pokeapi_base);
                println!("generation:  {} ({})", generation.api_base, generation.model);
                println!(
                    "api key:     {}",
                    if generation.is_configured() { "set" } else { "missing" }
                );
                std::process::exit(if generation.is_configured() { 0 } else { 1 });
            }
            "--help" | "-h" | "help" => {
                println!("Pokevoz — Pokémon description relay");
                println!();
                println!("Usage: pokevoz [command]");
                println!();
                println!("Commands:");
                println!("  (none)     Start the server");
                println!("  check      Print resolved configuration; exit 1 without an API key");
                println!("  help       Show this help message");
                println!();
                println!("Environment: PORT, POKEVOZ_BIND, POKEAPI_BASE,");
                println!("             POKEVOZ_HTTP_TIMEOUT_SECS, GEMINI_API_KEY,");
                println!("             GEMINI_MODEL, GEMINI_API_BASE");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'pokevoz help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let addr = config.listen_addr();
    let state = Arc::new(AppState::from_config(config, generation)?);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Pokevoz relay listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Pokevoz relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
