//! pokevoz-ask — terminal client for the Pokevoz relay.

use std::sync::Arc;

use pokevoz_client::{ClientConfig, CommandSpeaker, NarrationEvent, RelayClient, Session};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the rendered result.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if let Some("--help" | "-h" | "help") = args.get(1).map(String::as_str) {
        println!("pokevoz-ask — ask the Pokevoz relay about a Pokémon");
        println!();
        println!("Usage: pokevoz-ask [name]");
        println!();
        println!("With a name, print its description and exit. Without one, read names");
        println!("from stdin; 'p' plays or pauses the narration, 'q' quits.");
        println!();
        println!("Environment: POKEVOZ_RELAY_URL, POKEVOZ_TTS_COMMAND");
        return Ok(());
    }

    let config = ClientConfig::from_env();
    let relay = RelayClient::new(&config.relay_url, config.timeout)?;
    let speaker = Arc::new(CommandSpeaker::new(&config.tts_command)?);
    let (mut session, mut events) = Session::new(relay, speaker);

    if args.len() > 1 {
        let screen = session.submit(&args[1..].join(" ")).await;
        println!("{}", screen.to_text());
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("Nombre de un Pokémon (q para salir):");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    "q" => break,
                    "p" => session.toggle_narration(),
                    input => {
                        let screen = session.submit(input).await;
                        println!("{}", screen.to_text());
                        if session.controls_visible() {
                            println!();
                            println!("[p] narrar / pausar   [q] salir");
                        }
                    }
                }
            }
            Some(event) = events.recv() => match event {
                NarrationEvent::Highlight(index) => {
                    if let Some(text) = session.narrator().paragraphs().get(index) {
                        println!("▶ {}", text);
                    }
                }
                NarrationEvent::Failed(message) => eprintln!("Narración detenida: {}", message),
                NarrationEvent::StateChanged(state) => tracing::debug!("Narration {:?}", state),
                NarrationEvent::ClearHighlight | NarrationEvent::ScrollToTop => {}
            }
        }
    }

    session.cancel_narration();
    Ok(())
}
