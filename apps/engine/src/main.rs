//! `sakhi`: a terminal chat surface for the dialogue engine.
//!
//! This binary is presentation plumbing only. It owns the session state,
//! applies the simulated typing delay, and renders each `BotResponse` as
//! text; all conversational behavior lives in the library.

use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::Result;
use chrono::{Local, Timelike};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sakhi_engine::config::Config;
use sakhi_engine::engine::{greeting, Engine, EngineConfig};
use sakhi_engine::models::response::BotResponse;
use sakhi_engine::models::session::SessionState;
use sakhi_engine::repository::ContentRepository;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("sakhi_engine={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sakhi v{}", env!("CARGO_PKG_VERSION"));

    let repo = match &config.data_path {
        Some(path) => ContentRepository::from_json_file(path)?,
        None => ContentRepository::default(),
    };

    let engine = Engine::with_config(
        repo,
        EngineConfig {
            faq_score_threshold: config.faq_score_threshold,
            faq_min_word_len: config.faq_min_word_len,
        },
    );

    let mut session = SessionState::new();
    info!(session = %session.id, "Session opened");

    let opening = greeting::initial_greeting(Local::now().hour());
    render(&opening);
    session.absorb(&opening);

    let stdin = std::io::stdin();
    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let text = line.trim_end_matches(['\r', '\n']);
        if text.is_empty() {
            continue;
        }
        if text == "/quit" {
            break;
        }

        // Simulated typing pause, for pacing only; the engine itself is
        // synchronous and instant.
        tokio::time::sleep(Duration::from_millis(config.typing_delay_ms)).await;

        let response = engine.handle_turn(text, &session);
        session.absorb(&response);
        render(&response);
    }

    info!(turns = session.history.len(), "Session closed");
    Ok(())
}

/// Renders a response as plain terminal text: message body, then numbered
/// options, quick-reply chips, and cards.
fn render(response: &BotResponse) {
    println!("sakhi> {}", response.text);

    if let Some(options) = &response.options {
        for (i, option) in options.iter().enumerate() {
            println!("  [{}] {}", i + 1, option.label);
        }
    }

    if let Some(quick_replies) = &response.quick_replies {
        println!("  ({})", quick_replies.join(" | "));
    }

    if let Some(cards) = &response.cards {
        for card in cards {
            println!("  ---");
            println!("  {} - {}", card.title, card.description);
            for (key, value) in &card.details {
                println!("    {key}: {value}");
            }
            println!("    -> {}", card.action.label);
        }
    }

    println!();
}
