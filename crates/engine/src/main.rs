//! Tabletop Hub Engine - Main entry point.
//!
//! Reads a character submission as JSON from the file named by the first argument (or
//! stdin when there is none), runs it through character creation against in-memory
//! storage and prints the response as JSON.

use std::io::Read;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tabletophub_domain::UserId;
use tabletophub_engine::{api, infrastructure::config::EngineConfig, App};
use tabletophub_shared::{CharacterRequest, CreateCharacterData, RequestPayload};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root so runs from `crates/engine` pick up the same file.
    load_dotenv_from_repo_root();

    // Initialize logging. Logs go to stderr; stdout carries the response.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tabletophub_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = EngineConfig::from_env().context("invalid engine configuration")?;
    tracing::info!(default_setting = %config.default_setting, "Starting Tabletop Hub Engine");

    let owner = match std::env::var("TABLETOPHUB_USER_ID") {
        Ok(raw) => raw
            .parse::<UserId>()
            .context("TABLETOPHUB_USER_ID is not a valid user id")?,
        Err(_) => UserId::new(),
    };

    let input = read_input(std::env::args().nth(1))?;
    let data: CreateCharacterData =
        serde_json::from_str(&input).context("input is not a character submission")?;

    let app = App::in_memory(config);
    let payload = RequestPayload::Character(CharacterRequest::CreateCharacter { data });
    let response = api::handle_request(&app, owner, payload).await;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn read_input(path: Option<String>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
