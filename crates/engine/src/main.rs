//! Parlance - line-oriented command interpreter.
//!
//! Reads commands from stdin and prints how each one was understood.
//! `:vocab` prints the derived vocabulary as JSON, `:quit` exits.

use std::io::{self, BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parlance_engine::infrastructure::config::{load_dotenv_from_repo_root, EngineConfig};
use parlance_engine::App;

fn main() -> anyhow::Result<()> {
    // Load environment from repo root before reading any configuration.
    load_dotenv_from_repo_root();

    // Initialize logging (stderr keeps stdout for interpreter output)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parlance_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting Parlance interpreter");

    let config = EngineConfig::from_env()?;
    let app = App::from_config(&config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            ":quit" => break,
            ":vocab" => {
                let vocabulary = serde_json::to_string_pretty(app.analyzer.vocabulary())?;
                writeln!(stdout, "{}", vocabulary)?;
            }
            _ => {
                let interpretation = app.interpret.execute(&line);
                writeln!(stdout, "{}", interpretation)?;
            }
        }
        stdout.flush()?;
    }

    tracing::info!("Interpreter shutting down");
    Ok(())
}
