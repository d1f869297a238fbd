//! Gospel Daily chat bot
//!
//! Console transport: every line read from stdin is one incoming chat
//! message, every reply is written to stdout.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gospel_daily::bot::HELP_TEXT;
use gospel_daily::{ChatBot, Config, GospelService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so replies stay readable on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gospel_daily=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: default_language={}, cache_ttl={}s, freshness={}",
        config.default_language, config.bot_cache_ttl, config.freshness
    );

    let service = GospelService::from_config(&config, config.bot_cache_ttl)
        .context("failed to build HTTP client")?;
    let bot = ChatBot::new(Arc::new(service));

    info!("Gospel bot is now running...");
    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("{HELP_TEXT}\n\n").as_bytes()).await?;
    stdout.flush().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        for reply in bot.handle(&line).await {
            stdout.write_all(format!("{reply}\n\n").as_bytes()).await?;
            stdout.flush().await?;
        }
    }

    info!("Input closed, shutting down");
    Ok(())
}
