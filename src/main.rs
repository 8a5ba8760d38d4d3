mod bot;
mod channel;
mod config;
mod duration;
mod error;
mod router;
mod service;
mod startup;
mod store;

use std::sync::Arc;

use serenity::http::Http;
use tracing_subscriber::EnvFilter;

use crate::channel::discord::DiscordChannel;
use crate::config::Config;
use crate::error::AppError;
use crate::service::giveaway::{GiveawayConfig, GiveawayService};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let store = startup::init_store(&config).await?;
    let http = Arc::new(Http::new(&config.discord_token));
    let service = GiveawayService::new(
        Arc::new(DiscordChannel::new(http)),
        store,
        GiveawayConfig {
            default_channel_id: config.giveaway_channel_id,
        },
    );

    // Timers do not survive restarts; the persisted records do.
    let rescheduled = service.reconcile().await?;
    tracing::info!("Rescheduled {} pending giveaway(s)", rescheduled);

    let port = config.liveness_port;
    tokio::spawn(async move {
        if let Err(e) = router::serve(port).await {
            tracing::error!("Liveness server error: {}", e);
        }
    });

    let client = bot::start::init_bot(&config, service).await?;
    bot::start::start_bot(client).await
}
