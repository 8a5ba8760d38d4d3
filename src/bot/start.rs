use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::service::giveaway::GiveawayService;

/// Builds the gateway client with the event handler wired to the giveaway
/// service.
///
/// MESSAGE_CONTENT is a privileged intent - must be enabled in the Discord
/// Developer Portal for the prefix command to see message text.
pub async fn init_bot(config: &Config, service: GiveawayService) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler::new(
            service,
            config.command_prefix.clone(),
            config.staff_role_ids.clone(),
        ))
        .await?;

    Ok(client)
}

/// Runs the bot until the gateway connection ends.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    client.start().await?;

    Ok(())
}
