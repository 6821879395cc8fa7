use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use tracing::info;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Starts the Discord bot in a blocking manner
///
/// Builds the client, installs a ctrl-c handler that shuts the shards down
/// cleanly, and runs until the gateway connection ends.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection for the bot to use
///
/// # Returns
/// - `Ok(())` if the bot shuts down cleanly
/// - `Err(AppError)` if client construction or the connection fails
pub async fn start_bot(config: Arc<Config>, db: DatabaseConnection) -> Result<(), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in the Discord
    // Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(db, config.clone());

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received shutdown signal, closing gateway connection");
            shard_manager.shutdown_all().await;
        }
    });

    info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
