//! Discord gateway wiring and event handling.

use std::error::Error as StdError;

use log::{debug, error, info};
use poise::{
    Framework, FrameworkOptions,
    serenity_prelude::{ClientBuilder, FullEvent, GatewayIntents},
};

use crate::channel::HttpChannel;
use crate::commands::{CommandRegistry, builtin_commands};
use crate::config::Config;
use crate::dispatch::{CommandDispatcher, CompletionHandler, MessageHandler};
use crate::error::Result;
use crate::types::InboundMessage;

type EventResult = std::result::Result<(), Box<dyn StdError + Send + Sync>>;

pub struct Data {
    handler: MessageHandler<CommandRegistry<HttpChannel>, HttpChannel>,
}

/// Run the Discord bot.
///
/// # Errors
///
/// Returns an error if configuration is missing or the client cannot connect.
pub async fn run() -> Result<()> {
    info!("Initializing bot");
    let config = Config::from_env()?;

    debug!("Setting up gateway intents");
    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    let discord_token = config.discord_token.clone();

    debug!("Building framework");
    let framework = Framework::builder()
        .options(FrameworkOptions {
            event_handler: |_ctx, event, _framework, data| Box::pin(event_handler(event, data)),
            ..Default::default()
        })
        .setup(move |ctx, ready, _framework| {
            Box::pin(async move {
                info!(
                    "Bot is ready and connected to Discord as {} ({})",
                    ready.user.name, ready.user.id
                );

                let channel = HttpChannel::new(ctx.http.clone());
                let registry = CommandRegistry::new(builtin_commands(), channel.clone());
                let completion =
                    CompletionHandler::new(channel.clone(), config.notify_command_errors);
                let dispatcher = CommandDispatcher::new(registry, completion);
                let handler =
                    MessageHandler::new(ready.user.id, config.command_prefix, channel, dispatcher);

                Ok(Data { handler })
            })
        })
        .build();

    debug!("Creating Discord client");
    let mut client = ClientBuilder::new(discord_token, intents)
        .framework(framework)
        .await?;

    info!("Starting Discord client");

    tokio::select! {
        result = client.start() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, shutting down...");
        }
    }

    Ok(())
}

async fn event_handler(event: &FullEvent, data: &Data) -> EventResult {
    if let FullEvent::Message { new_message } = event {
        let message = InboundMessage::from(new_message);
        if let Err(e) = data.handler.handle(&message).await {
            error!(
                "Error handling message from {} in channel {}: {e}",
                message.author_id, message.channel_id
            );
        }
    }
    Ok(())
}
