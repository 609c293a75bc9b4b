//! Outbound message delivery.

use std::future::Future;
use std::sync::Arc;

use log::debug;
use poise::serenity_prelude::{ChannelId, CreateEmbed, CreateMessage, Http};

use crate::error::{BotError, Result};

/// Delivers bot-authored messages to a channel.
pub trait MessageSink: Send + Sync {
    /// Send a plain text message.
    fn send(&self, channel_id: ChannelId, text: &str) -> impl Future<Output = Result<()>> + Send;

    /// Send an error notice rendered as an embed.
    fn send_error(
        &self,
        channel_id: ChannelId,
        title: &str,
        description: &str,
    ) -> impl Future<Output = Result<()>> + Send;
}

impl<T: MessageSink> MessageSink for Arc<T> {
    fn send(&self, channel_id: ChannelId, text: &str) -> impl Future<Output = Result<()>> + Send {
        (**self).send(channel_id, text)
    }

    fn send_error(
        &self,
        channel_id: ChannelId,
        title: &str,
        description: &str,
    ) -> impl Future<Output = Result<()>> + Send {
        (**self).send_error(channel_id, title, description)
    }
}

/// `MessageSink` backed by the Discord REST client.
#[derive(Clone)]
pub struct HttpChannel {
    http: Arc<Http>,
}

impl HttpChannel {
    #[must_use]
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

impl MessageSink for HttpChannel {
    async fn send(&self, channel_id: ChannelId, text: &str) -> Result<()> {
        debug!("Sending message to channel {channel_id}");
        channel_id.say(&self.http, text).await?;
        Ok(())
    }

    async fn send_error(&self, channel_id: ChannelId, title: &str, description: &str) -> Result<()> {
        debug!("Sending error embed to channel {channel_id}");
        let embed = CreateEmbed::new().title(title).description(description);
        channel_id
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;
        Ok(())
    }
}
