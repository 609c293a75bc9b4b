//! Common types used throughout the pricebot.

use poise::serenity_prelude::{ChannelId, Message as SerenityMessage, MessageType, UserId};

/// Where an inbound message came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSource {
    /// A regular message typed by a human
    User,
    /// A message authored by a bot account, including this one
    Bot,
    /// A message posted through a webhook
    Webhook,
    /// Join notices, pins, boosts and other platform-generated messages
    System,
}

impl MessageSource {
    /// Classify a gateway message.
    #[must_use]
    pub fn of(message: &SerenityMessage) -> Self {
        if message.webhook_id.is_some() {
            MessageSource::Webhook
        } else if message.author.bot {
            MessageSource::Bot
        } else if matches!(message.kind, MessageType::Regular | MessageType::InlineReply) {
            MessageSource::User
        } else {
            MessageSource::System
        }
    }
}

/// A chat message as seen by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub author_id: UserId,
    pub channel_id: ChannelId,
    pub content: String,
    pub source: MessageSource,
}

impl From<&SerenityMessage> for InboundMessage {
    fn from(message: &SerenityMessage) -> Self {
        Self {
            author_id: message.author.id,
            channel_id: message.channel_id,
            content: message.content.clone(),
            source: MessageSource::of(message),
        }
    }
}

/// Who invoked a command and where the answer goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandContext {
    pub author_id: UserId,
    pub channel_id: ChannelId,
}

impl From<&InboundMessage> for CommandContext {
    fn from(message: &InboundMessage) -> Self {
        Self {
            author_id: message.author_id,
            channel_id: message.channel_id,
        }
    }
}
