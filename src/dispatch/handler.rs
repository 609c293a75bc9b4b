//! Entry point for every message received from the gateway.

use log::{debug, info};
use poise::serenity_prelude::UserId;

use crate::channel::MessageSink;
use crate::error::Result;
use crate::mention::{MentionReply, Prefix};
use crate::types::{InboundMessage, MessageSource};

use super::completion::{DiagnosticSink, LogSink};
use super::dispatcher::CommandDispatcher;
use super::engine::CommandEngine;

/// What happened to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Ignored,
    Replied,
    Dispatched,
}

pub struct MessageHandler<E, S, D = LogSink> {
    bot_id: UserId,
    command_prefix: String,
    sink: S,
    dispatcher: CommandDispatcher<E, S, D>,
}

impl<E, S, D> MessageHandler<E, S, D>
where
    E: CommandEngine,
    S: MessageSink,
    D: DiagnosticSink,
{
    #[must_use]
    pub fn new(
        bot_id: UserId,
        command_prefix: impl Into<String>,
        sink: S,
        dispatcher: CommandDispatcher<E, S, D>,
    ) -> Self {
        Self {
            bot_id,
            command_prefix: command_prefix.into(),
            sink,
            dispatcher,
        }
    }

    /// Answer a compliment, dispatch a command, or ignore the message.
    ///
    /// # Errors
    ///
    /// Returns an error if the canned reply cannot be delivered.
    pub async fn handle(&self, message: &InboundMessage) -> Result<Handled> {
        if message.source != MessageSource::User {
            debug!(
                "Ignoring {:?} message from {}",
                message.source, message.author_id
            );
            return Ok(Handled::Ignored);
        }

        let Some(prefix) = Prefix::detect(&message.content, self.bot_id, &self.command_prefix)
        else {
            return Ok(Handled::Ignored);
        };

        if let Prefix::Mention(offset) = prefix
            && let Some(reply) = MentionReply::for_message(message, offset)
        {
            self.sink.send(reply.channel_id, &reply.text).await?;
            info!(
                "Replied to {} in channel {}: {}",
                message.author_id, reply.channel_id, reply.text
            );
            return Ok(Handled::Replied);
        }

        self.dispatcher.dispatch(message, prefix.offset()).await;
        Ok(Handled::Dispatched)
    }
}
