//! Classification of mention content and reply composition.

use log::debug;
use poise::serenity_prelude::{ChannelId, UserId};

use crate::types::InboundMessage;

use super::adjective::Adjective;

const SUBJECT: &str = "bot";

/// A canned reply bound to the channel it answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionReply {
    pub channel_id: ChannelId,
    pub text: String,
}

impl MentionReply {
    /// Classify the content of `message` after the mention prefix ending at `offset`.
    #[must_use]
    pub fn for_message(message: &InboundMessage, offset: usize) -> Option<Self> {
        let remainder = message.content.get(offset..)?;
        let adjective = classify(remainder)?;
        debug!(
            "Mention matched '{adjective} {SUBJECT}' from {}",
            message.author_id
        );

        Some(Self {
            channel_id: message.channel_id,
            text: compose_reply(message.author_id, adjective),
        })
    }
}

/// Match `"<adjective> bot"` at the start of the text following a mention.
///
/// Tokens are split on single spaces after trimming; anything past the second token
/// is ignored.
#[must_use]
pub fn classify(remainder: &str) -> Option<Adjective> {
    let mut tokens = remainder.trim().split(' ');
    let adjective = tokens.next().unwrap_or_default();
    let subject = tokens.next().unwrap_or_default();

    if !subject.eq_ignore_ascii_case(SUBJECT) {
        return None;
    }
    Adjective::resolve(adjective)
}

#[must_use]
pub fn compose_reply(author_id: UserId, adjective: Adjective) -> String {
    format!("<@{author_id}> {adjective} Human! {}", adjective.emoji())
}
