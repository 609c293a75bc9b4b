//! Detection of the prefix that addresses a message to the bot.

use poise::serenity_prelude::UserId;

/// How a message addresses the bot, with the byte offset where user content starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    Mention(usize),
    Command(usize),
}

impl Prefix {
    /// Detect a mention of `bot_id` first, then the configured command prefix.
    #[must_use]
    pub fn detect(content: &str, bot_id: UserId, command_prefix: &str) -> Option<Self> {
        mention_offset(content, bot_id)
            .map(Prefix::Mention)
            .or_else(|| command_offset(content, command_prefix).map(Prefix::Command))
    }

    #[must_use]
    pub fn offset(self) -> usize {
        match self {
            Prefix::Mention(offset) | Prefix::Command(offset) => offset,
        }
    }
}

/// Returns the offset after a leading `<@ID> ` or `<@!ID> ` naming `bot_id`.
///
/// The mention must be followed by exactly one space before the user content.
#[must_use]
pub fn mention_offset(content: &str, bot_id: UserId) -> Option<usize> {
    if content.len() <= 3 || !content.starts_with("<@") {
        return None;
    }

    let end = content.find('>')?;
    if content.as_bytes().get(end + 1) != Some(&b' ') {
        return None;
    }

    let raw_id = content.get(2..end)?;
    let raw_id = raw_id.strip_prefix('!').unwrap_or(raw_id);
    let id: u64 = raw_id.parse().ok()?;

    (id == bot_id.get()).then_some(end + 2)
}

/// Returns the offset after `prefix` when `content` starts with it.
#[must_use]
pub fn command_offset(content: &str, prefix: &str) -> Option<usize> {
    if prefix.is_empty() {
        return None;
    }
    content.starts_with(prefix).then_some(prefix.len())
}
