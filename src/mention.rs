//! Canned replies to "<adjective> bot" mentions.

mod adjective;
mod prefix;
mod reply;

pub use adjective::Adjective;
pub use prefix::{Prefix, command_offset, mention_offset};
pub use reply::{MentionReply, classify, compose_reply};
