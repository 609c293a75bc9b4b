//! Forwarding of addressed messages to the command engine.

use log::debug;

use crate::channel::MessageSink;
use crate::types::{CommandContext, InboundMessage};

use super::completion::{CompletionHandler, DiagnosticSink, LogSink};
use super::engine::CommandEngine;

pub struct CommandDispatcher<E, S, D = LogSink> {
    engine: E,
    completion: CompletionHandler<S, D>,
}

impl<E, S, D> CommandDispatcher<E, S, D>
where
    E: CommandEngine,
    S: MessageSink,
    D: DiagnosticSink,
{
    /// Wire the engine to the handler it reports completions to.
    #[must_use]
    pub fn new(engine: E, completion: CompletionHandler<S, D>) -> Self {
        Self { engine, completion }
    }

    /// Run the content after `offset` as a command and report the outcome.
    pub async fn dispatch(&self, message: &InboundMessage, offset: usize) {
        let input = message.content.get(offset..).unwrap_or_default();
        let context = CommandContext::from(message);
        debug!(
            "Dispatching command from {} in channel {}: {input}",
            context.author_id, context.channel_id
        );

        let outcome = self.engine.execute(&context, input).await;
        self.completion.on_executed(&context, &outcome).await;
    }
}
