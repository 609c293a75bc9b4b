//! Post-execution reporting of command failures.

use log::{error, warn};

use crate::channel::MessageSink;
use crate::types::CommandContext;

use super::engine::CommandOutcome;

const ERROR_TITLE: &str = "Error";

/// Append-only output for failure reasons.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, line: &str);
}

/// Writes diagnostics through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, line: &str) {
        error!("{line}");
    }
}

/// Runs once per dispatched command after the engine finishes.
pub struct CompletionHandler<S, D = LogSink> {
    sink: S,
    diagnostics: D,
    notify_errors: bool,
}

impl<S: MessageSink> CompletionHandler<S> {
    /// Handler that logs failures, and posts them to the channel when `notify_errors` is set.
    #[must_use]
    pub fn new(sink: S, notify_errors: bool) -> Self {
        Self::with_diagnostics(sink, LogSink, notify_errors)
    }
}

impl<S: MessageSink, D: DiagnosticSink> CompletionHandler<S, D> {
    #[must_use]
    pub fn with_diagnostics(sink: S, diagnostics: D, notify_errors: bool) -> Self {
        Self {
            sink,
            diagnostics,
            notify_errors,
        }
    }

    /// Report a failed outcome. Unmatched commands and successes are silent.
    pub async fn on_executed(&self, context: &CommandContext, outcome: &CommandOutcome) {
        if outcome.command.is_none() {
            return;
        }
        let Err(reason) = &outcome.result else {
            return;
        };

        let reason = reason.to_string();
        self.diagnostics.report(&format!("Error: {reason}"));

        if !self.notify_errors {
            return;
        }
        if let Err(e) = self
            .sink
            .send_error(context.channel_id, ERROR_TITLE, &reason)
            .await
        {
            warn!(
                "Failed to notify channel {} about command error: {e}",
                context.channel_id
            );
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use super::DiagnosticSink;

    /// Collects reported lines for assertions.
    #[derive(Clone, Default)]
    pub struct RecordingDiagnostics {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingDiagnostics {
        pub fn lines(&self) -> Vec<String> {
            self.lines.lock().map(|l| l.clone()).unwrap_or_default()
        }
    }

    impl DiagnosticSink for RecordingDiagnostics {
        fn report(&self, line: &str) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(line.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use poise::serenity_prelude::{ChannelId, UserId};

    use super::testing::RecordingDiagnostics;
    use super::*;
    use crate::channel::testing::{RecordingChannel, Sent};
    use crate::dispatch::{CommandError, CommandInfo};

    const PING: CommandInfo = CommandInfo { name: "ping" };

    fn context() -> CommandContext {
        CommandContext {
            author_id: UserId::new(1),
            channel_id: ChannelId::new(2),
        }
    }

    fn handler(
        notify: bool,
    ) -> (
        CompletionHandler<Arc<RecordingChannel>, RecordingDiagnostics>,
        Arc<RecordingChannel>,
        RecordingDiagnostics,
    ) {
        let channel = Arc::new(RecordingChannel::default());
        let diagnostics = RecordingDiagnostics::default();
        let handler =
            CompletionHandler::with_diagnostics(channel.clone(), diagnostics.clone(), notify);
        (handler, channel, diagnostics)
    }

    #[tokio::test]
    async fn failure_is_logged_without_channel_notice() {
        let (handler, channel, diagnostics) = handler(false);
        let outcome = CommandOutcome::ran(
            PING,
            Err(CommandError::Exception("Unknown command".to_string())),
        );

        handler.on_executed(&context(), &outcome).await;

        let lines = diagnostics.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Unknown command"));
        assert!(channel.sent().is_empty());
    }

    #[tokio::test]
    async fn success_is_silent() {
        let (handler, channel, diagnostics) = handler(true);
        handler
            .on_executed(&context(), &CommandOutcome::ran(PING, Ok(())))
            .await;
        assert!(diagnostics.lines().is_empty());
        assert!(channel.sent().is_empty());
    }

    #[tokio::test]
    async fn unmatched_command_is_silent() {
        let (handler, channel, diagnostics) = handler(true);
        handler
            .on_executed(&context(), &CommandOutcome::unmatched())
            .await;
        assert!(diagnostics.lines().is_empty());
        assert!(channel.sent().is_empty());
    }

    #[tokio::test]
    async fn notification_posts_error_embed_when_enabled() {
        let (handler, channel, diagnostics) = handler(true);
        let outcome = CommandOutcome::ran(PING, Err(CommandError::TooManyArguments));

        handler.on_executed(&context(), &outcome).await;

        assert_eq!(
            diagnostics.lines(),
            ["Error: The input text has too many parameters."]
        );
        assert_eq!(
            channel.sent(),
            [Sent::Error(
                ChannelId::new(2),
                "Error".to_string(),
                "The input text has too many parameters.".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn failed_notification_does_not_escape() {
        let channel = Arc::new(RecordingChannel::failing());
        let diagnostics = RecordingDiagnostics::default();
        let handler = CompletionHandler::with_diagnostics(channel, diagnostics.clone(), true);
        let outcome = CommandOutcome::ran(PING, Err(CommandError::MissingArguments));

        handler.on_executed(&context(), &outcome).await;

        assert_eq!(diagnostics.lines().len(), 1);
    }
}
