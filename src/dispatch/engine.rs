//! Contract of the command-execution facility.

use std::future::Future;

use thiserror::Error;

use crate::types::CommandContext;

/// Why a command did not run to completion. `Display` is the reason shown in logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command.")]
    UnknownCommand,

    #[error("The input text has too many parameters.")]
    TooManyArguments,

    #[error("The input text has too few parameters.")]
    MissingArguments,

    #[error("{0}")]
    Exception(String),
}

/// The command the engine resolved the input to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: &'static str,
}

/// Result of one execution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// `None` when no command was matched.
    pub command: Option<CommandInfo>,
    pub result: Result<(), CommandError>,
}

impl CommandOutcome {
    #[must_use]
    pub fn unmatched() -> Self {
        Self {
            command: None,
            result: Err(CommandError::UnknownCommand),
        }
    }

    #[must_use]
    pub fn ran(command: CommandInfo, result: Result<(), CommandError>) -> Self {
        Self {
            command: Some(command),
            result,
        }
    }
}

/// Parses the text after the prefix into a command and runs it.
pub trait CommandEngine: Send + Sync {
    fn execute(
        &self,
        context: &CommandContext,
        input: &str,
    ) -> impl Future<Output = CommandOutcome> + Send;
}
