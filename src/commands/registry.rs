//! Command lookup, argument checks and execution.

use futures::future::BoxFuture;
use log::{debug, warn};

use crate::channel::MessageSink;
use crate::dispatch::{CommandEngine, CommandError, CommandInfo, CommandOutcome};
use crate::types::CommandContext;

/// Future returned by a command handler. `Some` text is sent back to the channel.
pub type CommandFuture<'a> = BoxFuture<'a, Result<Option<String>, CommandError>>;

/// Arguments passed to a running command.
#[derive(Clone, Copy)]
pub struct Invocation<'a> {
    pub context: &'a CommandContext,
    pub args: &'a str,
    pub commands: &'a [Command],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgSpec {
    /// The command takes no arguments.
    None,
    /// The command needs free text, named for the help listing.
    Required(&'static str),
}

pub struct Command {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub args: ArgSpec,
    pub handler: for<'a> fn(Invocation<'a>) -> CommandFuture<'a>,
}

impl Command {
    fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }

    /// Usage line shown by `help`.
    #[must_use]
    pub fn usage(&self) -> String {
        match self.args {
            ArgSpec::None => self.name.to_string(),
            ArgSpec::Required(arg) => format!("{} <{arg}>", self.name),
        }
    }

    fn info(&self) -> CommandInfo {
        CommandInfo { name: self.name }
    }
}

/// The command engine used by the bot: a fixed list of commands and the channel
/// their replies go to.
pub struct CommandRegistry<S> {
    commands: Vec<Command>,
    sink: S,
}

impl<S: MessageSink> CommandRegistry<S> {
    #[must_use]
    pub fn new(commands: Vec<Command>, sink: S) -> Self {
        debug!("Registered {} commands", commands.len());
        Self { commands, sink }
    }

    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    fn find(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.answers_to(name))
    }

    async fn run(
        &self,
        command: &Command,
        context: &CommandContext,
        args: &str,
    ) -> Result<(), CommandError> {
        match (command.args, args.is_empty()) {
            (ArgSpec::None, false) => return Err(CommandError::TooManyArguments),
            (ArgSpec::Required(_), true) => return Err(CommandError::MissingArguments),
            _ => {}
        }

        let invocation = Invocation {
            context,
            args,
            commands: &self.commands,
        };

        if let Some(reply) = (command.handler)(invocation).await? {
            self.sink
                .send(context.channel_id, &reply)
                .await
                .map_err(|e| {
                    warn!("Failed to send reply for '{}': {e}", command.name);
                    CommandError::Exception(e.to_string())
                })?;
        }
        Ok(())
    }
}

impl<S: MessageSink> CommandEngine for CommandRegistry<S> {
    async fn execute(&self, context: &CommandContext, input: &str) -> CommandOutcome {
        let input = input.trim();
        let (name, args) = input
            .split_once(char::is_whitespace)
            .map_or((input, ""), |(name, args)| (name, args.trim()));

        let Some(command) = self.find(name) else {
            debug!("No command named '{name}'");
            return CommandOutcome::unmatched();
        };

        debug!("Running command '{}' with args: {args}", command.name);
        CommandOutcome::ran(command.info(), self.run(command, context, args).await)
    }
}
