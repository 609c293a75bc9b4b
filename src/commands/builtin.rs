//! Commands available out of the box.

use std::fmt::Write;

use futures::FutureExt;

use super::registry::{ArgSpec, Command, CommandFuture, Invocation};

/// Get the commands registered at startup.
#[must_use]
pub fn builtin_commands() -> Vec<Command> {
    vec![
        Command {
            name: "ping",
            aliases: &[],
            description: "Check that the bot is responding.",
            args: ArgSpec::None,
            handler: ping,
        },
        Command {
            name: "help",
            aliases: &["commands"],
            description: "List the available commands.",
            args: ArgSpec::None,
            handler: help,
        },
        Command {
            name: "echo",
            aliases: &["say"],
            description: "Repeat the given text.",
            args: ArgSpec::Required("text"),
            handler: echo,
        },
    ]
}

fn ping(_: Invocation<'_>) -> CommandFuture<'_> {
    async { Ok(Some("Pong!".to_string())) }.boxed()
}

fn help(invocation: Invocation<'_>) -> CommandFuture<'_> {
    async move {
        let mut text = String::from("Available commands:");
        for command in invocation.commands {
            let _ = write!(text, "\n`{}` - {}", command.usage(), command.description);
        }
        Ok(Some(text))
    }
    .boxed()
}

fn echo(invocation: Invocation<'_>) -> CommandFuture<'_> {
    async move { Ok(Some(invocation.args.to_string())) }.boxed()
}
