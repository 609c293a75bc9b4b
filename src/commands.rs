//! Statically registered text commands.

mod builtin;
mod registry;

pub use builtin::builtin_commands;
pub use registry::{ArgSpec, Command, CommandFuture, CommandRegistry, Invocation};
