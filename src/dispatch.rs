//! Routing of inbound messages to canned replies or the command engine.

mod completion;
mod dispatcher;
mod engine;
mod handler;

pub use completion::{CompletionHandler, DiagnosticSink, LogSink};
pub use dispatcher::CommandDispatcher;
pub use engine::{CommandEngine, CommandError, CommandInfo, CommandOutcome};
pub use handler::{Handled, MessageHandler};
