pub mod bot;
pub mod channel;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod mention;
pub mod types;

pub use bot::run;
