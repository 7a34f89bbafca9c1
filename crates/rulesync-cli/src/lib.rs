mod args;
mod commands;
mod handlers;
mod views;

pub use args::{Cli, Commands};
pub use commands::run;
