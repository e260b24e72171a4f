pub mod commands;
pub mod get;
pub mod output;

pub use commands::{CliArgs, Commands, GlobalArgs};
pub use output::OutputFormat;
