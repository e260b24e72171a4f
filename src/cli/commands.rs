// CLI command definitions

use super::get::GetCommand;
use super::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gardenctl",
    version,
    about = "Navigate Gardener landscapes and fetch cluster credentials",
    long_about = "A CLI tool for resolving the targeted garden, project, seed and shoot into kubeconfigs and manifests"
)]
pub struct CliArgs {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputFormat::Yaml)]
    pub output: OutputFormat,

    /// Garden home directory holding the target file and caches
    /// If not specified, uses GARDENCTL_HOME or ~/.garden
    #[arg(long, global = true)]
    pub garden_home: Option<PathBuf>,

    /// Path to the garden config file
    /// If not specified, uses GARDENCONFIG or <garden-home>/config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Get a single resource or the target stack, e.g. the kubeconfig of a shoot (default: current target)
    Get(GetCommand),
}
