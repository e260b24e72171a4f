//! Build automation for gardenctl
//!
//! Usage: cargo xtask <command>
//!
//! Available commands:
//! - test: Run unit and integration tests, optionally those needing a live garden
//! - ci: Run format, clippy and test checks
//! - install: Install the release binary

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use xshell::{cmd, Shell};

const BINARY: &str = "gardenctl";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for gardenctl")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run tests
    Test {
        /// Also run tests that talk to the garden in ~/.garden
        #[arg(long)]
        live: bool,
    },
    /// Run CI checks (format, clippy, test)
    Ci,
    /// Install to system
    Install {
        /// Installation prefix
        #[arg(long, default_value = "/usr/local")]
        prefix: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;
    sh.change_dir(project_root()?);

    match cli.command {
        Commands::Test { live } => test(&sh, live),
        Commands::Ci => ci(&sh),
        Commands::Install { prefix } => install(&sh, &prefix),
    }
}

fn test(sh: &Shell, live: bool) -> Result<()> {
    cmd!(sh, "cargo test --all").run()?;
    if live {
        cmd!(sh, "cargo test --test integration_test -- --ignored").run()?;
    }
    println!("✅ All tests passed");
    Ok(())
}

fn ci(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo fmt --all -- --check").run()?;
    cmd!(sh, "cargo clippy --all-targets -- -D warnings").run()?;
    test(sh, false)?;
    println!("✅ All CI checks passed!");
    Ok(())
}

fn install(sh: &Shell, prefix: &str) -> Result<()> {
    cmd!(sh, "cargo build --release").run()?;

    let bin_dir = Path::new(prefix).join("bin");
    sh.create_dir(&bin_dir)?;
    let install_path = bin_dir.join(BINARY);
    sh.copy_file(project_root()?.join("target/release").join(BINARY), &install_path)
        .with_context(|| format!("Failed to install to {}", install_path.display()))?;

    println!("✅ Installed to: {}", install_path.display());
    Ok(())
}

fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live inside the workspace")
}
