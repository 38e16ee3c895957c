#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "folio")]
#[command(about = "Browse portfolio content and preview the hero animations")]
pub struct CliConfig {
    /// Path to the portfolio TOML file
    #[arg(short, long, default_value = "portfolio.toml")]
    pub config: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Print results as JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}
