use crate::config::toml_config::ShellConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "caesar-shell")]
#[command(about = "Encrypt and decrypt text with a Caesar cipher, interactively")]
pub struct CliArgs {
    /// Optional TOML file with output and logging settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Load the config file if one was given, defaults otherwise.
    pub fn load_config(&self) -> Result<ShellConfig> {
        match &self.config {
            Some(path) => ShellConfig::from_file(path),
            None => Ok(ShellConfig::default()),
        }
    }
}
