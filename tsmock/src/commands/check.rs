use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use tsmock_config::CONFIG_FILE;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the rules module (defaults to ./.tsmock/rules.toml)
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Path to tsmock.toml (defaults to ./tsmock.toml)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
        let report = ops::check(self.rules.as_deref(), &cwd, &self.config).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
