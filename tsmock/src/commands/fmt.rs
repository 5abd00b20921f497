use std::{io::Read, path::PathBuf};

use clap::Args;
use eyre::{Context, Result};
use tsmock_codegen::{Error, prettify};
use tsmock_config::{CONFIG_FILE, ConfigStore};
use tsmock_core::Indent;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct FmtCommand {
    /// Expression to format (reads stdin when omitted)
    pub expr: Option<String>,

    /// Indentation: 2, 4 or tab (defaults to the tsmock.toml setting)
    #[arg(long)]
    pub indent: Option<Indent>,

    /// Path to tsmock.toml (defaults to ./tsmock.toml)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Check if the expression is formatted without printing it (exit 1 if not)
    #[arg(long)]
    pub check: bool,
}

impl FmtCommand {
    pub fn run(&self) -> Result<()> {
        let input = match &self.expr {
            Some(expr) => expr.clone(),
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .wrap_err("Failed to read stdin")?;
                buf.trim_end().to_string()
            }
        };

        let indent = match self.indent {
            Some(indent) => indent,
            None => ConfigStore::open(&self.config).unwrap_or_exit().settings().indent,
        };

        let formatted = prettify(&input, indent)
            .map_err(Error::from)
            .unwrap_or_exit();

        if self.check {
            if formatted != input {
                eprintln!("error: expression is not formatted");
                eprintln!("Run `tsmock fmt` to fix.");
                std::process::exit(1);
            }
            println!("expression is formatted");
        } else {
            println!("{}", formatted);
        }

        Ok(())
    }
}
