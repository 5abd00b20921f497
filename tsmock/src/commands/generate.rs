use std::path::PathBuf;

use clap::Args;
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use tsmock_codegen::{MockGenerator, Selection};
use tsmock_config::{CONFIG_FILE, ConfigStore, Settings};
use tsmock_core::Indent;
use tsmock_resolver::{DEFAULT_INDEX_FILE, IndexResolver, RuleRewriter};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// TypeScript file that declares the type
    pub file: PathBuf,

    /// Declaration to mock (prompts for one when omitted)
    #[arg(short = 't', long = "type", value_name = "NAME")]
    pub type_name: Option<String>,

    /// Declaration index exported by your TypeScript tooling
    #[arg(short, long, default_value = DEFAULT_INDEX_FILE)]
    pub index: PathBuf,

    /// Path to the rules module (defaults to ./.tsmock/rules.toml when present)
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Path to tsmock.toml (defaults to ./tsmock.toml)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Output directory, relative to the mocked file (overrides tsmock.toml)
    #[arg(long)]
    pub mock_location: Option<String>,

    /// Indentation of the mock value: 2, 4 or tab (overrides tsmock.toml)
    #[arg(long)]
    pub indent: Option<Indent>,

    /// Preview the mock without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let settings = self.settings();
        let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
        let rules = ops::load_rules(self.rules.as_deref(), &cwd).unwrap_or_exit();
        let resolver = IndexResolver::open(&self.index).unwrap_or_exit();
        let source = std::path::absolute(&self.file)
            .wrap_err_with(|| format!("Invalid path '{}'", self.file.display()))?;

        let generator = MockGenerator::new(&resolver, &RuleRewriter, &rules, &settings);
        let selection = match &self.type_name {
            Some(name) => Selection::Chosen(name.clone()),
            None => Self::prompt_declaration(&generator, &source)?,
        };

        let report = ops::generate(&generator, &source, selection, self.dry_run).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    /// Settings from tsmock.toml with command line overrides applied.
    fn settings(&self) -> Settings {
        let store = ConfigStore::open(&self.config).unwrap_or_exit();
        let mut settings = store.settings().clone();

        if let Some(location) = &self.mock_location {
            settings.mock_location = location.clone();
        }
        if let Some(indent) = self.indent {
            settings.indent = indent;
        }
        settings
    }

    fn prompt_declaration(
        generator: &MockGenerator<'_, IndexResolver, RuleRewriter>,
        source: &std::path::Path,
    ) -> Result<Selection> {
        let names: Vec<String> = generator
            .declarations(source)
            .unwrap_or_exit()
            .into_iter()
            .map(|d| d.identifier)
            .collect();

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a declaration to mock")
            .items(&names)
            .default(0)
            .interact_opt()
            .wrap_err("Failed to get declaration selection")?;

        Ok(match selection {
            Some(index) => Selection::Chosen(names[index].clone()),
            None => Selection::Cancelled,
        })
    }
}
