use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use tsmock_codegen::{DeclarationResolver, Error, ResolveOptions};
use tsmock_resolver::{DEFAULT_INDEX_FILE, IndexResolver};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// TypeScript file to inspect
    pub file: PathBuf,

    /// Declaration index exported by your TypeScript tooling
    #[arg(short, long, default_value = DEFAULT_INDEX_FILE)]
    pub index: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let resolver = IndexResolver::open(&self.index).unwrap_or_exit();
        let source = std::path::absolute(&self.file)
            .wrap_err_with(|| format!("Invalid path '{}'", self.file.display()))?;

        let declarations = resolver
            .list_declarations(&source, &ResolveOptions::default())
            .map_err(Error::from)
            .and_then(|declarations| {
                if declarations.is_empty() {
                    Err(Error::NoDeclarations {
                        path: source.clone(),
                    })
                } else {
                    Ok(declarations)
                }
            })
            .unwrap_or_exit();

        println!("Declarations in {}:", self.file.display());
        for declaration in &declarations {
            let default = if declaration.default {
                ", default export"
            } else {
                ""
            };
            println!(
                "  {} ({}{})",
                declaration.identifier,
                declaration.ty.kind(),
                default
            );
        }

        Ok(())
    }
}
