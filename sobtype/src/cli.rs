use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use eyre::{Context, Result};
use sobtype_codegen::Generator;
use sobtype_core::{DirSource, FsSink};

use crate::config::BatchConfig;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for crate::config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "sobtype")]
#[command(version)]
#[command(about = "Generate TypeScript definitions from sObject describe documents")]
#[command(group(ArgGroup::new("mode").required(true).args(["sobject", "config"])))]
pub(crate) struct Cli {
    /// Generate definitions for a single sObject
    #[arg(short, long)]
    sobject: Option<String>,

    /// JSON config listing sObjects for a batch run
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of describe documents, one <Name>.json per sObject
    #[arg(short, long, default_value = "describes")]
    describes: PathBuf,

    /// Output directory for generated TypeScript
    #[arg(short, long, default_value = "src/generated")]
    output: PathBuf,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let source = DirSource::new(&self.describes);
        let generator = Generator::new(&source);

        let written = match (&self.sobject, &self.config) {
            (Some(name), None) => generator
                .generate_single(name, &self.output, &FsSink)
                .wrap_err_with(|| format!("Failed to generate definitions for {name}"))?,
            (None, Some(path)) => {
                let config = BatchConfig::open(path).unwrap_or_exit();
                generator
                    .generate_batch(
                        &config.entity_names,
                        &config.special_children_to_map,
                        &self.output,
                        &FsSink,
                    )
                    .wrap_err("Failed to generate batch definitions")?
            }
            // clap's arg group guarantees exactly one mode
            _ => eyre::bail!("exactly one of --sobject or --config must be given"),
        };

        println!("Generated {} file(s):", written.len());
        for path in &written {
            println!("  {}", path.display());
        }

        Ok(())
    }
}
