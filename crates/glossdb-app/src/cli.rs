use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(name = "glossdb", about = "Builds per-language lemma databases for word-wise glosses")]
pub struct Cli {
    /// JSON config file, replaces the environment defaults
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build one lemma database per language
    Build {
        /// Languages to build, all configured languages when omitted
        #[clap(short, long, num_args = 1..)]
        lemma_langs: Vec<String>,
    },
    /// Write the source record CSV from a Kindle KLLD database
    Extract {
        klld: PathBuf,

        /// Defaults to the configured source record path
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
}
