use clap::{Args, Subcommand, ValueEnum};
use schemalint::syntax::{KeywordDialect, ValidationConfig};
use std::path::PathBuf;

use crate::exit::{config_error, CliResult};
use crate::output::OutputFormat;

pub mod check;
pub mod keywords;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the syntax of one or more schema documents.
    Check(CheckArgs),
    /// List the keywords the active dialect recognizes.
    Keywords(KeywordsArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Check(args) => check::run(args, format),
        Command::Keywords(args) => keywords::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum DialectArg {
    #[default]
    DraftV3,
}

impl From<DialectArg> for KeywordDialect {
    fn from(dialect: DialectArg) -> Self {
        match dialect {
            DialectArg::DraftV3 => KeywordDialect::DraftV3,
        }
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema files to check (`-` reads stdin).
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
    /// Keyword dialect.
    #[arg(long, value_name = "DIALECT", default_value = "draft-v3")]
    pub dialect: DialectArg,
    /// Maximum sub-schema nesting depth.
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,
}

impl CheckArgs {
    pub fn config(&self) -> CliResult<ValidationConfig> {
        let mut builder = ValidationConfig::builder().dialect(self.dialect.into());
        if let Some(max_depth) = self.max_depth {
            builder = builder.max_depth(max_depth);
        }
        builder.build().map_err(config_error)
    }
}

#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// Keyword dialect.
    #[arg(long, value_name = "DIALECT", default_value = "draft-v3")]
    pub dialect: DialectArg,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build information.
    #[arg(long)]
    pub extended: bool,
}
