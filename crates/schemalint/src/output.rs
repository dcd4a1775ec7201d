use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use schemalint::syntax::{CheckerRegistry, KeywordDialect, ValidationMessage, ValidationReport};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// Result of checking one input document.
pub struct CheckOutcome {
    pub source: String,
    /// `Err` holds the reason the document could not be treated as a schema.
    pub result: Result<ValidationReport, String>,
}

impl CheckOutcome {
    pub fn is_success(&self) -> bool {
        matches!(&self.result, Ok(report) if report.is_success())
    }

    fn messages(&self) -> &[ValidationMessage] {
        match &self.result {
            Ok(report) => report.messages(),
            Err(_) => &[],
        }
    }
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    schema_id: &'a str,
    source: &'a str,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    messages: &'a [ValidationMessage],
}

pub fn print_outcome(outcome: &CheckOutcome, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = CheckOutput {
                schema_id: "https://schemas.3leaps.dev/schemalint/cli/v1/check-result.schema.json",
                source: &outcome.source,
                success: outcome.is_success(),
                error: outcome.result.as_ref().err().map(String::as_str),
                messages: outcome.messages(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["SOURCE", "PATH", "KEYWORD", "MESSAGE"]);
            match &outcome.result {
                Ok(report) if report.is_success() => {
                    table.add_row(vec![outcome.source.as_str(), "#", "-", "valid"]);
                }
                Ok(report) => {
                    for message in report.messages() {
                        table.add_row(vec![
                            outcome.source.clone(),
                            format!("#{}", message.path),
                            message.keyword.clone(),
                            message.message.clone(),
                        ]);
                    }
                }
                Err(reason) => {
                    table.add_row(vec![outcome.source.as_str(), "#", "-", reason.as_str()]);
                }
            }
            println!("{table}");
        }
        OutputFormat::Pretty => match &outcome.result {
            Ok(report) if report.is_success() => println!("{}: valid", outcome.source),
            Ok(report) => {
                for message in report.messages() {
                    println!("{}: {message}", outcome.source);
                }
            }
            Err(reason) => println!("{}: {reason}", outcome.source),
        },
        OutputFormat::Raw => {
            let verdict = if outcome.is_success() { "valid" } else { "invalid" };
            println!("{verdict}");
        }
    }
}

#[derive(Serialize)]
struct KeywordEntry<'a> {
    name: &'a str,
    grammar: &'a str,
}

#[derive(Serialize)]
struct KeywordsOutput<'a> {
    schema_id: &'a str,
    dialect: &'a str,
    keywords: Vec<KeywordEntry<'a>>,
}

pub fn print_keywords(dialect: KeywordDialect, registry: &CheckerRegistry, format: OutputFormat) {
    let entries: Vec<KeywordEntry<'_>> = registry
        .keywords()
        .into_iter()
        .map(|name| KeywordEntry {
            name,
            grammar: registry.lookup(name).map_or("", |checker| checker.grammar()),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let out = KeywordsOutput {
                schema_id: "https://schemas.3leaps.dev/schemalint/cli/v1/keywords.schema.json",
                dialect: dialect.name(),
                keywords: entries,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["KEYWORD", "GRAMMAR"]);
            for entry in &entries {
                table.add_row(vec![entry.name, entry.grammar]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("{} keywords ({})\n", dialect.name(), entries.len());
            for entry in &entries {
                println!("  {:<22} {}", entry.name, entry.grammar);
            }
        }
        OutputFormat::Raw => {
            for entry in &entries {
                println!("{}", entry.name);
            }
        }
    }
}
