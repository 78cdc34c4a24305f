//! JSON exporter

use crate::config::Config;
use crate::error::Result;
use crate::export::Exporter;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// JSON output exporter
pub struct JsonExporter;

#[derive(Serialize)]
struct JsonOutput {
    branch: String,
    matches: Vec<String>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    start_dir: String,
    matched: usize,
}

impl Exporter for JsonExporter {
    fn export(
        &self,
        matches: &[PathBuf],
        branch: &str,
        config: &Config,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let output = JsonOutput {
            branch: branch.to_string(),
            matches: matches.iter().map(|p| p.display().to_string()).collect(),
            summary: JsonSummary {
                start_dir: config.start_dir.display().to_string(),
                matched: matches.len(),
            },
        };

        let json = serde_json::to_string_pretty(&output)?;
        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
