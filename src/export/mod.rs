//! Export system for matched files

mod console;
mod json;

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

pub use console::ConsoleExporter;
pub use json::JsonExporter;

/// Trait for output formatting
pub trait Exporter {
    /// Write the matched paths for the given run
    fn export(
        &self,
        matches: &[PathBuf],
        branch: &str,
        config: &Config,
        writer: &mut dyn Write,
    ) -> Result<()>;
}

/// Create an appropriate exporter based on configuration
pub fn create_exporter(format: OutputFormat) -> Box<dyn Exporter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleExporter),
        OutputFormat::Json => Box::new(JsonExporter),
    }
}

/// Get a writer for the output (file or stdout)
pub fn get_output_writer(path: &str) -> Result<Box<dyn Write>> {
    if path == "-" {
        Ok(Box::new(BufWriter::new(io::stdout())))
    } else {
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }
}
