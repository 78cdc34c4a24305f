//! Console (line-per-path) exporter

use crate::config::Config;
use crate::error::Result;
use crate::export::Exporter;
use std::io::Write;
use std::path::PathBuf;

/// Plain output exporter, one absolute path per line
pub struct ConsoleExporter;

impl Exporter for ConsoleExporter {
    fn export(
        &self,
        matches: &[PathBuf],
        _branch: &str,
        _config: &Config,
        writer: &mut dyn Write,
    ) -> Result<()> {
        for path in matches {
            writeln!(writer, "{}", path.display())?;
        }

        Ok(())
    }
}
