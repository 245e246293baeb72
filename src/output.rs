use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use crate::depth::DepthResult;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `{{1, d1}, {2, d2}, ...}` with no trailing newline.
    Literal,
    Json,
    Tsv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<OutputFormat, String> {
        match s {
            "literal" => Ok(OutputFormat::Literal),
            "json" => Ok(OutputFormat::Json),
            "tsv" => Ok(OutputFormat::Tsv),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

pub fn write_results(path: &Path, format: OutputFormat, results: &[DepthResult]) -> Result<()> {
    let failed = |e: io::Error| Error::OutputFailed {
        path: path.to_path_buf(),
        source: e,
    };
    let f = File::create(path).map_err(failed)?;
    let mut out = BufWriter::new(f);
    write_to(&mut out, format, results).map_err(failed)?;
    out.flush().map_err(failed)?;
    info!("Wrote {} results to {}", results.len(), path.display());
    Ok(())
}

pub fn write_to<W: Write>(
    out: &mut W,
    format: OutputFormat,
    results: &[DepthResult],
) -> io::Result<()> {
    match format {
        OutputFormat::Literal => {
            write!(out, "{{")?;
            for (i, r) in results.iter().enumerate() {
                if i > 0 {
                    write!(out, ", ")?;
                }
                write!(out, "{{{}, {}}}", r.index, r.depth)?;
            }
            write!(out, "}}")
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, results)?;
            writeln!(out)
        }
        OutputFormat::Tsv => {
            for r in results {
                writeln!(out, "{}\t{}\t{}", r.index, r.word, r.depth)?;
            }
            Ok(())
        }
    }
}
