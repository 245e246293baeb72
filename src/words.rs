use std::io::{self, BufRead};
use std::path::Path;

use tracing::info;

use crate::depth::WordEntry;
use crate::error::{Error, Result};
use crate::wordnet::open_text;

/// Reads one word per line. Every line, blank ones included, becomes an
/// entry so results line up with the input.
pub fn word_list(path: &Path) -> Result<Vec<WordEntry>> {
    let unavailable = |e: io::Error| Error::WordListUnavailable {
        path: path.to_path_buf(),
        source: e,
    };
    let reader = open_text(path).map_err(unavailable)?;
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(unavailable)?;
        words.push(WordEntry {
            index: words.len() + 1,
            word: line.trim_end_matches('\r').to_string(),
        });
    }
    info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
