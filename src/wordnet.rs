//! Access to a WordNet hypernym taxonomy, read either from the WNDB files of
//! a `dict` directory or from a JSON dump of noun synsets. Both are loaded
//! into memory once and only read afterwards.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use bzip2::read::BzDecoder;
use tracing::debug;

pub use wordnet_types::{Pos, SynsetId};

use crate::error::{Error, Result};
use crate::json::JsonWordNet;
use crate::wndb::WordNetDict;

pub trait Taxonomy: Send + Sync {
    /// Candidate base forms of a normalised word, most likely first.
    fn stems(&self, word: &str) -> Vec<String>;

    fn lookup_sense(&self, lemma: &str) -> Option<SynsetId>;

    fn hypernyms(&self, id: SynsetId) -> Vec<SynsetId>;
}

pub fn open(path: &Path) -> Result<Box<dyn Taxonomy>> {
    if path.is_dir() {
        debug!("reading WNDB files from {}", path.display());
        Ok(Box::new(WordNetDict::open(path)?))
    } else {
        debug!("reading JSON WordNet from {}", path.display());
        Ok(Box::new(JsonWordNet::open(path)?))
    }
}

pub fn resolve_root(taxonomy: &dyn Taxonomy, lemma: &str) -> Result<SynsetId> {
    taxonomy
        .lookup_sense(&normalize(lemma))
        .ok_or_else(|| Error::RootNotFound(lemma.to_string()))
}

/// Lowercases and joins internal whitespace with `_`, the way WordNet stores
/// collocations.
pub fn normalize(word: &str) -> String {
    word.split_whitespace()
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

pub fn open_text(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.extension().map_or(false, |ext| ext == "bz2") {
        Ok(Box::new(BufReader::new(BzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
