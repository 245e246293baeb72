//! WordNet as a single JSON object of synsets keyed by id:
//!
//! ```text
//! { "wn31-00001740-n": { "parents": [], "lemmas": ["entity"], ... }, ... }
//! ```
//!
//! The order of the object is the sense ranking: the first synset listing a
//! lemma is that lemma's first sense. Only noun synsets are kept.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde_derive::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::stem::Stemmer;
use crate::wordnet::{normalize, open_text, Pos, SynsetId, Taxonomy};

#[derive(Deserialize)]
struct RawEntry {
    parents: Vec<String>,
    lemmas: Vec<String>,
}

pub struct JsonWordNet {
    parents: HashMap<SynsetId, Vec<SynsetId>>,
    senses: HashMap<String, Vec<SynsetId>>,
    stemmer: Stemmer,
}

impl JsonWordNet {
    pub fn new() -> JsonWordNet {
        JsonWordNet {
            parents: HashMap::new(),
            senses: HashMap::new(),
            stemmer: Stemmer::rules_only(),
        }
    }

    pub fn open(path: &Path) -> Result<JsonWordNet> {
        let reader = open_text(path).map_err(|e| Error::unavailable(path, e))?;
        let raw: Map<String, Value> = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                Error::unavailable(path, e)
            } else {
                Error::MalformedResource {
                    path: path.to_path_buf(),
                    line: e.line(),
                    msg: e.to_string(),
                }
            }
        })?;

        let mut wn = JsonWordNet::new();
        let mut skipped = 0;
        for (key, value) in raw {
            let entry: RawEntry = serde_json::from_value(value)
                .map_err(|e| Error::malformed_synset(path, key.as_str(), e.to_string()))?;
            let id = parse_id(&key)
                .ok_or_else(|| Error::malformed_synset(path, key.as_str(), "not a synset id"))?;
            let parents = entry
                .parents
                .iter()
                .map(|p| {
                    parse_id(p).ok_or_else(|| {
                        Error::malformed_synset(path, key.as_str(), format!("bad parent {}", p))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            if id.pos != Pos::Noun {
                skipped += 1;
                continue;
            }
            wn.insert(id, entry.lemmas.as_slice(), &parents);
        }
        debug!("skipped {} synsets that are not nouns", skipped);
        info!(
            "Loaded {} synsets and {} lemmas",
            wn.parents.len(),
            wn.senses.len()
        );
        Ok(wn)
    }

    /// Adds a synset after those already present, so it ranks last for each
    /// of its lemmas. Synsets and parents that are not nouns are ignored.
    pub fn insert<S: AsRef<str>>(&mut self, id: SynsetId, lemmas: &[S], parents: &[SynsetId]) {
        if id.pos != Pos::Noun {
            return;
        }
        let mut seen = HashSet::new();
        for lemma in lemmas {
            let lemma = normalize(lemma.as_ref());
            if seen.insert(lemma.clone()) {
                self.senses.entry(lemma).or_insert_with(Vec::new).push(id);
            }
        }
        self.parents.insert(
            id,
            parents
                .iter()
                .filter(|p| p.pos == Pos::Noun)
                .copied()
                .collect(),
        );
    }
}

impl Default for JsonWordNet {
    fn default() -> JsonWordNet {
        JsonWordNet::new()
    }
}

/// `wn31-00001740-n` or `00001740-n`.
fn parse_id(id: &str) -> Option<SynsetId> {
    let mut parts = id.rsplit('-');
    let pos = parts.next().and_then(|p| {
        let mut chars = p.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Pos::from_char(c),
            _ => None,
        }
    })?;
    let offset = parts.next()?;
    if offset.is_empty() || !offset.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(SynsetId {
        pos,
        offset: offset.parse().ok()?,
    })
}

impl Taxonomy for JsonWordNet {
    fn stems(&self, word: &str) -> Vec<String> {
        self.stemmer
            .stems_for(Pos::Noun, word, |_, lemma| self.senses.contains_key(lemma))
    }

    fn lookup_sense(&self, lemma: &str) -> Option<SynsetId> {
        self.senses.get(lemma).and_then(|ids| ids.first()).copied()
    }

    fn hypernyms(&self, id: SynsetId) -> Vec<SynsetId> {
        self.parents.get(&id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    use bzip2::write::BzEncoder;
    use bzip2::Compression;

    const WORDNET_JSON: &str = r#"{
        "wn31-00001740-n": {"parents": [], "lemmas": ["entity"], "defn": "that which exists", "is_instance": false},
        "wn31-00015388-n": {"parents": ["wn31-00001740-n"], "lemmas": ["animal", "animate being"], "defn": "a living organism", "is_instance": false},
        "wn31-02084071-n": {"parents": ["wn31-00015388-n"], "lemmas": ["dog", "Canis familiaris"], "defn": "a domesticated canine", "is_instance": false},
        "wn31-10114209-n": {"parents": ["wn31-00001740-n"], "lemmas": ["dog"], "defn": "a dull person", "is_instance": false}
    }"#;

    fn noun(offset: u32) -> SynsetId {
        SynsetId {
            pos: Pos::Noun,
            offset,
        }
    }

    fn write_json(body: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordnet.json");
        fs::write(&path, body).unwrap();
        (dir, path)
    }

    #[test]
    fn first_listed_synset_is_first_sense() {
        let (_dir, path) = write_json(WORDNET_JSON);
        let wn = JsonWordNet::open(&path).unwrap();

        assert_eq!(wn.lookup_sense("dog"), Some(noun(2084071)));
        assert_eq!(wn.lookup_sense("canis_familiaris"), Some(noun(2084071)));
        assert_eq!(wn.hypernyms(noun(2084071)), vec![noun(15388)]);
        assert_eq!(wn.stems("dogs"), vec!["dog"]);
        assert_eq!(wn.stems("animate_being"), vec!["animate_being"]);
    }

    #[test]
    fn reads_bzip2_compressed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordnet.json.bz2");
        let mut encoder = BzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(WORDNET_JSON.as_bytes()).unwrap();
        fs::write(&path, encoder.finish().unwrap()).unwrap();

        let wn = JsonWordNet::open(&path).unwrap();
        assert_eq!(wn.lookup_sense("entity"), Some(noun(1740)));
    }

    #[test]
    fn syntax_error_is_malformed() {
        let (_dir, path) = write_json("{\n\"a\": {\"parents\": [}\n");
        match JsonWordNet::open(&path) {
            Err(Error::MalformedResource { line, .. }) => assert_eq!(line, 2),
            Err(e) => panic!("unexpected error {}", e),
            Ok(_) => panic!("parsed broken JSON"),
        }
    }

    #[test]
    fn bad_synset_names_its_id() {
        let (_dir, path) = write_json(r#"{"wn31-00001740-n": {"parents": []}}"#);
        match JsonWordNet::open(&path) {
            Err(e @ Error::MalformedSynset { .. }) => {
                assert!(e.to_string().starts_with("bad synset wn31-00001740-n in "))
            }
            Err(e) => panic!("unexpected error {}", e),
            Ok(_) => panic!("accepted a synset without lemmas"),
        }

        let (_dir, path) = write_json(r#"{"dog": {"parents": [], "lemmas": ["dog"]}}"#);
        match JsonWordNet::open(&path) {
            Err(Error::MalformedSynset { id, .. }) => assert_eq!(id, "dog"),
            Err(e) => panic!("unexpected error {}", e),
            Ok(_) => panic!("accepted a bad id"),
        }
    }

    #[test]
    fn verb_synsets_are_ignored() {
        let (_dir, path) = write_json(
            r#"{
            "wn31-01047745-v": {"parents": [], "lemmas": ["bark"]},
            "wn31-00001740-n": {"parents": ["wn31-01047745-v"], "lemmas": ["entity"]}
        }"#,
        );
        let wn = JsonWordNet::open(&path).unwrap();
        assert_eq!(wn.lookup_sense("bark"), None);
        assert!(wn.stems("barks").is_empty());
        assert!(wn.hypernyms(noun(1740)).is_empty());
    }

    #[test]
    fn parses_ids_with_and_without_prefix() {
        assert_eq!(parse_id("wn31-00001740-n"), Some(noun(1740)));
        assert_eq!(parse_id("02084071-n"), Some(noun(2084071)));
        assert_eq!(
            parse_id("00001740-v"),
            Some(SynsetId {
                pos: Pos::Verb,
                offset: 1740
            })
        );
        assert_eq!(parse_id("n1"), None);
        assert_eq!(parse_id("wn31--n"), None);
        assert_eq!(parse_id("wn31-00001740-x"), None);
    }
}
