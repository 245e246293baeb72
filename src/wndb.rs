//! WordNet from the `data.*`, `index.*` and `*.exc` files of a `dict`
//! directory.

use std::path::Path;

use tracing::info;
use wordnet_db::{LoadMode, WordNet};

use crate::error::{Error, Result};
use crate::stem::Stemmer;
use crate::wordnet::{Pos, SynsetId, Taxonomy};

const HYPERNYM: &str = "@";

pub struct WordNetDict {
    wn: WordNet,
    stemmer: Stemmer,
}

impl WordNetDict {
    pub fn open(dir: &Path) -> Result<WordNetDict> {
        let wn = WordNet::load_with_mode(dir, LoadMode::Mmap)
            .map_err(|e| Error::unavailable(dir, e))?;
        info!(
            "Loaded {} synsets and {} lemmas",
            wn.synset_count(),
            wn.lemma_count()
        );
        Ok(WordNetDict {
            wn,
            stemmer: Stemmer::load(dir)?,
        })
    }
}

impl Taxonomy for WordNetDict {
    fn stems(&self, word: &str) -> Vec<String> {
        self.stemmer
            .find_stems(word, |pos, lemma| self.wn.lemma_exists(pos, lemma))
    }

    fn lookup_sense(&self, lemma: &str) -> Option<SynsetId> {
        self.wn.synsets_for_lemma(Pos::Noun, lemma).first().copied()
    }

    fn hypernyms(&self, id: SynsetId) -> Vec<SynsetId> {
        // Instance hypernyms ("@i") are a different pointer
        self.wn
            .get_synset(id)
            .map(|synset| {
                synset
                    .pointers
                    .iter()
                    .filter(|p| p.symbol == HYPERNYM && p.target.pos == Pos::Noun)
                    .map(|p| p.target)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;

    const LICENSE: &str = "  1 This software and database is being provided to you, the LICENSEE, by\n  2 Princeton University under the following license.\n";

    pub(crate) fn noun(offset: u32) -> SynsetId {
        SynsetId {
            pos: Pos::Noun,
            offset,
        }
    }

    // dog -> canine -> animal -> entity, goose -> animal, and Paris with
    // only an instance hypernym.
    pub(crate) fn write_dict(dir: &Path) {
        let index_noun = "entity n 1 1 ~ 1 1 00001740  \n\
             animal n 1 2 @ ~ 1 1 00015388  \n\
             canine n 2 2 @ ~ 2 0 02083346 09886220  \n\
             dog n 2 3 @ ~ #m 2 1 02084071 10114209  \n\
             goose n 1 1 @ 1 0 01855672  \n\
             paris n 1 1 @i 1 0 08932568  \n";
        let data_noun = "00001740 03 n 01 entity 0 001 ~ 00015388 n 0000 | that which exists\n\
             00015388 03 n 02 animal 0 animate_being 0 002 @ 00001740 n 0000 ~ 02083346 n 0000 | a living organism\n\
             02083346 05 n 01 canine 0 002 @ 00015388 n 0000 ~ 02084071 n 0000 | a dog-like mammal\n\
             09886220 18 n 01 canine 1 001 @ 10114209 n 0000 | a tooth\n\
             02084071 05 n 03 dog 0 domestic_dog 0 Canis_familiaris 0 003 @ 02083346 n 0000 #m 02083346 n 0000 + 01234567 v 0101 | a member of the genus Canis\n\
             10114209 18 n 01 dog 1 001 @ 00015388 n 0000 | a dull unattractive person\n\
             01855672 05 n 01 goose 0 001 @ 00015388 n 0000 | web-footed bird\n\
             08932568 15 n 01 Paris 0 001 @i 00001740 n 0000 | the capital of France\n";
        let files = [
            ("index.noun", index_noun),
            ("data.noun", data_noun),
            ("index.verb", "bark v 1 1 @ 1 0 01047745  \nbe v 1 1 @ 1 0 02604760  \n"),
            ("data.verb", ""),
            ("index.adj", ""),
            ("data.adj", ""),
            ("index.adv", ""),
            ("data.adv", ""),
        ];
        for (name, body) in files.iter() {
            fs::write(dir.join(name), format!("{}{}", LICENSE, body)).unwrap();
        }
        fs::write(dir.join("noun.exc"), "geese goose\n").unwrap();
        fs::write(dir.join("verb.exc"), "is be\n").unwrap();
    }

    #[test]
    fn opens_dict_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_dict(dir.path());
        let wn = WordNetDict::open(dir.path()).unwrap();

        assert_eq!(wn.lookup_sense("dog"), Some(noun(2084071)));
        assert_eq!(wn.lookup_sense("bark"), None);
        assert_eq!(wn.hypernyms(noun(2084071)), vec![noun(2083346)]);
        assert!(wn.hypernyms(noun(99999999)).is_empty());
    }

    #[test]
    fn instance_hypernyms_are_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        write_dict(dir.path());
        let wn = WordNetDict::open(dir.path()).unwrap();
        assert!(wn.hypernyms(noun(8932568)).is_empty());
    }

    #[test]
    fn stems_against_all_indexes() {
        let dir = tempfile::tempdir().unwrap();
        write_dict(dir.path());
        let wn = WordNetDict::open(dir.path()).unwrap();

        assert_eq!(wn.stems("dogs"), vec!["dog"]);
        assert_eq!(wn.stems("geese"), vec!["goose"]);
        assert_eq!(wn.stems("barked"), vec!["bark"]);
        assert_eq!(wn.stems("is"), vec!["be"]);
        assert!(wn.stems("zzzznotaword").is_empty());
    }

    #[test]
    fn missing_files_are_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.noun"), "entity n 1 0 1 0 00001740\n").unwrap();
        match WordNetDict::open(dir.path()) {
            Err(Error::ResourceUnavailable { path, .. }) => assert_eq!(path, dir.path()),
            Err(e) => panic!("unexpected error {}", e),
            Ok(_) => panic!("opened without data files"),
        }
    }

    #[test]
    fn malformed_index_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        write_dict(dir.path());
        fs::write(dir.path().join("index.noun"), format!("{}entity n one\n", LICENSE)).unwrap();
        match WordNetDict::open(dir.path()) {
            Err(e @ Error::ResourceUnavailable { .. }) => {
                assert!(e.to_string().contains("could not read WordNet"))
            }
            Err(e) => panic!("unexpected error {}", e),
            Ok(_) => panic!("accepted a malformed index"),
        }
    }
}
