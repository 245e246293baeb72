//! WordNet stemming: exception lists first, then suffix detachment, keeping
//! only candidates the dictionary knows. Exception lists come from
//! `wordnet_morphy`.

use std::path::Path;

use wordnet_morphy::{CandidateSource, Morphy};

use crate::error::{Error, Result};
use crate::wordnet::Pos;

const POS_ORDER: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adj, Pos::Adv];

struct Rule {
    suffix: &'static str,
    ending: &'static str,
    ignore: Option<&'static str>,
}

const fn rule(suffix: &'static str, ending: &'static str) -> Rule {
    Rule {
        suffix,
        ending,
        ignore: None,
    }
}

const NOUN_RULES: &[Rule] = &[
    Rule {
        suffix: "s",
        ending: "",
        ignore: Some("ss"),
    },
    rule("ses", "s"),
    rule("xes", "x"),
    rule("zes", "z"),
    rule("ches", "ch"),
    rule("shes", "sh"),
    rule("men", "man"),
    rule("ies", "y"),
];

const VERB_RULES: &[Rule] = &[
    rule("s", ""),
    rule("ies", "y"),
    rule("es", "e"),
    rule("es", ""),
    rule("ed", "e"),
    rule("ed", ""),
    rule("ing", "e"),
    rule("ing", ""),
];

const ADJ_RULES: &[Rule] = &[
    rule("er", ""),
    rule("est", ""),
    rule("er", "e"),
    rule("est", "e"),
];

const FUL: &str = "ful";

impl Rule {
    fn apply(&self, word: &str, tail: &str) -> Option<String> {
        if word.len() <= self.suffix.len() || !word.ends_with(self.suffix) {
            return None;
        }
        if self.ignore.map_or(false, |ignore| word.ends_with(ignore)) {
            return None;
        }
        let base = &word[..word.len() - self.suffix.len()];
        Some(format!("{}{}{}", base, self.ending, tail))
    }
}

pub struct Stemmer {
    exceptions: Option<Morphy>,
}

impl Stemmer {
    pub fn load(dict_dir: &Path) -> Result<Stemmer> {
        let morphy = Morphy::load(dict_dir).map_err(|e| Error::unavailable(dict_dir, e))?;
        Ok(Stemmer {
            exceptions: Some(morphy),
        })
    }

    pub fn rules_only() -> Stemmer {
        Stemmer { exceptions: None }
    }

    /// Base forms of a normalised `word` over every part of speech, nouns
    /// first. `exists` tells whether a candidate is a lemma of a part of speech.
    pub fn find_stems<F>(&self, word: &str, exists: F) -> Vec<String>
    where
        F: Fn(Pos, &str) -> bool,
    {
        let mut result = Vec::new();
        for &pos in POS_ORDER.iter() {
            for stem in self.stems_for(pos, word, &exists) {
                push_unique(&mut result, stem);
            }
        }
        result
    }

    pub fn stems_for<F>(&self, pos: Pos, word: &str, exists: F) -> Vec<String>
    where
        F: Fn(Pos, &str) -> bool,
    {
        let mut result = Vec::new();
        let mut excepted = false;
        if let Some(morphy) = &self.exceptions {
            for candidate in morphy.lemmas_for(pos, word, &exists) {
                if candidate.source == CandidateSource::Exception {
                    excepted = true;
                    push_unique(&mut result, candidate.lemma.into_owned());
                }
            }
        }
        if exists(pos, word) {
            push_unique(&mut result, word.to_string());
        }
        if excepted {
            return result;
        }
        for candidate in strip_suffixes(pos, word) {
            if !candidate.is_empty() && exists(pos, &candidate) {
                push_unique(&mut result, candidate);
            }
        }
        result
    }
}

fn strip_suffixes(pos: Pos, word: &str) -> Vec<String> {
    match pos {
        Pos::Noun | Pos::Verb if word.contains('_') => collocation_roots(pos, word),
        Pos::Noun => strip_noun(word),
        Pos::Verb => strip_verb(word),
        Pos::Adj => apply_rules(ADJ_RULES, word, ""),
        Pos::Adv => Vec::new(),
    }
}

fn strip_noun(word: &str) -> Vec<String> {
    if word.len() <= 2 {
        return Vec::new();
    }
    match word.strip_suffix(FUL) {
        Some(base) => apply_rules(NOUN_RULES, base, FUL),
        None => apply_rules(NOUN_RULES, word, ""),
    }
}

fn strip_verb(word: &str) -> Vec<String> {
    if word.len() <= 2 {
        return Vec::new();
    }
    apply_rules(VERB_RULES, word, "")
}

fn apply_rules(rules: &[Rule], word: &str, tail: &str) -> Vec<String> {
    let mut result = Vec::new();
    for rule in rules {
        if let Some(root) = rule.apply(word, tail) {
            push_unique(&mut result, root);
        }
    }
    result
}

/// Stems each part of `a_b_c` on its own and joins every combination. A part
/// without stems stays as written.
fn collocation_roots(pos: Pos, word: &str) -> Vec<String> {
    let mut combos = vec![String::new()];
    for part in word.split('_') {
        let mut roots = strip_suffixes(pos, part);
        if roots.is_empty() {
            roots.push(part.to_string());
        }
        let mut next = Vec::new();
        for prefix in &combos {
            for root in &roots {
                if prefix.is_empty() {
                    push_unique(&mut next, root.clone());
                } else {
                    push_unique(&mut next, format!("{}_{}", prefix, root));
                }
            }
        }
        combos = next;
    }
    combos.retain(|c| c != word);
    combos
}

fn push_unique(v: &mut Vec<String>, s: String) {
    if !v.contains(&s) {
        v.push(s);
    }
}
