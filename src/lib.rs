//! Hypernymy depths of words in WordNet.
//!
//! A word is stemmed, its first noun sense is looked up, and the first
//! hypernym of each concept is followed until a concept whose parents
//! include the root ("entity"), or which has no parents at all.

pub mod config;
pub mod depth;
pub mod error;
pub mod json;
pub mod output;
pub mod stem;
pub mod wndb;
pub mod wordnet;
pub mod words;
