use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read WordNet at {}: {source}", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("bad line {line} in {}: {msg}", .path.display())]
    MalformedResource {
        path: PathBuf,
        line: usize,
        msg: String,
    },

    #[error("bad synset {id} in {}: {msg}", .path.display())]
    MalformedSynset {
        path: PathBuf,
        id: String,
        msg: String,
    },

    #[error("root concept \"{0}\" is not a noun in this WordNet")]
    RootNotFound(String),

    #[error("could not load word list {}: {source}", .path.display())]
    WordListUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write results to {}: {source}", .path.display())]
    OutputFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Error {
        Error::ResourceUnavailable {
            path: path.into(),
            source: source.into(),
        }
    }

    pub(crate) fn malformed_synset(
        path: impl Into<PathBuf>,
        id: impl Into<String>,
        msg: impl Into<String>,
    ) -> Error {
        Error::MalformedSynset {
            path: path.into(),
            id: id.into(),
            msg: msg.into(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Error::OutputFailed { .. } => 2,
            _ => 1,
        }
    }
}
