use std::io;
use std::path::PathBuf;
use std::str::Utf8Error;

/// Failures while turning a file into C source
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8 text: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: Utf8Error,
    },

    #[error("cannot derive a symbol name from {}", path.display())]
    MissingSymbol { path: PathBuf },
}

impl EmbedError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        EmbedError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, EmbedError>;
