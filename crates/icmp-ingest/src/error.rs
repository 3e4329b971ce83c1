#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read registry {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read registry from stdin")]
    Stdin(#[source] std::io::Error),

    #[error("malformed registry XML at byte {position}: {message}")]
    Xml { position: u64, message: String },

    #[error("document has no root <registry> element")]
    MissingRoot,

    #[error("unexpected end of document inside <{element}>")]
    UnexpectedEof { element: String },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn xml(position: u64, message: impl Into<String>) -> Self {
        Self::Xml {
            position,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
