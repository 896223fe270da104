use std::path::PathBuf;

use thiserror::Error;

use crate::data::DataKind;

/// Errors produced while loading site data
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read {kind} data from {}: {source}", path.display())]
    Io {
        kind: DataKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {kind} data from {}: {source}", path.display())]
    Parse {
        kind: DataKind,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ContentError {
    /// Which data file failed
    pub fn kind(&self) -> DataKind {
        match self {
            ContentError::Io { kind, .. } | ContentError::Parse { kind, .. } => *kind,
        }
    }

    /// Message shown to visitors in place of the failed section
    pub fn user_message(&self) -> String {
        format!(
            "Failed to load {}. Please try again later.",
            self.kind().noun()
        )
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
