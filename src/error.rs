use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExobrainError {
    #[error("Note not found: {name}")]
    NoteNotFound { name: String },

    #[error("Invalid value for {var}: {value:?} ({reason})")]
    InvalidConfig { var: &'static str, value: String, reason: String },

    #[error("HOME not set; set EXOBRAIN_ROOT or pass -r explicitly")]
    MissingHome,

    #[error("Editor command is empty; set EDITOR")]
    EmptyEditor,

    #[error("Could not launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ExobrainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ExobrainError::NoteNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, ExobrainError>;
