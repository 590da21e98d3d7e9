// File: src/error.rs
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors produced while training, persisting or applying a model.
#[derive(Error, Debug)]
pub enum GibberishError {
    /// Bad alphabet, bad prior, or a model file that is missing or corrupt.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error(
        "training validation failed: worst good example scored {min_good}, \
         best bad example scored {max_bad}; the model cannot separate them"
    )]
    Separation { min_good: f64, max_bad: f64 },

    #[error("training validation failed: {0}")]
    TrainingValidation(String),

    #[error("{what} is not valid UTF-8: {source}")]
    Encoding {
        what: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GibberishError>;
