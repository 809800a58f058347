//! Error types for sori-asr organized by processing stage.

use std::path::PathBuf;
use thiserror::Error;

/// Transcription pipeline error variants organized by processing stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration stage error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Audio decoding stage error
    #[error(transparent)]
    Audio(#[from] AudioError),

    /// Temporary artifact lifecycle error
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// Remote recognizer error outside the classified outcome contract
    #[error(transparent)]
    Recognize(#[from] RecognizeError),
}

/// Chunking policy validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid chunk duration
    #[error("invalid token duration: {token_ms}ms (minimum 1ms)")]
    InvalidTokenDuration { token_ms: u64 },
}

/// Audio loading and validation errors.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Channel count validation failed
    #[error("invalid channel count: expected mono or stereo, got {0} channels")]
    InvalidChannels(u16),

    /// IO error during audio loading
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// WAV file format error
    #[error(transparent)]
    Hound(#[from] hound::Error),
}

/// Temporary artifact errors. Removal is guaranteed-or-escalate: a delete
/// failure surfaces here rather than being logged and dropped.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Artifact file could not be removed after its recognition attempt
    #[error("failed to remove temporary artifact {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Recognizer errors outside the classified outcome contract.
///
/// Transport failures during a request are classified as
/// `RecognitionOutcome::ServiceFailure`, not raised here.
#[derive(Debug, Error)]
pub enum RecognizeError {
    /// HTTP client construction failed
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Result type alias for sori-asr operations.
pub type Result<T> = std::result::Result<T, Error>;

// Nested From implementations for automatic error conversion chains

// hound::Error → AudioError → Error
impl From<hound::Error> for Error {
    fn from(e: hound::Error) -> Self {
        Error::Audio(AudioError::Hound(e))
    }
}

// std::io::Error → AudioError → Error
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Audio(AudioError::Io(e))
    }
}

// reqwest::Error → RecognizeError → Error
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Recognize(RecognizeError::Http(e))
    }
}
