//! Recognition outcome classification and the recognizer capability trait.

use crate::error::Result;
use std::path::Path;

/// Classified result of one remote recognition attempt.
///
/// Every attempt resolves to one of these three before aggregation; the two
/// failure kinds are distinguishable because they are logged differently and
/// could drive different retry policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecognitionOutcome {
    /// Transcript text returned by the service
    Text(String),

    /// The service could not understand the audio content (content-level,
    /// not transient)
    Unrecognized,

    /// Transport or service-level failure, potentially transient, with an
    /// attached detail message
    ServiceFailure(String),
}

/// Capability interface over a remote speech-recognition service.
///
/// Implementations accept a mono/PCM-compatible audio artifact and a
/// language tag. Classified failures are outcomes, not errors; `Err` is
/// reserved for failures outside the recognition contract and is propagated
/// by the orchestrator only after artifact cleanup.
pub trait SpeechRecognizer {
    fn recognize(&self, artifact: &Path, language: &str) -> Result<RecognitionOutcome>;
}
