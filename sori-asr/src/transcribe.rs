//! Recognition orchestration over padded chunks.

use crate::artifact::TempArtifact;
use crate::chunk::ChunkConfig;
use crate::error::Result;
use crate::recognizer::{RecognitionOutcome, SpeechRecognizer};
use crate::timeline::Timeline;
use std::path::Path;

/// Default language tag for recognition requests.
pub const DEFAULT_LANGUAGE: &str = "ko-KR";

/// Resolved transcription policy.
#[derive(Clone, Debug)]
pub struct TranscribeConfig {
    pub chunk: ChunkConfig,

    /// Language tag sent with every recognition request.
    pub language: String,

    /// Leave temporary artifacts on disk instead of removing them.
    pub keep_artifacts: bool,
}

impl Default for TranscribeConfig {
    fn default() -> Self {
        Self {
            chunk: ChunkConfig::WHOLE_FILE,
            language: DEFAULT_LANGUAGE.to_string(),
            keep_artifacts: false,
        }
    }
}

/// Orchestrates decoding, chunking, artifact lifecycle, and remote
/// recognition for one recognizer handle.
///
/// Per-chunk `Unrecognized` and `ServiceFailure` outcomes degrade that
/// chunk's contribution to the empty string and never abort the rest of the
/// file. Fatal per file: decode failure, artifact write or delete failure,
/// and recognizer errors outside the outcome contract, the last only after
/// the pending artifact is released.
pub struct Transcriber<R> {
    recognizer: R,
    config: TranscribeConfig,
}

impl<R: SpeechRecognizer> Transcriber<R> {
    pub fn new(recognizer: R, config: TranscribeConfig) -> Result<Self> {
        config.chunk.validate()?;
        Ok(Self { recognizer, config })
    }

    pub fn config(&self) -> &TranscribeConfig {
        &self.config
    }

    /// Recognize a file as one request over the padded recombination of its
    /// chunk plan.
    ///
    /// The recombined timeline is encoded beside the source in the source's
    /// own format, submitted once, and the artifact is removed before the
    /// result is returned.
    pub fn recognize_padded(&self, path: &Path) -> Result<String> {
        let timeline = Timeline::from_file(path)?;
        let total_ms = timeline.duration_ms();

        let mut combined = timeline.silence(0);
        for start_ms in self.config.chunk.iter_starts(total_ms) {
            combined = combined.concat(&self.config.chunk.materialize(&timeline, start_ms));
        }

        tracing::debug!(
            path = %path.display(),
            total_ms,
            chunks = self.config.chunk.chunk_count(total_ms),
            padded_ms = combined.duration_ms(),
            "recombined padded timeline"
        );

        let artifact = TempArtifact::for_source(&combined, path)?;
        self.attempt(artifact)
    }

    /// Recognize a file chunk by chunk, one request per padded chunk, in
    /// plan order.
    ///
    /// Each chunk's artifact is removed before the next chunk is processed;
    /// the per-chunk results are concatenated without separators.
    pub fn recognize_tokenized(&self, path: &Path) -> Result<String> {
        let timeline = Timeline::from_file(path)?;
        let total_ms = timeline.duration_ms();

        let mut results = Vec::new();
        for (index, start_ms) in self.config.chunk.iter_starts(total_ms).enumerate() {
            tracing::debug!(chunk = index + 1, start_ms, "recognizing chunk");

            let chunk = self.config.chunk.materialize(&timeline, start_ms);
            let artifact = TempArtifact::for_chunk(&chunk, path, index)?;
            results.push(self.attempt(artifact)?);
        }

        Ok(results.concat())
    }

    /// Recognize the source file directly, without chunking or temporary
    /// artifacts.
    pub fn recognize_whole(&self, path: &Path) -> Result<String> {
        let outcome = self.recognizer.recognize(path, &self.config.language)?;
        Ok(self.resolve(outcome))
    }

    /// Run one recognition attempt and release its artifact on every path.
    fn attempt(&self, artifact: TempArtifact) -> Result<String> {
        match self.recognizer.recognize(artifact.path(), &self.config.language) {
            Ok(outcome) => {
                self.release(artifact)?;
                Ok(self.resolve(outcome))
            }
            Err(e) => {
                if let Err(cleanup) = self.release(artifact) {
                    tracing::error!(
                        error = %cleanup,
                        "artifact cleanup failed while handling recognizer error"
                    );
                }
                Err(e)
            }
        }
    }

    fn release(&self, artifact: TempArtifact) -> Result<()> {
        if self.config.keep_artifacts {
            let path = artifact.keep();
            tracing::debug!(path = %path.display(), "keeping temporary artifact");
            Ok(())
        } else {
            artifact.remove()
        }
    }

    /// Resolve a classified outcome to the text it contributes.
    fn resolve(&self, outcome: RecognitionOutcome) -> String {
        match outcome {
            RecognitionOutcome::Text(text) => text,
            RecognitionOutcome::Unrecognized => {
                tracing::warn!("recognizer could not understand audio");
                String::new()
            }
            RecognitionOutcome::ServiceFailure(detail) => {
                tracing::error!(detail, "recognition request failed");
                String::new()
            }
        }
    }
}
