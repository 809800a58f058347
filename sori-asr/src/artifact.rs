//! Scoped temporary audio artifacts for file-based recognizer input.

use crate::error::{ArtifactError, Result};
use crate::timeline::Timeline;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Next collision-free artifact identifier: a unix timestamp for uniqueness
/// across processes plus a monotonic counter for uniqueness within one.
fn next_id() -> (u64, u64) {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    (ts, SEQUENCE.fetch_add(1, Ordering::Relaxed))
}

/// A temporary on-disk encoding of a timeline, created solely to satisfy the
/// recognizer's file-based input contract.
///
/// Removal is explicit via [`TempArtifact::remove`] so delete failures
/// propagate; the `Drop` impl is a backstop that covers unwinding and
/// cancellation paths, where it can only log.
#[derive(Debug)]
pub struct TempArtifact {
    path: PathBuf,
    armed: bool,
}

impl TempArtifact {
    /// Encode a recombined timeline beside its source file, preserving the
    /// source encoding. Named `{stem}_{ts}_{seq}.{ext}`.
    pub fn for_source(timeline: &Timeline, source: &Path) -> Result<Self> {
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("audio");
        let ext = source
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("wav");

        let (ts, seq) = next_id();
        let path = source.with_file_name(format!("{stem}_{ts}_{seq}.{ext}"));

        timeline.write_wav(&path)?;
        Ok(Self { path, armed: true })
    }

    /// Encode one padded chunk as 16-bit PCM beside the source file,
    /// regardless of the source format. Named `chunk_{index}_{ts}_{seq}.wav`.
    pub fn for_chunk(timeline: &Timeline, source: &Path, index: usize) -> Result<Self> {
        let (ts, seq) = next_id();
        let path = source.with_file_name(format!("chunk_{index}_{ts}_{seq}.wav"));

        timeline.write_wav_pcm16(&path)?;
        Ok(Self { path, armed: true })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the artifact. A delete failure is an error, not a best-effort
    /// warning.
    pub fn remove(mut self) -> Result<()> {
        self.armed = false;
        std::fs::remove_file(&self.path).map_err(|source| {
            ArtifactError::Remove {
                path: self.path.clone(),
                source,
            }
            .into()
        })
    }

    /// Leave the file on disk, releasing the cleanup obligation.
    pub fn keep(mut self) -> PathBuf {
        self.armed = false;
        std::mem::take(&mut self.path)
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::error!(
                path = %self.path.display(),
                error = %e,
                "failed to remove temporary artifact during unwind"
            );
        }
    }
}
