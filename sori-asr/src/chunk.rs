//! Chunk planning and padded materialization for short spoken clips.

use crate::error::ConfigError;
use crate::timeline::Timeline;

/// Default leading audio to skip in milliseconds
const DEFAULT_SKIP_MS: u64 = 100;

/// Default sampled chunk duration in milliseconds
const DEFAULT_TOKEN_MS: u64 = 600;

/// Default gap between sampled chunks in milliseconds
const DEFAULT_WAIT_MS: u64 = 100;

/// Configuration for audio chunking.
///
/// The plan steps from `skip_ms` to the timeline's duration in strides of
/// `token_ms + wait_ms`; the gap left by `wait_ms` is a deliberate sampling
/// trade-off, not covered audio. Padding compensates for recognizer
/// sensitivity to clipped speech at hard cut points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkConfig {
    /// Leading audio to skip before the first chunk, in milliseconds
    pub skip_ms: u64,

    /// Duration of each sampled chunk, in milliseconds
    pub token_ms: u64,

    /// Gap between sampled chunks, in milliseconds
    pub wait_ms: u64,

    /// Silence prepended and appended to each chunk, in milliseconds
    pub padding_ms: u64,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self::WHOLE_FILE
    }
}

impl ChunkConfig {
    /// Preset for padded whole-file recognition.
    pub const WHOLE_FILE: Self = Self {
        skip_ms: DEFAULT_SKIP_MS,
        token_ms: DEFAULT_TOKEN_MS,
        wait_ms: DEFAULT_WAIT_MS,
        padding_ms: 500,
    };

    /// Preset for per-chunk tokenized recognition. Each chunk is recognized
    /// independently, so less edge padding is needed.
    pub const TOKENIZED: Self = Self {
        skip_ms: DEFAULT_SKIP_MS,
        token_ms: DEFAULT_TOKEN_MS,
        wait_ms: DEFAULT_WAIT_MS,
        padding_ms: 200,
    };

    /// Create a new chunk configuration.
    pub fn new(skip_ms: u64, token_ms: u64, wait_ms: u64, padding_ms: u64) -> Self {
        Self {
            skip_ms,
            token_ms,
            wait_ms,
            padding_ms,
        }
    }

    /// Validate the policy. A zero token duration would produce empty chunks
    /// and, with a zero wait, a stride that never advances.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token_ms == 0 {
            return Err(ConfigError::InvalidTokenDuration {
                token_ms: self.token_ms,
            });
        }
        Ok(())
    }

    /// Step size between chunk starts.
    pub fn stride_ms(&self) -> u64 {
        self.token_ms + self.wait_ms
    }

    /// Duration of every materialized padded chunk.
    pub fn padded_ms(&self) -> u64 {
        2 * self.padding_ms + self.token_ms
    }

    /// Create an iterator over chunk start offsets for a given total
    /// duration. Empty when `skip_ms >= total_ms`; strictly increasing
    /// otherwise, with every start below `total_ms`.
    pub fn iter_starts(&self, total_ms: u64) -> ChunkStartIter {
        ChunkStartIter {
            next_start: self.skip_ms,
            total_ms,
            stride_ms: self.stride_ms(),
        }
    }

    /// Number of chunks the plan will produce for a given total duration.
    pub fn chunk_count(&self, total_ms: u64) -> u64 {
        if self.skip_ms >= total_ms {
            return 0;
        }
        (total_ms - self.skip_ms).div_ceil(self.stride_ms())
    }

    /// Materialize the padded chunk starting at `start_ms`.
    ///
    /// The slice clamps at the timeline's end rather than erroring; a
    /// truncated final chunk is zero-extended so the result always spans
    /// exactly `2 * padding_ms + token_ms`.
    pub fn materialize(&self, timeline: &Timeline, start_ms: u64) -> Timeline {
        let body = timeline.slice_ms(start_ms, start_ms + self.token_ms);
        let tail_ms = self.padding_ms + self.token_ms - body.duration_ms();

        timeline
            .silence(self.padding_ms)
            .concat(&body)
            .concat(&timeline.silence(tail_ms))
    }
}

/// Iterator over chunk start offsets in milliseconds.
pub struct ChunkStartIter {
    next_start: u64,
    total_ms: u64,
    stride_ms: u64,
}

impl Iterator for ChunkStartIter {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_start >= self.total_ms {
            return None;
        }

        let start = self.next_start;
        self.next_start += self.stride_ms;

        Some(start)
    }
}
