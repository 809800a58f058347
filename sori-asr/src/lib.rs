//! sori-asr: padded-chunk speech recognition against a remote service.
//!
//! Splits short spoken clips into fixed-size chunks wrapped in silence
//! padding, submits them (or their padded recombination) to a remote
//! recognizer, and aggregates the partial results while tolerating
//! per-chunk recognition failures.
//!
//! # Architecture
//!
//! - [`timeline::Timeline`]: decoded audio with millisecond-indexed slicing
//! - [`chunk::ChunkConfig`]: the chunk plan and padded materialization
//! - [`recognizer::SpeechRecognizer`]: capability trait over the remote
//!   service, implemented by [`web::WebSpeechRecognizer`]
//! - [`transcribe::Transcriber`]: the orchestrator tying the stages
//!   together with a guaranteed temporary-artifact lifecycle
//!
//! # Quick Start
//!
//! ```ignore
//! use sori_asr::transcribe::{Transcriber, TranscribeConfig};
//! use sori_asr::web::WebSpeechRecognizer;
//!
//! let recognizer = WebSpeechRecognizer::new(None)?;
//! let transcriber = Transcriber::new(recognizer, TranscribeConfig::default())?;
//!
//! let text = transcriber.recognize_padded("clip.wav".as_ref())?;
//! println!("{text}");
//! ```

pub mod artifact;
pub mod chunk;
pub mod error;
pub mod recognizer;
pub mod timeline;
pub mod transcribe;
pub mod web;
