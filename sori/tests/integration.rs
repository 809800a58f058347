//! Integration tests for the sori CLI.

use hound::{SampleFormat, WavSpec, WavWriter};
use sori::cli::{Cli, Strategy, run_cli};
use sori::run::run_batch;
use sori_asr::error::Result;
use sori_asr::recognizer::{RecognitionOutcome, SpeechRecognizer};
use sori_asr::transcribe::{TranscribeConfig, Transcriber};
use std::path::Path;
use tempfile::TempDir;

/// Recognizer stub that answers every artifact with a fixed transcript.
struct FixedRecognizer {
    transcript: &'static str,
}

impl FixedRecognizer {
    fn new(transcript: &'static str) -> Self {
        Self { transcript }
    }
}

impl SpeechRecognizer for FixedRecognizer {
    fn recognize(&self, artifact: &Path, _language: &str) -> Result<RecognitionOutcome> {
        assert!(artifact.exists());
        Ok(RecognitionOutcome::Text(self.transcript.to_string()))
    }
}

fn write_clip(path: &Path, ms: u64) {
    let spec = WavSpec {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).expect("failed to create wav");
    for i in 0..ms * 16 {
        writer.write_sample(((i % 80) as i16 - 40) * 200).unwrap();
    }
    writer.finalize().unwrap();
}

fn dir_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn batch_transcribes_regular_files_and_skips_the_rest() {
    let corpus = TempDir::new().unwrap();
    write_clip(&corpus.path().join("b.wav"), 2000);
    write_clip(&corpus.path().join("a.wav"), 1500);

    // Non-file entries are ignored; undecodable files are skipped without
    // aborting the batch.
    std::fs::create_dir(corpus.path().join("nested")).unwrap();
    write_clip(&corpus.path().join("nested").join("c.wav"), 1000);
    std::fs::write(corpus.path().join("notes.txt"), "not audio").unwrap();

    let transcriber = Transcriber::new(
        FixedRecognizer::new("전사 결과"),
        TranscribeConfig::default(),
    )
    .unwrap();

    let results = run_batch(&transcriber, corpus.path(), Strategy::Padded).unwrap();

    let entries: Vec<(&str, &str)> = results
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        entries,
        vec![("a.wav", "전사결과"), ("b.wav", "전사결과")]
    );

    // One recognition per decodable file, no residual artifacts.
    assert_eq!(transcriber.config().chunk.padding_ms, 500);
    assert_eq!(
        dir_names(corpus.path()),
        vec!["a.wav", "b.wav", "nested", "notes.txt"]
    );
}

#[test]
fn tokenized_batch_cleans_up_every_chunk_artifact() {
    let corpus = TempDir::new().unwrap();
    write_clip(&corpus.path().join("clip.wav"), 2500);

    let config = TranscribeConfig {
        chunk: sori_asr::chunk::ChunkConfig::TOKENIZED,
        ..TranscribeConfig::default()
    };
    let transcriber = Transcriber::new(FixedRecognizer::new("가"), config).unwrap();

    let results = run_batch(&transcriber, corpus.path(), Strategy::Tokenized).unwrap();

    // 2500ms yields 4 chunks; the per-chunk texts concatenate in order.
    assert_eq!(results["clip.wav"], "가가가가");
    assert_eq!(transcriber.config().chunk.padding_ms, 200);
    assert_eq!(dir_names(corpus.path()), vec!["clip.wav"]);
}

#[test]
fn empty_directory_produces_empty_map() {
    let corpus = TempDir::new().unwrap();

    let transcriber = Transcriber::new(
        FixedRecognizer::new("unused"),
        TranscribeConfig::default(),
    )
    .unwrap();

    let results = run_batch(&transcriber, corpus.path(), Strategy::Padded).unwrap();
    assert!(results.is_empty());
}

#[test]
#[ignore = "network access and remote recognition service required"]
fn run_command_transcribes_against_live_service() {
    use clap::Parser;

    let corpus = TempDir::new().unwrap();
    write_clip(&corpus.path().join("clip.wav"), 2000);

    let cli = Cli::parse_from(["sori", "run", corpus.path().to_str().unwrap()]);
    run_cli(cli).expect("batch run failed");

    // Synthetic audio may come back unrecognized, but the run must finish
    // and leave no artifacts behind.
    assert_eq!(dir_names(corpus.path()), vec!["clip.wav"]);
}
