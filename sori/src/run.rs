//! Run subcommand - transcribe every audio file in a directory.

use crate::cli::{RecognitionArgs, Strategy};
use eyre::{Result, WrapErr};
use sori_asr::recognizer::SpeechRecognizer;
use sori_asr::transcribe::{TranscribeConfig, Transcriber};
use sori_asr::web::WebSpeechRecognizer;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// CLI arguments for batch transcription.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Directory of audio files to transcribe
    pub dir: PathBuf,

    #[command(flatten)]
    pub recognition: RecognitionArgs,
}

/// Resolved configuration for batch transcription.
#[derive(Debug)]
pub struct Config {
    pub dir: PathBuf,
    pub strategy: Strategy,
    pub transcribe: TranscribeConfig,
    pub api_key: Option<String>,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self {
            dir: args.dir,
            strategy: args.recognition.strategy(),
            transcribe: args.recognition.transcribe_config(),
            api_key: args.recognition.api_key,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(
        dir = %config.dir.display(),
        strategy = ?config.strategy,
        language = config.transcribe.language,
        "transcribing directory"
    );

    let recognizer = WebSpeechRecognizer::new(config.api_key)?;
    let transcriber = Transcriber::new(recognizer, config.transcribe)?;

    let results = run_batch(&transcriber, &config.dir, config.strategy)?;
    for (name, transcript) in &results {
        println!("{name}: {transcript}");
    }

    Ok(())
}

/// Transcribe every regular file in `dir`, returning filename → transcript.
///
/// Non-file entries are ignored. A fatal per-file error (undecodable source,
/// artifact failure) is logged and skips that file; it never aborts the
/// batch. Transcripts have all whitespace stripped.
pub fn run_batch<R: SpeechRecognizer>(
    transcriber: &Transcriber<R>,
    dir: &Path,
    strategy: Strategy,
) -> Result<BTreeMap<String, String>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .wrap_err_with(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut results = BTreeMap::new();
    for path in paths {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        match transcribe_with(transcriber, &path, strategy) {
            Ok(transcript) => {
                tracing::info!(file = name, "transcribed");
                results.insert(name, strip_whitespace(&transcript));
            }
            Err(e) => {
                tracing::error!(file = name, error = %e, "failed to transcribe, skipping");
            }
        }
    }

    Ok(results)
}

/// Dispatch one file to the selected recognition strategy.
pub fn transcribe_with<R: SpeechRecognizer>(
    transcriber: &Transcriber<R>,
    path: &Path,
    strategy: Strategy,
) -> sori_asr::error::Result<String> {
    match strategy {
        Strategy::Padded => transcriber.recognize_padded(path),
        Strategy::Tokenized => transcriber.recognize_tokenized(path),
        Strategy::Whole => transcriber.recognize_whole(path),
    }
}

/// Strip all whitespace from a transcript.
pub fn strip_whitespace(text: &str) -> String {
    text.split_whitespace().collect()
}
