//! File subcommand - transcribe a single audio file.

use crate::cli::{RecognitionArgs, Strategy};
use crate::run::{strip_whitespace, transcribe_with};
use eyre::{Result, WrapErr};
use sori_asr::transcribe::{TranscribeConfig, Transcriber};
use sori_asr::web::WebSpeechRecognizer;
use std::path::PathBuf;

/// CLI arguments for single-file transcription.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to the audio file
    pub path: PathBuf,

    #[command(flatten)]
    pub recognition: RecognitionArgs,
}

/// Resolved configuration for single-file transcription.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub strategy: Strategy,
    pub transcribe: TranscribeConfig,
    pub api_key: Option<String>,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self {
            path: args.path,
            strategy: args.recognition.strategy(),
            transcribe: args.recognition.transcribe_config(),
            api_key: args.recognition.api_key,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(
        path = %config.path.display(),
        strategy = ?config.strategy,
        "transcribing file"
    );

    let recognizer = WebSpeechRecognizer::new(config.api_key)?;
    let transcriber = Transcriber::new(recognizer, config.transcribe)?;

    let transcript = transcribe_with(&transcriber, &config.path, config.strategy)
        .wrap_err_with(|| format!("failed to transcribe: {}", config.path.display()))?;

    let name = config
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    println!("{name}: {}", strip_whitespace(&transcript));

    Ok(())
}
