//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;
use sori_asr::chunk::ChunkConfig;
use sori_asr::transcribe::{DEFAULT_LANGUAGE, TranscribeConfig};

#[derive(Debug, Parser)]
#[command(name = "sori")]
#[command(about = "Batch speech transcription over a remote recognizer")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Transcribe every audio file in a directory
    Run(crate::run::Args),

    /// Transcribe a single audio file
    File(crate::file::Args),
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Run(args) => crate::run::execute(args.try_into()?),
        Commands::File(args) => crate::file::execute(args.try_into()?),
    }
}

/// Recognition strategy selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// One request over the padded recombination of the chunk plan
    Padded,
    /// One request per padded chunk
    Tokenized,
    /// One request over the unmodified source file
    Whole,
}

/// Recognition options shared by subcommands.
///
/// Timing overrides default to the selected strategy's preset, so
/// `--tokenized` alone picks the smaller per-chunk padding.
#[derive(clap::Args, Debug)]
pub struct RecognitionArgs {
    /// Recognize chunk by chunk instead of recombining into one request
    #[arg(long)]
    pub tokenized: bool,

    /// Recognize the file as-is, without chunking
    #[arg(long, conflicts_with = "tokenized")]
    pub whole: bool,

    /// Language tag sent to the recognizer
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// API key for the recognition service (default: $GOOGLE_SPEECH_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Keep temporary artifacts instead of removing them
    #[arg(long)]
    pub keep_temp_files: bool,

    /// Leading audio to skip before the first chunk, in milliseconds
    #[arg(long)]
    pub skip_ms: Option<u64>,

    /// Duration of each sampled chunk, in milliseconds
    #[arg(long)]
    pub token_ms: Option<u64>,

    /// Gap between sampled chunks, in milliseconds
    #[arg(long)]
    pub wait_ms: Option<u64>,

    /// Silence padding around each chunk, in milliseconds
    #[arg(long)]
    pub padding_ms: Option<u64>,
}

impl RecognitionArgs {
    pub fn strategy(&self) -> Strategy {
        if self.whole {
            Strategy::Whole
        } else if self.tokenized {
            Strategy::Tokenized
        } else {
            Strategy::Padded
        }
    }

    pub fn transcribe_config(&self) -> TranscribeConfig {
        let mut chunk = match self.strategy() {
            Strategy::Tokenized => ChunkConfig::TOKENIZED,
            Strategy::Padded | Strategy::Whole => ChunkConfig::WHOLE_FILE,
        };

        if let Some(skip_ms) = self.skip_ms {
            chunk.skip_ms = skip_ms;
        }
        if let Some(token_ms) = self.token_ms {
            chunk.token_ms = token_ms;
        }
        if let Some(wait_ms) = self.wait_ms {
            chunk.wait_ms = wait_ms;
        }
        if let Some(padding_ms) = self.padding_ms {
            chunk.padding_ms = padding_ms;
        }

        TranscribeConfig {
            chunk,
            language: self.language.clone(),
            keep_artifacts: self.keep_temp_files,
        }
    }
}
