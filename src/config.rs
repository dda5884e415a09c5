use std::path::{Path, PathBuf};

use crate::error::{PipelineError, Result};

/// File extension of eligible input videos.
pub const VIDEO_EXTENSION: &str = "mp4";

/// Stills sampled per second of source video.
pub const FRAME_RATE: u32 = 1;

/// Audio sample rate expected by Whisper.
pub const SAMPLE_RATE: u32 = 16_000;

/// Mono audio for transcription.
pub const AUDIO_CHANNELS: u32 = 1;

/// Whisper model identifier.
pub const WHISPER_MODEL: &str = "whisper-1";

/// Source language hint for transcription.
pub const LANGUAGE: &str = "en";

/// Whisper transcription endpoint.
pub const TRANSCRIPTION_ENDPOINT: &str = "https://api.openai.com/v1/audio/transcriptions";

/// Default log filter: the library and the `process-assets` binary at info,
/// everything else at warn.
pub const LOG_FILTER: &str = "asset_pipeline=info,process_assets=info,warn";

/// Process-wide configuration, constructed once at startup and passed to
/// collaborators by reference.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer credential for the Whisper API
    pub api_key: String,

    /// Root of the input video tree
    pub assets_root: PathBuf,

    /// Root for frame stills and extracted audio
    pub stills_root: PathBuf,

    /// Root for plain-text transcripts
    pub transcripts_root: PathBuf,
}

impl Config {
    /// Load configuration from the environment: `OPENAI_API_KEY` plus the
    /// fixed directory layout under the current working directory.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                PipelineError::Configuration(
                    "Missing OPENAI_API_KEY in environment. Aborting.".to_string(),
                )
            })?;

        let cwd = std::env::current_dir().map_err(|e| {
            PipelineError::Configuration(format!("Cannot determine working directory: {e}"))
        })?;

        Ok(Self::with_roots(api_key, &cwd))
    }

    /// Derive the fixed directory layout from an explicit project root.
    pub fn with_roots(api_key: String, project_root: &Path) -> Self {
        Self {
            api_key,
            assets_root: project_root.join("research").join("loora").join("loora AI"),
            stills_root: project_root.join("research").join("loora").join("stills"),
            transcripts_root: project_root.join(".taskmaster").join("docs").join("transcripts"),
        }
    }
}
