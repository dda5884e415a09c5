use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

/// Destination paths for one input video, derived from its path relative to
/// the assets root. The frames directory doubles as the audio directory, so
/// re-running the pipeline lands on the same paths and overwrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    /// Directory receiving the numbered JPEG stills and the WAV file
    pub frames_dir: PathBuf,

    /// Mono 16 kHz WAV extracted from the video
    pub audio_path: PathBuf,

    /// Plain-text transcript destination
    pub transcript_path: PathBuf,
}

impl OutputLayout {
    /// Compute the output triple for `video_path`:
    /// `stills/<parent>/<base>/` for frames and audio,
    /// `transcripts/<parent>/<base>.txt` for the transcript, where `<parent>`
    /// is the video's containing directory relative to the assets root.
    pub fn plan(config: &Config, video_path: &Path) -> Result<Self> {
        let rel = video_path.strip_prefix(&config.assets_root).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "{} is outside the assets root {}",
                    video_path.display(),
                    config.assets_root.display()
                ),
            )
        })?;

        let base = rel
            .file_stem()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} has no file name", video_path.display()),
                )
            })?
            .to_string_lossy();

        let parent = rel.parent().unwrap_or_else(|| Path::new(""));

        let frames_dir = config.stills_root.join(parent).join(base.as_ref());
        let audio_path = frames_dir.join(format!("{base}.wav"));
        let transcript_path = config
            .transcripts_root
            .join(parent)
            .join(format!("{base}.txt"));

        Ok(Self {
            frames_dir,
            audio_path,
            transcript_path,
        })
    }

    /// Create all destination directories, recursively and idempotently.
    pub async fn ensure_dirs(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.frames_dir).await?;
        if let Some(parent) = self.transcript_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}
