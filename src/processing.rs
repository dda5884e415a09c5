use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::api::TranscriptionClient;
use crate::audio;
use crate::config::Config;
use crate::discovery::discover_videos;
use crate::error::Result;
use crate::ffmpeg::Ffmpeg;
use crate::layout::OutputLayout;
use crate::video;

/// Outcome of one video's full processing attempt, accumulated for console
/// reporting only.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub video: PathBuf,
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary of a whole batch run.
#[derive(Debug)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub outcomes: Vec<FileOutcome>,
}

impl BatchSummary {
    fn empty() -> Self {
        Self {
            total: 0,
            successful: 0,
            failed: 0,
            outcomes: Vec::new(),
        }
    }
}

/// Sequential batch driver: exactly one external tool process and one
/// network request in flight at any time. A single file's failure is caught
/// at the per-file boundary and never aborts the batch.
pub struct BatchProcessor {
    config: Config,
    ffmpeg: Ffmpeg,
    client: TranscriptionClient,
}

impl BatchProcessor {
    pub fn new(config: Config, ffmpeg: Ffmpeg) -> Self {
        let client = TranscriptionClient::new(config.api_key.clone());
        Self {
            config,
            ffmpeg,
            client,
        }
    }

    /// Discover all videos under the assets root and process them one at a
    /// time. Errors escaping this function are setup failures; per-file
    /// failures are recorded in the returned summary.
    pub async fn run(&self) -> Result<BatchSummary> {
        tokio::fs::create_dir_all(&self.config.stills_root).await?;
        tokio::fs::create_dir_all(&self.config.transcripts_root).await?;

        let videos = discover_videos(&self.config.assets_root)?;
        if videos.is_empty() {
            info!("No MP4 files found.");
            return Ok(BatchSummary::empty());
        }

        info!("Found {} videos to process", videos.len());

        let mut outcomes = Vec::with_capacity(videos.len());
        for (index, video_path) in videos.iter().enumerate() {
            info!(
                "Processing video {}/{}: {}",
                index + 1,
                videos.len(),
                video_path.display()
            );

            let outcome = match self.process_one(video_path).await {
                Ok(()) => {
                    let rel = video_path
                        .strip_prefix(&self.config.assets_root)
                        .unwrap_or(video_path);
                    info!("Processed: {}", rel.display());
                    FileOutcome {
                        video: video_path.clone(),
                        error: None,
                    }
                }
                Err(e) => {
                    warn!("Failed processing {}: {}", video_path.display(), e);
                    FileOutcome {
                        video: video_path.clone(),
                        error: Some(e.to_string()),
                    }
                }
            };
            outcomes.push(outcome);
        }

        let successful = outcomes.iter().filter(|o| o.succeeded()).count();
        info!("All videos processed.");

        Ok(BatchSummary {
            total: outcomes.len(),
            successful,
            failed: outcomes.len() - successful,
            outcomes,
        })
    }

    /// Run the full pipeline for one video in strict sequence: layout
    /// planning, frame extraction, audio extraction, transcription,
    /// transcript write. The first failing step aborts the remaining steps,
    /// so no transcript file is written for a failed video.
    async fn process_one(&self, video_path: &Path) -> Result<()> {
        let layout = OutputLayout::plan(&self.config, video_path)?;
        layout.ensure_dirs().await?;

        video::extract_frames(&self.ffmpeg, video_path, &layout.frames_dir).await?;
        audio::extract_audio(&self.ffmpeg, video_path, &layout.audio_path).await?;

        let transcript = self.client.transcribe(&layout.audio_path).await?;
        tokio::fs::write(&layout.transcript_path, transcript).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn processor_for(temp_dir: &TempDir, tool: &str) -> BatchProcessor {
        let config = Config::with_roots("sk-test".to_string(), temp_dir.path());
        BatchProcessor::new(config, Ffmpeg::with_program(tool))
    }

    fn seed_video(config: &Config, rel: &str) {
        let path = config.assets_root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"not a real video").unwrap();
    }

    #[tokio::test]
    async fn empty_run_creates_only_top_level_roots() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::with_roots("sk-test".to_string(), temp_dir.path());
        fs::create_dir_all(&config.assets_root).unwrap();

        let processor = processor_for(&temp_dir, "ffmpeg");
        let summary = processor.run().await.unwrap();

        assert_eq!(summary.total, 0);
        assert_eq!(summary.successful, 0);
        assert_eq!(summary.failed, 0);

        assert!(config.stills_root.is_dir());
        assert!(config.transcripts_root.is_dir());
        assert_eq!(fs::read_dir(&config.stills_root).unwrap().count(), 0);
        assert_eq!(fs::read_dir(&config.transcripts_root).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn tool_failure_is_isolated_per_file() {
        let temp_dir = TempDir::new().unwrap();
        // `false` ignores its arguments and exits with status 1, standing in
        // for a media tool that fails on every invocation.
        let processor = processor_for(&temp_dir, "false");

        seed_video(&processor.config, "onboarding1/clip.mp4");
        seed_video(&processor.config, "onboarding2/other.mp4");

        let summary = processor.run().await.unwrap();

        assert_eq!(summary.total, 2);
        assert_eq!(summary.successful, 0);
        assert_eq!(summary.failed, 2);
        for outcome in &summary.outcomes {
            let message = outcome.error.as_deref().unwrap();
            assert!(message.contains("exited with code 1"), "{message}");
        }

        // No transcript may exist for a failed video.
        let transcripts = &processor.config.transcripts_root;
        assert!(!transcripts.join("onboarding1/clip.txt").exists());
        assert!(!transcripts.join("onboarding2/other.txt").exists());
    }

    #[tokio::test]
    async fn extraction_reaches_transcription_step() {
        let temp_dir = TempDir::new().unwrap();
        // `true` makes both ffmpeg invocations no-ops, so the pipeline
        // proceeds to transcription, which fails on the missing WAV file.
        let processor = processor_for(&temp_dir, "true");

        seed_video(&processor.config, "onboarding1/clip.mp4");

        let summary = processor.run().await.unwrap();

        assert_eq!(summary.total, 1);
        assert_eq!(summary.failed, 1);

        // Layout planning ran before the tool: the frames directory exists.
        let frames_dir = processor
            .config
            .stills_root
            .join("onboarding1")
            .join("clip");
        assert!(frames_dir.is_dir());
        assert!(!processor
            .config
            .transcripts_root
            .join("onboarding1/clip.txt")
            .exists());
    }
}
