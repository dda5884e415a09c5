//! Batch video asset pipeline.
//!
//! Walks a fixed research-assets tree for MP4 videos and produces, for each
//! one, a directory of 1 fps JPEG stills, a mono 16 kHz WAV track, and a
//! plain-text transcript from the OpenAI Whisper API. Processing is fully
//! sequential; a single video's failure never aborts the batch.

pub mod api;
pub mod audio;
pub mod config;
pub mod discovery;
pub mod error;
pub mod ffmpeg;
pub mod layout;
pub mod processing;
pub mod video;

// Re-export main types for easy access
pub use crate::api::TranscriptionClient;
pub use crate::config::Config;
pub use crate::error::{PipelineError, Result};
pub use crate::ffmpeg::Ffmpeg;
pub use crate::layout::OutputLayout;
pub use crate::processing::{BatchProcessor, BatchSummary, FileOutcome};
