use std::path::Path;

use tracing::info;

use crate::config::{LANGUAGE, TRANSCRIPTION_ENDPOINT, WHISPER_MODEL};
use crate::error::{PipelineError, Result};

/// Client for the OpenAI Whisper transcription endpoint. One synchronous
/// request/response round trip per file; no retry, no chunking, and no
/// explicit timeout beyond the transport's defaults.
pub struct TranscriptionClient {
    client: reqwest::Client,
    api_key: String,
}

impl TranscriptionClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Upload one WAV file as a multipart form and return the plain-text
    /// transcript body.
    pub async fn transcribe(&self, wav_path: &Path) -> Result<String> {
        let file_name = wav_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio.wav".to_string());

        let audio_data = tokio::fs::read(wav_path).await?;

        info!(
            "Transcribing {} ({:.1} MB)",
            wav_path.display(),
            audio_data.len() as f64 / 1_000_000.0
        );

        let form = reqwest::multipart::Form::new()
            .text("model", WHISPER_MODEL)
            .text("language", LANGUAGE)
            .text("response_format", "text")
            .part(
                "file",
                reqwest::multipart::Part::bytes(audio_data)
                    .file_name(file_name)
                    .mime_str("audio/wav")?,
            );

        let response = self
            .client
            .post(TRANSCRIPTION_ENDPOINT)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(PipelineError::Transcription {
                status: status.as_u16(),
                body,
            });
        }

        info!("Transcription completed: {} characters", body.len());
        Ok(body)
    }
}
