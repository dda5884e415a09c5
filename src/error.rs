//! Pipeline error taxonomy.

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Error types for pipeline operations
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// Missing credential or missing input root. Fatal, pre-flight only.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unexpected filesystem failure. Fatal during discovery and setup,
    /// recovered at file granularity during per-file processing.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The external media tool exited abnormally. Recovered per file.
    #[error("{program} exited with {}", .status.map(|c| format!("code {c}")).unwrap_or_else(|| "a signal".to_string()))]
    ExternalTool {
        program: String,
        status: Option<i32>,
    },

    /// Non-2xx response from the transcription endpoint. Recovered per file.
    #[error("Whisper API failed: {status} {body}")]
    Transcription { status: u16, body: String },

    /// Transport-level failure talking to the transcription endpoint.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
