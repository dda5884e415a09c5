use std::ffi::OsStr;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{PipelineError, Result};

/// Handle to the ffmpeg binary, resolved once at process start. A missing
/// binary is a startup-fatal condition, not a per-file error.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    program: String,
}

impl Ffmpeg {
    /// Resolve `ffmpeg` on the PATH by probing `ffmpeg -version`.
    pub async fn locate() -> Result<Self> {
        Self::locate_program("ffmpeg").await
    }

    /// Use a specific program name without probing for it.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn locate_program(program: &str) -> Result<Self> {
        let probe = Command::new(program)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match probe {
            Ok(status) if status.success() => {
                info!("Resolved media tool: {}", program);
                Ok(Self {
                    program: program.to_string(),
                })
            }
            Ok(status) => Err(PipelineError::Configuration(format!(
                "{program} -version exited with {status}"
            ))),
            Err(e) => Err(PipelineError::Configuration(format!(
                "{program} not found on PATH: {e}"
            ))),
        }
    }

    /// Run the tool with the given arguments and wait for completion. Stdout
    /// and stderr are inherited from the parent so the tool's own progress
    /// output stays visible on the operator's console.
    pub async fn run<I, S>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        debug!("Executing command: {:?}", command);

        let status = command.status().await?;
        if status.success() {
            Ok(())
        } else {
            Err(PipelineError::ExternalTool {
                program: self.program.clone(),
                status: status.code(),
            })
        }
    }
}
