use std::ffi::OsString;
use std::path::Path;

use tracing::info;

use crate::config::{AUDIO_CHANNELS, SAMPLE_RATE};
use crate::error::Result;
use crate::ffmpeg::Ffmpeg;

/// Demux and resample the video's audio track to mono 16 kHz uncompressed
/// WAV at `audio_path`, overwriting any existing file.
pub async fn extract_audio(ffmpeg: &Ffmpeg, video_path: &Path, audio_path: &Path) -> Result<()> {
    info!("Extracting audio: {}", video_path.display());
    ffmpeg.run(audio_args(video_path, audio_path)).await
}

fn audio_args(video_path: &Path, audio_path: &Path) -> Vec<OsString> {
    vec![
        "-y".into(),
        "-i".into(),
        video_path.as_os_str().into(),
        "-vn".into(),
        "-ac".into(),
        AUDIO_CHANNELS.to_string().into(),
        "-ar".into(),
        SAMPLE_RATE.to_string().into(),
        "-f".into(),
        "wav".into(),
        audio_path.as_os_str().into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_args_request_mono_16khz_wav() {
        let args = audio_args(
            Path::new("/assets/onboarding1/clip.mp4"),
            Path::new("/stills/onboarding1/clip/clip.wav"),
        );

        let expected: Vec<OsString> = vec![
            "-y".into(),
            "-i".into(),
            "/assets/onboarding1/clip.mp4".into(),
            "-vn".into(),
            "-ac".into(),
            "1".into(),
            "-ar".into(),
            "16000".into(),
            "-f".into(),
            "wav".into(),
            "/stills/onboarding1/clip/clip.wav".into(),
        ];
        assert_eq!(args, expected);
    }
}
