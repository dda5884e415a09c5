use std::ffi::OsString;
use std::path::Path;

use tracing::info;

use crate::config::FRAME_RATE;
use crate::error::Result;
use crate::ffmpeg::Ffmpeg;

/// Extract one still per second of source video into `frames_dir` as
/// sequentially numbered JPEGs (`0001.jpg`, `0002.jpg`, ...). Existing
/// frames with the same names are overwritten.
pub async fn extract_frames(ffmpeg: &Ffmpeg, video_path: &Path, frames_dir: &Path) -> Result<()> {
    info!("Extracting frames: {}", video_path.display());
    ffmpeg.run(frame_args(video_path, frames_dir)).await
}

fn frame_args(video_path: &Path, frames_dir: &Path) -> Vec<OsString> {
    vec![
        "-y".into(),
        "-i".into(),
        video_path.as_os_str().into(),
        "-vf".into(),
        format!("fps={FRAME_RATE}").into(),
        frames_dir.join("%04d.jpg").into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn frame_args_sample_at_one_fps_with_numbered_output() {
        let args = frame_args(
            Path::new("/assets/onboarding1/clip.mp4"),
            Path::new("/stills/onboarding1/clip"),
        );

        let expected: Vec<OsString> = vec![
            "-y".into(),
            "-i".into(),
            "/assets/onboarding1/clip.mp4".into(),
            "-vf".into(),
            "fps=1".into(),
            PathBuf::from("/stills/onboarding1/clip/%04d.jpg").into(),
        ];
        assert_eq!(args, expected);
    }
}
