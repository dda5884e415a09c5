use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::config::VIDEO_EXTENSION;
use crate::error::Result;

/// Recursively collect all MP4 files under `root`.
///
/// A nonexistent root yields an empty result without error; the caller
/// validates existence before starting a run. Traversal order is not part of
/// the contract. Symlinks are not followed, so cyclic links cannot recurse
/// forever.
pub fn discover_videos(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut videos = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file() && is_video(entry.path()) {
            videos.push(entry.into_path());
        }
    }

    debug!("Discovered {} video files under {}", videos.len(), root.display());
    Ok(videos)
}

fn is_video(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(VIDEO_EXTENSION))
}
