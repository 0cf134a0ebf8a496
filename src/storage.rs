// SPDX-License-Identifier: MPL-2.0

//! Writing gallery photos to disk

use crate::errors::PhotoError;
use crate::gallery::GalleryItem;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Write `item`'s JPEG into `dir` under its download name
///
/// Creates the directory if needed. Runs the I/O on the blocking pool and
/// returns the path written.
pub async fn save_gallery_item(item: GalleryItem, dir: PathBuf) -> Result<PathBuf, PhotoError> {
    let path = dir.join(item.download_name());
    debug!(path = %path.display(), size = item.image_data.len(), "Saving photo");

    let target = path.clone();
    tokio::task::spawn_blocking(move || write_photo(&target, &item.image_data))
        .await
        .map_err(|e| PhotoError::SaveFailed(format!("Save task error: {}", e)))??;

    info!(path = %path.display(), "Photo saved");
    Ok(path)
}

/// Blocking variant of [`save_gallery_item`] for command-line use
pub fn write_photo(path: &Path, jpeg: &[u8]) -> Result<(), PhotoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, jpeg)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Thumbnail;
    use std::sync::Arc;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pinkcam-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[tokio::test]
    async fn test_save_uses_download_name() {
        let dir = scratch_dir("save");
        let item = GalleryItem {
            image_data: Arc::from(vec![0xFF, 0xD8, 0xFF, 0xD9]),
            timestamp_id: 42,
            width: 1,
            height: 1,
            thumbnail: Thumbnail {
                width: 1,
                height: 1,
                rgba: Arc::from(vec![0u8; 4]),
            },
        };

        let path = save_gallery_item(item, dir.clone()).await.unwrap();
        assert_eq!(path, dir.join("pinkcam_42.jpg"));
        assert_eq!(std::fs::read(&path).unwrap(), vec![0xFF, 0xD8, 0xFF, 0xD9]);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_photo_creates_parent() {
        let dir = scratch_dir("nested");
        let path = dir.join("a").join("b.jpg");
        write_photo(&path, b"jpeg").unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
