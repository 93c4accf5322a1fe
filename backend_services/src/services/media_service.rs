use std::{fs, path::PathBuf};

use guestbook_core::{sort_by_sequence, GifCursor, GifFrame, MediaItem};
use rand::seq::SliceRandom;
use tracing::warn;

pub const MUSIC_DIR: &str = "bg-music";
pub const GIF_DIR: &str = "gif";
pub const IMAGE_DIR: &str = "images";

/// Folders served to the page, each under `MEDIA_ROUTE`.
pub const MEDIA_FOLDERS: [&str; 3] = [MUSIC_DIR, GIF_DIR, IMAGE_DIR];

/// Route the asset folders are served under.
pub const MEDIA_ROUTE: &str = "/media";

/// Read-only view of the asset folders.
pub struct MediaLibrary {
    root: PathBuf,
}

impl MediaLibrary {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Files in `folder` ending with `extension`, sorted by name. A missing
    /// folder lists as empty.
    pub fn list(&self, folder: &str, extension: &str) -> Vec<String> {
        let dir = self.root.join(folder);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Media folder {} unavailable: {}", dir.display(), e);
                return Vec::new();
            }
        };

        let mut result = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    if name.ends_with(extension) {
                        result.push(name.to_string());
                    }
                }
            }
        }
        result.sort();
        result
    }

    pub fn music_files(&self) -> Vec<String> {
        self.list(MUSIC_DIR, ".mp3")
    }

    pub fn image_files(&self) -> Vec<String> {
        self.list(IMAGE_DIR, ".jpg")
    }

    /// Gif files in sequence order (`gif2` before `gif10`).
    pub fn gif_files(&self) -> Vec<String> {
        let mut files = self.list(GIF_DIR, ".gif");
        sort_by_sequence(&mut files);
        files
    }

    pub fn item(&self, folder: &str, file_name: &str) -> MediaItem {
        MediaItem {
            url: format!("{}/{}/{}", MEDIA_ROUTE, folder, urlencoding::encode(file_name)),
            file_name: file_name.to_string(),
        }
    }

    fn random_item(&self, folder: &str, files: &[String]) -> Option<MediaItem> {
        files
            .choose(&mut rand::thread_rng())
            .map(|file| self.item(folder, file))
    }

    pub fn random_music(&self) -> Option<MediaItem> {
        self.random_item(MUSIC_DIR, &self.music_files())
    }

    pub fn random_image(&self) -> Option<MediaItem> {
        self.random_item(IMAGE_DIR, &self.image_files())
    }

    /// Frame the cursor points at within `files`.
    pub fn gif_frame(&self, files: &[String], cursor: &GifCursor) -> Option<GifFrame> {
        let index = cursor.current(files.len())?;
        Some(GifFrame {
            index,
            total: files.len(),
            item: self.item(GIF_DIR, &files[index]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn library_with(files: &[&str]) -> (TempDir, MediaLibrary) {
        let dir = tempfile::tempdir().unwrap();
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            File::create(path).unwrap();
        }
        let library = MediaLibrary::new(dir.path().to_path_buf());
        (dir, library)
    }

    #[test]
    fn test_lists_only_matching_extension() {
        let (_dir, library) =
            library_with(&["bg-music/a.mp3", "bg-music/b.wav", "bg-music/c.mp3", "images/x.jpg"]);
        assert_eq!(library.music_files(), vec!["a.mp3", "c.mp3"]);
        assert_eq!(library.image_files(), vec!["x.jpg"]);
    }

    #[test]
    fn test_missing_folder_is_empty() {
        let (_dir, library) = library_with(&[]);
        assert!(library.gif_files().is_empty());
        assert!(library.random_music().is_none());
        assert!(library.random_image().is_none());
    }

    #[test]
    fn test_gifs_are_in_sequence_order() {
        let (_dir, library) = library_with(&["gif/gif10.gif", "gif/gif2.gif", "gif/gif1.gif"]);
        assert_eq!(library.gif_files(), vec!["gif1.gif", "gif2.gif", "gif10.gif"]);
    }

    #[test]
    fn test_random_pick_comes_from_folder() {
        let (_dir, library) = library_with(&["images/one.jpg", "images/two.jpg"]);
        let item = library.random_image().unwrap();
        assert!(item.file_name == "one.jpg" || item.file_name == "two.jpg");
        assert_eq!(item.url, format!("/media/images/{}", item.file_name));
    }

    #[test]
    fn test_urls_are_encoded() {
        let (_dir, library) = library_with(&[]);
        let item = library.item(MUSIC_DIR, "first love.mp3");
        assert_eq!(item.url, "/media/bg-music/first%20love.mp3");
    }

    #[test]
    fn test_gif_frame_follows_cursor() {
        let (_dir, library) = library_with(&[]);
        let files = vec!["gif1.gif".to_string(), "gif2.gif".to_string()];
        let frame = library.gif_frame(&files, &GifCursor::at(1)).unwrap();
        assert_eq!(frame.index, 1);
        assert_eq!(frame.total, 2);
        assert_eq!(frame.item.file_name, "gif2.gif");
        assert!(library.gif_frame(&[], &GifCursor::new()).is_none());
    }
}
