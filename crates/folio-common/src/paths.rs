//! Path utilities for detecting upload types by extension.
//!
//! Uploads are classified before they leave the machine: the CLI picks the
//! media kind for a file, the CV upload only accepts PDFs, and multipart parts
//! carry a content type guessed from the extension.

use crate::MediaKind;
use std::path::Path;

/// List of supported video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "m4v", "mkv", "avi", "ogv"];

/// List of supported image file extensions.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg", "avif"];

fn extension_lowercase(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Check if a path has a video file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use folio_common::paths::is_video_file;
///
/// assert!(is_video_file(Path::new("reel.MP4")));
/// assert!(!is_video_file(Path::new("cover.png")));
/// ```
pub fn is_video_file(path: &Path) -> bool {
    extension_lowercase(path)
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Check if a path has an image file extension.
pub fn is_image_file(path: &Path) -> bool {
    extension_lowercase(path)
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Check if a path names a PDF document (case-insensitive).
pub fn is_pdf_file(path: &Path) -> bool {
    extension_lowercase(path).as_deref() == Some("pdf")
}

/// Guess the media kind of an upload from its extension.
pub fn media_kind_for(path: &Path) -> Option<MediaKind> {
    if is_image_file(path) {
        Some(MediaKind::Image)
    } else if is_video_file(path) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

/// Content type to send for a file part. Unknown extensions fall back to
/// `application/octet-stream`.
pub fn mime_type_for(path: &Path) -> &'static str {
    match extension_lowercase(path).as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        Some("avif") => "image/avif",
        Some("mp4") | Some("m4v") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        Some("mkv") => "video/x-matroska",
        Some("avi") => "video/x-msvideo",
        Some("ogv") => "video/ogg",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_is_video_file() {
        assert!(is_video_file(Path::new("clip.mp4")));
        assert!(is_video_file(Path::new("/uploads/clip.WEBM")));
        assert!(!is_video_file(Path::new("clip")));
        assert!(!is_video_file(Path::new("clip.png")));
    }

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("hero.JPG")));
        assert!(is_image_file(Path::new("sketch.webp")));
        assert!(!is_image_file(Path::new("hero.mp4")));
    }

    #[test]
    fn test_is_pdf_file() {
        assert!(is_pdf_file(Path::new("cv.pdf")));
        assert!(is_pdf_file(Path::new("CV.Pdf")));
        assert!(!is_pdf_file(Path::new("cv.docx")));
        assert!(!is_pdf_file(&PathBuf::from("pdf")));
    }

    #[test]
    fn test_media_kind_for() {
        assert_eq!(media_kind_for(Path::new("a.png")), Some(MediaKind::Image));
        assert_eq!(media_kind_for(Path::new("a.mov")), Some(MediaKind::Video));
        assert_eq!(media_kind_for(Path::new("a.txt")), None);
    }

    #[test]
    fn test_mime_type_for() {
        assert_eq!(mime_type_for(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("a.mp4")), "video/mp4");
        assert_eq!(mime_type_for(Path::new("cv.pdf")), "application/pdf");
        assert_eq!(mime_type_for(Path::new("notes")), "application/octet-stream");
    }
}
