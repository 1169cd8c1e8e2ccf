//! Wire records and the normalized media item.
//!
//! [`MediaRecord`] mirrors what the backend returns for a single image or
//! video inside a category detail. Every field except `id` is optional there,
//! and that optionality is kept so records round-trip unchanged.
//! [`MediaItem`] is the kind-tagged form the ordering engine works on.

use folio_common::{CategoryId, MediaId, MediaKind};
use serde::{Deserialize, Serialize};

/// An image or video record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub id: MediaId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_carousel: Option<bool>,
    #[serde(default)]
    pub slide_key: Option<String>,
}

impl MediaRecord {
    fn bare(id: i64) -> Self {
        Self {
            id: MediaId::new(id),
            image_url: None,
            video_url: None,
            description: None,
            position: None,
            is_carousel: None,
            slide_key: None,
        }
    }

    /// An image record with only an id and url set.
    pub fn image(id: i64, url: impl Into<String>) -> Self {
        Self {
            image_url: Some(url.into()),
            ..Self::bare(id)
        }
    }

    /// A video record with only an id and url set.
    pub fn video(id: i64, url: impl Into<String>) -> Self {
        Self {
            video_url: Some(url.into()),
            ..Self::bare(id)
        }
    }

    /// Mark the record as a carousel slide.
    #[must_use]
    pub fn slide(mut self) -> Self {
        self.is_carousel = Some(true);
        self
    }

    /// Set the sort position.
    #[must_use]
    pub fn at(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the slide grouping key.
    #[must_use]
    pub fn keyed(mut self, key: impl Into<String>) -> Self {
        self.slide_key = Some(key.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Tag the record with its kind. The url comes from `image_url` for
    /// images and `video_url` for videos; a missing url becomes empty.
    pub fn into_item(self, kind: MediaKind) -> MediaItem {
        let url = match kind {
            MediaKind::Image => self.image_url,
            MediaKind::Video => self.video_url,
        };
        MediaItem {
            id: self.id,
            kind,
            url: url.unwrap_or_default(),
            description: self.description,
            position: self.position,
            is_slide: self.is_carousel.unwrap_or(false),
            group_key: self.slide_key,
        }
    }
}

/// A media record tagged with its kind, ready for ordering and grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: MediaId,
    pub kind: MediaKind,
    /// Relative upload path or absolute URL, exactly as stored.
    pub url: String,
    pub description: Option<String>,
    pub position: Option<i64>,
    /// Member of the top-level carousel.
    pub is_slide: bool,
    /// Key tying a non-slide item to the slide that shares it.
    pub group_key: Option<String>,
}

impl MediaItem {
    /// Sort key; a missing position counts as 0.
    pub fn sort_position(&self) -> i64 {
        self.position.unwrap_or(0)
    }

    /// The grouping key, treating an empty string like no key.
    pub fn effective_key(&self) -> Option<&str> {
        self.group_key.as_deref().filter(|k| !k.is_empty())
    }

    pub fn is_image(&self) -> bool {
        self.kind == MediaKind::Image
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// A category with all of its media, as returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<MediaRecord>,
    #[serde(default)]
    pub videos: Vec<MediaRecord>,
}
