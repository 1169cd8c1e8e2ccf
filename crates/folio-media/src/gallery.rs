//! Gallery view model for one category.
//!
//! Bundles the ordered media, the carousel slides and the slide groups of a
//! category detail, and classifies each item into the source a renderer
//! needs: an image, an iframe player, or a native video element.

use serde::Serialize;

use crate::embed::{is_provider_link, to_autoplay_embed_url};
use crate::model::{CategoryDetail, MediaItem};
use crate::ordering::{build_ordered_media, group_by_key, select_slides, SlideGroups};
use crate::resolve::resolve;

/// Attributes a native `<video>` element gets when it plays a direct file.
pub const NATIVE_VIDEO_ATTRIBUTES: [&str; 4] = ["muted", "autoplay", "playsinline", "loop"];

/// How an item should be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MediaSource {
    Image { src: String },
    /// Provider player with autoplay parameters.
    Embed { src: String },
    /// Direct video file; see [`NATIVE_VIDEO_ATTRIBUTES`].
    NativeVideo { src: String },
}

impl MediaSource {
    /// Classify an item, resolving relative urls against `origin`.
    pub fn for_item(item: &MediaItem, origin: &str) -> Self {
        let src = resolve(&item.url, origin);
        if item.is_image() {
            Self::Image { src }
        } else if is_provider_link(&src) {
            Self::Embed {
                src: to_autoplay_embed_url(&src),
            }
        } else {
            Self::NativeVideo { src }
        }
    }

    pub fn src(&self) -> &str {
        match self {
            Self::Image { src } | Self::Embed { src } | Self::NativeVideo { src } => src,
        }
    }

    /// Short label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Image { .. } => "image",
            Self::Embed { .. } => "embed",
            Self::NativeVideo { .. } => "video",
        }
    }
}

/// An item paired with its display source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryEntry {
    pub item: MediaItem,
    pub source: MediaSource,
}

/// Counters shown in the admin header of a category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GalleryStats {
    pub slides: usize,
    /// Items that are not flagged as slides.
    pub items: usize,
    pub image_items: usize,
    pub video_items: usize,
}

/// Derived display structures for a category.
#[derive(Debug, Clone)]
pub struct Gallery {
    origin: String,
    ordered: Vec<MediaItem>,
    slides: Vec<MediaItem>,
    groups: SlideGroups,
}

impl Gallery {
    /// Run ordering, slide selection and grouping over a category detail.
    pub fn build(detail: &CategoryDetail, origin: &str) -> Self {
        let ordered = build_ordered_media(&detail.images, &detail.videos);
        let slides = select_slides(&ordered);
        let groups = group_by_key(&ordered);
        Self {
            origin: origin.to_string(),
            ordered,
            slides,
            groups,
        }
    }

    pub fn ordered(&self) -> &[MediaItem] {
        &self.ordered
    }

    pub fn slides(&self) -> &[MediaItem] {
        &self.slides
    }

    pub fn groups(&self) -> &SlideGroups {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Items shown beneath the slide at `slide_index`.
    ///
    /// Empty when the index is out of range or the slide has no key.
    pub fn subcontent(&self, slide_index: usize) -> &[MediaItem] {
        self.slides
            .get(slide_index)
            .and_then(MediaItem::effective_key)
            .map(|key| self.groups.get(key))
            .unwrap_or(&[])
    }

    /// Keys of slides that have one, in slide order.
    pub fn slide_keys(&self) -> Vec<&str> {
        self.slides.iter().filter_map(MediaItem::effective_key).collect()
    }

    /// Key of the first slide carrying one; the admin panel starts there.
    pub fn default_active_key(&self) -> Option<&str> {
        self.slides.iter().find_map(MediaItem::effective_key)
    }

    pub fn entry(&self, item: &MediaItem) -> GalleryEntry {
        GalleryEntry {
            item: item.clone(),
            source: MediaSource::for_item(item, &self.origin),
        }
    }

    pub fn slide_entries(&self) -> Vec<GalleryEntry> {
        self.slides.iter().map(|m| self.entry(m)).collect()
    }

    pub fn subcontent_entries(&self, slide_index: usize) -> Vec<GalleryEntry> {
        self.subcontent(slide_index).iter().map(|m| self.entry(m)).collect()
    }

    pub fn stats(&self) -> GalleryStats {
        let non_slides = self.ordered.iter().filter(|m| !m.is_slide);
        let (image_items, video_items) = non_slides.fold((0, 0), |(img, vid), m| {
            if m.is_image() {
                (img + 1, vid)
            } else {
                (img, vid + 1)
            }
        });
        GalleryStats {
            slides: self.slides.len(),
            items: image_items + video_items,
            image_items,
            video_items,
        }
    }
}
