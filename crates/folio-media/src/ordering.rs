//! Ordering and grouping of category media.
//!
//! A category's images and videos are merged into one sequence ordered by
//! `(position, id)`. The carousel shows the items flagged as slides (or all
//! items when none is flagged), and every other item with a key hangs under
//! the slide sharing that key.
//!
//! Nothing here mutates records in place: after any write to the backend the
//! caller fetches again and re-derives everything.

use std::collections::HashMap;

use folio_common::{Direction, MediaKind};

use crate::model::{MediaItem, MediaRecord};

/// Merge images and videos into one sequence ordered by position, then id.
///
/// Missing positions count as 0. No record is dropped.
pub fn build_ordered_media(images: &[MediaRecord], videos: &[MediaRecord]) -> Vec<MediaItem> {
    let mut items: Vec<MediaItem> = images
        .iter()
        .cloned()
        .map(|r| r.into_item(MediaKind::Image))
        .chain(videos.iter().cloned().map(|r| r.into_item(MediaKind::Video)))
        .collect();

    items.sort_by(|a, b| {
        a.sort_position()
            .cmp(&b.sort_position())
            .then_with(|| a.id.cmp(&b.id))
    });
    items
}

/// The carousel sequence: items flagged as slides, in order.
///
/// When no item is flagged the whole ordered list is returned.
pub fn select_slides(ordered: &[MediaItem]) -> Vec<MediaItem> {
    let slides: Vec<MediaItem> = ordered.iter().filter(|m| m.is_slide).cloned().collect();
    if slides.is_empty() {
        ordered.to_vec()
    } else {
        slides
    }
}

/// Non-slide items bucketed by their group key.
///
/// Buckets remember the order in which keys were first seen, but lookups
/// should go through [`SlideGroups::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideGroups {
    buckets: Vec<(String, Vec<MediaItem>)>,
    index: HashMap<String, usize>,
}

impl SlideGroups {
    /// Items grouped under `key`; empty when the key has no members.
    pub fn get(&self, key: &str) -> &[MediaItem] {
        self.index
            .get(key)
            .map(|&i| self.buckets[i].1.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in first-appearance order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MediaItem])> {
        self.buckets.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of grouped items across all buckets.
    pub fn member_count(&self) -> usize {
        self.buckets.iter().map(|(_, v)| v.len()).sum()
    }

    fn push(&mut self, key: &str, item: MediaItem) {
        match self.index.get(key) {
            Some(&i) => self.buckets[i].1.push(item),
            None => {
                self.index.insert(key.to_string(), self.buckets.len());
                self.buckets.push((key.to_string(), vec![item]));
            }
        }
    }
}

/// Bucket non-slide items by group key, each bucket sorted by position.
///
/// Slides never join a bucket, even when they carry a key. Items without a
/// key (or with an empty one) are left out. The per-bucket sort is stable,
/// so equal positions keep their input order.
pub fn group_by_key(ordered: &[MediaItem]) -> SlideGroups {
    let mut groups = SlideGroups::default();
    for item in ordered {
        if item.is_slide {
            continue;
        }
        let Some(key) = item.effective_key() else {
            continue;
        };
        groups.push(key, item.clone());
    }

    for (_, bucket) in &mut groups.buckets {
        bucket.sort_by_key(MediaItem::sort_position);
    }
    groups
}

/// Swap the element at `idx` with its neighbour in `direction`.
///
/// Returns `None` when the move would leave the list (first item up, last
/// item down) or `idx` is out of range.
pub fn swap_adjacent<T: Clone>(items: &[T], idx: usize, direction: Direction) -> Option<Vec<T>> {
    if idx >= items.len() {
        return None;
    }
    let other = match direction {
        Direction::Up => idx.checked_sub(1)?,
        Direction::Down => {
            let next = idx + 1;
            if next >= items.len() {
                return None;
            }
            next
        }
    };
    let mut out = items.to_vec();
    out.swap(idx, other);
    Some(out)
}
