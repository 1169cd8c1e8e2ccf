//! Contact page content blocks.
//!
//! The contact page is a list of text, image and video blocks ordered by
//! position. The editor shows images and everything else as two sections;
//! any edit recomposes the list as images followed by the rest and renumbers
//! positions from zero.

use folio_common::Direction;
use serde::{Deserialize, Serialize};

use crate::ordering::swap_adjacent;

/// One block of the contact page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContactBlock {
    Text {
        #[serde(default)]
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<i64>,
    },
    Image {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        in_carousel: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<i64>,
    },
    Video {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        in_carousel: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<i64>,
    },
}

/// Editor section a block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Images,
    /// Text and video blocks.
    Others,
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "images" | "image" => Ok(Self::Images),
            "others" | "other" => Ok(Self::Others),
            other => Err(format!("unknown section: {other}")),
        }
    }
}

impl ContactBlock {
    pub fn text(content: impl Into<String>, position: i64) -> Self {
        Self::Text {
            content: content.into(),
            position: Some(position),
        }
    }

    pub fn image(url: impl Into<String>, position: i64) -> Self {
        Self::Image {
            url: url.into(),
            caption: None,
            in_carousel: None,
            position: Some(position),
        }
    }

    pub fn video(url: impl Into<String>, position: i64) -> Self {
        Self::Video {
            url: url.into(),
            caption: None,
            in_carousel: None,
            position: Some(position),
        }
    }

    /// Position used for ordering; missing counts as 0.
    pub fn position(&self) -> i64 {
        self.raw_position().unwrap_or(0)
    }

    fn raw_position(&self) -> Option<i64> {
        match self {
            Self::Text { position, .. } | Self::Image { position, .. } | Self::Video { position, .. } => {
                *position
            }
        }
    }

    fn set_position(&mut self, value: i64) {
        match self {
            Self::Text { position, .. } | Self::Image { position, .. } | Self::Video { position, .. } => {
                *position = Some(value)
            }
        }
    }

    pub fn section(&self) -> Section {
        match self {
            Self::Image { .. } => Section::Images,
            Self::Text { .. } | Self::Video { .. } => Section::Others,
        }
    }

    /// Media url for image and video blocks.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Image { url, .. } | Self::Video { url, .. } => Some(url),
            Self::Text { .. } => None,
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Image { .. } => "image",
            Self::Video { .. } => "video",
        }
    }
}

/// Give blocks loaded without a position their index in the list.
pub fn normalize_positions(blocks: Vec<ContactBlock>) -> Vec<ContactBlock> {
    blocks
        .into_iter()
        .enumerate()
        .map(|(idx, mut block)| {
            if block.raw_position().is_none() {
                block.set_position(idx as i64);
            }
            block
        })
        .collect()
}

/// Blocks in position order. The sort is stable.
pub fn sorted(blocks: &[ContactBlock]) -> Vec<ContactBlock> {
    let mut out = blocks.to_vec();
    out.sort_by_key(ContactBlock::position);
    out
}

/// The blocks of one section, in position order.
pub fn section(blocks: &[ContactBlock], which: Section) -> Vec<ContactBlock> {
    sorted(blocks)
        .into_iter()
        .filter(|b| b.section() == which)
        .collect()
}

/// Image urls in position order, for the contact page thumbnail strip.
pub fn image_urls(blocks: &[ContactBlock]) -> Vec<String> {
    section(blocks, Section::Images)
        .iter()
        .filter_map(|b| b.url().map(str::to_string))
        .collect()
}

fn recompose(images: Vec<ContactBlock>, others: Vec<ContactBlock>) -> Vec<ContactBlock> {
    images
        .into_iter()
        .chain(others)
        .enumerate()
        .map(|(idx, mut block)| {
            block.set_position(idx as i64);
            block
        })
        .collect()
}

fn split(blocks: &[ContactBlock]) -> (Vec<ContactBlock>, Vec<ContactBlock>) {
    sorted(blocks)
        .into_iter()
        .partition(|b| b.section() == Section::Images)
}

/// Move the block at `idx` of `which` one step in `direction`.
///
/// A move past either end of the section leaves the blocks untouched.
pub fn move_within(
    blocks: &[ContactBlock],
    which: Section,
    idx: usize,
    direction: Direction,
) -> Vec<ContactBlock> {
    let (images, others) = split(blocks);
    match which {
        Section::Images => match swap_adjacent(&images, idx, direction) {
            Some(images) => recompose(images, others),
            None => blocks.to_vec(),
        },
        Section::Others => match swap_adjacent(&others, idx, direction) {
            Some(others) => recompose(images, others),
            None => blocks.to_vec(),
        },
    }
}

/// Remove the block at `idx` of `which`. Out-of-range indexes change nothing.
pub fn remove_from(blocks: &[ContactBlock], which: Section, idx: usize) -> Vec<ContactBlock> {
    let (mut images, mut others) = split(blocks);
    let target = match which {
        Section::Images => &mut images,
        Section::Others => &mut others,
    };
    if idx >= target.len() {
        return blocks.to_vec();
    }
    target.remove(idx);
    recompose(images, others)
}

fn append(blocks: &[ContactBlock], make: impl FnOnce(i64) -> ContactBlock) -> Vec<ContactBlock> {
    let mut out = sorted(blocks);
    let position = out.len() as i64;
    out.push(make(position));
    out
}

/// Append a text block; the admin editor starts it empty.
pub fn append_text(blocks: &[ContactBlock], content: &str) -> Vec<ContactBlock> {
    append(blocks, |p| ContactBlock::text(content, p))
}

/// Append an image block for an uploaded url.
pub fn append_image(blocks: &[ContactBlock], url: &str) -> Vec<ContactBlock> {
    append(blocks, |p| ContactBlock::image(url, p))
}

/// Append a video block. Blank urls are ignored.
pub fn append_video(blocks: &[ContactBlock], url: &str) -> Vec<ContactBlock> {
    let clean = url.trim();
    if clean.is_empty() {
        return blocks.to_vec();
    }
    append(blocks, |p| ContactBlock::video(clean, p))
}
