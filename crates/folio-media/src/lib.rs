//! # folio-media
//!
//! Pure data shaping for portfolio galleries: ordering image and video
//! records, picking the carousel slides, grouping secondary items under their
//! slide, and turning raw media URLs into absolute, embeddable or autoplaying
//! URLs.
//!
//! Nothing in this crate performs I/O or can fail. Every function is a total
//! transform over in-memory data, so callers never handle errors from it.
//!
//! ## Quick Start
//!
//! ```
//! use folio_media::{build_ordered_media, group_by_key, select_slides, MediaRecord};
//!
//! let images = vec![
//!     MediaRecord::image(1, "/media/cover.png").slide().at(0).keyed("intro"),
//!     MediaRecord::image(2, "/media/detail.png").at(1).keyed("intro"),
//! ];
//! let videos = vec![MediaRecord::video(3, "https://youtu.be/abc123").at(2).keyed("intro")];
//!
//! let ordered = build_ordered_media(&images, &videos);
//! let slides = select_slides(&ordered);
//! let groups = group_by_key(&ordered);
//!
//! assert_eq!(slides.len(), 1);
//! assert_eq!(groups.get("intro").len(), 2);
//! ```
//!
//! ## URLs
//!
//! ```
//! use folio_media::{resolve, to_embed_url};
//!
//! assert_eq!(
//!     resolve("/media/x.png", "https://api.example.com"),
//!     "https://api.example.com/media/x.png"
//! );
//! assert_eq!(
//!     to_embed_url("https://youtu.be/abc123"),
//!     "https://www.youtube.com/embed/abc123"
//! );
//! ```

pub mod blocks;
pub mod embed;
pub mod gallery;
pub mod model;
pub mod ordering;
pub mod resolve;

pub use blocks::{ContactBlock, Section};
pub use embed::{is_provider_link, to_autoplay_embed_url, to_embed_url, Provider};
pub use gallery::{Gallery, GalleryEntry, GalleryStats, MediaSource};
pub use model::{CategoryDetail, MediaItem, MediaRecord};
pub use ordering::{build_ordered_media, group_by_key, select_slides, swap_adjacent, SlideGroups};
pub use resolve::{is_absolute_http, normalize_profile_url, resolve};
