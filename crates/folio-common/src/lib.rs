//! Folio-Common: Shared types, constants, and utilities.
//!
//! This crate provides common functionality used across folio:
//!
//! - **Typed IDs**: Integer wrappers for categories and media records
//! - **Core Types**: Media kinds and social platforms as the backend names them
//! - **Path Utilities**: Functions to detect upload types by extension
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use folio_common::{CategoryId, MediaKind, Error, Result};
//! use folio_common::paths::is_pdf_file;
//! use std::path::Path;
//!
//! let category = CategoryId::new(3);
//! assert_eq!(category.to_string(), "3");
//!
//! assert_eq!(MediaKind::Video.as_str(), "video");
//! assert!(is_pdf_file(Path::new("cv.PDF")));
//!
//! fn example() -> Result<()> {
//!     Err(Error::not_found("category 3"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod ids;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use ids::*;
pub use types::*;
