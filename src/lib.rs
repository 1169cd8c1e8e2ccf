//! Folio - portfolio gallery and admin client
//!
//! This library crate exposes the API client and configuration for the
//! `folio` binary and for integration testing. Ordering and URL handling
//! live in `folio-media`.

pub mod api;
pub mod config;
