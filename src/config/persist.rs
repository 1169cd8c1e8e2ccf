//! Configuration persistence using toml_edit to preserve formatting and comments.

use anyhow::{Context, Result};
use std::path::Path;
use toml_edit::{value, DocumentMut, Item, Table};

fn read_document(path: &Path) -> Result<DocumentMut> {
    if !path.exists() {
        return Ok(DocumentMut::new());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    content
        .parse()
        .with_context(|| format!("Failed to parse config file: {:?}", path))
}

fn write_document(path: &Path, doc: &DocumentMut) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    std::fs::write(path, doc.to_string())
        .with_context(|| format!("Failed to write config file: {:?}", path))
}

fn api_table(doc: &mut DocumentMut) -> Result<&mut Table> {
    let item = doc.entry("api").or_insert_with(|| Item::Table(Table::new()));
    item.as_table_mut()
        .context("'api' in config file is not a table")
}

/// Store (or with `None`, remove) the admin token under `[api]`.
///
/// The file is created when missing; everything else in it is left as is.
pub fn save_token(path: &Path, token: Option<&str>) -> Result<()> {
    let mut doc = read_document(path)?;

    let api = api_table(&mut doc)?;
    match token {
        Some(token) => {
            api["token"] = value(token);
        }
        None => {
            api.remove("token");
        }
    }

    write_document(path, &doc)
}

/// Store the backend origin under `[api]`.
pub fn save_origin(path: &Path, origin: &str) -> Result<()> {
    let mut doc = read_document(path)?;
    api_table(&mut doc)?["origin"] = value(origin.trim_end_matches('/'));
    write_document(path, &doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_token_preserves_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(
            &path,
            "# portfolio backend\n[api]\norigin = \"https://p.example.com\" # prod\n",
        )
        .unwrap();

        save_token(&path, Some("tok-1")).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("# portfolio backend"));
        assert!(content.contains("# prod"));
        assert!(content.contains("token = \"tok-1\""));

        save_token(&path, None).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("token"));
        assert!(content.contains("origin"));
    }

    #[test]
    fn save_token_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        save_token(&path, Some("abc")).unwrap();
        let config: crate::config::Config =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(config.api.token.as_deref(), Some("abc"));
    }

    #[test]
    fn save_origin_trims_trailing_slash() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");

        save_origin(&path, "https://p.example.com/").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("origin = \"https://p.example.com\""));
    }
}
