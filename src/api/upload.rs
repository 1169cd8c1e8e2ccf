//! Files headed for multipart upload endpoints.

use std::path::Path;

use folio_common::{paths, Error, MediaKind, Result};
use reqwest::multipart::{Form, Part};

/// A file read into memory, ready to become a multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Read `path`, rejecting files larger than `max_bytes` before reading.
    pub fn from_path(path: &Path, max_bytes: u64) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(Error::invalid_input(format!("{} is not a file", path.display())));
        }
        if metadata.len() > max_bytes {
            return Err(Error::invalid_input(format!(
                "{} is {} bytes, larger than the {} byte upload limit",
                path.display(),
                metadata.len(),
                max_bytes
            )));
        }

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::invalid_input(format!("{} has no usable file name", path.display())))?
            .to_string();

        Ok(Self {
            mime_type: paths::mime_type_for(path),
            bytes: std::fs::read(path)?,
            file_name,
        })
    }

    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        Self {
            mime_type: paths::mime_type_for(Path::new(&file_name)),
            file_name,
            bytes,
        }
    }

    pub(crate) fn into_part(self) -> Result<Part> {
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(self.mime_type)
            .map_err(|e| Error::invalid_input(format!("bad mime type: {e}")))
    }

    pub(crate) fn into_form(self) -> Result<Form> {
        Ok(Form::new().part("file", self.into_part()?))
    }
}

/// Where an uploaded category media item lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// A new top-level carousel slide.
    Slide,
    /// A secondary item attached to the slide with this key.
    Item { slide_key: String },
}

/// One media item for `POST /categories/{id}/media`.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub kind: MediaKind,
    pub file: FileUpload,
    pub placement: Placement,
    pub description: Option<String>,
}

impl MediaUpload {
    pub fn new(kind: MediaKind, file: FileUpload, placement: Placement) -> Self {
        Self {
            kind,
            file,
            placement,
            description: None,
        }
    }

    #[must_use]
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check the upload is coherent before any request goes out.
    pub fn validate(&self) -> Result<()> {
        if let Placement::Item { slide_key } = &self.placement {
            if slide_key.trim().is_empty() {
                return Err(Error::invalid_input("a slide key is required for non-slide items"));
            }
        }
        if let Some(expected) = paths::media_kind_for(Path::new(&self.file.file_name)) {
            if expected != self.kind {
                return Err(Error::invalid_input(format!(
                    "{} looks like {} but was uploaded as {}",
                    self.file.file_name, expected, self.kind
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn into_form(self) -> Result<Form> {
        self.validate()?;

        let mut form = Form::new().text("type", self.kind.as_str());
        form = match self.placement {
            Placement::Slide => form.text("is_carousel", "true"),
            Placement::Item { slide_key } => form
                .text("is_carousel", "false")
                .text("slide_key", slide_key.trim().to_string()),
        };
        if let Some(description) = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
        {
            form = form.text("description", description.to_string());
        }

        Ok(form.part("file", self.file.into_part()?))
    }
}
