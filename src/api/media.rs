use folio_common::{CategoryId, Direction, MediaId, Result};
use reqwest::Method;

use super::types::MediaMetaPatch;
use super::upload::MediaUpload;
use super::ApiClient;

impl ApiClient {
    /// Upload an image or video into a category, as a slide or as an item
    /// attached to a slide key.
    pub async fn upload_media(&self, category: CategoryId, upload: MediaUpload) -> Result<()> {
        self.require_token()?;

        let kind = upload.kind;
        let name = upload.file.file_name.clone();
        let form = upload.into_form()?;
        self.send_multipart_unit(&format!("/categories/{category}/media"), form)
            .await?;
        tracing::info!("Uploaded {} {} to category {}", kind, name, category);
        Ok(())
    }

    pub async fn delete_media(&self, id: MediaId) -> Result<()> {
        self.require_token()?;
        self.send_unit::<()>(Method::DELETE, &format!("/categories/media/{id}"), None)
            .await?;
        tracing::info!("Deleted media {}", id);
        Ok(())
    }

    /// Apply a partial metadata update. An empty patch sends nothing.
    pub async fn update_media_meta(&self, id: MediaId, patch: &MediaMetaPatch) -> Result<()> {
        if patch.is_empty() {
            return Ok(());
        }
        self.require_token()?;
        self.send_unit(
            Method::PATCH,
            &format!("/categories/media/{id}/meta"),
            Some(patch),
        )
        .await?;
        tracing::info!("Updated metadata of media {}", id);
        Ok(())
    }

    /// Shift an item's position one step; returns the new position.
    pub async fn bump_media_position(
        &self,
        id: MediaId,
        current: i64,
        direction: Direction,
    ) -> Result<i64> {
        let position = current.saturating_add(direction.step());
        self.update_media_meta(id, &MediaMetaPatch::position(position))
            .await?;
        Ok(position)
    }

    /// Attach an item to the slide with `key`, or detach it with `None`.
    pub async fn assign_media_to_slide(&self, id: MediaId, key: Option<&str>) -> Result<()> {
        let key = key.map(str::trim).filter(|k| !k.is_empty());
        self.update_media_meta(id, &MediaMetaPatch::slide_key(key))
            .await
    }
}
