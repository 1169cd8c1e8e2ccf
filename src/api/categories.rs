use folio_common::{CategoryId, Direction, Error, Result};
use folio_media::{resolve, swap_adjacent};
use reqwest::Method;

use super::types::{Category, CategoryDetail, CreatedCategory, NewCategory, ReorderRequest};
use super::ApiClient;

impl ApiClient {
    /// All categories in admin order.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.get_json("/categories").await
    }

    /// Categories visible to visitors, in display order.
    pub async fn list_public_categories(&self) -> Result<Vec<Category>> {
        self.get_json("/categories/public").await
    }

    /// A category with its image and video records.
    pub async fn category_detail(&self, id: CategoryId) -> Result<CategoryDetail> {
        self.get_json(&format!("/categories/{id}/detail")).await
    }

    pub async fn create_category(&self, name: &str, description: &str) -> Result<CreatedCategory> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::invalid_input("category name cannot be empty"));
        }
        self.require_token()?;

        let created: CreatedCategory = self
            .send_json(
                Method::POST,
                "/categories",
                &NewCategory {
                    name,
                    description: description.trim(),
                },
            )
            .await?;
        tracing::info!("Created category {} ({})", created.name, created.id);
        Ok(created)
    }

    pub async fn delete_category(&self, id: CategoryId) -> Result<()> {
        self.require_token()?;
        self.send_unit::<()>(Method::DELETE, &format!("/categories/{id}"), None)
            .await?;
        tracing::info!("Deleted category {}", id);
        Ok(())
    }

    /// Replace the category order with `ordered_ids`.
    pub async fn reorder_categories(&self, ordered_ids: &[CategoryId]) -> Result<()> {
        self.require_token()?;
        self.send_unit(
            Method::PUT,
            "/categories/reorder",
            Some(&ReorderRequest { ordered_ids }),
        )
        .await?;
        tracing::info!("Reordered {} categories", ordered_ids.len());
        Ok(())
    }

    /// Move one category a step up or down in the admin order.
    ///
    /// Returns `false` without sending anything when the category is
    /// already at that edge.
    pub async fn move_category(&self, id: CategoryId, direction: Direction) -> Result<bool> {
        self.require_token()?;

        let ids: Vec<CategoryId> = self.list_categories().await?.iter().map(|c| c.id).collect();
        let idx = ids
            .iter()
            .position(|c| *c == id)
            .ok_or_else(|| Error::not_found(format!("category {id}")))?;

        match swap_adjacent(&ids, idx, direction) {
            Some(reordered) => {
                self.reorder_categories(&reordered).await?;
                Ok(true)
            }
            None => {
                tracing::debug!("Category {} already at the {:?} edge", id, direction);
                Ok(false)
            }
        }
    }

    /// Absolute urls of the images of `categories`, category by category,
    /// at most `limit` of them. Records without an image url are skipped.
    pub(crate) async fn category_image_urls(
        &self,
        categories: &[Category],
        limit: Option<usize>,
    ) -> Result<Vec<String>> {
        let limit = limit.unwrap_or(usize::MAX);
        let mut urls = Vec::new();
        for category in categories {
            if urls.len() >= limit {
                break;
            }
            let detail = self.category_detail(category.id).await?;
            urls.extend(
                detail
                    .images
                    .iter()
                    .filter_map(|img| img.image_url.as_deref())
                    .filter(|u| !u.is_empty())
                    .map(|u| resolve(u, self.origin())),
            );
        }
        urls.truncate(limit);
        Ok(urls)
    }
}
