use folio_common::{CategoryId, Result};
use serde::Serialize;

use super::types::PublicSocials;
use super::ApiClient;

/// Number of hero images the landing page shows.
pub const HOME_HERO_LIMIT: usize = 5;

/// What the landing page needs from the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HomePage {
    /// Absolute image urls for the hero strip.
    pub hero_images: Vec<String>,
    /// Target of the "enter" link; `None` when nothing is public.
    pub first_category: Option<CategoryId>,
    pub socials: PublicSocials,
}

impl ApiClient {
    /// Absolute urls of the first `limit` public category images, in
    /// category order.
    pub async fn home_hero_images(&self, limit: usize) -> Result<Vec<String>> {
        let categories = self.list_public_categories().await?;
        self.category_image_urls(&categories, Some(limit)).await
    }

    /// Hero images, first category and social links for the landing page.
    ///
    /// Category failures are returned; a failed socials lookup gives no links.
    pub async fn home_page(&self, limit: usize) -> Result<HomePage> {
        let categories = self.list_public_categories().await?;
        let hero_images = self.category_image_urls(&categories, Some(limit)).await?;

        let socials = match self.public_socials().await {
            Ok(socials) => socials,
            Err(e) => {
                tracing::warn!("Could not load social links: {}", e);
                PublicSocials::default()
            }
        };

        Ok(HomePage {
            hero_images,
            first_category: categories.first().map(|c| c.id),
            socials,
        })
    }
}
