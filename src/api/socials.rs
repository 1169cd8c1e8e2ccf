use folio_common::{Result, SocialPlatform};
use folio_media::normalize_profile_url;
use reqwest::Method;

use super::types::{PublicSocials, SocialLink};
use super::ApiClient;

impl ApiClient {
    pub async fn public_socials(&self) -> Result<PublicSocials> {
        self.get_json("/socials/public").await
    }

    /// Store the profile url for `platform`; a blank url removes it.
    ///
    /// Returns the url as stored, or `None` when the link was removed.
    pub async fn save_social(&self, platform: SocialPlatform, url: &str) -> Result<Option<String>> {
        self.require_token()?;

        let url = normalize_profile_url(url);
        if url.is_empty() {
            self.send_unit::<()>(Method::DELETE, &format!("/socials/{platform}"), None)
                .await?;
            tracing::info!("Removed {} link", platform);
            return Ok(None);
        }

        self.send_unit(
            Method::POST,
            "/socials",
            Some(&SocialLink {
                platform,
                url: url.clone(),
            }),
        )
        .await?;
        tracing::info!("Saved {} link {}", platform, url);
        Ok(Some(url))
    }
}
