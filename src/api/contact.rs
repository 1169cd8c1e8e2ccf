use folio_common::Result;
use folio_media::blocks::{self, ContactBlock};
use folio_media::resolve;
use reqwest::Method;

use super::types::{
    ContactBlocks, ContactFooter, ContactMessage, ContactPage, ContactTexts, MessageCheck,
    UploadedFile,
};
use super::upload::FileUpload;
use super::ApiClient;

impl ApiClient {
    /// The contact page as the admin editor sees it.
    pub async fn contact_page(&self) -> Result<ContactPage> {
        self.require_token()?;
        self.fetch_contact_page("/contact").await
    }

    /// The contact page as visitors see it.
    pub async fn public_contact_page(&self) -> Result<ContactPage> {
        self.fetch_contact_page("/contact/public").await
    }

    async fn fetch_contact_page(&self, path: &str) -> Result<ContactPage> {
        let mut page: ContactPage = self.get_json(path).await?;
        page.blocks = blocks::normalize_positions(std::mem::take(&mut page.blocks));
        Ok(page)
    }

    pub async fn save_contact_texts(&self, title: &str, intro: &str, body: &str) -> Result<()> {
        self.require_token()?;
        self.send_unit(Method::POST, "/contact", Some(&ContactTexts { title, intro, body }))
            .await?;
        tracing::info!("Saved contact texts");
        Ok(())
    }

    pub async fn save_contact_footer(&self, footer_note: &str) -> Result<()> {
        self.require_token()?;
        self.send_unit(Method::POST, "/contact", Some(&ContactFooter { footer_note }))
            .await?;
        tracing::info!("Saved contact footer");
        Ok(())
    }

    /// Replace all contact blocks. They are sent in position order.
    pub async fn save_contact_blocks(&self, blocks: &[ContactBlock]) -> Result<()> {
        self.require_token()?;
        let ordered = blocks::sorted(blocks);
        self.send_unit(
            Method::PUT,
            "/contact/blocks",
            Some(&ContactBlocks { blocks: &ordered }),
        )
        .await?;
        tracing::info!("Saved {} contact blocks", ordered.len());
        Ok(())
    }

    /// Upload an image for the contact page and return its stored url.
    pub async fn upload_contact_image(&self, file: FileUpload) -> Result<String> {
        self.upload_contact_file("/contact/upload-image", file).await
    }

    /// Upload a video for the contact page and return its stored url.
    pub async fn upload_contact_video(&self, file: FileUpload) -> Result<String> {
        self.upload_contact_file("/contact/upload-video", file).await
    }

    async fn upload_contact_file(&self, path: &str, file: FileUpload) -> Result<String> {
        self.require_token()?;
        let name = file.file_name.clone();
        let uploaded: UploadedFile = self.send_multipart(path, file.into_form()?).await?;
        tracing::info!("Uploaded {} as {}", name, uploaded.url);
        Ok(uploaded.url)
    }

    /// Send a contact form message.
    ///
    /// Returns `false` when the message tripped the honeypot; nothing is
    /// sent in that case.
    pub async fn send_message(&self, message: &ContactMessage) -> Result<bool> {
        match message.check()? {
            MessageCheck::Spam => {
                tracing::debug!("Dropping contact message with filled honeypot");
                Ok(false)
            }
            MessageCheck::Ready(message) => {
                self.send_unit(Method::POST, "/messages", Some(&message))
                    .await?;
                tracing::info!("Sent contact message from {}", message.email);
                Ok(true)
            }
        }
    }

    /// Absolute urls for the contact page thumbnail strip.
    ///
    /// Uses the page's image blocks; when there are none, falls back to the
    /// images of every public category in category order. Failures while
    /// collecting the fallback give an empty list.
    pub async fn contact_thumbnails(&self) -> Result<Vec<String>> {
        let page = self.public_contact_page().await?;
        let from_blocks: Vec<String> = blocks::image_urls(&page.blocks)
            .iter()
            .map(|u| resolve(u, self.origin()))
            .collect();
        if !from_blocks.is_empty() {
            return Ok(from_blocks);
        }

        match self.all_category_image_urls().await {
            Ok(urls) => Ok(urls),
            Err(e) => {
                tracing::warn!("Could not collect category thumbnails: {}", e);
                Ok(Vec::new())
            }
        }
    }

    async fn all_category_image_urls(&self) -> Result<Vec<String>> {
        let categories = self.list_public_categories().await?;
        self.category_image_urls(&categories, None).await
    }
}
