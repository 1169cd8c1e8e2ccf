//! Request and response bodies of the portfolio API.
//!
//! Media records and category details come from `folio_media` so the
//! ordering engine consumes them directly.

use folio_common::{CategoryId, Error, Result, SocialPlatform};
use folio_media::ContactBlock;
use serde::{Deserialize, Serialize};

pub use folio_media::{CategoryDetail, MediaRecord};

/// Category summary from the list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct NewCategory<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

/// Reply to a category creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedCategory {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ReorderRequest<'a> {
    pub ordered_ids: &'a [CategoryId],
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// The backend has answered with either field name over time.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl LoginResponse {
    pub fn into_token(self) -> Option<String> {
        self.token
            .filter(|t| !t.is_empty())
            .or(self.access_token.filter(|t| !t.is_empty()))
    }
}

/// Partial update of a media record. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaMetaPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// An empty string detaches the item from its slide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

impl MediaMetaPatch {
    pub fn description(text: impl Into<String>) -> Self {
        Self {
            description: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn slide_key(key: Option<&str>) -> Self {
        Self {
            slide_key: Some(key.unwrap_or_default().to_string()),
            ..Self::default()
        }
    }

    pub fn position(position: i64) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.slide_key.is_none() && self.position.is_none()
    }
}

/// Contents of the contact page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub hero_image_url: Option<String>,
    #[serde(default)]
    pub blocks: Vec<ContactBlock>,
    #[serde(default)]
    pub footer_note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ContactTexts<'a> {
    pub title: &'a str,
    pub intro: &'a str,
    pub body: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ContactFooter<'a> {
    pub footer_note: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ContactBlocks<'a> {
    pub blocks: &'a [ContactBlock],
}

/// Reply to an upload: where the backend stored the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadedFile {
    pub url: String,
}

/// A message sent through the public contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub content: String,
    /// Honeypot field; humans leave it empty. Never sent.
    #[serde(skip)]
    pub website: String,
}

/// Outcome of checking a contact message before sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageCheck {
    /// Trimmed message ready to send.
    Ready(ContactMessage),
    /// The honeypot was filled in; drop the message quietly.
    Spam,
}

impl ContactMessage {
    /// Trim every field and require all of them, unless the honeypot is
    /// filled, in which case the message is classified as spam.
    pub fn check(&self) -> Result<MessageCheck> {
        if !self.website.trim().is_empty() {
            return Ok(MessageCheck::Spam);
        }

        let trimmed = ContactMessage {
            name: self.name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            content: self.content.trim().to_string(),
            website: String::new(),
        };

        for (field, value) in [
            ("name", &trimmed.name),
            ("last name", &trimmed.last_name),
            ("email", &trimmed.email),
            ("content", &trimmed.content),
        ] {
            if value.is_empty() {
                return Err(Error::invalid_input(format!("{field} is required")));
            }
        }

        Ok(MessageCheck::Ready(trimmed))
    }
}

/// A stored social profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

/// Public social links; missing platforms are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicSocials {
    #[serde(default)]
    pub linkedin: Option<SocialLink>,
    #[serde(default)]
    pub artstation: Option<SocialLink>,
}

impl PublicSocials {
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        let link = match platform {
            SocialPlatform::Linkedin => self.linkedin.as_ref(),
            SocialPlatform::Artstation => self.artstation.as_ref(),
        };
        link.map(|l| l.url.as_str()).filter(|u| !u.is_empty())
    }
}
