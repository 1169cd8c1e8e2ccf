//! Embed URLs for hosted video links.
//!
//! Share and watch links for YouTube and Vimeo are rewritten to the
//! providers' iframe player URLs, optionally with the query parameters that
//! make the player autoplay muted on a loop. Everything else passes through,
//! including links whose id cannot be extracted.

use std::sync::LazyLock;

use regex::Regex;

const YOUTUBE_EMBED_PREFIX: &str = "https://www.youtube.com/embed/";
const VIMEO_EMBED_PREFIX: &str = "https://player.vimeo.com/video/";

static YOUTUBE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)youtu\.be/|youtube\.com/watch\?v=").expect("youtube link regex should compile")
});
static YOUTU_BE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)youtu\.be/([^?]+)").expect("youtu.be id regex should compile"));
static V_PARAM_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)v=([^&]+)").expect("v= id regex should compile"));
static VIMEO_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)vimeo\.com/(\d+)").expect("vimeo id regex should compile"));
static YOUTUBE_EMBED_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)youtube\.com/embed/([^?]+)").expect("youtube embed regex should compile")
});
static VIMEO_EMBED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)player\.vimeo\.com/video/").expect("vimeo embed regex should compile")
});

/// Video host recognized in a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    YouTube,
    Vimeo,
}

fn is_embed_url(url: &str) -> bool {
    starts_with_ignore_case(url, YOUTUBE_EMBED_PREFIX) || starts_with_ignore_case(url, VIMEO_EMBED_PREFIX)
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .map(|head| head.eq_ignore_ascii_case(prefix))
        .unwrap_or(false)
}

/// Which provider a watch or share link belongs to, if any.
///
/// Only links that [`to_embed_url`] would rewrite count; player URLs are
/// reported by [`embed_provider`].
pub fn link_provider(url: &str) -> Option<Provider> {
    if is_embed_url(url) {
        None
    } else if YOUTUBE_LINK.is_match(url) {
        Some(Provider::YouTube)
    } else if VIMEO_ID.is_match(url) {
        Some(Provider::Vimeo)
    } else {
        None
    }
}

/// Which provider's iframe player a URL points at, if any.
pub fn embed_provider(url: &str) -> Option<Provider> {
    if YOUTUBE_EMBED_ID.is_match(url) {
        Some(Provider::YouTube)
    } else if VIMEO_EMBED.is_match(url) {
        Some(Provider::Vimeo)
    } else {
        None
    }
}

/// Whether a video URL must be shown in an iframe rather than a native
/// video element: a provider watch/share link or a provider player URL.
pub fn is_provider_link(url: &str) -> bool {
    link_provider(url).is_some() || embed_provider(url).is_some()
}

/// Extract a YouTube video id. The `youtu.be/<id>` form is tried first, then
/// the `v=<id>` query parameter.
pub fn youtube_id(url: &str) -> Option<&str> {
    YOUTU_BE_ID
        .captures(url)
        .or_else(|| V_PARAM_ID.captures(url))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Rewrite a YouTube or Vimeo link to the provider's embed URL.
///
/// Player URLs and unrecognized URLs are returned unchanged, which makes the
/// function idempotent. A recognized link without an extractable id is also
/// returned unchanged.
///
/// ```
/// use folio_media::to_embed_url;
///
/// assert_eq!(to_embed_url("https://youtu.be/abc123"), "https://www.youtube.com/embed/abc123");
/// assert_eq!(to_embed_url("https://vimeo.com/123456"), "https://player.vimeo.com/video/123456");
/// assert_eq!(to_embed_url("/media/clip.mp4"), "/media/clip.mp4");
/// ```
pub fn to_embed_url(raw: &str) -> String {
    match link_provider(raw) {
        Some(Provider::YouTube) => match youtube_id(raw) {
            Some(id) => format!("{YOUTUBE_EMBED_PREFIX}{id}"),
            None => raw.to_string(),
        },
        Some(Provider::Vimeo) => match VIMEO_ID.captures(raw).and_then(|c| c.get(1)) {
            Some(id) => format!("{VIMEO_EMBED_PREFIX}{}", id.as_str()),
            None => raw.to_string(),
        },
        None => raw.to_string(),
    }
}

/// Embed URL with the parameters for muted, looping autoplay.
///
/// YouTube needs `playlist=<id>` to loop a single video; Vimeo uses its
/// background mode. URLs that are not provider players after
/// [`to_embed_url`] come back without parameters; those are direct video
/// files and the native player handles muting and looping.
pub fn to_autoplay_embed_url(raw: &str) -> String {
    let base = to_embed_url(raw);
    let params: Vec<(&str, String)> = match embed_provider(&base) {
        Some(Provider::YouTube) => {
            let id = YOUTUBE_EMBED_ID
                .captures(&base)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str())
                .or_else(|| youtube_id(raw))
                .unwrap_or_default()
                .to_string();
            vec![
                ("autoplay", "1".into()),
                ("mute", "1".into()),
                ("playsinline", "1".into()),
                ("loop", "1".into()),
                ("playlist", id),
                ("rel", "0".into()),
                ("modestbranding", "1".into()),
                ("controls", "0".into()),
            ]
        }
        Some(Provider::Vimeo) => vec![
            ("autoplay", "1".into()),
            ("muted", "1".into()),
            ("loop", "1".into()),
            ("background", "1".into()),
            ("autopause", "0".into()),
        ],
        None => return base,
    };

    let query = params
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoded(v)))
        .collect::<Vec<_>>()
        .join("&");
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}{query}")
}

fn urlencoded(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                out.push(b as char);
            }
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push(char::from(HEX[(b >> 4) as usize]));
                out.push(char::from(HEX[(b & 0x0f) as usize]));
            }
        }
    }
    out
}

const HEX: [u8; 16] = *b"0123456789ABCDEF";
