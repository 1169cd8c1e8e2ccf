//! Integration tests for the portfolio API client against a mock backend.

use assert_matches::assert_matches;
use folio::api::{
    ApiClient, ContactMessage, FileUpload, MediaMetaPatch, MediaUpload, Placement, HOME_HERO_LIMIT,
    REQUEST_TIMEOUT,
};
use folio_common::{CategoryId, Direction, Error, MediaId, MediaKind, SocialPlatform};
use folio_media::{ContactBlock, Gallery, MediaSource};
use serde_json::json;
use wiremock::matchers::{any, body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn anonymous(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri(), REQUEST_TIMEOUT)
}

fn admin(server: &MockServer) -> ApiClient {
    anonymous(server).with_token("secret")
}

/// Fails the test on drop if any request reaches the server.
async fn expect_no_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_returns_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "me@example.com", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "tok-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let token = anonymous(&server).login(" me@example.com ", "pw").await.unwrap();
    assert_eq!(token, "tok-1");
}

#[tokio::test]
async fn login_accepts_access_token_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "tok-2"})))
        .mount(&server)
        .await;

    assert_eq!(anonymous(&server).login("a@b.c", "pw").await.unwrap(), "tok-2");
}

#[tokio::test]
async fn login_without_token_in_reply_is_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let err = anonymous(&server).login("a@b.c", "pw").await.unwrap_err();
    assert_matches!(err, Error::Unauthorized);
}

#[tokio::test]
async fn login_rejected_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&server)
        .await;

    let err = anonymous(&server).login("a@b.c", "wrong").await.unwrap_err();
    assert!(err.is_auth());
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_public_categories_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "3D"},
            {"id": 2, "name": "Motion", "description": "reels"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let list = anonymous(&server).list_public_categories().await.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].id, CategoryId::new(2));
    assert_eq!(list[1].description.as_deref(), Some("reels"));
}

#[tokio::test]
async fn admin_requests_carry_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    assert!(admin(&server).list_categories().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_category_sends_trimmed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/categories"))
        .and(body_json(json!({"name": "Stills", "description": ""})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 9, "name": "Stills"})))
        .expect(1)
        .mount(&server)
        .await;

    let created = admin(&server).create_category("  Stills ", " ").await.unwrap();
    assert_eq!(created.id, CategoryId::new(9));
}

#[tokio::test]
async fn create_category_rejects_blank_name_offline() {
    let server = MockServer::start().await;
    expect_no_requests(&server).await;

    let err = admin(&server).create_category("   ", "x").await.unwrap_err();
    assert_matches!(err, Error::InvalidInput(_));
}

#[tokio::test]
async fn admin_write_without_token_sends_nothing() {
    let server = MockServer::start().await;
    expect_no_requests(&server).await;

    let err = anonymous(&server)
        .delete_category(CategoryId::new(1))
        .await
        .unwrap_err();
    assert_matches!(err, Error::Unauthorized);
}

#[tokio::test]
async fn move_category_swaps_with_neighbour() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 4, "name": "a"},
            {"id": 7, "name": "b"},
            {"id": 2, "name": "c"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/categories/reorder"))
        .and(body_json(json!({"ordered_ids": [4, 2, 7]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let moved = admin(&server)
        .move_category(CategoryId::new(2), Direction::Up)
        .await
        .unwrap();
    assert!(moved);
}

#[tokio::test]
async fn move_category_at_edge_skips_reorder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 4, "name": "a"},
            {"id": 7, "name": "b"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let moved = admin(&server)
        .move_category(CategoryId::new(4), Direction::Up)
        .await
        .unwrap();
    assert!(!moved);
}

#[tokio::test]
async fn move_unknown_category_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "a"}])))
        .mount(&server)
        .await;

    let err = admin(&server)
        .move_category(CategoryId::new(5), Direction::Down)
        .await
        .unwrap_err();
    assert_matches!(err, Error::NotFound(_));
}

#[tokio::test]
async fn category_detail_feeds_gallery() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories/3/detail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "name": "Motion",
            "images": [
                {"id": 10, "image_url": "/uploads/cover.png", "position": 0, "is_carousel": true, "slide_key": "s1"},
                {"id": 11, "image_url": "/uploads/still.png", "position": 2, "slide_key": "s1"}
            ],
            "videos": [
                {"id": 12, "video_url": "https://youtu.be/abc123", "position": 1, "slide_key": "s1"}
            ]
        })))
        .mount(&server)
        .await;

    let client = anonymous(&server);
    let detail = client.category_detail(CategoryId::new(3)).await.unwrap();
    let gallery = Gallery::build(&detail, client.origin());

    assert_eq!(gallery.slides().len(), 1);
    let items = gallery.subcontent_entries(0);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].item.id, MediaId::new(12));
    assert_matches!(&items[0].source, MediaSource::Embed { src } if src.starts_with("https://www.youtube.com/embed/abc123?"));
    assert_eq!(
        items[1].source,
        MediaSource::Image {
            src: format!("{}/uploads/still.png", server.uri())
        }
    );
}

#[tokio::test]
async fn missing_category_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories/99/detail"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such category"))
        .mount(&server)
        .await;

    let err = anonymous(&server)
        .category_detail(CategoryId::new(99))
        .await
        .unwrap_err();
    assert_matches!(err, Error::NotFound(msg) if msg == "no such category");
}

#[tokio::test]
async fn server_error_keeps_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories/public"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = anonymous(&server).list_public_categories().await.unwrap_err();
    assert_matches!(err, Error::Http { status: 503, body } if body == "maintenance");
}

#[tokio::test]
async fn malformed_json_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories/public"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = anonymous(&server).list_public_categories().await.unwrap_err();
    assert_matches!(err, Error::Decode(_));
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let client = ApiClient::new("http://127.0.0.1:9", REQUEST_TIMEOUT);
    let err = client.list_public_categories().await.unwrap_err();
    assert_matches!(err, Error::Transport(_));
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_item_sends_multipart_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/categories/3/media"))
        .and(body_string_contains("name=\"type\""))
        .and(body_string_contains("name=\"is_carousel\"\r\n\r\nfalse"))
        .and(body_string_contains("name=\"slide_key\"\r\n\r\nintro"))
        .and(body_string_contains("name=\"description\"\r\n\r\nBehind the scenes"))
        .and(body_string_contains("filename=\"still.png\""))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let file = FileUpload::from_bytes("still.png", b"png-bytes".to_vec());
    let upload = MediaUpload::new(
        MediaKind::Image,
        file,
        Placement::Item {
            slide_key: "intro".into(),
        },
    )
    .described("  Behind the scenes ");

    admin(&server)
        .upload_media(CategoryId::new(3), upload)
        .await
        .unwrap();
}

#[tokio::test]
async fn upload_slide_omits_blank_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/categories/3/media"))
        .and(body_string_contains("name=\"is_carousel\"\r\n\r\ntrue"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let file = FileUpload::from_bytes("clip.mp4", b"mp4".to_vec());
    let upload = MediaUpload::new(MediaKind::Video, file, Placement::Slide).described("   ");
    admin(&server)
        .upload_media(CategoryId::new(3), upload)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(!body.contains("name=\"description\""));
    assert!(!body.contains("name=\"slide_key\""));
}

#[tokio::test]
async fn bump_patches_position() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/categories/media/12/meta"))
        .and(body_json(json!({"position": 4})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let position = admin(&server)
        .bump_media_position(MediaId::new(12), 3, Direction::Down)
        .await
        .unwrap();
    assert_eq!(position, 4);
}

#[tokio::test]
async fn bump_saturates_at_position_limits() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/categories/media/12/meta"))
        .and(body_json(json!({"position": i64::MAX})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/categories/media/13/meta"))
        .and(body_json(json!({"position": i64::MIN})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = admin(&server);
    let down = client
        .bump_media_position(MediaId::new(12), i64::MAX, Direction::Down)
        .await
        .unwrap();
    assert_eq!(down, i64::MAX);

    let up = client
        .bump_media_position(MediaId::new(13), i64::MIN, Direction::Up)
        .await
        .unwrap();
    assert_eq!(up, i64::MIN);
}

#[tokio::test]
async fn detaching_from_slide_sends_empty_key() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/categories/media/12/meta"))
        .and(body_json(json!({"slide_key": ""})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    admin(&server)
        .assign_media_to_slide(MediaId::new(12), None)
        .await
        .unwrap();
}

#[tokio::test]
async fn empty_meta_patch_sends_nothing() {
    let server = MockServer::start().await;
    expect_no_requests(&server).await;

    admin(&server)
        .update_media_meta(MediaId::new(1), &MediaMetaPatch::default())
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[tokio::test]
async fn public_contact_page_normalizes_block_positions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contact/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Hello",
            "blocks": [
                {"type": "text", "content": "hi"},
                {"type": "image", "url": "/uploads/a.png", "position": 7}
            ]
        })))
        .mount(&server)
        .await;

    let page = anonymous(&server).public_contact_page().await.unwrap();
    assert_eq!(page.blocks[0].position(), 0);
    assert_eq!(page.blocks[1].position(), 7);
}

#[tokio::test]
async fn save_blocks_sends_position_order() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/contact/blocks"))
        .and(body_json(json!({"blocks": [
            {"type": "text", "content": "first", "position": 0},
            {"type": "video", "url": "https://vimeo.com/1", "position": 1}
        ]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let blocks = vec![
        ContactBlock::video("https://vimeo.com/1", 1),
        ContactBlock::text("first", 0),
    ];
    admin(&server).save_contact_blocks(&blocks).await.unwrap();
}

#[tokio::test]
async fn contact_image_upload_returns_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact/upload-image"))
        .and(body_string_contains("filename=\"me.jpg\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"url": "/uploads/contact/me.jpg"})))
        .expect(1)
        .mount(&server)
        .await;

    let url = admin(&server)
        .upload_contact_image(FileUpload::from_bytes("me.jpg", b"jpeg".to_vec()))
        .await
        .unwrap();
    assert_eq!(url, "/uploads/contact/me.jpg");
}

#[tokio::test]
async fn thumbnails_prefer_contact_images() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contact/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "blocks": [
                {"type": "image", "url": "https://cdn.example.com/b.png", "position": 1},
                {"type": "image", "url": "/uploads/a.png", "position": 0}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let thumbs = anonymous(&server).contact_thumbnails().await.unwrap();
    assert_eq!(
        thumbs,
        vec![
            format!("{}/uploads/a.png", server.uri()),
            "https://cdn.example.com/b.png".to_string()
        ]
    );
}

#[tokio::test]
async fn thumbnails_fall_back_to_category_images() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contact/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"blocks": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "a"},
            {"id": 2, "name": "b"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories/1/detail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "name": "a",
            "images": [{"id": 5, "image_url": "/uploads/one.png"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories/2/detail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2, "name": "b",
            "images": [{"id": 6, "image_url": "/uploads/two.png"}, {"id": 7}]
        })))
        .mount(&server)
        .await;

    let thumbs = anonymous(&server).contact_thumbnails().await.unwrap();
    assert_eq!(
        thumbs,
        vec![
            format!("{}/uploads/one.png", server.uri()),
            format!("{}/uploads/two.png", server.uri())
        ]
    );
}

#[tokio::test]
async fn thumbnail_fallback_failure_yields_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contact/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories/public"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let thumbs = anonymous(&server).contact_thumbnails().await.unwrap();
    assert!(thumbs.is_empty());
}

#[tokio::test]
async fn send_message_posts_trimmed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/messages"))
        .and(body_json(json!({
            "name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "content": "Hello there"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let message = ContactMessage {
        name: " Ada".into(),
        last_name: "Lovelace ".into(),
        email: "ada@example.com".into(),
        content: "Hello there\n".into(),
        website: String::new(),
    };
    assert!(anonymous(&server).send_message(&message).await.unwrap());
}

#[tokio::test]
async fn honeypot_message_is_dropped() {
    let server = MockServer::start().await;
    expect_no_requests(&server).await;

    let message = ContactMessage {
        name: "Bot".into(),
        last_name: "Bot".into(),
        email: "bot@example.com".into(),
        content: "buy now".into(),
        website: "http://spam.example".into(),
    };
    assert!(!anonymous(&server).send_message(&message).await.unwrap());
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

async fn mount_category_images(server: &MockServer, id: i64, count: usize) {
    let images: Vec<_> = (0..count)
        .map(|n| json!({"id": id * 10 + n as i64, "image_url": format!("/uploads/{id}-{n}.png")}))
        .collect();
    Mock::given(method("GET"))
        .and(path(format!("/api/categories/{id}/detail")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": id, "name": format!("c{id}"), "images": images
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn hero_images_are_truncated_in_category_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "name": "c2"},
            {"id": 1, "name": "c1"},
            {"id": 3, "name": "c3"}
        ])))
        .mount(&server)
        .await;
    mount_category_images(&server, 2, 3).await;
    mount_category_images(&server, 1, 3).await;
    Mock::given(method("GET"))
        .and(path("/api/categories/3/detail"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let hero = anonymous(&server)
        .home_hero_images(HOME_HERO_LIMIT)
        .await
        .unwrap();
    let origin = server.uri();
    assert_eq!(
        hero,
        vec![
            format!("{origin}/uploads/2-0.png"),
            format!("{origin}/uploads/2-1.png"),
            format!("{origin}/uploads/2-2.png"),
            format!("{origin}/uploads/1-0.png"),
            format!("{origin}/uploads/1-1.png"),
        ]
    );
}

#[tokio::test]
async fn hero_images_empty_without_public_categories() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let hero = anonymous(&server)
        .home_hero_images(HOME_HERO_LIMIT)
        .await
        .unwrap();
    assert!(hero.is_empty());
}

#[tokio::test]
async fn hero_images_empty_when_categories_have_no_images() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 4, "name": "c4"}])))
        .mount(&server)
        .await;
    mount_category_images(&server, 4, 0).await;

    assert!(anonymous(&server).home_hero_images(5).await.unwrap().is_empty());
}

#[tokio::test]
async fn home_page_survives_missing_socials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 7, "name": "c7"}])))
        .mount(&server)
        .await;
    mount_category_images(&server, 7, 1).await;
    Mock::given(method("GET"))
        .and(path("/api/socials/public"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let page = anonymous(&server).home_page(HOME_HERO_LIMIT).await.unwrap();
    assert_eq!(page.hero_images, vec![format!("{}/uploads/7-0.png", server.uri())]);
    assert_eq!(page.first_category, Some(CategoryId::new(7)));
    assert!(page.socials.get(SocialPlatform::Linkedin).is_none());
}

#[tokio::test]
async fn home_page_fails_when_a_category_detail_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 8, "name": "c8"}])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories/8/detail"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = anonymous(&server).home_page(HOME_HERO_LIMIT).await.unwrap_err();
    assert_matches!(err, Error::NotFound(_));
}

// ---------------------------------------------------------------------------
// Socials and CV
// ---------------------------------------------------------------------------

#[tokio::test]
async fn save_social_normalizes_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/socials"))
        .and(body_json(json!({"platform": "artstation", "url": "https://artstation.com/me"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let stored = admin(&server)
        .save_social(SocialPlatform::Artstation, "  artstation.com/me ")
        .await
        .unwrap();
    assert_eq!(stored.as_deref(), Some("https://artstation.com/me"));
}

#[tokio::test]
async fn blank_social_url_deletes_link() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/socials/linkedin"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let stored = admin(&server)
        .save_social(SocialPlatform::Linkedin, "   ")
        .await
        .unwrap();
    assert!(stored.is_none());
}

#[tokio::test]
async fn cv_availability_follows_download_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cv/download"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    assert!(!anonymous(&server).cv_available().await);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cv/download"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.7".to_vec()))
        .mount(&server)
        .await;
    let client = anonymous(&server);
    assert!(client.cv_available().await);
    assert_eq!(client.download_cv().await.unwrap(), b"%PDF-1.7".to_vec());
}

#[tokio::test]
async fn cv_upload_requires_pdf() {
    let server = MockServer::start().await;
    expect_no_requests(&server).await;

    let err = admin(&server)
        .upload_cv(FileUpload::from_bytes("cv.docx", vec![1, 2, 3]))
        .await
        .unwrap_err();
    assert_matches!(err, Error::InvalidInput(_));
}

#[tokio::test]
async fn cv_upload_accepts_uppercase_extension() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/cv/"))
        .and(body_string_contains("filename=\"CV.PDF\""))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    admin(&server)
        .upload_cv(FileUpload::from_bytes("CV.PDF", b"%PDF".to_vec()))
        .await
        .unwrap();
}
