mod cli;

use folio::api::{ApiClient, ContactMessage, FileUpload, MediaMetaPatch, MediaUpload, Placement};
use folio::config::{self, persist, Config};
use folio_common::{CategoryId, MediaId, SocialPlatform};
use folio_media::blocks::{self, ContactBlock, Section};
use folio_media::{is_absolute_http, resolve, to_autoplay_embed_url, to_embed_url, Gallery, GalleryEntry, GalleryStats};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{CategoryCommands, Cli, Commands, ContactCommands, CvCommands, MediaCommands, SocialCommands};
use serde::Serialize;
use std::future::Future;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "folio=debug,folio_media=debug".to_string()
        } else {
            "folio=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = || load_settings(cli.config.as_deref(), cli.origin.as_deref(), cli.token.as_deref());

    match cli.command {
        Commands::Login {
            email,
            password,
            save,
        } => {
            let config = settings()?;
            let save_path = save.then(|| cli.config.clone().unwrap_or_else(config::default_save_path));
            block_on(login(&config, &email, &password, save_path, cli.origin.is_some()))
        }
        Commands::Home { limit, json } => {
            let config = settings()?;
            block_on(home(&client(&config), limit, json))
        }
        Commands::Categories(cmd) => {
            let config = settings()?;
            block_on(categories(&client(&config), cmd))
        }
        Commands::Gallery { id, json } => {
            let config = settings()?;
            block_on(gallery(&client(&config), id, json))
        }
        Commands::Media(cmd) => {
            let config = settings()?;
            block_on(media(&client(&config), &config, cmd))
        }
        Commands::Contact(cmd) => {
            let config = settings()?;
            block_on(contact(&client(&config), &config, cmd))
        }
        Commands::Socials(cmd) => {
            let config = settings()?;
            block_on(socials(&client(&config), cmd))
        }
        Commands::Cv(cmd) => {
            let config = settings()?;
            block_on(cv(&client(&config), &config, cmd))
        }
        Commands::Embed { url, autoplay } => {
            let config = settings()?;
            embed(&url, &config.api.origin, autoplay);
            Ok(())
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or_else(|| cli.config.clone());
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("folio {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn block_on<F: Future<Output = Result<()>>>(future: F) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(future)
}

/// Config file plus command-line overrides.
fn load_settings(path: Option<&Path>, origin: Option<&str>, token: Option<&str>) -> Result<Config> {
    let mut config = config::load_config_or_default(path)?;

    if let Some(origin) = origin {
        config.api.origin = origin.trim().trim_end_matches('/').to_string();
        config::validate_config(&config)?;
    }
    if let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) {
        config.api.token = Some(token.to_string());
    }

    tracing::debug!("Using API origin {}", config.api.origin);
    Ok(config)
}

fn client(config: &Config) -> ApiClient {
    ApiClient::from_config(&config.api)
}

async fn login(
    config: &Config,
    email: &str,
    password: &str,
    save_path: Option<PathBuf>,
    save_origin: bool,
) -> Result<()> {
    let token = client(config)
        .login(email, password)
        .await
        .context("Login failed")?;

    match save_path {
        Some(path) => {
            persist::save_token(&path, Some(&token))?;
            if save_origin {
                persist::save_origin(&path, &config.api.origin)?;
            }
            println!("Token saved to {}", path.display());
        }
        None => println!("{}", token),
    }
    Ok(())
}

async fn home(client: &ApiClient, limit: usize, json: bool) -> Result<()> {
    let page = client.home_page(limit).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    if page.hero_images.is_empty() {
        println!("No hero images");
    }
    for url in &page.hero_images {
        println!("{}", url);
    }
    match page.first_category {
        Some(id) => println!("Enter: category {}", id),
        None => println!("Enter: -"),
    }
    for platform in SocialPlatform::ALL {
        println!("{}: {}", platform, page.socials.get(platform).unwrap_or("-"));
    }
    Ok(())
}

async fn categories(client: &ApiClient, cmd: CategoryCommands) -> Result<()> {
    match cmd {
        CategoryCommands::List { public } => {
            let list = if public {
                client.list_public_categories().await?
            } else {
                client.list_categories().await?
            };
            if list.is_empty() {
                println!("No categories");
            }
            for category in list {
                println!("{}  {}", category.id, category.name);
            }
        }
        CategoryCommands::Create { name, description } => {
            let created = client.create_category(&name, &description).await?;
            println!("{}", created.id);
        }
        CategoryCommands::Delete { id } => {
            client.delete_category(id).await?;
            println!("Deleted category {}", id);
        }
        CategoryCommands::Move { id, direction } => {
            if client.move_category(id, direction).await? {
                println!("Moved category {}", id);
            } else {
                println!("Category {} is already at the edge", id);
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct SlideView {
    #[serde(flatten)]
    slide: GalleryEntry,
    items: Vec<GalleryEntry>,
}

#[derive(Serialize)]
struct GalleryView<'a> {
    id: CategoryId,
    name: &'a str,
    slides: Vec<SlideView>,
    stats: GalleryStats,
}

async fn gallery(client: &ApiClient, id: CategoryId, json: bool) -> Result<()> {
    let detail = client.category_detail(id).await?;
    let gallery = Gallery::build(&detail, client.origin());

    let slides: Vec<SlideView> = gallery
        .slide_entries()
        .into_iter()
        .enumerate()
        .map(|(idx, slide)| SlideView {
            slide,
            items: gallery.subcontent_entries(idx),
        })
        .collect();

    if json {
        let view = GalleryView {
            id: detail.id,
            name: &detail.name,
            slides,
            stats: gallery.stats(),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("Category {}: {}", detail.id, detail.name);
    if gallery.is_empty() {
        println!("No media in this category");
        return Ok(());
    }

    for (idx, view) in slides.iter().enumerate() {
        let key = view.slide.item.group_key.as_deref().unwrap_or("-");
        println!(
            "[{}] #{} {} {} (key: {})",
            idx,
            view.slide.item.id,
            view.slide.source.label(),
            view.slide.source.src(),
            key
        );
        for entry in &view.items {
            println!("    - #{} {} {}", entry.item.id, entry.source.label(), entry.source.src());
        }
    }

    let stats = gallery.stats();
    println!(
        "\nSlides: {}  Items: {} ({} images, {} videos)",
        stats.slides, stats.items, stats.image_items, stats.video_items
    );
    Ok(())
}

async fn media(client: &ApiClient, config: &Config, cmd: MediaCommands) -> Result<()> {
    match cmd {
        MediaCommands::Upload {
            category,
            file,
            kind,
            slide,
            slide_key,
            description,
        } => {
            let upload_file = FileUpload::from_path(&file, config.upload.max_file_bytes())?;
            let placement = match (slide, slide_key) {
                (true, _) => Placement::Slide,
                (false, Some(slide_key)) => Placement::Item { slide_key },
                (false, None) => anyhow::bail!("Either --slide or --slide-key is required"),
            };
            let mut upload = MediaUpload::new(kind, upload_file, placement);
            if let Some(description) = description {
                upload = upload.described(description);
            }
            client.upload_media(category, upload).await?;
            println!("Uploaded {}", file.display());
        }
        MediaCommands::Delete { id } => {
            client.delete_media(id).await?;
            println!("Deleted media {}", id);
        }
        MediaCommands::Describe { id, text } => {
            client
                .update_media_meta(id, &MediaMetaPatch::description(text))
                .await?;
            println!("Updated media {}", id);
        }
        MediaCommands::Assign { id, slide_key } => {
            client.assign_media_to_slide(id, slide_key.as_deref()).await?;
            match slide_key {
                Some(key) => println!("Assigned media {} to slide {}", id, key),
                None => println!("Detached media {} from its slide", id),
            }
        }
        MediaCommands::Bump {
            category,
            id,
            direction,
        } => {
            let current = current_position(client, category, id).await?;
            let position = client.bump_media_position(id, current, direction).await?;
            println!("Media {} moved to position {}", id, position);
        }
    }
    Ok(())
}

async fn current_position(client: &ApiClient, category: CategoryId, id: MediaId) -> Result<i64> {
    let detail = client.category_detail(category).await?;
    detail
        .images
        .iter()
        .chain(&detail.videos)
        .find(|record| record.id == id)
        .map(|record| record.position.unwrap_or(0))
        .with_context(|| format!("Media {} not found in category {}", id, category))
}

async fn contact(client: &ApiClient, config: &Config, cmd: ContactCommands) -> Result<()> {
    match cmd {
        ContactCommands::Show { public, json } => {
            let page = if public {
                client.public_contact_page().await?
            } else {
                client.contact_page().await?
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
                return Ok(());
            }

            println!("Title: {}", page.title);
            println!("Intro: {}", page.intro);
            println!("Body: {}", page.body);
            for which in [Section::Images, Section::Others] {
                println!("\n{:?}:", which);
                for (idx, block) in blocks::section(&page.blocks, which).iter().enumerate() {
                    println!("  [{}] {}", idx, describe_block(block));
                }
            }
            if let Some(note) = page.footer_note.as_deref().filter(|n| !n.is_empty()) {
                println!("\nFooter: {}", note);
            }
            if public {
                let thumbnails = client.contact_thumbnails().await?;
                println!("\nThumbnails: {}", thumbnails.len());
                for url in thumbnails {
                    println!("  {}", url);
                }
            }
        }
        ContactCommands::Texts { title, intro, body } => {
            client.save_contact_texts(&title, &intro, &body).await?;
            println!("Saved contact texts");
        }
        ContactCommands::Footer { note } => {
            client.save_contact_footer(&note).await?;
            println!("Saved footer");
        }
        ContactCommands::AddText { content } => {
            let page = client.contact_page().await?;
            save_blocks(client, &page.blocks, blocks::append_text(&page.blocks, &content)).await?;
        }
        ContactCommands::AddImage { file } => {
            let upload = FileUpload::from_path(&file, config.upload.max_file_bytes())?;
            let url = client.upload_contact_image(upload).await?;
            let page = client.contact_page().await?;
            save_blocks(client, &page.blocks, blocks::append_image(&page.blocks, &url)).await?;
        }
        ContactCommands::AddVideo { source } => {
            let url = if is_absolute_http(&source) {
                source
            } else {
                let upload = FileUpload::from_path(Path::new(&source), config.upload.max_file_bytes())?;
                client.upload_contact_video(upload).await?
            };
            let page = client.contact_page().await?;
            save_blocks(client, &page.blocks, blocks::append_video(&page.blocks, &url)).await?;
        }
        ContactCommands::Move {
            section,
            index,
            direction,
        } => {
            let page = client.contact_page().await?;
            let moved = blocks::move_within(&page.blocks, section, index, direction);
            save_blocks(client, &page.blocks, moved).await?;
        }
        ContactCommands::Remove { section, index } => {
            let page = client.contact_page().await?;
            let remaining = blocks::remove_from(&page.blocks, section, index);
            save_blocks(client, &page.blocks, remaining).await?;
        }
        ContactCommands::Send(args) => {
            let message = ContactMessage {
                name: args.name,
                last_name: args.last_name,
                email: args.email,
                content: args.content,
                website: args.website,
            };
            // A tripped honeypot looks like success to the sender.
            client.send_message(&message).await?;
            println!("Message sent");
        }
    }
    Ok(())
}

async fn save_blocks(client: &ApiClient, before: &[ContactBlock], after: Vec<ContactBlock>) -> Result<()> {
    if before == after.as_slice() {
        println!("Nothing to change");
        return Ok(());
    }
    client.save_contact_blocks(&after).await?;
    println!("Saved {} blocks", after.len());
    Ok(())
}

fn describe_block(block: &ContactBlock) -> String {
    match block {
        ContactBlock::Text { content, .. } => format!("text: {}", content),
        ContactBlock::Image { url, caption, .. } | ContactBlock::Video { url, caption, .. } => {
            match caption.as_deref().filter(|c| !c.is_empty()) {
                Some(caption) => format!("{}: {} ({})", block.kind_label(), url, caption),
                None => format!("{}: {}", block.kind_label(), url),
            }
        }
    }
}

async fn socials(client: &ApiClient, cmd: SocialCommands) -> Result<()> {
    match cmd {
        SocialCommands::Show => {
            let socials = client.public_socials().await?;
            for platform in SocialPlatform::ALL {
                println!("{}: {}", platform, socials.get(platform).unwrap_or("-"));
            }
        }
        SocialCommands::Set { platform, url } => match client.save_social(platform, &url).await? {
            Some(url) => println!("Saved {}: {}", platform, url),
            None => println!("Removed {}", platform),
        },
    }
    Ok(())
}

async fn cv(client: &ApiClient, config: &Config, cmd: CvCommands) -> Result<()> {
    match cmd {
        CvCommands::Status => {
            if client.cv_available().await {
                println!("CV available");
            } else {
                println!("No CV uploaded");
            }
        }
        CvCommands::Upload { file } => {
            let upload = FileUpload::from_path(&file, config.upload.max_file_bytes())?;
            client.upload_cv(upload).await?;
            println!("Uploaded CV {}", file.display());
        }
        CvCommands::Delete => {
            client.delete_cv().await?;
            println!("Deleted CV");
        }
        CvCommands::Download { out } => {
            let bytes = client.download_cv().await?;
            std::fs::write(&out, &bytes)
                .with_context(|| format!("Failed to write CV to {:?}", out))?;
            println!("Saved CV to {} ({} bytes)", out.display(), bytes.len());
        }
    }
    Ok(())
}

fn embed(url: &str, origin: &str, autoplay: bool) {
    let resolved = resolve(url.trim(), origin);
    if autoplay {
        println!("{}", to_autoplay_embed_url(&resolved));
    } else {
        println!("{}", to_embed_url(&resolved));
    }
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file specified, using defaults");
            config::load_config_or_default(None)?
        }
    };

    println!("  API origin: {}", config.api.origin);
    println!(
        "  Token: {}",
        if config.api.token.as_deref().is_some_and(|t| !t.trim().is_empty()) {
            "set"
        } else {
            "not set"
        }
    );
    println!("  Timeout: {}s", config.api.timeout_secs);
    println!("  Upload limit: {} MB", config.upload.max_file_mb);
    Ok(())
}
