use clap::{Args, Parser, Subcommand};
use folio_common::{CategoryId, Direction, MediaId, MediaKind, SocialPlatform};
use folio_media::Section;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Portfolio gallery and admin client")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend origin, overriding config and environment
    #[arg(long, global = true)]
    pub origin: Option<String>,

    /// Admin bearer token, overriding the config file
    #[arg(long, global = true, env = "FOLIO_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in as admin and print or save the token
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Write the token to the config file instead of printing it;
        /// an explicit --origin is saved alongside
        #[arg(long)]
        save: bool,
    },

    /// Show the landing page: hero images, entry category and social links
    Home {
        /// Number of hero images
        #[arg(long, default_value_t = folio::api::HOME_HERO_LIMIT)]
        limit: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List and manage categories
    #[command(subcommand)]
    Categories(CategoryCommands),

    /// Show the ordered gallery of a category
    Gallery {
        id: CategoryId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Upload and edit category media
    #[command(subcommand)]
    Media(MediaCommands),

    /// Show and edit the contact page
    #[command(subcommand)]
    Contact(ContactCommands),

    /// Show and edit social profile links
    #[command(subcommand)]
    Socials(SocialCommands),

    /// Manage the downloadable CV
    #[command(subcommand)]
    Cv(CvCommands),

    /// Resolve a media url to its absolute or embeddable form (offline)
    Embed {
        url: String,

        /// Produce the muted, looping autoplay variant
        #[arg(long)]
        autoplay: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Print `id  name` for each category
    List {
        /// Only categories visible to visitors
        #[arg(long)]
        public: bool,
    },

    Create {
        name: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    Delete { id: CategoryId },

    /// Move a category one step up or down
    Move { id: CategoryId, direction: Direction },
}

#[derive(Subcommand)]
pub enum MediaCommands {
    /// Upload an image or video to a category
    Upload {
        category: CategoryId,

        file: PathBuf,

        #[arg(long)]
        kind: MediaKind,

        /// Create a new carousel slide
        #[arg(long, conflicts_with = "slide_key")]
        slide: bool,

        /// Attach to the slide with this key (required without --slide)
        #[arg(long, required_unless_present = "slide")]
        slide_key: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    Delete { id: MediaId },

    /// Set the description of a media item
    Describe { id: MediaId, text: String },

    /// Attach an item to a slide, or detach it when no key is given
    Assign {
        id: MediaId,

        #[arg(long)]
        slide_key: Option<String>,
    },

    /// Move an item one position up or down
    Bump {
        category: CategoryId,
        id: MediaId,
        direction: Direction,
    },
}

#[derive(Subcommand)]
pub enum ContactCommands {
    Show {
        /// Show the page as visitors see it
        #[arg(long)]
        public: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Save title, intro and body
    Texts {
        #[arg(long, default_value = "")]
        title: String,

        #[arg(long, default_value = "")]
        intro: String,

        #[arg(long, default_value = "")]
        body: String,
    },

    /// Save the footer note
    Footer { note: String },

    /// Append a text block
    AddText {
        #[arg(default_value = "")]
        content: String,
    },

    /// Upload an image and append it as a block
    AddImage { file: PathBuf },

    /// Append a video block from a local file or a provider url
    AddVideo { source: String },

    /// Move a block within its section
    Move {
        section: Section,
        index: usize,
        direction: Direction,
    },

    /// Remove a block from its section
    Remove { section: Section, index: usize },

    /// Send a message through the contact form
    Send(SendArgs),
}

#[derive(Args)]
pub struct SendArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub content: String,

    #[arg(long, default_value = "", hide = true)]
    pub website: String,
}

#[derive(Subcommand)]
pub enum SocialCommands {
    Show,

    /// Set a profile link; an empty url removes it
    Set { platform: SocialPlatform, url: String },
}

#[derive(Subcommand)]
pub enum CvCommands {
    /// Report whether a CV is available
    Status,

    Upload { file: PathBuf },

    Delete,

    /// Download the CV to a file
    Download { out: PathBuf },
}
