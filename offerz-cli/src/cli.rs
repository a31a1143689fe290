//! Command-line interface definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// ClickOfferz - coupons, deals and the admin back office from the terminal
#[derive(Parser)]
#[command(name = "offerz")]
#[command(version)]
#[command(about = "Browse ClickOfferz coupons and manage the catalog", long_about = None)]
pub struct Cli {
    /// Backend base URL (overrides OFFERZ_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Directory holding the saved session (overrides OFFERZ_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Request timeout in seconds (overrides OFFERZ_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Also write logs to daily files in this directory
    #[arg(long, global = true, env = "OFFERZ_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Clear the screen before each page
    #[arg(long, global = true)]
    pub clear: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Home page: highlights, trending and latest offers
    Home,

    /// Coupon listing
    Coupons {
        #[command(flatten)]
        listing: ListingArgs,

        /// Category name ("All" for every category)
        #[arg(long)]
        category: Option<String>,
    },

    /// Deals (offers without a code)
    Deals {
        #[command(flatten)]
        listing: ListingArgs,

        /// Category name ("All" for every category)
        #[arg(long)]
        category: Option<String>,
    },

    /// Trending offers
    Trending {
        #[command(flatten)]
        listing: ListingArgs,

        /// Category name ("All" for every category)
        #[arg(long)]
        category: Option<String>,
    },

    /// Store directory
    Stores {
        /// Initial letter, or "All"
        #[arg(long, default_value = "All")]
        letter: String,

        /// Filter by name
        #[arg(long)]
        search: Option<String>,
    },

    /// One store and its offers
    Store {
        /// Store slug, e.g. "best-buy"
        slug: String,

        /// All, Codes or Sales
        #[arg(long, default_value = "All")]
        tab: String,
    },

    /// Category list
    Categories,

    /// Blog index
    Blog,

    /// One blog post
    Post {
        slug: String,
    },

    /// Informational page (about-us, privacy-policy, ...)
    Page {
        slug: String,
    },

    /// Search suggestions for a query
    Search {
        query: String,

        /// Go to where submitting the search leads
        #[arg(long)]
        submit: bool,
    },

    /// Send a message through the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },

    /// Open a site path, e.g. "/stores?search=nike" or "/admin/coupons"
    Open {
        path: String,
    },

    /// Sign in to the admin panel
    Login {
        #[arg(long, env = "OFFERZ_ADMIN_EMAIL")]
        email: String,

        #[arg(long, env = "OFFERZ_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Sign out and forget the saved session
    Logout,

    /// Show the signed-in admin
    Whoami,

    /// Admin panel
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}

/// Paging and search shared by the listing pages
#[derive(Args, Debug, Clone)]
pub struct ListingArgs {
    /// Search text
    #[arg(long)]
    pub search: Option<String>,

    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

/// Admin panel commands
#[derive(Subcommand)]
pub enum AdminCommands {
    /// Counters
    Dashboard,

    /// List stores
    Stores,

    /// Create a store
    CreateStore(StoreArgs),

    /// Update a store; fields not given keep their current value
    UpdateStore {
        id: String,
        #[command(flatten)]
        store: StoreUpdateArgs,
    },

    /// Delete a store
    DeleteStore { id: String },

    /// List coupons
    Coupons,

    /// Create a coupon
    CreateCoupon(CouponArgs),

    /// Update a coupon; fields not given keep their current value
    UpdateCoupon {
        id: String,
        #[command(flatten)]
        coupon: CouponUpdateArgs,
    },

    /// Delete a coupon
    DeleteCoupon { id: String },

    /// List categories
    Categories,

    /// Create a category
    CreateCategory {
        #[arg(long)]
        name: String,
        #[arg(long)]
        icon: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },

    /// Update a category; fields not given keep their current value
    UpdateCategory {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        icon: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a category
    DeleteCategory { id: String },

    /// List blog posts, drafts included
    Blogs,

    /// Create a blog post
    CreateBlog {
        #[arg(long)]
        title: String,
        #[arg(long)]
        excerpt: String,
        /// HTML body
        #[arg(long)]
        content: String,
        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
        #[arg(long)]
        image: Option<String>,
        /// Save as a draft
        #[arg(long)]
        draft: bool,
    },

    /// Update a blog post; fields not given keep their current value
    UpdateBlog {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        excerpt: Option<String>,
        /// HTML body
        #[arg(long)]
        content: Option<String>,
        /// Comma-separated tags, replacing the current ones
        #[arg(long)]
        tags: Option<String>,
        #[arg(long)]
        image: Option<String>,
        /// true to publish, false to turn into a draft
        #[arg(long)]
        published: Option<bool>,
    },

    /// Delete a blog post
    DeleteBlog { id: String },

    /// List informational pages
    Pages,

    /// Replace the content of an informational page
    EditPage {
        slug: String,
        #[arg(long)]
        content: String,
    },

    /// Contact form inbox
    Messages,

    /// Mark a message as read
    ReadMessage { id: String },

    /// Delete a message
    DeleteMessage { id: String },

    /// Show social links
    Settings,

    /// Set (or with an empty URL, clear) a social link
    SetSocial { platform: String, url: String },

    /// Update name and email
    Profile {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        current_password: String,
    },

    /// Change the admin password
    Password {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    #[arg(long)]
    pub name: String,
    /// Emoji, short text or image URL
    #[arg(long)]
    pub logo: String,
    /// emoji, text, url or upload
    #[arg(long, default_value = "emoji")]
    pub logo_type: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub website: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Number of live offers shown on the store card
    #[arg(long, default_value_t = 0)]
    pub offers: u32,
}

#[derive(Args, Debug, Clone, Default)]
pub struct StoreUpdateArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub logo: Option<String>,
    /// emoji, text, url or upload
    #[arg(long)]
    pub logo_type: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub offers: Option<u32>,
    #[arg(long)]
    pub active: Option<bool>,
}

#[derive(Args, Debug, Clone)]
pub struct CouponArgs {
    /// Store name as listed in the directory
    #[arg(long)]
    pub store: String,
    #[arg(long)]
    pub title: String,
    /// Code or Deal
    #[arg(long, default_value = "Code")]
    pub kind: String,
    #[arg(long, default_value = "")]
    pub code: String,
    #[arg(long, default_value = "")]
    pub discount: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub category: String,
    /// YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub expiry: String,
    #[arg(long, default_value = "")]
    pub link: String,
    #[arg(long)]
    pub trending: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CouponUpdateArgs {
    /// Move the coupon to another store, by name
    #[arg(long)]
    pub store: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    /// Code or Deal
    #[arg(long)]
    pub kind: Option<String>,
    #[arg(long)]
    pub code: Option<String>,
    #[arg(long)]
    pub discount: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub expiry: Option<String>,
    #[arg(long)]
    pub link: Option<String>,
    #[arg(long)]
    pub trending: Option<bool>,
    #[arg(long)]
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_listing_defaults() {
        let cli = Cli::parse_from(["offerz", "deals", "--search", "shoes"]);
        match cli.command {
            Commands::Deals { listing, .. } => {
                assert_eq!(listing.search.as_deref(), Some("shoes"));
                assert_eq!(listing.page, 1);
            }
            _ => panic!("expected deals"),
        }
    }

    #[test]
    fn test_update_flags_are_optional() {
        let cli = Cli::parse_from(["offerz", "admin", "update-store", "s1", "--offers", "12"]);
        match cli.command {
            Commands::Admin {
                action: AdminCommands::UpdateStore { id, store },
            } => {
                assert_eq!(id, "s1");
                assert_eq!(store.offers, Some(12));
                assert_eq!(store.name, None);
                assert_eq!(store.active, None);
            }
            _ => panic!("expected admin update-store"),
        }

        let cli = Cli::parse_from(["offerz", "trending", "--category", "Fashion"]);
        assert!(matches!(
            cli.command,
            Commands::Trending { category: Some(ref c), .. } if c == "Fashion"
        ));
    }

    #[test]
    fn test_admin_subcommand() {
        let cli = Cli::parse_from([
            "offerz", "admin", "create-coupon", "--store", "Nike", "--title", "20% off",
            "--kind", "Deal",
        ]);
        match cli.command {
            Commands::Admin {
                action: AdminCommands::CreateCoupon(args),
            } => {
                assert_eq!(args.store, "Nike");
                assert_eq!(args.kind, "Deal");
                assert!(!args.trending);
            }
            _ => panic!("expected admin create-coupon"),
        }
    }
}
