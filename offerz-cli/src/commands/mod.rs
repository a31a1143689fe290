//! Command handlers
//!
//! Each subcommand renders one page of the site (or runs one admin action)
//! against the configured backend.

mod admin;
mod auth;
mod catalog;

use anyhow::{Context, bail};
use offerz_client::{Access, ClientConfig, NetworkHttpClient, OffersClient, Route, guard};

use crate::cli::{AdminCommands, Cli, Commands, ListingArgs};
use crate::render::Screen;

pub(crate) type Client = OffersClient<NetworkHttpClient>;

/// Environment first, then command-line overrides
fn build_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.api_url {
        config = ClientConfig {
            base_url: ClientConfig::new(url.as_str()).base_url,
            ..config
        };
    }
    if let Some(timeout) = cli.timeout {
        config = config.with_timeout(timeout);
    }
    if let Some(dir) = &cli.data_dir {
        config = config.with_data_dir(dir);
    }
    config
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = build_config(&cli);
    tracing::debug!(base_url = %config.base_url, data_dir = %config.data_dir.display(), "Client configured");

    let mut client = OffersClient::from_config(&config).context("Failed to create HTTP client")?;
    let mut screen = Screen::new(cli.clear);

    match cli.command {
        Commands::Home => catalog::home(&client).await,
        Commands::Coupons { listing, category } => {
            catalog::coupons(&client, &mut screen, listing, category).await
        }
        Commands::Deals { listing, category } => {
            catalog::deals(&client, &mut screen, listing, category).await
        }
        Commands::Trending { listing, category } => {
            catalog::trending(&client, &mut screen, listing, category).await
        }
        Commands::Stores { letter, search } => {
            catalog::stores(&client, &letter, search.as_deref()).await
        }
        Commands::Store { slug, tab } => catalog::store(&client, &slug, &tab).await,
        Commands::Categories => catalog::categories(&client).await,
        Commands::Blog => catalog::blog(&client).await,
        Commands::Post { slug } => catalog::post(&client, &slug).await,
        Commands::Page { slug } => catalog::page(&client, &slug).await,
        Commands::Search { query, submit } => catalog::search(&client, &query, submit).await,
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => catalog::contact(&client, name, email, subject, message).await,
        Commands::Open { path } => open(&mut client, &mut screen, &path).await,
        Commands::Login { email, password } => auth::login(&mut client, &email, &password).await,
        Commands::Logout => auth::logout(&mut client).await,
        Commands::Whoami => auth::whoami(&mut client).await,
        Commands::Admin { action } => admin::run(&mut client, action).await,
    }
}

/// Navigate to a site path the way the router would
async fn open(client: &mut Client, screen: &mut Screen, path: &str) -> anyhow::Result<()> {
    let Some(route) = Route::parse(path) else {
        bail!("Page not found: {}", path);
    };
    tracing::debug!(%route, "Opening route");

    if route.requires_auth() {
        client.restore().await;
    }
    match guard(&route, client.auth_state()) {
        Access::Allow => {}
        Access::Redirect(to) => {
            println!("Sign in required ({}). Run `offerz login` first.", to);
            return Ok(());
        }
        Access::Pending => {
            println!("Loading...");
            return Ok(());
        }
    }

    let listing = |search: Option<String>| ListingArgs { search, page: 1 };
    match route {
        Route::Home => catalog::home(client).await,
        Route::Stores { search } => catalog::stores(client, "All", search.as_deref()).await,
        Route::Store { slug } => catalog::store(client, &slug, "All").await,
        Route::Categories => catalog::categories(client).await,
        Route::Blog => catalog::blog(client).await,
        Route::BlogPost { slug } => catalog::post(client, &slug).await,
        Route::Coupons { search, category } => {
            catalog::coupons(client, screen, listing(search), category).await
        }
        Route::Deals { search } => catalog::deals(client, screen, listing(search), None).await,
        Route::Trending { search, category } => {
            catalog::trending(client, screen, listing(search), category).await
        }
        Route::Contact => {
            catalog::contact_page();
            Ok(())
        }
        Route::Page(slug) => catalog::page(client, slug.as_str()).await,
        Route::AdminLogin => {
            println!("Run `offerz login --email <EMAIL> --password <PASSWORD>` to sign in.");
            Ok(())
        }
        Route::AdminDashboard => admin::run(client, AdminCommands::Dashboard).await,
        Route::AdminStores => admin::run(client, AdminCommands::Stores).await,
        Route::AdminCoupons => admin::run(client, AdminCommands::Coupons).await,
        Route::AdminCategories => admin::run(client, AdminCommands::Categories).await,
        Route::AdminBlogs => admin::run(client, AdminCommands::Blogs).await,
        Route::AdminPages => admin::run(client, AdminCommands::Pages).await,
        Route::AdminSettings => admin::run(client, AdminCommands::Settings).await,
        Route::AdminMessages => admin::run(client, AdminCommands::Messages).await,
        form => admin::form(client, &form).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "offerz",
            "--api-url",
            "https://api.clickofferz.com/",
            "--timeout",
            "5",
            "--data-dir",
            "/tmp/offerz-test",
            "home",
        ]);
        let config = build_config(&cli);
        assert_eq!(config.base_url, "https://api.clickofferz.com");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.data_dir, std::path::PathBuf::from("/tmp/offerz-test"));
    }
}
