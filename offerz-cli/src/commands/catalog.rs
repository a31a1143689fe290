//! Public pages

use anyhow::bail;
use offerz_client::api::public::LATEST_COUPON_LIMIT;
use offerz_client::catalog::{CatalogFilter, LetterFilter, StoreDirectory, StoreTab};
use offerz_client::models::{ContactMessage, StaticPageSlug};
use offerz_client::{CatalogQuery, Listing, Notice, SuggestionIndex, or_default};

use super::Client;
use crate::cli::ListingArgs;
use crate::render::{self, Screen};

pub async fn home(client: &Client) -> anyhow::Result<()> {
    let api = client.public();
    let highlights_query = CatalogQuery::highlights();
    let trending_query = CatalogQuery::trending();
    let (highlights, trending, latest, categories) = tokio::join!(
        api.coupons(&highlights_query),
        api.coupons(&trending_query),
        api.recent_coupons(LATEST_COUPON_LIMIT),
        api.categories(),
    );

    print!("{}", render::heading("Top offers"));
    print_coupons(&highlights.items);

    print!("{}", render::heading("Trending now"));
    print_coupons(&trending.items);

    print!("{}", render::heading("Latest coupons"));
    print_coupons(&or_default(latest, "latest coupons"));

    let categories = or_default(categories, "categories");
    if !categories.is_empty() {
        print!("{}", render::heading("Browse by category"));
        for category in &categories {
            println!("  {}", render::category_line(category));
        }
    }
    Ok(())
}

pub async fn coupons(
    client: &Client,
    screen: &mut Screen,
    args: ListingArgs,
    category: Option<String>,
) -> anyhow::Result<()> {
    let filter = with_category(CatalogQuery::coupons().filter, category.as_deref());
    let names = or_default(client.public().category_names().await, "categories");
    let title = format!("Coupons · {}", filter.category_label());
    show_listing(client, screen, CatalogQuery::coupons(), filter, args, &title).await?;
    if names.len() > 1 {
        println!("\nCategories: {}", names.join(" | "));
    }
    Ok(())
}

pub async fn deals(
    client: &Client,
    screen: &mut Screen,
    args: ListingArgs,
    category: Option<String>,
) -> anyhow::Result<()> {
    let base = CatalogQuery::deals();
    let filter = with_category(base.filter.clone(), category.as_deref());
    let title = format!("Deals · {}", filter.category_label());
    show_listing(client, screen, base, filter, args, &title).await
}

pub async fn trending(
    client: &Client,
    screen: &mut Screen,
    args: ListingArgs,
    category: Option<String>,
) -> anyhow::Result<()> {
    let base = CatalogQuery::trending();
    let filter = with_category(base.filter.clone(), category.as_deref());
    let title = format!("Trending · {}", filter.category_label());
    show_listing(client, screen, base, filter, args, &title).await
}

fn with_category(filter: CatalogFilter, category: Option<&str>) -> CatalogFilter {
    match category {
        Some(category) => filter.with_category(category),
        None => filter,
    }
}

/// Load page 1 of `base` with `filter`, then step to the requested page
async fn show_listing(
    client: &Client,
    screen: &mut Screen,
    base: CatalogQuery,
    filter: CatalogFilter,
    args: ListingArgs,
    title: &str,
) -> anyhow::Result<()> {
    let api = client.catalog();
    let filter = match args.search.as_deref() {
        Some(search) => filter.with_search(search),
        None => filter,
    };
    let mut listing = Listing::new(base.with_filter(filter));
    let pending = listing.refresh();
    listing.load(&api, pending, screen).await;

    if args.page > 1 {
        match listing.go_to_page(args.page) {
            Some(pending) => {
                listing.load(&api, pending, screen).await;
            }
            None => bail!(
                "Page {} is out of range (1-{})",
                args.page,
                listing.page().total_pages.max(1)
            ),
        }
    }

    print!("{}", render::heading(title));
    if listing.is_empty_state() {
        println!("{}", render::empty_state());
        return Ok(());
    }
    print_coupons(listing.items());
    let pager = render::pager(&listing.pager());
    if !pager.is_empty() {
        println!("\n  {}  ({} offers)", pager, listing.page().total);
    }
    Ok(())
}

pub async fn stores(client: &Client, letter: &str, search: Option<&str>) -> anyhow::Result<()> {
    let letter: LetterFilter = letter.parse().map_err(anyhow::Error::msg)?;
    let mut directory = StoreDirectory::new(or_default(client.public().stores().await, "stores"));
    directory.set_letter(letter);
    if let Some(search) = search {
        directory.set_search(search);
    }

    print!("{}", render::heading("All stores"));
    let alphabet: Vec<String> = LetterFilter::alphabet().map(|l| l.to_string()).collect();
    println!("  {}\n", alphabet.join(" "));

    let visible = directory.visible();
    if visible.is_empty() {
        println!("  No stores found");
    }
    for store in visible {
        println!("  {}", render::store_line(store));
    }
    Ok(())
}

pub async fn store(client: &Client, slug: &str, tab: &str) -> anyhow::Result<()> {
    let tab: StoreTab = tab.parse().map_err(anyhow::Error::msg)?;
    let api = client.public();
    let (store, coupons) = tokio::join!(api.store(slug), api.store_coupons(slug));
    let store = match store {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!(error = %e, slug, "Store lookup failed");
            bail!("Store not found: {}", slug);
        }
    };
    let coupons = or_default(coupons, "store coupons");

    print!("{}", render::heading(&store.name));
    println!("  {}", render::logo(store.logo()));
    if let Some(description) = store.description.as_deref().filter(|d| !d.is_empty()) {
        println!("  {}", description);
    }
    if let Some(website) = store.website.as_deref().filter(|w| !w.is_empty()) {
        println!("  {}", website);
    }

    let tabs: Vec<String> = StoreTab::ALL
        .iter()
        .map(|t| {
            let count = t.filter(&coupons).len();
            if *t == tab {
                format!("[{} ({})]", t.label(), count)
            } else {
                format!("{} ({})", t.label(), count)
            }
        })
        .collect();
    println!("\n  {}\n", tabs.join("  "));

    let today = render::today();
    let shown = tab.filter(&coupons);
    if shown.is_empty() {
        println!("{}", render::empty_state());
    }
    for coupon in shown {
        println!("  {}", render::coupon_card(coupon, today));
    }
    Ok(())
}

pub async fn categories(client: &Client) -> anyhow::Result<()> {
    let categories = or_default(client.public().categories().await, "categories");
    print!("{}", render::heading("Categories"));
    for category in categories.iter().filter(|c| c.is_active) {
        println!("  {}", render::category_line(category));
    }
    Ok(())
}

pub async fn blog(client: &Client) -> anyhow::Result<()> {
    let posts = or_default(client.public().blogs().await, "blog posts");
    print!("{}", render::heading("Blog"));
    if posts.is_empty() {
        println!("  No posts yet");
    }
    for post in &posts {
        println!("  {}", render::blog_line(post));
    }
    Ok(())
}

pub async fn post(client: &Client, slug: &str) -> anyhow::Result<()> {
    let post = match client.public().blog(slug).await {
        Ok(post) => post,
        Err(e) => {
            tracing::warn!(error = %e, slug, "Blog post lookup failed");
            bail!("Post not found: {}", slug);
        }
    };
    print!("{}", render::heading(&post.title));
    if let Some(author) = &post.author {
        println!("  by {}", author);
    }
    if !post.tags.is_empty() {
        println!("  #{}", post.tags.join(" #"));
    }
    println!("\n{}", render::strip_html(&post.content));
    Ok(())
}

/// Informational page; known pages fall back to their default title
pub async fn page(client: &Client, slug: &str) -> anyhow::Result<()> {
    let known = slug.parse::<StaticPageSlug>().ok();
    match client.public().page(slug).await {
        Ok(page) => {
            let title = match (page.title.as_str(), known) {
                ("", Some(known)) => known.default_title(),
                ("", None) => slug,
                (title, _) => title,
            };
            print!("{}", render::heading(title));
            println!("{}", render::strip_html(&page.content));
            Ok(())
        }
        Err(e) => {
            tracing::warn!(error = %e, slug, "Page lookup failed");
            match known {
                Some(known) => {
                    print!("{}", render::heading(known.default_title()));
                    println!("  This page has no content yet.");
                    Ok(())
                }
                None => bail!("Page not found: {}", slug),
            }
        }
    }
}

pub async fn search(client: &Client, query: &str, submit: bool) -> anyhow::Result<()> {
    if submit {
        match SuggestionIndex::submit(query) {
            Some(route) => println!("{}", route),
            None => println!("Nothing to search for"),
        }
        return Ok(());
    }

    if query.trim().is_empty() {
        println!("Type something to search");
        return Ok(());
    }

    let index = SuggestionIndex::load(&client.public()).await;
    match index.suggest(query) {
        Some(found) => println!("{}", render::suggestions(&found)),
        None => println!("  No results for \"{}\"", query.trim()),
    }
    Ok(())
}

pub fn contact_page() {
    print!("{}", render::heading(StaticPageSlug::ContactUs.default_title()));
    println!("  Send us a message with:");
    println!("  offerz contact --name <NAME> --email <EMAIL> --subject <SUBJECT> --message <TEXT>");
}

pub async fn contact(
    client: &Client,
    name: String,
    email: String,
    subject: String,
    message: String,
) -> anyhow::Result<()> {
    let message = ContactMessage {
        name,
        email,
        subject,
        message,
    };
    let result = client.public().send_message(&message).await;
    render::notice(&Notice::from_result(
        &result,
        "Message sent successfully!",
        "Failed to send message",
    ));
    Ok(())
}

fn print_coupons(coupons: &[offerz_client::models::Coupon]) {
    if coupons.is_empty() {
        println!("{}", render::empty_state());
    } else {
        println!("{}", render::coupon_list(coupons));
    }
}
