//! Admin panel
//!
//! Every action restores the saved session and runs behind the route
//! guard. Reads render a table; mutations print a notice.

use anyhow::{Context, bail};
use offerz_client::models::{
    BlogInput, CategoryInput, CouponInput, CouponKind, LogoType, PageUpdate, StoreInput,
};
use offerz_client::{Access, ClientResult, Notice, Route, guard};
use shared::client::{PasswordUpdate, ProfileUpdate};

use super::Client;
use crate::cli::{AdminCommands, CouponArgs, CouponUpdateArgs, StoreArgs, StoreUpdateArgs};
use crate::render;

pub async fn run(client: &mut Client, action: AdminCommands) -> anyhow::Result<()> {
    ensure_signed_in(client).await?;

    match action {
        AdminCommands::Dashboard => {
            let result = client.admin().stats().await;
            let stats = client.check(result).await.context("Failed to load stats")?;
            print!("{}", render::heading("Dashboard"));
            println!("{}", render::stats(&stats));
        }

        AdminCommands::Stores => {
            let result = client.admin().stores().await;
            let stores = client.check(result).await.context("Failed to fetch stores")?;
            print!("{}", render::heading("Stores"));
            for store in &stores {
                println!("  {}", render::admin_store_line(store));
            }
        }
        AdminCommands::CreateStore(args) => {
            let input = store_input(args)?;
            let result = client.admin().create_store(&input).await;
            report(client, result, "Store created successfully", "Failed to save store").await;
        }
        AdminCommands::UpdateStore { id, store } => {
            let result = client.admin().stores().await;
            let stores = client.check(result).await.context("Failed to fetch store")?;
            let current = stores
                .iter()
                .find(|s| s.id == id)
                .with_context(|| format!("Store not found: {}", id))?;
            let mut input = StoreInput::from(current);
            overlay_store(&mut input, store)?;
            let result = client.admin().update_store(&id, &input).await;
            report(client, result, "Store updated successfully", "Failed to save store").await;
        }
        AdminCommands::DeleteStore { id } => {
            let result = client.admin().delete_store(&id).await;
            report(client, result, "Store deleted successfully", "Failed to delete store").await;
        }

        AdminCommands::Coupons => {
            let result = client.admin().coupons().await;
            let coupons = client.check(result).await.context("Failed to fetch coupons")?;
            print!("{}", render::heading("Coupons"));
            for coupon in &coupons {
                println!("  {}", render::admin_coupon_line(coupon));
            }
        }
        AdminCommands::CreateCoupon(args) => {
            let input = coupon_input(client, args).await?;
            let result = client.admin().create_coupon(&input).await;
            report(client, result, "Coupon created successfully", "Failed to save coupon").await;
        }
        AdminCommands::UpdateCoupon { id, coupon } => {
            let result = client.admin().coupons().await;
            let coupons = client.check(result).await.context("Failed to fetch coupon")?;
            let current = coupons
                .iter()
                .find(|c| c.id == id)
                .with_context(|| format!("Coupon not found: {}", id))?;
            let mut input = CouponInput::from(current);
            if let Some(name) = &coupon.store {
                let result = client.admin().stores().await;
                let stores = client.check(result).await.context("Failed to fetch stores")?;
                match stores.iter().find(|s| s.name.eq_ignore_ascii_case(name.trim())) {
                    Some(store) => input.set_store(store),
                    None => bail!("Unknown store '{}'", name),
                }
            }
            overlay_coupon(&mut input, coupon)?;
            let result = client.admin().update_coupon(&id, &input).await;
            report(client, result, "Coupon updated successfully", "Failed to save coupon").await;
        }
        AdminCommands::DeleteCoupon { id } => {
            let result = client.admin().delete_coupon(&id).await;
            report(client, result, "Coupon deleted successfully", "Failed to delete coupon").await;
        }

        AdminCommands::Categories => {
            let result = client.admin().categories().await;
            let categories = client
                .check(result)
                .await
                .context("Failed to fetch categories")?;
            print!("{}", render::heading("Categories"));
            for category in &categories {
                println!("  {:<26} {}", category.id, render::category_line(category));
            }
        }
        AdminCommands::CreateCategory { name, icon, color } => {
            let mut input = CategoryInput {
                name,
                ..Default::default()
            };
            if let Some(icon) = icon {
                input.icon = icon;
            }
            if let Some(color) = color {
                input.color = color;
            }
            let result = client.admin().create_category(&input).await;
            report(client, result, "Category created successfully", "Failed to save category").await;
        }
        AdminCommands::UpdateCategory {
            id,
            name,
            icon,
            color,
            active,
        } => {
            let result = client.admin().categories().await;
            let categories = client.check(result).await.context("Failed to fetch category")?;
            let current = categories
                .iter()
                .find(|c| c.id == id)
                .with_context(|| format!("Category not found: {}", id))?;
            let mut input = CategoryInput::from(current);
            if let Some(name) = name {
                input.name = name;
            }
            if let Some(icon) = icon {
                input.icon = icon;
            }
            if let Some(color) = color {
                input.color = color;
            }
            if let Some(active) = active {
                input.is_active = active;
            }
            let result = client.admin().update_category(&id, &input).await;
            report(client, result, "Category updated successfully", "Failed to save category").await;
        }
        AdminCommands::DeleteCategory { id } => {
            let result = client.admin().delete_category(&id).await;
            report(client, result, "Category deleted successfully", "Failed to delete category").await;
        }

        AdminCommands::Blogs => {
            let result = client.admin().blogs().await;
            let posts = client.check(result).await.context("Failed to fetch blogs")?;
            print!("{}", render::heading("Blog posts"));
            for post in &posts {
                let status = if post.is_active { "published" } else { "draft" };
                println!("  {:<26} {:<10} {}", post.id, status, post.title);
            }
        }
        AdminCommands::CreateBlog {
            title,
            excerpt,
            content,
            tags,
            image,
            draft,
        } => {
            let input = BlogInput {
                title,
                excerpt,
                content,
                image: image.unwrap_or_default(),
                tags: BlogInput::parse_tags(&tags),
                is_active: !draft,
            };
            let result = client.admin().create_blog(&input).await;
            report(client, result, "Blog created successfully", "Failed to save blog").await;
        }
        AdminCommands::UpdateBlog {
            id,
            title,
            excerpt,
            content,
            tags,
            image,
            published,
        } => {
            let result = client.admin().blog(&id).await;
            let post = client.check(result).await.context("Failed to fetch blog details")?;
            let mut input = BlogInput::from(&post);
            if let Some(title) = title {
                input.title = title;
            }
            if let Some(excerpt) = excerpt {
                input.excerpt = excerpt;
            }
            if let Some(content) = content {
                input.content = content;
            }
            if let Some(tags) = tags {
                input.tags = BlogInput::parse_tags(&tags);
            }
            if let Some(image) = image {
                input.image = image;
            }
            if let Some(published) = published {
                input.is_active = published;
            }
            let result = client.admin().update_blog(&id, &input).await;
            report(client, result, "Blog updated successfully", "Failed to save blog").await;
        }
        AdminCommands::DeleteBlog { id } => {
            let result = client.admin().delete_blog(&id).await;
            report(client, result, "Blog deleted successfully", "Failed to delete blog").await;
        }

        AdminCommands::Pages => {
            let result = client.admin().pages().await;
            let pages = client.check(result).await.context("Failed to load pages")?;
            print!("{}", render::heading("Pages"));
            for page in &pages {
                let updated = page
                    .updated_at
                    .map(|t| t.format("%Y-%m-%d").to_string())
                    .unwrap_or_default();
                println!("  {:<18} {:<22} {}", page.slug, page.title, updated);
            }
        }
        AdminCommands::EditPage { slug, content } => {
            let result = client
                .admin()
                .update_page(&slug, &PageUpdate { content })
                .await;
            report(client, result, "Page updated successfully!", "Failed to update page").await;
        }

        AdminCommands::Messages => {
            let result = client.admin().messages().await;
            let messages = client.check(result).await.context("Failed to load messages")?;
            print!("{}", render::heading("Messages"));
            if messages.is_empty() {
                println!("  Inbox is empty");
            }
            for message in &messages {
                println!("  {}", render::message_line(message));
            }
        }
        AdminCommands::ReadMessage { id } => {
            let result = client.admin().message(&id).await;
            let message = client.check(result).await.context("Failed to load messages")?;
            print!("{}", render::heading(&message.subject));
            println!("  From: {} <{}>\n\n{}\n", message.name, message.email, message.message);
            if message.is_unread() {
                let result = client.admin().mark_message_read(&id).await;
                report(client, result, "Marked as read", "Failed to update status").await;
            }
        }
        AdminCommands::DeleteMessage { id } => {
            let result = client.admin().delete_message(&id).await;
            report(client, result, "Message deleted", "Failed to delete message").await;
        }

        AdminCommands::Settings => {
            let result = client.admin().settings().await;
            let settings = client.check(result).await.context("Failed to load settings")?;
            print!("{}", render::heading("Social links"));
            let mut any = false;
            for (platform, url) in settings.social_links.iter() {
                println!("  {:<10} {}", platform, url);
                any = true;
            }
            if !any {
                println!("  No links set");
            }
        }
        AdminCommands::SetSocial { platform, url } => {
            let result = client.admin().settings().await;
            let mut settings = client.check(result).await.context("Failed to load settings")?;
            if !settings.social_links.set(&platform.to_ascii_lowercase(), &url) {
                bail!(
                    "Unknown platform '{}' (expected one of: {})",
                    platform,
                    offerz_client::models::SocialLinks::PLATFORMS.join(", ")
                );
            }
            let result = client.admin().update_settings(&settings).await;
            report(client, result, "Social media links updated!", "Failed to update links").await;
        }

        AdminCommands::Profile {
            name,
            email,
            current_password,
        } => {
            let update = ProfileUpdate {
                name,
                email,
                current_password,
            };
            let result = client.admin().update_profile(&update).await;
            let result = client.check(result).await;
            let notice = Notice::from_result(
                &result,
                "Profile updated! Re-login if email changed.",
                "Failed to update profile",
            );
            if let Ok(admin) = result {
                client.session_mut().update_admin(admin);
            }
            render::notice(&notice);
        }
        AdminCommands::Password { current, new, confirm } => {
            let update = PasswordUpdate {
                current_password: current,
                new_password: new,
            };
            let result = client.admin().update_password(&update, &confirm).await;
            report(client, result, "Password updated successfully", "Failed to update password").await;
        }
    }
    Ok(())
}

/// Show the record behind a new/edit admin route
pub async fn form(client: &mut Client, route: &Route) -> anyhow::Result<()> {
    ensure_signed_in(client).await?;

    match route {
        Route::AdminStoreNew => println!("Create a store with `offerz admin create-store --help`"),
        Route::AdminCouponNew => println!("Create a coupon with `offerz admin create-coupon --help`"),
        Route::AdminCategoryNew => {
            println!("Create a category with `offerz admin create-category --help`")
        }
        Route::AdminBlogNew => println!("Create a post with `offerz admin create-blog --help`"),
        Route::AdminStoreEdit { id } => {
            let result = client.admin().stores().await;
            let stores = client.check(result).await.context("Failed to fetch store")?;
            let store = stores
                .iter()
                .find(|s| s.id == *id)
                .with_context(|| format!("Store not found: {}", id))?;
            print!("{}", render::heading(&format!("Edit store · {}", store.name)));
            let input = StoreInput::from(store);
            println!("  logo        {} ({:?})", input.logo, input.logo_type);
            println!("  category    {}", input.category);
            println!("  website     {}", input.website);
            println!("  description {}", input.description);
            println!("  active      {}", input.is_active);
        }
        Route::AdminCouponEdit { id } => {
            let result = client.admin().coupons().await;
            let coupons = client.check(result).await.context("Failed to fetch coupon")?;
            let coupon = coupons
                .iter()
                .find(|c| c.id == *id)
                .with_context(|| format!("Coupon not found: {}", id))?;
            print!("{}", render::heading(&format!("Edit coupon · {}", coupon.title)));
            let input = CouponInput::from(coupon);
            println!("  store     {}", input.store_name);
            println!("  type      {}", input.kind);
            println!("  code      {}", input.code);
            println!("  discount  {}", input.discount);
            println!("  category  {}", input.category);
            println!("  expiry    {}", input.expiry);
            println!("  link      {}", input.link);
            println!("  trending  {}", input.is_trending);
        }
        Route::AdminCategoryEdit { id } => {
            let result = client.admin().categories().await;
            let categories = client.check(result).await.context("Failed to fetch category")?;
            let category = categories
                .iter()
                .find(|c| c.id == *id)
                .with_context(|| format!("Category not found: {}", id))?;
            print!("{}", render::heading(&format!("Edit category · {}", category.name)));
            let input = CategoryInput::from(category);
            println!("  icon   {}", input.icon);
            println!("  color  {}", input.color);
            println!("  active {}", input.is_active);
        }
        Route::AdminBlogEdit { id } => {
            let result = client.admin().blog(id).await;
            let post = client.check(result).await.context("Failed to fetch blog details")?;
            print!("{}", render::heading(&format!("Edit post · {}", post.title)));
            let input = BlogInput::from(&post);
            println!("  excerpt {}", input.excerpt);
            println!("  tags    {}", input.tags.join(", "));
            println!("  status  {}", if input.is_active { "published" } else { "draft" });
            println!("\n{}", input.content);
        }
        Route::AdminPageEdit { slug } => {
            let result = client.admin().page(slug).await;
            let page = client.check(result).await.context("Failed to load page")?;
            print!("{}", render::heading(&format!("Edit page · {}", page.slug)));
            println!("{}", page.content);
        }
        other => bail!("Not an admin form: {}", other),
    }
    Ok(())
}

async fn ensure_signed_in(client: &mut Client) -> anyhow::Result<()> {
    if client.auth_state().is_loading() {
        client.restore().await;
    }
    match guard(&Route::AdminDashboard, client.auth_state()) {
        Access::Allow => Ok(()),
        Access::Redirect(_) | Access::Pending => {
            bail!("Not signed in. Run `offerz login` first.")
        }
    }
}

/// Print the outcome of a mutation, signing out on a refused token
async fn report(client: &mut Client, result: ClientResult<()>, success: &str, fallback: &str) {
    let result = client.check(result).await;
    if let Err(e) = &result {
        tracing::warn!(error = %e, "{}", fallback);
    }
    render::notice(&Notice::from_result(&result, success, fallback));
}

fn store_input(args: StoreArgs) -> anyhow::Result<StoreInput> {
    let logo_type: LogoType = args.logo_type.parse().map_err(anyhow::Error::msg)?;
    Ok(StoreInput {
        name: args.name,
        logo: args.logo,
        logo_type,
        category: args.category,
        website: args.website,
        description: args.description,
        offers: args.offers,
        is_active: true,
    })
}

/// Apply the flags given to `update-store` over the saved record
fn overlay_store(input: &mut StoreInput, args: StoreUpdateArgs) -> anyhow::Result<()> {
    if let Some(logo_type) = args.logo_type {
        input.logo_type = logo_type.parse().map_err(anyhow::Error::msg)?;
    }
    if let Some(name) = args.name {
        input.name = name;
    }
    if let Some(logo) = args.logo {
        input.logo = logo;
    }
    if let Some(category) = args.category {
        input.category = category;
    }
    if let Some(website) = args.website {
        input.website = website;
    }
    if let Some(description) = args.description {
        input.description = description;
    }
    if let Some(offers) = args.offers {
        input.offers = offers;
    }
    if let Some(active) = args.active {
        input.is_active = active;
    }
    Ok(())
}

/// Apply the flags given to `update-coupon`; the store is resolved by the caller
fn overlay_coupon(input: &mut CouponInput, args: CouponUpdateArgs) -> anyhow::Result<()> {
    if let Some(kind) = args.kind {
        input.kind = kind.parse().map_err(anyhow::Error::msg)?;
    }
    if let Some(title) = args.title {
        input.title = title;
    }
    if let Some(code) = args.code {
        input.code = code;
    }
    if let Some(discount) = args.discount {
        input.discount = discount;
    }
    if let Some(description) = args.description {
        input.description = description;
    }
    if let Some(category) = args.category {
        input.category = category;
    }
    if let Some(expiry) = args.expiry {
        input.expiry = expiry;
    }
    if let Some(link) = args.link {
        input.link = link;
    }
    if let Some(trending) = args.trending {
        input.is_trending = trending;
    }
    if let Some(active) = args.active {
        input.is_active = active;
    }
    Ok(())
}

/// Build a coupon form, copying the logo of the chosen store
async fn coupon_input(client: &mut Client, args: CouponArgs) -> anyhow::Result<CouponInput> {
    let kind: CouponKind = args.kind.parse().map_err(anyhow::Error::msg)?;
    let mut input = CouponInput {
        title: args.title,
        description: args.description,
        code: args.code,
        kind,
        discount: args.discount,
        category: args.category,
        expiry: args.expiry,
        link: args.link,
        is_trending: args.trending,
        is_active: true,
        ..Default::default()
    };

    let result = client.admin().stores().await;
    let stores = client.check(result).await.context("Failed to fetch stores")?;
    match stores
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(args.store.trim()))
    {
        Some(store) => input.set_store(store),
        None => bail!("Unknown store '{}'. Create it first with `offerz admin create-store`.", args.store),
    }
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved_store() -> StoreInput {
        StoreInput {
            name: "Nike".to_string(),
            logo: "👟".to_string(),
            logo_type: LogoType::Emoji,
            category: "Fashion".to_string(),
            website: "https://nike.com".to_string(),
            description: "Sportswear".to_string(),
            offers: 7,
            is_active: false,
        }
    }

    #[test]
    fn test_store_update_keeps_untouched_fields() {
        let mut input = saved_store();
        let args = StoreUpdateArgs {
            website: Some("https://www.nike.com".to_string()),
            ..Default::default()
        };
        overlay_store(&mut input, args).unwrap();

        assert_eq!(input.website, "https://www.nike.com");
        assert_eq!(input.offers, 7);
        assert!(!input.is_active);
        assert_eq!(input.name, "Nike");
        assert_eq!(input.logo_type, LogoType::Emoji);
    }

    #[test]
    fn test_store_update_sets_offers_and_status() {
        let mut input = saved_store();
        let args = StoreUpdateArgs {
            offers: Some(12),
            active: Some(true),
            logo_type: Some("url".to_string()),
            ..Default::default()
        };
        overlay_store(&mut input, args).unwrap();

        assert_eq!(input.offers, 12);
        assert!(input.is_active);
        assert_eq!(input.logo_type, LogoType::Url);

        let bad = StoreUpdateArgs {
            logo_type: Some("gif".to_string()),
            ..Default::default()
        };
        assert!(overlay_store(&mut input, bad).is_err());
    }

    #[test]
    fn test_coupon_update_keeps_untouched_fields() {
        let mut input = CouponInput {
            store_name: "Nike".to_string(),
            title: "20% off".to_string(),
            code: "NIKE20".to_string(),
            kind: CouponKind::Code,
            usage_count: 41,
            is_trending: true,
            is_active: true,
            ..Default::default()
        };
        let args = CouponUpdateArgs {
            title: Some("25% off".to_string()),
            ..Default::default()
        };
        overlay_coupon(&mut input, args).unwrap();

        assert_eq!(input.title, "25% off");
        assert_eq!(input.code, "NIKE20");
        assert_eq!(input.usage_count, 41);
        assert!(input.is_trending);
        assert!(input.is_active);
    }
}
