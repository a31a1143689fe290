//! Public (unauthenticated) endpoints

use shared::models::{BlogPost, Category, ContactMessage, Coupon, Settings, StaticPage, Store};
use shared::{Envelope, ListEnvelope};

use super::Ack;
use crate::ClientResult;
use crate::catalog::{CatalogApi, CatalogPage, CatalogQuery};
use crate::client::HttpClient;

/// Coupons fetched for the home page "latest" strip
pub const LATEST_COUPON_LIMIT: u32 = 20;

pub struct PublicApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> PublicApi<'a, C> {
    pub fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub fn catalog(&self) -> CatalogApi<'a, C> {
        CatalogApi::new(self.http)
    }

    pub async fn stores(&self) -> ClientResult<Vec<Store>> {
        let list: ListEnvelope<Store> = self.http.get("/api/stores").await?;
        Ok(list.into_items())
    }

    pub async fn store(&self, slug: &str) -> ClientResult<Store> {
        let path = format!("/api/stores/{}", urlencoding::encode(slug));
        let store: Envelope<Store> = self.http.get(&path).await?;
        Ok(store.into_inner())
    }

    /// One normalized listing page; failures render as an empty page
    pub async fn coupons(&self, query: &CatalogQuery) -> CatalogPage<Coupon> {
        self.catalog().fetch_page(query).await
    }

    /// The first `limit` coupons in backend order
    pub async fn recent_coupons(&self, limit: u32) -> ClientResult<Vec<Coupon>> {
        let path = format!("/api/coupons?limit={}", limit);
        let list: ListEnvelope<Coupon> = self.http.get(&path).await?;
        Ok(list.into_items())
    }

    pub async fn store_coupons(&self, slug: &str) -> ClientResult<Vec<Coupon>> {
        let path = format!("/api/coupons/store/{}", urlencoding::encode(slug));
        let list: ListEnvelope<Coupon> = self.http.get(&path).await?;
        Ok(list.into_items())
    }

    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        let list: ListEnvelope<Category> = self.http.get("/api/categories").await?;
        Ok(list.into_items())
    }

    /// Category names for the filter chips, prefixed with `"All"`
    pub async fn category_names(&self) -> ClientResult<Vec<String>> {
        let categories = self.categories().await?;
        Ok(std::iter::once(crate::catalog::ALL_CATEGORIES.to_string())
            .chain(categories.into_iter().map(|c| c.name))
            .collect())
    }

    pub async fn blogs(&self) -> ClientResult<Vec<BlogPost>> {
        let list: ListEnvelope<BlogPost> = self.http.get("/api/blogs").await?;
        Ok(list.into_items())
    }

    pub async fn blog(&self, slug: &str) -> ClientResult<BlogPost> {
        let path = format!("/api/blogs/{}", urlencoding::encode(slug));
        let post: Envelope<BlogPost> = self.http.get(&path).await?;
        Ok(post.into_inner())
    }

    pub async fn page(&self, slug: &str) -> ClientResult<StaticPage> {
        let path = format!("/api/pages/{}", urlencoding::encode(slug));
        let page: Envelope<StaticPage> = self.http.get(&path).await?;
        Ok(page.into_inner())
    }

    pub async fn settings(&self) -> ClientResult<Settings> {
        let settings: Envelope<Settings> = self.http.get("/api/settings").await?;
        Ok(settings.into_inner())
    }

    pub async fn send_message(&self, message: &ContactMessage) -> ClientResult<()> {
        crate::validation::validate_contact(message)?;
        let _: Ack = self.http.post("/api/messages", message).await?;
        Ok(())
    }
}
