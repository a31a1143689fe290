//! Admin (authenticated) endpoints
//!
//! Every call sends the bearer token installed on the transport. Mutations
//! validate their input before anything goes over the wire.

use shared::client::{AdminProfile, PasswordUpdate, ProfileUpdate};
use shared::models::{
    BlogInput, BlogPost, Category, CategoryInput, Coupon, CouponInput, DashboardStats, Message,
    PageUpdate, Settings, StaticPage, Store, StoreInput,
};
use shared::{Envelope, ListEnvelope};

use super::Ack;
use crate::ClientResult;
use crate::client::HttpClient;
use crate::validation;

pub struct AdminApi<'a, C> {
    http: &'a C,
}

impl<'a, C: HttpClient> AdminApi<'a, C> {
    pub fn new(http: &'a C) -> Self {
        Self { http }
    }

    async fn list<T: serde::de::DeserializeOwned>(&self, path: &str) -> ClientResult<Vec<T>> {
        let list: ListEnvelope<T> = self.http.get(path).await?;
        Ok(list.into_items())
    }

    async fn one<T: serde::de::DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let item: Envelope<T> = self.http.get(path).await?;
        Ok(item.into_inner())
    }

    async fn create<B: serde::Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()> {
        let _: Ack = self.http.post(path, body).await?;
        Ok(())
    }

    async fn update<B: serde::Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()> {
        let _: Ack = self.http.put(path, body).await?;
        Ok(())
    }

    async fn remove(&self, path: &str) -> ClientResult<()> {
        let _: Ack = self.http.delete(path).await?;
        Ok(())
    }

    // ========================================================================
    // Dashboard & account
    // ========================================================================

    pub async fn stats(&self) -> ClientResult<DashboardStats> {
        self.one("/api/admin/stats").await
    }

    pub async fn me(&self) -> ClientResult<AdminProfile> {
        self.one(crate::session::ME_PATH).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<AdminProfile> {
        validation::validate_profile(update)?;
        let admin: Envelope<AdminProfile> =
            self.http.put("/api/auth/update-profile", update).await?;
        Ok(admin.into_inner())
    }

    /// `confirm` must repeat `update.new_password`
    pub async fn update_password(&self, update: &PasswordUpdate, confirm: &str) -> ClientResult<()> {
        validation::validate_password_change(update, confirm)?;
        self.update("/api/auth/update-password", update).await
    }

    // ========================================================================
    // Stores
    // ========================================================================

    pub async fn stores(&self) -> ClientResult<Vec<Store>> {
        self.list("/api/admin/stores").await
    }

    pub async fn create_store(&self, input: &StoreInput) -> ClientResult<()> {
        validation::validate_store(input)?;
        self.create("/api/admin/stores", input).await
    }

    pub async fn update_store(&self, id: &str, input: &StoreInput) -> ClientResult<()> {
        validation::validate_store(input)?;
        self.update(&format!("/api/admin/stores/{}", urlencoding::encode(id)), input).await
    }

    pub async fn delete_store(&self, id: &str) -> ClientResult<()> {
        self.remove(&format!("/api/admin/stores/{}", urlencoding::encode(id))).await
    }

    // ========================================================================
    // Coupons
    // ========================================================================

    pub async fn coupons(&self) -> ClientResult<Vec<Coupon>> {
        self.list("/api/admin/coupons").await
    }

    pub async fn create_coupon(&self, input: &CouponInput) -> ClientResult<()> {
        validation::validate_coupon(input)?;
        self.create("/api/admin/coupons", input).await
    }

    pub async fn update_coupon(&self, id: &str, input: &CouponInput) -> ClientResult<()> {
        validation::validate_coupon(input)?;
        self.update(&format!("/api/admin/coupons/{}", urlencoding::encode(id)), input).await
    }

    pub async fn delete_coupon(&self, id: &str) -> ClientResult<()> {
        self.remove(&format!("/api/admin/coupons/{}", urlencoding::encode(id))).await
    }

    // ========================================================================
    // Categories
    // ========================================================================

    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        self.list("/api/admin/categories").await
    }

    pub async fn create_category(&self, input: &CategoryInput) -> ClientResult<()> {
        validation::validate_category(input)?;
        self.create("/api/admin/categories", input).await
    }

    pub async fn update_category(&self, id: &str, input: &CategoryInput) -> ClientResult<()> {
        validation::validate_category(input)?;
        self.update(&format!("/api/admin/categories/{}", urlencoding::encode(id)), input).await
    }

    pub async fn delete_category(&self, id: &str) -> ClientResult<()> {
        self.remove(&format!("/api/admin/categories/{}", urlencoding::encode(id))).await
    }

    // ========================================================================
    // Blog posts
    // ========================================================================

    /// All posts including drafts
    pub async fn blogs(&self) -> ClientResult<Vec<BlogPost>> {
        self.list("/api/blogs/admin/all").await
    }

    pub async fn blog(&self, id: &str) -> ClientResult<BlogPost> {
        self.one(&format!("/api/blogs/admin/{}", urlencoding::encode(id))).await
    }

    pub async fn create_blog(&self, input: &BlogInput) -> ClientResult<()> {
        validation::validate_blog(input)?;
        self.create("/api/blogs", input).await
    }

    pub async fn update_blog(&self, id: &str, input: &BlogInput) -> ClientResult<()> {
        validation::validate_blog(input)?;
        self.update(&format!("/api/blogs/{}", urlencoding::encode(id)), input).await
    }

    pub async fn delete_blog(&self, id: &str) -> ClientResult<()> {
        self.remove(&format!("/api/blogs/{}", urlencoding::encode(id))).await
    }

    // ========================================================================
    // Static pages
    // ========================================================================

    pub async fn pages(&self) -> ClientResult<Vec<StaticPage>> {
        self.list("/api/pages/admin/all").await
    }

    pub async fn page(&self, slug: &str) -> ClientResult<StaticPage> {
        self.one(&format!("/api/pages/{}", urlencoding::encode(slug))).await
    }

    pub async fn update_page(&self, slug: &str, update: &PageUpdate) -> ClientResult<()> {
        self.update(&format!("/api/pages/{}", urlencoding::encode(slug)), update).await
    }

    // ========================================================================
    // Settings
    // ========================================================================

    pub async fn settings(&self) -> ClientResult<Settings> {
        self.one("/api/settings").await
    }

    pub async fn update_settings(&self, settings: &Settings) -> ClientResult<()> {
        self.update("/api/settings", settings).await
    }

    // ========================================================================
    // Messages
    // ========================================================================

    pub async fn messages(&self) -> ClientResult<Vec<Message>> {
        self.list("/api/messages").await
    }

    pub async fn message(&self, id: &str) -> ClientResult<Message> {
        self.one(&format!("/api/messages/{}", urlencoding::encode(id))).await
    }

    pub async fn mark_message_read(&self, id: &str) -> ClientResult<()> {
        let _: Ack = self
            .http
            .put(&format!("/api/messages/{}/read", urlencoding::encode(id)), &serde_json::json!({}))
            .await?;
        Ok(())
    }

    pub async fn delete_message(&self, id: &str) -> ClientResult<()> {
        self.remove(&format!("/api/messages/{}", urlencoding::encode(id))).await
    }
}
