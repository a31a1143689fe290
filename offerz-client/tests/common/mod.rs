//! In-process mock of the catalog backend
//!
//! Serves a small seeded data set through an axum Router so the client can
//! be exercised end to end with `OneshotHttpClient`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, Uri},
    routing::{delete, get, post, put},
};
use offerz_client::OneshotHttpClient;
use serde_json::{Value, json};
use shared::Pagination;
use shared::client::{AdminProfile, LoginRequest};
use shared::models::{Category, Coupon, CouponKind, Message, Store};

pub const ADMIN_EMAIL: &str = "admin@clickofferz.com";
pub const ADMIN_PASSWORD: &str = "secret123";
pub const ADMIN_TOKEN: &str = "test-token";

type Reply = (StatusCode, Json<Value>);

#[derive(Debug, Default)]
pub struct MockData {
    pub stores: Vec<Store>,
    pub coupons: Vec<Coupon>,
    pub categories: Vec<Category>,
    pub messages: Vec<Message>,
    /// Serve `{ coupons, pagination }` instead of a bare array
    pub paginate: bool,
    pub fail_coupons: bool,
    pub fail_deletes: bool,
    /// Every request URI, in arrival order
    pub requests: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MockState {
    inner: Arc<Mutex<MockData>>,
}

impl MockState {
    pub fn new(data: MockData) -> Self {
        Self {
            inner: Arc::new(Mutex::new(data)),
        }
    }

    pub fn data(&self) -> MutexGuard<'_, MockData> {
        self.inner.lock().unwrap()
    }

    pub fn requests(&self) -> Vec<String> {
        self.data().requests.clone()
    }

    pub fn client(&self) -> OneshotHttpClient {
        OneshotHttpClient::new(router(self.clone()))
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn store(id: &str, name: &str) -> Store {
    Store {
        id: id.into(),
        name: name.into(),
        logo: "🏬".into(),
        is_active: true,
        ..Default::default()
    }
}

pub fn coupon(i: usize, store_name: &str, kind: CouponKind) -> Coupon {
    Coupon {
        id: format!("c{i}"),
        store_name: store_name.into(),
        title: format!("Offer {i} at {store_name}"),
        kind,
        code: (kind == CouponKind::Code).then(|| format!("CODE{i}")),
        category: Some(if i % 2 == 0 { "Fashion" } else { "Electronics" }.into()),
        is_trending: i % 5 == 0,
        is_active: true,
        ..Default::default()
    }
}

/// `n` coupons spread over three stores
pub fn seeded(n: usize) -> MockData {
    let stores = vec![
        store("s1", "Amazon"),
        store("s2", "Best Buy"),
        store("s3", "Nike"),
    ];
    let coupons = (0..n)
        .map(|i| {
            let kind = if i % 3 == 0 {
                CouponKind::Deal
            } else {
                CouponKind::Code
            };
            coupon(i, &stores[i % stores.len()].name, kind)
        })
        .collect();
    MockData {
        stores,
        coupons,
        categories: vec![
            Category {
                id: "k1".into(),
                name: "Fashion".into(),
                ..Default::default()
            },
            Category {
                id: "k2".into(),
                name: "Electronics".into(),
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}

fn admin() -> AdminProfile {
    AdminProfile {
        id: "a1".into(),
        name: "Admin".into(),
        email: ADMIN_EMAIL.into(),
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: MockState) -> Router {
    Router::new()
        .route("/api/coupons", get(list_coupons))
        .route("/api/coupons/store/{slug}", get(store_coupons))
        .route("/api/stores", get(list_stores))
        .route("/api/stores/{slug}", get(get_store))
        .route("/api/categories", get(list_categories))
        .route("/api/messages", post(send_message).get(list_messages))
        .route("/api/messages/{id}/read", put(mark_read))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/admin/stats", get(stats))
        .route("/api/admin/stores", get(admin_stores))
        .route("/api/admin/stores/{id}", put(update_store).delete(delete_store))
        .route("/api/admin/coupons", get(admin_coupons).post(create_coupon))
        .route("/api/admin/coupons/{id}", put(update_coupon).delete(delete_coupon))
        .with_state(state)
}

fn ok(body: Value) -> Reply {
    (StatusCode::OK, Json(body))
}

fn fail(status: StatusCode, error: &str) -> Reply {
    (status, Json(json!({ "error": error })))
}

fn record<'a>(state: &'a MockState, uri: &Uri) -> MutexGuard<'a, MockData> {
    let mut data = state.data();
    data.requests.push(uri.to_string());
    data
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .is_some_and(|h| h == format!("Bearer {ADMIN_TOKEN}"))
}

fn to_json<T: serde::Serialize>(value: T) -> Value {
    serde_json::to_value(value).unwrap()
}

// ============================================================================
// Public handlers
// ============================================================================

async fn list_coupons(
    State(state): State<MockState>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Reply {
    let data = record(&state, &uri);
    if data.fail_coupons {
        return fail(StatusCode::INTERNAL_SERVER_ERROR, "Database unavailable");
    }

    let search = params.get("search").map(|s| s.to_lowercase());
    let filtered: Vec<&Coupon> = data
        .coupons
        .iter()
        .filter(|c| params.get("category").is_none_or(|k| c.category.as_ref() == Some(k)))
        .filter(|c| params.get("type").is_none_or(|t| c.kind.as_str() == t))
        .filter(|c| params.get("trending").is_none() || c.is_trending)
        .filter(|c| {
            search.as_ref().is_none_or(|s| {
                c.title.to_lowercase().contains(s) || c.store_name.to_lowercase().contains(s)
            })
        })
        .collect();

    let limit: usize = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(filtered.len());

    if !data.paginate {
        // Legacy backend: `limit` alone truncates, pages are not honoured
        let items: Vec<_> = if params.contains_key("page") {
            filtered
        } else {
            filtered.into_iter().take(limit).collect()
        };
        return ok(to_json(items));
    }

    let page: usize = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1);
    let items: Vec<_> = filtered
        .iter()
        .skip((page - 1) * limit)
        .take(limit)
        .collect();
    let pagination = Pagination::new(page as u32, limit as u32, filtered.len() as u64);
    ok(json!({ "coupons": items, "pagination": pagination }))
}

async fn store_coupons(
    State(state): State<MockState>,
    uri: Uri,
    Path(slug): Path<String>,
) -> Reply {
    let data = record(&state, &uri);
    let items: Vec<_> = data
        .coupons
        .iter()
        .filter(|c| c.store_slug() == slug)
        .collect();
    ok(to_json(items))
}

async fn list_stores(State(state): State<MockState>, uri: Uri) -> Reply {
    let data = record(&state, &uri);
    ok(to_json(&data.stores))
}

async fn get_store(State(state): State<MockState>, uri: Uri, Path(slug): Path<String>) -> Reply {
    let data = record(&state, &uri);
    match data.stores.iter().find(|s| s.slug() == slug) {
        Some(store) => ok(to_json(store)),
        None => fail(StatusCode::NOT_FOUND, "Store not found"),
    }
}

async fn list_categories(State(state): State<MockState>, uri: Uri) -> Reply {
    let data = record(&state, &uri);
    ok(to_json(&data.categories))
}

async fn send_message(
    State(state): State<MockState>,
    uri: Uri,
    Json(body): Json<Value>,
) -> Reply {
    let mut data = record(&state, &uri);
    let mut message: Message = serde_json::from_value(body).unwrap();
    message.id = format!("m{}", data.messages.len() + 1);
    data.messages.push(message);
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Message sent successfully" })),
    )
}

// ============================================================================
// Auth handlers
// ============================================================================

async fn login(State(state): State<MockState>, uri: Uri, Json(req): Json<LoginRequest>) -> Reply {
    let _data = record(&state, &uri);
    if req.email == ADMIN_EMAIL && req.password == ADMIN_PASSWORD {
        let admin = admin();
        ok(json!({
            "success": true,
            "data": {
                "_id": admin.id,
                "name": admin.name,
                "email": admin.email,
                "token": ADMIN_TOKEN,
            }
        }))
    } else {
        fail(StatusCode::UNAUTHORIZED, "Invalid credentials")
    }
}

async fn me(State(state): State<MockState>, uri: Uri, headers: HeaderMap) -> Reply {
    let _data = record(&state, &uri);
    if !authorized(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Not authorized, token failed");
    }
    ok(json!({ "success": true, "data": admin() }))
}

// ============================================================================
// Admin handlers
// ============================================================================

async fn stats(State(state): State<MockState>, uri: Uri, headers: HeaderMap) -> Reply {
    let data = record(&state, &uri);
    if !authorized(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Not authorized");
    }
    let active = data.coupons.iter().filter(|c| c.is_active).count();
    ok(json!({
        "success": true,
        "data": {
            "totalStores": data.stores.len(),
            "totalCoupons": data.coupons.len(),
            "activeCoupons": active,
            "expiredCoupons": data.coupons.len() - active,
        }
    }))
}

async fn admin_stores(State(state): State<MockState>, uri: Uri, headers: HeaderMap) -> Reply {
    let data = record(&state, &uri);
    if !authorized(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Not authorized");
    }
    ok(json!({ "success": true, "data": data.stores }))
}

async fn delete_store(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Reply {
    let mut data = record(&state, &uri);
    if !authorized(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Not authorized");
    }
    if data.fail_deletes {
        return fail(StatusCode::INTERNAL_SERVER_ERROR, "Cannot delete store");
    }
    data.stores.retain(|s| s.id != id);
    ok(json!({ "message": "Store removed" }))
}

async fn update_store(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    let mut data = record(&state, &uri);
    if !authorized(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Not authorized");
    }
    let Some(slot) = data.stores.iter_mut().find(|s| s.id == id) else {
        return fail(StatusCode::NOT_FOUND, "Store not found");
    };
    let mut store: Store = serde_json::from_value(body).unwrap();
    store.id = id;
    *slot = store.clone();
    ok(json!({ "success": true, "data": store }))
}

async fn update_coupon(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    let mut data = record(&state, &uri);
    if !authorized(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Not authorized");
    }
    let Some(slot) = data.coupons.iter_mut().find(|c| c.id == id) else {
        return fail(StatusCode::NOT_FOUND, "Coupon not found");
    };
    let mut coupon: Coupon = serde_json::from_value(body).unwrap();
    coupon.id = id;
    *slot = coupon.clone();
    ok(json!({ "success": true, "data": coupon }))
}

async fn admin_coupons(State(state): State<MockState>, uri: Uri, headers: HeaderMap) -> Reply {
    let data = record(&state, &uri);
    if !authorized(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Not authorized");
    }
    ok(json!({ "success": true, "data": data.coupons }))
}

async fn create_coupon(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    let mut data = record(&state, &uri);
    if !authorized(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Not authorized");
    }
    let mut coupon: Coupon = serde_json::from_value(body).unwrap();
    coupon.id = format!("c{}", data.coupons.len() + 1000);
    data.coupons.push(coupon.clone());
    (
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": coupon })),
    )
}

async fn delete_coupon(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Reply {
    let mut data = record(&state, &uri);
    if !authorized(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Not authorized");
    }
    if data.fail_deletes {
        return fail(StatusCode::INTERNAL_SERVER_ERROR, "Cannot delete coupon");
    }
    let before = data.coupons.len();
    data.coupons.retain(|c| c.id != id);
    if data.coupons.len() == before {
        return fail(StatusCode::NOT_FOUND, "Coupon not found");
    }
    ok(json!({ "message": "Coupon removed" }))
}

async fn list_messages(State(state): State<MockState>, uri: Uri, headers: HeaderMap) -> Reply {
    let data = record(&state, &uri);
    if !authorized(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Not authorized");
    }
    ok(to_json(&data.messages))
}

async fn mark_read(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Reply {
    let mut data = record(&state, &uri);
    if !authorized(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Not authorized");
    }
    match data.messages.iter_mut().find(|m| m.id == id) {
        Some(message) => {
            message.status = shared::models::MessageStatus::Read;
            ok(json!({ "success": true }))
        }
        None => fail(StatusCode::NOT_FOUND, "Message not found"),
    }
}
