//! Route table
//!
//! Every public and admin screen as a typed route, with parsing from and
//! rendering to URL paths, and the guard that keeps admin screens behind
//! the login.

use std::fmt;

use shared::models::StaticPageSlug;
use shared::store_slug;

use crate::session::AuthState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    // Public
    Home,
    /// `/stores`, also reachable as `/store`
    Stores { search: Option<String> },
    Store { slug: String },
    Categories,
    Blog,
    BlogPost { slug: String },
    Coupons {
        search: Option<String>,
        category: Option<String>,
    },
    Deals { search: Option<String> },
    Trending {
        search: Option<String>,
        category: Option<String>,
    },
    Contact,
    /// about-us, privacy-policy, terms-conditions, cookie-policy
    Page(StaticPageSlug),

    // Admin
    AdminLogin,
    AdminDashboard,
    AdminStores,
    AdminStoreNew,
    AdminStoreEdit { id: String },
    AdminCoupons,
    AdminCouponNew,
    AdminCouponEdit { id: String },
    AdminCategories,
    AdminCategoryNew,
    AdminCategoryEdit { id: String },
    AdminBlogs,
    AdminBlogNew,
    AdminBlogEdit { id: String },
    AdminPages,
    AdminPageEdit { slug: String },
    AdminSettings,
    AdminMessages,
}

impl Route {
    /// Store page for a store name
    pub fn store_for(name: &str) -> Self {
        Route::Store {
            slug: store_slug(name),
        }
    }

    /// Every `/admin/*` route except the login screen
    pub fn requires_auth(&self) -> bool {
        self.is_admin() && *self != Route::AdminLogin
    }

    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Route::AdminLogin
                | Route::AdminDashboard
                | Route::AdminStores
                | Route::AdminStoreNew
                | Route::AdminStoreEdit { .. }
                | Route::AdminCoupons
                | Route::AdminCouponNew
                | Route::AdminCouponEdit { .. }
                | Route::AdminCategories
                | Route::AdminCategoryNew
                | Route::AdminCategoryEdit { .. }
                | Route::AdminBlogs
                | Route::AdminBlogNew
                | Route::AdminBlogEdit { .. }
                | Route::AdminPages
                | Route::AdminPageEdit { .. }
                | Route::AdminSettings
                | Route::AdminMessages
        )
    }

    /// Parse a path with an optional query string. Unknown paths give `None`.
    pub fn parse(url: &str) -> Option<Self> {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        let param = |key: &str| query_param(query, key);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Route::Home,
            ["stores"] | ["store"] => Route::Stores {
                search: param("search"),
            },
            ["store", slug] => Route::Store {
                slug: decode(slug),
            },
            ["categories"] => Route::Categories,
            ["blog"] => Route::Blog,
            ["blog", slug] => Route::BlogPost {
                slug: decode(slug),
            },
            ["coupons"] => Route::Coupons {
                search: param("search"),
                category: param("category").map(|c| capitalize(&c)),
            },
            ["deals"] => Route::Deals {
                search: param("search"),
            },
            ["trending"] => Route::Trending {
                search: param("search"),
                category: param("category").map(|c| capitalize(&c)),
            },
            ["contact-us"] => Route::Contact,

            ["admin", "login"] => Route::AdminLogin,
            ["admin"] | ["admin", "dashboard"] => Route::AdminDashboard,
            ["admin", "stores"] => Route::AdminStores,
            ["admin", "stores", "new"] => Route::AdminStoreNew,
            ["admin", "stores", "edit", id] => Route::AdminStoreEdit { id: decode(id) },
            ["admin", "coupons"] => Route::AdminCoupons,
            ["admin", "coupons", "new"] => Route::AdminCouponNew,
            ["admin", "coupons", "edit", id] => Route::AdminCouponEdit { id: decode(id) },
            ["admin", "categories"] => Route::AdminCategories,
            ["admin", "categories", "new"] => Route::AdminCategoryNew,
            ["admin", "categories", "edit", id] => Route::AdminCategoryEdit { id: decode(id) },
            ["admin", "blogs"] => Route::AdminBlogs,
            ["admin", "blogs", "new"] => Route::AdminBlogNew,
            ["admin", "blogs", "edit", id] => Route::AdminBlogEdit { id: decode(id) },
            ["admin", "pages"] => Route::AdminPages,
            ["admin", "pages", "edit", slug] => Route::AdminPageEdit {
                slug: decode(slug),
            },
            ["admin", "settings"] => Route::AdminSettings,
            ["admin", "messages"] => Route::AdminMessages,
            [page] => Route::Page(page.parse().ok()?),
            _ => return None,
        };
        Some(route)
    }
}

fn decode(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

/// Category links use lowercase names; the filter wants the display name
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| decode(&v.replace('+', " ")))
        .filter(|v| !v.trim().is_empty())
}

/// Appends `?k=v&...` for the present values
fn write_query(f: &mut fmt::Formatter<'_>, params: &[(&str, &Option<String>)]) -> fmt::Result {
    let mut sep = '?';
    for (key, value) in params {
        if let Some(value) = value {
            write!(f, "{}{}={}", sep, key, urlencoding::encode(value))?;
            sep = '&';
        }
    }
    Ok(())
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Stores { search } => {
                f.write_str("/stores")?;
                write_query(f, &[("search", search)])
            }
            Route::Store { slug } => write!(f, "/store/{}", urlencoding::encode(slug)),
            Route::Categories => f.write_str("/categories"),
            Route::Blog => f.write_str("/blog"),
            Route::BlogPost { slug } => write!(f, "/blog/{}", urlencoding::encode(slug)),
            Route::Coupons { search, category } => {
                f.write_str("/coupons")?;
                write_query(f, &[("search", search), ("category", category)])
            }
            Route::Deals { search } => {
                f.write_str("/deals")?;
                write_query(f, &[("search", search)])
            }
            Route::Trending { search, category } => {
                f.write_str("/trending")?;
                write_query(f, &[("search", search), ("category", category)])
            }
            Route::Contact => f.write_str("/contact-us"),
            Route::Page(slug) => write!(f, "/{}", slug),
            Route::AdminLogin => f.write_str("/admin/login"),
            Route::AdminDashboard => f.write_str("/admin/dashboard"),
            Route::AdminStores => f.write_str("/admin/stores"),
            Route::AdminStoreNew => f.write_str("/admin/stores/new"),
            Route::AdminStoreEdit { id } => write!(f, "/admin/stores/edit/{}", id),
            Route::AdminCoupons => f.write_str("/admin/coupons"),
            Route::AdminCouponNew => f.write_str("/admin/coupons/new"),
            Route::AdminCouponEdit { id } => write!(f, "/admin/coupons/edit/{}", id),
            Route::AdminCategories => f.write_str("/admin/categories"),
            Route::AdminCategoryNew => f.write_str("/admin/categories/new"),
            Route::AdminCategoryEdit { id } => write!(f, "/admin/categories/edit/{}", id),
            Route::AdminBlogs => f.write_str("/admin/blogs"),
            Route::AdminBlogNew => f.write_str("/admin/blogs/new"),
            Route::AdminBlogEdit { id } => write!(f, "/admin/blogs/edit/{}", id),
            Route::AdminPages => f.write_str("/admin/pages"),
            Route::AdminPageEdit { slug } => write!(f, "/admin/pages/edit/{}", slug),
            Route::AdminSettings => f.write_str("/admin/settings"),
            Route::AdminMessages => f.write_str("/admin/messages"),
        }
    }
}

/// Guard decision for a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(Route),
    /// Session still being restored; show a spinner
    Pending,
}

pub fn guard(route: &Route, state: &AuthState) -> Access {
    if !route.requires_auth() {
        return Access::Allow;
    }
    match state {
        AuthState::Loading => Access::Pending,
        AuthState::Authenticated(_) => Access::Allow,
        AuthState::Unauthenticated => Access::Redirect(Route::AdminLogin),
    }
}
