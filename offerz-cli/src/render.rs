//! Text rendering of pages

use std::fmt::Write;

use chrono::NaiveDate;
use offerz_client::catalog::listing::{EMPTY_STATE_HINT, EMPTY_STATE_TITLE};
use offerz_client::catalog::{Pager, Viewport};
use offerz_client::models::{
    BlogPost, Category, Coupon, CouponKind, DashboardStats, Logo, Message, Store,
};
use offerz_client::{Notice, Suggestions};

/// Terminal the pages are printed on
pub struct Screen {
    clear: bool,
}

impl Screen {
    pub fn new(clear: bool) -> Self {
        Self { clear }
    }
}

impl Viewport for Screen {
    fn scroll_to_top(&mut self) {
        if self.clear {
            print!("\x1B[2J\x1B[H");
        }
    }
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn heading(title: &str) -> String {
    format!("\n{}\n{}\n", title, "=".repeat(title.chars().count()))
}

pub fn logo(logo: Logo<'_>) -> String {
    match logo {
        Logo::Image(_) => "[img]".to_string(),
        Logo::Text(text) => format!("[{}]", text),
        Logo::Emoji(emoji) => emoji.to_string(),
    }
}

pub fn coupon_card(coupon: &Coupon, today: NaiveDate) -> String {
    let mut out = String::new();
    let badge = coupon.store_logo().map(logo).unwrap_or_default();
    let _ = write!(out, "{} {} · {}", badge, coupon.store_name, coupon.title);
    if let Some(discount) = coupon.discount.as_deref().filter(|d| !d.is_empty()) {
        let _ = write!(out, " ({})", discount);
    }
    let _ = write!(out, "\n    {}", coupon.kind);
    match coupon.reveal_code() {
        Some(code) => {
            let _ = write!(out, " · code {}", code);
        }
        None if coupon.kind == CouponKind::Deal => out.push_str(" · no code needed"),
        None => {}
    }
    if coupon.is_trending {
        out.push_str(" · trending");
    }
    if let Some(expiry) = coupon.expiry_date() {
        if coupon.is_expired_on(today) {
            out.push_str(" · expired");
        } else {
            let _ = write!(out, " · expires {}", expiry);
        }
    }
    let _ = write!(out, " · {}", coupon.usage_label());
    out
}

pub fn coupon_list(coupons: &[Coupon]) -> String {
    let today = today();
    coupons
        .iter()
        .map(|c| format!("  {}", coupon_card(c, today)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn empty_state() -> String {
    format!("  {}\n  {}", EMPTY_STATE_TITLE, EMPTY_STATE_HINT)
}

/// `‹ Prev  1 [2] 3  Next ›`, nothing for a single page
pub fn pager(pager: &Pager) -> String {
    if !pager.is_visible() {
        return String::new();
    }
    let buttons = pager
        .buttons()
        .iter()
        .map(|b| {
            if b.active {
                format!("[{}]", b.number)
            } else {
                b.number.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let prev = if pager.can_previous() { "‹ Prev" } else { "      " };
    let next = if pager.can_next() { "Next ›" } else { "" };
    format!("{}  {}  {}", prev, buttons, next).trim_end().to_string()
}

pub fn store_line(store: &Store) -> String {
    let mut line = format!("{} {}", logo(store.logo()), store.name);
    if store.offers > 0 {
        let _ = write!(line, " · {} offers", store.offers);
    }
    let _ = write!(line, "  /store/{}", store.slug());
    line
}

pub fn admin_store_line(store: &Store) -> String {
    format!(
        "{:<26} {:<24} {:<14} {}",
        store.id,
        store.name,
        store.category.as_deref().unwrap_or("-"),
        if store.is_active { "active" } else { "inactive" }
    )
}

pub fn admin_coupon_line(coupon: &Coupon) -> String {
    format!(
        "{:<26} {:<18} {:<5} {}",
        coupon.id, coupon.store_name, coupon.kind, coupon.title
    )
}

pub fn category_line(category: &Category) -> String {
    let mut line = format!("{} {}", logo(category.badge()), category.name);
    if category.coupon_count > 0 {
        let _ = write!(line, " ({})", category.coupon_count);
    }
    line
}

pub fn blog_line(post: &BlogPost) -> String {
    let mut line = format!("{}  /blog/{}", post.title, post.slug);
    if !post.excerpt.is_empty() {
        let _ = write!(line, "\n    {}", post.excerpt);
    }
    line
}

pub fn message_line(message: &Message) -> String {
    let flag = if message.is_unread() { "●" } else { " " };
    format!(
        "{} {:<26} {} <{}> · {}",
        flag, message.id, message.name, message.email, message.subject
    )
}

pub fn stats(stats: &DashboardStats) -> String {
    format!(
        "  Stores          {}\n  Coupons         {}\n  Active coupons  {}\n  Expired coupons {}",
        stats.total_stores, stats.total_coupons, stats.active_coupons, stats.expired_coupons
    )
}

pub fn suggestions(found: &Suggestions<'_>) -> String {
    found
        .iter()
        .map(|s| format!("  {:<40} → {}", s.label(), s.route()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop tags from server HTML, keeping line breaks at block ends
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    let mut tag = String::new();
    for ch in html.chars() {
        match ch {
            '<' => {
                in_tag = true;
                tag.clear();
            }
            '>' if in_tag => {
                in_tag = false;
                let name = tag.trim_start_matches('/').to_ascii_lowercase();
                if matches!(name.split_whitespace().next(), Some("p" | "br" | "br/" | "h1" | "h2" | "h3" | "li" | "div")) {
                    out.push('\n');
                }
            }
            _ if in_tag => tag.push(ch),
            _ => out.push(ch),
        }
    }
    out.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn notice(notice: &Notice) {
    if notice.is_error() {
        eprintln!("{}", notice);
    } else {
        println!("{}", notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pager_text() {
        assert_eq!(pager(&Pager::new(2, 3)), "‹ Prev  1 [2] 3  Next ›");
        assert_eq!(pager(&Pager::new(3, 3)), "‹ Prev  1 2 [3]");
        assert_eq!(pager(&Pager::new(1, 1)), "");
    }

    #[test]
    fn test_coupon_card() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        let coupon = Coupon {
            store_name: "Nike".into(),
            title: "20% off".into(),
            kind: CouponKind::Code,
            code: Some("NIKE20".into()),
            expiry: Some("2026-01-09T00:00:00.000Z".into()),
            usage_count: Some(4),
            ..Default::default()
        };
        let card = coupon_card(&coupon, today);
        assert!(card.contains("code NIKE20"));
        assert!(card.contains("expired"));
        assert!(card.contains("4 used"));

        let deal = Coupon {
            kind: CouponKind::Deal,
            code: Some("IGNORED".into()),
            expiry: None,
            usage_count: None,
            ..coupon
        };
        let card = coupon_card(&deal, today);
        assert!(card.contains("no code needed"));
        assert!(!card.contains("IGNORED"));
        assert!(card.contains("Not used yet"));
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(
            strip_html("<h1>About</h1><p>We find <b>deals</b>.</p><p>Daily.</p>"),
            "About\nWe find deals.\nDaily."
        );
    }
}
