//! Page navigation controls

/// One numbered pager button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: u32,
    pub active: bool,
}

/// Previous / numbered / next controls for a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current: u32,
    pub total_pages: u32,
}

impl Pager {
    pub fn new(current: u32, total_pages: u32) -> Self {
        Self {
            current: current.max(1),
            total_pages: total_pages.max(1),
        }
    }

    /// One button per page, no truncation
    pub fn buttons(&self) -> Vec<PageButton> {
        (1..=self.total_pages)
            .map(|number| PageButton {
                number,
                active: number == self.current,
            })
            .collect()
    }

    pub fn can_previous(&self) -> bool {
        self.current > 1
    }

    pub fn can_next(&self) -> bool {
        self.current < self.total_pages
    }

    pub fn previous(&self) -> Option<u32> {
        self.can_previous().then(|| self.current - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.can_next().then(|| self.current + 1)
    }

    /// Whether the pager is worth rendering at all
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }
}
