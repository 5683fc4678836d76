mod blog;
mod contact;
mod patch;
mod service;

pub use blog::*;
pub use contact::*;
pub use patch::Patch;
pub use service::*;

/// Pagination block attached to every paged listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u64,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit))
        };
        Self {
            page,
            limit,
            total,
            pages,
        }
    }
}
