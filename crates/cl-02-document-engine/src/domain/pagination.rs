//! # Ledger Pagination
//!
//! Page math for the signature section. Pages are 1-based. Page numbers
//! are not validated or clamped: an out-of-range page (including page 0)
//! yields an empty slice and the caller renders every other section
//! normally.

/// Number of pages needed for `total` items at `per_page` items per page.
///
/// A `per_page` of 0 is treated as 1.
#[must_use]
pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1))
}

/// The slice of `items` belonging to a 1-based `page`.
///
/// Out-of-range pages yield an empty slice. Slices for consecutive pages
/// are disjoint and jointly cover the full list in order.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let per_page = per_page.max(1);
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

/// Index of the first item on a 1-based `page` (0-based, for ordinals).
#[must_use]
pub fn page_offset(page: usize, per_page: usize) -> usize {
    page.saturating_sub(1).saturating_mul(per_page.max(1))
}
