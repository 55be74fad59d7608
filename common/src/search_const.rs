//! Search defaults shared between the client and the server.

/// Sort mode used when the location does not name one.
pub const DEFAULT_SORT_BY: &str = "relevance";

/// First page of results; pages are 1-based.
pub const DEFAULT_PAGE: u32 = 1;

/// Number of products per result page.
pub const PAGE_SIZE: u64 = 12;

/// Sort modes offered in the UI, as `(url value, display label)`.
pub const SORT_MODES: &[(&str, &str)] = &[
    ("relevance", "Relevance"),
    ("price_asc", "Price: low to high"),
    ("price_desc", "Price: high to low"),
    ("newest", "Newest"),
    ("name_asc", "Name: A to Z"),
];
