//! Matching and ranking of catalog products against a search query.

use std::cmp::Ordering;

use common::{
    search_query::{ProductSearchQuery, SortBy},
    search_result::Product,
};

/// Relevance score when `product` passes every filter in `query`, `None` otherwise.
///
/// Every term must occur in the name, the description or a tag. A term found in
/// the name scores 2, elsewhere 1.
pub fn match_product(product: &Product, query: &ProductSearchQuery, terms: &[String]) -> Option<u64> {
    if query.category.as_ref().is_some_and(|c| *c != product.category_id) {
        return None;
    }
    if query.brand.as_ref().is_some_and(|b| *b != product.brand_id) {
        return None;
    }
    if query.min_price.is_some_and(|min| product.price < min) {
        return None;
    }
    if query.max_price.is_some_and(|max| product.price > max) {
        return None;
    }

    let name = product.name.to_lowercase();
    let description = product.description.to_lowercase();
    let mut score = 0;
    for term in terms {
        if name.contains(term.as_str()) {
            score += 2;
        } else if description.contains(term.as_str())
            || product.tags.iter().any(|t| t.to_lowercase().contains(term.as_str()))
        {
            score += 1;
        } else {
            return None;
        }
    }
    Some(score)
}

/// Order two scored products; ties keep catalog order because the sort is stable.
pub fn compare_products(sort_by: SortBy, a: (&Product, u64), b: (&Product, u64)) -> Ordering {
    let by_name = || a.0.name.to_lowercase().cmp(&b.0.name.to_lowercase());
    match sort_by {
        SortBy::Relevance => b.1.cmp(&a.1),
        SortBy::PriceAsc => a.0.price.cmp(&b.0.price).then_with(by_name),
        SortBy::PriceDesc => b.0.price.cmp(&a.0.price).then_with(by_name),
        SortBy::Newest => b.0.created_at.cmp(&a.0.created_at),
        SortBy::NameAsc => by_name(),
    }
}
