//! Human-readable summary of the filters currently narrowing a search.

use crate::{
    filter_state::{FilterField, FilterState},
    search_filter::{FilterUpdate, set_fields},
};

/// Resolves category and brand identifiers to display names.
pub trait FilterNameLookup {
    fn category_name(&self, id: &str) -> Option<String>;
    fn brand_name(&self, id: &str) -> Option<String>;
}

/// Display formatting for price bounds. Only affects labels, never the stored state.
pub trait PriceFormatter {
    fn format_price(&self, raw: &str) -> String;
}

/// Groups the integer part in thousands (`1234567` -> `1,234,567`) and appends a currency suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedPriceFormatter {
    pub currency_suffix: String,
}

impl Default for GroupedPriceFormatter {
    fn default() -> Self {
        Self { currency_suffix: " ₫".to_string() }
    }
}

impl PriceFormatter for GroupedPriceFormatter {
    fn format_price(&self, raw: &str) -> String {
        let raw = raw.trim();
        let (int_part, frac_part) = match raw.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (raw, None),
        };
        let numeric = !int_part.is_empty()
            && int_part.bytes().all(|b| b.is_ascii_digit())
            && frac_part.is_none_or(|f| f.bytes().all(|b| b.is_ascii_digit()));
        if !numeric {
            return raw.to_string();
        }

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if let Some(frac) = frac_part.filter(|f| !f.is_empty()) {
            grouped.push('.');
            grouped.push_str(frac);
        }
        grouped.push_str(&self.currency_suffix);
        grouped
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveFilterKind {
    Category,
    Brand,
    Price,
}

impl ActiveFilterKind {
    /// Display prefix; also unique per summary, since each kind appears at most once.
    pub fn name(self) -> &'static str {
        match self {
            ActiveFilterKind::Category => "Category",
            ActiveFilterKind::Brand => "Brand",
            ActiveFilterKind::Price => "Price",
        }
    }
}

/// One active filter as shown to the user, with the fields its removal clears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilter {
    pub kind: ActiveFilterKind,
    pub label: String,
    pub clears: Vec<FilterField>,
}

impl ActiveFilter {
    /// Clear every field behind this filter in a single update.
    pub fn remove(&self, state: &FilterState) -> FilterUpdate {
        set_fields(state, self.clears.iter().map(|field| (*field, String::new())))
    }
}

/// Active filters in display order: category, brand, then the price range.
pub fn active_filter_summary(
    state: &FilterState,
    names: &impl FilterNameLookup,
    prices: &impl PriceFormatter,
) -> Vec<ActiveFilter> {
    let mut summary = Vec::new();

    if !state.category.is_empty() {
        summary.push(ActiveFilter {
            kind: ActiveFilterKind::Category,
            label: names.category_name(&state.category).unwrap_or_else(|| state.category.clone()),
            clears: vec![FilterField::Category],
        });
    }

    if !state.brand.is_empty() {
        summary.push(ActiveFilter {
            kind: ActiveFilterKind::Brand,
            label: names.brand_name(&state.brand).unwrap_or_else(|| state.brand.clone()),
            clears: vec![FilterField::Brand],
        });
    }

    let label = match (state.min_price.is_empty(), state.max_price.is_empty()) {
        (false, false) => Some(format!(
            "{} - {}",
            prices.format_price(&state.min_price),
            prices.format_price(&state.max_price)
        )),
        (false, true) => Some(format!("From {}", prices.format_price(&state.min_price))),
        (true, false) => Some(format!("Up to {}", prices.format_price(&state.max_price))),
        (true, true) => None,
    };
    if let Some(label) = label {
        summary.push(ActiveFilter {
            kind: ActiveFilterKind::Price,
            label,
            clears: vec![FilterField::MinPrice, FilterField::MaxPrice],
        });
    }

    summary
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct Names(HashMap<&'static str, &'static str>);

    impl FilterNameLookup for Names {
        fn category_name(&self, id: &str) -> Option<String> {
            self.0.get(id).map(|n| n.to_string())
        }
        fn brand_name(&self, id: &str) -> Option<String> {
            self.0.get(id).map(|n| n.to_string())
        }
    }

    fn names() -> Names {
        Names(HashMap::from([("c1", "Phones"), ("b2", "Acme")]))
    }

    #[test]
    fn no_filters_no_entries() {
        let summary =
            active_filter_summary(&FilterState::default(), &names(), &GroupedPriceFormatter::default());
        assert!(summary.is_empty());
    }

    #[test]
    fn query_and_sort_are_not_filters() {
        let state = FilterState {
            query: "phone".to_string(),
            sort_by: "newest".to_string(),
            ..FilterState::default()
        };
        assert!(active_filter_summary(&state, &names(), &GroupedPriceFormatter::default()).is_empty());
    }

    #[test]
    fn price_range_is_one_entry_clearing_both_bounds() {
        let state = FilterState {
            min_price: "100000".to_string(),
            max_price: "200000".to_string(),
            page: 4,
            ..FilterState::default()
        };
        let summary = active_filter_summary(&state, &names(), &GroupedPriceFormatter::default());
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].kind, ActiveFilterKind::Price);
        assert_eq!(summary[0].label, "100,000 ₫ - 200,000 ₫");

        let update = summary[0].remove(&state);
        assert_eq!(update.state.min_price, "");
        assert_eq!(update.state.max_price, "");
        assert_eq!(update.state.page, 1);
        assert!(update.location.is_empty());
    }

    #[test]
    fn entries_are_ordered_category_brand_price() {
        let state = FilterState {
            category: "c1".to_string(),
            brand: "b2".to_string(),
            max_price: "5000".to_string(),
            ..FilterState::default()
        };
        let summary = active_filter_summary(&state, &names(), &GroupedPriceFormatter::default());
        let labels: Vec<_> = summary.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, ["Phones", "Acme", "Up to 5,000 ₫"]);

        let update = summary[1].remove(&state);
        assert_eq!(update.state.brand, "");
        assert_eq!(update.state.category, "c1");
    }

    #[test]
    fn kinds_stay_distinct_when_labels_collide() {
        let names = Names(HashMap::from([("c1", "Apple"), ("b1", "Apple")]));
        let state = FilterState {
            category: "c1".to_string(),
            brand: "b1".to_string(),
            ..FilterState::default()
        };
        let summary = active_filter_summary(&state, &names, &GroupedPriceFormatter::default());
        assert_eq!(summary[0].label, summary[1].label);
        let keys: Vec<_> = summary.iter().map(|f| f.kind.name()).collect();
        assert_eq!(keys, ["Category", "Brand"]);
    }

    #[test]
    fn unknown_ids_fall_back_to_the_id() {
        let state = FilterState { category: "zz".to_string(), ..FilterState::default() };
        let summary = active_filter_summary(&state, &names(), &GroupedPriceFormatter::default());
        assert_eq!(summary[0].label, "zz");
    }

    #[test]
    fn min_only_label() {
        let state = FilterState { min_price: "999".to_string(), ..FilterState::default() };
        let summary = active_filter_summary(&state, &names(), &GroupedPriceFormatter::default());
        assert_eq!(summary[0].label, "From 999 ₫");
    }

    #[test]
    fn formatter_groups_and_passes_through_garbage() {
        let f = GroupedPriceFormatter { currency_suffix: String::new() };
        assert_eq!(f.format_price("1234567"), "1,234,567");
        assert_eq!(f.format_price("1234.50"), "1,234.50");
        assert_eq!(f.format_price("12"), "12");
        assert_eq!(f.format_price("cheap"), "cheap");
        assert_eq!(f.format_price("-5"), "-5");
    }
}
