use common::{
    filter_state::{FilterField, FilterState},
    location::LocationDescriptor,
    search_filter::{clear, set_field},
};
use proptest::prelude::*;

// Field values as they come from form inputs: arbitrary text, including
// characters that need percent-encoding.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z0-9]{1,8}", "\\PC{0,12}"]
}

fn arb_sort() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("relevance".to_string()),
        Just("price_asc".to_string()),
        Just("newest".to_string()),
        "[a-z_]{1,10}",
    ]
}

prop_compose! {
    fn arb_state()(
        query in arb_text(),
        category in arb_text(),
        brand in arb_text(),
        min_price in prop_oneof![Just(String::new()), (0u64..10_000_000).prop_map(|p| p.to_string())],
        max_price in prop_oneof![Just(String::new()), (0u64..10_000_000).prop_map(|p| p.to_string())],
        sort_by in arb_sort(),
        page in 1u32..500,
    ) -> FilterState {
        FilterState { query, category, brand, min_price, max_price, sort_by, page }
    }
}

fn arb_field() -> impl Strategy<Value = FilterField> {
    prop::sample::select(FilterField::ALL.to_vec())
}

proptest! {
    /// Property: parse(serialize(state)) == state, also through the query string.
    #[test]
    fn prop_round_trip(state in arb_state()) {
        let location = state.serialize();
        prop_assert_eq!(&FilterState::parse(&location), &state);

        let reparsed = LocationDescriptor::from_query_string(&location.to_query_string());
        prop_assert_eq!(FilterState::parse(&reparsed), state);
    }

    /// Property: serialized locations never carry empty values.
    #[test]
    fn prop_no_empty_values_serialized(state in arb_state()) {
        for (key, value) in state.serialize().iter() {
            prop_assert!(!value.is_empty(), "{} serialized empty", key);
        }
    }

    /// Property: any field other than page resets the page to 1.
    #[test]
    fn prop_filter_change_resets_page(state in arb_state(), field in arb_field(), value in arb_text()) {
        prop_assume!(field != FilterField::Page);
        let update = set_field(&state, field, value);
        prop_assert_eq!(update.state.page, 1);
        prop_assert!(!update.location.contains_key("page"));
        prop_assert_eq!(FilterState::parse(&update.location), update.state);
    }

    /// Property: setting the page changes nothing else.
    #[test]
    fn prop_page_change_preserves_fields(state in arb_state(), page in 1u32..10_000) {
        let update = set_field(&state, FilterField::Page, page.to_string());
        prop_assert_eq!(update.state, FilterState { page, ..state });
    }

    /// Property: clear keeps the query and resets everything else.
    #[test]
    fn prop_clear_preserves_query(state in arb_state()) {
        let update = clear(&state);
        let expected = FilterState { query: state.query.clone(), ..FilterState::default() };
        prop_assert_eq!(&update.state, &expected);
        prop_assert_eq!(update.location.get("sortBy"), Some("relevance"));
        prop_assert_eq!(FilterState::parse(&update.location), expected);
    }
}
