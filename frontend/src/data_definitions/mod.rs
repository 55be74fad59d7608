pub mod cart_store;
pub mod search_filter_control;
