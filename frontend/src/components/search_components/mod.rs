pub mod search_input_top_bar;
pub mod filter_sidebar;
pub mod active_filter_chips;
pub mod search_panel_results_view;
pub mod search_result_list_controls;
pub mod product_result_card;
