//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod location;
pub mod filter_state;
pub mod search_filter;
pub mod active_filters;
pub mod search_query;
pub mod search_result;
pub mod cart;
