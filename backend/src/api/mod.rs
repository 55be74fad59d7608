pub mod search;
pub mod catalog;
