pub mod home_page;
pub mod search_page;
pub mod cart_page;
