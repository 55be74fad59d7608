use common::{filter_state::FilterState, location::LocationDescriptor};
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::cart_page::CartPage;
use crate::pages::home_page::HomePage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/search?:..location")]
    SearchPage {
        location: LocationDescriptor,
    },


    #[route("/cart")]
    CartPage {},

}

impl Route {
    pub fn search_page_from_filters(filters: &FilterState) -> Self {
        Self::SearchPage { location: filters.serialize() }
    }
}
