//! Client cart, owned by the application root and shared through context.

use common::{cart::CartState, search_result::Product};
use dioxus::{logger::tracing::info, prelude::*};

#[derive(Clone, Copy, PartialEq)]
pub struct CartStore {
    cart: Signal<CartState>,
}

impl CartStore {
    pub fn new() -> Self {
        Self { cart: Signal::new(CartState::new()) }
    }

    /// Current contents. Reading subscribes the calling component.
    pub fn state(&self) -> CartState {
        self.cart.read().clone()
    }

    pub fn item_count(&self) -> u32 {
        self.cart.read().item_count()
    }

    pub fn add(mut self, product: &Product, quantity: u32) {
        self.cart.write().add(product, quantity);
        info!("cart: added {} x {}", quantity, product.id);
    }

    pub fn set_quantity(mut self, product_id: &str, quantity: u32) {
        self.cart.write().set_quantity(product_id, quantity);
        info!("cart: {} quantity set to {}", product_id, quantity);
    }

    pub fn remove(mut self, product_id: &str) {
        self.cart.write().remove(product_id);
        info!("cart: removed {}", product_id);
    }

    pub fn clear(mut self) {
        self.cart.write().clear();
        info!("cart: cleared");
    }
}

pub fn use_cart() -> CartStore {
    use_context::<CartStore>()
}
