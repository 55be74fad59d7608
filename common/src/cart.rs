//! Shopping cart state container.
//!
//! The client owns one [`CartState`] at the application root and hands it to the
//! components that need it; nothing here is global.

use serde::{Deserialize, Serialize};

use crate::search_result::Product;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CartState {
    pub lines: Vec<CartLine>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `product`, merging with an existing line for the same product.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                product_id: product.id.clone(),
                name: product.name.clone(),
                unit_price: product.price,
                quantity,
            }),
        }
    }

    /// Quantity 0 removes the line.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.lines
            .iter()
            .find(|l| l.product_id == product_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }

    pub fn subtotal(&self) -> u64 {
        self.lines.iter().fold(0u64, |acc, l| acc.saturating_add(l.line_total()))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: u64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            description: String::new(),
            category_id: "c1".to_string(),
            brand_id: "b1".to_string(),
            price,
            tags: vec![],
            image_url: None,
            created_at: 0,
        }
    }

    #[test]
    fn add_merges_lines() {
        let mut cart = CartState::new();
        cart.add(&product("p1", 100), 1);
        cart.add(&product("p2", 50), 2);
        cart.add(&product("p1", 100), 2);
        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.quantity_of("p1"), 3);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.subtotal(), 400);
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let mut cart = CartState::new();
        cart.add(&product("p1", u64::MAX), u32::MAX);
        cart.add(&product("p2", 1), 1);
        assert_eq!(cart.item_count(), u32::MAX);
        assert_eq!(cart.subtotal(), u64::MAX);
    }

    #[test]
    fn zero_quantity_removes() {
        let mut cart = CartState::new();
        cart.add(&product("p1", 100), 0);
        assert!(cart.is_empty());
        cart.add(&product("p1", 100), 4);
        cart.set_quantity("p1", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_on_missing_line_is_noop() {
        let mut cart = CartState::new();
        cart.set_quantity("nope", 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn separate_instances_are_isolated() {
        let mut a = CartState::new();
        let b = CartState::new();
        a.add(&product("p1", 10), 1);
        assert_eq!(a.item_count(), 1);
        assert_eq!(b.item_count(), 0);
        a.clear();
        assert_eq!(a.subtotal(), 0);
    }
}
