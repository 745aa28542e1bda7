use serde::{Deserialize, Serialize};

/// One row of the cart. Row identity is the `(product_id, size)` pair:
/// the same product in two sizes is two rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    /// Unit price in the display currency (whole-rupee decimal, not paise).
    pub unit_price: f64,
    pub image: String,
    /// May be empty for products without a size dimension.
    pub size: String,
    pub color: Option<String>,
    pub quantity: u32,
}

/// Payload of an add-to-cart action; quantity always starts at 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCartItem {
    pub product_id: String,
    pub name: String,
    pub unit_price: f64,
    pub image: String,
    pub size: String,
    pub color: Option<String>,
}

impl CartItem {
    pub fn from_new(new: NewCartItem) -> Self {
        Self {
            product_id: new.product_id,
            name: new.name,
            unit_price: new.unit_price,
            image: new.image,
            size: new.size,
            color: new.color,
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// The in-session cart. Items keep insertion order, which is also display
/// order. Totals are derived on every read and never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a state from an item snapshot (e.g. a checkout request).
    pub fn with_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<CartItem> {
        &mut self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, quantity: u32) -> CartItem {
        CartItem {
            product_id: id.to_string(),
            name: format!("Product {id}"),
            unit_price: price,
            image: "/placeholder.svg".to_string(),
            size: "M".to_string(),
            color: None,
            quantity,
        }
    }

    #[test]
    fn should_derive_total_from_price_times_quantity() {
        let state = CartState::with_items(vec![item("a", 499.0, 2), item("b", 1299.0, 1)]);

        assert_eq!(state.total(), 499.0 * 2.0 + 1299.0);
        assert_eq!(state.item_count(), 3);
    }

    #[test]
    fn should_report_empty_cart() {
        let state = CartState::new();

        assert!(state.is_empty());
        assert_eq!(state.total(), 0.0);
        assert_eq!(state.item_count(), 0);
    }

    #[test]
    fn should_default_quantity_to_one_on_add() {
        let added = CartItem::from_new(NewCartItem {
            product_id: "a".to_string(),
            name: "Tee".to_string(),
            unit_price: 499.0,
            image: "/tee.jpg".to_string(),
            size: "L".to_string(),
            color: Some("Black".to_string()),
        });

        assert_eq!(added.quantity, 1);
    }
}
