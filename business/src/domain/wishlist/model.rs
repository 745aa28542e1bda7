use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved-for-later product. No quantities, no sizes: the wishlist is a
/// set keyed by product id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub images: Vec<String>,
    pub category: String,
    pub added_at: DateTime<Utc>,
}

pub struct NewWishlistItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub images: Vec<String>,
    pub category: String,
}

impl WishlistItem {
    /// Stamps the insertion time; `added_at` is set once and never updated.
    pub fn new(props: NewWishlistItem) -> Self {
        Self {
            product_id: props.product_id,
            name: props.name,
            price: props.price,
            images: props.images,
            category: props.category,
            added_at: Utc::now(),
        }
    }
}
