use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::wishlist::model::WishlistItem;

#[derive(Debug, Clone, Object)]
pub struct AddWishlistItemRequest {
    /// Catalog product identifier
    pub product_id: String,
    /// Display name at the time of saving
    pub name: String,
    /// Price in rupees at the time of saving
    pub price: f64,
    /// Product image URLs
    pub images: Vec<String>,
    /// Product category
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct WishlistItemResponse {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub images: Vec<String>,
    pub category: String,
    /// When the product was saved
    pub added_at: DateTime<Utc>,
}

impl From<WishlistItem> for WishlistItemResponse {
    fn from(item: WishlistItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            images: item.images,
            category: item.category,
            added_at: item.added_at,
        }
    }
}
