use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::catalog::model::Product;

/// A display-safe catalog product; every field has already been
/// normalized by the reader.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in rupees
    pub price: f64,
    /// Discounted price, when a sale is running
    #[oai(skip_serializing_if_is_none)]
    pub discount_price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    pub images: Vec<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub stock_quantity: i32,
    #[oai(skip_serializing_if_is_none)]
    pub badge: Option<String>,
    pub rating: f64,
    pub review_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            discount_price: product.discount_price,
            category: product.category,
            images: product.images,
            colors: product.colors,
            sizes: product.sizes,
            stock_quantity: product.stock_quantity,
            badge: product.badge,
            rating: product.rating,
            review_count: product.review_count,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
