use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::catalog::model::RawProduct;

/// Product rows come straight out of a loosely managed catalog table, so
/// every column beyond the id is nullable. They map to the raw shape and
/// leave defaulting to the domain.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub discount_price: Option<f64>,
    pub category: Option<String>,
    pub images: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub sizes: Option<Vec<String>>,
    pub stock_quantity: Option<i32>,
    pub is_active: Option<bool>,
    pub badge: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProductEntity {
    pub fn into_raw(self) -> RawProduct {
        RawProduct {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            discount_price: self.discount_price,
            category: self.category,
            images: self.images,
            colors: self.colors,
            sizes: self.sizes,
            stock_quantity: self.stock_quantity,
            is_active: self.is_active,
            badge: self.badge,
            rating: self.rating,
            review_count: self.review_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
