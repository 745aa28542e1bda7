use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback used when a product record carries no usable image list.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// A product record as fetched: heterogeneous, with any field possibly
/// missing. Normalization fills display-safe defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProduct {
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

/// A display-safe product. Every field is defaulted; only active records
/// are ever exposed to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub discount_price: Option<f64>,
    pub category: Option<String>,
    pub images: Vec<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub stock_quantity: i32,
    pub is_active: bool,
    pub badge: Option<String>,
    /// Display-only placeholder when absent, not a computed aggregate.
    pub rating: f64,
    pub review_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Applies the normalization contract; each default is independent.
    pub fn from_raw(raw: RawProduct) -> Self {
        let images = match raw.images {
            Some(images) if !images.is_empty() => images,
            _ => vec![PLACEHOLDER_IMAGE.to_string()],
        };
        let now = Utc::now();
        Self {
            id: raw.id,
            name: raw.name.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            price: raw.price.unwrap_or(0.0),
            discount_price: raw.discount_price,
            category: raw.category,
            images,
            colors: raw
                .colors
                .filter(|colors| !colors.is_empty())
                .unwrap_or_else(|| vec!["Black".to_string()]),
            sizes: raw.sizes.filter(|sizes| !sizes.is_empty()).unwrap_or_else(|| {
                vec!["M".to_string(), "L".to_string(), "XL".to_string()]
            }),
            stock_quantity: raw.stock_quantity.unwrap_or(0),
            // Active unless the record explicitly says otherwise.
            is_active: raw.is_active.unwrap_or(true),
            badge: raw.badge,
            rating: raw.rating.unwrap_or(4.5),
            review_count: raw.review_count.unwrap_or(0),
            created_at: raw.created_at.unwrap_or(now),
            updated_at: raw.updated_at.unwrap_or(now),
        }
    }
}
