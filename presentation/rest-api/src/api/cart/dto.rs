use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::{CartItem, CartState, NewCartItem};

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Catalog product identifier
    pub product_id: String,
    /// Display name at the time of adding
    pub name: String,
    /// Unit price in rupees
    pub unit_price: f64,
    /// Primary product image URL
    pub image: String,
    /// Selected size; may be empty for one-size products
    pub size: String,
    /// Selected color
    #[oai(skip_serializing_if_is_none)]
    pub color: Option<String>,
}

impl From<AddCartItemRequest> for NewCartItem {
    fn from(request: AddCartItemRequest) -> Self {
        Self {
            product_id: request.product_id,
            name: request.name,
            unit_price: request.unit_price,
            image: request.image,
            size: request.size,
            color: request.color,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartQuantityRequest {
    /// New quantity; zero or below removes the row
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartItemResponse {
    pub product_id: String,
    pub name: String,
    pub unit_price: f64,
    pub image: String,
    pub size: String,
    #[oai(skip_serializing_if_is_none)]
    pub color: Option<String>,
    pub quantity: u32,
    /// Unit price times quantity
    pub line_total: f64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        let line_total = item.line_total();
        Self {
            product_id: item.product_id,
            name: item.name,
            unit_price: item.unit_price,
            image: item.image,
            size: item.size,
            color: item.color,
            quantity: item.quantity,
            line_total,
        }
    }
}

/// Cart snapshot with totals derived at response time.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartStateResponse {
    pub items: Vec<CartItemResponse>,
    /// Sum of line totals
    pub total: f64,
    /// Sum of row quantities
    pub item_count: u32,
}

impl From<CartState> for CartStateResponse {
    fn from(state: CartState) -> Self {
        let total = state.total();
        let item_count = state.item_count();
        Self {
            items: state.into_items().into_iter().map(|i| i.into()).collect(),
            total,
            item_count,
        }
    }
}
