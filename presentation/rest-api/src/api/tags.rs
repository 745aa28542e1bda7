use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Catalog,
    Cart,
    Wishlist,
    Checkout,
    Orders,
}
