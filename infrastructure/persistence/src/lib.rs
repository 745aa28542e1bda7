pub mod db;
pub mod order {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod wishlist {
    pub mod repository;
}
