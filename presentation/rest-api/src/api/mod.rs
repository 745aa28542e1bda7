pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod health;
pub mod order;
pub mod security;
pub mod tags;
pub mod wishlist;
