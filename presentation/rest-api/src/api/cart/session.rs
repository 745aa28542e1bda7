use std::collections::HashMap;
use std::sync::RwLock;

use business::domain::cart::model::CartState;
use business::domain::cart::store::{CartAction, CartStore};
use business::domain::shared::value_objects::UserId;

/// One in-memory cart per authenticated user. Carts are session state,
/// not persisted records; a server restart starts every shopper empty.
///
/// The map holds an entry per user with a non-empty cart and drops it
/// again once the cart empties or checkout succeeds, so it is bounded by
/// concurrent shoppers with items, not by everyone who ever logged in.
#[derive(Default)]
pub struct CartSessions {
    carts: RwLock<HashMap<UserId, CartStore>>,
}

impl CartSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, user_id: &UserId) -> CartState {
        let carts = self.carts.read().expect("cart session lock poisoned");
        carts
            .get(user_id)
            .map(|store| store.state().clone())
            .unwrap_or_default()
    }

    pub fn dispatch(&self, user_id: &UserId, action: CartAction) -> CartState {
        let mut carts = self.carts.write().expect("cart session lock poisoned");
        let store = carts.entry(user_id.clone()).or_default();
        store.dispatch(action);
        let state = store.state().clone();
        // An emptied cart equals no cart; free the slot right away.
        if state.is_empty() {
            carts.remove(user_id);
        }
        state
    }

    /// Drops the user's cart entirely, used after a confirmed checkout.
    pub fn clear(&self, user_id: &UserId) {
        let mut carts = self.carts.write().expect("cart session lock poisoned");
        carts.remove(user_id);
    }
}
