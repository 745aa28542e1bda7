use super::model::{CartItem, CartState, NewCartItem};

/// Cart mutations as a tagged union consumed by a pure transition function.
/// Keeping the store behind this narrow interface lets the session layer
/// pick its own concurrency model without touching call sites.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Adds one unit. An add matching an existing `(product_id, size)` row
    /// increments that row instead of appending a duplicate.
    AddItem(NewCartItem),
    /// Removes every row with this product id, regardless of size.
    RemoveItem { product_id: String },
    /// Sets the quantity on every row with this product id. A quantity of
    /// zero or below removes the row entirely (decrement-to-remove).
    UpdateQuantity { product_id: String, quantity: i64 },
    /// Empties the cart unconditionally.
    Clear,
}

/// Pure transition function. All actions are total over in-memory state;
/// there is nothing to fail.
pub fn reduce(mut state: CartState, action: CartAction) -> CartState {
    match action {
        CartAction::AddItem(new) => {
            let existing = state
                .items_mut()
                .iter_mut()
                .find(|item| item.product_id == new.product_id && item.size == new.size);
            match existing {
                Some(item) => item.quantity += 1,
                None => state.items_mut().push(CartItem::from_new(new)),
            }
            state
        }
        CartAction::RemoveItem { product_id } => {
            state.items_mut().retain(|item| item.product_id != product_id);
            state
        }
        CartAction::UpdateQuantity { product_id, quantity } => {
            if quantity <= 0 {
                state.items_mut().retain(|item| item.product_id != product_id);
            } else {
                // Saturate rather than wrap: a wrap could land on zero and
                // leave a row that violates the quantity >= 1 invariant.
                let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                for item in state.items_mut() {
                    if item.product_id == product_id {
                        item.quantity = quantity;
                    }
                }
            }
            state
        }
        CartAction::Clear => CartState::new(),
    }
}

/// Narrow store wrapper: get-state and dispatch.
#[derive(Debug, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn dispatch(&mut self, action: CartAction) {
        self.state = reduce(std::mem::take(&mut self.state), action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn new_item(id: &str, size: &str, price: f64) -> NewCartItem {
        NewCartItem {
            product_id: id.to_string(),
            name: format!("Product {id}"),
            unit_price: price,
            image: "/placeholder.svg".to_string(),
            size: size.to_string(),
            color: None,
        }
    }

    #[test]
    fn should_append_row_for_new_product() {
        let mut store = CartStore::new();

        store.dispatch(CartAction::AddItem(new_item("tee", "M", 499.0)));
        store.dispatch(CartAction::AddItem(new_item("hoodie", "M", 1299.0)));

        assert_eq!(store.state().items().len(), 2);
        assert_eq!(store.state().item_count(), 2);
    }

    #[test]
    fn should_merge_quantities_when_same_product_and_size_added_twice() {
        let mut store = CartStore::new();

        store.dispatch(CartAction::AddItem(new_item("tee", "M", 499.0)));
        store.dispatch(CartAction::AddItem(new_item("tee", "M", 499.0)));

        assert_eq!(store.state().items().len(), 1);
        assert_eq!(store.state().items()[0].quantity, 2);
    }

    #[test]
    fn should_keep_separate_rows_per_size() {
        let mut store = CartStore::new();

        store.dispatch(CartAction::AddItem(new_item("tee", "M", 499.0)));
        store.dispatch(CartAction::AddItem(new_item("tee", "L", 499.0)));

        assert_eq!(store.state().items().len(), 2);
    }

    #[test]
    fn should_remove_all_sizes_of_a_product() {
        let mut store = CartStore::new();
        store.dispatch(CartAction::AddItem(new_item("tee", "M", 499.0)));
        store.dispatch(CartAction::AddItem(new_item("tee", "L", 499.0)));
        store.dispatch(CartAction::AddItem(new_item("hoodie", "M", 1299.0)));

        store.dispatch(CartAction::RemoveItem {
            product_id: "tee".to_string(),
        });

        assert_eq!(store.state().items().len(), 1);
        assert_eq!(store.state().items()[0].product_id, "hoodie");
    }

    #[test]
    fn should_set_quantity_on_update() {
        let mut store = CartStore::new();
        store.dispatch(CartAction::AddItem(new_item("tee", "M", 499.0)));

        store.dispatch(CartAction::UpdateQuantity {
            product_id: "tee".to_string(),
            quantity: 5,
        });

        assert_eq!(store.state().items()[0].quantity, 5);
        assert_eq!(store.state().total(), 499.0 * 5.0);
    }

    #[test]
    fn should_remove_row_when_quantity_drops_to_zero() {
        let mut store = CartStore::new();
        store.dispatch(CartAction::AddItem(new_item("tee", "M", 499.0)));

        store.dispatch(CartAction::UpdateQuantity {
            product_id: "tee".to_string(),
            quantity: 0,
        });

        assert!(store.state().is_empty());
    }

    #[test]
    fn should_saturate_quantity_beyond_u32_range() {
        let mut store = CartStore::new();
        store.dispatch(CartAction::AddItem(new_item("tee", "M", 499.0)));

        // One past u32::MAX would wrap to a quantity-0 row if truncated.
        store.dispatch(CartAction::UpdateQuantity {
            product_id: "tee".to_string(),
            quantity: u32::MAX as i64 + 1,
        });

        assert_eq!(store.state().items()[0].quantity, u32::MAX);

        store.dispatch(CartAction::UpdateQuantity {
            product_id: "tee".to_string(),
            quantity: u32::MAX as i64 + 2,
        });

        assert_eq!(store.state().items()[0].quantity, u32::MAX);
    }

    #[test]
    fn should_remove_row_when_quantity_goes_negative() {
        let mut store = CartStore::new();
        store.dispatch(CartAction::AddItem(new_item("tee", "M", 499.0)));

        store.dispatch(CartAction::UpdateQuantity {
            product_id: "tee".to_string(),
            quantity: -3,
        });

        assert!(store.state().is_empty());
    }

    #[test]
    fn should_empty_cart_on_clear() {
        let mut store = CartStore::new();
        store.dispatch(CartAction::AddItem(new_item("tee", "M", 499.0)));
        store.dispatch(CartAction::AddItem(new_item("hoodie", "M", 1299.0)));

        store.dispatch(CartAction::Clear);

        assert!(store.state().is_empty());
    }

    fn arb_action() -> impl Strategy<Value = CartAction> {
        let ids = prop::sample::select(vec!["tee", "hoodie", "cap"]);
        let sizes = prop::sample::select(vec!["S", "M", "L"]);
        prop_oneof![
            (ids.clone(), sizes).prop_map(|(id, size)| {
                CartAction::AddItem(NewCartItem {
                    product_id: id.to_string(),
                    name: format!("Product {id}"),
                    unit_price: (id.len() as f64) * 100.0,
                    image: "/placeholder.svg".to_string(),
                    size: size.to_string(),
                    color: None,
                })
            }),
            ids.clone().prop_map(|id| CartAction::RemoveItem {
                product_id: id.to_string(),
            }),
            (
                ids,
                prop_oneof![
                    -2i64..8,
                    (u32::MAX as i64 - 1)..(u32::MAX as i64 + 3),
                    Just(i64::MAX),
                ],
            )
                .prop_map(|(id, quantity)| CartAction::UpdateQuantity {
                    product_id: id.to_string(),
                    quantity,
                }),
            Just(CartAction::Clear),
        ]
    }

    proptest! {
        /// For any action sequence the derived totals always match the
        /// sums over the resulting item list, and no quantity is ever
        /// left at zero or below.
        #[test]
        fn totals_always_match_item_list(actions in prop::collection::vec(arb_action(), 0..40)) {
            let mut store = CartStore::new();
            for action in actions {
                store.dispatch(action);
            }

            let expected_total: f64 = store
                .state()
                .items()
                .iter()
                .map(|item| item.unit_price * item.quantity as f64)
                .sum();
            let expected_count = store
                .state()
                .items()
                .iter()
                .fold(0u32, |count, i| count.saturating_add(i.quantity));

            prop_assert!((store.state().total() - expected_total).abs() < f64::EPSILON);
            prop_assert_eq!(store.state().item_count(), expected_count);
            prop_assert!(store.state().items().iter().all(|i| i.quantity >= 1));
        }

        /// No two rows ever share a `(product_id, size)` pair.
        #[test]
        fn row_identity_is_unique(actions in prop::collection::vec(arb_action(), 0..40)) {
            let mut store = CartStore::new();
            for action in actions {
                store.dispatch(action);
            }

            let mut seen = std::collections::HashSet::new();
            for item in store.state().items() {
                prop_assert!(seen.insert((item.product_id.clone(), item.size.clone())));
            }
        }
    }
}
