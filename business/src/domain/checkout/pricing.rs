/// Flat GST rate applied to the cart subtotal. Shipping is free as a
/// business rule, so the grand total is subtotal plus tax and nothing else.
pub const TAX_RATE: f64 = 0.12;

/// Grand total in whole display-currency units: `round(subtotal × 1.12)`.
/// Rounded exactly once; every later figure derives from this value.
pub fn total_with_tax(subtotal: f64) -> f64 {
    (subtotal * (1.0 + TAX_RATE)).round()
}

/// The tax line shown in the order summary.
pub fn tax_amount(subtotal: f64) -> f64 {
    (subtotal * TAX_RATE).round()
}

/// Gateway amount in minor units. Takes the already-rounded grand total so
/// the displayed figure and the charged figure cannot diverge.
pub fn amount_in_paise(total_with_tax: f64) -> i64 {
    (total_with_tax * 100.0).round() as i64
}
