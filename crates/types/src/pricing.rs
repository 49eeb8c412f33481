//! Per-unit price derivation.

use crate::record::OrderItem;

/// Resolves an item's unit price into `(base_cents, extras_cents)`.
///
/// Precedence is fixed: an explicit value always wins over a derived one.
/// - extras: `options_total_cents` when present, otherwise the sum of
///   `price_cents × max(quantity, 1)` over the selected options.
/// - base: `base_price_cents` when present, otherwise
///   `unit_price_cents − extras`.
///
/// With no explicit base, `base + extras == unit_price_cents` holds by
/// construction.
pub fn unit_breakdown(item: &OrderItem) -> (i64, i64) {
    let extras = item.options_total_cents.unwrap_or_else(|| {
        item.options
            .iter()
            .map(|opt| opt.price_cents * i64::from(opt.quantity.unwrap_or(1).max(1)))
            .sum()
    });
    let base = item
        .base_price_cents
        .unwrap_or(item.unit_price_cents - extras);
    (base, extras)
}
