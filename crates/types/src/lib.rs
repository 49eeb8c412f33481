//! Foundation types for the receipt engine: the receipt record exactly as
//! the backend delivers it, money/date/percent formatting, and the pure
//! per-unit price derivation.

pub mod format;
pub mod pricing;
pub mod record;

pub use format::{PLACEHOLDER, format_datetime, format_money, percent_from_bps};
pub use pricing::unit_breakdown;
pub use record::{
    DeliveryAddress, Fees, ItemOption, OrderItem, PaymentInfo, ReceiptRecord, Requester,
    Restaurant, Totals,
};

#[cfg(test)]
mod format_test;
