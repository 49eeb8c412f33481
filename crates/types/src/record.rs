//! The receipt record: the read-only input describing one order.
//!
//! Every monetary field is an integer number of cents. The backend computes
//! all prices and fees; this crate only carries them. Optional fields stay
//! `Option` so a sparse payload deserializes without custom logic.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReceiptRecord {
    pub id: String,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub title: String,
    /// RFC 3339 timestamp of the scheduled delivery/pickup, as sent by the
    /// backend. Parsed lazily at format time; an unparseable value renders
    /// as a placeholder rather than failing the document.
    #[serde(default)]
    pub scheduled_at: Option<String>,
    #[serde(default)]
    pub status: String,
    /// "delivery" or "pickup".
    #[serde(default)]
    pub fulfillment_method: String,
    #[serde(default)]
    pub restaurant: Restaurant,
    #[serde(default)]
    pub delivery_address: Option<DeliveryAddress>,
    #[serde(default)]
    pub requester: Requester,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub fees: Fees,
    #[serde(default)]
    pub totals: Totals,
    #[serde(default)]
    pub payment: Option<PaymentInfo>,
    #[serde(default)]
    pub tracking_url: Option<String>,
}

impl ReceiptRecord {
    pub fn is_delivery(&self) -> bool {
        self.fulfillment_method.eq_ignore_ascii_case("delivery")
    }

    /// The single currency code applied throughout the document.
    pub fn currency(&self) -> &str {
        self.payment
            .as_ref()
            .and_then(|p| p.currency.as_deref())
            .unwrap_or("usd")
    }

    pub fn is_voided(&self) -> bool {
        self.payment
            .as_ref()
            .and_then(|p| p.payment_status.as_deref())
            .is_some_and(|s| s.eq_ignore_ascii_case("voided"))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryAddress {
    #[serde(default)]
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
}

impl DeliveryAddress {
    /// Address rendered as one line per street line plus a city/state/zip line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.line1.is_empty() {
            lines.push(self.line1.clone());
        }
        if let Some(line2) = self.line2.as_deref().filter(|l| !l.is_empty()) {
            lines.push(line2.to_string());
        }
        let locality = [self.city.as_str(), self.state.as_str(), self.zip.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        if !locality.is_empty() {
            lines.push(locality);
        }
        lines
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Requester {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub school_name: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub sport: Option<String>,
}

impl Requester {
    pub fn full_name(&self) -> Option<String> {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        (!name.is_empty()).then_some(name)
    }

    /// The "{team} {gender} {sport}" context line, or `None` when every part
    /// is missing.
    pub fn team_line(&self) -> Option<String> {
        let line = [
            self.team_name.as_deref(),
            self.gender.as_deref(),
            self.sport.as_deref(),
        ]
        .iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
        (!line.is_empty()).then_some(line)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub unit_price_cents: i64,
    /// Explicit base price; when absent it is derived from the unit price
    /// minus the extras (see [`crate::pricing::unit_breakdown`]).
    #[serde(default)]
    pub base_price_cents: Option<i64>,
    /// Explicit extras total; when absent it is derived from the options.
    #[serde(default)]
    pub options_total_cents: Option<i64>,
    #[serde(default)]
    pub options: Vec<ItemOption>,
    /// Line total for the item (quantity already applied).
    #[serde(default)]
    pub total_cents: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemOption {
    #[serde(default)]
    pub name: String,
    /// Price delta for one unit of the option.
    #[serde(default)]
    pub price_cents: i64,
    #[serde(default)]
    pub quantity: Option<u32>,
}

/// Per-order fees. A row is rendered only when its value is present and
/// non-zero, so everything here is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fees {
    #[serde(default)]
    pub delivery_cents: Option<i64>,
    #[serde(default)]
    pub service_cents: Option<i64>,
    #[serde(default)]
    pub small_order_cents: Option<i64>,
    #[serde(default)]
    pub sales_tax_cents: Option<i64>,
    #[serde(default)]
    pub added_fee_flat_cents: Option<i64>,
    /// Percentage add-on fee, in basis points (1/100 of a percent).
    #[serde(default)]
    pub added_fee_bps: Option<i64>,
    /// The backend-computed amount for the percentage add-on fee.
    #[serde(default)]
    pub added_fee_amount_cents: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Totals {
    #[serde(default)]
    pub subtotal_cents: i64,
    #[serde(default)]
    pub total_without_tips_cents: i64,
    #[serde(default)]
    pub tip_cents: i64,
    #[serde(default)]
    pub total_with_tip_cents: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentInfo {
    #[serde(default)]
    pub card_label: Option<String>,
    #[serde(default)]
    pub last_four: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    /// Lowercase ISO currency code ("usd", "cad", ...).
    #[serde(default)]
    pub currency: Option<String>,
}
