//! Shared receipt fixtures.

use orderslip::types::{
    DeliveryAddress, Fees, ItemOption, OrderItem, PaymentInfo, ReceiptRecord, Requester,
    Restaurant, Totals,
};

pub fn item(name: &str, quantity: u32, unit_price_cents: i64) -> OrderItem {
    OrderItem {
        name: name.to_string(),
        quantity,
        unit_price_cents,
        total_cents: unit_price_cents * i64::from(quantity),
        ..OrderItem::default()
    }
}

/// One item, one tax line, no tip. Fits comfortably on a single page.
pub fn simple_record() -> ReceiptRecord {
    ReceiptRecord {
        id: "ord_1a2b3c4d5e".to_string(),
        order_number: "1042".to_string(),
        title: "Varsity Lunch Order".to_string(),
        scheduled_at: Some("2025-03-14T12:30:00-05:00".to_string()),
        status: "confirmed".to_string(),
        fulfillment_method: "pickup".to_string(),
        restaurant: Restaurant {
            name: "Tony's Pizzeria".to_string(),
            address: "12 Main St, Springfield, IL 62701".to_string(),
        },
        requester: Requester {
            first_name: Some("Alex".to_string()),
            last_name: Some("Rivera".to_string()),
            email: Some("arivera@example.edu".to_string()),
            school_name: Some("Springfield High".to_string()),
            team_name: Some("Tigers".to_string()),
            gender: Some("Girls".to_string()),
            sport: Some("Soccer".to_string()),
        },
        items: vec![item("Cheese Pizza", 1, 1000)],
        fees: Fees {
            sales_tax_cents: Some(40),
            ..Fees::default()
        },
        totals: Totals {
            subtotal_cents: 1000,
            total_without_tips_cents: 1040,
            tip_cents: 0,
            total_with_tip_cents: 1040,
        },
        payment: Some(PaymentInfo {
            card_label: Some("Team Visa".to_string()),
            last_four: Some("4242".to_string()),
            payment_status: Some("paid".to_string()),
            currency: Some("usd".to_string()),
        }),
        ..ReceiptRecord::default()
    }
}

/// Delivery variant with an address, tracking link and customized items.
pub fn delivery_record() -> ReceiptRecord {
    let mut record = simple_record();
    record.fulfillment_method = "delivery".to_string();
    record.delivery_address = Some(DeliveryAddress {
        line1: "400 Stadium Way".to_string(),
        line2: Some("Field House B".to_string()),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip: "62701".to_string(),
    });
    record.tracking_url = Some("https://example.com/track/ord_1a2b3c4d5e".to_string());
    record.items = vec![OrderItem {
        name: "Custom Pizza".to_string(),
        quantity: 2,
        unit_price_cents: 1250,
        options: vec![ItemOption {
            name: "Extra cheese".to_string(),
            price_cents: 250,
            quantity: None,
        }],
        total_cents: 2500,
        ..OrderItem::default()
    }];
    record.fees.delivery_cents = Some(500);
    record.totals = Totals {
        subtotal_cents: 2500,
        total_without_tips_cents: 3040,
        tip_cents: 400,
        total_with_tip_cents: 3440,
    };
    record
}

/// Enough items to force the table across a page break.
pub fn long_record(item_count: usize) -> ReceiptRecord {
    let mut record = simple_record();
    record.items = (0..item_count)
        .map(|i| item(&format!("Menu Item {i}"), 1, 850))
        .collect();
    let subtotal = 850 * item_count as i64;
    record.totals = Totals {
        subtotal_cents: subtotal,
        total_without_tips_cents: subtotal,
        tip_cents: 0,
        total_with_tip_cents: subtotal,
    };
    record.fees = Fees::default();
    record
}

/// A sparse payload the way the backend may actually send it.
pub fn sparse_record() -> ReceiptRecord {
    serde_json::from_value(serde_json::json!({
        "id": "ord_sparse01",
        "title": "Snack Run",
        "items": [{ "name": "Granola Bar", "quantity": 4, "unit_price_cents": 175, "total_cents": 700 }],
        "totals": { "subtotal_cents": 700, "total_without_tips_cents": 700, "total_with_tip_cents": 700 }
    }))
    .expect("sparse fixture deserializes")
}
