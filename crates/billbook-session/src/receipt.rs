//! # Receipt Payload
//!
//! Display-ready snapshot of a finalized bill, joined with the business
//! profile. The UI layer renders this verbatim; nothing here needs a
//! second lookup.
//!
//! ## Layout
//! ```text
//! ┌──────────────────────────────┐
//! │        Sharma General Store  │   business_name
//! │        MG Road, Pune         │   address
//! │        Ph: 98765 43210       │   phone ("N/A" when unset)
//! ├──────────────────────────────┤
//! │  Bill No: 1f3a9c             │   last 6 chars of the bill id
//! │  Customer: Cash Customer     │
//! ├──────────────────────────────┤
//! │  Rice      10.00 x 2   20.00 │   items[]
//! │  Oil        5.00 x 3   15.00 │
//! ├──────────────────────────────┤
//! │  TOTAL                 35.00 │   grand_total
//! └──────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use billbook_core::{Bill, BusinessProfile, Money};

/// Fallback shown on receipts when an optional contact field is unset.
const UNSET_CONTACT: &str = "N/A";

/// How many trailing characters of the bill id make the short bill number.
const BILL_NO_LEN: usize = 6;

/// One rendered line on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    /// Product name as it was at sale time
    pub name: String,

    /// Unit price at sale time
    pub price: Money,

    /// Quantity sold
    pub quantity: Decimal,

    /// Line subtotal
    pub subtotal: Money,
}

/// Complete receipt payload for one finalized bill.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Short human-friendly bill number
    pub bill_no: String,

    /// Business header
    pub business_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,

    /// Customer block
    pub customer_name: String,
    pub customer_phone: String,

    /// When the bill was finalized
    pub date: DateTime<Utc>,

    /// Rendered line items
    pub items: Vec<ReceiptLine>,

    /// Total payable
    pub grand_total: Money,
}

impl Receipt {
    /// Builds the receipt payload from a profile and a finalized bill.
    pub fn from_bill(profile: &BusinessProfile, bill: &Bill) -> Self {
        let items = bill
            .items
            .iter()
            .map(|item| ReceiptLine {
                name: item.name.clone(),
                price: item.price,
                quantity: item.quantity,
                subtotal: item.subtotal,
            })
            .collect();

        Receipt {
            bill_no: short_bill_no(&bill.bill_id),
            business_name: profile.business_name.clone(),
            address: profile.address.clone(),
            phone: profile
                .phone
                .clone()
                .unwrap_or_else(|| UNSET_CONTACT.to_string()),
            email: profile
                .email
                .clone()
                .unwrap_or_else(|| UNSET_CONTACT.to_string()),
            customer_name: bill.customer_name.clone(),
            customer_phone: bill.customer_phone.clone(),
            date: bill.date,
            items,
            grand_total: bill.grand_total,
        }
    }
}

/// Last [`BILL_NO_LEN`] characters of the bill id.
fn short_bill_no(bill_id: &str) -> String {
    let chars: Vec<char> = bill_id.chars().collect();
    let start = chars.len().saturating_sub(BILL_NO_LEN);
    chars[start..].iter().collect()
}
