use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use crate::enums::booking_status::BookingStatus;
use crate::helpers::lenient_decode::LenientDecode;
use crate::structs::buyer_summary::BuyerSummary;
use crate::structs::property_summary::PropertySummary;

pub const MISSING_TITLE: &str = "Property Title Not Available";
pub const MISSING_BUYER: &str = "Unknown Buyer";
pub const MISSING_AMOUNT: &str = "N/A";

/// A buyer's request to visit one of the seller's properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: u64,

    #[serde(default)]
    pub property: Option<PropertySummary>,

    #[serde(default)]
    pub buyer: Option<BuyerSummary>,

    #[serde(default, deserialize_with = "LenientDecode::date")]
    pub visit_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "LenientDecode::amount")]
    pub amount: Option<f64>,

    #[serde(default)]
    pub message: Option<String>,

    pub status: BookingStatus,

    #[serde(default, deserialize_with = "LenientDecode::date_time")]
    pub created_at: Option<NaiveDateTime>,
}

impl Booking {
    /// Confirm/reject controls exist only while the request is pending.
    pub fn is_actionable(&self) -> bool {
        self.status.is_pending()
    }

    pub fn property_title(&self) -> &str {
        self.property
            .as_ref()
            .and_then(|property| property.title.as_deref())
            .filter(|title| !title.is_empty())
            .unwrap_or(MISSING_TITLE)
    }

    pub fn buyer_name(&self) -> &str {
        self.buyer
            .as_ref()
            .and_then(|buyer| buyer.full_name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(MISSING_BUYER)
    }

    pub fn amount_label(&self) -> String {
        match self.amount {
            Some(amount) if amount != 0.0 => {
                if amount.fract() == 0.0 {
                    format!("₹{:.0}", amount)
                } else {
                    format!("₹{:.2}", amount)
                }
            }
            _ => format!("₹{}", MISSING_AMOUNT),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|message| !message.trim().is_empty())
    }
}
