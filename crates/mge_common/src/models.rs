//! Catalog and booking records exchanged with the backend.
//!
//! The backend serializes flags as `true`/`1`/`"1"` and money as numbers or
//! decimal strings depending on the endpoint; the `lenient` helpers accept all
//! of them.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{validation_error, MgeError, Validate};

pub mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Accepts `true`, `1`, `"1"`, `"true"` (and their falsy counterparts).
    pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Bool(b) => b,
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"),
            _ => false,
        })
    }

    /// Accepts `15000`, `15000.0` or `"15000.00"` and rounds to whole Rupiah.
    pub fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.round() as i64))
                .ok_or_else(|| serde::de::Error::custom("amount out of range")),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map(|f| f.round() as i64)
                .map_err(|_| serde::de::Error::custom(format!("invalid amount: {}", s))),
            Value::Null => Ok(0),
            other => Err(serde::de::Error::custom(format!("invalid amount: {}", other))),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Console {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_true", deserialize_with = "lenient::flag")]
    pub is_active: bool,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub max_visitors: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_true", deserialize_with = "lenient::flag")]
    pub is_active: bool,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Unit {
    pub id: u64,
    pub name: String,
    pub console_id: u64,
    pub room_id: u64,
    #[serde(deserialize_with = "lenient::amount")]
    pub price_per_hour: i64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub console: Option<Console>,
    #[serde(default)]
    pub room: Option<Room>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default)]
    pub console_ids: Vec<u64>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fnb {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient::amount")]
    pub price: i64,
    #[serde(default = "default_true", deserialize_with = "lenient::flag")]
    pub is_available: bool,
    #[serde(default)]
    pub image: Option<String>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Promo {
    pub id: u64,
    pub code: String,
    #[serde(deserialize_with = "lenient::amount")]
    pub discount_percentage: i64,
    #[serde(default)]
    pub valid_from: Option<String>,
    #[serde(default)]
    pub valid_until: Option<String>,
    #[serde(default = "default_true", deserialize_with = "lenient::flag")]
    pub is_active: bool,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Faq {
    pub id: u64,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub order: Option<u32>,
}

/// Lifecycle of a booking as reported by the backend.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Paid,
    Completed,
    Cancelled,
    #[serde(other)]
    Other,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingFnbItem {
    pub fnb_id: u64,
    #[serde(default)]
    pub name: Option<String>,
    pub quantity: u32,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub price: i64,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: u64,
    pub invoice_number: String,
    pub unit_id: u64,
    pub customer_name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub date: String,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    pub duration_hours: u32,
    pub status: BookingStatus,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub total_price: i64,
    #[serde(default)]
    pub fnb_items: Vec<BookingFnbItem>,
    #[serde(default)]
    pub promo_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_ots: bool,
}

/// One FNB line of a booking request.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FnbOrderItem {
    pub fnb_id: u64,
    pub quantity: u32,
}

/// Booking form shared by the customer flow and admin OTS bookings.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateBookingRequest {
    pub unit_id: u64,
    pub customer_name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, on the hour or half hour
    pub start_time: String,
    pub duration_hours: u32,
    #[serde(default)]
    pub fnb_items: Vec<FnbOrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
}

impl Validate for CreateBookingRequest {
    fn validate(&self) -> Result<(), MgeError> {
        if self.unit_id == 0 {
            return Err(validation_error("unit_id is required"));
        }
        if self.customer_name.trim().is_empty() {
            return Err(validation_error("customer_name must not be empty"));
        }
        if self.phone.trim().is_empty() {
            return Err(validation_error("phone must not be empty"));
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(validation_error(format!("invalid email: {}", email)));
            }
        }
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| validation_error("date must be in YYYY-MM-DD format"))?;
        let start = NaiveTime::parse_from_str(&self.start_time, "%H:%M")
            .map_err(|_| validation_error("start_time must be in HH:MM format"))?;
        if start.minute() != 0 && start.minute() != 30 {
            return Err(validation_error(
                "start_time must be on the hour or half hour",
            ));
        }
        if self.duration_hours == 0 {
            return Err(validation_error("duration_hours must be at least 1"));
        }
        if let Some(item) = self.fnb_items.iter().find(|item| item.quantity == 0) {
            return Err(validation_error(format!(
                "quantity for fnb {} must be at least 1",
                item.fnb_id
            )));
        }
        Ok(())
    }
}
