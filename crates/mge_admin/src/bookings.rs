//! Admin-side booking payloads.

use mge_common::models::{BookingStatus, CreateBookingRequest};
use mge_common::{validation_error, MgeError, Validate};
use serde::{Deserialize, Serialize};

/// Query for the admin booking list. Unset fields are not sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookingFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    /// `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Walk-in ("on the spot") booking entered at the counter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OtsBookingRequest {
    #[serde(flatten)]
    pub booking: CreateBookingRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default = "ots_flag")]
    pub is_ots: bool,
}

fn ots_flag() -> bool {
    true
}

impl OtsBookingRequest {
    pub fn new(booking: CreateBookingRequest) -> Self {
        Self {
            booking,
            payment_method: None,
            is_ots: true,
        }
    }

    pub fn with_payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = Some(method.into());
        self
    }
}

impl Validate for OtsBookingRequest {
    fn validate(&self) -> Result<(), MgeError> {
        if !self.is_ots {
            return Err(validation_error("is_ots must be set on counter bookings"));
        }
        self.booking.validate()
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct StatusUpdate {
    pub status: BookingStatus,
}

impl Validate for StatusUpdate {
    fn validate(&self) -> Result<(), MgeError> {
        if self.status == BookingStatus::Other {
            return Err(validation_error("unknown booking status"));
        }
        Ok(())
    }
}
