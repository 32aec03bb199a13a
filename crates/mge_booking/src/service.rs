//! Customer-facing calls to the booking backend.
//!
//! [`BookingApi`] is the seam between the BFF handlers and the backend;
//! [`HttpBookingApi`] is the production implementation over [`ApiClient`].

use crate::logic::{AvailableTimeData, UnitFilter};
use async_trait::async_trait;
use mge_common::models::{Booking, Console, CreateBookingRequest, Faq, Fnb, Promo, Room, Unit};
use mge_common::{log_result, validation_error, ApiClient, MgeError, Validate};
use tracing::{debug, info};

/// Operations of the public booking API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// `GET /booking/available-time?unit_id=&date=`
    async fn available_time(&self, unit_id: u64, date: &str)
        -> Result<AvailableTimeData, MgeError>;

    async fn list_units(&self, filter: &UnitFilter) -> Result<Vec<Unit>, MgeError>;

    async fn list_consoles(&self) -> Result<Vec<Console>, MgeError>;

    async fn list_rooms(&self) -> Result<Vec<Room>, MgeError>;

    async fn list_fnbs(&self) -> Result<Vec<Fnb>, MgeError>;

    async fn list_faqs(&self) -> Result<Vec<Faq>, MgeError>;

    /// Looks up an active promo by its code.
    async fn check_promo(&self, code: &str) -> Result<Promo, MgeError>;

    /// Validates the request locally, then `POST /booking`.
    async fn create_booking(&self, request: &CreateBookingRequest) -> Result<Booking, MgeError>;

    async fn get_booking(&self, invoice_number: &str) -> Result<Booking, MgeError>;
}

/// Trims an invoice number and checks it is a single path segment
/// (ASCII letters, digits, `-` and `_` only).
pub fn check_invoice_number(invoice_number: &str) -> Result<&str, MgeError> {
    let invoice_number = invoice_number.trim();
    if invoice_number.is_empty() {
        return Err(validation_error("invoice number must not be empty"));
    }
    if !invoice_number
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(validation_error(format!(
            "invalid invoice number '{}'",
            invoice_number
        )));
    }
    Ok(invoice_number)
}

#[derive(Clone, Debug)]
pub struct HttpBookingApi {
    client: ApiClient,
}

impl HttpBookingApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn available_time(
        &self,
        unit_id: u64,
        date: &str,
    ) -> Result<AvailableTimeData, MgeError> {
        let unit_id = unit_id.to_string();
        debug!("Fetching available time for unit {} on {}", unit_id, date);
        self.client
            .get_json_with_query(
                "booking/available-time",
                &[("unit_id", unit_id.as_str()), ("date", date)],
                None,
            )
            .await
    }

    async fn list_units(&self, filter: &UnitFilter) -> Result<Vec<Unit>, MgeError> {
        self.client.get_json_with_query("units", filter, None).await
    }

    async fn list_consoles(&self) -> Result<Vec<Console>, MgeError> {
        self.client.get_json("consoles", None).await
    }

    async fn list_rooms(&self) -> Result<Vec<Room>, MgeError> {
        self.client.get_json("rooms", None).await
    }

    async fn list_fnbs(&self) -> Result<Vec<Fnb>, MgeError> {
        self.client.get_json("fnbs", None).await
    }

    async fn list_faqs(&self) -> Result<Vec<Faq>, MgeError> {
        self.client.get_json("faqs", None).await
    }

    async fn check_promo(&self, code: &str) -> Result<Promo, MgeError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(validation_error("promo code must not be empty"));
        }
        self.client
            .get_json_with_query("promos/check", &[("code", code)], Some("promo"))
            .await
    }

    async fn create_booking(&self, request: &CreateBookingRequest) -> Result<Booking, MgeError> {
        request.validate()?;
        info!(
            "Creating booking for unit {} on {} at {}",
            request.unit_id, request.date, request.start_time
        );
        let result = self
            .client
            .post_json("booking", request, Some("booking"))
            .await;
        log_result(result, "Booking created", "Booking creation failed")
    }

    async fn get_booking(&self, invoice_number: &str) -> Result<Booking, MgeError> {
        let invoice_number = check_invoice_number(invoice_number)?;
        self.client
            .get_json(&format!("booking/{}", invoice_number), Some("booking"))
            .await
    }
}
