use mge_common::models::{Booking, BookingStatus, Console, Faq, Fnb, Game, Promo, Room, Unit};
use mge_common::{log_result, ApiClient, MgeError, Validate};
use mge_config::ApiConfig;
use tracing::info;

use crate::analytics::{DashboardStats, StatsPeriod};
use crate::bookings::{BookingFilter, OtsBookingRequest, StatusUpdate};
use crate::resources::{AdminResource, ResourceClient};

/// Entry point for every admin screen.
///
/// Wraps an [`ApiClient`] that carries the admin bearer token.
#[derive(Clone, Debug)]
pub struct AdminClient {
    client: ApiClient,
}

impl AdminClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, MgeError> {
        Ok(Self::new(ApiClient::new(config)?))
    }

    pub fn api(&self) -> &ApiClient {
        &self.client
    }

    /// CRUD client for any admin resource type.
    pub fn resource<R: AdminResource>(&self) -> ResourceClient<'_, R> {
        ResourceClient::new(&self.client)
    }

    pub fn consoles(&self) -> ResourceClient<'_, Console> {
        self.resource()
    }

    pub fn rooms(&self) -> ResourceClient<'_, Room> {
        self.resource()
    }

    pub fn units(&self) -> ResourceClient<'_, Unit> {
        self.resource()
    }

    pub fn games(&self) -> ResourceClient<'_, Game> {
        self.resource()
    }

    pub fn fnbs(&self) -> ResourceClient<'_, Fnb> {
        self.resource()
    }

    pub fn promos(&self) -> ResourceClient<'_, Promo> {
        self.resource()
    }

    pub fn faqs(&self) -> ResourceClient<'_, Faq> {
        self.resource()
    }

    pub async fn list_bookings(&self, filter: &BookingFilter) -> Result<Vec<Booking>, MgeError> {
        self.client
            .get_json_with_query("admin/bookings", filter, Some("bookings"))
            .await
    }

    pub async fn get_booking(&self, id: u64) -> Result<Booking, MgeError> {
        self.client
            .get_json(&format!("admin/bookings/{}", id), Some("booking"))
            .await
    }

    /// Moves a booking to `status` (confirm, mark paid, cancel, ...).
    pub async fn update_booking_status(
        &self,
        id: u64,
        status: BookingStatus,
    ) -> Result<Booking, MgeError> {
        let update = StatusUpdate { status };
        update.validate()?;
        let result = self
            .client
            .patch_json(&format!("admin/bookings/{}/status", id), &update, Some("booking"))
            .await;
        log_result(
            result,
            &format!("Booking {} moved to {:?}", id, status),
            &format!("Failed to update status of booking {}", id),
        )
    }

    /// Records a walk-in booking made at the counter.
    pub async fn create_ots_booking(&self, request: &OtsBookingRequest) -> Result<Booking, MgeError> {
        request.validate()?;
        let booking: Booking = self
            .client
            .post_json("admin/bookings/ots", request, Some("booking"))
            .await?;
        info!("OTS booking {} recorded", booking.invoice_number);
        Ok(booking)
    }

    pub async fn delete_booking(&self, id: u64) -> Result<(), MgeError> {
        log_result(
            self.client.delete(&format!("admin/bookings/{}", id)).await,
            &format!("Deleted booking {}", id),
            &format!("Failed to delete booking {}", id),
        )
    }

    pub async fn dashboard_stats(&self, period: StatsPeriod) -> Result<DashboardStats, MgeError> {
        self.client
            .get_json_with_query("admin/dashboard", &[("period", period.as_str())], Some("stats"))
            .await
    }
}
