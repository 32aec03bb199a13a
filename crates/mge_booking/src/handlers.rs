use crate::logic::{get_processed_available_times, ProcessedAvailability, UnitFilter};
use crate::service::{check_invoice_number, BookingApi};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{Json, Response},
};
use chrono::NaiveDate;
use mge_common::models::{Booking, CreateBookingRequest, Unit};
use mge_common::{handle_json_result, validation_error, MgeError, Validate};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

// Shared state for the booking handlers
#[derive(Clone)]
pub struct BookingState {
    pub api: Arc<dyn BookingApi>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct HourSlotsQuery {
    /// Unit to look up; missing, empty, non-numeric or 0 yields an empty result
    #[cfg_attr(feature = "openapi", schema(example = "3"))]
    #[serde(default)]
    pub unit_id: Option<String>,

    /// Date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-06-01"))]
    pub date: String,
}

impl HourSlotsQuery {
    /// The selected unit, if the UI sent a usable one.
    pub fn unit(&self) -> Option<u64> {
        self.unit_id
            .as_deref()
            .and_then(|id| id.trim().parse::<u64>().ok())
            .filter(|id| *id != 0)
    }
}

fn query_error(rejection: QueryRejection) -> MgeError {
    validation_error(rejection.body_text())
}

fn json_error(rejection: JsonRejection) -> MgeError {
    validation_error(rejection.body_text())
}

/// Handler returning the hour-bucketed availability of a unit for one day.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/booking/hour-slots",
    params(HourSlotsQuery),
    responses(
        (status = 200, description = "Flat and hour-grouped slots; empty when nothing could be loaded", body = ProcessedAvailability),
        (status = 400, description = "Invalid date format")
    ),
    tag = "Booking"
))]
pub async fn get_hour_slots_handler(
    State(state): State<Arc<BookingState>>,
    query: Result<Query<HourSlotsQuery>, QueryRejection>,
) -> Result<Json<ProcessedAvailability>, MgeError> {
    let Query(query) = query.map_err(query_error)?;
    NaiveDate::parse_from_str(&query.date, "%Y-%m-%d")
        .map_err(|_| validation_error("Invalid date format (YYYY-MM-DD)"))?;

    let unit_id = query.unit();
    let availability =
        get_processed_available_times(state.api.as_ref(), unit_id, &query.date).await;
    info!(
        "Hour slots for unit {:?} on {}: {} buckets",
        unit_id,
        query.date,
        availability.hour_slots.len()
    );
    Ok(Json(availability))
}

/// Handler listing bookable units.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/booking/units",
    params(UnitFilter),
    responses(
        (status = 200, description = "Units", body = Vec<Unit>),
        (status = 502, description = "Backend unavailable")
    ),
    tag = "Booking"
))]
pub async fn list_units_handler(
    State(state): State<Arc<BookingState>>,
    filter: Result<Query<UnitFilter>, QueryRejection>,
) -> Result<Json<Vec<Unit>>, MgeError> {
    let Query(filter) = filter.map_err(query_error)?;
    let units = state.api.list_units(&filter).await?;
    Ok(Json(units))
}

/// Handler creating a customer booking.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/booking",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 400, description = "Invalid booking request"),
        (status = 409, description = "Slot no longer available")
    ),
    tag = "Booking"
))]
pub async fn create_booking_handler(
    State(state): State<Arc<BookingState>>,
    request: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Booking>), MgeError> {
    let Json(request) = request.map_err(json_error)?;
    request.validate()?;
    let booking = state.api.create_booking(&request).await?;
    info!("Booking {} created", booking.invoice_number);
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Handler fetching a booking by invoice number.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/booking/{invoice_number}",
    params(("invoice_number" = String, Path, description = "Invoice number of the booking")),
    responses(
        (status = 200, description = "Booking", body = Booking),
        (status = 400, description = "Malformed invoice number"),
        (status = 404, description = "Booking not found")
    ),
    tag = "Booking"
))]
pub async fn get_booking_handler(
    State(state): State<Arc<BookingState>>,
    Path(invoice_number): Path<String>,
) -> Result<Json<Booking>, Response> {
    let result = match check_invoice_number(&invoice_number) {
        Ok(invoice_number) => state.api.get_booking(invoice_number).await,
        Err(e) => Err(e),
    };
    handle_json_result(result)
}
