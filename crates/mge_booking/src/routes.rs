use crate::handlers::{
    create_booking_handler, get_booking_handler, get_hour_slots_handler, list_units_handler,
    BookingState,
};
use crate::service::{BookingApi, HttpBookingApi};
use axum::{
    routing::{get, post},
    Router,
};
use mge_common::{ApiClient, MgeError};
use mge_config::AppConfig;
use std::sync::Arc;

/// Creates the booking router, talking to the backend configured in `[api]`.
pub fn routes(config: Arc<AppConfig>) -> Result<Router, MgeError> {
    let client = ApiClient::new(&config.api)?;
    Ok(routes_with_api(Arc::new(HttpBookingApi::new(client))))
}

/// Creates the booking router over any [`BookingApi`] implementation.
pub fn routes_with_api(api: Arc<dyn BookingApi>) -> Router {
    let state = Arc::new(BookingState { api });

    Router::new()
        .route("/booking", post(create_booking_handler))
        .route("/booking/hour-slots", get(get_hour_slots_handler))
        .route("/booking/units", get(list_units_handler))
        .route("/booking/{invoice_number}", get(get_booking_handler))
        .with_state(state)
}
