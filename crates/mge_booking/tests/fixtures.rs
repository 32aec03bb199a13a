//! Test fixtures for booking API tests
//!
//! Factory functions for backend payloads and a client pointed at a mock server.

#![allow(dead_code)]

use mge_booking::HttpBookingApi;
use mge_common::models::CreateBookingRequest;
use mge_common::ApiClient;
use mge_config::ApiConfig;
use serde_json::{json, Value};
use wiremock::MockServer;

/// Creates a booking API client talking to the mock server under `/api`
pub fn create_test_api(server: &MockServer) -> HttpBookingApi {
    let client = ApiClient::new(&ApiConfig {
        base_url: format!("{}/api", server.uri()),
        timeout_secs: 5,
        token: None,
    })
    .expect("client should build");
    HttpBookingApi::new(client)
}

/// Builds an available-time response body the way the backend sends it
pub fn available_time_body(date: &str, slots: &[(&str, &str, bool)]) -> Value {
    let time_slots: Vec<Value> = slots
        .iter()
        .map(|(start, end, available)| {
            json!({"start_time": start, "end_time": end, "available": available})
        })
        .collect();
    json!({
        "status": "success",
        "data": {
            "date": date,
            "time_slots": time_slots
        }
    })
}

/// A valid customer booking request
pub fn create_booking_request() -> CreateBookingRequest {
    CreateBookingRequest {
        unit_id: 3,
        customer_name: "Budi Santoso".to_string(),
        phone: "081298765432".to_string(),
        email: Some("budi@example.com".to_string()),
        date: "2025-06-01".to_string(),
        start_time: "19:00".to_string(),
        duration_hours: 3,
        fnb_items: vec![],
        promo_code: Some("WEEKEND10".to_string()),
    }
}

/// A booking record as returned after creation
pub fn booking_body() -> Value {
    json!({
        "id": 88,
        "invoice_number": "INV-20250601-0088",
        "unit_id": 3,
        "customer_name": "Budi Santoso",
        "phone": "081298765432",
        "email": "budi@example.com",
        "date": "2025-06-01",
        "start_time": "19:00",
        "end_time": "22:00",
        "duration_hours": 3,
        "status": "pending",
        "total_price": "81000.00",
        "fnb_items": [],
        "promo_code": "WEEKEND10",
        "is_ots": 0
    })
}
