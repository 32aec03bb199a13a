#[cfg(test)]
mod tests {
    use crate::logic::{AvailableTimeData, TimeSlot};
    use crate::routes::routes_with_api;
    use crate::service::MockBookingApi;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use mge_common::models::{Booking, BookingStatus, Unit};
    use mge_common::MgeError;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(api: MockBookingApi) -> Router {
        routes_with_api(Arc::new(api))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn sample_booking() -> Booking {
        Booking {
            id: 41,
            invoice_number: "INV-20250601-0041".to_string(),
            unit_id: 3,
            customer_name: "Rina".to_string(),
            phone: "081234567890".to_string(),
            email: None,
            date: "2025-06-01".to_string(),
            start_time: "14:00".to_string(),
            end_time: Some("16:00".to_string()),
            duration_hours: 2,
            status: BookingStatus::Pending,
            total_price: 60000,
            fnb_items: vec![],
            promo_code: None,
            is_ots: false,
        }
    }

    #[tokio::test]
    async fn test_hour_slots_handler_buckets_backend_slots() {
        let mut api = MockBookingApi::new();
        api.expect_available_time().times(1).returning(|_, _| {
            Ok(AvailableTimeData {
                date: "2025-06-01".to_string(),
                time_slots: vec![
                    TimeSlot {
                        start_time: "13:00".to_string(),
                        end_time: "13:30".to_string(),
                        available: false,
                    },
                    TimeSlot {
                        start_time: "13:30".to_string(),
                        end_time: "14:00".to_string(),
                        available: true,
                    },
                ],
            })
        });

        let (status, body) = send(
            app(api),
            get("/booking/hour-slots?unit_id=3&date=2025-06-01"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["timeSlots"].as_array().unwrap().len(), 2);
        assert_eq!(body["hourSlots"][0]["hour"], json!(13));
        assert_eq!(body["hourSlots"][0]["label"], json!("1:00 PM"));
        assert_eq!(body["hourSlots"][0]["available"], json!(true));
        assert_eq!(body["hourSlots"][0]["minutes"][1]["value"], json!("13:30"));
    }

    #[tokio::test]
    async fn test_hour_slots_handler_without_unit_returns_empty() {
        let mut api = MockBookingApi::new();
        api.expect_available_time().never();

        let (status, body) = send(app(api), get("/booking/hour-slots?date=2025-06-01")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"timeSlots": [], "hourSlots": []}));
    }

    #[tokio::test]
    async fn test_hour_slots_handler_swallows_backend_failure() {
        let mut api = MockBookingApi::new();
        api.expect_available_time()
            .returning(|_, _| Err(MgeError::TimeoutError("backend slow".to_string())));

        let (status, body) = send(
            app(api),
            get("/booking/hour-slots?unit_id=3&date=2025-06-01"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"timeSlots": [], "hourSlots": []}));
    }

    #[tokio::test]
    async fn test_hour_slots_handler_rejects_bad_date() {
        let mut api = MockBookingApi::new();
        api.expect_available_time().never();

        let (status, body) = send(
            app(api),
            get("/booking/hour-slots?unit_id=3&date=01/06/2025"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], json!(400));
    }

    #[tokio::test]
    async fn test_list_units_handler_maps_backend_error() {
        let mut api = MockBookingApi::new();
        api.expect_list_units().returning(|_| {
            Err(MgeError::ExternalServiceError {
                service_name: "backend".to_string(),
                message: "500 Server Error".to_string(),
            })
        });

        let (status, _) = send(app(api), get("/booking/units")).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_list_units_handler_passes_filter() {
        let mut api = MockBookingApi::new();
        api.expect_list_units()
            .withf(|filter| filter.room_id == Some(2) && filter.console_id.is_none())
            .returning(|_| {
                Ok(vec![Unit {
                    id: 3,
                    name: "PS5 - VIP 2".to_string(),
                    console_id: 1,
                    room_id: 2,
                    price_per_hour: 30000,
                    status: Some("available".to_string()),
                    console: None,
                    room: None,
                }])
            });

        let (status, body) = send(app(api), get("/booking/units?room_id=2")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], json!("PS5 - VIP 2"));
    }

    #[tokio::test]
    async fn test_create_booking_handler_validates_before_backend() {
        let mut api = MockBookingApi::new();
        api.expect_create_booking().never();

        let request = Request::builder()
            .method("POST")
            .uri("/booking")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "unit_id": 3,
                    "customer_name": "",
                    "phone": "0812",
                    "date": "2025-06-01",
                    "start_time": "14:00",
                    "duration_hours": 2
                })
                .to_string(),
            ))
            .unwrap();

        let (status, body) = send(app(api), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("customer_name"));
    }

    #[tokio::test]
    async fn test_create_booking_handler_returns_created() {
        let mut api = MockBookingApi::new();
        api.expect_create_booking()
            .withf(|request| request.unit_id == 3)
            .times(1)
            .returning(|_| Ok(sample_booking()));

        let request = Request::builder()
            .method("POST")
            .uri("/booking")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "unit_id": 3,
                    "customer_name": "Rina",
                    "phone": "081234567890",
                    "date": "2025-06-01",
                    "start_time": "14:00",
                    "duration_hours": 2
                })
                .to_string(),
            ))
            .unwrap();

        let (status, body) = send(app(api), request).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["invoice_number"], json!("INV-20250601-0041"));
        assert_eq!(body["status"], json!("pending"));
    }

    #[tokio::test]
    async fn test_get_booking_handler_not_found() {
        let mut api = MockBookingApi::new();
        api.expect_get_booking()
            .returning(|_| Err(MgeError::NotFoundError("Booking not found".to_string())));

        let (status, body) = send(app(api), get("/booking/INV-MISSING")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], json!(404));
    }

    #[tokio::test]
    async fn test_hour_slots_handler_empty_unit_id_returns_empty() {
        for uri in [
            "/booking/hour-slots?unit_id=&date=2025-06-01",
            "/booking/hour-slots?unit_id=0&date=2025-06-01",
            "/booking/hour-slots?unit_id=abc&date=2025-06-01",
        ] {
            let mut api = MockBookingApi::new();
            api.expect_available_time().never();
            let (status, body) = send(app(api), get(uri)).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body, json!({"timeSlots": [], "hourSlots": []}), "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_hour_slots_handler_missing_date_is_json_error() {
        let mut api = MockBookingApi::new();
        api.expect_available_time().never();

        let (status, body) = send(app(api), get("/booking/hour-slots?unit_id=3")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], json!(400));
        assert!(body["error"]["message"].as_str().unwrap().contains("date"));
    }

    #[tokio::test]
    async fn test_create_booking_handler_bad_json_is_json_error() {
        let mut api = MockBookingApi::new();
        api.expect_create_booking().never();

        let request = Request::builder()
            .method("POST")
            .uri("/booking")
            .header("content-type", "application/json")
            .body(Body::from("{\"unit_id\": "))
            .unwrap();

        let (status, body) = send(app(api), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], json!(400));
    }

    #[tokio::test]
    async fn test_get_booking_handler_rejects_path_segments() {
        let mut api = MockBookingApi::new();
        api.expect_get_booking().never();

        let (status, body) = send(app(api), get("/booking/..%2Fadmin%2Fbookings%2F5")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], json!(400));
    }
}
