// Declare modules within this crate
#[cfg(feature = "openapi")]
pub mod doc;
pub mod error;
pub mod handlers;
#[cfg(test)]
mod handlers_test;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod routes;
pub mod service;

pub use error::BookingError;
pub use logic::{
    bucket_time_slots, get_processed_available_times, try_get_processed_available_times,
    HourSlot, MinuteSlot, ProcessedAvailability, TimeSlot,
};
pub use routes::{routes, routes_with_api};
pub use service::{BookingApi, HttpBookingApi};
