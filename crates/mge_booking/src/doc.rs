#![cfg(feature = "openapi")]
use crate::handlers::HourSlotsQuery;
use crate::logic::{HourSlot, MinuteSlot, ProcessedAvailability, TimeSlot, UnitFilter};
use mge_common::models::{
    Booking, BookingFnbItem, BookingStatus, Console, CreateBookingRequest, FnbOrderItem, Room,
    Unit,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::get_hour_slots_handler,
        crate::handlers::list_units_handler,
        crate::handlers::create_booking_handler,
        crate::handlers::get_booking_handler,
    ),
    components(schemas(
        HourSlotsQuery,
        ProcessedAvailability,
        HourSlot,
        MinuteSlot,
        TimeSlot,
        UnitFilter,
        Unit,
        Console,
        Room,
        Booking,
        BookingFnbItem,
        BookingStatus,
        CreateBookingRequest,
        FnbOrderItem,
    )),
    tags(
        (name = "Booking", description = "Availability and customer bookings")
    )
)]
pub struct BookingApiDoc;
