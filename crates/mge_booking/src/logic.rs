use crate::error::BookingError;
use crate::service::BookingApi;
use chrono::NaiveTime;
use mge_common::log_error;
use mge_common::models::lenient;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Minutes a slot may start at to be offered in the picker.
pub const PICKER_MINUTES: [u32; 2] = [0, 30];

// --- Data Structures ---

/// A slot as delivered by `GET /booking/available-time`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TimeSlot {
    #[cfg_attr(feature = "openapi", schema(example = "14:30"))]
    pub start_time: String,
    #[cfg_attr(feature = "openapi", schema(example = "15:00"))]
    pub end_time: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub available: bool,
}

/// The `data` part of the available-time response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AvailableTimeData {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct MinuteSlot {
    #[cfg_attr(feature = "openapi", schema(example = "2:30 PM"))]
    pub label: String,
    #[cfg_attr(feature = "openapi", schema(example = "14:30"))]
    pub value: String,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct HourSlot {
    #[cfg_attr(feature = "openapi", schema(example = 14))]
    pub hour: u32,
    #[cfg_attr(feature = "openapi", schema(example = "2:00 PM"))]
    pub label: String,
    /// True if any minute slot in this hour is available.
    pub available: bool,
    pub minutes: Vec<MinuteSlot>,
}

/// Flat and hour-grouped views of one unit/date availability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProcessedAvailability {
    pub time_slots: Vec<TimeSlot>,
    pub hour_slots: Vec<HourSlot>,
}

impl ProcessedAvailability {
    pub fn is_empty(&self) -> bool {
        self.time_slots.is_empty() && self.hour_slots.is_empty()
    }
}

/// Optional filters for the public unit list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct UnitFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<u64>,
}

// --- Slot Bucketing ---

/// Reads hour and minute from `"HH:MM"` (trailing `":SS"` is ignored).
pub fn parse_start_time(value: &str) -> Result<(u32, u32), BookingError> {
    let mut parts = value.trim().split(':');
    let hour = parts.next().and_then(|h| h.trim().parse::<u32>().ok());
    let minute = parts.next().and_then(|m| m.trim().parse::<u32>().ok());
    match (hour, minute) {
        (Some(hour), Some(minute)) if hour < 24 && minute < 60 => Ok((hour, minute)),
        _ => Err(BookingError::InvalidTime(value.to_string())),
    }
}

/// Formats a clock time the way the picker shows it, e.g. `9:00 AM`, `12:30 PM`.
pub fn format_12h(hour: u32, minute: u32) -> Result<String, BookingError> {
    NaiveTime::from_hms_opt(hour, minute, 0)
        .map(|time| time.format("%-I:%M %p").to_string())
        .ok_or_else(|| BookingError::InvalidTime(format!("{}:{}", hour, minute)))
}

/// Groups slots into hour buckets for the two-level picker.
///
/// Only slots starting on the hour or half hour are kept, and each
/// `(hour, minute)` pair only once (first occurrence wins). Buckets come out
/// in ascending hour order; minute slots keep their input order. A bucket is
/// available if any of its minute slots is.
pub fn bucket_time_slots(slots: &[TimeSlot]) -> Result<Vec<HourSlot>, BookingError> {
    let mut seen: HashSet<(u32, u32)> = HashSet::new();
    let mut buckets: BTreeMap<u32, HourSlot> = BTreeMap::new();

    for slot in slots {
        let (hour, minute) = parse_start_time(&slot.start_time)?;
        if !PICKER_MINUTES.contains(&minute) {
            continue;
        }
        if !seen.insert((hour, minute)) {
            continue;
        }

        let bucket = match buckets.entry(hour) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(HourSlot {
                hour,
                label: format_12h(hour, 0)?,
                available: false,
                minutes: Vec::new(),
            }),
        };

        bucket.minutes.push(MinuteSlot {
            label: format_12h(hour, minute)?,
            value: format!("{:02}:{:02}", hour, minute),
            available: slot.available,
        });
        bucket.available |= slot.available;
    }

    Ok(buckets.into_values().collect())
}

// --- Availability Logic ---

/// Fetches the slots of a unit/date and buckets them, surfacing every error.
///
/// A missing or zero `unit_id` yields an empty result without calling the backend.
pub async fn try_get_processed_available_times<A>(
    api: &A,
    unit_id: Option<u64>,
    date: &str,
) -> Result<ProcessedAvailability, BookingError>
where
    A: BookingApi + ?Sized,
{
    let unit_id = match unit_id {
        Some(id) if id != 0 => id,
        _ => {
            debug!("No unit selected, skipping availability lookup for {}", date);
            return Ok(ProcessedAvailability::default());
        }
    };

    let data = api.available_time(unit_id, date).await?;
    let hour_slots = bucket_time_slots(&data.time_slots)?;
    debug!(
        "Unit {} on {}: {} slots in {} hour buckets",
        unit_id,
        date,
        data.time_slots.len(),
        hour_slots.len()
    );

    Ok(ProcessedAvailability {
        time_slots: data.time_slots,
        hour_slots,
    })
}

/// Like [`try_get_processed_available_times`], but any failure is logged and
/// turned into an empty result. Callers cannot tell a failed lookup from a
/// day without slots.
pub async fn get_processed_available_times<A>(
    api: &A,
    unit_id: Option<u64>,
    date: &str,
) -> ProcessedAvailability
where
    A: BookingApi + ?Sized,
{
    match try_get_processed_available_times(api, unit_id, date).await {
        Ok(availability) => availability,
        Err(e) => {
            log_error(
                &e,
                &format!("Failed to load available times for unit {:?} on {}", unit_id, date),
            );
            ProcessedAvailability::default()
        }
    }
}
