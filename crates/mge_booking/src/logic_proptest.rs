#[cfg(test)]
mod tests {
    use crate::logic::{bucket_time_slots, TimeSlot, PICKER_MINUTES};
    use proptest::prelude::*;
    use std::collections::HashSet;

    // Slots on a 15-minute grid, so roughly half of them are off the picker grid
    fn arb_slot() -> impl Strategy<Value = TimeSlot> {
        (0..24u32, prop::sample::select(vec![0u32, 15, 30, 45]), any::<bool>()).prop_map(
            |(hour, minute, available)| TimeSlot {
                start_time: format!("{:02}:{:02}", hour, minute),
                end_time: format!("{:02}:{:02}", (hour + (minute + 15) / 60) % 24, (minute + 15) % 60),
                available,
            },
        )
    }

    fn minute_of(value: &str) -> u32 {
        value[3..5].parse().expect("value is HH:MM")
    }

    proptest! {
        #[test]
        fn test_hours_unique_and_ascending(slots in prop::collection::vec(arb_slot(), 0..80)) {
            let hours = bucket_time_slots(&slots).unwrap();
            for pair in hours.windows(2) {
                prop_assert!(pair[0].hour < pair[1].hour,
                    "hours not strictly ascending: {} then {}", pair[0].hour, pair[1].hour);
            }
        }

        #[test]
        fn test_only_picker_minutes_emitted(slots in prop::collection::vec(arb_slot(), 0..80)) {
            let hours = bucket_time_slots(&slots).unwrap();
            for hour in &hours {
                for minute in &hour.minutes {
                    prop_assert!(PICKER_MINUTES.contains(&minute_of(&minute.value)),
                        "unexpected minute slot {}", minute.value);
                }
            }
        }

        #[test]
        fn test_no_duplicate_pairs(slots in prop::collection::vec(arb_slot(), 0..80)) {
            let hours = bucket_time_slots(&slots).unwrap();
            let mut seen = HashSet::new();
            for hour in &hours {
                for minute in &hour.minutes {
                    prop_assert!(seen.insert(minute.value.clone()),
                        "duplicate slot {}", minute.value);
                }
            }
        }

        #[test]
        fn test_hour_available_iff_any_minute_available(slots in prop::collection::vec(arb_slot(), 0..80)) {
            let hours = bucket_time_slots(&slots).unwrap();
            for hour in &hours {
                prop_assert!(!hour.minutes.is_empty());
                let any_available = hour.minutes.iter().any(|m| m.available);
                prop_assert_eq!(hour.available, any_available);
            }
        }

        #[test]
        fn test_every_grid_slot_is_represented(slots in prop::collection::vec(arb_slot(), 0..80)) {
            let hours = bucket_time_slots(&slots).unwrap();
            let emitted: HashSet<String> = hours
                .iter()
                .flat_map(|h| h.minutes.iter().map(|m| m.value.clone()))
                .collect();
            for slot in &slots {
                if PICKER_MINUTES.contains(&minute_of(&slot.start_time)) {
                    prop_assert!(emitted.contains(&slot.start_time),
                        "grid slot {} missing from output", slot.start_time);
                }
            }
        }
    }
}
