use serde::{Deserialize, Serialize};
use time::Time;

use super::GenerationError;

time::serde::format_description!(clock_time, Time, "[hour]:[minute]");

/// A configured working-hours window plus the slot length to tile it with.
/// Local clock time only; no date or timezone is attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeBlock {
    #[serde(with = "clock_time")]
    pub start_time: Time,
    #[serde(with = "clock_time")]
    pub end_time: Time,
    pub slot_duration_minutes: u32,
}

impl TimeBlock {
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.start_time >= self.end_time {
            return Err(GenerationError::Validation(format!(
                "time block start {} must be before its end {}",
                self.start_time, self.end_time
            )));
        }
        if self.slot_duration_minutes == 0 {
            return Err(GenerationError::Validation(
                "slot duration must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Tile the window with fixed-length candidate slots, in ascending start
    /// order. A trailing remainder shorter than the slot length is never
    /// emitted; a duration longer than the window yields no candidates.
    ///
    /// The cursor walks minutes-since-midnight so the arithmetic cannot wrap
    /// past midnight the way `Time + Duration` would.
    pub fn expand(&self) -> Vec<(Time, Time)> {
        let duration = self.slot_duration_minutes;
        if duration == 0 {
            // Rejected by validate(); a zero duration would never advance the cursor.
            return Vec::new();
        }

        let end = minutes_of(self.end_time);
        let mut cursor = minutes_of(self.start_time);
        let mut slots = Vec::new();
        while cursor + duration <= end {
            slots.push((time_from_minutes(cursor), time_from_minutes(cursor + duration)));
            cursor += duration;
        }
        slots
    }
}

fn minutes_of(t: Time) -> u32 {
    u32::from(t.hour()) * 60 + u32::from(t.minute())
}

fn time_from_minutes(total: u32) -> Time {
    Time::from_hms((total / 60) as u8, (total % 60) as u8, 0)
        .expect("minute cursor stays within a single day")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::time;

    fn block(start: Time, end: Time, slot_duration_minutes: u32) -> TimeBlock {
        TimeBlock {
            start_time: start,
            end_time: end,
            slot_duration_minutes,
        }
    }

    #[test]
    fn expands_three_hour_block_into_hour_slots() {
        let slots = block(time!(9:00), time!(12:00), 60).expand();
        assert_eq!(
            slots,
            vec![
                (time!(9:00), time!(10:00)),
                (time!(10:00), time!(11:00)),
                (time!(11:00), time!(12:00)),
            ]
        );
    }

    #[test]
    fn never_emits_partial_trailing_slot() {
        let slots = block(time!(9:00), time!(12:00), 90).expand();
        assert_eq!(
            slots,
            vec![(time!(9:00), time!(10:30)), (time!(10:30), time!(12:00))]
        );

        // 10:30-10:45 remainder is dropped.
        let slots = block(time!(9:00), time!(10:45), 30).expand();
        assert_eq!(slots.len(), 3);
        assert_eq!(slots.last().unwrap().1, time!(10:30));
    }

    #[test]
    fn empty_when_duration_exceeds_window() {
        assert!(block(time!(9:00), time!(10:00), 90).expand().is_empty());
    }

    #[test]
    fn evenly_dividing_duration_tiles_the_window_exactly() {
        let b = block(time!(8:00), time!(14:00), 45);
        let slots = b.expand();
        assert_eq!(slots.len(), 8);
        assert_eq!(slots.first().unwrap().0, b.start_time);
        assert_eq!(slots.last().unwrap().1, b.end_time);
        for pair in slots.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn late_evening_block_does_not_wrap_past_midnight() {
        let slots = block(time!(22:00), time!(23:45), 60).expand();
        assert_eq!(slots, vec![(time!(22:00), time!(23:00))]);
    }

    #[test]
    fn validate_rejects_inverted_block_and_zero_duration() {
        assert!(block(time!(12:00), time!(9:00), 60).validate().is_err());
        assert!(block(time!(9:00), time!(9:00), 60).validate().is_err());
        assert!(block(time!(9:00), time!(12:00), 0).validate().is_err());
        assert!(block(time!(9:00), time!(12:00), 60).validate().is_ok());
    }
}
