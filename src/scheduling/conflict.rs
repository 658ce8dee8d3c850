use time::Time;

use crate::db::models::AvailabilitySlot;

/// Half-open interval overlap: `[a, b)` and `[c, d)` overlap iff
/// `a < d && c < b`. Intervals that merely touch at an endpoint do not
/// overlap. This single inequality covers the starts-inside, ends-inside and
/// contains cases.
pub fn overlaps(a: (Time, Time), b: (Time, Time)) -> bool {
    a.0 < b.1 && b.0 < a.1
}

/// True iff the candidate interval overlaps any slot already stored for the
/// scope. Pure predicate; the caller owns fetching the existing set.
pub fn has_conflict(existing: &[AvailabilitySlot], candidate: (Time, Time)) -> bool {
    existing
        .iter()
        .any(|slot| overlaps((slot.start_time, slot.end_time), candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{Location, ServiceType, Weekday};
    use time::macros::time;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn slot(start: Time, end: Time) -> AvailabilitySlot {
        AvailabilitySlot {
            id: Uuid::new_v4(),
            day_of_week: Weekday::Monday,
            start_time: start,
            end_time: end,
            service_type: ServiceType::Beauty,
            location: Location::Studio,
            is_available: true,
            notes: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        assert!(!overlaps((time!(9:00), time!(10:00)), (time!(10:00), time!(11:00))));
        assert!(!overlaps((time!(10:00), time!(11:00)), (time!(9:00), time!(10:00))));
    }

    #[test]
    fn detects_all_three_overlap_shapes() {
        // candidate starts inside the existing interval
        assert!(overlaps((time!(9:30), time!(10:30)), (time!(9:00), time!(10:00))));
        // candidate ends inside the existing interval
        assert!(overlaps((time!(8:30), time!(9:30)), (time!(9:00), time!(10:00))));
        // candidate contains the existing interval
        assert!(overlaps((time!(8:00), time!(11:00)), (time!(9:00), time!(10:00))));
        // identical intervals
        assert!(overlaps((time!(9:00), time!(10:00)), (time!(9:00), time!(10:00))));
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            ((time!(9:00), time!(10:00)), (time!(9:30), time!(10:30))),
            ((time!(9:00), time!(10:00)), (time!(10:00), time!(11:00))),
            ((time!(8:00), time!(12:00)), (time!(9:00), time!(10:00))),
            ((time!(7:00), time!(8:00)), (time!(9:00), time!(10:00))),
        ];
        for (a, b) in cases {
            assert_eq!(overlaps(a, b), overlaps(b, a));
        }
    }

    #[test]
    fn candidate_conflicts_iff_it_overlaps_any_existing_slot() {
        let existing = vec![
            slot(time!(9:00), time!(10:00)),
            slot(time!(12:00), time!(13:00)),
        ];
        assert!(has_conflict(&existing, (time!(9:30), time!(10:30))));
        assert!(has_conflict(&existing, (time!(12:30), time!(12:45))));
        assert!(!has_conflict(&existing, (time!(10:00), time!(12:00))));
        assert!(!has_conflict(&[], (time!(9:00), time!(10:00))));
    }
}
