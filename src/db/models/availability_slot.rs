use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::types::Uuid;
use time::{OffsetDateTime, Time};

time::serde::format_description!(clock_time, Time, "[hour]:[minute]");

/// Day of the recurring week, Sunday = 0 through Saturday = 6.
///
/// Serialized on the wire as its integer index (the booking frontend sends
/// weekday numbers), persisted as SMALLINT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, sqlx::Type)]
#[repr(i16)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn from_index(index: i16) -> Option<Self> {
        Self::ALL.get(usize::try_from(index).ok()?).copied()
    }

    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i16(self.as_i16())
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let index = i16::deserialize(deserializer)?;
        Weekday::from_index(index).ok_or_else(|| {
            serde::de::Error::custom(format!("weekday index out of range 0-6: {}", index))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "service_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Beauty,
    Fitness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "service_location", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Studio,
    Online,
}

/// A bookable slot in the weekly availability calendar.
///
/// Invariant enforced both here and by the store: within one
/// `(day_of_week, service_type, location)` scope no two slots' half-open
/// `[start_time, end_time)` intervals overlap.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub id: Uuid,
    pub day_of_week: Weekday,
    #[serde(with = "clock_time")]
    pub start_time: Time,
    #[serde(with = "clock_time")]
    pub end_time: Time,
    pub service_type: ServiceType,
    pub location: Location,
    pub is_available: bool,
    pub notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewAvailabilitySlot {
    pub day_of_week: Weekday,
    pub start_time: Time,
    pub end_time: Time,
    pub service_type: ServiceType,
    pub location: Location,
    pub is_available: bool,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_round_trips_through_index() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_index(day.as_i16()), Some(day));
        }
        assert_eq!(Weekday::from_index(-1), None);
        assert_eq!(Weekday::from_index(7), None);
    }

    #[test]
    fn weekday_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Weekday::Sunday).unwrap(), "0");
        assert_eq!(serde_json::to_string(&Weekday::Saturday).unwrap(), "6");
        let day: Weekday = serde_json::from_str("3").unwrap();
        assert_eq!(day, Weekday::Wednesday);
        assert!(serde_json::from_str::<Weekday>("9").is_err());
    }
}
