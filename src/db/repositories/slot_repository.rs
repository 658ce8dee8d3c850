use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::models::{AvailabilitySlot, Location, NewAvailabilitySlot, ServiceType, Weekday};
use crate::db::DatabaseError;
use crate::scheduling::SlotStore;

/// Postgres-backed slot store. Overlap within a scope is additionally
/// enforced by the table's exclusion constraint, which surfaces here as
/// [`DatabaseError::Duplicate`].
#[derive(Clone)]
pub struct SlotRepository {
    pool: PgPool,
}

impl SlotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listing for the caller's slot view; every filter is optional.
    pub async fn list_slots(
        &self,
        day: Option<Weekday>,
        service_type: Option<ServiceType>,
        location: Option<Location>,
    ) -> Result<Vec<AvailabilitySlot>, DatabaseError> {
        let slots = sqlx::query_as::<_, AvailabilitySlot>(
            r#"
            SELECT id, day_of_week, start_time, end_time, service_type, location,
                   is_available, notes, created_at
            FROM availability_slots
            WHERE ($1::smallint IS NULL OR day_of_week = $1)
              AND ($2::service_type IS NULL OR service_type = $2)
              AND ($3::service_location IS NULL OR location = $3)
            ORDER BY day_of_week, start_time
            "#,
        )
        .bind(day)
        .bind(service_type)
        .bind(location)
        .fetch_all(&self.pool)
        .await?;

        Ok(slots)
    }
}

#[async_trait]
impl SlotStore for SlotRepository {
    async fn find_slots(
        &self,
        day: Weekday,
        service_type: ServiceType,
        location: Location,
    ) -> Result<Vec<AvailabilitySlot>, DatabaseError> {
        let slots = sqlx::query_as::<_, AvailabilitySlot>(
            r#"
            SELECT id, day_of_week, start_time, end_time, service_type, location,
                   is_available, notes, created_at
            FROM availability_slots
            WHERE day_of_week = $1 AND service_type = $2 AND location = $3
            ORDER BY start_time
            "#,
        )
        .bind(day)
        .bind(service_type)
        .bind(location)
        .fetch_all(&self.pool)
        .await?;

        Ok(slots)
    }

    async fn insert_slot(
        &self,
        slot: NewAvailabilitySlot,
    ) -> Result<AvailabilitySlot, DatabaseError> {
        let stored = sqlx::query_as::<_, AvailabilitySlot>(
            r#"
            INSERT INTO availability_slots
                (day_of_week, start_time, end_time, service_type, location, is_available, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, day_of_week, start_time, end_time, service_type, location,
                      is_available, notes, created_at
            "#,
        )
        .bind(slot.day_of_week)
        .bind(slot.start_time)
        .bind(slot.end_time)
        .bind(slot.service_type)
        .bind(slot.location)
        .bind(slot.is_available)
        .bind(slot.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }
}
