use std::sync::Arc;

use async_trait::async_trait;

use crate::db::models::{AvailabilitySlot, Location, NewAvailabilitySlot, ServiceType, Weekday};
use crate::db::DatabaseError;

/// Boundary to the durable slot store. The generator treats it as the sole
/// source of truth for conflict checks and never caches state across
/// invocations.
#[async_trait]
pub trait SlotStore: Send + Sync {
    /// All committed slots for the `(day, service_type, location)` scope.
    async fn find_slots(
        &self,
        day: Weekday,
        service_type: ServiceType,
        location: Location,
    ) -> Result<Vec<AvailabilitySlot>, DatabaseError>;

    /// Single atomic create. The store rejects inserts that collide with an
    /// existing slot in the same scope with [`DatabaseError::Duplicate`].
    async fn insert_slot(
        &self,
        slot: NewAvailabilitySlot,
    ) -> Result<AvailabilitySlot, DatabaseError>;
}

#[async_trait]
impl<T: SlotStore + ?Sized> SlotStore for Arc<T> {
    async fn find_slots(
        &self,
        day: Weekday,
        service_type: ServiceType,
        location: Location,
    ) -> Result<Vec<AvailabilitySlot>, DatabaseError> {
        (**self).find_slots(day, service_type, location).await
    }

    async fn insert_slot(
        &self,
        slot: NewAvailabilitySlot,
    ) -> Result<AvailabilitySlot, DatabaseError> {
        (**self).insert_slot(slot).await
    }
}
