use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::db::models::{Location, NewAvailabilitySlot, ServiceType, Weekday};
use crate::db::DatabaseError;

use super::conflict::has_conflict;
use super::store::SlotStore;
use super::time_block::TimeBlock;
use super::GenerationError;

/// One invocation's worth of configuration: which weekdays to populate and
/// which working-hours blocks to tile with slots. Caller-owned value; the
/// generator keeps no state of its own between invocations.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub service_type: ServiceType,
    pub location: Location,
    pub selected_weekdays: BTreeSet<Weekday>,
    pub time_blocks: Vec<TimeBlock>,
}

impl GenerationRequest {
    fn validate(&self) -> Result<(), GenerationError> {
        if self.selected_weekdays.is_empty() {
            return Err(GenerationError::Validation("no days selected".to_string()));
        }
        if self.time_blocks.is_empty() {
            return Err(GenerationError::Validation(
                "no time blocks configured".to_string(),
            ));
        }
        for block in &self.time_blocks {
            block.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub created_count: u32,
    pub skipped_count: u32,
    pub error_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// At least one slot was created.
    Created,
    /// Every candidate conflicted with existing slots; nothing to do.
    NoNewSlots,
    /// Nothing was created and at least one storage call failed.
    Failed,
}

impl GenerationResult {
    pub fn outcome(&self) -> Outcome {
        if self.created_count > 0 {
            Outcome::Created
        } else if self.error_count > 0 {
            Outcome::Failed
        } else {
            Outcome::NoNewSlots
        }
    }
}

pub struct SlotGenerator<S> {
    store: S,
}

impl<S: SlotStore> SlotGenerator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Walks day x block x candidate strictly in order, re-reading the stored
    /// scope before every candidate so each conflict check sees every prior
    /// insert of the same run. When two candidates from different blocks
    /// overlap each other, the one processed first wins and the later one is
    /// skipped as an ordinary conflict.
    ///
    /// Conflicts and storage failures are counted, never raised; only
    /// request validation aborts the run, and it does so before any I/O.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        request.validate()?;

        let mut result = GenerationResult::default();
        for &day in &request.selected_weekdays {
            for block in &request.time_blocks {
                for (start, end) in block.expand() {
                    let existing = match self
                        .store
                        .find_slots(day, request.service_type, request.location)
                        .await
                    {
                        Ok(slots) => slots,
                        Err(err) => {
                            warn!(?day, %start, "failed to read existing slots: {err}");
                            result.error_count += 1;
                            continue;
                        }
                    };

                    if has_conflict(&existing, (start, end)) {
                        debug!(?day, %start, %end, "candidate overlaps an existing slot, skipping");
                        result.skipped_count += 1;
                        continue;
                    }

                    let slot = NewAvailabilitySlot {
                        day_of_week: day,
                        start_time: start,
                        end_time: end,
                        service_type: request.service_type,
                        location: request.location,
                        is_available: true,
                        notes: Some(format!(
                            "auto-generated, {}-minute slot",
                            block.slot_duration_minutes
                        )),
                    };
                    match self.store.insert_slot(slot).await {
                        Ok(_) => result.created_count += 1,
                        // The store's overlap guard caught a concurrent
                        // write; same expected outcome as the in-memory check.
                        Err(DatabaseError::Duplicate) => {
                            debug!(?day, %start, %end, "store rejected overlapping slot, skipping");
                            result.skipped_count += 1;
                        }
                        Err(err) => {
                            warn!(?day, %start, %end, "failed to insert slot: {err}");
                            result.error_count += 1;
                        }
                    }
                }
            }
        }

        info!(
            created = result.created_count,
            skipped = result.skipped_count,
            errors = result.error_count,
            "availability generation finished"
        );
        Ok(result)
    }
}
