//! Availability slot generation: expands configured working-hours blocks into
//! fixed-length candidate slots and merges them into the stored weekly
//! calendar without ever creating overlapping bookable slots.

mod conflict;
mod generator;
mod store;
mod time_block;

use thiserror::Error;

pub use conflict::{has_conflict, overlaps};
pub use generator::{GenerationRequest, GenerationResult, Outcome, SlotGenerator};
pub use store::SlotStore;
pub use time_block::TimeBlock;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Validation error: {0}")]
    Validation(String),
}
