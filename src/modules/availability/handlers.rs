use std::collections::BTreeSet;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::repositories::SlotRepository;
use crate::db::{AvailabilitySlot, Location, ServiceType, Weekday};
use crate::error::{AppError, AppResult};
use crate::scheduling::{
    GenerationRequest, GenerationResult, Outcome, SlotGenerator, TimeBlock,
};

/// Slot lengths the configuration UI offers.
const ALLOWED_SLOT_DURATIONS: [u32; 6] = [30, 45, 60, 90, 120, 180];

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateSlotsPayload {
    pub service_type: ServiceType,
    pub location: Location,
    #[validate(length(min = 1, message = "no days selected"))]
    pub weekdays: Vec<i16>,
    #[validate(length(min = 1, message = "no time blocks configured"))]
    pub time_blocks: Vec<TimeBlock>,
}

pub async fn generate_slots(
    State(state): State<AppState>,
    Json(payload): Json<GenerateSlotsPayload>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let mut selected_weekdays = BTreeSet::new();
    for raw in &payload.weekdays {
        let day = Weekday::from_index(*raw)
            .ok_or_else(|| AppError::Validation(format!("weekday index out of range 0-6: {raw}")))?;
        selected_weekdays.insert(day);
    }
    for block in &payload.time_blocks {
        if !ALLOWED_SLOT_DURATIONS.contains(&block.slot_duration_minutes) {
            return Err(AppError::Validation(format!(
                "unsupported slot duration: {} minutes",
                block.slot_duration_minutes
            )));
        }
    }

    let request = GenerationRequest {
        service_type: payload.service_type,
        location: payload.location,
        selected_weekdays,
        time_blocks: payload.time_blocks,
    };
    let generator = SlotGenerator::new(SlotRepository::new(state.db.clone()));
    let result = generator.generate(&request).await?;

    let (status, message) = describe(&result);
    Ok((
        status,
        Json(json!({
            "created_count": result.created_count,
            "skipped_count": result.skipped_count,
            "error_count": result.error_count,
            "outcome": result.outcome(),
            "message": message,
        })),
    ))
}

fn describe(result: &GenerationResult) -> (StatusCode, String) {
    match result.outcome() {
        Outcome::Created => {
            let mut message = format!("created {} availability slots", result.created_count);
            if result.skipped_count > 0 {
                message.push_str(&format!(
                    ", skipped {} conflicting candidates",
                    result.skipped_count
                ));
            }
            if result.error_count > 0 {
                message.push_str(&format!(", {} inserts failed", result.error_count));
            }
            (StatusCode::OK, message)
        }
        Outcome::NoNewSlots => (
            StatusCode::OK,
            "no new slots created; every candidate conflicted with an existing slot".to_string(),
        ),
        Outcome::Failed => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!(
                "no slots created; {} storage operations failed",
                result.error_count
            ),
        ),
    }
}

#[derive(Debug, Deserialize)]
pub struct ListSlotsQuery {
    pub day_of_week: Option<i16>,
    pub service_type: Option<ServiceType>,
    pub location: Option<Location>,
}

pub async fn list_slots(
    State(state): State<AppState>,
    Query(query): Query<ListSlotsQuery>,
) -> AppResult<Json<Vec<AvailabilitySlot>>> {
    let day = match query.day_of_week {
        Some(raw) => Some(Weekday::from_index(raw).ok_or_else(|| {
            AppError::Validation(format!("weekday index out of range 0-6: {raw}"))
        })?),
        None => None,
    };

    let repository = SlotRepository::new(state.db.clone());
    let slots = repository
        .list_slots(day, query.service_type, query.location)
        .await?;
    Ok(Json(slots))
}
