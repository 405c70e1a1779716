//! Beyond the primitive types.
//!
//! UUIDs, RFC 3339 timestamps, and durations all bind the same way the
//! primitives do - parse on the way in, render on the way out - and they keep
//! their arithmetic: the handler below schedules a processing window by
//! adding a duration to one timestamp and subtracting the result from
//! another.

use axum::{Json, Router, routing::put};
use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::app::errors::ApiError;
use crate::extract::{ValidJson, ValidPath};

pub fn router() -> Router {
    Router::new().route("/items/:item_id/schedule", put(schedule_item))
}

#[derive(Debug, Deserialize)]
struct ScheduleRequest {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    /// Seconds to wait before processing may begin.
    #[serde(default)]
    process_after: f64,
    #[serde(default)]
    repeat_at: Option<NaiveTime>,
}

/// PUT /extra-types/items/:item_id/schedule - `item_id` is a UUID path
/// segment; the body carries timestamps and a duration in seconds.
async fn schedule_item(
    ValidPath(item_id): ValidPath<Uuid>,
    ValidJson(request): ValidJson<ScheduleRequest>,
) -> Result<Json<Value>, ApiError> {
    if request.process_after < 0.0 {
        return Err(ApiError::validation(
            ["body", "process_after"],
            "ensure this value is not negative",
            "range",
        ));
    }
    if request.end < request.start {
        return Err(ApiError::validation(
            ["body", "end"],
            "end must not precede start",
            "range",
        ));
    }

    let process_after = Duration::milliseconds((request.process_after * 1000.0) as i64);
    let start_process = request.start + process_after;
    let duration = request.end - start_process;

    Ok(Json(json!({
        "item_id": item_id,
        "start": request.start,
        "end": request.end,
        "process_after": request.process_after,
        "repeat_at": request.repeat_at,
        "start_process": start_process,
        "duration": duration.num_milliseconds() as f64 / 1000.0,
    })))
}
