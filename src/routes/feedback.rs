use axum::extract::State;
use axum::Json;
use axum_extra::extract::WithRejection;

use crate::db;
use crate::envelope::{self, ApiResult, CreatedResult};
use crate::error::AppError;
use crate::models::{CreateFeedback, Feedback};
use crate::state::SharedState;

pub async fn list(State(state): State<SharedState>) -> ApiResult<Vec<Feedback>> {
    let feedback = db::feedback::list(&state.pool)
        .await
        .map_err(AppError::store("Failed to fetch feedback"))?;
    Ok(envelope::ok(feedback))
}

pub async fn create(
    State(state): State<SharedState>,
    WithRejection(Json(req), _): WithRejection<Json<CreateFeedback>, AppError>,
) -> CreatedResult<Feedback> {
    let new_feedback = req.validate()?;

    let feedback = db::feedback::create(&state.pool, &new_feedback)
        .await
        .map_err(AppError::store("Failed to create feedback"))?;

    tracing::info!(id = %feedback.id, rating = feedback.rating, "Feedback received");
    Ok(envelope::created(feedback))
}
