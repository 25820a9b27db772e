use axum::extract::{Path, Query, State};
use axum::Json;
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use uuid::Uuid;

use crate::db;
use crate::envelope::{self, ApiResult, CreatedResult};
use crate::error::AppError;
use crate::models::{CreateServiceRequest, ServiceRequest, UpdateServiceRequest};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
}

pub async fn list(
    State(state): State<SharedState>,
    WithRejection(Query(params), _): WithRejection<Query<ListParams>, AppError>,
) -> ApiResult<Vec<ServiceRequest>> {
    // `?status=` with no value lists everything.
    let status = params.status.as_deref().filter(|s| !s.is_empty());

    let requests = db::service_requests::list(&state.pool, status)
        .await
        .map_err(AppError::store("Failed to fetch service requests"))?;
    Ok(envelope::ok(requests))
}

pub async fn create(
    State(state): State<SharedState>,
    WithRejection(Json(req), _): WithRejection<Json<CreateServiceRequest>, AppError>,
) -> CreatedResult<ServiceRequest> {
    let new_request = req.validate()?;

    let request = db::service_requests::create(&state.pool, &new_request)
        .await
        .map_err(AppError::store("Failed to create service request"))?;

    tracing::info!(id = %request.id, "Service request created");
    Ok(envelope::created(request))
}

pub async fn get(
    State(state): State<SharedState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, AppError>,
) -> ApiResult<ServiceRequest> {
    let id = parse_id(&id)?;

    let request = db::service_requests::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::store("Failed to fetch service request"))?
        .ok_or_else(not_found)?;
    Ok(envelope::ok(request))
}

pub async fn update(
    State(state): State<SharedState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, AppError>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateServiceRequest>, AppError>,
) -> ApiResult<ServiceRequest> {
    let id = parse_id(&id)?;
    let patch = req.validate()?;

    let request = db::service_requests::update(&state.pool, id, &patch)
        .await
        .map_err(AppError::store("Failed to update service request"))?
        .ok_or_else(not_found)?;

    tracing::info!(
        id = %request.id,
        fields = ?patch.supplied_fields(),
        "Service request updated"
    );
    Ok(envelope::ok(request))
}

/// Ids are store-generated UUIDs, so anything else cannot name a row.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| not_found())
}

fn not_found() -> AppError {
    AppError::NotFound("Service request not found".to_string())
}
