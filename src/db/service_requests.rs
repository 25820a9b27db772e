use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{NewServiceRequest, ServiceRequest, ServiceRequestPatch};

/// Newest first. `None` lists every row; `Some(label)` is an exact match on
/// the stored status text, so an unknown label simply matches nothing.
pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<ServiceRequest>, sqlx::Error> {
    sqlx::query_as::<_, ServiceRequest>(
        "SELECT * FROM service_requests
         WHERE ($1::text IS NULL OR status = $1)
         ORDER BY created_at DESC",
    )
    .bind(status)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ServiceRequest>, sqlx::Error> {
    sqlx::query_as::<_, ServiceRequest>("SELECT * FROM service_requests WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, req: &NewServiceRequest) -> Result<ServiceRequest, sqlx::Error> {
    sqlx::query_as::<_, ServiceRequest>(
        "INSERT INTO service_requests (name, email, details, location)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(&req.name)
    .bind(&req.email)
    .bind(&req.details)
    .bind(req.location.as_deref())
    .fetch_one(pool)
    .await
}

/// Applies a patch in one statement. The updatable columns are fixed; each
/// one keeps its current value unless the patch supplied it. `updated_at`
/// is always refreshed. Returns `None` when no row has this id.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    patch: &ServiceRequestPatch,
) -> Result<Option<ServiceRequest>, sqlx::Error> {
    let (set_location, location) = match &patch.location {
        Some(location) => (true, location.as_deref()),
        None => (false, None),
    };

    sqlx::query_as::<_, ServiceRequest>(
        "UPDATE service_requests SET
             status = COALESCE($2, status),
             progress = COALESCE($3, progress),
             location = CASE WHEN $4 THEN $5 ELSE location END,
             updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(patch.status)
    .bind(patch.progress)
    .bind(set_location)
    .bind(location)
    .fetch_optional(pool)
    .await
}
