use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub details: String,
    pub location: Option<String>,
    pub status: RequestStatus,
    pub progress: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT")]
pub enum RequestStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,
    Completed,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 3] = [
        RequestStatus::Pending,
        RequestStatus::InProgress,
        RequestStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::InProgress => "In Progress",
            RequestStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequestStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Invalid status: {s}"))
    }
}

/// Body of `POST /api/service-requests`. Every field is optional at the
/// wire level so a missing field surfaces as a validation error rather
/// than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateServiceRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub details: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewServiceRequest {
    pub name: String,
    pub email: String,
    pub details: String,
    pub location: Option<String>,
}

impl CreateServiceRequest {
    pub fn validate(self) -> Result<NewServiceRequest, AppError> {
        match (
            non_blank(self.name),
            non_blank(self.email),
            non_blank(self.details),
        ) {
            (Some(name), Some(email), Some(details)) => Ok(NewServiceRequest {
                name,
                email,
                details,
                location: non_blank(self.location),
            }),
            _ => Err(AppError::BadRequest(
                "Name, email, and details are required".to_string(),
            )),
        }
    }
}

/// Body of `PUT /api/service-requests/{id}` as it arrives on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateServiceRequest {
    pub status: Option<String>,
    pub progress: Option<i64>,
    #[serde(default, deserialize_with = "supplied")]
    pub location: Option<Option<String>>,
}

/// Validated partial update. `None` means "not supplied"; for `location`,
/// `Some(None)` clears the column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceRequestPatch {
    pub status: Option<RequestStatus>,
    pub progress: Option<i32>,
    pub location: Option<Option<String>>,
}

impl UpdateServiceRequest {
    pub fn validate(self) -> Result<ServiceRequestPatch, AppError> {
        let status = self
            .status
            .map(|s| s.parse::<RequestStatus>())
            .transpose()
            .map_err(AppError::BadRequest)?;

        let progress = self
            .progress
            .map(|p| match p {
                0..=100 => Ok(p as i32),
                _ => Err(AppError::BadRequest(
                    "Progress must be between 0 and 100".to_string(),
                )),
            })
            .transpose()?;

        let patch = ServiceRequestPatch {
            status,
            progress,
            location: self.location.map(non_blank),
        };

        if patch.is_empty() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }
        Ok(patch)
    }
}

impl ServiceRequestPatch {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.progress.is_none() && self.location.is_none()
    }

    /// Names of the columns this patch writes, in a fixed order.
    pub fn supplied_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::with_capacity(3);
        if self.status.is_some() {
            fields.push("status");
        }
        if self.progress.is_some() {
            fields.push("progress");
        }
        if self.location.is_some() {
            fields.push("location");
        }
        fields
    }
}

/// Distinguishes an explicit `null` from an absent key: present keys always
/// deserialize to `Some(..)`, absent keys fall back to `None` via `default`.
fn supplied<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
