use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::service_request::non_blank;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/feedback`. `rating` is kept loose so that strings,
/// floats and nulls all get the same rating error.
#[derive(Debug, Default, Deserialize)]
pub struct CreateFeedback {
    pub rating: Option<serde_json::Value>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewFeedback {
    pub rating: i32,
    pub comment: Option<String>,
}

impl CreateFeedback {
    pub fn validate(self) -> Result<NewFeedback, AppError> {
        let rating = self
            .rating
            .as_ref()
            .and_then(serde_json::Value::as_i64)
            .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
            .ok_or_else(|| AppError::BadRequest("Rating must be between 1 and 5".to_string()))?;

        Ok(NewFeedback {
            rating: rating as i32,
            comment: non_blank(self.comment),
        })
    }
}
