use sqlx::PgPool;

use crate::models::{Feedback, NewFeedback};

pub async fn list(pool: &PgPool) -> Result<Vec<Feedback>, sqlx::Error> {
    sqlx::query_as::<_, Feedback>("SELECT * FROM feedback ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn create(pool: &PgPool, feedback: &NewFeedback) -> Result<Feedback, sqlx::Error> {
    sqlx::query_as::<_, Feedback>(
        "INSERT INTO feedback (rating, comment) VALUES ($1, $2) RETURNING *",
    )
    .bind(feedback.rating)
    .bind(feedback.comment.as_deref())
    .fetch_one(pool)
    .await
}
