/**
 * Reviews - Types and Database Operations
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// A customer review
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Review {
    pub id: Uuid,
    pub reviewer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// List all reviews, newest first
pub async fn list(pool: &PgPool) -> Result<Vec<Review>, sqlx::Error> {
    sqlx::query_as::<_, Review>(
        "SELECT id, reviewer_name, avatar, rating, comment, created_at \
         FROM reviews ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}
