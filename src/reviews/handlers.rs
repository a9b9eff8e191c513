/**
 * Review Handlers
 *
 * # Routes
 *
 * - `GET /reviews` - list all reviews
 */

use axum::{extract::State, response::Json};

use crate::error::ApiError;
use crate::reviews::db::{self, Review};
use crate::server::state::AppState;

/// List all reviews
pub async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<Review>>, ApiError> {
    let pool = state.pool()?;
    let reviews = db::list(pool).await?;
    Ok(Json(reviews))
}
