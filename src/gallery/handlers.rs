/**
 * Gallery Handlers
 *
 * # Routes
 *
 * - `GET /gallery` - list all entries
 * - `POST /gallery` - submit a new entry
 */

use axum::{extract::State, response::Json};

use crate::error::ApiError;
use crate::gallery::db::{self, GalleryEntry, NewGalleryEntry};
use crate::server::state::AppState;

/// List all gallery entries
pub async fn list_gallery(
    State(state): State<AppState>,
) -> Result<Json<Vec<GalleryEntry>>, ApiError> {
    let pool = state.pool()?;
    let entries = db::list(pool).await?;
    Ok(Json(entries))
}

/// Submit a new gallery entry
pub async fn add_gallery_entry(
    State(state): State<AppState>,
    Json(entry): Json<NewGalleryEntry>,
) -> Result<Json<GalleryEntry>, ApiError> {
    let pool = state.pool()?;
    let created = db::insert(pool, entry).await?;

    tracing::info!("Added gallery entry {}", created.id);
    Ok(Json(created))
}
