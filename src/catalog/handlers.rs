/**
 * Catalog Handlers
 *
 * HTTP handlers for the food catalog.
 *
 * # Routes
 *
 * - `GET /allFoods` - list; `?search=` substring filter, `?sort=` popularity
 * - `GET /food/{id}` - fetch one item
 * - `GET /addedFoods/{email}` - items created by the email (protected)
 * - `POST /addFood` - insert a new item
 * - `POST /updateFood/{id}` - field-merge upsert
 */

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::db::{self, FoodItem, FoodPatch, NewFood};
use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::server::state::AppState;

/// Query parameters accepted by `GET /allFoods`
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive substring match on the food name
    pub search: Option<String>,
    /// Present (any value) orders by purchase count, most purchased first
    pub sort: Option<String>,
}

/// List the catalog, optionally filtered and sorted
pub async fn all_foods(
    State(state): State<AppState>,
    Query(params): Query<CatalogQuery>,
) -> Result<Json<Vec<FoodItem>>, ApiError> {
    let pool = state.pool()?;
    let foods = db::list(pool, params.search.as_deref(), params.sort.is_some()).await?;
    Ok(Json(foods))
}

/// Fetch one food item; absent identifiers yield 404
pub async fn food_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FoodItem>, ApiError> {
    let pool = state.pool()?;
    let food = db::get(pool, id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(food))
}

/// List items created by the given email
///
/// Protected: the session email must match the path email, otherwise 403.
pub async fn added_foods(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(email): Path<String>,
) -> Result<Json<Vec<FoodItem>>, ApiError> {
    if user.email != email {
        tracing::warn!(
            "Session {} attempted to read items of {}",
            user.email,
            email
        );
        return Err(ApiError::Forbidden);
    }

    let pool = state.pool()?;
    let foods = db::list_by_creator(pool, &email).await?;
    Ok(Json(foods))
}

/// Insert a new food item
pub async fn add_food(
    State(state): State<AppState>,
    Json(food): Json<NewFood>,
) -> Result<Json<FoodItem>, ApiError> {
    let pool = state.pool()?;
    let created = db::insert(pool, food).await?;

    tracing::info!("Added food {} ({})", created.name, created.id);
    Ok(Json(created))
}

/// Field-merge upsert of a food item
///
/// Supplied fields overwrite; unspecified fields survive. A missing
/// identifier creates the item.
pub async fn update_food(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<FoodPatch>,
) -> Result<Json<FoodItem>, ApiError> {
    let pool = state.pool()?;
    let updated = db::upsert(pool, id, patch).await?;

    tracing::info!("Upserted food {}", updated.id);
    Ok(Json(updated))
}
