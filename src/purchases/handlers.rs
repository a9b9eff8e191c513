/**
 * Purchase Handlers
 *
 * HTTP handlers for purchase records.
 *
 * # Routes
 *
 * - `POST /addPurchaseFood?id=&quantity=` - record a purchase; identifier
 *   and quantity come from the query string, the rest from the body
 * - `GET /purchasedFoods/{email}` - purchases made by the email (protected)
 * - `DELETE /deletePurchasedFood/{id}` - delete one record
 */

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::purchases::db::{self, NewPurchase, PurchaseRecord};
use crate::server::state::AppState;

/// Query parameters for `POST /addPurchaseFood`
#[derive(Debug, Deserialize)]
pub struct PurchaseParams {
    /// Identifier of the food item being purchased
    pub id: Uuid,
    /// Units purchased; also the amount deducted from stock
    pub quantity: i64,
}

/// Acknowledgement returned by the delete endpoint
#[derive(Debug, Serialize)]
pub struct DeleteAck {
    pub deleted_count: u64,
}

/// Record a purchase and update the food counters transactionally
pub async fn add_purchase(
    State(state): State<AppState>,
    Query(params): Query<PurchaseParams>,
    Json(order): Json<NewPurchase>,
) -> Result<Json<PurchaseRecord>, ApiError> {
    if params.quantity < 1 {
        return Err(ApiError::bad_request("quantity must be positive"));
    }

    let pool = state.pool()?;
    let purchase = db::record(pool, params.id, params.quantity, order).await?;

    tracing::info!(
        "Recorded purchase of {} x{} by {}",
        purchase.food_id,
        purchase.quantity,
        purchase.buyer_email
    );
    Ok(Json(purchase))
}

/// List purchases made by the given email
///
/// Protected: the session email must match the path email, otherwise 403.
pub async fn purchased_foods(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(email): Path<String>,
) -> Result<Json<Vec<PurchaseRecord>>, ApiError> {
    if user.email != email {
        tracing::warn!(
            "Session {} attempted to read purchases of {}",
            user.email,
            email
        );
        return Err(ApiError::Forbidden);
    }

    let pool = state.pool()?;
    let purchases = db::list_by_buyer(pool, &email).await?;
    Ok(Json(purchases))
}

/// Delete one purchase record
///
/// Reports the removed count; repeating the call yields 0. Stock is never
/// restored by a deletion.
pub async fn delete_purchase(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteAck>, ApiError> {
    let pool = state.pool()?;
    let deleted_count = db::delete(pool, id).await?;

    tracing::info!("Deleted {} purchase record(s) for {}", deleted_count, id);
    Ok(Json(DeleteAck { deleted_count }))
}
