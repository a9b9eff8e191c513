/**
 * Router Configuration
 *
 * Maps every HTTP method+path of the API onto its handler.
 *
 * # Route Details
 *
 * ## Public
 * - `GET  /`                          - liveness string
 * - `GET  /allFoods`                  - catalog listing (search, sort)
 * - `GET  /food/{id}`                 - single food item
 * - `GET  /gallery` / `POST /gallery` - gallery listing and submission
 * - `GET  /reviews`                   - review listing
 * - `POST /addFood`                   - create a food item
 * - `POST /updateFood/{id}`           - field-merge upsert
 * - `POST /addPurchaseFood`           - record a purchase (query: id, quantity)
 * - `DELETE /deletePurchasedFood/{id}` - delete a purchase record
 * - `POST /jwt` / `GET /logOut`       - session cookie issue / clear
 *
 * ## Protected (session cookie + email match)
 * - `GET /addedFoods/{email}`         - items created by the email
 * - `GET /purchasedFoods/{email}`     - purchases made by the email
 */

use axum::{
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};

use crate::auth::handlers::{issue_token, log_out};
use crate::catalog::handlers::{add_food, added_foods, all_foods, food_by_id, update_food};
use crate::gallery::handlers::{add_gallery_entry, list_gallery};
use crate::middleware::require_session;
use crate::purchases::handlers::{add_purchase, delete_purchase, purchased_foods};
use crate::reviews::handlers::list_reviews;
use crate::server::state::AppState;

/// Create the router with all routes configured
pub fn create_router(state: AppState) -> Router {
    // Routes gated by a valid session cookie; the email-match check lives
    // in the handlers.
    let protected = Router::new()
        .route("/addedFoods/{email}", get(added_foods))
        .route("/purchasedFoods/{email}", get(purchased_foods))
        .route_layer(from_fn_with_state(state.clone(), require_session));

    Router::new()
        .route("/", get(root))
        .route("/allFoods", get(all_foods))
        .route("/food/{id}", get(food_by_id))
        .route("/addFood", post(add_food))
        .route("/updateFood/{id}", post(update_food))
        .route("/addPurchaseFood", post(add_purchase))
        .route("/deletePurchasedFood/{id}", delete(delete_purchase))
        .route("/gallery", get(list_gallery).post(add_gallery_entry))
        .route("/reviews", get(list_reviews))
        .route("/jwt", post(issue_token))
        .route("/logOut", get(log_out))
        .merge(protected)
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(state)
}

/// Root liveness route
async fn root() -> &'static str {
    "My Muhammad Cuisine server is running here!"
}
