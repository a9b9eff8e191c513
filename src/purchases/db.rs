/**
 * Purchase Records - Types and Database Operations
 *
 * A purchase references a food item by identifier only; there is no foreign
 * key, and deleting a purchase record never restores stock.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A purchase record as stored and returned by the API
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PurchaseRecord {
    pub id: Uuid,
    /// Identifier of the purchased food item (no referential integrity)
    pub food_id: Uuid,
    pub buyer_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub quantity: i64,
    pub ordered_at: DateTime<Utc>,
}

/// Payload accepted by `POST /addPurchaseFood`
///
/// The food identifier and quantity arrive as query parameters, not here.
#[derive(Debug, Deserialize)]
pub struct NewPurchase {
    pub buyer_email: String,
    #[serde(default)]
    pub buyer_name: Option<String>,
    #[serde(default)]
    pub food_name: Option<String>,
    #[serde(default)]
    pub food_image: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

const PURCHASE_COLUMNS: &str =
    "id, food_id, buyer_email, buyer_name, food_name, food_image, price, quantity, ordered_at";

/// Record a purchase
///
/// Inserts the purchase record and applies the stock update (`quantity -= q`,
/// `purchase_count += 1`) in a single transaction: both writes commit or
/// neither does, so a crash cannot leave the record and the counters
/// inconsistent.
pub async fn record(
    pool: &PgPool,
    food_id: Uuid,
    quantity: i64,
    order: NewPurchase,
) -> Result<PurchaseRecord, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let purchase = sqlx::query_as::<_, PurchaseRecord>(&format!(
        r#"
        INSERT INTO purchases (id, food_id, buyer_email, buyer_name, food_name,
                               food_image, price, quantity, ordered_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {PURCHASE_COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(food_id)
    .bind(&order.buyer_email)
    .bind(&order.buyer_name)
    .bind(&order.food_name)
    .bind(&order.food_image)
    .bind(order.price)
    .bind(quantity)
    .bind(Utc::now())
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        "UPDATE foods SET quantity = quantity - $1, purchase_count = purchase_count + 1 \
         WHERE id = $2",
    )
    .bind(quantity)
    .bind(food_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(purchase)
}

/// List purchases made by an email
pub async fn list_by_buyer(
    pool: &PgPool,
    email: &str,
) -> Result<Vec<PurchaseRecord>, sqlx::Error> {
    sqlx::query_as::<_, PurchaseRecord>(&format!(
        "SELECT {PURCHASE_COLUMNS} FROM purchases WHERE buyer_email = $1 \
         ORDER BY ordered_at DESC"
    ))
    .bind(email)
    .fetch_all(pool)
    .await
}

/// Delete one purchase record by identifier
///
/// Returns the number of rows removed: 1 on success, 0 when the record was
/// already gone.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM purchases WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
