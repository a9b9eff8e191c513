/**
 * Food Catalog - Record Types and Database Operations
 *
 * Food items are typed records: the fields are enumerated here and validated
 * at the boundary before anything reaches the store. The creator identity is
 * stored flat (`made_by_name`, `made_by_email`) and exposed to the API as a
 * nested `made_by` object.
 */

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Creator identity attached to a food item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MadeBy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
}

/// A food item as exposed by the API
#[derive(Debug, Clone, Serialize)]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    /// Stock remaining; decremented by each purchase
    pub quantity: i64,
    /// Monotonic counter, incremented by each purchase
    pub purchase_count: i64,
    pub made_by: MadeBy,
}

/// Flat row shape as stored in the `foods` table
#[derive(Debug, Clone, sqlx::FromRow)]
struct FoodRow {
    id: Uuid,
    name: String,
    image: Option<String>,
    category: Option<String>,
    description: Option<String>,
    price: f64,
    quantity: i64,
    purchase_count: i64,
    made_by_name: Option<String>,
    made_by_email: String,
}

impl From<FoodRow> for FoodItem {
    fn from(row: FoodRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            image: row.image,
            category: row.category,
            description: row.description,
            price: row.price,
            quantity: row.quantity,
            purchase_count: row.purchase_count,
            made_by: MadeBy {
                name: row.made_by_name,
                email: row.made_by_email,
            },
        }
    }
}

/// Payload accepted by `POST /addFood`
#[derive(Debug, Deserialize)]
pub struct NewFood {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub quantity: i64,
    pub made_by: MadeBy,
}

/// Partial payload accepted by `POST /updateFood/{id}`
///
/// Every field is optional: supplied fields overwrite, unspecified fields
/// survive the update untouched.
#[derive(Debug, Default, Deserialize)]
pub struct FoodPatch {
    pub name: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub made_by: Option<MadeBy>,
}

const FOOD_COLUMNS: &str =
    "id, name, image, category, description, price, quantity, purchase_count, \
     made_by_name, made_by_email";

/// Escape LIKE wildcards so a search string matches literally
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// List food items
///
/// # Arguments
/// * `search` - case-insensitive substring match on the name
/// * `by_popularity` - order by `purchase_count` descending
///
/// No pagination; returns the full matching set.
pub async fn list(
    pool: &PgPool,
    search: Option<&str>,
    by_popularity: bool,
) -> Result<Vec<FoodItem>, sqlx::Error> {
    let pattern = search.map(|s| format!("%{}%", escape_like(s)));

    let mut sql = format!("SELECT {FOOD_COLUMNS} FROM foods");
    if pattern.is_some() {
        sql.push_str(" WHERE name ILIKE $1");
    }
    if by_popularity {
        sql.push_str(" ORDER BY purchase_count DESC");
    }

    let mut query = sqlx::query_as::<_, FoodRow>(&sql);
    if let Some(pattern) = &pattern {
        query = query.bind(pattern);
    }

    let rows = query.fetch_all(pool).await?;
    Ok(rows.into_iter().map(FoodItem::from).collect())
}

/// Fetch one food item by identifier
pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<FoodItem>, sqlx::Error> {
    let row = sqlx::query_as::<_, FoodRow>(&format!(
        "SELECT {FOOD_COLUMNS} FROM foods WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(FoodItem::from))
}

/// List food items created by an email
pub async fn list_by_creator(pool: &PgPool, email: &str) -> Result<Vec<FoodItem>, sqlx::Error> {
    let rows = sqlx::query_as::<_, FoodRow>(&format!(
        "SELECT {FOOD_COLUMNS} FROM foods WHERE made_by_email = $1"
    ))
    .bind(email)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(FoodItem::from).collect())
}

/// Insert a new food item
pub async fn insert(pool: &PgPool, food: NewFood) -> Result<FoodItem, sqlx::Error> {
    let row = sqlx::query_as::<_, FoodRow>(&format!(
        r#"
        INSERT INTO foods (id, name, image, category, description, price, quantity,
                           purchase_count, made_by_name, made_by_email)
        VALUES ($1, $2, $3, $4, $5, $6, $7, 0, $8, $9)
        RETURNING {FOOD_COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(&food.name)
    .bind(&food.image)
    .bind(&food.category)
    .bind(&food.description)
    .bind(food.price)
    .bind(food.quantity)
    .bind(&food.made_by.name)
    .bind(&food.made_by.email)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// Upsert a food item by identifier, merging fields
///
/// An existing row keeps every field the patch leaves unset; a missing row
/// is created from the supplied fields with zero counters.
pub async fn upsert(pool: &PgPool, id: Uuid, patch: FoodPatch) -> Result<FoodItem, sqlx::Error> {
    let made_by_name = patch.made_by.as_ref().and_then(|m| m.name.clone());
    let made_by_email = patch.made_by.as_ref().map(|m| m.email.clone());

    let row = sqlx::query_as::<_, FoodRow>(&format!(
        r#"
        INSERT INTO foods (id, name, image, category, description, price, quantity,
                           purchase_count, made_by_name, made_by_email)
        VALUES ($1, COALESCE($2, ''), $3, $4, $5, COALESCE($6, 0), COALESCE($7, 0),
                0, $8, COALESCE($9, ''))
        ON CONFLICT (id) DO UPDATE SET
            name = COALESCE($2, foods.name),
            image = COALESCE($3, foods.image),
            category = COALESCE($4, foods.category),
            description = COALESCE($5, foods.description),
            price = COALESCE($6, foods.price),
            quantity = COALESCE($7, foods.quantity),
            made_by_name = COALESCE($8, foods.made_by_name),
            made_by_email = COALESCE($9, foods.made_by_email)
        RETURNING {FOOD_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&patch.name)
    .bind(&patch.image)
    .bind(&patch.category)
    .bind(&patch.description)
    .bind(patch.price)
    .bind(patch.quantity)
    .bind(&made_by_name)
    .bind(&made_by_email)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}
