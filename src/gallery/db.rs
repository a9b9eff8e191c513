/**
 * Gallery Entries - Types and Database Operations
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A gallery card: an image with its submitter and caption
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct GalleryEntry {
    pub id: Uuid,
    pub submitter_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitter_email: Option<String>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub posted_at: DateTime<Utc>,
}

/// Payload accepted by `POST /gallery`
#[derive(Debug, Deserialize)]
pub struct NewGalleryEntry {
    pub submitter_name: String,
    #[serde(default)]
    pub submitter_email: Option<String>,
    pub image: String,
    #[serde(default)]
    pub caption: Option<String>,
}

const GALLERY_COLUMNS: &str =
    "id, submitter_name, submitter_email, image, caption, posted_at";

/// List all gallery entries, newest first
pub async fn list(pool: &PgPool) -> Result<Vec<GalleryEntry>, sqlx::Error> {
    sqlx::query_as::<_, GalleryEntry>(&format!(
        "SELECT {GALLERY_COLUMNS} FROM gallery ORDER BY posted_at DESC"
    ))
    .fetch_all(pool)
    .await
}

/// Insert a new gallery entry
pub async fn insert(pool: &PgPool, entry: NewGalleryEntry) -> Result<GalleryEntry, sqlx::Error> {
    sqlx::query_as::<_, GalleryEntry>(&format!(
        r#"
        INSERT INTO gallery (id, submitter_name, submitter_email, image, caption, posted_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {GALLERY_COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(&entry.submitter_name)
    .bind(&entry.submitter_email)
    .bind(&entry.image)
    .bind(&entry.caption)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_caption_optional() {
        let entry: NewGalleryEntry = serde_json::from_value(serde_json::json!({
            "submitter_name": "Alice",
            "image": "https://example.com/dish.jpg"
        }))
        .unwrap();

        assert_eq!(entry.caption, None);
        assert_eq!(entry.submitter_email, None);
    }
}
