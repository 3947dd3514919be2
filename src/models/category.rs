//! Category model and book-category join types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Category model. Only existence matters to the catalog operations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Join row associating a book and a category (many-to-many link table)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookCategory {
    pub book_id: i64,
    pub category_id: i64,
}
