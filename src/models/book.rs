//! Book (catalog entry) model and related types.
//!
//! The wire contract keeps the legacy Spanish field names (`titulo`,
//! `anioPublicacion`, `autor`, `categorias`) that existing clients depend on;
//! internally everything is English.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full book model (DB + API)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "anioPublicacion")]
    pub publication_year: Option<i32>,
    #[serde(rename = "autor")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Category ids linked through the join table (loaded separately)
    #[sqlx(skip)]
    #[serde(rename = "categorias", default)]
    pub categories: Vec<i64>,
}

/// Create book request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBook {
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "anioPublicacion")]
    pub publication_year: Option<i32>,
    #[serde(rename = "autor")]
    pub author: Option<String>,
    #[serde(rename = "categorias", default)]
    pub categories: Vec<i64>,
}

/// Partial update request: only non-null fields overwrite stored values
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "anioPublicacion")]
    pub publication_year: Option<i32>,
    #[serde(rename = "autor")]
    pub author: Option<String>,
}

impl UpdateBook {
    /// Merge-patch: overwrite each field of `book` only when the incoming
    /// value is present. The id is never touched.
    pub fn apply_to(&self, book: &mut Book) {
        if let Some(ref title) = self.title {
            book.title = Some(title.clone());
        }
        if let Some(year) = self.publication_year {
            book.publication_year = Some(year);
        }
        if let Some(ref author) = self.author {
            book.author = Some(author.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book {
            id: 1,
            title: Some("Dune".to_string()),
            publication_year: Some(1965),
            author: Some("Frank Herbert".to_string()),
            created_at: None,
            updated_at: None,
            categories: vec![],
        }
    }

    #[test]
    fn patch_with_only_title_changes_only_title() {
        let mut book = dune();
        let patch = UpdateBook {
            title: Some("Dune Messiah".to_string()),
            ..Default::default()
        };
        patch.apply_to(&mut book);
        assert_eq!(book.title.as_deref(), Some("Dune Messiah"));
        assert_eq!(book.publication_year, Some(1965));
        assert_eq!(book.author.as_deref(), Some("Frank Herbert"));
        assert_eq!(book.id, 1);
    }

    #[test]
    fn empty_patch_leaves_book_unchanged() {
        let mut book = dune();
        UpdateBook::default().apply_to(&mut book);
        assert_eq!(book.title.as_deref(), Some("Dune"));
        assert_eq!(book.publication_year, Some(1965));
        assert_eq!(book.author.as_deref(), Some("Frank Herbert"));
    }

    #[test]
    fn full_patch_overwrites_every_field() {
        let mut book = dune();
        let patch = UpdateBook {
            title: Some("Children of Dune".to_string()),
            publication_year: Some(1976),
            author: Some("F. Herbert".to_string()),
        };
        patch.apply_to(&mut book);
        assert_eq!(book.title.as_deref(), Some("Children of Dune"));
        assert_eq!(book.publication_year, Some(1976));
        assert_eq!(book.author.as_deref(), Some("F. Herbert"));
    }

    #[test]
    fn wire_names_stay_spanish() {
        let book = dune();
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["titulo"], "Dune");
        assert_eq!(json["anioPublicacion"], 1965);
        assert_eq!(json["autor"], "Frank Herbert");
        assert!(json["categorias"].is_array());
    }
}
