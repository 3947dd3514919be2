//! Book catalog endpoints
//!
//! Paths keep the legacy `/libro/*` contract existing clients rely on.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

use super::AuthenticatedUser;

/// Create a new book
#[utoipa::path(
    post,
    path = "/libro/crear",
    tag = "libros",
    security(("bearer_auth" = [])),
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book created", body = Book),
        (status = 400, description = "Unknown category reference"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(payload): Json<CreateBook>,
) -> AppResult<Json<Book>> {
    claims.require_manage_books()?;

    let created = state.services.books.create_book(payload).await?;
    Ok(Json(created))
}

/// List all books
#[utoipa::path(
    get,
    path = "/libro/consultar",
    tag = "libros",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of books", body = [Book]),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Book>>> {
    claims.require_manage_books()?;

    let books = state.services.books.list_books().await?;
    Ok(Json(books))
}

/// Partially update a book: only fields present in the request body are
/// overwritten, everything else keeps its stored value
#[utoipa::path(
    patch,
    path = "/libro/actualizar/{id}",
    tag = "libros",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book_partial(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    claims.require_manage_books()?;

    let updated = state
        .services
        .books
        .update_book_partial(id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

    Ok(Json(updated))
}
