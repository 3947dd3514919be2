//! Book catalog service

use std::collections::HashMap;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

use super::categories::CategoriesService;

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
    categories: CategoriesService,
}

impl BooksService {
    pub fn new(repository: Repository, categories: CategoriesService) -> Self {
        Self {
            repository,
            categories,
        }
    }

    /// Create a new book. Referenced categories are validated before the
    /// insert so a bad reference never leaves a half-linked record.
    pub async fn create_book(&self, input: CreateBook) -> AppResult<Book> {
        self.categories.validate_exist(&input.categories).await?;

        let mut created = self.repository.books.create(&input).await?;

        if !input.categories.is_empty() {
            self.repository
                .categories
                .add_links(created.id, &input.categories)
                .await?;
        }
        created.categories = input.categories;

        tracing::info!("Created book id={}", created.id);
        Ok(created)
    }

    /// List all books with their category ids attached
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        let mut books = self.repository.books.list().await?;

        let links = self.repository.categories.all_links().await?;
        let mut by_book: HashMap<i64, Vec<i64>> = HashMap::new();
        for link in links {
            by_book.entry(link.book_id).or_default().push(link.category_id);
        }
        for book in &mut books {
            if let Some(ids) = by_book.remove(&book.id) {
                book.categories = ids;
            }
        }

        Ok(books)
    }

    /// Field-level merge-patch by id. Returns None when no such book exists;
    /// in that case nothing is created or modified.
    pub async fn update_book_partial(
        &self,
        id: i64,
        patch: UpdateBook,
    ) -> AppResult<Option<Book>> {
        let Some(mut book) = self.repository.books.get_by_id(id).await? else {
            return Ok(None);
        };

        patch.apply_to(&mut book);

        let mut updated = self.repository.books.update(&book).await?;
        updated.categories = self
            .repository
            .categories
            .links_for_book(updated.id)
            .await?
            .into_iter()
            .map(|link| link.category_id)
            .collect();

        Ok(Some(updated))
    }
}
