//! Business logic services

pub mod auth;
pub mod books;
pub mod categories;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub books: books::BooksService,
    pub categories: categories::CategoriesService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        let categories = categories::CategoriesService::new(repository.clone());
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            books: books::BooksService::new(repository, categories.clone()),
            categories,
        }
    }
}
