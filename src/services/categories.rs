//! Category service

use crate::{
    error::{AppError, AppResult},
    repository::Repository,
};

#[derive(Clone)]
pub struct CategoriesService {
    repository: Repository,
}

impl CategoriesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Check whether a single category exists
    pub async fn category_exists(&self, id: i64) -> AppResult<bool> {
        self.repository.categories.exists_by_id(id).await
    }

    /// Validate that every referenced category exists
    pub async fn validate_exist(&self, ids: &[i64]) -> AppResult<()> {
        for &id in ids {
            if !self.category_exists(id).await? {
                return Err(AppError::Validation(format!(
                    "Category {} does not exist",
                    id
                )));
            }
        }
        Ok(())
    }
}
