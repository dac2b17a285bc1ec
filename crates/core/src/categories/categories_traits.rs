use crate::categories::categories_model::{Category, NewCategory};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for category repository operations
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    /// All categories ordered by name.
    fn list_categories(&self) -> Result<Vec<Category>>;
    fn get_category(&self, category_id: &str) -> Result<Category>;
    /// Number of expenses, across all users, referencing the category.
    fn count_expenses_for_category(&self, category_id: &str) -> Result<i64>;
    async fn create_category(&self, new_category: NewCategory) -> Result<Category>;
    async fn update_category(&self, category_id: &str, update: NewCategory) -> Result<Category>;
    async fn delete_category(&self, category_id: &str) -> Result<usize>;
}

/// Trait for category service operations
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    fn list_categories(&self) -> Result<Vec<Category>>;
    fn get_category(&self, category_id: &str) -> Result<Category>;
    async fn create_category(&self, new_category: NewCategory) -> Result<Category>;
    async fn update_category(&self, category_id: &str, update: NewCategory) -> Result<Category>;
    async fn delete_category(&self, category_id: &str) -> Result<()>;
}
