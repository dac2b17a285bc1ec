use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use crate::errors::{Error, Result};

use super::categories_model::{Category, NewCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};

pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        CategoryService { repository }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    fn list_categories(&self) -> Result<Vec<Category>> {
        self.repository.list_categories()
    }

    fn get_category(&self, category_id: &str) -> Result<Category> {
        self.repository.get_category(category_id)
    }

    async fn create_category(&self, new_category: NewCategory) -> Result<Category> {
        let new_category = new_category.normalized();
        new_category.validate()?;
        let created = self.repository.create_category(new_category).await?;
        info!("Created category '{}' ({})", created.name, created.id);
        Ok(created)
    }

    async fn update_category(&self, category_id: &str, update: NewCategory) -> Result<Category> {
        let update = update.normalized();
        update.validate()?;
        // Surface a typed not-found before the write.
        self.repository.get_category(category_id)?;
        self.repository.update_category(category_id, update).await
    }

    async fn delete_category(&self, category_id: &str) -> Result<()> {
        let category = self.repository.get_category(category_id)?;
        let in_use = self.repository.count_expenses_for_category(category_id)?;
        if in_use > 0 {
            debug!(
                "Refusing to delete category {} referenced by {} expenses",
                category_id, in_use
            );
            return Err(Error::ConstraintViolation(format!(
                "Category '{}' is used by {} expense(s) and cannot be deleted",
                category.name, in_use
            )));
        }
        self.repository.delete_category(category_id).await?;
        info!("Deleted category '{}' ({})", category.name, category_id);
        Ok(())
    }
}
