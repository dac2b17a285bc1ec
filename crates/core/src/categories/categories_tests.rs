#[cfg(test)]
mod tests {
    use crate::categories::{
        Category, CategoryRepositoryTrait, CategoryService, CategoryServiceTrait, NewCategory,
    };
    use crate::errors::{Error, Result};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    // --- Mock CategoryRepository ---
    #[derive(Clone, Default)]
    struct MockCategoryRepository {
        categories: Arc<Mutex<Vec<Category>>>,
        usage: Arc<Mutex<HashMap<String, i64>>>,
    }

    impl MockCategoryRepository {
        fn with_category(self, id: &str, name: &str) -> Self {
            let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();
            self.categories.lock().unwrap().push(Category {
                id: id.to_string(),
                name: name.to_string(),
                icon: "fa-tag".to_string(),
                color: "#112233".to_string(),
                description: None,
                created_at: ts,
                updated_at: ts,
            });
            self
        }

        fn set_usage(&self, id: &str, count: i64) {
            self.usage.lock().unwrap().insert(id.to_string(), count);
        }
    }

    #[async_trait]
    impl CategoryRepositoryTrait for MockCategoryRepository {
        fn list_categories(&self) -> Result<Vec<Category>> {
            let mut all = self.categories.lock().unwrap().clone();
            all.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(all)
        }

        fn get_category(&self, category_id: &str) -> Result<Category> {
            self.categories
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == category_id)
                .cloned()
                .ok_or_else(|| Error::NotFound(format!("Category {category_id}")))
        }

        fn count_expenses_for_category(&self, category_id: &str) -> Result<i64> {
            Ok(*self.usage.lock().unwrap().get(category_id).unwrap_or(&0))
        }

        async fn create_category(&self, new_category: NewCategory) -> Result<Category> {
            let ts = chrono::Utc::now().naive_utc();
            let category = Category {
                id: format!("cat-{}", self.categories.lock().unwrap().len() + 1),
                name: new_category.name,
                icon: new_category.icon,
                color: new_category.color,
                description: new_category.description,
                created_at: ts,
                updated_at: ts,
            };
            self.categories.lock().unwrap().push(category.clone());
            Ok(category)
        }

        async fn update_category(
            &self,
            category_id: &str,
            update: NewCategory,
        ) -> Result<Category> {
            let mut categories = self.categories.lock().unwrap();
            let existing = categories
                .iter_mut()
                .find(|c| c.id == category_id)
                .ok_or_else(|| Error::NotFound(format!("Category {category_id}")))?;
            existing.name = update.name;
            existing.icon = update.icon;
            existing.color = update.color;
            existing.description = update.description;
            Ok(existing.clone())
        }

        async fn delete_category(&self, category_id: &str) -> Result<usize> {
            let mut categories = self.categories.lock().unwrap();
            let before = categories.len();
            categories.retain(|c| c.id != category_id);
            Ok(before - categories.len())
        }
    }

    fn input(name: &str, color: &str) -> NewCategory {
        NewCategory {
            name: name.to_string(),
            icon: "fa-mug-hot".to_string(),
            color: color.to_string(),
            description: Some("   ".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_category_trims_and_drops_blank_description() {
        let repo = MockCategoryRepository::default();
        let service = CategoryService::new(Arc::new(repo));

        let created = service
            .create_category(input("  Coffee  ", "#A0522D"))
            .await
            .unwrap();

        assert_eq!(created.name, "Coffee");
        assert_eq!(created.description, None);
    }

    #[tokio::test]
    async fn test_create_category_rejects_bad_fields() {
        let service = CategoryService::new(Arc::new(MockCategoryRepository::default()));

        let err = service
            .create_category(input("", "blue"))
            .await
            .unwrap_err();

        match err {
            Error::Validation(v) => {
                let fields: Vec<&str> = v.field_errors().iter().map(|f| f.field.as_str()).collect();
                assert_eq!(fields, vec!["name", "color"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_name_length_limit() {
        let long = "x".repeat(101);
        assert!(input(&long, "#000000").validate().is_err());
        assert!(input(&"x".repeat(100), "#000000").validate().is_ok());
    }

    #[tokio::test]
    async fn test_delete_refused_while_expenses_reference_category() {
        let repo = MockCategoryRepository::default().with_category("food", "Food");
        repo.set_usage("food", 3);
        let service = CategoryService::new(Arc::new(repo.clone()));

        let err = service.delete_category("food").await.unwrap_err();

        assert!(matches!(err, Error::ConstraintViolation(_)));
        assert_eq!(repo.list_categories().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_unused_category() {
        let repo = MockCategoryRepository::default().with_category("food", "Food");
        let service = CategoryService::new(Arc::new(repo.clone()));

        service.delete_category("food").await.unwrap();

        assert!(repo.list_categories().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_category_is_not_found() {
        let service = CategoryService::new(Arc::new(MockCategoryRepository::default()));

        let err = service
            .update_category("nope", input("Food", "#000000"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }
}
