#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::test_fixtures::{user, InMemoryStore};
    use crate::users::{NewUser, ProfileUpdate, UserService, UserServiceTrait};
    use std::sync::Arc;

    fn new_user(username: &str, email: Option<&str>) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.map(str::to_string),
            first_name: Some("  ".to_string()),
            last_name: None,
            password_hash: "$argon2id$stub".to_string(),
        }
    }

    fn fields(err: Error) -> Vec<String> {
        match err {
            Error::Validation(v) => v.field_errors().iter().map(|f| f.field.clone()).collect(),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_register_normalizes_input() {
        let store = InMemoryStore::new();
        let service = UserService::new(Arc::new(store.clone()));

        let created = service
            .register(new_user(" ana ", Some(" Ana@Example.com ")))
            .await
            .unwrap();

        assert_eq!(created.username, "ana");
        assert_eq!(created.email.as_deref(), Some("ana@example.com"));
        assert_eq!(created.first_name, None);
        assert!(service.find_credentials("ana").unwrap().is_some());
    }

    #[tokio::test]
    async fn test_register_rejects_duplicates() {
        let store = InMemoryStore::new();
        store.add_user(user("u-1", "ana", Some("ana@example.com")));
        let service = UserService::new(Arc::new(store));

        let err = service
            .register(new_user("ana", Some("ana@example.com")))
            .await
            .unwrap_err();

        assert_eq!(fields(err), vec!["username", "email"]);
    }

    #[tokio::test]
    async fn test_register_rejects_bad_username_and_email() {
        let service = UserService::new(Arc::new(InMemoryStore::new()));

        let err = service
            .register(new_user("ana smith", Some("not-an-email")))
            .await
            .unwrap_err();

        assert_eq!(fields(err), vec!["username", "email"]);
    }

    #[tokio::test]
    async fn test_profile_email_must_be_unique_among_others() {
        let store = InMemoryStore::new();
        store.add_user(user("u-1", "ana", Some("ana@example.com")));
        store.add_user(user("u-2", "bob", Some("bob@example.com")));
        let service = UserService::new(Arc::new(store));

        let err = service
            .update_profile(
                "u-1",
                ProfileUpdate {
                    email: "BOB@example.com".to_string(),
                    first_name: None,
                    last_name: None,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(fields(err), vec!["email"]);

        // Keeping one's own address is fine.
        let updated = service
            .update_profile(
                "u-1",
                ProfileUpdate {
                    email: "ana@example.com".to_string(),
                    first_name: Some("Ana".to_string()),
                    last_name: Some("Pérez".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.display_name(), "Ana Pérez");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let mut u = user("u-1", "ana", None);
        assert_eq!(u.display_name(), "ana");
        u.last_name = Some("Pérez".to_string());
        assert_eq!(u.display_name(), "Pérez");
    }
}
