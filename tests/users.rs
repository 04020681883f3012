#[cfg(test)]
mod tests {
    use kanban_board_server::shared::accounts::AccountManager;
    use kanban_board_server::shared::handlers::debug_handler::DebugHandler;
    use kanban_board_server::shared::types::account::{LoginForm, RegisterForm};
    use kanban_board_server::shared::types::error::KanbanError;
    use kanban_board_server::shared::util::config::{parse_config, CountConfig};
    use std::sync::Arc;

    fn manager() -> (Arc<DebugHandler>, AccountManager) {
        let handler = Arc::new(DebugHandler::new());
        let manager = AccountManager::new(handler.clone(), CountConfig::default());
        (handler, manager)
    }

    fn registration(email: &str, password: &str, name: &str) -> RegisterForm {
        RegisterForm { email: email.to_string(), password: password.to_string(), name: name.to_string() }
    }

    fn credentials(email: &str, password: &str) -> LoginForm {
        LoginForm { email: email.to_string(), password: password.to_string() }
    }

    #[actix_web::test]
    async fn register_then_login() {
        let (_, manager) = manager();
        let account = manager.register(&registration("a@x.com", "pw", "Ann")).await.unwrap();
        assert_eq!(account.name, "Ann");
        assert_eq!(account.email, "a@x.com");
        assert_ne!(account.password_hash, "pw", "password is stored hashed");

        let logged_in = manager.authenticate(&credentials("a@x.com", "pw")).await;
        assert_eq!(logged_in.unwrap().id, account.id, "login succeeds with valid email + pass");

        assert!(matches!(manager.authenticate(&credentials("a@x.com", "wrong")).await,
            Err(KanbanError::InvalidCredentials)), "login fails with valid email, invalid pass");
        assert!(matches!(manager.authenticate(&credentials("nobody@x.com", "pw")).await,
            Err(KanbanError::InvalidCredentials)), "login fails with unknown email");
    }

    #[actix_web::test]
    async fn login_failures_are_indistinguishable() {
        let (_, manager) = manager();
        manager.register(&registration("a@x.com", "pw", "Ann")).await.unwrap();

        let wrong_password = manager.authenticate(&credentials("a@x.com", "nope")).await.unwrap_err();
        let no_account = manager.authenticate(&credentials("b@x.com", "pw")).await.unwrap_err();
        assert_eq!(wrong_password.to_string(), no_account.to_string());
    }

    #[actix_web::test]
    async fn duplicate_email_is_rejected() {
        let (handler, manager) = manager();
        manager.register(&registration("a@x.com", "pw", "Ann")).await.unwrap();
        assert_eq!(handler.account_count(), 1);

        assert!(matches!(manager.register(&registration("a@x.com", "other", "Bob")).await,
            Err(KanbanError::DuplicateEmail)), "same email twice");
        assert!(matches!(manager.register(&registration("A@X.COM", "other", "Bob")).await,
            Err(KanbanError::DuplicateEmail)), "email comparison ignores case");
        assert_eq!(handler.account_count(), 1, "no account created on rejection");
    }

    #[actix_web::test]
    async fn registration_validates_input() {
        let (handler, manager) = manager();
        assert!(matches!(manager.register(&registration("not-an-email", "pw", "Ann")).await,
            Err(KanbanError::Validation(_))));
        assert!(matches!(manager.register(&registration("a@x.com", "", "Ann")).await,
            Err(KanbanError::Validation(_))), "password required");
        assert!(matches!(manager.register(&registration("a@x.com", "pw", "  ")).await,
            Err(KanbanError::Validation(_))), "blank name");
        assert!(matches!(manager.register(&registration("a@x.com", "pw", "a name that is far too long")).await,
            Err(KanbanError::Validation(_))), "name too long");
        assert_eq!(handler.account_count(), 0);
    }

    #[actix_web::test]
    async fn overlong_password_never_logs_in() {
        let (_, manager) = manager();
        manager.register(&registration("a@x.com", "pw", "Ann")).await.unwrap();
        let long = "x".repeat(129);
        assert!(matches!(manager.authenticate(&credentials("a@x.com", &long)).await,
            Err(KanbanError::InvalidCredentials)));
    }

    #[actix_web::test]
    async fn shipped_limits_allow_short_passwords() {
        let config = parse_config(&std::fs::read_to_string("config.toml").unwrap()).unwrap();
        let manager = AccountManager::new(Arc::new(DebugHandler::new()), config.count);

        let account = manager.register(&registration("a@x.com", "pw", "Ann")).await.unwrap();
        let logged_in = manager.authenticate(&credentials("a@x.com", "pw")).await.unwrap();
        assert_eq!(logged_in.id, account.id);
        assert!(matches!(manager.authenticate(&credentials("a@x.com", "wrong")).await,
            Err(KanbanError::InvalidCredentials)));
    }

    #[actix_web::test]
    async fn current_identity_resolution() {
        let (_, manager) = manager();
        let account = manager.register(&registration("a@x.com", "pw", "Ann")).await.unwrap();

        let resolved = manager.current_identity(Some(account.id.to_string())).await.unwrap();
        assert_eq!(resolved.map(|a| a.id), Some(account.id));

        assert!(manager.current_identity(None).await.unwrap().is_none(), "no session");
        assert!(manager.current_identity(Some("garbage".to_string())).await.unwrap().is_none(), "malformed session");
        assert!(manager.current_identity(Some(uuid::Uuid::new_v4().to_string())).await.unwrap().is_none(),
            "session for an unknown account");
    }
}
