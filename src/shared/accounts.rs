//! Registration, credential checks and session identity resolution

use crate::shared::types::account::{Account, AccountId, LoginForm, RegisterForm};
use crate::shared::types::error::{KanbanError, KanbanResult};
use crate::shared::util::config::CountConfig;
use crate::shared::util::handler::AccountDataHandler;
use crate::shared::util::validate;

use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct AccountManager {
    handler: Arc<dyn AccountDataHandler>,
    limits: CountConfig
}

impl AccountManager {
    pub fn new(handler: Arc<dyn AccountDataHandler>, limits: CountConfig) -> AccountManager {
        AccountManager { handler, limits }
    }

    pub async fn register(&self, form: &RegisterForm) -> KanbanResult<Account> {
        let name = validate::required("Name", &form.name, validate::MAX_ACCOUNT_NAME_LENGTH)?;
        let email = validate::email(&form.email)?;
        let password = validate::password(&form.password,
            self.limits.min_password_length, self.limits.max_password_length)?;

        if self.handler.find_by_email(&email).await?.is_some() {
            return Err(KanbanError::DuplicateEmail);
        }

        let account = Account {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash: libpasta::hash_password(password)
        };
        self.handler.insert_account(&account).await?;
        log::info!("registered account {} ({})", account.id, account.email);
        Ok(account)
    }

    pub async fn authenticate(&self, form: &LoginForm) -> KanbanResult<Account> {
        // Too long password: never hash it, always invalid
        if form.password.is_empty() || form.password.chars().count() > self.limits.max_password_length {
            return Err(KanbanError::InvalidCredentials);
        }

        let email = form.email.trim().to_lowercase();
        match self.handler.find_by_email(&email).await? {
            None => {
                log::debug!("login failed for {email}: no such account");
                Err(KanbanError::InvalidCredentials)
            },
            Some(account) => {
                if libpasta::verify_password(&account.password_hash, &form.password) {
                    Ok(account)
                } else {
                    log::debug!("login failed for {email}: wrong password");
                    Err(KanbanError::InvalidCredentials)
                }
            }
        }
    }

    /// `session_id` is whatever the session cookie carried; stale or
    /// malformed ids resolve to no account
    pub async fn current_identity(&self, session_id: Option<String>) -> KanbanResult<Option<Account>> {
        let id = match session_id.as_deref().map(Uuid::parse_str) {
            Some(Ok(id)) => id,
            _ => return Ok(None)
        };
        self.get_account(&id).await
    }

    pub async fn get_account(&self, id: &AccountId) -> KanbanResult<Option<Account>> {
        match self.handler.get_account(id).await {
            Ok(account) => Ok(Some(account)),
            Err(KanbanError::NotFound(_)) => Ok(None),
            Err(err) => Err(err)
        }
    }

    pub async fn find_by_email(&self, email: &str) -> KanbanResult<Option<Account>> {
        self.handler.find_by_email(&email.trim().to_lowercase()).await
    }
}
