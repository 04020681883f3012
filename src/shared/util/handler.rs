//! An abstraction layer interface for account storage
use crate::shared::types::account::{Account, AccountId};
use crate::shared::types::error::KanbanResult;

use async_trait::async_trait;

#[async_trait]
pub trait AccountDataHandler: Send + Sync {
    // Called on first launch for setup
    async fn init(&self) -> KanbanResult<()>;

    /// Fails with `DuplicateEmail` if the email is taken
    async fn insert_account(&self, account: &Account) -> KanbanResult<()>;
    async fn get_account(&self, id: &AccountId) -> KanbanResult<Account>;
    async fn find_by_email(&self, email: &str) -> KanbanResult<Option<Account>>;
}
