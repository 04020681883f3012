// A handler that just stores accounts in memory (non-persistent)
// Used for tests and local debugging

use crate::shared::util::handler::AccountDataHandler;
use crate::shared::types::account::{Account, AccountId};
use crate::shared::types::error::{KanbanError, KanbanResult};

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct DebugHandler {
    accounts: Mutex<HashMap<AccountId, Account>>
}

impl DebugHandler {
    pub fn new() -> DebugHandler {
        DebugHandler::default()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }
}

#[async_trait]
impl AccountDataHandler for DebugHandler {
    async fn init(&self) -> KanbanResult<()> {
        Ok(())
    }

    async fn insert_account(&self, account: &Account) -> KanbanResult<()> {
        let mut accounts = self.accounts.lock().unwrap();
        // Mirrors the UNIQUE constraint on accounts.email
        if accounts.values().any(|a| a.email == account.email) {
            return Err(KanbanError::DuplicateEmail);
        }
        accounts.insert(account.id, account.clone());
        Ok(())
    }

    async fn get_account(&self, id: &AccountId) -> KanbanResult<Account> {
        match self.accounts.lock().unwrap().get(id) {
            Some(account) => Ok(account.clone()),
            None => Err(KanbanError::NotFound("Account"))
        }
    }

    async fn find_by_email(&self, email: &str) -> KanbanResult<Option<Account>> {
        Ok(self.accounts.lock().unwrap().values().find(|a| a.email == email).cloned())
    }
}
