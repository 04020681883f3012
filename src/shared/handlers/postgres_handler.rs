use crate::shared::util::config;
use crate::shared::util::handler::AccountDataHandler;
use crate::shared::types::account::{Account, AccountId};
use crate::shared::types::error::{KanbanError, KanbanResult};

use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::{PgRow, PgPool};

#[derive(Clone)]
pub struct PostgresHandler {
    pool: PgPool
}

impl PostgresHandler {
    pub async fn new() -> Result<PostgresHandler, sqlx::Error> {
        Ok(PostgresHandler { pool: config::get_pool().await? })
    }

    pub fn with_pool(pool: PgPool) -> PostgresHandler {
        PostgresHandler { pool }
    }
}

fn account_from_row(row: &PgRow) -> Account {
    Account {
        id: row.get::<AccountId, &str>("id"),
        name: row.get::<String, &str>("name"),
        email: row.get::<String, &str>("email"),
        password_hash: row.get::<String, &str>("password_hash")
    }
}

#[async_trait]
impl AccountDataHandler for PostgresHandler {
    async fn init(&self) -> KanbanResult<()> {
        sqlx::query(r#"
        CREATE TABLE IF NOT EXISTS accounts (
            id uuid primary key unique,
            name text NOT NULL CHECK(length(name) <= 20 and length(name) > 0),
            email text NOT NULL UNIQUE CHECK(length(email) <= 100),
            password_hash text NOT NULL
        );"#).execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_account(&self, account: &Account) -> KanbanResult<()> {
        sqlx::query("INSERT INTO accounts(id, name, email, password_hash) VALUES($1, $2, $3, $4);")
            .bind(account.id).bind(&account.name).bind(&account.email).bind(&account.password_hash)
            .execute(&self.pool).await?;
        Ok(())
    }

    async fn get_account(&self, id: &AccountId) -> KanbanResult<Account> {
        let row = sqlx::query("SELECT * FROM accounts WHERE id = $1;")
            .bind(id).fetch_optional(&self.pool).await?;
        match row {
            Some(row) => Ok(account_from_row(&row)),
            None => Err(KanbanError::NotFound("Account"))
        }
    }

    async fn find_by_email(&self, email: &str) -> KanbanResult<Option<Account>> {
        Ok(sqlx::query("SELECT * FROM accounts WHERE email = $1;")
            .bind(email)
            .map(|row: PgRow| account_from_row(&row))
            .fetch_optional(&self.pool).await?)
    }
}
