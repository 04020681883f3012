use crate::shared::types::account::AccountId;
use crate::shared::types::error::{KanbanError, KanbanResult};
use crate::shared::util::config;
use crate::kanban::types::board::Board;
use crate::kanban::types::card::{Card, CardContent, CardKind, Position};
use crate::kanban::util::handler::KanbanDataHandler;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use sqlx::Row;
use sqlx::postgres::{PgPool, PgRow};

#[derive(Clone)]
pub struct PostgresHandler {
    pool: PgPool
}

impl PostgresHandler {
    pub fn with_pool(pool: PgPool) -> PostgresHandler {
        PostgresHandler { pool }
    }
}

fn board_from_row(row: &PgRow) -> Board {
    Board {
        id: row.get::<Uuid, &str>("id"),
        owner_id: row.get::<AccountId, &str>("owner_id"),
        name: row.get::<String, &str>("name"),
        info: row.get::<String, &str>("info"),
        progress: row.get::<i32, &str>("progress"),
        created: row.get::<chrono::DateTime<Utc>, &str>("created"),
        edited: row.get::<chrono::DateTime<Utc>, &str>("edited")
    }
}

fn card_from_row(row: &PgRow) -> Card {
    let kind = row.get::<CardKind, &str>("card_type");
    Card {
        id: row.get::<Uuid, &str>("id"),
        board_id: row.get::<Uuid, &str>("board_id"),
        title: row.get::<String, &str>("title"),
        content: CardContent::from_parts(kind, row.get::<Option<String>, &str>("content")),
        position: row.get::<Position, &str>("position"),
        progress: row.get::<i32, &str>("progress"),
        created: row.get::<chrono::DateTime<Utc>, &str>("created"),
        edited: row.get::<chrono::DateTime<Utc>, &str>("edited")
    }
}

#[async_trait]
impl KanbanDataHandler for PostgresHandler {
    async fn init(&self) -> KanbanResult<()> {
        sqlx::query(format!("CREATE SCHEMA IF NOT EXISTS kanban AUTHORIZATION {};", config::get_config().database.user).as_str())
            .execute(&self.pool).await?;

        sqlx::query(r#"CREATE TABLE IF NOT EXISTS kanban.boards (
            id uuid primary key unique,
            owner_id uuid NOT NULL REFERENCES accounts(id),
            name text NOT NULL CHECK(length(name) <= 100 and length(name) > 0),
            info text NOT NULL CHECK(length(info) <= 1000),
            progress integer NOT NULL CHECK(progress >= 0 and progress <= 100),
            created timestamptz NOT NULL,
            edited timestamptz NOT NULL
        );"#).execute(&self.pool).await?;

        // One table for every card variant, content holds the text or image url
        sqlx::query(r#"CREATE TABLE IF NOT EXISTS kanban.cards (
            id uuid primary key unique,
            board_id uuid NOT NULL REFERENCES kanban.boards(id),
            card_type integer NOT NULL CHECK(card_type >= 0 and card_type <= 2),
            title text NOT NULL CHECK(length(title) <= 200 and length(title) > 0),
            content text CHECK(length(content) <= 600),
            position integer NOT NULL CHECK(position >= 0 and position <= 3),
            progress integer NOT NULL CHECK(progress >= 0 and progress <= 100),
            created timestamptz NOT NULL,
            edited timestamptz NOT NULL
        );"#).execute(&self.pool).await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS cards_board_id ON kanban.cards(board_id);")
            .execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_board(&self, board: &Board) -> KanbanResult<()> {
        sqlx::query(r#"INSERT INTO kanban.boards(id, owner_id, name, info, progress, created, edited)
            VALUES($1, $2, $3, $4, $5, $6, $7);"#)
            .bind(board.id).bind(board.owner_id).bind(&board.name).bind(&board.info)
            .bind(board.progress).bind(board.created).bind(board.edited)
            .execute(&self.pool).await?;
        Ok(())
    }

    async fn save_board(&self, board: &Board) -> KanbanResult<()> {
        let result = sqlx::query("UPDATE kanban.boards SET name = $2, info = $3, progress = $4, edited = $5 WHERE id = $1;")
            .bind(board.id).bind(&board.name).bind(&board.info).bind(board.progress).bind(board.edited)
            .execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(KanbanError::NotFound("Board"));
        }
        Ok(())
    }

    async fn get_board(&self, board_id: &Uuid) -> KanbanResult<Board> {
        match sqlx::query("SELECT * FROM kanban.boards WHERE id = $1;")
                .bind(board_id).fetch_optional(&self.pool).await? {
            Some(row) => Ok(board_from_row(&row)),
            None => Err(KanbanError::NotFound("Board"))
        }
    }

    async fn get_boards(&self, owner_id: &AccountId) -> KanbanResult<Vec<Board>> {
        Ok(sqlx::query("SELECT * FROM kanban.boards WHERE owner_id = $1 ORDER BY created ASC;")
            .bind(owner_id)
            .map(|row: PgRow| board_from_row(&row))
            .fetch_all(&self.pool).await?)
    }

    async fn insert_card(&self, card: &Card) -> KanbanResult<()> {
        let result = sqlx::query(r#"INSERT INTO kanban.cards(id, board_id, card_type, title, content, position, progress, created, edited)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9);"#)
            .bind(card.id).bind(card.board_id).bind(card.content.kind()).bind(&card.title)
            .bind(card.content.payload()).bind(card.position).bind(card.progress)
            .bind(card.created).bind(card.edited)
            .execute(&self.pool).await;

        match result {
            Ok(_) => Ok(()),
            Err(err) => match KanbanError::from(err) {
                KanbanError::NotFound(_) => Err(KanbanError::NotFound("Board")),
                err => Err(err)
            }
        }
    }

    async fn save_card(&self, card: &Card) -> KanbanResult<()> {
        let result = sqlx::query(r#"UPDATE kanban.cards SET title = $3, content = $4, position = $5, progress = $6, edited = $7
            WHERE id = $1 AND card_type = $2;"#)
            .bind(card.id).bind(card.content.kind()).bind(&card.title).bind(card.content.payload())
            .bind(card.position).bind(card.progress).bind(card.edited)
            .execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(KanbanError::NotFound("Card"));
        }
        Ok(())
    }

    async fn get_card(&self, card_id: &Uuid, kind: CardKind) -> KanbanResult<Card> {
        match sqlx::query("SELECT * FROM kanban.cards WHERE id = $1 AND card_type = $2;")
                .bind(card_id).bind(kind).fetch_optional(&self.pool).await? {
            Some(row) => Ok(card_from_row(&row)),
            None => Err(KanbanError::NotFound("Card"))
        }
    }

    async fn delete_card(&self, card_id: &Uuid, kind: CardKind) -> KanbanResult<()> {
        let result = sqlx::query("DELETE FROM kanban.cards WHERE id = $1 AND card_type = $2;")
            .bind(card_id).bind(kind)
            .execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(KanbanError::NotFound("Card"));
        }
        Ok(())
    }

    async fn get_cards(&self, board_id: &Uuid) -> KanbanResult<Vec<Card>> {
        Ok(sqlx::query("SELECT * FROM kanban.cards WHERE board_id = $1 ORDER BY position ASC, created ASC;")
            .bind(board_id)
            .map(|row: PgRow| card_from_row(&row))
            .fetch_all(&self.pool).await?)
    }
}
