//! Board and card operations on behalf of a logged in account.
//!
//! Every operation takes the acting account explicitly. Any logged in
//! account may act on any board; the account is recorded as the owner on
//! creation and otherwise only shows up in logs.

use crate::shared::types::account::Account;
use crate::shared::types::error::KanbanResult;
use crate::shared::util::validate;
use crate::kanban::types::board::{Board, BoardUpdate, BoardView, NewBoard};
use crate::kanban::types::card::{Card, CardContent, CardKind, CardUpdate, NewCard, Position};
use crate::kanban::util::handler::KanbanDataHandler;
use crate::kanban::util::progress::{self, Direction};

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct KanbanRepository {
    handler: Arc<dyn KanbanDataHandler>
}

fn card_text(value: &str) -> KanbanResult<String> {
    validate::required("Text", value, validate::MAX_CARD_TEXT_LENGTH)
}

impl KanbanRepository {
    pub fn new(handler: Arc<dyn KanbanDataHandler>) -> KanbanRepository {
        KanbanRepository { handler }
    }

    // ------------------- Boards ---------------------

    pub async fn create_board(&self, owner: &Account, params: &NewBoard) -> KanbanResult<Board> {
        let now = Utc::now();
        let board = Board {
            id: Uuid::new_v4(),
            owner_id: owner.id,
            name: validate::required("Name", &params.name, validate::MAX_BOARD_NAME_LENGTH)?,
            info: validate::required("Info", &params.info, validate::MAX_BOARD_INFO_LENGTH)?,
            progress: 0,
            created: now,
            edited: now
        };
        self.handler.insert_board(&board).await?;
        log::info!("{} created board {}", owner.id, board.id);
        Ok(board)
    }

    pub async fn get_board(&self, _actor: &Account, board_id: &Uuid) -> KanbanResult<Board> {
        self.handler.get_board(board_id).await
    }

    pub async fn list_boards(&self, owner: &Account) -> KanbanResult<Vec<Board>> {
        self.handler.get_boards(&owner.id).await
    }

    pub async fn view_board(&self, _actor: &Account, board_id: &Uuid) -> KanbanResult<BoardView> {
        let (board, cards) = futures::try_join!(
            self.handler.get_board(board_id),
            self.handler.get_cards(board_id)
        )?;
        Ok(BoardView { board, cards })
    }

    pub async fn update_board(&self, actor: &Account, board_id: &Uuid, params: &BoardUpdate) -> KanbanResult<Board> {
        let name = validate::required("Name", &params.name, validate::MAX_BOARD_NAME_LENGTH)?;
        let info = validate::bounded("Info", params.info.trim(), validate::MAX_BOARD_INFO_LENGTH)?;
        let progress = validate::progress(params.progress)?;

        let mut board = self.handler.get_board(board_id).await?;
        board.name = name;
        board.info = info;
        board.progress = progress;
        board.edited = Utc::now();
        self.handler.save_board(&board).await?;
        log::debug!("{} updated board {}", actor.id, board.id);
        Ok(board)
    }

    pub async fn step_board_progress(&self, actor: &Account, board_id: &Uuid, direction: Direction) -> KanbanResult<Board> {
        let mut board = self.handler.get_board(board_id).await?;
        board.progress = progress::step(board.progress, direction);
        board.edited = Utc::now();
        self.handler.save_board(&board).await?;
        log::debug!("{} stepped board {} to {}", actor.id, board.id, board.progress);
        Ok(board)
    }

    // ------------------- Cards ---------------------

    pub async fn create_card(&self, actor: &Account, params: &NewCard) -> KanbanResult<Card> {
        let kind: CardKind = params.variant.parse()?;
        let title = validate::required("Title", &params.title, validate::MAX_CARD_TITLE_LENGTH)?;
        let payload = params.payload.as_deref().unwrap_or("");
        let content = match kind {
            CardKind::Plain => CardContent::Plain,
            CardKind::Text => CardContent::Text { text: card_text(payload)? },
            CardKind::Image => CardContent::Image { url: validate::image_url(payload)? },
        };

        // New cards always start in the backlog with no progress
        let now = Utc::now();
        let card = Card {
            id: Uuid::new_v4(),
            board_id: params.board_id,
            title,
            content,
            position: Position::Backlog,
            progress: 0,
            created: now,
            edited: now
        };
        self.handler.insert_card(&card).await?;
        log::info!("{} created {} card {} on board {}", actor.id, kind, card.id, card.board_id);
        Ok(card)
    }

    pub async fn get_card(&self, _actor: &Account, card_id: &Uuid, variant: &str) -> KanbanResult<Card> {
        let kind: CardKind = variant.parse()?;
        self.handler.get_card(card_id, kind).await
    }

    pub async fn update_card(&self, actor: &Account, card_id: &Uuid, variant: &str, params: &CardUpdate) -> KanbanResult<Card> {
        let kind: CardKind = variant.parse()?;
        let title = validate::required("Title", &params.title, validate::MAX_CARD_TITLE_LENGTH)?;
        let position = Position::from_value(params.position)?;
        let progress = validate::progress(params.progress)?;

        let mut card = self.handler.get_card(card_id, kind).await?;
        // A missing payload keeps what is stored
        if let Some(payload) = params.payload.as_deref() {
            card.content = match kind {
                CardKind::Plain => CardContent::Plain,
                CardKind::Text => CardContent::Text { text: card_text(payload)? },
                CardKind::Image => CardContent::Image { url: validate::image_url(payload)? },
            };
        }
        card.title = title;
        card.position = position;
        card.progress = progress;
        card.edited = Utc::now();
        self.handler.save_card(&card).await?;
        log::debug!("{} updated card {}", actor.id, card.id);
        Ok(card)
    }

    pub async fn delete_card(&self, actor: &Account, card_id: &Uuid, variant: &str) -> KanbanResult<()> {
        let kind: CardKind = variant.parse()?;
        self.handler.delete_card(card_id, kind).await?;
        log::info!("{} deleted card {}", actor.id, card_id);
        Ok(())
    }

    pub async fn step_card_progress(&self, actor: &Account, card_id: &Uuid, variant: &str, direction: Direction) -> KanbanResult<Card> {
        let kind: CardKind = variant.parse()?;
        let mut card = self.handler.get_card(card_id, kind).await?;
        card.progress = progress::step(card.progress, direction);
        card.edited = Utc::now();
        self.handler.save_card(&card).await?;
        log::debug!("{} stepped card {} to {}", actor.id, card.id, card.progress);
        Ok(card)
    }
}

