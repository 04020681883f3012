// A handler that just stores data in memory (non-persistent)
// Used for tests and local debugging

use crate::shared::types::account::AccountId;
use crate::shared::types::error::{KanbanError, KanbanResult};
use crate::kanban::types::board::Board;
use crate::kanban::types::card::{Card, CardKind};
use crate::kanban::util::handler::KanbanDataHandler;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct DebugHandler {
    boards: Mutex<HashMap<Uuid, Board>>,
    cards: Mutex<HashMap<Uuid, Card>>
}

impl DebugHandler {
    pub fn new() -> DebugHandler {
        DebugHandler::default()
    }
}

#[async_trait]
impl KanbanDataHandler for DebugHandler {
    async fn init(&self) -> KanbanResult<()> {
        Ok(())
    }

    async fn insert_board(&self, board: &Board) -> KanbanResult<()> {
        self.boards.lock().unwrap().insert(board.id, board.clone());
        Ok(())
    }

    async fn save_board(&self, board: &Board) -> KanbanResult<()> {
        match self.boards.lock().unwrap().get_mut(&board.id) {
            Some(b) => {
                b.name = board.name.clone();
                b.info = board.info.clone();
                b.progress = board.progress;
                b.edited = board.edited;
                Ok(())
            },
            None => Err(KanbanError::NotFound("Board"))
        }
    }

    async fn get_board(&self, board_id: &Uuid) -> KanbanResult<Board> {
        self.boards.lock().unwrap().get(board_id).cloned().ok_or(KanbanError::NotFound("Board"))
    }

    async fn get_boards(&self, owner_id: &AccountId) -> KanbanResult<Vec<Board>> {
        let mut boards: Vec<Board> = self.boards.lock().unwrap().values()
            .filter(|b| &b.owner_id == owner_id)
            .cloned()
            .collect();
        boards.sort_by_key(|b| b.created);
        Ok(boards)
    }

    async fn insert_card(&self, card: &Card) -> KanbanResult<()> {
        // Mirrors the foreign key on kanban.cards.board_id
        if !self.boards.lock().unwrap().contains_key(&card.board_id) {
            return Err(KanbanError::NotFound("Board"));
        }
        self.cards.lock().unwrap().insert(card.id, card.clone());
        Ok(())
    }

    async fn save_card(&self, card: &Card) -> KanbanResult<()> {
        match self.cards.lock().unwrap().get_mut(&card.id) {
            Some(c) if c.content.kind() == card.content.kind() => {
                c.title = card.title.clone();
                c.content = card.content.clone();
                c.position = card.position;
                c.progress = card.progress;
                c.edited = card.edited;
                Ok(())
            },
            _ => Err(KanbanError::NotFound("Card"))
        }
    }

    async fn get_card(&self, card_id: &Uuid, kind: CardKind) -> KanbanResult<Card> {
        match self.cards.lock().unwrap().get(card_id) {
            Some(card) if card.content.kind() == kind => Ok(card.clone()),
            _ => Err(KanbanError::NotFound("Card"))
        }
    }

    async fn delete_card(&self, card_id: &Uuid, kind: CardKind) -> KanbanResult<()> {
        let mut cards = self.cards.lock().unwrap();
        match cards.get(card_id) {
            Some(card) if card.content.kind() == kind => {
                cards.remove(card_id);
                Ok(())
            },
            _ => Err(KanbanError::NotFound("Card"))
        }
    }

    async fn get_cards(&self, board_id: &Uuid) -> KanbanResult<Vec<Card>> {
        let mut cards: Vec<Card> = self.cards.lock().unwrap().values()
            .filter(|c| &c.board_id == board_id)
            .cloned()
            .collect();
        cards.sort_by_key(|c| (c.position, c.created));
        Ok(cards)
    }
}
