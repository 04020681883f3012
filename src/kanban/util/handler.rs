//! An abstraction layer interface for board + card storage

use crate::shared::types::account::AccountId;
use crate::shared::types::error::KanbanResult;
use crate::kanban::types::board::Board;
use crate::kanban::types::card::{Card, CardKind};

use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait KanbanDataHandler: Send + Sync {
    // Called on first launch for setup
    async fn init(&self) -> KanbanResult<()>;

    async fn insert_board(&self, board: &Board) -> KanbanResult<()>;
    /// Writes name, info, progress and edited; never the owner
    async fn save_board(&self, board: &Board) -> KanbanResult<()>;
    async fn get_board(&self, board_id: &Uuid) -> KanbanResult<Board>;
    async fn get_boards(&self, owner_id: &AccountId) -> KanbanResult<Vec<Board>>;

    /// Fails with `NotFound` if the parent board does not exist
    async fn insert_card(&self, card: &Card) -> KanbanResult<()>;
    /// Writes everything except the parent board and variant
    async fn save_card(&self, card: &Card) -> KanbanResult<()>;
    /// A card stored under a different variant counts as missing
    async fn get_card(&self, card_id: &Uuid, kind: CardKind) -> KanbanResult<Card>;
    async fn delete_card(&self, card_id: &Uuid, kind: CardKind) -> KanbanResult<()>;
    async fn get_cards(&self, board_id: &Uuid) -> KanbanResult<Vec<Card>>;
}
