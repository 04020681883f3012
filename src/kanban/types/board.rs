use crate::shared::types::account::AccountId;
use crate::kanban::types::card::Card;

use chrono::Utc;
use uuid::Uuid;
use serde::{Serialize, Deserialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Board {
    pub id: Uuid,
    pub owner_id: AccountId,
    pub name: String,
    pub info: String,
    pub progress: i32,
    pub created: chrono::DateTime<Utc>,
    pub edited: chrono::DateTime<Utc>
}

/// A board together with its cards, ordered by position then age
#[derive(Clone, Debug, Serialize)]
pub struct BoardView {
    pub board: Board,
    pub cards: Vec<Card>
}

#[derive(Clone, Deserialize)]
pub struct NewBoard {
    pub name: String,
    pub info: String
}

#[derive(Clone, Deserialize)]
pub struct BoardUpdate {
    pub name: String,
    #[serde(default)]
    pub info: String,
    pub progress: i32
}
