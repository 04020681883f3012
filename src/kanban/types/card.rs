use crate::shared::types::error::KanbanError;

use chrono::Utc;
use num_derive::FromPrimitive;
use serde::{Serialize, Serializer, Deserialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Storage tag for the card variants
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[derive(FromPrimitive, sqlx::Type)]
#[repr(i32)]
pub enum CardKind {
    Plain = 0,
    Text = 1,
    Image = 2
}

impl FromStr for CardKind {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(CardKind::Plain),
            "text" => Ok(CardKind::Text),
            "image" => Ok(CardKind::Image),
            other => Err(KanbanError::UnknownVariant(other.to_string()))
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CardKind::Plain => write!(f, "plain"),
            CardKind::Text => write!(f, "text"),
            CardKind::Image => write!(f, "image"),
        }
    }
}

/// Column a card sits in
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[derive(FromPrimitive, sqlx::Type)]
#[repr(i32)]
pub enum Position {
    Backlog = 0,
    InProgress = 1,
    InReview = 2,
    Completed = 3
}

impl Position {
    pub fn from_value(value: i32) -> Result<Position, KanbanError> {
        num::FromPrimitive::from_i32(value).ok_or_else(||
            KanbanError::validation(format!("Position must be between 0 and 3, got {value}")))
    }
}

// On the wire positions stay plain integers
impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(*self as i32)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum CardContent {
    Plain,
    Text { text: String },
    Image { url: String }
}

impl CardContent {
    pub fn kind(&self) -> CardKind {
        match self {
            CardContent::Plain => CardKind::Plain,
            CardContent::Text { .. } => CardKind::Text,
            CardContent::Image { .. } => CardKind::Image,
        }
    }

    /// The single nullable payload column
    pub fn payload(&self) -> Option<&str> {
        match self {
            CardContent::Plain => None,
            CardContent::Text { text } => Some(text),
            CardContent::Image { url } => Some(url),
        }
    }

    pub fn from_parts(kind: CardKind, payload: Option<String>) -> CardContent {
        match kind {
            CardKind::Plain => CardContent::Plain,
            CardKind::Text => CardContent::Text { text: payload.unwrap_or_default() },
            CardKind::Image => CardContent::Image { url: payload.unwrap_or_default() },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Card {
    pub id: Uuid,
    pub board_id: Uuid,
    pub title: String,
    #[serde(flatten)]
    pub content: CardContent,
    pub position: Position,
    pub progress: i32,
    pub created: chrono::DateTime<Utc>,
    pub edited: chrono::DateTime<Utc>
}

#[derive(Clone, Deserialize)]
pub struct NewCard {
    pub board_id: Uuid,
    pub variant: String,
    pub title: String,
    pub payload: Option<String>
}

#[derive(Clone, Deserialize)]
pub struct CardUpdate {
    pub title: String,
    pub payload: Option<String>,
    pub position: i32,
    pub progress: i32
}
