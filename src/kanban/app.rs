use crate::kanban::repository::KanbanRepository;
use crate::kanban::types::board::{Board, BoardUpdate, NewBoard};
use crate::kanban::types::card::{CardUpdate, NewCard};
use crate::kanban::util::progress::Direction;
use crate::shared::accounts::AccountManager;
use crate::shared::types::app::{Response, require_login};

use actix_identity::Identity;
use actix_web::{
    get, post, put, delete, HttpResponse, web::{self, Data}, ResponseError, Result
};

use uuid::Uuid;
use serde::{Serialize, Deserialize};


// Create a new board
#[post("/v1/kanban/boards")]
async fn create_board(handler: Data<KanbanRepository>, accounts: Data<AccountManager>, identity: Option<Identity>, params: web::Json<NewBoard>) -> Result<HttpResponse> {
    let account = require_login!(accounts, identity);
    match handler.create_board(&account, &params).await {
        Ok(board) => Ok(HttpResponse::Ok().json(board)),
        Err(err) => Ok(err.error_response())
    }
}

// Update a board
#[derive(Deserialize)]
struct UpdateBoardForm {
    id: Uuid,
    #[serde(flatten)]
    update: BoardUpdate
}

#[put("/v1/kanban/boards")]
async fn update_board(handler: Data<KanbanRepository>, accounts: Data<AccountManager>, identity: Option<Identity>, params: web::Json<UpdateBoardForm>) -> Result<HttpResponse> {
    let account = require_login!(accounts, identity);
    match handler.update_board(&account, &params.id, &params.update).await {
        Ok(board) => Ok(HttpResponse::Ok().json(board)),
        Err(err) => Ok(err.error_response())
    }
}

// Get own boards
#[derive(Serialize)]
struct GetBoardsReturn {
    boards: Vec<Board>
}

#[get("/v1/kanban/boards")]
async fn get_boards(handler: Data<KanbanRepository>, accounts: Data<AccountManager>, identity: Option<Identity>) -> Result<HttpResponse> {
    let account = require_login!(accounts, identity);
    match handler.list_boards(&account).await {
        Ok(boards) => Ok(HttpResponse::Ok().json(GetBoardsReturn { boards })),
        Err(err) => Ok(err.error_response())
    }
}

#[derive(Deserialize)]
struct BoardIdForm { id: Uuid }

#[get("/v1/kanban/boards/single")]
async fn view_board(handler: Data<KanbanRepository>, accounts: Data<AccountManager>, identity: Option<Identity>, params: web::Query<BoardIdForm>) -> Result<HttpResponse> {
    let account = require_login!(accounts, identity);
    match handler.view_board(&account, &params.id).await {
        Ok(view) => Ok(HttpResponse::Ok().json(view)),
        Err(err) => Ok(err.error_response())
    }
}

#[derive(Deserialize)]
struct StepBoardForm {
    id: Uuid,
    direction: i32
}

#[post("/v1/kanban/boards/progress")]
async fn step_board_progress(handler: Data<KanbanRepository>, accounts: Data<AccountManager>, identity: Option<Identity>, params: web::Json<StepBoardForm>) -> Result<HttpResponse> {
    let account = require_login!(accounts, identity);
    match handler.step_board_progress(&account, &params.id, Direction::from_signal(params.direction)).await {
        Ok(board) => Ok(HttpResponse::Ok().json(board)),
        Err(err) => Ok(err.error_response())
    }
}


// ------------------- Cards ---------------------

#[post("/v1/kanban/cards")]
async fn create_card(handler: Data<KanbanRepository>, accounts: Data<AccountManager>, identity: Option<Identity>, params: web::Json<NewCard>) -> Result<HttpResponse> {
    let account = require_login!(accounts, identity);
    match handler.create_card(&account, &params).await {
        Ok(card) => Ok(HttpResponse::Ok().json(card)),
        Err(err) => Ok(err.error_response())
    }
}

#[derive(Deserialize)]
struct CardIdForm {
    id: Uuid,
    variant: String
}

#[get("/v1/kanban/cards/single")]
async fn get_card(handler: Data<KanbanRepository>, accounts: Data<AccountManager>, identity: Option<Identity>, params: web::Query<CardIdForm>) -> Result<HttpResponse> {
    let account = require_login!(accounts, identity);
    match handler.get_card(&account, &params.id, &params.variant).await {
        Ok(card) => Ok(HttpResponse::Ok().json(card)),
        Err(err) => Ok(err.error_response())
    }
}

// Modify a card
#[derive(Deserialize)]
struct UpdateCardForm {
    id: Uuid,
    variant: String,
    #[serde(flatten)]
    update: CardUpdate
}

#[put("/v1/kanban/cards")]
async fn update_card(handler: Data<KanbanRepository>, accounts: Data<AccountManager>, identity: Option<Identity>, params: web::Json<UpdateCardForm>) -> Result<HttpResponse> {
    let account = require_login!(accounts, identity);
    match handler.update_card(&account, &params.id, &params.variant, &params.update).await {
        Ok(card) => Ok(HttpResponse::Ok().json(card)),
        Err(err) => Ok(err.error_response())
    }
}

#[delete("/v1/kanban/cards")]
async fn delete_card(handler: Data<KanbanRepository>, accounts: Data<AccountManager>, identity: Option<Identity>, params: web::Json<CardIdForm>) -> Result<HttpResponse> {
    let account = require_login!(accounts, identity);
    match handler.delete_card(&account, &params.id, &params.variant).await {
        Ok(()) => Ok(HttpResponse::Ok().json(Response { msg: "Deleted".to_string() })),
        Err(err) => Ok(err.error_response())
    }
}

#[derive(Deserialize)]
struct StepCardForm {
    id: Uuid,
    variant: String,
    direction: i32
}

#[post("/v1/kanban/cards/progress")]
async fn step_card_progress(handler: Data<KanbanRepository>, accounts: Data<AccountManager>, identity: Option<Identity>, params: web::Json<StepCardForm>) -> Result<HttpResponse> {
    let account = require_login!(accounts, identity);
    match handler.step_card_progress(&account, &params.id, &params.variant, Direction::from_signal(params.direction)).await {
        Ok(card) => Ok(HttpResponse::Ok().json(card)),
        Err(err) => Ok(err.error_response())
    }
}
