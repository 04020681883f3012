use crate::shared::accounts::AccountManager;
use crate::shared::types::account::{Account, LoginForm, RegisterForm};
use crate::shared::types::app::{Response, require_login};
use crate::kanban::repository::KanbanRepository;
use crate::kanban::types::board::Board;

use actix_identity::Identity;
use actix_web::{
    get, post, HttpResponse, web::{self, Data},
    HttpMessage as _, HttpRequest, ResponseError, Result
};
use serde::Serialize;

fn start_session(req: &HttpRequest, account: &Account) -> Result<()> {
    if let Err(err) = Identity::login(&req.extensions(), account.id.to_string()) {
        log::error!("failed to attach session: {err}");
        return Err(actix_web::error::ErrorInternalServerError("Failed to start session"));
    }
    Ok(())
}

#[post("/v1/register")]
async fn register(handler: Data<AccountManager>, req: HttpRequest, params: web::Json<RegisterForm>) -> Result<HttpResponse> {
    match handler.register(&params).await {
        Ok(account) => {
            start_session(&req, &account)?;
            Ok(HttpResponse::Ok().json(account))
        },
        Err(err) => Ok(err.error_response())
    }
}

#[post("/v1/login")]
async fn login(handler: Data<AccountManager>, req: HttpRequest, params: web::Json<LoginForm>) -> Result<HttpResponse> {
    match handler.authenticate(&params).await {
        Ok(account) => {
            start_session(&req, &account)?;
            Ok(HttpResponse::Ok().json(Response { msg: "You logged in".to_string() }))
        },
        Err(err) => Ok(err.error_response())
    }
}

#[post("/v1/logout")]
async fn logout(id: Option<Identity>) -> Result<HttpResponse> {
    if let Some(id) = id { id.logout(); }
    Ok(HttpResponse::Ok().json(Response { msg: "You logged out".to_string() }))
}

#[get("/v1/account")]
async fn get_account(handler: Data<AccountManager>, identity: Option<Identity>) -> Result<HttpResponse> {
    let account = require_login!(handler, identity);
    Ok(HttpResponse::Ok().json(account))
}

#[derive(Serialize)]
struct ProfileReturn {
    account: Account,
    boards: Vec<Board>
}

#[get("/v1/profile")]
async fn profile(handler: Data<AccountManager>, kanban: Data<KanbanRepository>, identity: Option<Identity>) -> Result<HttpResponse> {
    let account = require_login!(handler, identity);
    match kanban.list_boards(&account).await {
        Ok(boards) => Ok(HttpResponse::Ok().json(ProfileReturn { account, boards })),
        Err(err) => Ok(err.error_response())
    }
}
