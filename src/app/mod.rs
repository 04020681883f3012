use actix_identity::IdentityMiddleware;
use actix_session::{config::PersistentSession, storage::CookieSessionStore, SessionMiddleware};
use actix_web::{
    HttpResponse, web::{self, Data},
    cookie::{time::Duration, Key},
    middleware, App, HttpServer, Result
};
use actix_cors::Cors;
use std::sync::Arc;
use std::time;

use crate::shared::util::{config, secret};

use crate::shared::accounts::AccountManager;
use crate::shared::util::handler::AccountDataHandler;
use crate::shared::handlers::postgres_handler::PostgresHandler as SharedPostgresHandler;
use crate::kanban::repository::KanbanRepository;
use crate::kanban::util::handler::KanbanDataHandler;
use crate::kanban::handlers::postgres_handler::PostgresHandler as KanbanPostgresHandler;

use crate::shared::app as shared_app;
use crate::kanban::app as kanban_app;

use crate::shared::types::app as app_types;
use crate::shared::types::error::KanbanError;


pub async fn not_found() -> Result<HttpResponse> {
    let response = app_types::ErrorResponse{ error: "Resource not found".to_string() };
    Ok(HttpResponse::NotFound().json(response))
}

pub fn routes(app: &mut web::ServiceConfig) {
    app
        // Malformed bodies and queries render like every other error
        .app_data(web::JsonConfig::default()
            .error_handler(|err, _| KanbanError::validation(err.to_string()).into()))
        .app_data(web::QueryConfig::default()
            .error_handler(|err, _| KanbanError::validation(err.to_string()).into()))

        // User handling
        .service(shared_app::register)
        .service(shared_app::login)
        .service(shared_app::logout)
        .service(shared_app::get_account)
        .service(shared_app::profile)

        // Boards
        .service(kanban_app::create_board)
        .service(kanban_app::update_board)
        .service(kanban_app::get_boards)
        .service(kanban_app::view_board)
        .service(kanban_app::step_board_progress)

        // Cards
        .service(kanban_app::create_card)
        .service(kanban_app::get_card)
        .service(kanban_app::update_card)
        .service(kanban_app::delete_card)
        .service(kanban_app::step_card_progress);
}

/// Cookie backed session carrying the logged in account id
pub fn session_middleware(secret_key: Key, ttl_seconds: i64) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), secret_key)
        .cookie_name("login".to_owned())
        .cookie_secure(false)
        .cookie_http_only(true)
        .session_lifecycle(PersistentSession::default().session_ttl(Duration::seconds(ttl_seconds)))
        .build()
}

pub async fn start() -> std::io::Result<()> {
    let config = config::get_config();
    if config.server.log {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.server.log_level.as_str()))
            .init();
    }

    let secret_key = secret::get_session_key(&config.server.session_key_path)?;
    let pool = config::get_pool().await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;

    // Accounts first, boards reference them
    let account_handler: Arc<dyn AccountDataHandler> = Arc::new(SharedPostgresHandler::with_pool(pool.clone()));
    let kanban_handler: Arc<dyn KanbanDataHandler> = Arc::new(KanbanPostgresHandler::with_pool(pool));
    account_handler.init().await?;
    kanban_handler.init().await?;

    let accounts = AccountManager::new(account_handler, config.count.clone());
    let kanban = KanbanRepository::new(kanban_handler);

    log::info!("starting HTTP server at http://{}:{}", config.server.host, config.server.port);

    let ttl = config.server.login_cookie_valid_duration_seconds;
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(accounts.clone()))
            .app_data(Data::new(kanban.clone()))
            .configure(routes)
            .wrap(IdentityMiddleware::default())
            .wrap(Cors::permissive())
            .wrap(session_middleware(secret_key.clone(), ttl))
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .default_service(web::route().to(not_found))
    })
        .keep_alive(time::Duration::from_secs(30))
        .bind((config.server.host.as_str(), config.server.port))?
        .run().await
}
