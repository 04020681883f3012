use serde::Serialize;

#[derive(Serialize)]
pub struct Response {
    pub msg: String
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String
}

/// Resolves the session to an account or returns early from the handler
macro_rules! require_login {
    ($accounts: expr, $identity: expr) => {
        match $accounts.current_identity($identity.and_then(|id| id.id().ok())).await {
            Ok(Some(account)) => account,
            Ok(None) => return Ok(actix_web::ResponseError::error_response(
                &$crate::shared::types::error::KanbanError::Unauthenticated)),
            Err(err) => return Ok(actix_web::ResponseError::error_response(&err))
        }
    };
}

pub(crate) use require_login;
