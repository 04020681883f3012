//! Account + related schema for database and url parameter validation

use serde::{Serialize, Deserialize};
use uuid::Uuid;

pub type AccountId = Uuid;

/// A registered user. The password hash never leaves the server.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String
}

#[derive(Clone, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub name: String
}

#[derive(Clone, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String
}
