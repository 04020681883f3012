//! Loads config from config.toml

use serde_derive::Deserialize;
use cached::proc_macro::cached;
use std::fs;
use std::process::exit;
use toml;
use sqlx::postgres::{PgPoolOptions, PgPool};

#[derive(Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub count: CountConfig
}

/// Length bounds for user supplied credentials
#[derive(Deserialize, Clone, Debug)]
pub struct CountConfig {
    pub min_password_length: usize,
    pub max_password_length: usize
}

impl Default for CountConfig {
    fn default() -> Self {
        CountConfig { min_password_length: 1, max_password_length: 128 }
    }
}

#[derive(Deserialize, Clone)]
pub struct DatabaseConfig {
    pub ip: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32
}

#[derive(Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log: bool,
    pub log_level: String,
    pub login_cookie_valid_duration_seconds: i64,
    pub session_key_path: String
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!("postgres://{}:{}@{}:{}/{}", // user:password / ip/db
            self.user,
            self.password,
            self.ip,
            self.port,
            self.name
        )
    }
}

// Only a successful connection is memoised
#[cached(result = true)]
pub async fn get_pool() -> Result<PgPool, sqlx::Error> {
    let config = get_config();
    PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(config.database.url().as_str())
        .await
}

#[cached]
pub fn get_config() -> Config {
    let contents = match fs::read_to_string("config.toml") {
        Ok(c) => c,
        Err(_) => {
            eprintln!("Could not find config.toml, please create or ensure it's accessible");
            exit(1);
        }
    };

    match parse_config(&contents) {
        Ok(d) => d,
        Err(err) => {
            eprintln!("Unable to load data from config: {err}");
            exit(1);
        }
    }
}

pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}
