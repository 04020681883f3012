use clap::{Parser, Subcommand};
use kanban_board_server::shared::accounts::AccountManager;
use kanban_board_server::shared::handlers::postgres_handler::PostgresHandler as SharedPostgresHandler;
use kanban_board_server::shared::types::account::RegisterForm;
use kanban_board_server::shared::util::{config, validate};
use kanban_board_server::shared::util::handler::AccountDataHandler;
use std::process::exit;
use std::sync::Arc;

#[derive(Parser)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new account
    Add {
        email: String,
        name: String,
        #[arg(value_parser = validate_password)]
        password: String,
    },
    /// Show the account registered under an email
    Show { email: String },
}

fn validate_password(password: &str) -> Result<String, String> {
    let count = config::get_config().count;
    validate::password(password, count.min_password_length, count.max_password_length)
        .map(str::to_string)
        .map_err(|err| err.to_string())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let handler = match SharedPostgresHandler::new().await {
        Ok(h) => h,
        Err(err) => {
            eprintln!("Error: could not connect to database: {err}");
            exit(1);
        }
    };
    if let Err(err) = handler.init().await {
        eprintln!("Error: {err}");
        exit(1);
    }
    let accounts = AccountManager::new(Arc::new(handler), config::get_config().count);

    match &cli.command {
        Commands::Add { email, name, password } => {
            let form = RegisterForm { email: email.clone(), name: name.clone(), password: password.clone() };
            match accounts.register(&form).await {
                Ok(account) => println!("Successfully created account {}", account.id),
                Err(err) => println!("Error: {err}"),
            }
        },
        Commands::Show { email } => match accounts.find_by_email(email).await {
            Ok(Some(account)) => println!("{}\t{}\t{}", account.id, account.name, account.email),
            Ok(None) => println!("Error: no account with email `{email}`"),
            Err(err) => println!("Error: {err}"),
        },
    }
}
