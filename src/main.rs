//! An interactive client for a multi-table blackjack server.
//!
//! The client talks to the server's REST API: it logs in, lists tables,
//! joins a selected table, and plays hands from a line-oriented prompt.

use std::io::{self, Write};

use anyhow::{Context, Result};
use pico_args::Arguments;
use serde_json::{Value, json};

use bj_client::{
    api_client::{ApiClient, ApiError},
    commands::{PlayerCommand, parse_command},
    config::ClientConfig,
};

const HELP: &str = "\
Connect to a blackjack server

USAGE:
  bj_client [OPTIONS]

OPTIONS:
  --host HOST           Server hostname  [default: env BJ_HOST or localhost]
  --port PORT           Server port  [default: env BJ_PORT or 4201]
  --username NAME       Username for login

FLAGS:
  -h, --help            Print help information

ENVIRONMENT:
  BJ_HOST               Server hostname
  BJ_PORT               Server port
";

const TABLE_HELP: &str = "\
Commands:
  bet AMOUNT   Set the bet for the next hand
  hit          Take another card
  stand        Stand on the current hand
  tables       Show all tables
  leave        Leave the table and return to the lobby
  help         Show this message
  quit         Log out and exit
";

struct Args {
    host: String,
    port: u16,
    username: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();
    env_logger::init();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let env_config = ClientConfig::from_env();
    let args = Args {
        host: pargs.value_from_str("--host").unwrap_or(env_config.host),
        port: pargs.value_from_str("--port").unwrap_or(env_config.port),
        username: pargs.opt_value_from_str("--username").ok().flatten(),
    };

    run(args).await
}

async fn run(args: Args) -> Result<()> {
    let config = ClientConfig::new(args.host, args.port);
    let client = ApiClient::new(&config).context("Failed to build HTTP client")?;

    let username = match args.username {
        Some(u) => u,
        None => prompt("Username: ")?,
    };

    println!("Logging in as {} at {}...", username, client.base_url());
    client
        .login(&json!({ "username": username }))
        .await
        .context("Login failed")?;
    println!("Login successful!");

    let tables = client
        .view_tables()
        .await
        .context("Failed to list tables")?;
    println!("\nTables:\n{tables:#}");

    let table_number: u64 = prompt("\nJoin table number: ")?
        .parse()
        .context("Invalid table number")?;
    client
        .join_table(&json!({ "username": username, "tableNumber": table_number }))
        .await
        .context("Failed to join table")?;
    println!("Joined table {table_number}.\n");
    print!("{TABLE_HELP}");

    loop {
        let line = prompt("> ")?;
        if line.is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match command {
            PlayerCommand::Bet(amount) => {
                report(
                    client
                        .bet(&json!({ "username": username, "bet": amount }))
                        .await,
                );
            }
            PlayerCommand::Hit => {
                report(client.hit(&json!({ "username": username })).await);
            }
            PlayerCommand::Stand => {
                report(client.stand(&json!({ "username": username })).await);
            }
            PlayerCommand::Tables => {
                report(client.view_tables().await);
            }
            PlayerCommand::Leave => {
                report(client.leave_table(&json!({ "username": username })).await);
                break;
            }
            PlayerCommand::Help => {
                print!("{TABLE_HELP}");
            }
            PlayerCommand::Quit => break,
        }
    }

    client
        .logout(&json!({ "username": username }))
        .await
        .context("Logout failed")?;
    println!("Logged out.");
    Ok(())
}

/// Print the server's answer, or the failure with whatever body came with it.
fn report(result: Result<Value, ApiError>) {
    match result {
        Ok(body) => println!("{body:#}"),
        Err(err) => match err.body() {
            Some(body) => println!("Error: {err}\n{body:#}"),
            None => println!("Error: {err}"),
        },
    }
}

/// Read one trimmed line from stdin after printing a prompt.
fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
