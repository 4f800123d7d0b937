//! EoneoPay command line client
//!
//! A small front-end for smoke testing a payments API deployment and for checking
//! captured webhook bodies.
//!
//! Environment variables:
//! - `PAYMENTS_BASE_URI` - base URI of the payments API
//! - `PAYMENTS_API_KEY` - API key used for every request
//! - `PAYMENTS_TIMEOUT_SECONDS` - request timeout (default: 30)

use eoneopay_sdk::endpoints::{PaymentSource, Transaction, Webhook};
use eoneopay_sdk::webhooks::Parser;
use eoneopay_sdk::{ApiManager, ApiManagerFactory, Repository, Result, SdkError, API_KEY_ENV};
use serde::Serialize;
use std::env;

const USAGE: &str = "Usage: eoneopay <command>

Commands:
   webhooks list                    List webhook subscriptions
   webhooks create <url>            Subscribe a webhook URL
   webhooks delete <id>             Remove a webhook subscription
   tokens get <token>               Look up a payment source token
   transactions get <id>            Look up a transaction
   parse transaction <file>         Parse and validate a transaction webhook body
   parse payment-source <file>      Parse and validate a token webhook body";

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    if let Err(e) = run(&args).await {
        eprintln!("Error: {}", e);
        if let Some(violations) = e.violations() {
            for (field, messages) in violations.iter() {
                eprintln!("   {}: {}", field, messages.join(" "));
            }
        }
        std::process::exit(1);
    }

    Ok(())
}

async fn run(args: &[&str]) -> Result<()> {
    match args {
        ["parse", "transaction", file] => print(&Parser::new().parse_file::<Transaction>(file)?),
        ["parse", "payment-source", file] => {
            print(&Parser::new().parse_file::<PaymentSource>(file)?)
        }
        ["webhooks", "list"] => {
            let (manager, api_key) = connect()?;
            print(&manager.find_all::<Webhook>(&api_key).await?)
        }
        ["webhooks", "create", url] => {
            let (manager, api_key) = connect()?;
            print(&manager.create(&api_key, &Webhook::new(*url)).await?)
        }
        ["webhooks", "delete", id] => {
            let (manager, api_key) = connect()?;
            let deleted = manager
                .delete(&api_key, &Webhook::default().with_id(*id))
                .await?;
            tracing::info!("Deleted webhook {}", id);
            print(&deleted)
        }
        ["tokens", "get", token] => {
            let (manager, api_key) = connect()?;
            let source = manager
                .repository::<PaymentSource>()
                .find_by_token(token, &api_key)
                .await?;
            print(&source)
        }
        ["transactions", "get", id] => {
            let (manager, api_key) = connect()?;
            let transaction = manager
                .repository::<Transaction>()
                .find(id, &api_key)
                .await?;
            print(&transaction)
        }
        _ => {
            println!("{}", USAGE);
            Ok(())
        }
    }
}

fn connect() -> Result<(ApiManager, String)> {
    let api_key = env::var(API_KEY_ENV)
        .map_err(|_| SdkError::config(format!("{} must be set", API_KEY_ENV)))?;
    let manager = ApiManagerFactory::from_env()?;
    tracing::info!("Using payments API at {}", manager.sdk().base_uri());
    Ok((manager, api_key))
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
