//! Ethfinex Trustless Client - Entry Point
//!
//! Runs a single Trustless API operation and prints the result as JSON.
//!
//! Wiring sequence:
//! 1. Parse CLI arguments
//! 2. Load config.toml + validate
//! 3. Init tracing (JSON structured logging on stderr)
//! 4. Load the signing wallet from TETHFINEX_PRIVATE_KEY
//! 5. Bind the 0x exchange contract to the wallet
//! 6. Create TrustlessApi and run the requested command

use std::sync::Arc;

use alloy::primitives::Address;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use tethfinex_client::adapters::api::{OrderRequest, TrustlessApi};
use tethfinex_client::adapters::chain::{LocalWallet, TokenWrapper, ZrxExchange};
use tethfinex_client::config::{self, AppConfig};
use tethfinex_client::ports::MessageSigner;

#[derive(Parser)]
#[command(name = "tethfinex", about = "Ethfinex Trustless API client", version)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Buy,
    Sell,
}

#[derive(Subcommand)]
enum Command {
    /// List trading pair symbols
    Symbols,
    /// Show exchange configuration
    Config,
    /// Live orders for a pair
    Orders {
        #[arg(long)]
        pair: String,
    },
    /// Own executed trades
    Trades {
        #[arg(long)]
        pair: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Public trades for a pair
    AllTrades {
        #[arg(long)]
        pair: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Place a limit order
    Place {
        #[arg(long, value_enum)]
        side: Side,
        #[arg(long)]
        pair: String,
        #[arg(long)]
        pay_token: Address,
        #[arg(long)]
        pay_amount: Decimal,
        #[arg(long)]
        buy_token: Address,
        #[arg(long)]
        buy_amount: Decimal,
        #[arg(long)]
        fee_address: Address,
    },
    /// Cancel an order
    Cancel {
        #[arg(long)]
        id: i64,
    },
    /// Build (without sending) a token wrapper deposit
    Deposit {
        #[arg(long)]
        token: String,
        #[arg(long)]
        amount: Decimal,
        /// Lock period in hours
        #[arg(long, default_value_t = TokenWrapper::DEFAULT_LOCK_HOURS)]
        duration: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Parse CLI arguments ──────────────────────────────
    let cli = Cli::parse();

    // ── 2. Load configuration from config.toml ──────────────
    let config = config::loader::load_config(&cli.config)
        .context("Failed to load configuration")?;

    // ── 3. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.client.log_level)
                }),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config,
        api_server = %config.api.server,
        timeout_seconds = config.api.timeout_seconds,
        tokens = config.tokens.len(),
        "Configuration loaded, starting Trustless client"
    );

    let api = || connect(&config);

    match cli.command {
        Command::Deposit { token, amount, duration } => {
            let wrapper = config.token_wrapper(&token)?;
            let tx = wrapper
                .deposit(amount, duration)
                .context("Failed to build deposit")?;
            info!(
                wrapper = %wrapper,
                token = wrapper.token(),
                contract = %tx.contract,
                method = tx.method,
                "Deposit call built (not sent)"
            );
            print_json(&tx.request)
        }
        Command::Symbols => print_json(&api()?.get_symbols().await?),
        Command::Config => print_json(&api()?.get_config().await?),
        Command::Orders { pair } => print_json(&api()?.get_orders(&pair).await?),
        Command::Trades { pair, page } => print_json(&api()?.get_trades(&pair, page).await?),
        Command::AllTrades { pair, page } => {
            print_json(&api()?.get_all_trades(&pair, page).await?)
        }
        Command::Place {
            side,
            pair,
            pay_token,
            pay_amount,
            buy_token,
            buy_amount,
            fee_address,
        } => {
            let request = OrderRequest {
                is_sell: matches!(side, Side::Sell),
                pay_token,
                pay_amount,
                buy_token,
                buy_amount,
                fee_address,
                pair,
            };
            print_json(&api()?.place_order(&request).await?)
        }
        Command::Cancel { id } => print_json(&api()?.cancel_order(id).await?),
    }
}

/// Wire the wallet, exchange binding and API client.
fn connect(config: &AppConfig) -> Result<TrustlessApi> {
    // ── 4. Load signing wallet from env ─────────────────────
    let wallet = Arc::new(LocalWallet::from_env().context("Failed to load wallet")?);
    info!(account = %wallet.address(), "Wallet loaded");

    // ── 5. Bind 0x exchange contract ────────────────────────
    let exchange = Arc::new(ZrxExchange::new(config.exchange_address()?, wallet.clone()));

    // ── 6. Create the Trustless API client ──────────────────
    TrustlessApi::new(exchange, wallet, config.client_config()?)
        .context("Failed to create Trustless API client")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{text}");
    Ok(())
}
