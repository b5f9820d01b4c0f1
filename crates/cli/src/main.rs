//! Maison CLI - drive the storefront demo from a terminal.
//!
//! State (cart, session, orders) is persisted under `MAISON_DATA_DIR`, so
//! consecutive invocations behave like one browser session.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! maison products list --category 3 --max-price 100
//! maison products show 1
//!
//! # Fill the cart and check out
//! maison cart add 1 --quantity 2
//! maison auth login -e jane@example.com -p secret
//! maison checkout --name "Jane Doe" --street "1 Main St" --city Springfield \
//!     --state IL --zip 62701 --country US --phone 555-0100
//!
//! # Admins can move orders along
//! maison orders status <ORDER_ID> completed
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use secrecy::ExposeSecret;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maison_storefront::Storefront;
use maison_storefront::config::StorefrontConfig;
use maison_storefront::error::AppError;
use maison_storefront::notify::LogNotifier;

mod commands;

use commands::{auth::AuthAction, cart::CartAction, orders::OrderAction, products::ProductAction};

#[derive(Parser)]
#[command(name = "maison")]
#[command(author, version, about = "Maison storefront demo")]
struct Cli {
    /// Directory for persisted state (overrides `MAISON_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Skip the simulated API delays
    #[arg(long, global = true)]
    no_latency: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// List categories
    Categories,
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Log in, register or log out
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Place an order for the cart contents
    Checkout(commands::checkout::CheckoutArgs),
    /// View and manage orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.expose_secret(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn init_tracing() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "maison_storefront=info,maison=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing();
            AppError::from(e).report();
            std::process::exit(2);
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);
    init_tracing();

    if let Err(e) = run(cli, config).await {
        e.report();
        std::process::exit(1);
    }
}

async fn run(cli: Cli, mut config: StorefrontConfig) -> Result<(), AppError> {
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if cli.no_latency {
        config.simulate_latency = false;
    }

    let storefront = Storefront::open(config, Arc::new(LogNotifier))?;

    match cli.command {
        Commands::Products { action } => commands::products::run(&storefront, action).await,
        Commands::Categories => {
            commands::products::categories(&storefront).await;
            Ok(())
        }
        Commands::Cart { action } => commands::cart::run(&storefront, action).await,
        Commands::Auth { action } => commands::auth::run(&storefront, action).await,
        Commands::Checkout(args) => commands::checkout::run(&storefront, args),
        Commands::Orders { action } => commands::orders::run(&storefront, action),
    }
}
