//! StoreRate CLI - a reference view adapter over the platform core.
//!
//! # Usage
//!
//! ```bash
//! # Create a visitor account
//! storerate signup -e user@example.com -p 'Abc12345!' -n "Jonathan Storefront Smith" -a "1 Main St"
//!
//! # Sign in
//! storerate login -e user@example.com -p 'Abc12345!'
//!
//! # Add a store together with its owner account
//! storerate store add -n "A Unique Store Name 1234" -e o@x.com -p 'Abc12345!' -a "1 St"
//!
//! # Browse and rate
//! storerate store list
//! storerate store search coffee
//! storerate rate -e user@example.com -p 'Abc12345!' --store <store-id> --stars 5
//! ```
//!
//! Every command loads configuration from the environment
//! (`STORERATE_DATA_DIR` and the admin-seed overrides), opens the JSON-file
//! storage backend, performs one operation through the core contract, and
//! exits. State lives entirely in the data directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "storerate")]
#[command(author, version, about = "StoreRate command-line tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a visitor account
    Signup {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (8-16 chars, uppercase and special character)
        #[arg(short, long)]
        password: String,

        /// Full name (20-60 characters)
        #[arg(short, long)]
        name: String,

        /// Address (max 400 characters)
        #[arg(short, long)]
        address: String,
    },
    /// Sign in and show which dashboard the account lands on
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Manage stores
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
    /// Rate a store from 1 to 5 stars (signs in first)
    Rate {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Store ID
        #[arg(long)]
        store: String,

        /// Stars, 1-5
        #[arg(long)]
        stars: u8,
    },
    /// Show the ratings submitted for a store
    Ratings {
        /// Store ID
        store: String,
    },
    /// Show platform collection counts
    Stats,
}

#[derive(Subcommand)]
enum StoreAction {
    /// Add a store and create its owner account
    Add {
        /// Store name (20-60 characters)
        #[arg(short, long)]
        name: String,

        /// Store owner email
        #[arg(short, long)]
        email: String,

        /// Store owner password
        #[arg(short, long)]
        password: String,

        /// Store address (max 400 characters)
        #[arg(short, long)]
        address: String,
    },
    /// List every store with its aggregate rating
    List,
    /// Search stores by name, email, or address
    Search {
        /// Case-insensitive substring to look for
        term: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let platform = commands::open_platform()?;

    match cli.command {
        Commands::Signup {
            email,
            password,
            name,
            address,
        } => commands::account::signup(&platform, &email, &password, &name, &address)?,
        Commands::Login { email, password } => {
            commands::account::login(&platform, &email, &password)?;
        }
        Commands::Store { action } => match action {
            StoreAction::Add {
                name,
                email,
                password,
                address,
            } => commands::store::add(&platform, &name, &email, &password, &address)?,
            StoreAction::List => commands::store::list(&platform)?,
            StoreAction::Search { term } => commands::store::search(&platform, &term)?,
        },
        Commands::Rate {
            email,
            password,
            store,
            stars,
        } => commands::rate::submit(&platform, &email, &password, &store, stars)?,
        Commands::Ratings { store } => commands::rate::list(&platform, &store)?,
        Commands::Stats => commands::stats(&platform)?,
    }
    Ok(())
}
