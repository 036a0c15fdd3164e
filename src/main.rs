//! Hotel dashboard CLI
//!
//! Serves the dashboard and manages the SQLite file behind it.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use hotel_dashboard::api::{self, AppState};
use hotel_dashboard::config::{self, Config, LoadedConfig};
use hotel_dashboard::desk::{self, ListingView, Table};
use hotel_dashboard::logging;
use hotel_dashboard::store::{seed_demo, SqliteStore};

#[derive(Parser)]
#[command(name = "hotel-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Hotel listings, bookings and client registration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ./hotel-dashboard.toml, then the user config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the dashboard server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Create the database file and its tables
    Init,

    /// Insert a small demo data set into an empty database
    Seed,

    /// Print the default config file
    DefaultConfig,

    /// Print one listing (hotels, clients, rooms, reservations, evaluations)
    List {
        view: String,
        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::DefaultConfig = cli.command {
        print!("{}", config::generate_default_config());
        return Ok(());
    }

    let loaded = match &cli.config {
        Some(path) => LoadedConfig {
            config: Config::load_with_env(path)?,
            source: Some(path.clone()),
            rejected: Vec::new(),
        },
        None => Config::load_default(),
    };
    logging::init(&loaded.config.logging);
    loaded.log();
    let config = loaded.config;

    match cli.command {
        Commands::Serve { host, port } => {
            let mut api_config = config.api.clone();
            if let Some(host) = host {
                api_config.host = host;
            }
            if let Some(port) = port {
                api_config.port = port;
            }

            tracing::info!("Starting hotel dashboard v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Database: {}", config.database.path);

            let store = Arc::new(open_store(&config)?);
            let state = AppState::new(store, api_config.clone());
            api::serve(state, &api_config).await?;
        }
        Commands::Init => {
            open_store(&config)?;
            println!("Database ready at {}", config.database.path);
        }
        Commands::Seed => {
            let store = open_store(&config)?;
            let summary = seed_demo(&store)?;
            if summary.is_empty() {
                println!("Database already holds hotels, nothing seeded");
            } else {
                println!(
                    "Seeded {} hotels, {} room types, {} rooms, {} clients, {} evaluations",
                    summary.hotels,
                    summary.room_types,
                    summary.rooms,
                    summary.clients,
                    summary.evaluations
                );
            }
        }
        Commands::List { view, format } => {
            let view: ListingView = view.parse()?;
            let store = open_store(&config)?;
            let listing = desk::load(&store, view)?;

            match format.to_lowercase().as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&listing)?),
                "csv" => print!("{}", desk::to_csv(&listing.table())?),
                "table" => print_table(&listing.table()),
                other => anyhow::bail!("Unknown format: {}. Use table, json, or csv", other),
            }
        }
        Commands::DefaultConfig => {}
    }

    Ok(())
}

fn open_store(config: &Config) -> anyhow::Result<SqliteStore> {
    SqliteStore::open(&config.database.path)
        .with_context(|| format!("Failed to open database {}", config.database.path))
}

fn print_table(table: &Table) {
    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.chars().count()).collect();
    for row in &table.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", line(table.columns.clone()));
    println!(
        "{}",
        widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  ")
    );
    for row in &table.rows {
        println!("{}", line(row.iter().map(String::as_str).collect()));
    }

    if table.rows.is_empty() {
        println!("(no rows)");
    }
}
