use clap::{Parser, Subcommand};
use lightbnb_data::db::{self, Database};
use lightbnb_data::domain::SearchCriteria;
use lightbnb_data::DbConfig;
use log::{error, info};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lightbnb", about = "LightBnB database operations")]
struct Cli {
    /// SQLite database file (overrides LIGHTBNB_DATABASE_PATH)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the tables and indexes
    Init,

    /// Search properties, cheapest first
    Search {
        #[arg(long)]
        city: Option<String>,
        /// Minimum price per night, in dollars
        #[arg(long)]
        min_price: Option<f64>,
        /// Maximum price per night, in dollars
        #[arg(long)]
        max_price: Option<f64>,
        #[arg(long)]
        min_rating: Option<f64>,
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Look up a user by email or id
    User {
        #[arg(long, conflicts_with = "id", required_unless_present = "id")]
        email: Option<String>,
        #[arg(long)]
        id: Option<i64>,
    },

    /// List a guest's reservations
    Reservations {
        #[arg(long)]
        guest_id: i64,
        #[arg(long)]
        limit: Option<u32>,
    },
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };
    if let Some(path) = cli.database {
        config.database_path = path;
    }

    let db = Database::from_config(&config);

    let outcome = run(&db, &config, cli.command);

    if let Err(e) = db.close() {
        error!("Closing database failed: {e}");
    }

    if let Err(e) = outcome {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(db: &Database, config: &DbConfig, command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Init => {
            match &config.schema_path {
                Some(path) => db::init_db(db, path)?,
                None => db::apply_schema(db)?,
            }
            info!("Database ready at {}", db.path().display());
        }
        Command::Search {
            city,
            min_price,
            max_price,
            min_rating,
            limit,
        } => {
            let criteria = SearchCriteria {
                city,
                minimum_price_per_night: min_price,
                maximum_price_per_night: max_price,
                minimum_rating: min_rating,
            };
            print_json(&db::search_properties(db, &criteria, limit)?)?;
        }
        Command::User { email, id } => match (email, id) {
            (Some(email), _) => print_json(&db::get_user_by_email(db, &email)?)?,
            (None, Some(id)) => print_json(&db::get_user_by_id(db, id)?)?,
            (None, None) => unreachable!("clap requires --email unless --id is present"),
        },
        Command::Reservations { guest_id, limit } => {
            print_json(&db::list_reservations_for_guest(db, guest_id, limit)?)?;
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
