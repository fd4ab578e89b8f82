mod chart;
mod prompt;
mod table;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use metal_worth_core::errors::CoreError;
use metal_worth_core::models::item::EditRequest;
use metal_worth_core::models::metal::Metal;
use metal_worth_core::models::settings::{Settings, DEFAULT_API_URL};
use metal_worth_core::providers::metal_price_api::MetalPriceApiProvider;
use metal_worth_core::storage::store::FileStore;
use metal_worth_core::MetalWorth;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("could not determine a data directory; pass --data-dir or set METAL_WORTH_DATA_DIR")]
    NoDataDir,
    #[error("item numbers start at 1")]
    ZeroPosition,
}

#[derive(Parser, Debug)]
#[command(name = "metal-worth", about = "Precious-metals inventory and value tracker")]
struct Cli {
    /// Directory holding the items, prices and history files.
    #[arg(long, env = "METAL_WORTH_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// API key for metalpriceapi.com (needed by `update`).
    #[arg(long, env = "METALPRICE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, env = "METALPRICE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the item table, total and prices.
    List,
    /// Add an item.
    Add {
        #[arg(long, value_parser = parse_metal)]
        metal: Metal,
        #[arg(long)]
        karat: String,
        #[arg(long)]
        grams: String,
    },
    /// Edit the item with the given number; omitted fields keep their value.
    Edit {
        number: usize,
        #[arg(long)]
        metal: Option<String>,
        #[arg(long)]
        karat: Option<String>,
        #[arg(long)]
        grams: Option<String>,
    },
    /// Delete the item with the given number.
    Delete {
        number: usize,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Show prices, or set one.
    Price {
        #[command(subcommand)]
        command: Option<PriceCommand>,
    },
    /// Fetch the live gold price, then record a snapshot.
    Update,
    /// Record the current total in the history.
    Snapshot,
    /// Show the value-over-time chart.
    History,
    /// Clear all history snapshots (items are kept).
    ResetHistory {
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum PriceCommand {
    /// Set the USD-per-gram price of a metal.
    Set {
        #[arg(value_parser = parse_metal)]
        metal: Metal,
        price: String,
    },
}

fn parse_metal(raw: &str) -> Result<Metal, String> {
    raw.parse().map_err(|e: CoreError| e.to_string())
}

/// Read a number the way a form field would: blank or unparsable input is NaN.
fn parse_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

/// Convert a 1-based item number to a position.
fn position(number: usize) -> Result<usize, CliError> {
    number.checked_sub(1).ok_or(CliError::ZeroPosition)
}

fn resolve_data_dir(arg: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match arg {
        Some(dir) => Ok(dir),
        None => dirs::data_dir()
            .map(|d| d.join("metal-worth"))
            .ok_or(CliError::NoDataDir),
    }
}

fn settings_from(cli: &Cli) -> Settings {
    let mut settings = Settings::default().with_api_url(cli.api_url.clone());
    if let Some(key) = &cli.api_key {
        settings = settings.with_api_key(key.clone());
    }
    settings
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let settings = settings_from(&cli);
    let data_dir = resolve_data_dir(cli.data_dir)?;
    log::debug!("Using data directory {}", data_dir.display());
    let mut tracker = MetalWorth::open(FileStore::open(&data_dir)?);

    match cli.command.unwrap_or(Command::List) {
        Command::List => {
            print!("{}", table::render(tracker.display()));
            print!("{}", table::render_prices(&tracker));
        }
        Command::Add {
            metal,
            karat,
            grams,
        } => {
            tracker.add_item(metal, parse_number(&karat), parse_number(&grams))?;
            print!("{}", table::render(tracker.display()));
        }
        Command::Edit {
            number,
            metal,
            karat,
            grams,
        } => {
            let request = EditRequest {
                metal,
                karat: karat.as_deref().map(parse_number),
                grams: grams.as_deref().map(parse_number),
            };
            tracker.edit_item(position(number)?, &request)?;
            print!("{}", table::render(tracker.display()));
        }
        Command::Delete { number, yes } => {
            let removed = tracker.delete_item(position(number)?, |msg| yes || prompt::confirm(msg))?;
            if removed.is_some() {
                print!("{}", table::render(tracker.display()));
            }
        }
        Command::Price { command: None } => {
            print!("{}", table::render_prices(&tracker));
        }
        Command::Price {
            command: Some(PriceCommand::Set { metal, price }),
        } => {
            tracker.set_price(metal, parse_number(&price))?;
            print!("{}", table::render_prices(&tracker));
            print!("{}", table::render(tracker.display()));
        }
        Command::Update => {
            let (fetch, snapshot) = match MetalPriceApiProvider::from_settings(&settings) {
                Ok(provider) => {
                    tracker = tracker.with_provider(Box::new(provider));
                    let outcome = tracker.update_and_snapshot().await;
                    (outcome.fetch, outcome.snapshot)
                }
                Err(e) => {
                    log::error!("Failed to fetch gold price: {e}");
                    tracker.render();
                    (Err(e), tracker.snapshot())
                }
            };
            match fetch {
                Ok(_) => println!("Gold: {} USD/g", tracker.price_input_value(Metal::Gold)),
                Err(e) => eprintln!("Unable to fetch live gold price. ({e})"),
            }
            print!("{}", table::render(tracker.display()));
            println!("Snapshot: {} ${:.2}", snapshot.timestamp, snapshot.value);
        }
        Command::Snapshot => {
            let snapshot = tracker.snapshot();
            println!("Snapshot: {} ${:.2}", snapshot.timestamp, snapshot.value);
        }
        Command::History => {
            print!("{}", chart::render(&tracker.chart_series(), chart::DEFAULT_WIDTH));
        }
        Command::ResetHistory { yes } => {
            if tracker.reset_history(|msg| yes || prompt::confirm(msg)) {
                println!("History cleared.");
            }
        }
    }
    Ok(())
}
