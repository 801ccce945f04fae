//! TGTG CLI - query the Too Good To Go app API from the terminal
//!
//! Every subcommand issues a single request and prints the JSON response.

use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::ExitCode;
use std::time::Duration;
use tgtg_api_client::{ClientConfig, TgtgClient};

mod commands;
mod logging;
mod output;

/// Query the Too Good To Go app API
#[derive(Parser)]
#[command(name = "tgtg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,

    /// API base URL
    #[arg(long, global = true, env = "TGTG_API_URL")]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "TGTG_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Override the mobile app user agent
    #[arg(long, global = true, env = "TGTG_USER_AGENT")]
    user_agent: Option<String>,

    /// Bearer access token
    #[arg(long, global = true, env = "TGTG_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// User id sent in request payloads
    #[arg(long, global = true, env = "TGTG_USER_ID")]
    user_id: Option<String>,

    /// Language tag, e.g. en-GB
    #[arg(long, global = true, env = "TGTG_LANGUAGE")]
    language: Option<String>,

    /// Currency code, e.g. GBP
    #[arg(long, global = true, env = "TGTG_CURRENCY")]
    currency: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// A position on the map
#[derive(Args, Debug, Clone, Copy)]
pub struct Position {
    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up restaurants near a position
    Nearby {
        #[command(flatten)]
        position: Position,
    },

    /// List your active orders
    ActiveOrders,

    /// Show your user page
    Me,

    /// Show the app startup information
    Startup,

    /// Show the discover page
    Discover {
        #[command(flatten)]
        position: Position,

        /// Search radius
        #[arg(short, long, default_value = "10")]
        radius: u32,
    },

    /// Search items near a position
    Items {
        #[command(flatten)]
        position: Position,

        /// Search radius
        #[arg(short, long, default_value = "10")]
        radius: u32,

        /// Only show items in stock
        #[arg(long)]
        stock_only: bool,
    },

    /// Show a store
    Store {
        /// Store id
        store_id: String,

        #[command(flatten)]
        position: Position,
    },

    /// Show an item
    Item {
        /// Item id
        item_id: String,

        #[command(flatten)]
        position: Position,
    },

    /// List manufacturer items
    ManufacturerItems {
        /// Country code
        #[arg(short, long, default_value = "DK")]
        country: String,

        /// Page number
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Page size
        #[arg(long, default_value = "50")]
        page_size: u32,
    },

    /// Show one page of a discover bucket
    Bucket {
        #[command(flatten)]
        position: Position,

        /// Search radius
        #[arg(short, long, default_value = "10")]
        radius: u32,

        /// Page number
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Page size
        #[arg(long, default_value = "100")]
        page_size: u32,

        /// Bucket filler type
        #[arg(short = 't', long, default_value = "Favorites")]
        bucket_type: String,
    },

    /// Show an order
    Order {
        /// Order id
        order_id: String,
    },

    /// Rate a redeemed order and print the HTTP status
    Rate {
        /// Order id
        order_id: String,

        /// Overall score
        #[arg(long)]
        overall: i32,

        /// Bag content score
        #[arg(long)]
        content: i32,

        /// Service score
        #[arg(long)]
        service: i32,

        /// Positive feedback tag (repeatable), e.g. PositiveFeedback_friendly_staff
        #[arg(short, long = "feedback", value_name = "TAG")]
        feedback: Vec<String>,
    },
}

impl Cli {
    fn build_client(&self) -> anyhow::Result<TgtgClient> {
        let mut config = ClientConfig::default();
        if let Some(ref url) = self.api_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(ref user_agent) = self.user_agent {
            config = config.with_user_agent(user_agent.clone());
        }

        let mut client = TgtgClient::with_config(config)?;
        if let Some(ref token) = self.token {
            client.set_bearer_token(token.clone());
        }
        if let Some(ref user_id) = self.user_id {
            client.set_user_id(user_id.clone());
        }
        if let Some(ref language) = self.language {
            client.set_language(language)?;
        }
        if let Some(ref currency) = self.currency {
            client.set_currency(currency.clone());
        }
        Ok(client)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }

    let result = match cli.build_client() {
        Ok(client) => commands::run(&client, &cli.command, cli.compact).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
