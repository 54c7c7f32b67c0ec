use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;

use kalp_airdrop::config::loader::{apply_api_key_override, parse_config};
use kalp_airdrop::config::validation::validate_config;
use kalp_airdrop::config::{AppConfig, ConfigError};
use kalp_airdrop::gateway::{GatewayClient, GatewayResult};
use kalp_airdrop::observability::logging;

#[derive(Parser)]
#[command(name = "airdrop-cli")]
#[command(about = "Talk to the Kalp airdrop contract through the gateway", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, env = "KALP_CONFIG")]
    config: Option<PathBuf>,

    /// Gateway API key.
    #[arg(short = 'k', long, env = "KALP_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the gateway contract API root.
    #[arg(long)]
    gateway_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Claim the airdrop for an address
    Claim { address: String },
    /// Show the balance of an account
    Balance { account: String },
    /// Show the total supply
    Supply,
    /// Transfer tokens between accounts
    Transfer { from: String, to: String, value: u64 },
    /// List recorded transfers
    Transactions,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    logging::init_logging(&config.observability);

    let client = match GatewayClient::new(config.gateway) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli.command).await {
        Ok(body) => match serde_json::to_string_pretty(&body) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn build_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => parse_config(&std::fs::read_to_string(path)?)?,
        None => AppConfig::default(),
    };
    // The CLI logs only problems unless RUST_LOG says otherwise.
    config.observability.log_level = "warn".to_string();

    apply_api_key_override(&mut config, cli.api_key.clone());
    if let Some(url) = &cli.gateway_url {
        config.gateway.base_url = url.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

async fn run(client: &GatewayClient, command: Commands) -> GatewayResult<Value> {
    let response = match command {
        Commands::Claim { address } => client.claim(&address).await?,
        Commands::Balance { account } => client.balance_of(&account).await?,
        Commands::Supply => client.total_supply().await?,
        Commands::Transfer { from, to, value } => client.transfer_from(&from, &to, value).await?,
        Commands::Transactions => client.get_transactions().await?,
    };
    Ok(response.into_inner())
}
