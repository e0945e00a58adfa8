use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{error, info, LevelFilter};
use std::path::PathBuf;
use std::sync::Arc;

use erc20_token_indexer::config::{Config, DEFAULT_CONFIG_PATH};
use erc20_token_indexer::providers::{AlchemyClient, RpcWalletProvider};
use erc20_token_indexer::routes::configure_routes;
use erc20_token_indexer::services::BalanceQueryFlow;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "info")]
    log_level: String,

    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn invalid_config(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 1. Parse command line arguments and setup logging
    let args = Args::parse();
    let log_level = match args.log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level.to_string())).init();

    // 2. Load configuration; a missing API key stops startup here
    let config = Config::load_with_path(&args.config).map_err(|e| {
        error!("Invalid configuration: {}", e);
        invalid_config(e)
    })?;

    info!("Starting ERC-20 token indexer...");
    info!(
        "Network: {}, wallet provider: {}",
        config.alchemy.network,
        config.wallet.provider_url.as_deref().unwrap_or("none")
    );

    // 3. Build the query flow
    let alchemy = AlchemyClient::from_config(&config.alchemy).map_err(invalid_config)?;
    let wallet = RpcWalletProvider::from_config(&config.wallet).map_err(invalid_config)?;
    let flow = web::Data::new(BalanceQueryFlow::new(
        Arc::new(alchemy),
        Arc::new(wallet),
        config.wallet.surface_errors,
    ));

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server will be available at http://{}", bind_addr);

    HttpServer::new(move || {
        let allowed_origins = config.cors.allowed_origins.clone();

        let cors = Cors::default().allowed_origin_fn(move |origin, _req_head| {
            let origin_str = match origin.to_str() {
                Ok(s) => s,
                Err(_) => return false,
            };
            allowed_origins.iter().any(|allowed| origin_str == allowed)
        });

        let methods: Vec<actix_web::http::Method> = config
            .cors
            .allowed_methods
            .iter()
            .filter_map(|m| m.parse().ok())
            .collect();

        let cors = cors
            .allowed_methods(methods)
            .allowed_headers(config.cors.allowed_headers.clone())
            .max_age(3600);

        let cors = if config.cors.supports_credentials {
            cors.supports_credentials()
        } else {
            cors
        };

        App::new()
            .app_data(flow.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
