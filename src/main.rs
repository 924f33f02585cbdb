// @file: src/main.rs
// @description: Loads one chart as configured and prints the metadata and candles.
// @author: LAS.

use anyhow::Context;
use log::info;
use quote_ingestion::connectors::YahooClient;
use quote_ingestion::utils::config::AppConfig;

fn main() -> anyhow::Result<()> {
    // 1. Environment & Configuration
    dotenv::dotenv().ok();
    let config: AppConfig = AppConfig::load().context("failed to load configuration")?;

    // 2. Initialize Logger (RUST_LOG still overrides the configured level)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str())).init();

    info!(">>> Chart loader starting for {} <<<", config.symbol);

    // 3. Build Client
    let client = YahooClient::new(config.to_query()?, &config.transport_settings())?;

    // 4. Fetch & Print
    let (metadata, candles) = client.load()?;
    println!("{}", metadata);
    for candle in &candles {
        println!("{}", candle);
    }

    info!(">>> Loaded {} candles <<<", candles.len());
    Ok(())
}
