use crate::api::{CoinMarketCapApi, ReqwestFetcher};
use crate::args::TickerArgs;
use clap::Parser;
use log::{error, info};
use std::error::Error;

mod api;
mod args;
mod presenter;
mod ticker;
mod types;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
	dotenv::dotenv().ok();
	pretty_env_logger::init();

	let args = TickerArgs::parse();

	let assets = args.assets.0;
	if assets.is_empty() {
		error!("No assets provided. Exiting.");
		return Ok(())
	}

	let fetcher = ReqwestFetcher::new()?;
	let api = CoinMarketCapApi::new(args.coinmarketcap_config.host_url, fetcher);

	let stdout = std::io::stdout();
	let printed = ticker::run_ticker(&api, &assets, &mut stdout.lock()).await?;
	info!("Printed {} of {} assets", printed, assets.len());

	Ok(())
}
