use crate::api::{CoinMarketCapApi, HttpFetcher};
use crate::presenter;
use chrono::Utc;
use log::error;
use std::io::{self, Write};

/// Fetches and prints every asset in order. A failing asset is logged and skipped.
/// Returns the number of assets that were printed.
pub async fn run_ticker<F, W>(
	api: &CoinMarketCapApi<F>,
	assets: &[String],
	out: &mut W,
) -> io::Result<usize>
where
	F: HttpFetcher,
	W: Write,
{
	let mut printed = 0;

	for asset in assets {
		let coin = match api.get_coin_data(asset).await {
			Ok(coin) => coin,
			Err(e) => {
				error!("Error getting coin data for {}: {}", asset, e);
				continue
			},
		};

		if printed > 0 {
			writeln!(out)?;
		}
		presenter::write_snapshot(out, &coin, Utc::now().timestamp())?;
		printed += 1;
	}

	Ok(printed)
}
