use crate::api::error::TickerError;
use crate::api::http::HttpFetcher;
use crate::types::CoinSnapshot;

pub struct CoinMarketCapApi<F> {
	host: String,
	fetcher: F,
}

impl<F: HttpFetcher> CoinMarketCapApi<F> {
	pub fn new(host: String, fetcher: F) -> Self {
		Self { host, fetcher }
	}

	/// Fetches the ticker for a single asset, e.g. `bitcoin`.
	/// The endpoint answers with an array; only its first element is used.
	pub async fn get_coin_data(&self, asset_id: &str) -> Result<CoinSnapshot, TickerError> {
		let url = self.ticker_url(asset_id);
		log::debug!("Requesting {}", url);

		let body = self.fetcher.get(&url).await?;

		let snapshots: Vec<CoinSnapshot> =
			serde_json::from_slice(&body).map_err(|e| TickerError::Decode(e.to_string()))?;

		let snapshot = snapshots
			.into_iter()
			.next()
			.ok_or_else(|| TickerError::NotFound(asset_id.to_string()))?;

		log::info!("Coin Snapshot: {:#?}", snapshot);

		Ok(snapshot)
	}

	fn ticker_url(&self, asset_id: &str) -> String {
		format!("{host}/ticker/{id}", host = self.host.trim_end_matches('/'), id = asset_id)
	}
}
