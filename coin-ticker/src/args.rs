use clap::Parser;

fn parse_asset_vec(src: &str) -> SupportedAssets {
	let mut vec = Vec::new();
	for s in src.split(',') {
		let s = s.trim();
		if !s.is_empty() {
			vec.push(s.to_string());
		}
	}
	SupportedAssets(vec)
}

// We need the extra struct to be able to parse the assets to a Vec
#[derive(Clone, Debug)]
pub struct SupportedAssets(pub Vec<String>);

#[derive(Parser, Debug, Clone)]
#[clap(name = "coin-ticker")]
pub struct TickerArgs {
	/// Assets to query, in order
	/// Each asset is the CoinMarketCap identifier, e.g. `bitcoin`
	#[clap(short, long, parse(from_str = parse_asset_vec), default_value = "bitcoin,ethereum")]
	pub assets: SupportedAssets,

	#[clap(flatten)]
	pub coinmarketcap_config: CoinMarketCapConfig,
}

#[derive(Parser, Debug, Clone)]
pub struct CoinMarketCapConfig {
	/// The host URL for the CoinMarketCap ticker API.
	#[clap(long, env = "CMC_HOST_URL", default_value = "https://api.coinmarketcap.com/v1")]
	pub host_url: String,
}
