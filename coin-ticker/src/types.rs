use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use smol_str::SmolStr;
use std::fmt::Display;
use std::str::FromStr;

/// A point-in-time price record for one asset, as returned by the ticker endpoint.
/// The API encodes every number as a JSON string.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CoinSnapshot {
	pub id: SmolStr,
	pub name: SmolStr,
	pub symbol: SmolStr,
	#[serde(deserialize_with = "de_from_str")]
	pub rank: u32,
	#[serde(deserialize_with = "de_decimal")]
	pub price_usd: Decimal,
	#[serde(deserialize_with = "de_decimal")]
	pub price_btc: Decimal,
	#[serde(rename(deserialize = "24h_volume_usd"), deserialize_with = "de_decimal")]
	pub volume_24h_usd: Decimal,
	#[serde(deserialize_with = "de_decimal")]
	pub market_cap_usd: Decimal,
	#[serde(deserialize_with = "de_decimal")]
	pub available_supply: Decimal,
	#[serde(deserialize_with = "de_decimal")]
	pub total_supply: Decimal,
	#[serde(deserialize_with = "de_decimal")]
	pub percent_change_1h: Decimal,
	#[serde(deserialize_with = "de_decimal")]
	pub percent_change_24h: Decimal,
	#[serde(deserialize_with = "de_decimal")]
	pub percent_change_7d: Decimal,
	/// Unix seconds
	#[serde(deserialize_with = "de_from_str")]
	pub last_updated: i64,
}

fn de_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: FromStr,
	T::Err: Display,
{
	let s = String::deserialize(deserializer)?;
	s.trim()
		.parse::<T>()
		.map_err(|e| de::Error::custom(format!("could not parse '{}': {}", s, e)))
}

// Small prices come back in scientific notation, e.g. "1e-05".
fn de_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
	D: Deserializer<'de>,
{
	let s = String::deserialize(deserializer)?;
	let s = s.trim();
	Decimal::from_str(s)
		.or_else(|_| Decimal::from_scientific(s))
		.map_err(|e| de::Error::custom(format!("could not parse decimal '{}': {}", s, e)))
}
