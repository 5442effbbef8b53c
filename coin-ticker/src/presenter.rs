use crate::types::CoinSnapshot;
use chrono::{Local, TimeZone};
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::{self, Write};

/// Prices older than this many seconds are flagged.
pub const STALE_AFTER_SECONDS: i64 = 300;

/// Writes the summary of a snapshot, one line per value.
/// `now` is the current Unix time in seconds, used for the staleness check.
pub fn write_snapshot<W: Write>(out: &mut W, coin: &CoinSnapshot, now: i64) -> io::Result<()> {
	writeln!(out, "Name: {}", coin.name)?;
	writeln!(out, "Price USD: ${}", format_two_decimals(coin.price_usd))?;
	writeln!(out, "1 hour Δ: {}% ", format_two_decimals(coin.percent_change_1h))?;
	writeln!(out, "24 hour Δ: {}% ", format_two_decimals(coin.percent_change_24h))?;
	writeln!(out, "7 day Δ: {}% ", format_two_decimals(coin.percent_change_7d))?;

	match Local.timestamp_opt(coin.last_updated, 0).single() {
		Some(last_updated) => writeln!(out, "Last Updated: {}", last_updated)?,
		None => {
			log::error!(
				"Could not convert last update timestamp {} of {} to a local time",
				coin.last_updated,
				coin.id
			);
			writeln!(out, "Last Updated: {}", coin.last_updated)?
		},
	}

	if is_stale(coin.last_updated, now) {
		writeln!(out, "WARNING: Prices are > 5 mins old")?;
	}

	Ok(())
}

pub fn is_stale(last_updated: i64, now: i64) -> bool {
	now.saturating_sub(last_updated) > STALE_AFTER_SECONDS
}

pub fn format_two_decimals(value: Decimal) -> String {
	format!("{:.2}", value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}
