use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickerError {
	/// The request could not be sent or the connection broke before a body was read.
	Transport(String),
	/// The server answered with something other than `200 OK`.
	HttpStatus { status: u16, body: String },
	/// The body is not a JSON array of coin snapshots.
	Decode(String),
	/// The API returned an empty array for the asset.
	NotFound(String),
}

impl fmt::Display for TickerError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			TickerError::Transport(err_msg) => write!(f, "Transport error: {}", err_msg),
			TickerError::HttpStatus { status, body } =>
				write!(f, "CoinMarketCap API error ({}): {}", status, body),
			TickerError::Decode(err_msg) =>
				write!(f, "Could not decode CoinMarketCap response: {}", err_msg),
			TickerError::NotFound(asset) => write!(f, "No ticker found for asset '{}'", asset),
		}
	}
}

impl Error for TickerError {}
