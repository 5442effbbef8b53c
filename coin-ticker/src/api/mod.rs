mod coinmarketcap;
mod error;
mod http;

pub use coinmarketcap::CoinMarketCapApi;
pub use error::TickerError;
pub use http::{HttpFetcher, ReqwestFetcher};
