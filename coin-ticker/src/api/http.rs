use crate::api::error::TickerError;
use async_trait::async_trait;
use reqwest::StatusCode;

#[async_trait]
pub trait HttpFetcher: Send + Sync {
	/// Issues a single GET request to `url` and returns the raw response body.
	/// Any status other than `200 OK` is returned as `TickerError::HttpStatus`.
	async fn get(&self, url: &str) -> Result<Vec<u8>, TickerError>;
}

pub struct ReqwestFetcher {
	inner: reqwest::Client,
}

impl ReqwestFetcher {
	pub fn new() -> Result<Self, TickerError> {
		let inner = reqwest::Client::builder()
			.build()
			.map_err(|e| TickerError::Transport(format!("Could not build HTTP client: {}", e)))?;

		Ok(Self::with_client(inner))
	}

	pub fn with_client(inner: reqwest::Client) -> Self {
		Self { inner }
	}
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
	async fn get(&self, url: &str) -> Result<Vec<u8>, TickerError> {
		let response = self
			.inner
			.get(url)
			.send()
			.await
			.map_err(|e| TickerError::Transport(format!("Failed to send request: {}", e)))?;

		let status = response.status();
		if status != StatusCode::OK {
			let body = response.text().await.unwrap_or_else(|_| "Unknown".to_string());
			return Err(TickerError::HttpStatus {
				status: status.as_u16(),
				body: body.trim().to_string(),
			})
		}

		let body = response
			.bytes()
			.await
			.map_err(|e| TickerError::Transport(format!("Failed to read response body: {}", e)))?;

		Ok(body.to_vec())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tokio::io::{AsyncReadExt, AsyncWriteExt};
	use tokio::net::TcpListener;

	/// Serves exactly one canned HTTP response on a local port and returns its base URL.
	async fn serve_once(status_line: &'static str, body: &'static str) -> String {
		let listener = TcpListener::bind("127.0.0.1:0").await.expect("should bind a local port");
		let addr = listener.local_addr().expect("should have a local address");

		tokio::spawn(async move {
			let (mut socket, _) = listener.accept().await.expect("should accept a connection");

			let mut request = Vec::new();
			let mut buf = [0u8; 1024];
			while !request.windows(4).any(|w| w == b"\r\n\r\n") {
				let n = socket.read(&mut buf).await.expect("should read the request");
				if n == 0 {
					break
				}
				request.extend_from_slice(&buf[..n]);
			}

			let response = format!(
				"HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
				status_line,
				body.len(),
				body
			);
			socket.write_all(response.as_bytes()).await.expect("should write the response");
			socket.shutdown().await.ok();
		});

		format!("http://{}", addr)
	}

	fn local_fetcher() -> ReqwestFetcher {
		let client = reqwest::Client::builder().no_proxy().build().expect("should build a client");
		ReqwestFetcher::with_client(client)
	}

	#[tokio::test]
	async fn test_ok_response_returns_body() {
		let host = serve_once("200 OK", "[]").await;

		let body = local_fetcher()
			.get(&format!("{}/ticker/bitcoin", host))
			.await
			.expect("should return the body");

		assert_eq!(body, b"[]".to_vec());
	}

	#[tokio::test]
	async fn test_non_200_status_carries_body() {
		let host = serve_once("404 Not Found", "{\"error\": \"id not found\"}\n").await;

		let error = local_fetcher()
			.get(&format!("{}/ticker/nocoin", host))
			.await
			.expect_err("should fail on a 404");

		assert_eq!(
			error,
			TickerError::HttpStatus { status: 404, body: "{\"error\": \"id not found\"}".to_string() }
		);
	}

	#[tokio::test]
	async fn test_other_success_codes_are_rejected() {
		let host = serve_once("202 Accepted", "queued").await;

		let error = local_fetcher()
			.get(&format!("{}/ticker/bitcoin", host))
			.await
			.expect_err("only 200 is accepted");

		assert_eq!(error, TickerError::HttpStatus { status: 202, body: "queued".to_string() });
	}

	#[tokio::test]
	async fn test_refused_connection_is_transport_error() {
		let listener = TcpListener::bind("127.0.0.1:0").await.expect("should bind a local port");
		let addr = listener.local_addr().expect("should have a local address");
		drop(listener);

		let error = local_fetcher()
			.get(&format!("http://{}/ticker/bitcoin", addr))
			.await
			.expect_err("nothing is listening");

		assert!(matches!(error, TickerError::Transport(_)));
	}

	#[tokio::test]
	async fn test_invalid_url_is_transport_error() {
		let error = local_fetcher().get("not a url").await.expect_err("should not parse");

		assert!(matches!(error, TickerError::Transport(_)));
	}
}
