#![allow(dead_code)]

use std::{collections::VecDeque, sync::Mutex};

use esia_client::{
	ClientIdBuf, EsiaConfig, EsiaEndpoints,
	http,
	transport::{HttpClient, TransportError},
};
use iref::uri;

/// An `HttpClient` that records requests and replays queued outcomes in
/// FIFO order.
pub struct MockHttpClient {
	outcomes: Mutex<VecDeque<Result<http::Response<Vec<u8>>, TransportError>>>,
	recorded: Mutex<Vec<http::Request<Vec<u8>>>>,
}

impl MockHttpClient {
	pub fn new() -> Self {
		Self {
			outcomes: Mutex::new(VecDeque::new()),
			recorded: Mutex::new(Vec::new()),
		}
	}

	/// Client answering the next request with `status` and a JSON `body`.
	pub fn responding(status: u16, body: &str) -> Self {
		let client = Self::new();
		client.enqueue_response(status, body);
		client
	}

	/// Client failing the next request at the transport level.
	pub fn failing(error: TransportError) -> Self {
		let client = Self::new();
		client.outcomes.lock().unwrap().push_back(Err(error));
		client
	}

	pub fn enqueue_response(&self, status: u16, body: &str) {
		let response = http::Response::builder()
			.status(status)
			.header(http::header::CONTENT_TYPE, "application/json")
			.body(body.as_bytes().to_vec())
			.unwrap();
		self.outcomes.lock().unwrap().push_back(Ok(response));
	}

	/// Drain and return all recorded requests.
	pub fn take_requests(&self) -> Vec<http::Request<Vec<u8>>> {
		std::mem::take(&mut self.recorded.lock().unwrap())
	}
}

impl HttpClient for MockHttpClient {
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, TransportError> {
		self.recorded.lock().unwrap().push(request);
		self.outcomes
			.lock()
			.unwrap()
			.pop_front()
			.expect("no response queued")
	}
}

/// Configuration pointing at a test federation.
pub fn test_config() -> EsiaConfig {
	EsiaConfig::new(
		ClientIdBuf::new("your-client-id".to_owned()).unwrap(),
		"your-client-secret".to_owned(),
		uri!("https://yourapp.com/callback").to_owned(),
	)
	.with_endpoints(EsiaEndpoints {
		authorization: uri!("https://idp.test/aas/oauth2/ac").to_owned(),
		token: uri!("https://idp.test/aas/oauth2/te").to_owned(),
		consent: uri!("https://idp.test/rs/soc/v2/consents").to_owned(),
	})
}
