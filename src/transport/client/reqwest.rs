use crate::transport::{HttpClient, TransportError};

impl From<reqwest::Error> for TransportError {
	fn from(e: reqwest::Error) -> Self {
		if e.is_timeout() {
			Self::Timeout
		} else if e.is_connect() {
			Self::connect(e)
		} else {
			Self::request(e)
		}
	}
}

impl HttpClient for reqwest::Client {
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, TransportError> {
		log::debug!("HTTP request to: {}", request.uri());
		log::trace!("HTTP request: {request:?}");

		let response = self
			.execute(request.try_into().map_err(TransportError::request)?)
			.await?;

		let mut builder = http::Response::builder().status(response.status());

		#[cfg(not(target_arch = "wasm32"))]
		{
			builder = builder.version(response.version());
		}

		for (name, value) in response.headers().iter() {
			builder = builder.header(name, value);
		}

		// Body read failures keep their timeout classification.
		let body = response.bytes().await?.to_vec();
		let response = builder.body(body).map_err(TransportError::response)?;

		log::trace!("HTTP response: {response:?}");

		Ok(response)
	}
}
