use super::TransportError;

#[cfg(feature = "reqwest")]
mod reqwest;

/// Sends one HTTP request and returns the raw response.
///
/// Implementations report failures of the exchange itself as
/// [`TransportError`]; any status code, including error statuses, is a
/// successful response at this level.
pub trait HttpClient {
	#[allow(async_fn_in_trait)]
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, TransportError>;
}

impl<T> HttpClient for &T
where
	T: HttpClient,
{
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, TransportError> {
		T::send(*self, request).await
	}
}
