//! ESIA flows.
//!
//! Every flow performs exactly one request. The response goes through the
//! same pipeline: the status is checked with [`classify_http_status`], then a
//! body that reports a failure despite a successful status is classified,
//! and anything else is decoded as the success payload.
use iref::Uri;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{
	EsiaConfig, EsiaError,
	classify::{
		PARSE_FAILURE_MESSAGE, carries_error, classify_http_status, classify_object, parse_object,
	},
	network::CallError,
	transport::{APPLICATION_JSON, ContentType, HttpClient, TransportError},
};

pub mod authorization;
pub mod consent;
pub mod token;

/// A request sent to an ESIA endpoint.
pub trait IdpRequest {
	/// Success payload.
	type Response: DeserializeOwned;

	fn build_request(
		&self,
		config: &EsiaConfig,
	) -> Result<http::Request<Vec<u8>>, TransportError>;

	/// Checks whether a body received with a successful status reports a
	/// failure.
	fn reports_failure(&self, body: &Map<String, Value>) -> bool {
		carries_error(body)
	}

	fn decode_response(
		&self,
		response: http::Response<Vec<u8>>,
	) -> Result<Self::Response, CallError> {
		let status = response.status();
		let body = String::from_utf8_lossy(response.body());
		log::trace!("response body ({status}): {body}");

		classify_http_status(status, &body)?;

		let Some(object) = parse_object(&body) else {
			return Err(EsiaError::malformed(PARSE_FAILURE_MESSAGE).into());
		};

		if self.reports_failure(&object) {
			return Err(classify_object(&object).into());
		}

		serde_json::from_value(Value::Object(object)).map_err(|e| {
			log::debug!("unexpected payload shape: {e}");
			EsiaError::malformed(PARSE_FAILURE_MESSAGE).into()
		})
	}

	#[allow(async_fn_in_trait)]
	async fn send(
		&self,
		config: &EsiaConfig,
		http_client: &impl HttpClient,
	) -> Result<Self::Response, CallError> {
		let request = self.build_request(config)?;
		log::debug!("sending request to {}", request.uri());
		let response = http_client.send(request).await?;
		self.decode_response(response)
	}
}

/// Builds a `POST` request whose body is `value` encoded as `C`.
pub(crate) fn post<C: ContentType, T: Serialize>(
	uri: &Uri,
	value: &T,
) -> Result<http::Request<Vec<u8>>, TransportError> {
	http::Request::builder()
		.method(http::Method::POST)
		.uri(uri.as_str())
		.header(http::header::CONTENT_TYPE, C::VALUE)
		.header(http::header::ACCEPT, APPLICATION_JSON)
		.body(C::encode(value)?)
		.map_err(TransportError::request)
}
