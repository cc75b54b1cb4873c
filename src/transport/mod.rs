//! HTTP transport seam and request body encoding.
use http::HeaderValue;
use serde::Serialize;

mod client;

pub use client::*;

/// `Content-Type: application/json` header value.
pub const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");

/// `Content-Type: application/x-www-form-urlencoded` header value.
pub const APPLICATION_X_WWW_FORM_URLENCODED: HeaderValue =
	HeaderValue::from_static("application/x-www-form-urlencoded");

/// Failure of the transport itself, before any response could be classified.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
	#[error("request timed out")]
	Timeout,

	#[error("unable to connect: {0}")]
	Connect(String),

	#[error("unable to send request: {0}")]
	Request(String),

	#[error("unable to receive response: {0}")]
	Response(String),

	#[error("server responded with status code: {0}")]
	Status(http::StatusCode),
}

/// Constructors only capture the failure. It is logged once, when the
/// adapter turns it into a [`crate::EsiaError`].
impl TransportError {
	pub fn connect(e: impl ToString) -> Self {
		Self::Connect(e.to_string())
	}

	pub fn request(e: impl ToString) -> Self {
		Self::Request(e.to_string())
	}

	pub fn response(e: impl ToString) -> Self {
		Self::Response(e.to_string())
	}

	pub fn status(status: http::StatusCode) -> Self {
		Self::Status(status)
	}
}

/// Trait for encoding request bodies with a specific content type.
pub trait ContentType {
	/// The `Content-Type` header value.
	const VALUE: HeaderValue;

	/// Serializes the given value into a byte vector using this content type's
	/// encoding.
	fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, TransportError>;
}

/// JSON (`application/json`) content type encoding.
pub struct Json;

impl ContentType for Json {
	const VALUE: HeaderValue = APPLICATION_JSON;

	fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, TransportError> {
		serde_json::to_vec(value).map_err(TransportError::request)
	}
}

/// URL-encoded form (`application/x-www-form-urlencoded`) content type
/// encoding.
pub struct WwwFormUrlEncoded;

impl ContentType for WwwFormUrlEncoded {
	const VALUE: HeaderValue = APPLICATION_X_WWW_FORM_URLENCODED;

	fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, TransportError> {
		log::debug!("serializing {}", std::any::type_name_of_val(value));
		serde_html_form::to_string(value)
			.map(String::into_bytes)
			.map_err(TransportError::request)
	}
}
