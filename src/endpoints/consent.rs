//! Consent platform requests.
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
	EsiaConfig, EsiaError,
	classify::{carries_consent_error, carries_error},
	endpoints::{IdpRequest, post},
	network::handle_network_errors,
	transport::{HttpClient, Json, TransportError},
};

/// Parsed consent platform response.
pub type ConsentResponse = Map<String, Value>;

/// Asks the consent platform for the consent of `user_id` on the consent
/// type identified by `sysname`.
pub async fn request_consent(
	config: &EsiaConfig,
	http_client: &impl HttpClient,
	user_id: &str,
	sysname: &str,
) -> Result<ConsentResponse, EsiaError> {
	let request = ConsentRequest {
		sysname: sysname.to_owned(),
		user_id: user_id.to_owned(),
	};

	handle_network_errors(request.send(config, http_client)).await
}

/// Consent request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentRequest {
	/// Mnemonic of the consent type.
	pub sysname: String,

	/// ESIA identifier of the user.
	pub user_id: String,
}

impl IdpRequest for ConsentRequest {
	type Response = ConsentResponse;

	fn build_request(
		&self,
		config: &EsiaConfig,
	) -> Result<http::Request<Vec<u8>>, TransportError> {
		post::<Json, _>(&config.endpoints.consent, self)
	}

	fn reports_failure(&self, body: &Map<String, Value>) -> bool {
		carries_error(body) || carries_consent_error(body)
	}
}
