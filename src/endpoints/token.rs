//! Token endpoint: authorization code and client credentials grants.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use crate::{
	AccessTokenBuf, Code, CodeBuf, EsiaConfig, EsiaError,
	endpoints::{IdpRequest, post},
	network::handle_network_errors,
	transport::{HttpClient, TransportError, WwwFormUrlEncoded},
};

/// Exchanges an authorization code for an access token.
pub async fn exchange_code(
	config: &EsiaConfig,
	http_client: &impl HttpClient,
	code: &Code,
) -> Result<TokenResponse, EsiaError> {
	handle_network_errors(ExchangeCode::new(code.to_owned()).send(config, http_client)).await
}

/// Obtains an access token for the client system itself.
pub async fn service_token(
	config: &EsiaConfig,
	http_client: &impl HttpClient,
) -> Result<TokenResponse, EsiaError> {
	handle_network_errors(ServiceToken.send(config, http_client)).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	AuthorizationCode,
	ClientCredentials,
}

/// Token request with the authorization code grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeCode {
	pub code: CodeBuf,
}

impl ExchangeCode {
	pub fn new(code: CodeBuf) -> Self {
		Self { code }
	}
}

#[derive(Serialize)]
struct AuthorizationCodeParams<'a> {
	grant_type: GrantType,
	code: &'a str,
	client_id: &'a str,
	client_secret: &'a str,
	redirect_uri: &'a str,
}

impl IdpRequest for ExchangeCode {
	type Response = TokenResponse;

	fn build_request(
		&self,
		config: &EsiaConfig,
	) -> Result<http::Request<Vec<u8>>, TransportError> {
		post::<WwwFormUrlEncoded, _>(
			&config.endpoints.token,
			&AuthorizationCodeParams {
				grant_type: GrantType::AuthorizationCode,
				code: self.code.as_str(),
				client_id: config.client_id.as_str(),
				client_secret: &config.client_secret,
				redirect_uri: config.redirect_uri.as_str(),
			},
		)
	}
}

/// Token request with the client credentials grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceToken;

#[derive(Serialize)]
struct ClientCredentialsParams<'a> {
	grant_type: GrantType,
	client_id: &'a str,
	client_secret: &'a str,
}

impl IdpRequest for ServiceToken {
	type Response = TokenResponse;

	fn build_request(
		&self,
		config: &EsiaConfig,
	) -> Result<http::Request<Vec<u8>>, TransportError> {
		post::<WwwFormUrlEncoded, _>(
			&config.endpoints.token,
			&ClientCredentialsParams {
				grant_type: GrantType::ClientCredentials,
				client_id: config.client_id.as_str(),
				client_secret: &config.client_secret,
			},
		)
	}
}

/// Successful token endpoint response.
///
/// Fields ESIA may add beyond the ones below are kept in `extra`, so the
/// payload serializes back to what the endpoint sent.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
	pub access_token: AccessTokenBuf,

	pub token_type: Option<String>,

	/// Lifetime in seconds of the access token.
	pub expires_in: Option<u64>,

	pub refresh_token: Option<String>,

	/// OpenID Connect identity token, when `openid` was requested.
	pub id_token: Option<String>,

	pub scope: Option<String>,

	pub state: Option<String>,

	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
	use iref::uri;

	use crate::{ClientIdBuf, FailureKind, classify::PARSE_FAILURE_MESSAGE, network::CallError};

	use super::*;

	fn config() -> EsiaConfig {
		EsiaConfig::new(
			ClientIdBuf::new("your-client-id".to_owned()).unwrap(),
			"your-client-secret".to_owned(),
			uri!("https://yourapp.com/callback").to_owned(),
		)
	}

	fn response(status: u16, body: &str) -> http::Response<Vec<u8>> {
		http::Response::builder()
			.status(status)
			.body(body.as_bytes().to_vec())
			.unwrap()
	}

	fn failure(result: Result<TokenResponse, CallError>) -> EsiaError {
		match result {
			Err(CallError::Failure(e)) => e,
			other => panic!("expected a classified failure, got {other:?}"),
		}
	}

	#[test]
	fn authorization_code_request() {
		let request = ExchangeCode::new(CodeBuf::new("valid_auth_code".to_owned()).unwrap())
			.build_request(&config())
			.unwrap();

		assert_eq!(request.method(), http::Method::POST);
		assert_eq!(request.uri(), "https://esia.gosuslugi.ru/aas/oauth2/te");
		assert_eq!(
			request.headers()[http::header::CONTENT_TYPE],
			"application/x-www-form-urlencoded"
		);
		assert_eq!(
			String::from_utf8(request.into_body()).unwrap(),
			"grant_type=authorization_code&code=valid_auth_code&client_id=your-client-id\
			&client_secret=your-client-secret&redirect_uri=https%3A%2F%2Fyourapp.com%2Fcallback"
		);
	}

	#[test]
	fn client_credentials_request() {
		let request = ServiceToken.build_request(&config()).unwrap();
		assert_eq!(
			String::from_utf8(request.into_body()).unwrap(),
			"grant_type=client_credentials&client_id=your-client-id&client_secret=your-client-secret"
		);
	}

	#[test]
	fn decode_success() {
		let token = ServiceToken
			.decode_response(response(
				200,
				r#"{"access_token":"t","expires_in":3600,"token_type":"Bearer","jti":"x"}"#,
			))
			.unwrap();

		assert_eq!(token.access_token.as_str(), "t");
		assert_eq!(token.expires_in, Some(3600));
		assert_eq!(token.token_type.as_deref(), Some("Bearer"));
		assert_eq!(token.extra["jti"], "x");
	}

	#[test]
	fn error_field_with_success_status() {
		let error = failure(ServiceToken.decode_response(response(200, r#"{"error":"ESIA-007053"}"#)));
		assert_eq!(error.kind(), FailureKind::Api);
		assert_eq!(error.code().unwrap().as_str(), "ESIA-007053");
		assert_eq!(error.message(), "Invalid client_secret");
	}

	#[test]
	fn empty_error_field_is_api_failure() {
		let error = failure(ServiceToken.decode_response(response(200, r#"{"error":""}"#)));
		assert_eq!(error.kind(), FailureKind::Api);
		assert_eq!(error.code().unwrap().as_str(), "");
	}

	#[test]
	fn error_status_embeds_body() {
		let error = failure(ServiceToken.decode_response(response(400, r#"{"error":"invalid_grant"}"#)));
		assert_eq!(error.kind(), FailureKind::Api);
		assert_eq!(error.code().unwrap().as_str(), "400");
		assert!(error.message().contains("invalid_grant"));
	}

	#[test]
	fn missing_access_token_is_malformed() {
		let error = failure(ServiceToken.decode_response(response(200, r#"{"expires_in":3600}"#)));
		assert_eq!(error.kind(), FailureKind::MalformedResponse);
		assert_eq!(error.message(), PARSE_FAILURE_MESSAGE);
	}

	#[test]
	fn non_json_success_is_malformed() {
		let error = failure(ServiceToken.decode_response(response(200, "<html></html>")));
		assert_eq!(error.kind(), FailureKind::MalformedResponse);
	}

	#[test]
	fn consent_error_code_is_not_checked_on_token_responses() {
		// The token endpoint reports failures with `error` only.
		let error = failure(
			ServiceToken.decode_response(response(200, r#"{"errorCode":"ESIA-036701"}"#)),
		);
		assert_eq!(error.kind(), FailureKind::MalformedResponse);
	}
}
