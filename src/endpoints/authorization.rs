//! Authorization endpoint redirect and callback.
use iref::UriBuf;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
	CodeBuf, EsiaConfig, EsiaError, State, StateBuf, classify::classify_callback_description,
	util::extend_uri_query,
};

/// Builds the URI the user agent is redirected to in order to authenticate.
///
/// ```text
/// <authorization endpoint>?client_id=..&redirect_uri=..&response_type=code&scope=..[&state=..]
/// ```
pub fn authorization_url(config: &EsiaConfig, state: Option<&State>) -> UriBuf {
	let mut uri = config.endpoints.authorization.clone();

	extend_uri_query(
		&mut uri,
		&AuthorizationParams {
			client_id: config.client_id.as_str(),
			redirect_uri: config.redirect_uri.as_str(),
			response_type: "code",
			scope: config.scope.as_str(),
			state: state.map(|s| s.as_str()),
		},
	);

	uri
}

#[skip_serializing_none]
#[derive(Serialize)]
struct AuthorizationParams<'a> {
	client_id: &'a str,
	redirect_uri: &'a str,
	response_type: &'static str,
	scope: &'a str,
	state: Option<&'a str>,
}

/// Query parameters ESIA appends to the redirect URI.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthorizationCallback {
	/// Raw `code` parameter, validated only when no error is reported.
	pub code: Option<String>,

	pub state: Option<StateBuf>,

	pub error: Option<String>,

	pub error_description: Option<String>,
}

impl AuthorizationCallback {
	/// Parses the query string of the redirect.
	pub fn from_query(query: &str) -> Result<Self, EsiaError> {
		serde_html_form::from_str(query)
			.map_err(|e| EsiaError::malformed(format!("failed to parse callback query: {e}")))
	}

	/// Extracts the authorization code, or the error ESIA reported instead.
	pub fn into_result(self) -> Result<AuthorizationGrant, EsiaError> {
		if self.error.is_some() || self.error_description.is_some() {
			return Err(classify_callback_description(
				self.error_description.as_deref().unwrap_or_default(),
			));
		}

		let code = self
			.code
			.ok_or_else(|| EsiaError::malformed("callback carries neither code nor error"))?;
		let code = CodeBuf::new(code)
			.map_err(|_| EsiaError::malformed("callback carries an invalid authorization code"))?;

		Ok(AuthorizationGrant {
			code,
			state: self.state,
		})
	}
}

/// Authorization code delivered to the redirect URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationGrant {
	pub code: CodeBuf,

	/// Echoed `state`, to be compared with the one sent.
	pub state: Option<StateBuf>,
}
