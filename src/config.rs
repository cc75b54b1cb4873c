//! Client configuration.
use std::fmt;

use iref::{UriBuf, uri};
use serde::{Deserialize, Serialize};

use crate::{ClientIdBuf, ScopeBuf};

/// ESIA endpoint locations.
///
/// [`Default`] points at the production federation at
/// `esia.gosuslugi.ru`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsiaEndpoints {
	/// Authorization endpoint the user agent is redirected to.
	pub authorization: UriBuf,

	/// Token endpoint.
	pub token: UriBuf,

	/// Consent platform request endpoint.
	pub consent: UriBuf,
}

impl Default for EsiaEndpoints {
	fn default() -> Self {
		Self {
			authorization: uri!("https://esia.gosuslugi.ru/aas/oauth2/ac").to_owned(),
			token: uri!("https://esia.gosuslugi.ru/aas/oauth2/te").to_owned(),
			consent: uri!("https://esia.gosuslugi.ru/rs/soc/v2/consents").to_owned(),
		}
	}
}

/// Registration data of a client system.
///
/// Built once and passed by reference to every flow.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsiaConfig {
	/// Mnemonic of the client system.
	pub client_id: ClientIdBuf,

	pub client_secret: String,

	/// Registered redirect URI.
	pub redirect_uri: UriBuf,

	/// Scope requested from the authorization endpoint.
	#[serde(default = "ScopeBuf::openid_profile")]
	pub scope: ScopeBuf,

	#[serde(default)]
	pub endpoints: EsiaEndpoints,
}

impl EsiaConfig {
	/// Creates a configuration for the production endpoints with the
	/// `openid profile` scope.
	pub fn new(client_id: ClientIdBuf, client_secret: String, redirect_uri: UriBuf) -> Self {
		Self {
			client_id,
			client_secret,
			redirect_uri,
			scope: ScopeBuf::openid_profile(),
			endpoints: EsiaEndpoints::default(),
		}
	}

	pub fn with_scope(self, scope: ScopeBuf) -> Self {
		Self { scope, ..self }
	}

	pub fn with_endpoints(self, endpoints: EsiaEndpoints) -> Self {
		Self { endpoints, ..self }
	}
}

impl fmt::Debug for EsiaConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EsiaConfig")
			.field("client_id", &self.client_id)
			.field("client_secret", &"<redacted>")
			.field("redirect_uri", &self.redirect_uri)
			.field("scope", &self.scope)
			.field("endpoints", &self.endpoints)
			.finish()
	}
}
