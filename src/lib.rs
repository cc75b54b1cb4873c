//! Client for ESIA, the Russian federal identity provider.
//!
//! The crate covers the OAuth 2.0 style flows ESIA exposes to client systems
//! and the consent platform API, and translates every failure they can
//! produce into a single [`EsiaError`]:
//!
//! - HTTP error statuses of API responses;
//! - `error` (identity provider) and `errorCode` (consent platform) fields
//!   of JSON bodies, including bodies received with a success status;
//! - `ESIA-dddddd` codes embedded in the `error_description` of the
//!   authorization redirect;
//! - transport failures (timeouts, unreachable server).
//!
//! Callers branch on [`EsiaError::kind`] and display
//! [`EsiaError::message`] verbatim.
//!
//! # Modules
//!
//! - [`catalog`] — Descriptions of the documented ESIA error codes.
//! - [`classify`] — Classification of raw failure signals.
//! - [`network`] — Normalization of transport failures.
//! - [`endpoints`] — Authorization redirect, token and consent flows.
//! - [`transport`] — HTTP client abstraction and body encodings.
//! - [`util`] — URI query string utilities.
//!
//! # Example
//!
//! ```ignore
//! let config = EsiaConfig::new(client_id, client_secret, redirect_uri);
//! let state = StateBuf::new_random();
//! let redirect = authorization_url(&config, Some(&state));
//!
//! // ... the user agent comes back to the redirect URI ...
//! let grant = AuthorizationCallback::from_query(query)?.into_result()?;
//! match exchange_code(&config, &reqwest::Client::new(), &grant.code).await {
//!     Ok(token) => println!("{}", token.access_token.as_str()),
//!     Err(e) if e.kind() == FailureKind::Network => retry_later(),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```
#[cfg(feature = "reqwest")]
pub use reqwest;

pub use http;

pub mod catalog;
pub mod classify;
mod config;
pub mod endpoints;
mod error;
pub mod network;
pub mod transport;
mod types;
pub mod util;

pub use config::*;
pub use endpoints::{
	authorization::{AuthorizationCallback, AuthorizationGrant, authorization_url},
	consent::{ConsentResponse, request_consent},
	token::{TokenResponse, exchange_code, service_token},
};
pub use error::*;
pub use types::*;
