//! Typed failures returned by every ESIA operation.
use crate::{ErrorCode, ErrorCodeBuf};

/// Failure category a caller branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FailureKind {
	/// Credentials or identity rejected (HTTP 401/403).
	Authentication,

	/// General provider-side rejection of the request.
	Api,

	/// Rejection from the consent platform.
	Consent,

	/// The transport could not complete the exchange.
	Network,

	/// The response could not be parsed, or had an unexpected shape.
	MalformedResponse,
}

/// Error returned by ESIA operations.
///
/// Provider failures ([`FailureKind::Authentication`], [`FailureKind::Api`]
/// and [`FailureKind::Consent`]) always carry the [`ErrorCode`] they were
/// classified from. The message is never empty: it is either the catalog
/// description of the code, the unknown-code message, or a description of
/// the transport condition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EsiaError {
	#[error("[{}] {message}", .code.as_str())]
	Authentication { code: ErrorCodeBuf, message: String },

	#[error("[{}] {message}", .code.as_str())]
	Api { code: ErrorCodeBuf, message: String },

	#[error("[{}] {message}", .code.as_str())]
	Consent { code: ErrorCodeBuf, message: String },

	#[error("{message}")]
	Network { message: String },

	#[error("{message}")]
	MalformedResponse { message: String },
}

impl EsiaError {
	pub fn authentication(code: ErrorCodeBuf, message: impl Into<String>) -> Self {
		let message = non_empty(message.into(), &code);
		log::warn!("authentication failure [{}]: {message}", code.as_str());
		Self::Authentication { code, message }
	}

	pub fn api(code: ErrorCodeBuf, message: impl Into<String>) -> Self {
		let message = non_empty(message.into(), &code);
		log::warn!("API failure [{}]: {message}", code.as_str());
		Self::Api { code, message }
	}

	pub fn consent(code: ErrorCodeBuf, message: impl Into<String>) -> Self {
		let message = non_empty(message.into(), &code);
		log::warn!("consent failure [{}]: {message}", code.as_str());
		Self::Consent { code, message }
	}

	pub fn network(message: impl Into<String>) -> Self {
		let mut message = message.into();
		if message.is_empty() {
			message.push_str("network error");
		}

		log::error!("network failure: {message}");
		Self::Network { message }
	}

	pub fn malformed(message: impl Into<String>) -> Self {
		let mut message = message.into();
		if message.is_empty() {
			message.push_str("malformed response");
		}

		log::warn!("malformed response: {message}");
		Self::MalformedResponse { message }
	}

	pub fn kind(&self) -> FailureKind {
		match self {
			Self::Authentication { .. } => FailureKind::Authentication,
			Self::Api { .. } => FailureKind::Api,
			Self::Consent { .. } => FailureKind::Consent,
			Self::Network { .. } => FailureKind::Network,
			Self::MalformedResponse { .. } => FailureKind::MalformedResponse,
		}
	}

	/// Provider error code, absent for network and malformed-response
	/// failures.
	pub fn code(&self) -> Option<&ErrorCode> {
		match self {
			Self::Authentication { code, .. }
			| Self::Api { code, .. }
			| Self::Consent { code, .. } => Some(code.as_error_code()),
			Self::Network { .. } | Self::MalformedResponse { .. } => None,
		}
	}

	pub fn message(&self) -> &str {
		match self {
			Self::Authentication { message, .. }
			| Self::Api { message, .. }
			| Self::Consent { message, .. }
			| Self::Network { message }
			| Self::MalformedResponse { message } => message,
		}
	}
}

fn non_empty(message: String, code: &ErrorCode) -> String {
	if message.is_empty() {
		crate::catalog::unknown_error_message(code.as_str())
	} else {
		message
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn code(s: &str) -> ErrorCodeBuf {
		ErrorCodeBuf::new(s.to_owned()).unwrap()
	}

	#[test]
	fn display_with_code() {
		let error = EsiaError::api(code("ESIA-007002"), "Certificate mismatch");
		assert_eq!(error.to_string(), "[ESIA-007002] Certificate mismatch");
	}

	#[test]
	fn display_without_code() {
		let error = EsiaError::network("request timed out");
		assert_eq!(error.to_string(), "request timed out");
		assert!(error.code().is_none());
	}

	#[test]
	fn accessors() {
		let error = EsiaError::authentication(code("401"), "Authentication failed - {}");
		assert_eq!(error.kind(), FailureKind::Authentication);
		assert_eq!(error.code().unwrap().as_str(), "401");
		assert_eq!(error.message(), "Authentication failed - {}");
	}

	#[test]
	fn message_is_never_empty() {
		assert_eq!(
			EsiaError::consent(code("ESIA-036799"), "").message(),
			"Unknown error: ESIA-036799"
		);
		assert!(!EsiaError::network("").message().is_empty());
		assert!(!EsiaError::malformed("").message().is_empty());
	}
}
