//! Classification of raw failure signals.
//!
//! ESIA reports failures through three channels: the HTTP status of an API
//! response, an `error` (identity provider) or `errorCode` (consent
//! platform) field in a JSON body, and the `error_description` parameter of
//! the authorization redirect. Each function below turns one of these signals
//! into a single [`EsiaError`].
use std::collections::BTreeMap;

use http::StatusCode;
use serde_json::{Map, Value};

use crate::{
	ErrorCode, ErrorCodeBuf, EsiaError,
	catalog::{ErrorDomain, describe_or_unknown, unknown_error_message},
	network::CallError,
	transport::TransportError,
};

/// Message of a body that is not a JSON object.
pub const PARSE_FAILURE_MESSAGE: &str = "failed to parse response body";

/// Message of a JSON object carrying none of the known error fields.
pub const NO_RECOGNIZED_ERROR_MESSAGE: &str = "response body carries no recognized error";

/// Classifies an error response body.
///
/// Must only be called on bodies already known to describe a failure. A
/// body that parses but carries neither an `error` field nor a catalogued
/// `errorCode` is reported as [`FailureKind::MalformedResponse`].
///
/// [`FailureKind::MalformedResponse`]: crate::FailureKind::MalformedResponse
pub fn classify_body(raw: &str) -> EsiaError {
	match parse_object(raw) {
		Some(body) => classify_object(&body),
		None => EsiaError::malformed(PARSE_FAILURE_MESSAGE),
	}
}

/// Classifies the error parameters of an authorization redirect.
///
/// The code is extracted from `error_description`; if none is found the
/// [`ErrorCode::UNKNOWN`] sentinel is used. This never fails.
pub fn classify_callback_error(query: &BTreeMap<String, String>) -> EsiaError {
	classify_callback_description(
		query
			.get("error_description")
			.map(String::as_str)
			.unwrap_or_default(),
	)
}

/// Classifies a callback `error_description` value.
pub fn classify_callback_description(description: &str) -> EsiaError {
	match find_provider_code(description) {
		Some(code) => {
			let message = describe_or_unknown(ErrorDomain::Identity, code);
			EsiaError::api(ErrorCodeBuf::from_raw(code.to_owned()), message)
		}
		None => {
			let mut message = unknown_error_message(ErrorCode::UNKNOWN);
			if !description.is_empty() {
				message.push_str(" (");
				message.push_str(description);
				message.push(')');
			}

			EsiaError::api(ErrorCodeBuf::unknown(), message)
		}
	}
}

/// Finds the first `ESIA-` prefix followed by six ASCII digits.
pub fn find_provider_code(text: &str) -> Option<&str> {
	let prefix = ErrorCode::ESIA_PREFIX.as_bytes();
	let len = prefix.len() + ErrorCode::ESIA_DIGITS;
	let bytes = text.as_bytes();
	let last = bytes.len().checked_sub(len)?;

	(0..=last)
		.find(|&i| {
			bytes[i..].starts_with(prefix)
				&& bytes[i + prefix.len()..i + len]
					.iter()
					.all(u8::is_ascii_digit)
		})
		.map(|i| &text[i..i + len])
}

/// Checks the status of a response.
///
/// Statuses the identity provider documents (400, 401, 403, 500) become
/// provider failures embedding the raw body. Any other error status is a
/// generic transport failure.
pub fn classify_http_status(status: StatusCode, body: &str) -> Result<(), CallError> {
	let failure = match status {
		StatusCode::BAD_REQUEST => {
			EsiaError::api(ErrorCodeBuf::from_status(status), format!("Bad request - {body}"))
		}
		StatusCode::UNAUTHORIZED => EsiaError::authentication(
			ErrorCodeBuf::from_status(status),
			format!("Authentication failed - {body}"),
		),
		StatusCode::FORBIDDEN => EsiaError::authentication(
			ErrorCodeBuf::from_status(status),
			format!("Access denied - {body}"),
		),
		StatusCode::INTERNAL_SERVER_ERROR => EsiaError::api(
			ErrorCodeBuf::from_status(status),
			format!("Internal IdP server error - {body}"),
		),
		status if status.as_u16() >= 400 => return Err(TransportError::status(status).into()),
		_ => return Ok(()),
	};

	Err(failure.into())
}

pub(crate) fn parse_object(raw: &str) -> Option<Map<String, Value>> {
	serde_json::from_str(raw).ok()
}

/// Checks whether a successful response body actually reports an
/// identity provider failure.
pub(crate) fn carries_error(body: &Map<String, Value>) -> bool {
	body.contains_key("error")
}

/// Checks whether a successful response body reports a catalogued consent
/// platform failure.
pub(crate) fn carries_consent_error(body: &Map<String, Value>) -> bool {
	body.get("errorCode")
		.and_then(Value::as_str)
		.is_some_and(|code| ErrorDomain::Consent.contains(code))
}

pub(crate) fn classify_object(body: &Map<String, Value>) -> EsiaError {
	if let Some(value) = body.get("error") {
		let raw = match value {
			Value::String(s) => s.clone(),
			other => other.to_string(),
		};

		let message = describe_or_unknown(ErrorDomain::Identity, &raw);
		return EsiaError::api(ErrorCodeBuf::from_raw(raw), message);
	}

	if let Some(entry) = body
		.get("errorCode")
		.and_then(Value::as_str)
		.and_then(|code| ErrorDomain::Consent.get(code))
	{
		return EsiaError::consent(entry.error_code(), entry.description);
	}

	EsiaError::malformed(NO_RECOGNIZED_ERROR_MESSAGE)
}
