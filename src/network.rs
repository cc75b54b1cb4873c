//! Normalization of transport failures.
//!
//! Every flow runs its single network exchange through
//! [`handle_network_errors`], which turns transport failures into
//! [`FailureKind::Network`](crate::FailureKind::Network) errors and leaves
//! already classified failures untouched.
use std::future::Future;

use crate::{EsiaError, transport::TransportError};

/// Intermediate error of an operation performing a network exchange.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
	/// The exchange failed at the transport level.
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The exchange completed and the response was classified as a failure.
	#[error(transparent)]
	Failure(#[from] EsiaError),
}

impl From<CallError> for EsiaError {
	fn from(e: CallError) -> Self {
		match e {
			CallError::Transport(e) => network_failure(e),
			CallError::Failure(e) => e,
		}
	}
}

/// Converts a transport failure into a network [`EsiaError`].
pub fn network_failure(e: TransportError) -> EsiaError {
	match e {
		TransportError::Timeout => EsiaError::network("request timed out"),
		TransportError::Connect(_) => EsiaError::network("IdP server is unreachable"),
		other => EsiaError::network(format!("network error: {other}")),
	}
}

/// Runs `operation` and normalizes its transport failures.
///
/// Failures the operation already classified are returned as-is.
pub async fn handle_network_errors<T>(
	operation: impl Future<Output = Result<T, CallError>>,
) -> Result<T, EsiaError> {
	operation.await.map_err(EsiaError::from)
}
