//! Static catalog of ESIA error codes.
//!
//! ESIA reports failures with `ESIA-dddddd` codes. The identity provider and
//! the consent platform use disjoint code ranges, so the catalog is split in
//! two domains. Both tables are `static` and never change at runtime.
use std::borrow::Cow;

use crate::ErrorCodeBuf;

/// Error domain a catalog entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorDomain {
	/// Identity provider (authorization and token endpoints).
	Identity,

	/// Consent platform (permissions).
	Consent,
}

impl ErrorDomain {
	/// Every entry of this domain.
	pub fn entries(self) -> &'static [CatalogEntry] {
		match self {
			Self::Identity => IDENTITY_ERRORS,
			Self::Consent => CONSENT_ERRORS,
		}
	}

	/// Returns the catalog entry for `code`, if this domain defines it.
	pub fn get(self, code: &str) -> Option<&'static CatalogEntry> {
		self.entries().iter().find(|entry| entry.code == code)
	}

	/// Returns the description of `code`, if this domain defines it.
	pub fn describe(self, code: &str) -> Option<&'static str> {
		self.get(code).map(|entry| entry.description)
	}

	/// Checks whether this domain defines `code`.
	pub fn contains(self, code: &str) -> bool {
		self.get(code).is_some()
	}
}

/// A catalogued error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CatalogEntry {
	pub code: &'static str,
	pub domain: ErrorDomain,
	pub description: &'static str,
}

impl CatalogEntry {
	const fn identity(code: &'static str, description: &'static str) -> Self {
		Self {
			code,
			domain: ErrorDomain::Identity,
			description,
		}
	}

	const fn consent(code: &'static str, description: &'static str) -> Self {
		Self {
			code,
			domain: ErrorDomain::Consent,
			description,
		}
	}

	/// Owned copy of the entry code.
	pub fn error_code(&self) -> ErrorCodeBuf {
		ErrorCodeBuf::from_raw(self.code.to_owned())
	}
}

/// Errors reported by the identity provider.
pub static IDENTITY_ERRORS: &[CatalogEntry] = &[
	CatalogEntry::identity("ESIA-007002", "Certificate does not match the system mnemonic"),
	CatalogEntry::identity("ESIA-007003", "A required parameter is missing"),
	CatalogEntry::identity("ESIA-007004", "The resource owner denied the request"),
	CatalogEntry::identity(
		"ESIA-007005",
		"The client system is not allowed to obtain a token",
	),
	CatalogEntry::identity("ESIA-007006", "Invalid scope"),
	CatalogEntry::identity("ESIA-007007", "ESIA internal error"),
	CatalogEntry::identity("ESIA-007008", "The service is temporarily unavailable"),
	CatalogEntry::identity("ESIA-007009", "Unsupported token request method"),
	CatalogEntry::identity("ESIA-007011", "The authorization code is invalid"),
	CatalogEntry::identity("ESIA-007012", "Unsupported grant type"),
	CatalogEntry::identity("ESIA-007013", "No scope was specified"),
	CatalogEntry::identity("ESIA-007014", "A required parameter is missing"),
	CatalogEntry::identity("ESIA-007015", "Invalid request timestamp"),
	CatalogEntry::identity("ESIA-007019", "Access permission is missing"),
	CatalogEntry::identity("ESIA-007046", "Two-factor authentication is required"),
	CatalogEntry::identity("ESIA-007053", "Invalid client_secret"),
	CatalogEntry::identity("ESIA-007055", "Sign-in with an unconfirmed account"),
	CatalogEntry::identity("ESIA-008010", "Client system authentication failed"),
];

/// Errors reported by the consent platform.
pub static CONSENT_ERRORS: &[CatalogEntry] = &[
	CatalogEntry::consent("ESIA-036700", "Consent type mnemonic is not specified"),
	CatalogEntry::consent("ESIA-036701", "Consent type not found"),
	CatalogEntry::consent("ESIA-036702", "A required scope is not specified"),
	CatalogEntry::consent("ESIA-036703", "Scopes exceed the permitted set"),
	CatalogEntry::consent("ESIA-036704", "Scopes must not be specified"),
	CatalogEntry::consent("ESIA-036705", "At least one action must be specified"),
	CatalogEntry::consent("ESIA-036706", "The specified action does not exist"),
	CatalogEntry::consent("ESIA-036707", "At least one purpose must be specified"),
	CatalogEntry::consent("ESIA-036716", "Invalid consent expiration time"),
];

/// Marker prefixed to the message of any uncatalogued code.
pub const UNKNOWN_ERROR_MARKER: &str = "Unknown error";

/// Builds the unknown-code message, `"Unknown error: <code>"`.
pub fn unknown_error_message(code: &str) -> String {
	format!("{UNKNOWN_ERROR_MARKER}: {code}")
}

/// Returns the description of `code` in `domain`, or the unknown-code
/// message.
pub fn describe_or_unknown(domain: ErrorDomain, code: &str) -> Cow<'static, str> {
	match domain.describe(code) {
		Some(description) => Cow::Borrowed(description),
		None => Cow::Owned(unknown_error_message(code)),
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use crate::ErrorCode;

	use super::*;

	#[test]
	fn catalog_codes_are_well_formed() {
		for entry in IDENTITY_ERRORS.iter().chain(CONSENT_ERRORS) {
			assert!(ErrorCode::new(entry.code).unwrap().is_esia_code());
			assert!(!entry.description.is_empty());
		}
	}

	#[test]
	fn entries_are_tagged_with_their_domain() {
		assert!(
			IDENTITY_ERRORS
				.iter()
				.all(|e| e.domain == ErrorDomain::Identity)
		);
		assert!(
			CONSENT_ERRORS
				.iter()
				.all(|e| e.domain == ErrorDomain::Consent)
		);
	}

	#[test]
	fn domains_are_disjoint() {
		let identity: HashSet<_> = IDENTITY_ERRORS.iter().map(|e| e.code).collect();
		assert_eq!(identity.len(), IDENTITY_ERRORS.len());
		assert!(CONSENT_ERRORS.iter().all(|e| !identity.contains(e.code)));
	}

	#[test]
	fn describe_known_code() {
		assert_eq!(
			ErrorDomain::Identity.describe("ESIA-007011"),
			Some("The authorization code is invalid")
		);
		assert_eq!(
			ErrorDomain::Consent.describe("ESIA-036701"),
			Some("Consent type not found")
		);
		assert_eq!(ErrorDomain::Consent.describe("ESIA-007011"), None);
	}

	#[test]
	fn unknown_code_message() {
		assert_eq!(
			describe_or_unknown(ErrorDomain::Identity, "invalid_grant"),
			"Unknown error: invalid_grant"
		);
		assert_eq!(
			describe_or_unknown(ErrorDomain::Identity, "ESIA-007006"),
			"Invalid scope"
		);
	}
}
