use str_newtype::StrNewType;

/// Error code assigned by the identity provider (borrowed).
///
/// ESIA codes look like `ESIA-007003`, but the token endpoint also reports
/// plain OAuth 2.0 codes such as `invalid_grant`, and HTTP failures are keyed
/// by their status (`400`, `401`, ...). The value is opaque: it is only used
/// as a catalog key and for display.
///
/// Any string is accepted, including the empty string: a provider failure
/// must stay a provider failure whatever it reports as its code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(
	serde,
	owned(ErrorCodeBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash))
)]
pub struct ErrorCode(str);

impl ErrorCode {
	/// Prefix shared by every ESIA-specific error code.
	pub const ESIA_PREFIX: &'static str = "ESIA-";

	/// Number of digits following [`Self::ESIA_PREFIX`].
	pub const ESIA_DIGITS: usize = 6;

	/// Sentinel used when a callback error description carries no code.
	pub const UNKNOWN: &'static str = "UNKNOWN";

	pub const fn validate_str(_s: &str) -> bool {
		true
	}

	pub const fn validate_bytes(_bytes: &[u8]) -> bool {
		true
	}

	/// Checks whether this code has the `ESIA-dddddd` shape.
	pub fn is_esia_code(&self) -> bool {
		let bytes = self.as_str().as_bytes();
		bytes.len() == Self::ESIA_PREFIX.len() + Self::ESIA_DIGITS
			&& bytes.starts_with(Self::ESIA_PREFIX.as_bytes())
			&& bytes[Self::ESIA_PREFIX.len()..]
				.iter()
				.all(u8::is_ascii_digit)
	}
}

impl ErrorCodeBuf {
	/// Wraps a code exactly as the provider reported it.
	pub fn from_raw(code: String) -> Self {
		// SAFETY: every string is a valid error code.
		unsafe { Self::new_unchecked(code) }
	}

	/// Error code built from an HTTP status, e.g. `"401"`.
	pub fn from_status(status: http::StatusCode) -> Self {
		Self::from_raw(status.as_u16().to_string())
	}

	/// The [`ErrorCode::UNKNOWN`] sentinel.
	pub fn unknown() -> Self {
		Self::from_raw(ErrorCode::UNKNOWN.to_owned())
	}
}

#[macro_export]
macro_rules! error_code {
	($value:literal) => {{
		match $crate::ErrorCode::new($value) {
			Ok(value) => value,
			Err(_) => panic!("invalid error code"),
		}
	}};
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn valid_error_code() {
		assert!(ErrorCode::new("ESIA-007003").is_ok());
		assert!(ErrorCode::new("invalid_grant").is_ok());
		assert!(ErrorCode::new("400").is_ok());
		assert!(ErrorCode::new("ошибка").is_ok());
	}

	#[test]
	fn any_reported_code_is_kept() {
		for raw in ["", "\x00", "ESIA-\n007003", "bad\x01code"] {
			assert_eq!(ErrorCodeBuf::from_raw(raw.to_owned()).as_str(), raw);
			assert!(ErrorCode::new(raw).is_ok());
		}
	}

	#[test]
	fn esia_code_shape() {
		assert!(ErrorCode::new("ESIA-007003").unwrap().is_esia_code());
		assert!(!ErrorCode::new("ESIA-00700").unwrap().is_esia_code());
		assert!(!ErrorCode::new("ESIA-0070033").unwrap().is_esia_code());
		assert!(!ErrorCode::new("esia-007003").unwrap().is_esia_code());
		assert!(!ErrorCode::new("invalid_grant").unwrap().is_esia_code());
	}

	#[test]
	fn error_code_from_status() {
		let code = ErrorCodeBuf::from_status(http::StatusCode::FORBIDDEN);
		assert_eq!(code.as_str(), "403");
	}

	#[test]
	fn unknown_sentinel() {
		assert_eq!(ErrorCodeBuf::unknown().as_str(), "UNKNOWN");
	}
}
