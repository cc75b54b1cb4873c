use str_newtype::StrNewType;

use super::is_vschar;

/// Access token issued by the token endpoint (borrowed).
///
/// # Grammar
///
/// ```abnf
/// access_token = 1*VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(
	serde,
	owned(AccessTokenBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash))
)]
pub struct AccessToken(str);

impl AccessToken {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		let mut i = 0;

		while i < bytes.len() {
			if !is_vschar(bytes[i]) {
				return false;
			}

			i += 1
		}

		i > 0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_access_token_is_invalid() {
		assert!(AccessToken::new("").is_err());
	}

	#[test]
	fn access_token_rejects_non_vschar() {
		assert!(AccessToken::new("abc\n").is_err());
		assert!(AccessToken::new("2YotnFZFEjr1zCsicMWpAA").is_ok());
	}
}
