use str_newtype::StrNewType;

use super::is_vschar;

/// Authorization code returned to the redirect URI (borrowed).
///
/// The code is single-use; it is exchanged for an access token at the token
/// endpoint (see [`exchange_code`](crate::endpoints::token::exchange_code)).
///
/// # Grammar
///
/// ```abnf
/// code = 1*VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(serde, owned(CodeBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash)))]
pub struct Code(str);

impl Code {
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

#[macro_export]
macro_rules! code {
	($value:literal) => {{
		match $crate::Code::new($value) {
			Ok(value) => value,
			Err(_) => panic!("invalid code"),
		}
	}};
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn valid_code() {
		assert!(Code::new("valid_auth_code").is_ok());
		assert!(Code::new("eyJ2ZXIiOjEsInR5cCI6IkpXVCJ9").is_ok());
	}

	#[test]
	fn empty_code_is_invalid() {
		assert!(Code::new("").is_err());
		assert!(CodeBuf::new(String::new()).is_err());
	}

	#[test]
	fn code_rejects_control_chars() {
		assert!(Code::new("\x00").is_err());
		assert!(Code::new("abc\ndef").is_err());
	}
}
