use str_newtype::StrNewType;

use super::is_vschar;

/// Mnemonic of an information system registered in ESIA (borrowed).
///
/// ESIA identifies client systems by a mnemonic assigned at registration.
/// It is sent as `client_id` to both the authorization and the token
/// endpoint.
///
/// # Grammar
///
/// ```abnf
/// client_id = 1*VSCHAR
/// ```
///
/// Unlike the generic OAuth 2.0 grammar, an empty mnemonic is rejected.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(
	serde,
	owned(ClientIdBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash))
)]
pub struct ClientId(str);

impl ClientId {
	/// Validates that the given string is a well-formed mnemonic.
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	/// Validates that the given byte slice is a well-formed mnemonic.
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
macro_rules! client_id {
	($value:literal) => {{
		match $crate::ClientId::new($value) {
			Ok(value) => value,
			Err(_) => panic!("invalid client identifier"),
		}
	}};
}
