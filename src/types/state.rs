use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use rand::{RngExt, rng};
use str_newtype::StrNewType;

use super::is_vschar;

/// Anti-forgery `state` parameter (borrowed).
///
/// Sent with the authorization request and echoed back by ESIA on the
/// redirect, so the client can bind the callback to the request it issued.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-10.12>
///
/// # Grammar
///
/// ```abnf
/// state = 1*VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(serde, owned(StateBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash)))]
pub struct State(str);

impl State {
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

impl StateBuf {
	/// Generates a new random, base64url-encoded 128-bit token.
	pub fn new_random() -> Self {
		let random_bytes: Vec<u8> = (0..16).map(|_| rng().random::<u8>()).collect();
		unsafe { Self::new_unchecked(BASE64_URL_SAFE_NO_PAD.encode(random_bytes)) }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn random_state_is_valid() {
		let state = StateBuf::new_random();
		assert!(State::validate_str(state.as_str()));
		// 16 bytes, base64url without padding.
		assert_eq!(state.as_str().len(), 22);
	}

	#[test]
	fn random_states_differ() {
		assert_ne!(StateBuf::new_random(), StateBuf::new_random());
	}

	#[test]
	fn empty_state_is_invalid() {
		assert!(State::new("").is_err());
	}
}
