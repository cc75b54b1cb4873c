use str_newtype::StrNewType;

use super::is_nqchar;

/// Space-separated list of requested permissions (borrowed).
///
/// ESIA scopes are plain tokens (`openid`, `fullname`, `snils`, ...).
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-3.3>
///
/// # Grammar
///
/// ```abnf
/// scope       = scope-token *( SP scope-token )
/// scope-token = 1*NQCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(serde, owned(ScopeBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash)))]
pub struct Scope(str);

impl Scope {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		let mut i = 0;
		let mut token_empty = true;

		while i < bytes.len() {
			match bytes[i] {
				b' ' if token_empty => return false,
				b' ' => token_empty = true,
				c if is_nqchar(c) => token_empty = false,
				_ => return false,
			}

			i += 1;
		}

		!token_empty
	}

	/// Iterates over the scope tokens.
	pub fn tokens(&self) -> impl Iterator<Item = &str> {
		self.as_str().split(' ')
	}

	/// Returns `true` if this scope contains the given token.
	pub fn contains(&self, token: &str) -> bool {
		self.tokens().any(|t| t == token)
	}
}

impl ScopeBuf {
	/// Scope requested by default: OpenID Connect identity and profile.
	pub fn openid_profile() -> Self {
		// SAFETY: literal is a valid scope.
		unsafe { Self::new_unchecked("openid profile".to_owned()) }
	}
}

#[macro_export]
macro_rules! scope {
	($value:literal) => {{
		match $crate::Scope::new($value) {
			Ok(value) => value,
			Err(_) => panic!("invalid scope"),
		}
	}};
}
