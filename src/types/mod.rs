//! Core ESIA protocol types.
//!
//! String types exchanged with the identity provider, each validated against
//! a small grammar. All types come in borrowed/owned pairs (e.g.
//! [`AccessToken`] / [`AccessTokenBuf`]) following the same pattern as
//! [`str`] / [`String`].
mod access_token;
mod client_id;
mod code;
mod error_code;
mod scope;
mod state;

pub use access_token::*;
pub use client_id::*;
pub use code::*;
pub use error_code::*;
pub use scope::*;
pub use state::*;

/// Returns `true` if the byte is a VSCHAR (visible ASCII character plus
/// space), i.e. in the range `0x20..=0x7E`.
const fn is_vschar(c: u8) -> bool {
	c >= 0x20 && c <= 0x7e
}

/// Returns `true` if the byte is an NQCHAR (VSCHAR without `"` and `\`).
const fn is_nqchar(c: u8) -> bool {
	c == 0x21 || (c >= 0x23 && c <= 0x5b) || (c >= 0x5d && c <= 0x7e)
}
