//! Short token generation and format checks.
//!
//! Tokens are six lowercase base-36 characters drawn independently from a
//! [`RandomSource`]. There is no registry, so collisions are possible.

use crate::domain::random_source::RandomSource;

/// Number of characters in a short token.
pub const TOKEN_LENGTH: usize = 6;

/// Base-36 digit alphabet, in digit order.
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a short token from the given random source.
///
/// # Examples
///
/// ```ignore
/// let token = generate_token(&ThreadRandomSource);
/// assert_eq!(token.len(), 6);
/// assert!(is_valid_token(&token));
/// ```
pub fn generate_token<R: RandomSource + ?Sized>(random: &R) -> String {
    (0..TOKEN_LENGTH)
        .map(|_| {
            let digit = random.next_below(ALPHABET.len() as u32) as usize;
            // Guard against sources that ignore the bound.
            ALPHABET[digit % ALPHABET.len()] as char
        })
        .collect()
}

/// Returns true if `token` is exactly six characters of `[0-9a-z]`.
pub fn is_valid_token(token: &str) -> bool {
    token.len() == TOKEN_LENGTH
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
}
