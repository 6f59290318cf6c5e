//! Hash input handling.
//!
//! Icons are derived from a string of hexadecimal digits. [`HexHash`] wraps
//! such a string after validation and exposes the two accessors the
//! generator needs: individual digit values ("octets") and the hue derived
//! from the trailing digits.

use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha256};

use crate::error::IconError;

/// Number of trailing hex digits that drive the hue.
const HUE_DIGITS: usize = 7;

/// Largest value representable by [`HUE_DIGITS`] hex digits.
const HUE_MAX: u32 = 0xfffffff;

/// Minimum accepted hash length.
///
/// The shape category table reads octets up to index 10, and the hue is
/// derived from the last 7 digits; 11 digits satisfy both.
pub const MIN_HASH_LENGTH: usize = 11;

/// A validated hexadecimal hash string.
///
/// The wrapped string is lowercased on construction and guaranteed to
/// contain only hex digits, with at least [`MIN_HASH_LENGTH`] of them.
/// Instances are immutable; one hash produces one icon.
///
/// # Example
///
/// ```
/// use hashicon::HexHash;
///
/// // From arbitrary input data
/// let hash = HexHash::digest("user@example.com");
/// assert_eq!(hash.as_str().len(), 64);
///
/// // From an existing hex string
/// let hash: HexHash = "029d8a651e50f39a4f48400ed9a6b397".parse().unwrap();
/// assert_eq!(hash.octet(0), 0x0);
/// assert_eq!(hash.octet(2), 0x9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexHash {
    hex: String,
}

impl HexHash {
    /// Creates a hash from a hex string.
    ///
    /// The string is lowercased; uppercase input is accepted. Fails if the
    /// string contains non-hex characters or has fewer than
    /// [`MIN_HASH_LENGTH`] digits.
    pub fn new(hex: impl Into<String>) -> Result<Self, IconError> {
        let hex = hex.into().to_ascii_lowercase();

        if hex.len() < MIN_HASH_LENGTH {
            return Err(IconError::invalid_hash(format!(
                "expected at least {MIN_HASH_LENGTH} hex digits, got {}",
                hex.len()
            )));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(IconError::invalid_hash(
                "hash contains non-hexadecimal characters",
            ));
        }

        Ok(Self { hex })
    }

    /// Creates a hash by digesting arbitrary input data with SHA-256.
    ///
    /// This is the usual entry point when the icon source is a user-visible
    /// value (a name, an email address) rather than a precomputed hash.
    pub fn digest(value: impl AsRef<[u8]>) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(value.as_ref());
        Self {
            hex: hex::encode(hasher.finalize()),
        }
    }

    /// Returns the hash as a lowercase hex string.
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Returns the number of hex digits in the hash.
    pub fn len(&self) -> usize {
        self.hex.len()
    }

    /// Returns false; a valid hash is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the value of the hex digit at `index`, in `0..=15`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the hash. Indices used by the built-in
    /// category table (up to 10) are always valid.
    pub fn octet(&self, index: usize) -> u8 {
        match self.hex.as_bytes()[index] {
            b @ b'0'..=b'9' => b - b'0',
            b => b - b'a' + 10,
        }
    }

    /// Derives the icon hue from the last 7 hex digits.
    ///
    /// The digits are read as a 28-bit unsigned integer and scaled into
    /// `[0, 1]`. All other digits are ignored, so hashes differing only in
    /// their leading digits share a hue.
    pub fn hue(&self) -> f64 {
        let tail = &self.hex.as_bytes()[self.hex.len() - HUE_DIGITS..];
        let value = tail.iter().fold(0u32, |acc, &b| {
            let digit = match b {
                b'0'..=b'9' => b - b'0',
                _ => b - b'a' + 10,
            };
            (acc << 4) | u32::from(digit)
        });
        f64::from(value) / f64::from(HUE_MAX)
    }
}

impl FromStr for HexHash {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for HexHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}
