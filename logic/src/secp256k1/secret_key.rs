use core::fmt;

use hex::FromHex;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::constants::{CURVE_ORDER, SECRET_KEY_LEN};
use super::error::{Error, Result};

/// secp256k1 private key, a scalar in [1, n-1].
///
/// The scalar is wiped when the key is dropped and never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    data: [u8; SECRET_KEY_LEN],
}

impl PrivateKey {
    pub fn from_bytes(data: [u8; SECRET_KEY_LEN]) -> Result<Self> {
        if is_zero(&data) || is_ge_curve_order(&data) {
            return Err(Error::InvalidScalar);
        }

        Ok(Self { data })
    }

    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let data = Zeroizing::new(parse_scalar(hex_str)?);
        Self::from_bytes(*data)
    }

    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_LEN] {
        &self.data
    }

    /// Canonical form: 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.data)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}

/// Parses 64 hex characters (either case) into a big-endian scalar without range checking.
pub fn parse_scalar(hex_str: &str) -> Result<[u8; SECRET_KEY_LEN]> {
    Ok(<[u8; SECRET_KEY_LEN]>::from_hex(hex_str)?)
}

/// Draws a fresh private key from the operating system CSPRNG.
pub fn generate_private_key() -> PrivateKey {
    generate_private_key_with(&mut OsRng)
}

/// Rejection-samples 32-byte draws from `rng` until one lands in [1, n-1].
///
/// n is within 2^128 of 2^256, so the first draw is accepted for all practical purposes.
pub fn generate_private_key_with<R>(rng: &mut R) -> PrivateKey
where
    R: RngCore + CryptoRng + ?Sized,
{
    loop {
        let mut candidate = Zeroizing::new([0u8; SECRET_KEY_LEN]);
        rng.fill_bytes(&mut *candidate);

        if let Ok(private_key) = PrivateKey::from_bytes(*candidate) {
            return private_key;
        }
    }
}

fn is_zero(data: &[u8; SECRET_KEY_LEN]) -> bool {
    data.iter().all(|&b| b == 0)
}

// Fixed-size arrays compare lexicographically, which is numeric order for big-endian bytes.
fn is_ge_curve_order(data: &[u8; SECRET_KEY_LEN]) -> bool {
    *data >= CURVE_ORDER
}
