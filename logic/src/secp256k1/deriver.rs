use k256::SecretKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;

use super::constants::SECRET_KEY_LEN;
use super::error::Result;

/// Scalar-to-point capability: multiplies the secp256k1 base point by `scalar`.
///
/// Implementations return the SEC1 uncompressed encoding (`0x04 || x || y`) or
/// `Error::InvalidScalar` when the scalar is zero or not below the curve order.
/// Callers validate the returned bytes, so a misbehaving backend surfaces as
/// `Error::UnexpectedEncoding` rather than a wrong key.
pub trait PointDeriver {
    fn derive_uncompressed(&self, scalar: &[u8; SECRET_KEY_LEN]) -> Result<Vec<u8>>;
}

impl<D: PointDeriver + ?Sized> PointDeriver for &D {
    fn derive_uncompressed(&self, scalar: &[u8; SECRET_KEY_LEN]) -> Result<Vec<u8>> {
        (**self).derive_uncompressed(scalar)
    }
}

/// Software backend on top of `k256` (constant-time, precomputed base point tables).
#[derive(Debug, Default, Clone, Copy)]
pub struct K256Deriver;

impl PointDeriver for K256Deriver {
    fn derive_uncompressed(&self, scalar: &[u8; SECRET_KEY_LEN]) -> Result<Vec<u8>> {
        // Rejects 0 and anything >= n
        let secret_key = SecretKey::from_bytes(scalar.into())?;
        let public_key = secret_key.public_key();

        Ok(public_key.to_encoded_point(false).as_bytes().to_vec())
    }
}
