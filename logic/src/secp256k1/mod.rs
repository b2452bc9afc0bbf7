pub mod constants;
pub mod deriver;
pub mod error;
pub mod point;
pub mod public_key;
pub mod secret_key;

pub use deriver::{K256Deriver, PointDeriver};
pub use error::{Error, Result};
pub use point::CurvePoint;
pub use public_key::{compress, CompressedPublicKey, UncompressedPublicKey};
pub use secret_key::{generate_private_key, generate_private_key_with, parse_scalar, PrivateKey};

use zeroize::Zeroizing;

use constants::SECRET_KEY_LEN;

/// Multiplies the base point by `scalar` through `deriver` and parses the result.
pub fn derive_public_point<D>(deriver: &D, scalar: &[u8; SECRET_KEY_LEN]) -> Result<CurvePoint>
where
    D: PointDeriver + ?Sized,
{
    let encoded = deriver.derive_uncompressed(scalar)?;
    CurvePoint::from_uncompressed(&encoded)
}

/// Derives the 66-hex-char compressed public key for a 64-hex-char private key.
pub fn bitcoin_public_key(private_key: &str) -> Result<String> {
    bitcoin_public_key_with(&K256Deriver, private_key)
}

pub fn bitcoin_public_key_with<D>(deriver: &D, private_key: &str) -> Result<String>
where
    D: PointDeriver + ?Sized,
{
    let scalar = Zeroizing::new(parse_scalar(private_key)?);
    let point = derive_public_point(deriver, &scalar)?;
    Ok(compress(&point).to_hex())
}

/// Derives the 130-hex-char uncompressed public key for a 64-hex-char private key.
pub fn bitcoin_public_key_uncompressed(private_key: &str) -> Result<String> {
    let scalar = Zeroizing::new(parse_scalar(private_key)?);
    let point = derive_public_point(&K256Deriver, &scalar)?;
    Ok(UncompressedPublicKey::from(&point).to_hex())
}

impl PrivateKey {
    pub fn public_key(&self) -> Result<CompressedPublicKey> {
        let point = derive_public_point(&K256Deriver, self.as_bytes())?;
        Ok(compress(&point))
    }
}
