use core::fmt;

use super::constants::{
    COMPRESSED_PUBLIC_KEY_LEN, COORDINATE_LEN, TAG_EVEN_Y, TAG_ODD_Y, UNCOMPRESSED_PUBLIC_KEY_LEN,
};
use super::point::CurvePoint;

/// 33-byte SEC1 compressed public key: parity tag followed by big-endian x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompressedPublicKey {
    data: [u8; COMPRESSED_PUBLIC_KEY_LEN],
}

impl CompressedPublicKey {
    pub fn as_bytes(&self) -> &[u8; COMPRESSED_PUBLIC_KEY_LEN] {
        &self.data
    }

    pub fn prefix(&self) -> u8 {
        self.data[0]
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.data)
    }
}

impl fmt::Display for CompressedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// 65-byte SEC1 uncompressed public key (`0x04 || x || y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UncompressedPublicKey {
    data: [u8; UNCOMPRESSED_PUBLIC_KEY_LEN],
}

impl UncompressedPublicKey {
    pub fn as_bytes(&self) -> &[u8; UNCOMPRESSED_PUBLIC_KEY_LEN] {
        &self.data
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.data)
    }
}

impl From<&CurvePoint> for UncompressedPublicKey {
    fn from(point: &CurvePoint) -> Self {
        Self { data: point.serialize_uncompressed() }
    }
}

impl fmt::Display for UncompressedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Compresses a point: tag 0x02 for even y, 0x03 for odd y, then x.
pub fn compress(point: &CurvePoint) -> CompressedPublicKey {
    let mut data = [0u8; COMPRESSED_PUBLIC_KEY_LEN];
    data[0] = if point.y_is_odd() { TAG_ODD_Y } else { TAG_EVEN_Y };
    data[1..1 + COORDINATE_LEN].copy_from_slice(point.x());
    CompressedPublicKey { data }
}
