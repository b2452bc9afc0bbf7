use super::constants::{COORDINATE_LEN, TAG_UNCOMPRESSED, UNCOMPRESSED_PUBLIC_KEY_LEN};
use super::error::{Error, Result};

/// Affine public point with big-endian coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurvePoint {
    x: [u8; COORDINATE_LEN],
    y: [u8; COORDINATE_LEN],
}

impl CurvePoint {
    pub fn new(x: [u8; COORDINATE_LEN], y: [u8; COORDINATE_LEN]) -> Self {
        Self { x, y }
    }

    /// Splits a SEC1 uncompressed encoding (`0x04 || x || y`).
    pub fn from_uncompressed(data: &[u8]) -> Result<Self> {
        if data.len() != UNCOMPRESSED_PUBLIC_KEY_LEN {
            return Err(Error::UnexpectedEncoding(format!(
                "expected {} bytes, got {}",
                UNCOMPRESSED_PUBLIC_KEY_LEN,
                data.len()
            )));
        }
        if data[0] != TAG_UNCOMPRESSED {
            return Err(Error::UnexpectedEncoding(format!(
                "expected tag 0x{:02x}, got 0x{:02x}",
                TAG_UNCOMPRESSED, data[0]
            )));
        }

        let mut x = [0u8; COORDINATE_LEN];
        let mut y = [0u8; COORDINATE_LEN];
        x.copy_from_slice(&data[1..1 + COORDINATE_LEN]);
        y.copy_from_slice(&data[1 + COORDINATE_LEN..]);

        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[u8; COORDINATE_LEN] {
        &self.x
    }

    pub fn y(&self) -> &[u8; COORDINATE_LEN] {
        &self.y
    }

    pub fn y_is_odd(&self) -> bool {
        self.y[COORDINATE_LEN - 1] & 1 == 1
    }

    pub fn serialize_uncompressed(&self) -> [u8; UNCOMPRESSED_PUBLIC_KEY_LEN] {
        let mut result = [0u8; UNCOMPRESSED_PUBLIC_KEY_LEN];
        result[0] = TAG_UNCOMPRESSED;
        result[1..1 + COORDINATE_LEN].copy_from_slice(&self.x);
        result[1 + COORDINATE_LEN..].copy_from_slice(&self.y);
        result
    }
}
