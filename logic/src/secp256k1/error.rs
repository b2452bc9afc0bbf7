use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Private key string is not 64 hex characters.
    #[error("invalid private key format: {0}")]
    Format(#[from] hex::FromHexError),

    /// Scalar is zero or not below the curve order.
    #[error("private key scalar is outside [1, n-1]")]
    InvalidScalar,

    /// The curve backend handed back something that is not a SEC1 uncompressed point.
    #[error("unexpected point encoding from curve backend: {0}")]
    UnexpectedEncoding(String),
}

impl From<k256::elliptic_curve::Error> for Error {
    fn from(_: k256::elliptic_curve::Error) -> Self {
        Error::InvalidScalar
    }
}
