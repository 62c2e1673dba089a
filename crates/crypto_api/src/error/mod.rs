//! strongrand Crypto API CryptoError module

/// Failures surfaced by random byte sources and the range sampler.
/// None of these are recovered internally.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CryptoError {
    /// misuse of a buffer, bad configuration input
    Generic(String),
    /// a range bound that leaves no usable bits (`max <= 1`)
    InvalidBound(u64),
    /// the random byte source could not be acquired or could not produce bytes
    SourceUnavailable(String),
    /// two consecutive wide candidates were identical
    SelfTestFailure,
    OutOfMemory,
}

impl CryptoError {
    pub fn new(msg: &str) -> Self {
        CryptoError::Generic(msg.to_string())
    }

    pub fn source_unavailable(msg: &str) -> Self {
        CryptoError::SourceUnavailable(msg.to_string())
    }
}

pub type CryptoResult<T> = Result<T, CryptoError>;

impl std::error::Error for CryptoError {
    fn description(&self) -> &str {
        "CryptoError"
    }
}

impl std::fmt::Display for CryptoError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CryptoError::InvalidBound(max) => {
                write!(f, "range bound must be greater than 1, got {}", max)
            }
            CryptoError::SourceUnavailable(msg) => {
                write!(f, "random source unavailable: {}", msg)
            }
            CryptoError::SelfTestFailure => {
                write!(f, "continuous random number generator test failed")
            }
            _ => write!(f, "{:?}", self),
        }
    }
}
