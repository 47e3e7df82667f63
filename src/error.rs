use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

/// Mọi failure trong core đều là validation hoặc environment error —
/// non-retryable. Caller quyết định retry policy (nếu có).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Invalid seed length: expected {expected} bytes, got {actual}")]
    InvalidSeedLength { expected: usize, actual: usize },

    #[error("Derivation index {0} out of range (must fit 31 bits before hardening)")]
    IndexOutOfRange(u32),

    #[error("Unsupported signature scheme flag: {0:#04x}")]
    UnsupportedScheme(u8),

    #[error("Secure RNG unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),
}
