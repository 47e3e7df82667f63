// sui-wallet-core/src/crypto/publickey.rs
//
// Public Key Abstraction - Scheme-Polymorphic
// Canonical bytes (32B ed25519 / 33B compressed secp256k1), base64, Sui address

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};

use crate::crypto::address::sui_address;
use crate::crypto::scheme::SignatureScheme;
use crate::error::{WalletError, WalletResult};

/// Ed25519 public key size (bytes)
pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;
/// secp256k1 compressed (SEC1) public key size (bytes)
pub const SECP256K1_PUBLIC_KEY_SIZE: usize = 33;

// =============================================================================
// ED25519
// =============================================================================

/// Ed25519 public key — immutable sau khi construct, equality theo canonical bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ed25519PublicKey {
    public_key: [u8; ED25519_PUBLIC_KEY_SIZE],
}

impl Ed25519PublicKey {
    /// Construct từ raw bytes. Chỉ validate độ dài — point validity được
    /// check khi verify (một public key không nằm trên curve sẽ không
    /// verify được bất kỳ signature nào).
    pub fn new(public_key: &[u8]) -> WalletResult<Self> {
        let bytes: [u8; ED25519_PUBLIC_KEY_SIZE] = public_key.try_into().map_err(|_| {
            WalletError::InvalidKeyFormat(format!(
                "Ed25519 public key must be {} bytes, got {}",
                ED25519_PUBLIC_KEY_SIZE,
                public_key.len()
            ))
        })?;
        Ok(Self { public_key: bytes })
    }

    /// Fixed-width raw public key — không có alternate encoding.
    #[inline]
    pub fn to_canonical_bytes(&self) -> &[u8; ED25519_PUBLIC_KEY_SIZE] {
        &self.public_key
    }

    /// Standard base64 (padded) của canonical bytes.
    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(self.public_key)
    }

    /// Canonical Sui address: `SHA3-256(0x00 || pub_key)[..20]` hex lowercase.
    pub fn to_sui_address(&self) -> String {
        sui_address(SignatureScheme::Ed25519, &self.public_key)
    }

    /// Verify một Ed25519 signature (64 bytes) trên `data`.
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        use ed25519_dalek::{Signature, Verifier, VerifyingKey};

        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.public_key) else {
            return false;
        };
        let Ok(signature) = Signature::from_slice(signature) else {
            return false;
        };
        verifying_key.verify(data, &signature).is_ok()
    }
}

// =============================================================================
// SECP256K1
// =============================================================================

/// secp256k1 public key (SEC1 compressed) — immutable, equality theo bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secp256k1PublicKey {
    public_key: [u8; SECP256K1_PUBLIC_KEY_SIZE],
}

impl Secp256k1PublicKey {
    /// Construct từ raw compressed bytes (33 bytes, prefix 0x02/0x03).
    pub fn new(public_key: &[u8]) -> WalletResult<Self> {
        let bytes: [u8; SECP256K1_PUBLIC_KEY_SIZE] = public_key.try_into().map_err(|_| {
            WalletError::InvalidKeyFormat(format!(
                "secp256k1 public key must be {} bytes (SEC1 compressed), got {}",
                SECP256K1_PUBLIC_KEY_SIZE,
                public_key.len()
            ))
        })?;
        Ok(Self { public_key: bytes })
    }

    /// Fixed-width compressed public key — không compression negotiation.
    #[inline]
    pub fn to_canonical_bytes(&self) -> &[u8; SECP256K1_PUBLIC_KEY_SIZE] {
        &self.public_key
    }

    /// Standard base64 (padded) của canonical bytes.
    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(self.public_key)
    }

    /// Canonical Sui address: `SHA3-256(0x01 || pub_key)[..20]` hex lowercase.
    pub fn to_sui_address(&self) -> String {
        sui_address(SignatureScheme::Secp256k1, &self.public_key)
    }

    /// Verify một ECDSA signature (64 bytes `r || s`) trên SHA-256 digest của `data`.
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        use k256::ecdsa::{signature::Verifier, Signature, VerifyingKey};

        let Ok(verifying_key) = VerifyingKey::from_sec1_bytes(&self.public_key) else {
            return false;
        };
        let Ok(signature) = Signature::from_slice(signature) else {
            return false;
        };
        verifying_key.verify(data, &signature).is_ok()
    }
}

// =============================================================================
// UNIFIED PUBLIC KEY
// =============================================================================

/// Scheme-polymorphic public key — closed tagged union, dispatch bằng match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuiPublicKey {
    Ed25519(Ed25519PublicKey),
    Secp256k1(Secp256k1PublicKey),
}

impl SuiPublicKey {
    /// Construct từ (scheme, raw bytes) — validate độ dài theo scheme.
    pub fn new(scheme: SignatureScheme, public_key: &[u8]) -> WalletResult<Self> {
        match scheme {
            SignatureScheme::Ed25519 => Ok(Self::Ed25519(Ed25519PublicKey::new(public_key)?)),
            SignatureScheme::Secp256k1 => {
                Ok(Self::Secp256k1(Secp256k1PublicKey::new(public_key)?))
            }
        }
    }

    /// Scheme tag của key này.
    #[inline]
    pub fn scheme(&self) -> SignatureScheme {
        match self {
            SuiPublicKey::Ed25519(_) => SignatureScheme::Ed25519,
            SuiPublicKey::Secp256k1(_) => SignatureScheme::Secp256k1,
        }
    }

    /// Fixed-width raw public key bytes (32 hoặc 33 bytes).
    pub fn to_canonical_bytes(&self) -> &[u8] {
        match self {
            SuiPublicKey::Ed25519(pk) => pk.to_canonical_bytes(),
            SuiPublicKey::Secp256k1(pk) => pk.to_canonical_bytes(),
        }
    }

    pub fn to_base64(&self) -> String {
        match self {
            SuiPublicKey::Ed25519(pk) => pk.to_base64(),
            SuiPublicKey::Secp256k1(pk) => pk.to_base64(),
        }
    }

    pub fn to_sui_address(&self) -> String {
        match self {
            SuiPublicKey::Ed25519(pk) => pk.to_sui_address(),
            SuiPublicKey::Secp256k1(pk) => pk.to_sui_address(),
        }
    }

    pub fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        match self {
            SuiPublicKey::Ed25519(pk) => pk.verify(data, signature),
            SuiPublicKey::Secp256k1(pk) => pk.verify(data, signature),
        }
    }
}

impl From<Ed25519PublicKey> for SuiPublicKey {
    fn from(pk: Ed25519PublicKey) -> Self {
        SuiPublicKey::Ed25519(pk)
    }
}

impl From<Secp256k1PublicKey> for SuiPublicKey {
    fn from(pk: Secp256k1PublicKey) -> Self {
        SuiPublicKey::Secp256k1(pk)
    }
}

// =============================================================================
// TESTS
// =============================================================================
