// sui-wallet-core/src/crypto/keypair/mod.rs
//
// Keypair Abstraction - closed tagged union over {Ed25519, Secp256k1}
//
// Scheme polymorphism qua enum + pattern match (không runtime type
// inspection). Scheme là một phần identity: hai keypair cùng seed bytes
// nhưng khác scheme KHÔNG bao giờ interchangeable.

pub mod ed25519;
pub mod secp256k1;

// Re-exports
pub use ed25519::Ed25519Keypair;
pub use secp256k1::Secp256k1Keypair;

use crate::crypto::publickey::SuiPublicKey;
use crate::crypto::scheme::SignatureScheme;
use crate::error::WalletResult;

/// Scheme-polymorphic keypair.
///
/// Immutable sau khi construct; thread-safe by construction (no shared
/// mutable state) — có thể share read-only giữa các concurrent caller.
#[derive(Debug, PartialEq, Eq)]
pub enum SuiKeypair {
    Ed25519(Ed25519Keypair),
    Secp256k1(Secp256k1Keypair),
}

impl SuiKeypair {
    /// Fresh keypair cho scheme được chọn (OS CSPRNG).
    pub fn generate(scheme: SignatureScheme) -> WalletResult<Self> {
        match scheme {
            SignatureScheme::Ed25519 => Ok(Self::Ed25519(Ed25519Keypair::generate()?)),
            SignatureScheme::Secp256k1 => Ok(Self::Secp256k1(Secp256k1Keypair::generate()?)),
        }
    }

    /// Deterministic keypair từ 32-byte seed cho scheme được chọn.
    pub fn from_seed(scheme: SignatureScheme, seed: &[u8]) -> WalletResult<Self> {
        match scheme {
            SignatureScheme::Ed25519 => Ok(Self::Ed25519(Ed25519Keypair::from_seed(seed)?)),
            SignatureScheme::Secp256k1 => {
                Ok(Self::Secp256k1(Secp256k1Keypair::from_seed(seed)?))
            }
        }
    }

    /// Keypair từ raw private key encoding (64 bytes ed25519, 32 bytes secp256k1).
    pub fn from_private_key(scheme: SignatureScheme, private_key: &[u8]) -> WalletResult<Self> {
        match scheme {
            SignatureScheme::Ed25519 => {
                Ok(Self::Ed25519(Ed25519Keypair::from_private_key(private_key)?))
            }
            SignatureScheme::Secp256k1 => Ok(Self::Secp256k1(Secp256k1Keypair::from_private_key(
                private_key,
            )?)),
        }
    }

    /// Public key của keypair.
    pub fn get_public_key(&self) -> SuiPublicKey {
        match self {
            SuiKeypair::Ed25519(kp) => SuiPublicKey::Ed25519(kp.get_public_key()),
            SuiKeypair::Secp256k1(kp) => SuiPublicKey::Secp256k1(kp.get_public_key()),
        }
    }

    /// Sign `data` — 64-byte signature cho cả hai scheme.
    pub fn sign_data(&self, data: &[u8]) -> WalletResult<Vec<u8>> {
        match self {
            SuiKeypair::Ed25519(kp) => Ok(kp.sign_data(data)),
            SuiKeypair::Secp256k1(kp) => kp.sign_data(data),
        }
    }

    /// Scheme tag của keypair — không có default fall-through.
    pub fn get_key_scheme(&self) -> SignatureScheme {
        match self {
            SuiKeypair::Ed25519(kp) => kp.get_key_scheme(),
            SuiKeypair::Secp256k1(kp) => kp.get_key_scheme(),
        }
    }

    /// Canonical Sui address của keypair (shortcut qua public key).
    pub fn to_sui_address(&self) -> String {
        self.get_public_key().to_sui_address()
    }
}

impl From<Ed25519Keypair> for SuiKeypair {
    fn from(kp: Ed25519Keypair) -> Self {
        SuiKeypair::Ed25519(kp)
    }
}

impl From<Secp256k1Keypair> for SuiKeypair {
    fn from(kp: Secp256k1Keypair) -> Self {
        SuiKeypair::Secp256k1(kp)
    }
}

// =============================================================================
// TESTS
// =============================================================================
