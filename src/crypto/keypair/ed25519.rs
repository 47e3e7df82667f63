// sui-wallet-core/src/crypto/keypair/ed25519.rs
//
// Ed25519 Keypair - RFC 8032 deterministic signing
// Public key là pure function của seed; address là pure function của public key.

use ed25519_dalek::{Signer as _, SigningKey};
use zeroize::Zeroizing;

use crate::crypto::key_deriver::Ed25519Deriver;
use crate::crypto::mnemonic;
use crate::crypto::paths::DerivationPaths;
use crate::crypto::publickey::Ed25519PublicKey;
use crate::crypto::scheme::SignatureScheme;
use crate::error::{WalletError, WalletResult};

/// Ed25519 seed size (bytes)
pub const ED25519_SEED_SIZE: usize = 32;
/// 64-byte private key encoding: seed (32) || public key (32)
pub const ED25519_PRIVATE_KEY_SIZE: usize = 64;

/// Ed25519 Keypair
///
/// # Security
/// - Seed auto-zeroize on drop (single owner của key material)
/// - Custom Debug không hiển thị seed
/// - Signing deterministic (RFC 8032) — không per-call randomness
pub struct Ed25519Keypair {
    seed: Zeroizing<[u8; ED25519_SEED_SIZE]>,
    signing_key: SigningKey,
}

// Custom Debug - KHÔNG BAO GIỜ hiển thị seed
impl std::fmt::Debug for Ed25519Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519Keypair")
            .field("public_key", &self.get_public_key().to_base64())
            .finish_non_exhaustive()
    }
}

// Equality theo seed — scheme là một phần identity qua type
impl PartialEq for Ed25519Keypair {
    fn eq(&self, other: &Self) -> bool {
        *self.seed == *other.seed
    }
}

impl Eq for Ed25519Keypair {}

impl Ed25519Keypair {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Fresh keypair từ 32 random bytes (OS CSPRNG).
    ///
    /// Fail duy nhất khi platform RNG unavailable — không retry nội bộ.
    pub fn generate() -> WalletResult<Self> {
        use rand::{rngs::OsRng, RngCore};

        let mut seed = Zeroizing::new([0u8; ED25519_SEED_SIZE]);
        OsRng
            .try_fill_bytes(seed.as_mut())
            .map_err(|e| WalletError::EntropyUnavailable(e.to_string()))?;
        Self::from_seed(&*seed)
    }

    /// Deterministic keypair từ 32-byte seed.
    pub fn from_seed(seed: &[u8]) -> WalletResult<Self> {
        let seed: [u8; ED25519_SEED_SIZE] = seed.try_into().map_err(|_| {
            WalletError::InvalidSeedLength {
                expected: ED25519_SEED_SIZE,
                actual: seed.len(),
            }
        })?;

        let signing_key = SigningKey::from_bytes(&seed);
        Ok(Self {
            seed: Zeroizing::new(seed),
            signing_key,
        })
    }

    /// Keypair từ 64-byte private key encoding (seed || public key).
    ///
    /// # Warning
    /// 32 bytes cuối (conventionally public key) bị bỏ qua KHÔNG kiểm tra —
    /// intentional để interop với các 64-byte encoding bên ngoài, nhưng
    /// nghĩa là input với public-key half sai vẫn được chấp nhận.
    pub fn from_private_key(private_key: &[u8]) -> WalletResult<Self> {
        if private_key.len() != ED25519_PRIVATE_KEY_SIZE {
            return Err(WalletError::InvalidSeedLength {
                expected: ED25519_PRIVATE_KEY_SIZE,
                actual: private_key.len(),
            });
        }
        Self::from_seed(&private_key[..ED25519_SEED_SIZE])
    }

    /// Derive keypair từ mnemonic theo path `m/44'/784'/0'/{change}'/{index}'`.
    ///
    /// Mọi level đều hardened by construction — không tồn tại code path nào
    /// tạo ra non-hardened ed25519 child.
    pub fn derive_keypair(
        mnemonic: &str,
        change_index: u32,
        address_index: u32,
        passphrase: &str,
    ) -> WalletResult<Self> {
        let path = DerivationPaths::ed25519(change_index, address_index)?;
        let seed = mnemonic::seed_from_phrase(mnemonic, passphrase)?;
        let derived = Ed25519Deriver::derive(&*seed, &path)?;
        Self::from_seed(&*derived)
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Public key của keypair — deterministic, side-effect-free.
    pub fn get_public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey::new(self.signing_key.verifying_key().as_bytes())
            .expect("verifying key is always 32 bytes")
    }

    /// Sign `data`, trả về 64-byte RFC 8032 signature.
    pub fn sign_data(&self, data: &[u8]) -> Vec<u8> {
        self.signing_key.sign(data).to_bytes().to_vec()
    }

    /// Scheme tag — luôn [`SignatureScheme::Ed25519`].
    #[inline]
    pub fn get_key_scheme(&self) -> SignatureScheme {
        SignatureScheme::Ed25519
    }

    /// Export 64-byte private key encoding (seed || public key).
    ///
    /// Round-trips qua [`from_private_key`](Self::from_private_key).
    pub fn to_private_key(&self) -> Zeroizing<Vec<u8>> {
        let mut out = Vec::with_capacity(ED25519_PRIVATE_KEY_SIZE);
        out.extend_from_slice(&*self.seed);
        out.extend_from_slice(self.signing_key.verifying_key().as_bytes());
        Zeroizing::new(out)
    }
}

// =============================================================================
// TESTS
// =============================================================================
