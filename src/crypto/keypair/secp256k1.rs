// sui-wallet-core/src/crypto/keypair/secp256k1.rs
//
// secp256k1 Keypair - deterministic ECDSA (RFC 6979) over SHA-256
// Public key serialize dạng SEC1 compressed (33 bytes).

use k256::ecdsa::{signature::Signer as _, Signature, SigningKey};
use zeroize::Zeroizing;

use crate::crypto::key_deriver::Secp256k1Deriver;
use crate::crypto::mnemonic;
use crate::crypto::paths::DerivationPaths;
use crate::crypto::publickey::Secp256k1PublicKey;
use crate::crypto::scheme::SignatureScheme;
use crate::error::{WalletError, WalletResult};

/// secp256k1 private scalar size (bytes)
pub const SECP256K1_SEED_SIZE: usize = 32;

/// secp256k1 Keypair
///
/// # Security
/// - Seed auto-zeroize on drop (single owner của key material)
/// - Custom Debug không hiển thị scalar
/// - Signing deterministic (RFC 6979) — không per-call randomness
pub struct Secp256k1Keypair {
    seed: Zeroizing<[u8; SECP256K1_SEED_SIZE]>,
    signing_key: SigningKey,
}

// Custom Debug - KHÔNG BAO GIỜ hiển thị private scalar
impl std::fmt::Debug for Secp256k1Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secp256k1Keypair")
            .field("public_key", &self.get_public_key().to_base64())
            .finish_non_exhaustive()
    }
}

// Equality theo seed — scheme là một phần identity qua type
impl PartialEq for Secp256k1Keypair {
    fn eq(&self, other: &Self) -> bool {
        *self.seed == *other.seed
    }
}

impl Eq for Secp256k1Keypair {}

impl Secp256k1Keypair {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Fresh keypair từ 32 random bytes (OS CSPRNG).
    ///
    /// Fail khi platform RNG unavailable (`EntropyUnavailable`) hoặc — với
    /// xác suất không đáng kể — khi random bytes không phải scalar hợp lệ.
    pub fn generate() -> WalletResult<Self> {
        use rand::{rngs::OsRng, RngCore};

        let mut seed = Zeroizing::new([0u8; SECP256K1_SEED_SIZE]);
        OsRng
            .try_fill_bytes(seed.as_mut())
            .map_err(|e| WalletError::EntropyUnavailable(e.to_string()))?;
        Self::from_seed(&*seed)
    }

    /// Deterministic keypair từ 32-byte seed (private scalar).
    ///
    /// Scalar phải nằm trong `[1, n-1]` — zero hoặc >= curve order bị reject.
    pub fn from_seed(seed: &[u8]) -> WalletResult<Self> {
        let seed: [u8; SECP256K1_SEED_SIZE] = seed.try_into().map_err(|_| {
            WalletError::InvalidSeedLength {
                expected: SECP256K1_SEED_SIZE,
                actual: seed.len(),
            }
        })?;

        let signing_key = SigningKey::from_slice(&seed).map_err(|e| {
            WalletError::InvalidKeyFormat(format!("invalid secp256k1 scalar: {}", e))
        })?;

        Ok(Self {
            seed: Zeroizing::new(seed),
            signing_key,
        })
    }

    /// Keypair từ raw 32-byte private key (scalar dùng trực tiếp làm seed).
    pub fn from_private_key(private_key: &[u8]) -> WalletResult<Self> {
        Self::from_seed(private_key)
    }

    /// Derive keypair từ mnemonic theo path `m/54'/784'/{account}'/{change}/{index}`.
    pub fn derive_keypair(
        mnemonic: &str,
        account_index: u32,
        change_index: u32,
        address_index: u32,
        passphrase: &str,
    ) -> WalletResult<Self> {
        let path = DerivationPaths::secp256k1(account_index, change_index, address_index)?;
        let seed = mnemonic::seed_from_phrase(mnemonic, passphrase)?;
        let derived = Secp256k1Deriver::derive(&*seed, &path)?;
        Self::from_seed(&*derived)
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Public key (SEC1 compressed, 33 bytes) — deterministic, side-effect-free.
    pub fn get_public_key(&self) -> Secp256k1PublicKey {
        let point = self.signing_key.verifying_key().to_encoded_point(true);
        Secp256k1PublicKey::new(point.as_bytes())
            .expect("compressed SEC1 point is always 33 bytes")
    }

    /// Sign `data` bằng deterministic ECDSA (RFC 6979) trên SHA-256 digest.
    ///
    /// # Returns
    /// 64-byte fixed-size signature `r || s`.
    pub fn sign_data(&self, data: &[u8]) -> WalletResult<Vec<u8>> {
        let signature: Signature = self
            .signing_key
            .try_sign(data)
            .map_err(|e| WalletError::SigningFailed(e.to_string()))?;
        Ok(signature.to_bytes().to_vec())
    }

    /// Scheme tag — luôn [`SignatureScheme::Secp256k1`].
    #[inline]
    pub fn get_key_scheme(&self) -> SignatureScheme {
        SignatureScheme::Secp256k1
    }

    /// Export raw 32-byte private scalar.
    ///
    /// Round-trips qua [`from_private_key`](Self::from_private_key).
    pub fn to_private_key(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.seed.to_vec())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_from_seed_generator_vector() {
        // Scalar = 1 → public key là generator point (compressed)
        let mut seed = [0u8; 32];
        seed[31] = 1;
        let kp = Secp256k1Keypair::from_seed(&seed).unwrap();
        let pk = kp.get_public_key();
        assert_eq!(
            hex::encode(pk.to_canonical_bytes()),
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
        assert_eq!(pk.to_sui_address(), "6458f7674c0b0261495bd7325fa0d0c11d2ce144");
    }

    #[test]
    fn test_invalid_seed_length() {
        assert_eq!(
            Secp256k1Keypair::from_seed(&[1u8; 31]).unwrap_err(),
            WalletError::InvalidSeedLength { expected: 32, actual: 31 }
        );
        assert!(Secp256k1Keypair::from_seed(&[1u8; 33]).is_err());
    }

    #[test]
    fn test_zero_scalar_rejected() {
        // Zero không phải scalar hợp lệ trên secp256k1
        let result = Secp256k1Keypair::from_seed(&[0u8; 32]);
        assert!(matches!(result, Err(WalletError::InvalidKeyFormat(_))));
    }

    #[test]
    fn test_from_private_key_round_trip() {
        let kp = Secp256k1Keypair::from_seed(&[3u8; 32]).unwrap();
        let exported = kp.to_private_key();
        assert_eq!(exported.len(), SECP256K1_SEED_SIZE);

        let restored = Secp256k1Keypair::from_private_key(&exported).unwrap();
        assert_eq!(restored, kp);
        assert_eq!(restored.get_public_key(), kp.get_public_key());
    }

    #[test]
    fn test_derive_keypair_vector() {
        let kp = Secp256k1Keypair::derive_keypair(TEST_MNEMONIC, 0, 0, 0, "").unwrap();
        assert_eq!(
            hex::encode(&*kp.to_private_key()),
            "0eacf0e4e0835692d7cd1a7c2eea8c1cfa10d3000414d31978e7b6ca657d0684"
        );
        assert_eq!(
            hex::encode(kp.get_public_key().to_canonical_bytes()),
            "02623d860f46cce9117d3f1ac382b79c59928a004a1986561a99df2a85167cf585"
        );
        assert_eq!(
            kp.get_public_key().to_sui_address(),
            "e1cb6395062b82b4041224d6f8b38fa44c37f8d2"
        );
    }

    #[test]
    fn test_derive_keypair_deterministic() {
        let a = Secp256k1Keypair::derive_keypair(TEST_MNEMONIC, 0, 0, 0, "").unwrap();
        let b = Secp256k1Keypair::derive_keypair(TEST_MNEMONIC, 0, 0, 0, "").unwrap();
        assert_eq!(a, b);

        let other = Secp256k1Keypair::derive_keypair(TEST_MNEMONIC, 1, 0, 0, "").unwrap();
        assert_ne!(a, other);
    }

    #[test]
    fn test_derive_keypair_index_out_of_range() {
        let result = Secp256k1Keypair::derive_keypair(TEST_MNEMONIC, 0, 0, 0x8000_0000, "");
        assert_eq!(result.unwrap_err(), WalletError::IndexOutOfRange(0x8000_0000));
    }

    #[test]
    fn test_derive_keypair_bad_mnemonic() {
        let result = Secp256k1Keypair::derive_keypair("not a mnemonic", 0, 0, 0, "");
        assert!(matches!(result, Err(WalletError::DerivationFailed(_))));
    }

    #[test]
    fn test_sign_deterministic_and_verifiable() {
        let kp = Secp256k1Keypair::from_seed(&[3u8; 32]).unwrap();
        let msg = b"sui wallet core";

        let s1 = kp.sign_data(msg).unwrap();
        let s2 = kp.sign_data(msg).unwrap();
        assert_eq!(s1, s2); // RFC 6979 — no per-call randomness
        assert_eq!(s1.len(), 64);

        let pk = kp.get_public_key();
        assert!(pk.verify(msg, &s1));
        assert!(!pk.verify(b"other message", &s1));
    }

    #[test]
    fn test_equality() {
        let a = Secp256k1Keypair::from_seed(&[3u8; 32]).unwrap();
        let b = Secp256k1Keypair::from_seed(&[3u8; 32]).unwrap();
        let c = Secp256k1Keypair::from_seed(&[4u8; 32]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_scheme_tag() {
        let kp = Secp256k1Keypair::from_seed(&[3u8; 32]).unwrap();
        assert_eq!(kp.get_key_scheme(), SignatureScheme::Secp256k1);
    }

    #[test]
    fn test_generate_unique() {
        let a = Secp256k1Keypair::generate().unwrap();
        let b = Secp256k1Keypair::generate().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_debug_does_not_leak_scalar() {
        let kp = Secp256k1Keypair::from_seed(&[0xcdu8; 32]).unwrap();
        let debug_output = format!("{:?}", kp);
        assert!(!debug_output.contains(&hex::encode([0xcdu8; 32])));
    }
}
