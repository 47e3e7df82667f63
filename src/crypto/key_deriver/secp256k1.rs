// sui-wallet-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation — BIP-32
//
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki
//
// Sui dùng purpose 54: m/54'/784'/{account}'/{change}/{index}
// (account hardened, change và address index non-hardened)

use std::str::FromStr;

use bip32::{DerivationPath, XPrv};
use zeroize::Zeroizing;

use crate::error::{WalletError, WalletResult};

/// secp256k1 Key Deriver — BIP-32 Standard
///
/// # Security
/// - Private keys wrap trong `Zeroizing<[u8; 32]>` (auto-zeroize khi drop)
/// - Không lưu intermediate extended keys
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Derive secp256k1 private scalar từ (seed, path).
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed (64 bytes)
    /// * `path` - Derivation path (e.g. `"m/54'/784'/0'/0/0"`)
    ///
    /// # Returns
    /// 32-byte private scalar, auto-zeroize on drop.
    ///
    /// Deterministic: cùng (seed, path) luôn cho cùng output.
    pub fn derive(seed: &[u8], path: &str) -> WalletResult<Zeroizing<[u8; 32]>> {
        let root_xprv = XPrv::new(seed).map_err(|e| {
            WalletError::DerivationFailed(format!("failed to create master key: {}", e))
        })?;

        let derivation_path = DerivationPath::from_str(path).map_err(|e| {
            WalletError::DerivationFailed(format!("invalid path '{}': {}", path, e))
        })?;

        let mut child = root_xprv;
        for child_num in derivation_path {
            child = child.derive_child(child_num).map_err(|e| {
                WalletError::DerivationFailed(format!("child derivation failed: {}", e))
            })?;
        }

        let key_bytes: [u8; 32] = child.private_key().to_bytes().into();
        Ok(Zeroizing::new(key_bytes))
    }

    /// Validate path format (BIP-32 syntax)
    #[inline]
    pub fn is_valid_path(path: &str) -> bool {
        DerivationPath::from_str(path).is_ok()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::mnemonic::seed_from_phrase;
    use crate::crypto::paths::DerivationPaths;

    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_derive_sui_default_path() {
        let seed = seed_from_phrase(TEST_MNEMONIC, "").unwrap();
        let key = Secp256k1Deriver::derive(&*seed, DerivationPaths::SECP256K1_DEFAULT).unwrap();
        // Vector pre-computed with a reference BIP-32 implementation
        assert_eq!(
            hex::encode(&*key),
            "0eacf0e4e0835692d7cd1a7c2eea8c1cfa10d3000414d31978e7b6ca657d0684"
        );
    }

    #[test]
    fn test_consistency() {
        let seed = seed_from_phrase(TEST_MNEMONIC, "").unwrap();
        let k1 = Secp256k1Deriver::derive(&*seed, DerivationPaths::SECP256K1_DEFAULT).unwrap();
        let k2 = Secp256k1Deriver::derive(&*seed, DerivationPaths::SECP256K1_DEFAULT).unwrap();
        assert_eq!(&*k1, &*k2);
    }

    #[test]
    fn test_different_paths_different_keys() {
        let seed = seed_from_phrase(TEST_MNEMONIC, "").unwrap();
        let k0 =
            Secp256k1Deriver::derive(&*seed, &DerivationPaths::secp256k1(0, 0, 0).unwrap()).unwrap();
        let k1 =
            Secp256k1Deriver::derive(&*seed, &DerivationPaths::secp256k1(0, 0, 1).unwrap()).unwrap();
        let k2 =
            Secp256k1Deriver::derive(&*seed, &DerivationPaths::secp256k1(1, 0, 0).unwrap()).unwrap();
        assert_ne!(&*k0, &*k1);
        assert_ne!(&*k0, &*k2);
    }

    #[test]
    fn test_invalid_path_rejected() {
        let seed = seed_from_phrase(TEST_MNEMONIC, "").unwrap();
        assert!(Secp256k1Deriver::derive(&*seed, "invalid").is_err());
        assert!(Secp256k1Deriver::derive(&*seed, "54'/784'/0'").is_err());
    }

    #[test]
    fn test_is_valid_path() {
        assert!(Secp256k1Deriver::is_valid_path("m/54'/784'/0'/0/0"));
        assert!(Secp256k1Deriver::is_valid_path("m/54'/784'/1'/0/7"));
        assert!(!Secp256k1Deriver::is_valid_path("invalid"));
    }
}
