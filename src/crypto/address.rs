// sui-wallet-core/src/crypto/address.rs
//
// Sui Address Codec
// SHA3-256 (FIPS 202 — KHÔNG phải Keccak-256), truncate 20 bytes, hex lowercase

use tiny_keccak::{Hasher, Sha3};

use crate::crypto::scheme::SignatureScheme;

/// Độ dài Sui address tính theo bytes (40 hex chars).
pub const SUI_ADDRESS_LENGTH: usize = 20;

/// Compute canonical Sui address từ (scheme flag, public key bytes).
///
/// # Algorithm (bit-exact, wire compatible)
/// 1. `digest = SHA3-256(flag || public_key)` (32 bytes)
/// 2. `address = digest[..20]`
/// 3. hex-encode lowercase, không prefix
///
/// Flag byte giữ address space của hai scheme tách biệt nhau: cùng một
/// chuỗi public key bytes nhưng khác scheme sẽ ra address khác.
///
/// Pure function — stateless, referentially transparent.
pub fn sui_address(scheme: SignatureScheme, public_key: &[u8]) -> String {
    let mut sha3 = Sha3::v256();
    let mut digest = [0u8; 32];
    sha3.update(&[scheme.flag()]);
    sha3.update(public_key);
    sha3.finalize(&mut digest);
    hex::encode(&digest[..SUI_ADDRESS_LENGTH])
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Ed25519 public key của all-zero seed (well-known value)
    const ZERO_SEED_ED25519_PUB: &str =
        "3b6a27bcceb6a42d62a3a8d02a6f0d73653215771de243a63ac048a18b59da29";
    // secp256k1 compressed public key của scalar = 1 (the generator point)
    const GENERATOR_SECP_PUB: &str =
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    #[test]
    fn test_ed25519_address_vector() {
        let pub_key = hex::decode(ZERO_SEED_ED25519_PUB).unwrap();
        let address = sui_address(SignatureScheme::Ed25519, &pub_key);
        assert_eq!(address, "8a4662abf9f8b7aa947b174f29a7a8f259e111e5");
    }

    #[test]
    fn test_secp256k1_address_vector() {
        let pub_key = hex::decode(GENERATOR_SECP_PUB).unwrap();
        let address = sui_address(SignatureScheme::Secp256k1, &pub_key);
        assert_eq!(address, "6458f7674c0b0261495bd7325fa0d0c11d2ce144");
    }

    #[test]
    fn test_address_format() {
        let pub_key = hex::decode(ZERO_SEED_ED25519_PUB).unwrap();
        let address = sui_address(SignatureScheme::Ed25519, &pub_key);
        assert_eq!(address.len(), SUI_ADDRESS_LENGTH * 2);
        assert!(!address.starts_with("0x"));
        assert!(address.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_scheme_flag_separates_address_spaces() {
        // Cùng bytes, khác flag → address phải khác (injective trong cặp)
        let pub_key = hex::decode(GENERATOR_SECP_PUB).unwrap();
        let as_secp = sui_address(SignatureScheme::Secp256k1, &pub_key);
        let as_ed = sui_address(SignatureScheme::Ed25519, &pub_key);
        assert_ne!(as_secp, as_ed);
        assert_eq!(as_ed, "b395b98450646016dcebfae514f403175c712b7e");
    }

    #[test]
    fn test_address_is_deterministic() {
        let pub_key = hex::decode(ZERO_SEED_ED25519_PUB).unwrap();
        let a1 = sui_address(SignatureScheme::Ed25519, &pub_key);
        let a2 = sui_address(SignatureScheme::Ed25519, &pub_key);
        assert_eq!(a1, a2);
    }
}
