// sui-wallet-core/src/crypto/scheme.rs
//
// Signature Scheme Enumeration + Address Flag Mapping
//
// Numeric values là một phần của wire-compatible address format —
// KHÔNG BAO GIỜ được đánh số lại.

use crate::error::{WalletError, WalletResult};

/// Signature schemes được Sui hỗ trợ trong wallet này.
///
/// Discriminant của mỗi variant đồng thời là one-byte domain-separation
/// flag được prefix trước public key khi hash ra address (xem
/// [`sui_address`](crate::crypto::address::sui_address)). Coupling này
/// là load-bearing: đổi số = đổi toàn bộ address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SignatureScheme {
    /// Ed25519 (EdDSA, RFC 8032) — flag 0x00
    Ed25519 = 0x00,
    /// secp256k1 (ECDSA) — flag 0x01
    Secp256k1 = 0x01,
}

impl SignatureScheme {
    /// One-byte address domain-separation flag.
    #[inline]
    pub const fn flag(self) -> u8 {
        self as u8
    }

    /// Parse flag byte về scheme. Closed set — mọi giá trị khác fail.
    pub fn from_flag(flag: u8) -> WalletResult<Self> {
        match flag {
            0x00 => Ok(SignatureScheme::Ed25519),
            0x01 => Ok(SignatureScheme::Secp256k1),
            other => Err(WalletError::UnsupportedScheme(other)),
        }
    }
}

impl std::fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignatureScheme::Ed25519 => write!(f, "ED25519"),
            SignatureScheme::Secp256k1 => write!(f, "Secp256k1"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_values_are_stable() {
        // Wire format — các giá trị này không bao giờ được thay đổi
        assert_eq!(SignatureScheme::Ed25519.flag(), 0x00);
        assert_eq!(SignatureScheme::Secp256k1.flag(), 0x01);
    }

    #[test]
    fn test_from_flag_round_trip() {
        for scheme in [SignatureScheme::Ed25519, SignatureScheme::Secp256k1] {
            assert_eq!(SignatureScheme::from_flag(scheme.flag()).unwrap(), scheme);
        }
    }

    #[test]
    fn test_from_flag_rejects_unknown() {
        for bad in [0x02u8, 0x03, 0xff] {
            assert_eq!(
                SignatureScheme::from_flag(bad),
                Err(WalletError::UnsupportedScheme(bad))
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(SignatureScheme::Ed25519.to_string(), "ED25519");
        assert_eq!(SignatureScheme::Secp256k1.to_string(), "Secp256k1");
    }
}
