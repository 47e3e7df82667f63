// sui-wallet-core/src/crypto/mnemonic.rs
//
// Mnemonic → Seed Primitive
// BIP-39 (PBKDF2-HMAC-SHA512) qua bip39 crate — trusted external primitive,
// wallet này không generate hay expose wordlist.

use bip39::Mnemonic;
use zeroize::Zeroizing;

use crate::error::{WalletError, WalletResult};

/// BIP-39 seed length (bytes)
pub const BIP39_SEED_SIZE: usize = 64;

/// Convert (words, passphrase) → 64-byte BIP-39 seed.
///
/// Whitespace được normalize trước khi parse. Mọi lỗi parse (word count,
/// wordlist, checksum) surface thành [`WalletError::DerivationFailed`] —
/// đây là upstream step của mọi `derive_keypair`.
pub fn seed_from_phrase(
    phrase: &str,
    passphrase: &str,
) -> WalletResult<Zeroizing<[u8; BIP39_SEED_SIZE]>> {
    let normalized = phrase.split_whitespace().collect::<Vec<_>>().join(" ");
    let mnemonic = Mnemonic::parse(normalized.as_str())
        .map_err(|e| WalletError::DerivationFailed(format!("invalid mnemonic: {}", e)))?;
    Ok(Zeroizing::new(mnemonic.to_seed(passphrase)))
}

// =============================================================================
// TESTS
// =============================================================================
