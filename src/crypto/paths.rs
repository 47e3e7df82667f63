// sui-wallet-core/src/crypto/paths.rs
//
// Derivation Path Templates - Sui HD Wallet
// BIP-44 (purpose 44, ed25519/SLIP-0010) + purpose 54 (secp256k1/BIP-32), SLIP-44 coin 784

use crate::error::{WalletError, WalletResult};

/// SLIP-44 coin type của Sui.
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub const SUI_COIN_TYPE: u32 = 784;

/// Mọi index phải fit 31 bits trước khi cộng hardening offset.
pub const FIRST_HARDENED_INDEX: u32 = 0x8000_0000;

/// Pre-built + parameterized derivation paths cho Sui.
///
/// # Conventions
/// - Ed25519 (SLIP-0010): `m/44'/784'/0'/{change}'/{index}'` — tất cả levels
///   hardened. Không tồn tại builder nào tạo được non-hardened ed25519 path.
/// - secp256k1 (BIP-32): `m/54'/784'/{account}'/{change}/{index}` — account
///   hardened, change và index non-hardened theo path string.
pub struct DerivationPaths;

impl DerivationPaths {
    /// Default ed25519 path (account 0, change 0, index 0)
    pub const ED25519_DEFAULT: &'static str = "m/44'/784'/0'/0'/0'";

    /// Default secp256k1 path (account 0, change 0, index 0)
    pub const SECP256K1_DEFAULT: &'static str = "m/54'/784'/0'/0/0";

    /// Ed25519 path với change/address index tùy chỉnh (all hardened).
    pub fn ed25519(change_index: u32, address_index: u32) -> WalletResult<String> {
        Self::check_index(change_index)?;
        Self::check_index(address_index)?;
        Ok(format!(
            "m/44'/{}'/0'/{}'/{}'",
            SUI_COIN_TYPE, change_index, address_index
        ))
    }

    /// secp256k1 path với account/change/address index tùy chỉnh.
    pub fn secp256k1(
        account_index: u32,
        change_index: u32,
        address_index: u32,
    ) -> WalletResult<String> {
        Self::check_index(account_index)?;
        Self::check_index(change_index)?;
        Self::check_index(address_index)?;
        Ok(format!(
            "m/54'/{}'/{}'/{}/{}",
            SUI_COIN_TYPE, account_index, change_index, address_index
        ))
    }

    /// Index phải < 2^31 — giá trị đã nằm trong hardened-offset range bị
    /// reject thay vì silently wrap.
    #[inline]
    fn check_index(index: u32) -> WalletResult<()> {
        if index >= FIRST_HARDENED_INDEX {
            return Err(WalletError::IndexOutOfRange(index));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
