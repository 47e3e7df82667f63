// sui-wallet-core/src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Key Derivation — SLIP-0010 Standard
//
// Algorithm: HMAC-SHA512 (khác BIP-32, chỉ hỗ trợ hardened derivation)
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// QUAN TRỌNG: SLIP-0010 cho ed25519 CHỈ hỗ trợ hardened child derivation.
// Tất cả levels trong path PHẢI là hardened (có dấu ').
// Sui dùng: m/44'/784'/0'/{change}'/{index}'

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

use crate::crypto::paths::FIRST_HARDENED_INDEX;
use crate::error::{WalletError, WalletResult};

type HmacSha512 = Hmac<Sha512>;

/// Ed25519 Key Deriver — SLIP-0010 Standard
///
/// # Khác biệt với secp256k1 (BIP-32)
/// - Master key seed: `"ed25519 seed"` (thay vì `"Bitcoin seed"`)
/// - Chỉ hỗ trợ hardened derivation
/// - Không cần validate key range (ed25519 chấp nhận mọi 32 bytes)
///
/// # Security
/// - Intermediate private key + chain code tự động zeroize
/// - Không lưu state giữa các lần derive — pure computation
pub struct Ed25519Deriver;

impl Ed25519Deriver {
    /// SLIP-0010 master key seed constant
    const MASTER_SECRET: &'static [u8] = b"ed25519 seed";

    /// Derive ed25519 private seed từ (seed, path).
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed (64 bytes cho Sui, nhưng SLIP-0010 chấp nhận mọi độ dài)
    /// * `path` - Derivation path, ALL levels hardened, e.g. `"m/44'/784'/0'/0'/0'"`
    ///
    /// # Returns
    /// 32-byte ed25519 private seed, auto-zeroize on drop.
    ///
    /// Deterministic: cùng (seed, path) luôn cho cùng output.
    pub fn derive(seed: &[u8], path: &str) -> WalletResult<Zeroizing<[u8; 32]>> {
        let indices = Self::parse_path(path)?;

        // Step 1: master key
        // I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
        let (mut key, mut chain_code) = Self::master_key(seed)?;

        // Step 2: child derivation, mỗi level
        // I = HMAC-SHA512(Key = chain_code, Data = 0x00 || key || be32(0x80000000 + index))
        for index in &indices {
            let (child_key, child_chain) = Self::derive_child(&key, &chain_code, *index)?;
            key.zeroize();
            chain_code.zeroize();
            key = child_key;
            chain_code = child_chain;
        }

        chain_code.zeroize();
        Ok(Zeroizing::new(key))
    }

    /// I = HMAC-SHA512("ed25519 seed", seed); IL = key, IR = chain code
    fn master_key(seed: &[u8]) -> WalletResult<([u8; 32], [u8; 32])> {
        let mut mac = HmacSha512::new_from_slice(Self::MASTER_SECRET).map_err(|e| {
            WalletError::DerivationFailed(format!("HMAC init failed: {}", e))
        })?;
        mac.update(seed);
        Self::split_digest(mac)
    }

    /// Hardened child: Data = 0x00 || parent_key || ser32(index + 0x80000000)
    fn derive_child(
        parent_key: &[u8; 32],
        parent_chain_code: &[u8; 32],
        index: u32,
    ) -> WalletResult<([u8; 32], [u8; 32])> {
        let mut mac = HmacSha512::new_from_slice(parent_chain_code).map_err(|e| {
            WalletError::DerivationFailed(format!("HMAC init failed: {}", e))
        })?;

        // `parse_path` đã đảm bảo index < 2^31 nên phép cộng không overflow
        let hardened_index = FIRST_HARDENED_INDEX + index;
        mac.update(&[0x00]);
        mac.update(parent_key);
        mac.update(&hardened_index.to_be_bytes());
        Self::split_digest(mac)
    }

    /// Tách 64-byte HMAC output thành (IL, IR), zeroize local buffer.
    fn split_digest(mac: HmacSha512) -> WalletResult<([u8; 32], [u8; 32])> {
        let result = mac.finalize().into_bytes();

        let mut buf = [0u8; 64];
        buf.copy_from_slice(&result);

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&buf[..32]);
        chain_code.copy_from_slice(&buf[32..]);

        // Local buffer chứa raw key material
        buf.zeroize();

        Ok((key, chain_code))
    }

    /// Parse path thành list of (pre-hardening) indices.
    ///
    /// Input: `"m/44'/784'/0'/0'/0'"` → Output: `[44, 784, 0, 0, 0]`
    ///
    /// Tất cả segments phải có suffix `'` (hoặc `h`); index phải < 2^31.
    fn parse_path(path: &str) -> WalletResult<Vec<u32>> {
        let path = path.trim();

        if !path.starts_with("m/") {
            return Err(WalletError::DerivationFailed(format!(
                "path must start with 'm/': {}",
                path
            )));
        }

        let segments = &path[2..];
        if segments.is_empty() {
            return Err(WalletError::DerivationFailed(
                "empty derivation path".to_string(),
            ));
        }

        let mut indices = Vec::new();
        for segment in segments.split('/') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            // SLIP-0010 ed25519: mọi level phải hardened
            if !segment.ends_with('\'') && !segment.ends_with('h') {
                return Err(WalletError::DerivationFailed(format!(
                    "ed25519 SLIP-0010 requires ALL levels to be hardened (add '). Invalid segment: '{}'",
                    segment
                )));
            }

            let num_str = &segment[..segment.len() - 1];
            let index: u32 = num_str.parse().map_err(|e| {
                WalletError::DerivationFailed(format!("invalid index '{}': {}", num_str, e))
            })?;

            // Index đã nằm trong hardened range → reject, không wrap
            if index >= FIRST_HARDENED_INDEX {
                return Err(WalletError::IndexOutOfRange(index));
            }

            indices.push(index);
        }

        Ok(indices)
    }

    /// Validate ed25519 path (tất cả levels hardened, indices in range)
    pub fn is_valid_path(path: &str) -> bool {
        Self::parse_path(path).is_ok()
    }
}

// =============================================================================
// TESTS
// =============================================================================
