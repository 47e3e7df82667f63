// sui-wallet-core/src/lib.rs

//! Sui Wallet Core
//!
//! Deterministic cryptographic identity for a Sui client: mnemonic/seed in,
//! hierarchical private keys, signatures and canonical on-chain addresses out.
//!
//! - **Keypairs**: Ed25519 + Secp256k1 behind one closed abstraction via [`SuiKeypair`].
//! - **HD Derivation**: SLIP-0010 (ed25519, hardened-only) and BIP-32 (secp256k1)
//!   via [`Ed25519Deriver`] / [`Secp256k1Deriver`].
//! - **Addresses**: `SHA3-256(flag || public_key)[..20]` hex via [`sui_address`].
//!
//! Không có network, filesystem hay database access trong crate này — chỉ
//! pure computation + OS RNG khi `generate()`.

pub mod crypto;
pub mod error;

// Re-exports for cleaner API access
pub use crypto::address::sui_address;
pub use crypto::key_deriver::{Ed25519Deriver, Secp256k1Deriver};
pub use crypto::keypair::{Ed25519Keypair, Secp256k1Keypair, SuiKeypair};
pub use crypto::paths::DerivationPaths;
pub use crypto::publickey::{Ed25519PublicKey, Secp256k1PublicKey, SuiPublicKey};
pub use crypto::scheme::SignatureScheme;
pub use error::{WalletError, WalletResult};
