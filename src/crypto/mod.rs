// sui-wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! This module implements the fundamental cryptographic operations of the wallet:
//!
//! - **Signature Schemes**: Closed enumeration + address flag mapping via [`SignatureScheme`].
//! - **Key Derivation**: SLIP-0010 (ed25519) and BIP-32 (secp256k1) via [`key_deriver`].
//! - **Keypairs**: Scheme-polymorphic signing keys via [`SuiKeypair`].
//! - **Addresses**: Canonical Sui address computation via [`address::sui_address`].

pub mod address;
pub mod key_deriver;
pub mod keypair;
pub mod mnemonic;
pub mod paths;
pub mod publickey;
pub mod scheme;

// Re-exports for cleaner API access
pub use key_deriver::{Ed25519Deriver, Secp256k1Deriver};
pub use keypair::{Ed25519Keypair, Secp256k1Keypair, SuiKeypair};
pub use paths::DerivationPaths;
pub use publickey::{Ed25519PublicKey, Secp256k1PublicKey, SuiPublicKey};
pub use scheme::SignatureScheme;
