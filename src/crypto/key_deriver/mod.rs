// sui-wallet-core/src/crypto/key_deriver/mod.rs
//
// HD Derivation Engine - hai algorithm độc lập, chỉ chung khái niệm path
//
//  Seed (64 bytes from BIP-39)
//        │
//   ┌────┴─────────────────┐
//   ▼                      ▼
//  ed25519 (SLIP-0010)   secp256k1 (BIP-32)
//  m/44'/784'/...'       m/54'/784'/...
//  hardened-only         hardened + non-hardened

pub mod ed25519;
pub mod secp256k1;

// Re-exports
pub use ed25519::Ed25519Deriver;
pub use secp256k1::Secp256k1Deriver;
