//! SLIP-0010 hierarchical key derivation for Ed25519.
//!
//! This crate derives a chain of Ed25519 key seeds and chain codes from a root seed, one
//! hardened index at a time, exactly as described in
//! [SLIP-0010](https://github.com/satoshilabs/slips/blob/master/slip-0010.md).
//!
//! # Usage
//!
//! ```rust,ignore
//! use slip10_ed25519::{derive_for_path, is_valid_path, Node};
//!
//! let seed = [0x42u8; 32];
//!
//! assert!(is_valid_path("m/44'/501'/0'"));
//! let node = derive_for_path("m/44'/501'/0'", &seed)?;
//!
//! // The same node, one step at a time.
//! let stepwise = Node::new_master(&seed)?
//!     .derive(44 + slip10_ed25519::FIRST_HARDENED_INDEX)?
//!     .derive(501 + slip10_ed25519::FIRST_HARDENED_INDEX)?
//!     .derive(slip10_ed25519::FIRST_HARDENED_INDEX)?;
//! assert_eq!(node, stepwise);
//!
//! let (public, _private) = node.keypair();
//! assert_eq!(node.public_key_with_prefix()[1..], public.to_bytes());
//! # Ok::<(), slip10_ed25519::DerivationError>(())
//! ```
//!
//! # Hardened-only derivation
//!
//! SLIP-0010 defines no public-parent derivation for Ed25519, so every index is hardened.
//! Path strings must mark each segment with `'` and [`Node::derive`] refuses any index
//! below [`FIRST_HARDENED_INDEX`].

mod constants;
mod errors;
mod keys;
mod node;
mod path;

pub use constants::{
    CHAIN_CODE_SIZE, ED25519_SEED_MODIFIER, FIRST_HARDENED_INDEX, KEY_SIZE,
    PREFIXED_PUBLIC_KEY_SIZE,
};
pub use errors::{DerivationError, PathError};
pub use node::{derive_for_path, Node};
pub use path::{is_valid_path, DerivationIndex, DerivationPath};

// Re-exported so callers can name the key pair types without depending on `ed25519-dalek`.
pub use ed25519_dalek::{SigningKey, VerifyingKey};
