//! Fixed parameters of the SLIP-0010 Ed25519 scheme.

/// Index of the first hardened child (2^31).
///
/// Indices at or above this value are hardened; a path segment `i'` maps to
/// `i + FIRST_HARDENED_INDEX`.
pub const FIRST_HARDENED_INDEX: u32 = 0x8000_0000;

/// HMAC key used to derive the master node from a seed.
pub const ED25519_SEED_MODIFIER: &[u8] = b"ed25519 seed";

/// Size of a node's private key seed in bytes.
pub const KEY_SIZE: usize = 32;

/// Size of a node's chain code in bytes.
pub const CHAIN_CODE_SIZE: usize = 32;

/// Size of a public key carrying the SLIP-0010 curve tag byte.
pub const PREFIXED_PUBLIC_KEY_SIZE: usize = 33;

/// Leading byte of a hardened child derivation message.
pub(crate) const HARDENED_CHILD_TAG: u8 = 0x00;

/// Leading byte of a public key in the SLIP-0010 test-vector encoding.
pub(crate) const PUBLIC_KEY_PREFIX: u8 = 0x00;

/// Length of the child derivation message: tag, parent key, big-endian index.
pub(crate) const CHILD_MESSAGE_LEN: usize = 1 + KEY_SIZE + 4;
