//! Ed25519 key pairs from derived nodes.
//!
//! The node key is used as the 32-byte Ed25519 secret seed; expanding it into a signing
//! scalar is left to `ed25519-dalek`.

use ed25519_dalek::{SigningKey, VerifyingKey, KEYPAIR_LENGTH, PUBLIC_KEY_LENGTH};

use crate::{
    constants::{KEY_SIZE, PREFIXED_PUBLIC_KEY_SIZE, PUBLIC_KEY_PREFIX},
    node::Node,
};

impl Node {
    /// Ed25519 key pair seeded with this node's key.
    pub fn keypair(&self) -> (VerifyingKey, SigningKey) {
        let signing_key = SigningKey::from_bytes(self.raw_seed());
        (signing_key.verifying_key(), signing_key)
    }

    /// The 32-byte seed form of the private key.
    pub fn private_key(&self) -> [u8; KEY_SIZE] {
        let (_, signing_key) = self.keypair();
        signing_key.to_bytes()
    }

    /// The private key as seed followed by public key.
    pub fn keypair_bytes(&self) -> [u8; KEYPAIR_LENGTH] {
        let (_, signing_key) = self.keypair();
        signing_key.to_keypair_bytes()
    }

    /// The untagged 32-byte public key.
    pub fn public_key(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        let (verifying_key, _) = self.keypair();
        verifying_key.to_bytes()
    }

    /// The public key with a leading `0x00`, as printed in the SLIP-0010 test vectors.
    pub fn public_key_with_prefix(&self) -> [u8; PREFIXED_PUBLIC_KEY_SIZE] {
        let mut out = [PUBLIC_KEY_PREFIX; PREFIXED_PUBLIC_KEY_SIZE];
        out[1..].copy_from_slice(&self.public_key());
        out
    }
}
