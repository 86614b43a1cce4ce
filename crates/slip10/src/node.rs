//! The SLIP-0010 derivation engine.
//!
//! A [`Node`] is one position in the derivation chain: a 32-byte key seed and a 32-byte
//! chain code. Nodes are only created from a seed ([`Node::new_master`]), by deriving
//! a hardened child ([`Node::derive`]), or by restoring a persisted record.

use std::fmt;

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha512;
use tracing::{debug, trace};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::{
    constants::{
        CHAIN_CODE_SIZE, CHILD_MESSAGE_LEN, ED25519_SEED_MODIFIER, FIRST_HARDENED_INDEX,
        HARDENED_CHILD_TAG, KEY_SIZE,
    },
    errors::DerivationError,
    path::{DerivationIndex, DerivationPath},
};

type HmacSha512 = Hmac<Sha512>;

/// A position in the ed25519 derivation chain.
///
/// Both buffers are wiped when the node is dropped. Derivation never mutates a node; it
/// always returns a new one.
///
/// The serialized form is a record with exactly two lowercase hex fields, `key` and
/// `chain_code`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Node {
    /// Private key seed material.
    #[serde(with = "hex::serde")]
    key: [u8; KEY_SIZE],

    /// HMAC key for deriving children.
    #[serde(with = "hex::serde")]
    chain_code: [u8; CHAIN_CODE_SIZE],
}

impl Node {
    /// Creates the master node for `seed`.
    ///
    /// Any seed length is accepted. SLIP-0010 test vectors use 16 to 64 byte seeds and
    /// BIP-39 seeds are 64 bytes.
    pub fn new_master(seed: &[u8]) -> Result<Self, DerivationError> {
        let mut mac = new_mac(ED25519_SEED_MODIFIER)?;
        mac.update(seed);

        Ok(Self::from_mac(mac))
    }

    /// Derives the hardened child at `index`.
    ///
    /// `index` must already carry the hardened bit, i.e. be at least
    /// [`FIRST_HARDENED_INDEX`]; anything lower fails with
    /// [`DerivationError::NoPublicDerivation`].
    pub fn derive(&self, index: DerivationIndex) -> Result<Self, DerivationError> {
        if index < FIRST_HARDENED_INDEX {
            return Err(DerivationError::NoPublicDerivation { index });
        }

        // 0x00 || parent key || ser32(index)
        let mut data = Zeroizing::new([0u8; CHILD_MESSAGE_LEN]);
        data[0] = HARDENED_CHILD_TAG;
        data[1..=KEY_SIZE].copy_from_slice(&self.key);
        data[KEY_SIZE + 1..].copy_from_slice(&index.to_be_bytes());

        let mut mac = new_mac(&self.chain_code)?;
        mac.update(&data[..]);

        Ok(Self::from_mac(mac))
    }

    /// Derives every hardened step of `path`, starting from this node.
    ///
    /// The master path returns a copy of this node.
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self, DerivationError> {
        path.hardened_indices()
            .enumerate()
            .try_fold(self.clone(), |node, (step, index)| {
                trace!(depth = step + 1, index, "deriving hardened child");
                node.derive(index)
            })
    }

    /// Rebuilds a node from its raw key and chain code.
    pub const fn from_parts(key: [u8; KEY_SIZE], chain_code: [u8; CHAIN_CODE_SIZE]) -> Self {
        Self { key, chain_code }
    }

    /// Returns copies of the raw key and chain code.
    ///
    /// The returned arrays are not wiped on drop.
    pub fn into_parts(self) -> ([u8; KEY_SIZE], [u8; CHAIN_CODE_SIZE]) {
        (self.key, self.chain_code)
    }

    /// Raw key seed bytes.
    pub const fn raw_seed(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }

    /// Chain code bytes.
    pub const fn chain_code(&self) -> &[u8; CHAIN_CODE_SIZE] {
        &self.chain_code
    }

    /// Splits a finished HMAC-SHA512 into key (first half) and chain code (second half).
    fn from_mac(mac: HmacSha512) -> Self {
        let digest = mac.finalize().into_bytes();
        let (key_bytes, chain_code_bytes) = digest.split_at(KEY_SIZE);

        let mut key = [0u8; KEY_SIZE];
        let mut chain_code = [0u8; CHAIN_CODE_SIZE];
        key.copy_from_slice(key_bytes);
        chain_code.copy_from_slice(chain_code_bytes);

        Self { key, chain_code }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &"[REDACTED]")
            .field("chain_code", &"[REDACTED]")
            .finish()
    }
}

/// Derives the node for a textual `path` from `seed`.
///
/// The path is validated before any derivation happens. `m` yields the master node.
pub fn derive_for_path(path: &str, seed: &[u8]) -> Result<Node, DerivationError> {
    let path: DerivationPath = path.parse()?;
    debug!(%path, depth = path.len(), "deriving node for path");

    Node::new_master(seed)?.derive_path(&path)
}

fn new_mac(key: &[u8]) -> Result<HmacSha512, DerivationError> {
    HmacSha512::new_from_slice(key).map_err(|e| DerivationError::PrimitiveFailure(e.to_string()))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::errors::PathError;

    const SEED_1: &str = "000102030405060708090a0b0c0d0e0f";
    const SEED_2: &str = "fffcf9f6f3f0edeae7e4e1dedbd8d5d2cfccc9c6c3c0bdbab7b4b1aeaba8a5a29f9c999693908d8a8784817e7b7875726f6c696663605d5a5754514e4b484542";

    fn seed(s: &str) -> Vec<u8> {
        hex::decode(s).unwrap()
    }

    #[test]
    fn master_node_from_vector_1() {
        let node = Node::new_master(&seed(SEED_1)).unwrap();

        assert_eq!(
            hex::encode(node.raw_seed()),
            "2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7"
        );
        assert_eq!(
            hex::encode(node.chain_code()),
            "90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb"
        );
    }

    #[test]
    fn master_node_from_vector_2() {
        let node = Node::new_master(&seed(SEED_2)).unwrap();

        assert_eq!(
            hex::encode(node.raw_seed()),
            "171cb88b1b3c1db25add599712e36245d75bc65a1a5c9e18d76f9f2b1eab4012"
        );
    }

    #[test]
    fn master_path_returns_master_node() {
        let seed = seed(SEED_1);
        assert_eq!(
            derive_for_path("m", &seed).unwrap(),
            Node::new_master(&seed).unwrap()
        );
    }

    #[test]
    fn empty_seed_is_accepted() {
        assert!(Node::new_master(&[]).is_ok());
    }

    #[test]
    fn rejects_non_hardened_index() {
        let node = Node::new_master(&seed(SEED_1)).unwrap();

        for index in [0, 1, 44, FIRST_HARDENED_INDEX - 1] {
            assert_eq!(
                node.derive(index),
                Err(DerivationError::NoPublicDerivation { index })
            );
        }
    }

    #[test]
    fn rejects_non_hardened_path() {
        assert_eq!(
            derive_for_path("m/0", &seed(SEED_1)),
            Err(DerivationError::InvalidPath(PathError::NotHardened {
                position: 1,
                segment: "0".to_owned(),
            }))
        );
    }

    #[test]
    fn derive_leaves_parent_untouched() {
        let parent = Node::new_master(&seed(SEED_1)).unwrap();
        let snapshot = parent.clone();

        let child = parent.derive(FIRST_HARDENED_INDEX).unwrap();

        assert_eq!(parent, snapshot);
        assert_ne!(child, parent);
    }

    #[test]
    fn derive_path_from_intermediate_node() {
        let seed = seed(SEED_2);
        let account = derive_for_path("m/0'/2147483647'", &seed).unwrap();
        let rest: DerivationPath = "m/1'/2147483646'/2'".parse().unwrap();

        assert_eq!(
            account.derive_path(&rest).unwrap(),
            derive_for_path("m/0'/2147483647'/1'/2147483646'/2'", &seed).unwrap()
        );
    }

    #[test]
    fn serializes_as_hex_record() {
        let node = Node::new_master(&seed(SEED_1)).unwrap();
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "key": "2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7",
                "chain_code": "90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb",
            })
        );
    }

    #[test]
    fn deserialize_rejects_wrong_length() {
        let short = r#"{"key":"2b4b","chain_code":"90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb"}"#;
        assert!(serde_json::from_str::<Node>(short).is_err());

        let missing = r#"{"key":"2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7"}"#;
        assert!(serde_json::from_str::<Node>(missing).is_err());
    }

    #[test]
    fn debug_output_redacted() {
        let node = Node::new_master(&seed(SEED_1)).unwrap();
        let debug = format!("{node:?}");

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("2b4be7"));
    }

    #[test]
    fn parts_roundtrip() {
        let node = Node::new_master(&seed(SEED_2)).unwrap();
        let (key, chain_code) = node.clone().into_parts();

        assert_eq!(Node::from_parts(key, chain_code), node);
    }

    #[test]
    fn test_zeroize() {
        let mut node = Node::new_master(&seed(SEED_1)).unwrap();
        node.zeroize();

        assert_eq!(node.raw_seed(), &[0u8; KEY_SIZE]);
        assert_eq!(node.chain_code(), &[0u8; CHAIN_CODE_SIZE]);
    }

    fn arb_seed() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(any::<u8>(), 16..=64)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        // Repeated derivations of the same path from the same seed are byte-identical.
        #[test]
        fn derivation_is_deterministic(
            seed in arb_seed(),
            indices in prop::collection::vec(0u32..FIRST_HARDENED_INDEX, 0..4),
        ) {
            let path = DerivationPath::from_indices(indices).unwrap().to_string();
            let first = derive_for_path(&path, &seed).unwrap();
            let second = derive_for_path(&path, &seed).unwrap();
            prop_assert_eq!(first.raw_seed(), second.raw_seed());
            prop_assert_eq!(first.chain_code(), second.chain_code());
        }

        // Stepwise derivation matches full-path derivation.
        #[test]
        fn stepwise_matches_full_path(
            seed in arb_seed(),
            a in 0u32..FIRST_HARDENED_INDEX,
            b in 0u32..FIRST_HARDENED_INDEX,
        ) {
            let stepwise = Node::new_master(&seed)
                .unwrap()
                .derive(a + FIRST_HARDENED_INDEX)
                .unwrap()
                .derive(b + FIRST_HARDENED_INDEX)
                .unwrap();
            let full = derive_for_path(&format!("m/{a}'/{b}'"), &seed).unwrap();
            prop_assert_eq!(stepwise, full);
        }

        // Any index without the hardened bit is refused, whatever the parent.
        #[test]
        fn non_hardened_always_refused(seed in arb_seed(), index in 0u32..FIRST_HARDENED_INDEX) {
            let node = Node::new_master(&seed).unwrap();
            prop_assert_eq!(node.derive(index), Err(DerivationError::NoPublicDerivation { index }));
        }

        // JSON persistence reproduces the node byte for byte.
        #[test]
        fn serde_roundtrip(key in any::<[u8; KEY_SIZE]>(), chain_code in any::<[u8; CHAIN_CODE_SIZE]>()) {
            let node = Node::from_parts(key, chain_code);
            let json = serde_json::to_string(&node).unwrap();
            let restored: Node = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(restored.raw_seed(), &key);
            prop_assert_eq!(restored.chain_code(), &chain_code);
        }
    }
}
