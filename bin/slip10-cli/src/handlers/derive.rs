//! Derives a node from a seed and prints its key material.

use anyhow::{Context, Result};
use serde::Serialize;
use slip10_ed25519::{DerivationPath, Node};
use tracing::debug;

use crate::cli::{DeriveArgs, OutputFormat};

/// Key material of a derived node, hex encoded.
#[derive(Debug, Serialize)]
struct DerivedKeys {
    path: String,
    private_key: String,
    chain_code: String,
    public_key: String,
    public_key_with_prefix: String,
}

impl DerivedKeys {
    fn new(path: &DerivationPath, node: &Node) -> Self {
        Self {
            path: path.to_string(),
            private_key: hex::encode(node.private_key()),
            chain_code: hex::encode(node.chain_code()),
            public_key: hex::encode(node.public_key()),
            public_key_with_prefix: hex::encode(node.public_key_with_prefix()),
        }
    }

    fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("failed to serialize derived keys")
            }
            OutputFormat::Text => Ok(format!(
                "path:                   {}\n\
                 private key:            {}\n\
                 chain code:             {}\n\
                 public key:             {}\n\
                 public key (prefixed):  {}",
                self.path,
                self.private_key,
                self.chain_code,
                self.public_key,
                self.public_key_with_prefix
            )),
        }
    }
}

/// Handles the derive command.
pub(crate) fn handle_derive(args: DeriveArgs) -> Result<()> {
    let seed = hex::decode(args.seed.trim()).context("seed must be hex encoded")?;
    let path: DerivationPath = args
        .path
        .parse()
        .with_context(|| format!("invalid derivation path {:?}", args.path))?;

    debug!(seed_len = seed.len(), %path, "deriving keys");

    let node = Node::new_master(&seed)
        .and_then(|master| master.derive_path(&path))
        .context("derivation failed")?;

    println!("{}", DerivedKeys::new(&path, &node).render(args.format)?);

    Ok(())
}
