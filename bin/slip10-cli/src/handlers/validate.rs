//! Checks a derivation path without deriving anything.

use anyhow::{bail, Result};
use slip10_ed25519::DerivationPath;

use crate::cli::ValidateArgs;

/// Handles the validate command.
///
/// Fails when the path is invalid, so the process exits non-zero.
pub(crate) fn handle_validate(args: ValidateArgs) -> Result<()> {
    println!("{}", check_path(&args.path)?);
    Ok(())
}

fn check_path(path: &str) -> Result<String> {
    match path.parse::<DerivationPath>() {
        Ok(parsed) => Ok(format!("valid: {parsed} (depth {})", parsed.len())),
        Err(e) => bail!("invalid derivation path {path:?}: {e}"),
    }
}
