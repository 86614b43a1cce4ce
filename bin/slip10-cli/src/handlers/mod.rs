//! Subcommand handlers.

pub(crate) mod derive;
pub(crate) mod validate;
