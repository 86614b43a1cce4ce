use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "slip10-cli",
    about = "SLIP-0010 ed25519 hardened key derivation",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
    Derive(DeriveArgs),

    Validate(ValidateArgs),
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Derive the key pair at a hardened path from a hex seed", version)]
pub(crate) struct DeriveArgs {
    #[arg(long, env = "SLIP10_SEED", help = "the seed, hex encoded")]
    pub(crate) seed: String,

    #[arg(
        long,
        env = "SLIP10_PATH",
        default_value = "m",
        help = "the derivation path, e.g. m/44'/501'/0'"
    )]
    pub(crate) path: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "output format")]
    pub(crate) format: OutputFormat,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Check whether a derivation path is valid", version)]
pub(crate) struct ValidateArgs {
    #[arg(help = "the derivation path to check")]
    pub(crate) path: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}
