use clap::{Args, Parser, Subcommand};

use crate::defaults::Defaults;
use crate::key::KeyPair;

/// Key-length checker that leaks its private key. Find out where.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Does this program leak the private key?",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Command>,

    /// Used when no subcommand is given (same as `demo`)
    #[command(flatten)]
    pub demo: DemoArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the key pair, then report the public key's length
    Demo(DemoArgs),

    /// Check whether an arbitrary key has a valid length
    Check {
        /// Key to check
        #[arg(long)]
        key: String,

        /// Print the report as pretty JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    /// Private key material
    #[arg(
        long,
        env = Defaults::SECRET_ENV,
        default_value = Defaults::SECRET_KEY,
        hide_env_values = true,
        hide_default_value = true
    )]
    pub secret: String,

    /// Public key material
    #[arg(long, env = Defaults::PUBLIC_ENV, default_value = Defaults::PUBLIC_KEY)]
    pub public: String,
}

impl DemoArgs {
    pub fn into_key_pair(self) -> KeyPair {
        KeyPair::new(self.secret, self.public)
    }
}
