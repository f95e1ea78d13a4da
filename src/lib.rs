//! Does this program leak the private key?
//!
//! A small key-length checker meant to be read with hover docs,
//! jump-to-definition and find-references.

pub mod cli;
pub mod commands;
pub mod defaults;
pub mod error;
pub mod key;
pub mod length;

pub use error::{KeyError, KeyKind};
pub use key::{initialize, KeyPair, PrivateKey, PublicKey};
pub use length::{check_length, get_length};
