use anyhow::{Context, Result};
use std::io::Write;

use crate::key::{initialize, KeyPair};
use crate::length::get_length;

/// Initialize the key pair, then print the public key's length (or -1).
pub fn run<W: Write>(out: &mut W, keys: &KeyPair) -> Result<i64> {
    initialize(keys).context("initializing key pair")?; // What does initialize() do? Hover to see.

    let len = get_length(out, keys.public.as_str(), &keys.private);
    writeln!(out, "{}", len).context("writing length")?;
    log::debug!("reported length {}", len);
    Ok(len)
}
