use std::io::Write;

use crate::defaults::Defaults;
use crate::key::PrivateKey;

/// Whether or not the key is exactly 64 characters long.
pub fn check_length(key: &str) -> bool {
    key.chars().count() == Defaults::VALID_KEY_LEN
}

/// Length of the key, or -1 if invalid.
///
/// On the invalid branch the *private* key goes to `out`. That is the leak this demo is about.
pub fn get_length<W: Write>(out: &mut W, key: &str, secret: &PrivateKey) -> i64 {
    if check_length(key) {
        return key.chars().count() as i64;
    }

    log::warn!("key rejected: length {} != {}", key.chars().count(), Defaults::VALID_KEY_LEN);
    // Does this leak the private key? Which key is it?
    let _ = writeln!(out, "{}", secret.expose());
    -1
}
