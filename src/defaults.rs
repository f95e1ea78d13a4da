//! Central place for the demo's default values.
//! Update these and the whole app picks them up.

pub struct Defaults;

impl Defaults {
    /* Key material */
    // Is the private key ever leaked? Find references on `PrivateKey::expose` to see.
    pub const SECRET_KEY: &'static str = "abcsecret!";
    pub const PUBLIC_KEY: &'static str = "abcpublic";

    /* Validation */
    pub const VALID_KEY_LEN: usize = 64;

    /* Env overrides */
    pub const SECRET_ENV: &'static str = "KEYLEAK_SECRET";
    pub const PUBLIC_ENV: &'static str = "KEYLEAK_PUBLIC";

    /* Logging */
    pub const LOG_FILTER: &'static str = "warn";
}
