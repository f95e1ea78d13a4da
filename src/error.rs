use std::fmt;
use thiserror::Error;

/// Which half of the key pair an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Private,
    Public,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Private => f.write_str("private"),
            KeyKind::Public => f.write_str("public"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum KeyError {
    #[error("empty {which} key")]
    Empty { which: KeyKind },
}
