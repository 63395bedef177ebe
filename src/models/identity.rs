//! User identity derivation
//!
//! A raw login (email address or phone number) is turned into a key that is
//! safe to embed in a file name. The same input always yields the same key,
//! since the key is how a returning user's files are found again.
//!
//! The default scheme substitutes `@`, `.` and `+` with `_at_`, `_dot_` and
//! `_plus_`; path separators become `_slash_`. It is lossy: `a@b.com` and
//! `a_at_b_dot_com` map to the same key. Existing data files are named with
//! it, so it stays the default. [`UserId::derive_strict`] escapes underscores
//! first and gives `\` its own `_bslash_` marker, so distinct inputs always
//! get distinct keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage key for one user's data
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Derive a key using the substitution scheme existing files are named with
    pub fn derive(raw: &str) -> Self {
        Self(substitute(raw.trim(), "_slash_"))
    }

    /// Derive a key that is injective over all inputs
    ///
    /// Literal underscores are doubled before substitution, so a substituted
    /// marker like `_at_` can never be produced by the raw text itself.
    pub fn derive_strict(raw: &str) -> Self {
        Self(substitute(&raw.trim().replace('_', "__"), "_bslash_"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn substitute(raw: &str, backslash: &str) -> String {
    let mut key = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        match c {
            '@' => key.push_str("_at_"),
            '.' => key.push_str("_dot_"),
            '+' => key.push_str("_plus_"),
            '/' => key.push_str("_slash_"),
            '\\' => key.push_str(backslash),
            c => key.push(c),
        }
    }
    key
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
