//! API key wrapper: validated once at the boundary, redacted in debug output.

use std::fmt;

/// Errors when accepting a credential.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("API key is required")]
    Missing,
}

/// A non-blank API key. Held in memory only for the duration of a fetch.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    /// Trim the raw input; blank input is rejected.
    pub fn new(raw: &str) -> Result<Self, CredentialError> {
        let key = raw.trim();
        if key.is_empty() {
            return Err(CredentialError::Missing);
        }
        Ok(Self(key.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(****)")
    }
}
