//! Session-scoped credential storage
//!
//! Holds the generation API key for the lifetime of the process only.
//! The token is passed explicitly into the generation client rather than
//! read from ambient state, and it is cleared whenever the generator
//! reports it invalid so the front end re-prompts before the next call.

use secrecy::SecretString;

/// In-memory store for the generation API key
#[derive(Default)]
pub struct CredentialStore {
    token: Option<SecretString>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly entered token
    pub fn set(&mut self, token: String) {
        self.token = Some(SecretString::new(token));
    }

    /// The current token, if one has been entered this session
    pub fn get(&self) -> Option<&SecretString> {
        self.token.as_ref()
    }

    pub fn is_present(&self) -> bool {
        self.token.is_some()
    }

    /// Forget the token; called when the generator rejects it
    pub fn clear(&mut self) {
        self.token = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_store_lifecycle() {
        let mut store = CredentialStore::new();
        assert!(!store.is_present());
        assert!(store.get().is_none());

        store.set("test-key".to_string());
        assert!(store.is_present());
        assert_eq!(store.get().unwrap().expose_secret(), "test-key");

        store.clear();
        assert!(!store.is_present());
    }

    #[test]
    fn test_set_replaces_previous_token() {
        let mut store = CredentialStore::new();
        store.set("old".to_string());
        store.set("new".to_string());
        assert_eq!(store.get().unwrap().expose_secret(), "new");
    }
}
