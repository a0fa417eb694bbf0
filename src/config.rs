//! Runtime configuration
//!
//! Collected from command-line flags and environment in `main`, then used to
//! pick and build the word service.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::core::Word;
use crate::service::{DEFAULT_API_BASE, HttpWordService, OfflineWordService, WordService};
use crate::wordlists::loader::{embedded_words, load_from_file};

/// Settings shared by every front-end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Base URL of the word API
    pub api_base: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Use the local dictionary instead of the API
    pub offline: bool,
    /// Fixed secret for offline games
    pub secret: Option<String>,
    /// Dictionary file for offline games
    pub wordlist: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: None,
            offline: false,
            secret: None,
            wordlist: None,
        }
    }
}

impl GameConfig {
    /// Build the word service these settings describe
    ///
    /// # Errors
    ///
    /// Returns an error if offline-only options are used online, the fixed
    /// secret is not a 5-letter word, or the dictionary file cannot be read.
    pub fn build_service(&self) -> Result<Arc<dyn WordService>> {
        if !self.offline {
            if self.secret.is_some() || self.wordlist.is_some() {
                bail!("--secret and --wordlist only apply with --offline");
            }
            info!(api_base = %self.api_base, timeout = ?self.timeout, "using remote word service");
            return Ok(Arc::new(HttpWordService::new(&self.api_base, self.timeout)));
        }

        let words = match &self.wordlist {
            Some(path) => load_from_file(path)
                .with_context(|| format!("Failed to read word list {}", path.display()))?,
            None => embedded_words(),
        };
        if words.is_empty() && self.secret.is_none() {
            bail!("Offline word list contains no 5-letter words");
        }

        let mut service = OfflineWordService::new(words);
        if let Some(secret) = &self.secret {
            let secret = Word::new(secret).with_context(|| format!("Invalid secret '{secret}'"))?;
            service = service.with_secret(secret);
        }
        info!(words = service.len(), "using offline dictionary");
        Ok(Arc::new(service))
    }
}
