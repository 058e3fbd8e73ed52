//! Immutable catalog of canned messages.

use super::random::RandomSource;
use std::sync::Arc;
use thiserror::Error;

/// Messages served when no catalog override is configured.
pub const DEFAULT_MESSAGES: [&str; 4] = [
    "Hello World",
    "Ala ma kota",
    "Hello Spring World",
    "Secret message for your eyes only",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("message catalog must contain at least one message")]
    Empty,
}

/// Ordered, non-empty list of messages fixed at startup.
///
/// Cloning shares the underlying storage.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    messages: Arc<[String]>,
}

impl MessageCatalog {
    // ---
    /// Builds a catalog, rejecting an empty message list.
    pub fn new<I, S>(messages: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // ---
        let messages: Arc<[String]> = messages.into_iter().map(Into::into).collect();
        if messages.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { messages })
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.messages.get(index).map(String::as_str)
    }

    /// Picks a message uniformly at random from the catalog.
    pub fn choose(&self, random: &dyn RandomSource) -> &str {
        // ---
        let index = random.next_below(self.messages.len() as u64) as usize;
        &self.messages[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            messages: DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect(),
        }
    }
}
