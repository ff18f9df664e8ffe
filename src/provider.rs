//! Ranked key/value lookup sources.
//!
//! A [`ProviderChain`] holds an ordered list of [`KeyValueProvider`]s;
//! resolving a key queries them in priority order (lower index = higher
//! priority) and returns the first non-empty value, falling back to a
//! caller-supplied default literal.
//!
//! The chain is a plain value owned by its caller (typically the
//! [`Resolver`](crate::resolve::Resolver)). It is intended to be
//! configured once at startup, before any resolution takes place; chain
//! mutation is not synchronized against concurrent lookups.

use std::collections::HashMap;

/// A ranked source of key → value lookups.
///
/// Implementations return `None` when the key is not set. An empty
/// string value is treated as not-found by the chain, so providers may
/// also signal absence that way.
pub trait KeyValueProvider: Send + Sync {
    /// Fetches the value for the specified key, or `None` if not set.
    fn get(&self, key: &str) -> Option<String>;
}

/// Provider backed by the process environment.
///
/// Reads values by exact key name; an empty or unset variable signals
/// "not set."
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvProvider;

impl KeyValueProvider for EnvProvider {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }
}

/// Provider backed by an in-memory map populated by the application.
#[derive(Debug, Clone, Default)]
pub struct MapProvider {
    store: HashMap<String, String>,
}

impl MapProvider {
    /// Creates an empty map provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value in the map. The key should match a field's bound
    /// external key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.store.insert(key.into(), value.into());
    }
}

impl KeyValueProvider for MapProvider {
    fn get(&self, key: &str) -> Option<String> {
        self.store.get(key).cloned()
    }
}

/// Ordered list of providers consulted during resolution.
///
/// Position in the chain defines priority: the provider at index 0 is
/// consulted first, and the first non-empty value wins.
#[derive(Default)]
pub struct ProviderChain {
    providers: Vec<Box<dyn KeyValueProvider>>,
}

impl ProviderChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a provider at the lowest priority (end of the chain).
    pub fn push(&mut self, provider: Box<dyn KeyValueProvider>) {
        self.providers.push(provider);
    }

    /// Removes all providers. Used to reset state between test runs.
    pub fn clear(&mut self) {
        self.providers.clear();
    }

    /// Returns the number of providers in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns `true` if the chain has no providers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Returns the highest-priority non-empty value for `key`.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.providers
            .iter()
            .find_map(|p| p.get(key).filter(|v| !v.is_empty()))
    }

    /// Returns the highest-priority non-empty value for `key`, or
    /// `fallback` when no provider has one.
    #[must_use]
    pub fn resolve(&self, key: &str, fallback: &str) -> String {
        self.lookup(key)
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl std::fmt::Debug for ProviderChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderChain")
            .field("len", &self.providers.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
