//! Resolution driver: orchestrates the provider chain and the walker.
//!
//! A [`Resolver`] owns the provider chain, seeded with the environment
//! provider and a map provider holding programmatic [`Overrides`].
//! Environment values outrank programmatic overrides; both outrank field
//! default literals. [`Resolver::apply`] runs one walker pass over a
//! record and returns a [`ResolveReport`] describing anything that was
//! silently skipped. Resolution itself is infallible by design.

use crate::provider::{EnvProvider, KeyValueProvider, MapProvider, ProviderChain};
use crate::schema::ConfigSection;
use crate::time::{Clock, SystemClock};
use crate::walk::walk_section;

/// Default maximum recursion depth for record traversal.
///
/// Counts descents below the top-level record; nesting deeper than this
/// keeps its pre-walk values.
pub const DEFAULT_MAX_DEPTH: u32 = 4;

/// Programmatic override values, keyed like environment variables.
///
/// Collected with a builder and handed to [`Resolver::new`], where they
/// seed a map provider ranked just below the environment:
///
/// ```
/// use confweave::resolve::{Overrides, Resolver};
///
/// let resolver = Resolver::new(
///     Overrides::new()
///         .set("COMMIT", "xe32sdf")
///         .set("BRANCH", "main"),
/// );
/// # let _ = resolver;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    map: MapProvider,
}

impl Overrides {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a default value for a key. The key should match a field's
    /// bound external key (e.g. `BUILD_NUMBER`).
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.map.set(key, value);
        self
    }
}

/// Why a field was left at its prior value during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The resolved raw value did not parse for the field's kind.
    Unparsable {
        /// The raw value that failed to parse.
        raw: String,
    },
    /// The field's kind has no registered coercion.
    NoCoercion {
        /// Human-readable kind name.
        kind: &'static str,
    },
}

/// One field that resolution skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// Field name as declared in its binding.
    pub field: &'static str,
    /// The external key the field is bound to.
    pub key: &'static str,
    /// Why the field kept its prior value.
    pub reason: SkipReason,
}

/// Structured diagnostics from one resolution pass.
///
/// Best-effort resolution never fails, but it records what it dropped so
/// callers and tests can assert on silently skipped fields instead of
/// losing that information.
#[derive(Debug, Default)]
pub struct ResolveReport {
    skipped: Vec<Skipped>,
}

impl ResolveReport {
    /// Returns the fields that kept their prior values.
    #[must_use]
    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }

    /// Returns `true` if nothing was skipped.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    pub(crate) fn push_skipped(
        &mut self,
        field: &'static str,
        key: &'static str,
        reason: SkipReason,
    ) {
        self.skipped.push(Skipped { field, key, reason });
    }
}

/// Orchestrates configuration resolution over a record.
///
/// Holds the provider chain, the clock used for placeholder expansion,
/// and the traversal depth limit. Construct once at startup, then call
/// [`apply`](Self::apply) on a defaults-populated record; re-running
/// resolution produces a fresh merge since providers are consulted live.
pub struct Resolver {
    chain: ProviderChain,
    clock: Box<dyn Clock>,
    max_depth: u32,
}

impl Resolver {
    /// Creates a resolver whose chain consults the process environment
    /// first, then the programmatic `overrides`.
    #[must_use]
    pub fn new(overrides: Overrides) -> Self {
        let mut chain = ProviderChain::new();
        chain.push(Box::new(EnvProvider));
        chain.push(Box::new(overrides.map));

        Self {
            chain,
            clock: Box::new(SystemClock),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replaces the clock used for placeholder expansion.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the maximum traversal depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Appends a provider at the lowest priority of the chain.
    pub fn add_provider(&mut self, provider: Box<dyn KeyValueProvider>) {
        self.chain.push(provider);
    }

    /// Removes all providers from the chain. Used to reset state, e.g.
    /// between test runs.
    pub fn clear_providers(&mut self) {
        self.chain.clear();
    }

    /// Returns the provider chain for direct lookups.
    #[must_use]
    pub const fn chain(&self) -> &ProviderChain {
        &self.chain
    }

    /// Resolves `record` in place: one walker pass consulting the
    /// provider chain per bound field, expanding placeholders and
    /// coercing typed values.
    ///
    /// Never fails; per-field problems are reported in the returned
    /// [`ResolveReport`] and the affected fields keep their prior values.
    pub fn apply(&self, record: &mut dyn ConfigSection) -> ResolveReport {
        let mut report = ResolveReport::default();
        walk_section(
            record,
            self.max_depth,
            &self.chain,
            self.clock.as_ref(),
            &mut report,
        );
        report
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(Overrides::new())
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("chain", &self.chain)
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
