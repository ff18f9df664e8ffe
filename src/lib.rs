//! Confweave: layered configuration resolution.
//!
//! A library for resolving strongly-typed configuration records by merging
//! values from ranked sources: built-in defaults, an optional JSON file,
//! environment variables, and programmatic overrides.
//!
//! # Resolution
//!
//! Configuration values are resolved with the following priority
//! (highest to lowest):
//!
//! 1. **Environment variables** - Values set in the process environment
//! 2. **Programmatic overrides** - Values supplied via [`resolve::Overrides`]
//! 3. **Field default literals** - Declared in the record's field bindings
//! 4. **Pre-existing values** - Whatever the record held before resolution
//!
//! Record types declare their externally configurable fields through the
//! [`schema::ConfigSection`] trait; the [`resolve::Resolver`] walks the
//! record, consults the provider chain per bound field, expands embedded
//! `{{date:..}}` / `{{time:..}}` placeholders in string values, and applies
//! typed values in place. Per-field problems never fail resolution: they
//! degrade to "keep the existing value" and are collected in a
//! [`resolve::ResolveReport`].

pub mod coerce;
pub mod error;
pub mod expand;
pub mod file;
pub mod provider;
pub mod resolve;
pub mod schema;
pub mod time;
pub mod walk;

pub use error::ConfigError;
pub use resolve::{Overrides, ResolveReport, Resolver};
pub use schema::{ConfigSection, FieldSlot, FieldSpec, ScalarSlot};
