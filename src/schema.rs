//! Field binding metadata for configuration records.
//!
//! Record types describe their fields through the [`ConfigSection`] trait
//! instead of runtime reflection: each field reports its name, the external
//! key it is bound to (if any), an optional default literal, and a mutable
//! slot through which the resolved value is written in place.
//!
//! # Example
//!
//! ```
//! use confweave::schema::{ConfigSection, FieldSpec, ScalarSlot};
//!
//! #[derive(Default)]
//! struct Server {
//!     host: String,
//!     port: u64,
//! }
//!
//! impl ConfigSection for Server {
//!     fn fields(&mut self) -> Vec<FieldSpec<'_>> {
//!         vec![
//!             FieldSpec::bound("host", "SERVER_HOST", ScalarSlot::Text(&mut self.host))
//!                 .with_default("localhost"),
//!             FieldSpec::bound("port", "SERVER_PORT", ScalarSlot::Uint(&mut self.port)),
//!         ]
//!     }
//! }
//! ```

/// A mutable reference to a scalar configuration field.
///
/// Each variant corresponds to a primitive kind with a registered
/// coercion. Field types outside this set are declared as
/// [`FieldSlot::Opaque`] and skipped with a warning during resolution.
#[derive(Debug)]
pub enum ScalarSlot<'a> {
    /// Boolean field.
    Bool(&'a mut bool),
    /// Signed integer field.
    Int(&'a mut i64),
    /// Unsigned integer field.
    Uint(&'a mut u64),
    /// Floating point field.
    Float(&'a mut f64),
    /// String field. Placeholder tokens are expanded before assignment.
    Text(&'a mut String),
}

impl ScalarSlot<'_> {
    /// Returns the kind name used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Text(_) => "string",
        }
    }
}

/// The writable target of a configuration field.
pub enum FieldSlot<'a> {
    /// A scalar field with a registered coercion.
    Scalar(ScalarSlot<'a>),
    /// A nested record. Recursed into when the field is unbound and
    /// traversal depth remains.
    Nested(&'a mut dyn ConfigSection),
    /// A field whose type has no registered coercion.
    ///
    /// `kind` names the type in the warning emitted when a value
    /// resolves for the field.
    Opaque {
        /// Human-readable type name for diagnostics.
        kind: &'static str,
    },
}

impl std::fmt::Debug for FieldSlot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(slot) => f.debug_tuple("Scalar").field(slot).finish(),
            Self::Nested(_) => f.write_str("Nested(..)"),
            Self::Opaque { kind } => f.debug_struct("Opaque").field("kind", kind).finish(),
        }
    }
}

/// Per-field binding metadata: name, external key, default literal, and
/// the slot the resolved value is written through.
///
/// An absent key means the field is not externally configurable; nested
/// records without a key are recursed into instead.
#[derive(Debug)]
pub struct FieldSpec<'a> {
    /// Field name, used in trace and diagnostic output.
    pub name: &'static str,
    /// External key the field is bound to, if any.
    pub key: Option<&'static str>,
    /// Default literal used when no provider yields a value.
    pub default: Option<&'static str>,
    /// Writable target for the resolved value.
    pub slot: FieldSlot<'a>,
}

impl<'a> FieldSpec<'a> {
    /// Creates a binding for a scalar field resolved through `key`.
    #[must_use]
    pub const fn bound(name: &'static str, key: &'static str, slot: ScalarSlot<'a>) -> Self {
        Self {
            name,
            key: Some(key),
            default: None,
            slot: FieldSlot::Scalar(slot),
        }
    }

    /// Creates a binding for an unbound nested record to recurse into.
    #[must_use]
    pub fn nested(name: &'static str, section: &'a mut dyn ConfigSection) -> Self {
        Self {
            name,
            key: None,
            default: None,
            slot: FieldSlot::Nested(section),
        }
    }

    /// Creates a binding for a field without a registered coercion.
    ///
    /// The field is skipped with a warning if a value resolves for it.
    #[must_use]
    pub const fn opaque(name: &'static str, key: &'static str, kind: &'static str) -> Self {
        Self {
            name,
            key: Some(key),
            default: None,
            slot: FieldSlot::Opaque { kind },
        }
    }

    /// Sets the default literal used when no provider yields a value.
    #[must_use]
    pub const fn with_default(mut self, literal: &'static str) -> Self {
        self.default = Some(literal);
        self
    }
}

/// A configuration record that can describe its fields for resolution.
///
/// Implementors return one [`FieldSpec`] per field, borrowing each field
/// mutably so resolution writes values in place without allocating a new
/// record. Fields that should never be externally resolved are simply
/// omitted from the list.
pub trait ConfigSection {
    /// Describes the record's fields.
    fn fields(&mut self) -> Vec<FieldSpec<'_>>;
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
