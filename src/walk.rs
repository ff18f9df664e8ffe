//! Depth-bounded structural traversal of configuration records.
//!
//! The walker visits every field a record describes, resolves bound
//! fields through the provider chain, and applies typed values in place.
//! The walk never errors: per-field failures degrade to "leave as-is"
//! plus a diagnostic entry in the [`ResolveReport`].

use crate::coerce;
use crate::provider::ProviderChain;
use crate::resolve::{ResolveReport, SkipReason};
use crate::schema::{ConfigSection, FieldSlot};
use crate::time::Clock;

/// Walks `section`, resolving each bound field through `chain`.
///
/// `depth` counts remaining descents: the section passed in is always
/// visited, and an unbound nested record is recursed into only while
/// `depth > 0`. Fields below the limit keep their pre-walk values.
pub fn walk_section(
    section: &mut dyn ConfigSection,
    depth: u32,
    chain: &ProviderChain,
    clock: &dyn Clock,
    report: &mut ResolveReport,
) {
    for field in section.fields() {
        tracing::debug!("walk[{depth}]: {}", field.name);

        let Some(key) = field.key else {
            // Unbound fields are recursed into when they are nested
            // records with depth remaining, otherwise skipped
            if let FieldSlot::Nested(nested) = field.slot {
                if depth > 0 {
                    walk_section(nested, depth - 1, chain, clock, report);
                }
            }
            continue;
        };

        let resolved = chain.resolve(key, field.default.unwrap_or(""));
        if resolved.is_empty() {
            continue;
        }

        match field.slot {
            FieldSlot::Scalar(slot) => {
                tracing::debug!("setting {} to {resolved}", field.name);
                if !coerce::apply(slot, &resolved, clock) {
                    tracing::debug!("value for {} did not parse, keeping prior value", field.name);
                    report.push_skipped(field.name, key, SkipReason::Unparsable { raw: resolved });
                }
            }
            FieldSlot::Nested(_) => {
                tracing::warn!(
                    "no coercion available for field {} (kind = section)",
                    field.name
                );
                report.push_skipped(field.name, key, SkipReason::NoCoercion { kind: "section" });
            }
            FieldSlot::Opaque { kind } => {
                tracing::warn!(
                    "no coercion available for field {} (kind = {kind})",
                    field.name
                );
                report.push_skipped(field.name, key, SkipReason::NoCoercion { kind });
            }
        }
    }
}

#[cfg(test)]
#[path = "walk_tests.rs"]
mod tests;
