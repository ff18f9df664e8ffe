//! Best-effort coercion of raw textual values into typed fields.
//!
//! Each supported primitive kind has a parsing rule; on parse failure the
//! field is left unmodified and no error is propagated. Configuration
//! resolution favors availability over strictness: a bad value in one
//! source must not prevent the rest of the record from resolving.

use crate::expand::expand;
use crate::schema::ScalarSlot;
use crate::time::Clock;

/// Applies `raw` to the scalar slot using kind-appropriate parsing.
///
/// String slots are first passed through placeholder expansion against
/// `clock`. Returns `false` when the value did not parse and the field
/// was left at its prior value.
pub fn apply(slot: ScalarSlot<'_>, raw: &str, clock: &dyn Clock) -> bool {
    match slot {
        ScalarSlot::Bool(field) => assign(field, parse_bool(raw)),
        ScalarSlot::Int(field) => assign(field, raw.parse().ok()),
        ScalarSlot::Uint(field) => assign(field, raw.parse().ok()),
        ScalarSlot::Float(field) => assign(field, raw.parse().ok()),
        ScalarSlot::Text(field) => {
            *field = expand(raw, clock);
            true
        }
    }
}

fn assign<T>(field: &mut T, parsed: Option<T>) -> bool {
    match parsed {
        Some(value) => {
            *field = value;
            true
        }
        None => false,
    }
}

/// Parses the accepted boolean literal forms:
/// `1`, `t`, `T`, `TRUE`, `true`, `True`, `0`, `f`, `F`, `FALSE`,
/// `false`, `False`.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "coerce_tests.rs"]
mod tests;
