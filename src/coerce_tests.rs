//! Tests for best-effort type coercion.

use chrono::{Local, TimeZone};

use crate::time::FixedClock;

use super::*;

fn clock() -> FixedClock {
    FixedClock::new(Local.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap())
}

mod booleans {
    use super::*;

    #[test]
    fn accepted_true_forms() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            let mut field = false;
            assert!(apply(ScalarSlot::Bool(&mut field), raw, &clock()));
            assert!(field, "failed for form: {raw}");
        }
    }

    #[test]
    fn accepted_false_forms() {
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            let mut field = true;
            assert!(apply(ScalarSlot::Bool(&mut field), raw, &clock()));
            assert!(!field, "failed for form: {raw}");
        }
    }

    #[test]
    fn rejected_forms_leave_field_untouched() {
        for raw in ["yes", "no", "TrUe", "2", ""] {
            let mut field = true;
            assert!(!apply(ScalarSlot::Bool(&mut field), raw, &clock()));
            assert!(field, "field modified for form: {raw}");
        }
    }
}

mod integers {
    use super::*;

    #[test]
    fn parses_signed_values() {
        let mut field = 0i64;
        assert!(apply(ScalarSlot::Int(&mut field), "-42", &clock()));
        assert_eq!(field, -42);
    }

    #[test]
    fn parses_unsigned_values() {
        let mut field = 0u64;
        assert!(apply(ScalarSlot::Uint(&mut field), "8080", &clock()));
        assert_eq!(field, 8080);
    }

    #[test]
    fn non_numeric_leaves_prior_value() {
        let mut field = 7i64;
        assert!(!apply(ScalarSlot::Int(&mut field), "not-a-number", &clock()));
        assert_eq!(field, 7);
    }

    #[test]
    fn negative_rejected_for_unsigned() {
        let mut field = 5u64;
        assert!(!apply(ScalarSlot::Uint(&mut field), "-1", &clock()));
        assert_eq!(field, 5);
    }

    #[test]
    fn float_text_rejected_for_int() {
        let mut field = 3i64;
        assert!(!apply(ScalarSlot::Int(&mut field), "3.5", &clock()));
        assert_eq!(field, 3);
    }
}

mod floats {
    use super::*;

    #[test]
    fn parses_decimal_values() {
        let mut field = 0.0f64;
        assert!(apply(ScalarSlot::Float(&mut field), "2.5", &clock()));
        assert!((field - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_integral_text() {
        let mut field = 0.0f64;
        assert!(apply(ScalarSlot::Float(&mut field), "-3", &clock()));
        assert!((field + 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn garbage_leaves_prior_value() {
        let mut field = 1.5f64;
        assert!(!apply(ScalarSlot::Float(&mut field), "1.2.3", &clock()));
        assert!((field - 1.5).abs() < f64::EPSILON);
    }
}

mod strings {
    use super::*;

    #[test]
    fn assigns_plain_text() {
        let mut field = String::new();
        assert!(apply(ScalarSlot::Text(&mut field), "hello", &clock()));
        assert_eq!(field, "hello");
    }

    #[test]
    fn expands_placeholders_before_assignment() {
        let mut field = String::new();
        assert!(apply(
            ScalarSlot::Text(&mut field),
            "built on {{date:0,0,-1}}",
            &clock()
        ));
        assert_eq!(field, "built on 2024-03-14");
    }

    #[test]
    fn malformed_placeholder_kept_verbatim() {
        let mut field = String::new();
        assert!(apply(
            ScalarSlot::Text(&mut field),
            "{{date:bad}}",
            &clock()
        ));
        assert_eq!(field, "{{date:bad}}");
    }
}
