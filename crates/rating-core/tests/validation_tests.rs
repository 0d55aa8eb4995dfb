//! Tests for input validation across every calculator
//!
//! Every rejected input must surface as `Error::InvalidInput` before any
//! rating is computed.

use rating_core::maimaidx::{self, MaimaiDxLamp};
use rating_core::{proseka, wacca, ContextValue, Error};

fn is_invalid_input<T>(result: rating_core::Result<T>) -> bool {
    matches!(result, Err(Error::InvalidInput { .. }))
}

// =============================================================================
// WACCA
// =============================================================================

mod wacca_validation {
    use super::*;

    #[test]
    fn rejects_negative_score() {
        assert!(is_invalid_input(wacca::calculate(-1, 10.0)));
        assert!(is_invalid_input(wacca::calculate_plus(-1, 10.0)));
    }

    #[test]
    fn rejects_score_above_one_million() {
        assert!(is_invalid_input(wacca::calculate(1_000_001, 10.0)));
        assert!(is_invalid_input(wacca::calculate_plus(1_000_001, 10.0)));
    }

    #[test]
    fn accepts_score_range_edges() {
        assert!(wacca::calculate(0, 10.0).is_ok());
        assert!(wacca::calculate(1_000_000, 10.0).is_ok());
        assert!(wacca::calculate(1_000_000, 0.0).is_ok());
    }

    #[test]
    fn rejects_negative_level() {
        assert!(is_invalid_input(wacca::calculate(900_000, -1.0)));
        assert!(is_invalid_input(wacca::calculate_plus(900_000, -1.0)));
        assert!(is_invalid_input(wacca::inverse(50.0, -1.0)));
        assert!(is_invalid_input(wacca::inverse_plus(50.0, -1.0)));
    }

    #[test]
    fn rejects_unreachable_rate() {
        let err = wacca::inverse(100.0, 1.0).unwrap_err();
        assert_eq!(err.context().get("level"), Some(&ContextValue::Float(1.0)));
        assert!(is_invalid_input(wacca::inverse_plus(100.0, 1.0)));
    }

    #[test]
    fn accepts_top_rate() {
        assert_eq!(wacca::inverse(40.0, 10.0).unwrap(), 990_000);
        assert_eq!(wacca::inverse_plus(40.5, 10.0).unwrap(), 995_000);
    }
}

// =============================================================================
// maimai DX
// =============================================================================

mod maimaidx_validation {
    use super::*;

    #[test]
    fn rejects_negative_score() {
        assert!(is_invalid_input(maimaidx::calculate(-1.0, 10.0, Some(MaimaiDxLamp::Failed))));
    }

    #[test]
    fn rejects_score_above_101() {
        assert!(is_invalid_input(maimaidx::calculate(
            101.5,
            10.0,
            Some(MaimaiDxLamp::AllPerfectPlus)
        )));
    }

    #[test]
    fn rejects_negative_level() {
        assert!(is_invalid_input(maimaidx::calculate(99.5, -1.0, Some(MaimaiDxLamp::Clear))));
    }

    #[test]
    fn rejects_all_perfect_plus_below_101() {
        assert!(is_invalid_input(maimaidx::calculate(
            100.5,
            10.0,
            Some(MaimaiDxLamp::AllPerfectPlus)
        )));
    }

    #[test]
    fn rejects_101_without_all_perfect_plus() {
        for lamp in [
            MaimaiDxLamp::Failed,
            MaimaiDxLamp::Clear,
            MaimaiDxLamp::FullCombo,
            MaimaiDxLamp::FullComboPlus,
            MaimaiDxLamp::AllPerfect,
        ] {
            assert!(is_invalid_input(maimaidx::calculate(101.0, 10.0, Some(lamp))), "{}", lamp);
        }
    }

    #[test]
    fn rejects_all_perfect_below_100_5() {
        assert!(is_invalid_input(maimaidx::calculate(
            100.4,
            10.0,
            Some(MaimaiDxLamp::AllPerfect)
        )));
    }

    #[test]
    fn checks_run_in_order() {
        // Both the range check and the lamp check fail; range wins.
        let err = maimaidx::calculate(-1.0, 10.0, Some(MaimaiDxLamp::AllPerfectPlus)).unwrap_err();
        assert_eq!(err.message(), "Score cannot be negative.");

        // Level check precedes lamp consistency.
        let err = maimaidx::calculate(100.0, -1.0, Some(MaimaiDxLamp::AllPerfect)).unwrap_err();
        assert_eq!(err.message(), "Internal chart level cannot be negative.");
    }
}

// =============================================================================
// Project SEKAI
// =============================================================================

mod proseka_validation {
    use super::*;

    type Calc = fn(i64, i64, i64, i64, i64, f64, i64) -> rating_core::Result<f64>;

    const RULESETS: [Calc; 2] = [proseka::calculate, proseka::calculate_plus];

    #[test]
    fn rejects_each_negative_field() {
        for calc in RULESETS {
            let cases = [
                (calc(-1, 0, 0, 0, 0, 10.0, 300), "perfect"),
                (calc(0, -1, 0, 0, 0, 10.0, 300), "great"),
                (calc(0, 0, -1, 0, 0, 10.0, 300), "good"),
                (calc(0, 0, 0, -1, 0, 10.0, 300), "bad"),
                (calc(0, 0, 0, 0, -1, 10.0, 300), "miss"),
                (calc(0, 0, 0, 0, 0, 10.0, -1), "max_combo"),
                (calc(0, 0, 0, 0, 0, -1.0, 300), "level"),
            ];
            for (result, field) in cases {
                let err = result.unwrap_err();
                assert!(err.context().get(field).is_some(), "missing context for {}", field);
            }
        }
    }

    #[test]
    fn rejects_score_above_maximum() {
        for calc in RULESETS {
            assert!(is_invalid_input(calc(300, 1, 0, 0, 0, 10.0, 300)));
        }
    }

    #[test]
    fn accepts_full_marks() {
        for calc in RULESETS {
            assert!(calc(300, 0, 0, 0, 0, 10.0, 300).is_ok());
            assert!(calc(0, 0, 0, 0, 300, 0.0, 300).is_ok());
        }
    }
}
