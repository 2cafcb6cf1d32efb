use proptest::prelude::*;
use quantmd_types::{ErrorCode, FormattedValue, QuantmdError, RangeSummary, ReducedFraction};

proptest! {
    #[test]
    fn reduced_fraction_serde_round_trips(n in -10_000i64..10_000, d in 1i64..10_000) {
        let frac = ReducedFraction { numerator: n, denominator: d };
        let json = serde_json::to_string(&frac).unwrap();
        let back: ReducedFraction = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(frac, back);
    }

    #[test]
    fn formatted_value_serde_round_trips(text in "[0-9.%-]{1,12}", exact in any::<bool>()) {
        let value = FormattedValue { text, exact };
        let json = serde_json::to_string(&value).unwrap();
        let back: FormattedValue = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(value, back);
    }

    #[test]
    fn range_summary_serde_round_trips(min in -1e6f64..1e6, spread in 0.0f64..1e6) {
        let range = RangeSummary { min, max: min + spread, diff: spread };
        let json = serde_json::to_string(&range).unwrap();
        let back: RangeSummary = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(range, back);
    }

    #[test]
    fn error_json_always_carries_a_code(op in "[a-z]{1,10}") {
        let err = QuantmdError::empty_input(&op);
        prop_assert!(err.to_json().contains("\"code\":\"empty_input\""));
        prop_assert_eq!(err.code, ErrorCode::EmptyInput);
    }
}
