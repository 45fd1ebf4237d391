use proptest::prelude::*;
use telegraph_tokens::{TokenCounter, TokenReduction};

const MODEL: &str = "gpt-4";

proptest! {
    #[test]
    fn count_never_fails_for_a_known_model(s in ".*") {
        let counter = TokenCounter::default();
        let count = counter.count(&s, MODEL).unwrap();
        prop_assert!(count < usize::MAX);
    }

    #[test]
    fn cached_equals_uncached(s in ".{0,200}") {
        let counter = TokenCounter::default();
        let uncached = counter.count(&s, MODEL).unwrap();
        let cached = counter.count_cached(&s, MODEL).unwrap();
        prop_assert_eq!(uncached, cached);
    }

    #[test]
    fn subadditivity(a in ".{0,100}", b in ".{0,100}") {
        let counter = TokenCounter::default();
        let combined = format!("{}{}", a, b);
        let count_a = counter.count(&a, MODEL).unwrap();
        let count_b = counter.count(&b, MODEL).unwrap();
        let count_combined = counter.count(&combined, MODEL).unwrap();
        prop_assert!(
            count_combined <= count_a + count_b + 1,
            "subadditivity: {} <= {} + {} + 1",
            count_combined, count_a, count_b
        );
    }

    #[test]
    fn count_stays_proportionate_to_input_size(s in ".{1,100}") {
        let counter = TokenCounter::default();
        let count = counter.count(&s, MODEL).unwrap();
        // One token per byte is already pessimistic
        prop_assert!(count <= s.len() * 2 + 10);
    }

    #[test]
    fn percentage_never_exceeds_one_hundred(
        original in 1usize..10_000,
        compressed in 0usize..10_000,
    ) {
        let pct = TokenReduction::new(original, compressed).percentage().unwrap();
        prop_assert!(pct <= 100.0);
    }

    #[test]
    fn percentage_is_positive_iff_tokens_were_saved(
        original in 1usize..10_000,
        compressed in 0usize..10_000,
    ) {
        let pct = TokenReduction::new(original, compressed).percentage().unwrap();
        if compressed < original {
            prop_assert!(pct > 0.0);
        } else if compressed == original {
            prop_assert_eq!(pct, 0.0);
        } else {
            prop_assert!(pct < 0.0);
        }
    }
}
