//! Property-based tests for the alphanumeric ordering.

use std::cmp::Ordering;

use alnum_cmp::{compare, compare_str, sort, sort_sequence, try_compare, Strings};
use proptest::prelude::*;

/// Short letter prefix followed by an optional digit run, e.g. `ab017`.
fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-c]{0,3}[0-9]{0,4}"
}

/// Digits, letters and separators in any order, e.g. `1a0`, `0.2b1`.
fn mixed_strategy() -> impl Strategy<Value = String> {
    "[a-c0-2.]{0,6}"
}

proptest! {
    #[test]
    fn test_reflexive_equal(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        prop_assert_eq!(compare(&bytes, &bytes), Ordering::Equal);
    }

    #[test]
    fn test_antisymmetric(
        a in prop::collection::vec(any::<u8>(), 0..32),
        b in prop::collection::vec(any::<u8>(), 0..32),
    ) {
        let ab = compare(&a, &b);
        prop_assert_eq!(ab, compare(&a, &b));
        prop_assert_eq!(ab, compare(&b, &a).reverse());
    }

    #[test]
    fn test_equal_only_when_identical(a in any::<String>(), b in any::<String>()) {
        prop_assert_eq!(compare_str(&a, &b) == Ordering::Equal, a == b);
    }

    #[test]
    fn test_strict_agrees_on_valid_input(a in any::<String>(), b in any::<String>()) {
        prop_assert_eq!(try_compare(a.as_bytes(), b.as_bytes()), Ok(compare_str(&a, &b)));
    }

    #[test]
    fn test_embedded_numbers(n in any::<u64>(), m in any::<u64>()) {
        let a = format!("file{n}.txt");
        let b = format!("file{m}.txt");
        prop_assert_eq!(compare_str(&a, &b), n.cmp(&m));
    }

    #[test]
    fn test_long_digit_runs(a in "[1-9][0-9]{0,79}", b in "[1-9][0-9]{0,79}") {
        let expected = (a.len(), &a).cmp(&(b.len(), &b));
        prop_assert_eq!(compare_str(&a, &b), expected);
    }

    #[test]
    fn test_transitive(
        a in identifier_strategy(),
        b in identifier_strategy(),
        c in identifier_strategy(),
    ) {
        if compare_str(&a, &b) == Ordering::Less && compare_str(&b, &c) == Ordering::Less {
            prop_assert_eq!(compare_str(&a, &c), Ordering::Less);
        }
    }

    #[test]
    fn test_transitive_mixed(
        a in mixed_strategy(),
        b in mixed_strategy(),
        c in mixed_strategy(),
    ) {
        let ab = compare_str(&a, &b);
        let bc = compare_str(&b, &c);
        let ac = compare_str(&a, &c);
        if ab != Ordering::Greater && bc != Ordering::Greater {
            prop_assert_ne!(ac, Ordering::Greater, "{:?} <= {:?} <= {:?}", a, b, c);
        }
        if ab == Ordering::Less && bc == Ordering::Less {
            prop_assert_eq!(ac, Ordering::Less, "{:?} < {:?} < {:?}", a, b, c);
        }
    }

    #[test]
    fn test_sorters_agree_mixed(items in prop::collection::vec(mixed_strategy(), 0..24)) {
        let mut by_slice = items.clone();
        sort(&mut by_slice);

        let mut by_sequence = items;
        sort_sequence(&mut Strings::new(&mut by_sequence));

        prop_assert_eq!(&by_slice, &by_sequence);
        for pair in by_slice.windows(2) {
            prop_assert_ne!(compare_str(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn test_sorters_agree(items in prop::collection::vec(identifier_strategy(), 0..24)) {
        let mut by_slice = items.clone();
        sort(&mut by_slice);

        let mut by_sequence = items;
        sort_sequence(&mut Strings::new(&mut by_sequence));

        prop_assert_eq!(&by_slice, &by_sequence);
        for pair in by_slice.windows(2) {
            prop_assert_ne!(compare_str(&pair[0], &pair[1]), Ordering::Greater);
        }
    }
}
