use crate::base;

pub const BOUNDING_SPACES_COUNT: usize = 2;
pub const MIN_DASHES_COUNT: usize = 2;
pub const MIN_TERM_WIDTH: usize = 60;

pub const fn count_digits(n: u64) -> usize {
    if n >= 10000000000000000000 {
        return 20;
    }
    let mut count = 1;
    let mut ceil = 10;
    while n >= ceil {
        ceil *= 10;
        count += 1;
    }
    count
}

/// Number of chars needed to print `label -- amount` with the minimum number
/// of dashes.
pub fn leaf_charlen(label: &str, amount: base::Cents) -> usize {
    label.chars().count()
        + BOUNDING_SPACES_COUNT
        + MIN_DASHES_COUNT
        + amount.charlen_for_alignment()
}

/// Builds `label ---- amount`, padding with `dash` so that the result is
/// `alignment_charlen` chars wide. Non-negative amounts take one char less so
/// that amounts line up on the decimal point.
pub fn leaf_data(label: &str, amount: base::Cents, alignment_charlen: usize, dash: char) -> String {
    let dash_count = alignment_charlen
        .saturating_sub(
            label.chars().count() + BOUNDING_SPACES_COUNT + amount.charlen_for_alignment(),
        )
        .max(MIN_DASHES_COUNT);
    let mut s = String::with_capacity(alignment_charlen);
    s.push_str(label);
    s.push(' ');
    for _ in 0..dash_count {
        s.push(dash)
    }
    s.push(' ');
    s.push_str(&amount.to_string());
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(9, 1)]
    #[case(10, 2)]
    #[case(99, 2)]
    #[case(100, 3)]
    #[case(1234, 4)]
    #[case(u64::MAX, 20)]
    #[case(u64::MAX / 10, 19)]
    fn test_count_digits(#[case] n: u64, #[case] want: usize) {
        assert_eq!(count_digits(n), want)
    }

    #[rstest]
    #[case("Food", 5000, 0, "Food -- 50.00")]
    #[case("Food", 5000, 20, "Food -------- 50.00")]
    #[case("Food", -5000, 20, "Food ------- (50.00)")]
    #[case("Eating Out", 123456, 20, "Eating Out -- 1,234.56")]
    fn test_leaf_data(
        #[case] label: &str,
        #[case] amount: i64,
        #[case] alignment_charlen: usize,
        #[case] want: &str,
    ) {
        let got = leaf_data(label, base::Cents(amount), alignment_charlen, '-');
        assert_eq!(got, want);
    }
}
