use crate::prelude::*;

pub struct Answer;

pub type IdRange = (u64, u64);

impl Solver for Answer {
    type Input = Vec<IdRange>;
    type Output1 = u64;
    type Output2 = u64;

    /// A single line of comma-separated inclusive ranges like `11-22`.
    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        parse_string(r)
            .trim()
            .split(',')
            .map(|range| {
                let (lo, hi) = range.split_once('-').expect("malformed id range");
                (
                    lo.parse().expect("malformed id range"),
                    hi.parse().expect("malformed id range"),
                )
            })
            .collect()
    }

    /// Invalid ids are a digit block repeated exactly twice.
    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        invalid_sum(input, doubled)
    }

    /// Now any block repeated at least twice counts.
    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        invalid_sum(input, repeated)
    }
}

fn invalid_sum(ranges: &[IdRange], suspicious: fn(u64) -> bool) -> u64 {
    ranges
        .iter()
        .flat_map(|&(lo, hi)| lo..=hi)
        .filter(|&id| suspicious(id))
        .sum()
}

fn doubled(id: u64) -> bool {
    let digits = id.to_string();
    digits.len() % 2 == 0 && digits[..digits.len() / 2] == digits[digits.len() / 2..]
}

fn repeated(id: u64) -> bool {
    let digits = id.to_string();
    (1..=digits.len() / 2)
        .filter(|width| digits.len() % width == 0)
        .any(|width| digits.as_bytes().chunks(width).all_equal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn doubled_ids() {
        assert!(doubled(11));
        assert!(doubled(6464));
        assert!(doubled(123_123));
        assert!(!doubled(101));
        assert!(!doubled(111));
    }

    #[test]
    fn repeated_ids() {
        assert!(repeated(111));
        assert!(repeated(6464));
        assert!(repeated(38_593_859));
        assert!(repeated(2_121_212_121));
        assert!(!repeated(1234));
    }

    #[test]
    fn sums_over_ranges() {
        let ranges = Answer.parse_input(Cursor::new("10-25,95-115"));
        // 11 and 22, then 99.
        assert_eq!(Answer.solve_first(&ranges), 132);
        // Part two additionally flags 111.
        assert_eq!(Answer.solve_second(&ranges), 243);
    }
}
