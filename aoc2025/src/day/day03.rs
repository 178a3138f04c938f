use crate::prelude::*;
use std::cmp::Reverse;

pub struct Answer;

pub type Bank = Vec<u8>;

impl Solver for Answer {
    type Input = Vec<Bank>;
    type Output1 = u64;
    type Output2 = u64;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        read_lines(r)
            .map(|line| {
                line.bytes()
                    .map(|b| {
                        assert!(b.is_ascii_digit(), "malformed battery bank");
                        b - b'0'
                    })
                    .collect()
            })
            .collect()
    }

    /// Two batteries per bank, kept in order.
    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        input.iter().map(|bank| max_joltage(bank, 2)).sum()
    }

    /// Twelve batteries per bank.
    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        input.iter().map(|bank| max_joltage(bank, 12)).sum()
    }
}

/// Largest `k`-digit number obtainable as a subsequence: greedily take the
/// biggest digit that still leaves enough digits behind it, earliest
/// occurrence on ties.
fn max_joltage(bank: &[u8], k: usize) -> u64 {
    assert!(bank.len() >= k, "bank shorter than the required pick");

    let mut joltage = 0;
    let mut start = 0;
    for picked in 0..k {
        let window = &bank[start..=bank.len() - (k - picked)];
        let (offset, &digit) = window
            .iter()
            .enumerate()
            .max_by_key(|&(i, &d)| (d, Reverse(i)))
            .expect("window is never empty");

        joltage = joltage * 10 + u64::from(digit);
        start += offset + 1;
    }

    joltage
}
