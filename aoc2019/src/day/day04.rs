use crate::prelude::*;
use rayon::prelude::*;

pub struct Answer;

impl Solver for Answer {
    type Input = (u32, u32);
    type Output1 = usize;
    type Output2 = usize;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        let text = parse_string(r);
        let (lo, hi) = text.trim().split_once('-').expect("malformed range");
        (
            lo.parse().expect("malformed range bound"),
            hi.parse().expect("malformed range bound"),
        )
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        let (lo, hi) = *input;
        (lo..=hi)
            .into_par_iter()
            .filter(|&n| valid(n, |run| run >= 2))
            .count()
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        let (lo, hi) = *input;
        (lo..=hi)
            .into_par_iter()
            .filter(|&n| valid(n, |run| run == 2))
            .count()
    }
}

/// Digits never decrease and at least one run of equal digits satisfies
/// `run_ok`.
fn valid(n: u32, run_ok: impl Fn(usize) -> bool) -> bool {
    let digits: Vec<u8> = n.to_string().into_bytes();

    digits.windows(2).all(|pair| pair[0] <= pair[1])
        && digits
            .iter()
            .dedup_with_count()
            .any(|(run, _)| run_ok(run))
}
