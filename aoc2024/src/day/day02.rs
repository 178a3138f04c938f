use crate::prelude::*;

pub struct Answer;

pub type Report = Vec<i64>;

impl Solver for Answer {
    type Input = Vec<Report>;
    type Output1 = usize;
    type Output2 = usize;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        read_lines(r)
            .map(|line| {
                line.split_whitespace()
                    .map(|level| level.parse().expect("malformed level"))
                    .collect()
            })
            .collect()
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        input.iter().filter(|report| safe(report)).count()
    }

    /// The problem dampener tolerates one removed level.
    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        input
            .iter()
            .filter(|report| {
                safe(report)
                    || (0..report.len()).any(|skip| {
                        let dampened: Report = report
                            .iter()
                            .enumerate()
                            .filter(|&(i, _)| i != skip)
                            .map(|(_, &level)| level)
                            .collect();
                        safe(&dampened)
                    })
            })
            .count()
    }
}

/// Strictly monotonic with steps of one to three.
fn safe(report: &[i64]) -> bool {
    let climbs = report
        .windows(2)
        .all(|pair| (1..=3).contains(&(pair[1] - pair[0])));
    let falls = report
        .windows(2)
        .all(|pair| (1..=3).contains(&(pair[0] - pair[1])));
    climbs || falls
}
