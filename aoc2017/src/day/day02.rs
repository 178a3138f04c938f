use crate::prelude::*;
use itertools::MinMaxResult;

pub struct Answer;

impl Solver for Answer {
    type Input = Vec<Vec<u32>>;
    type Output1 = u32;
    type Output2 = u32;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        read_lines(r)
            .map(|line| {
                line.split_whitespace()
                    .map(|cell| cell.parse().expect("malformed spreadsheet cell"))
                    .collect()
            })
            .collect()
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        input
            .iter()
            .map(|row| match row.iter().minmax() {
                MinMaxResult::MinMax(lo, hi) => hi - lo,
                MinMaxResult::OneElement(_) => 0,
                MinMaxResult::NoElements => panic!("empty spreadsheet row"),
            })
            .sum()
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        input.iter().map(|row| quotient(row)).sum()
    }
}

/// Each row holds exactly one pair where one cell evenly divides another.
fn quotient(row: &[u32]) -> u32 {
    row.iter()
        .enumerate()
        .cartesian_product(row.iter().enumerate())
        .find_map(|((i, a), (j, b))| (i != j && a % b == 0).then(|| a / b))
        .expect("no evenly divisible pair in row")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_one() {
        let rows = vec![vec![5, 1, 9, 5], vec![7, 5, 3], vec![2, 4, 6, 8]];
        assert_eq!(Answer.solve_first(&rows), 18);
    }

    #[test]
    fn part_two() {
        let rows = vec![vec![5, 9, 2, 8], vec![9, 4, 7, 3], vec![3, 8, 6, 5]];
        assert_eq!(Answer.solve_second(&rows), 9);
    }
}
