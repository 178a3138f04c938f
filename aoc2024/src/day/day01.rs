use crate::prelude::*;

pub struct Answer;

impl Solver for Answer {
    type Input = (Vec<i64>, Vec<i64>);
    type Output1 = i64;
    type Output2 = i64;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        read_lines(r)
            .map(|line| {
                line.split_whitespace()
                    .map(|id| id.parse::<i64>().expect("malformed location id"))
                    .collect_tuple()
                    .expect("expected two ids per line")
            })
            .unzip()
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        let left = input.0.iter().sorted();
        let right = input.1.iter().sorted();
        left.zip(right).map(|(l, r)| (l - r).abs()).sum()
    }

    /// Each left id weighted by how often it appears on the right.
    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        let occurrences = input.1.iter().counts();
        input
            .0
            .iter()
            .map(|id| id * occurrences.get(id).copied().unwrap_or(0) as i64)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const LISTS: &str = "3   4
4   3
2   5
1   3
3   9
3   3";

    #[test]
    fn part_one() {
        let lists = Answer.parse_input(Cursor::new(LISTS));
        assert_eq!(Answer.solve_first(&lists), 11);
    }

    #[test]
    fn part_two() {
        let lists = Answer.parse_input(Cursor::new(LISTS));
        assert_eq!(Answer.solve_second(&lists), 31);
    }
}
