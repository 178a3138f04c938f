use crate::prelude::*;

pub struct Answer;

const TARGET: u64 = 2020;

impl Solver for Answer {
    type Input = Vec<u64>;
    type Output1 = u64;
    type Output2 = u64;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        parse_to(r)
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        input
            .iter()
            .tuple_combinations()
            .find(|(&a, &b)| a + b == TARGET)
            .map(|(a, b)| a * b)
            .expect("no pair sums to 2020")
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        input
            .iter()
            .tuple_combinations()
            .find(|(&a, &b, &c)| a + b + c == TARGET)
            .map(|(a, b, c)| a * b * c)
            .expect("no triple sums to 2020")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRIES: [u64; 6] = [1721, 979, 366, 299, 675, 1456];

    #[test]
    fn part_one() {
        assert_eq!(Answer.solve_first(&ENTRIES.to_vec()), 514_579);
    }

    #[test]
    fn part_two() {
        assert_eq!(Answer.solve_second(&ENTRIES.to_vec()), 241_861_950);
    }
}
