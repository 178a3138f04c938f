use crate::prelude::*;

pub struct Answer;

impl Solver for Answer {
    type Input = Vec<u64>;
    type Output1 = usize;
    type Output2 = usize;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        parse_to(r)
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        increases(input.iter().copied())
    }

    /// Three-measurement sliding windows, then the same count.
    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        increases(
            input
                .iter()
                .tuple_windows()
                .map(|(a, b, c)| a + b + c),
        )
    }
}

fn increases(depths: impl Iterator<Item = u64>) -> usize {
    depths.tuple_windows().filter(|(a, b)| b > a).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SWEEP: [u64; 10] = [199, 200, 208, 210, 200, 207, 240, 269, 260, 263];

    #[test]
    fn part_one() {
        assert_eq!(Answer.solve_first(&SWEEP.to_vec()), 7);
    }

    #[test]
    fn part_two() {
        assert_eq!(Answer.solve_second(&SWEEP.to_vec()), 5);
    }
}
