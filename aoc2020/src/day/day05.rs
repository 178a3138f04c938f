use crate::prelude::*;

pub struct Answer;

impl Solver for Answer {
    type Input = Vec<u32>;
    type Output1 = u32;
    type Output2 = u32;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        read_lines(r).map(|pass| seat_id(&pass)).collect()
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        *input.iter().max().expect("no boarding passes")
    }

    /// The one missing id whose neighbors are both taken.
    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        input
            .iter()
            .sorted()
            .tuple_windows()
            .find(|(&a, &b)| b - a == 2)
            .map(|(a, _)| a + 1)
            .expect("no gap in the seat ids")
    }
}

/// A boarding pass is the seat id in binary: B and R are ones.
fn seat_id(pass: &str) -> u32 {
    pass.chars()
        .fold(0, |id, half| id * 2 + u32::from(matches!(half, 'B' | 'R')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_ids_from_the_puzzle_text() {
        assert_eq!(seat_id("FBFBBFFRLR"), 357);
        assert_eq!(seat_id("BFFFBBFRRR"), 567);
        assert_eq!(seat_id("FFFBBBFRRR"), 119);
        assert_eq!(seat_id("BBFFBBFRLL"), 820);
    }

    #[test]
    fn part_two_finds_the_hole() {
        let ids = vec![357, 359, 358, 361];
        assert_eq!(Answer.solve_second(&ids), 360);
    }
}
