use crate::prelude::*;

pub struct Answer;

impl Solver for Answer {
    type Input = String;
    type Output1 = usize;
    type Output2 = String;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        parse_string(r).trim().to_owned()
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        let lengths: Vec<usize> = parse_list(input, ",");
        product_after_one_round(256, &lengths)
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        knot::hex_digest(input)
    }
}

fn product_after_one_round(size: usize, lengths: &[usize]) -> usize {
    let marks = knot::sparse_hash(size, lengths, 1);
    marks[0] * marks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_one() {
        assert_eq!(product_after_one_round(5, &[3, 4, 1, 5]), 12);
    }

    #[test]
    fn part_two() {
        assert_eq!(
            Answer.solve_second(&"1,2,3".to_owned()),
            "3efbe78a8d82f29979031a4aa0b16a9d"
        );
    }
}
