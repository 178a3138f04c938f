use crate::prelude::*;

pub struct Answer;

impl Solver for Answer {
    type Input = Vec<u32>;
    type Output1 = u32;
    type Output2 = u32;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        parse_string(r)
            .trim()
            .chars()
            .map(|c| c.to_digit(10).expect("captcha is digits only"))
            .collect()
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        matching_digit_sum(input, 1)
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        matching_digit_sum(input, input.len() / 2)
    }
}

/// Sum of digits equal to the digit `offset` further around the circle.
fn matching_digit_sum(digits: &[u32], offset: usize) -> u32 {
    (0..digits.len())
        .filter(|&i| digits[i] == digits[(i + offset) % digits.len()])
        .map(|i| digits[i])
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn digits(s: &str) -> Vec<u32> {
        Answer.parse_input(Cursor::new(s))
    }

    #[test]
    fn part_one() {
        assert_eq!(Answer.solve_first(&digits("1122")), 3);
        assert_eq!(Answer.solve_first(&digits("1111")), 4);
        assert_eq!(Answer.solve_first(&digits("1234")), 0);
        assert_eq!(Answer.solve_first(&digits("91212129")), 9);
    }

    #[test]
    fn part_two() {
        assert_eq!(Answer.solve_second(&digits("1212")), 6);
        assert_eq!(Answer.solve_second(&digits("1221")), 0);
        assert_eq!(Answer.solve_second(&digits("123425")), 4);
        assert_eq!(Answer.solve_second(&digits("123123")), 12);
        assert_eq!(Answer.solve_second(&digits("12131415")), 4);
    }
}
