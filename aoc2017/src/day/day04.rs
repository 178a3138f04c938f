use crate::prelude::*;

pub struct Answer;

impl Solver for Answer {
    type Input = Vec<Vec<String>>;
    type Output1 = usize;
    type Output2 = usize;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        read_lines(r)
            .map(|line| line.split_whitespace().map(str::to_owned).collect())
            .collect()
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        input
            .iter()
            .filter(|phrase| phrase.iter().all_unique())
            .count()
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        input
            .iter()
            .filter(|phrase| {
                phrase
                    .iter()
                    .map(|word| word.chars().sorted().collect::<String>())
                    .all_unique()
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn part_one() {
        let phrases = Answer.parse_input(Cursor::new(
            "aa bb cc dd ee\naa bb cc dd aa\naa bb cc dd aaa",
        ));
        assert_eq!(Answer.solve_first(&phrases), 2);
    }

    #[test]
    fn part_two() {
        let phrases = Answer.parse_input(Cursor::new(
            "abcde fghij\n\
             abcde xyz ecdab\n\
             a ab abc abd abf abj\n\
             iiii oiii ooii oooi oooo\n\
             oiii ioii iioi iiio",
        ));
        assert_eq!(Answer.solve_second(&phrases), 3);
    }
}
