use crate::prelude::*;

pub struct Answer;

/// One answer bitmask per person, grouped by blank lines.
pub type Group = Vec<u32>;

impl Solver for Answer {
    type Input = Vec<Group>;
    type Output1 = u32;
    type Output2 = u32;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        parse_string(r)
            .split("\n\n")
            .map(|group| group.lines().map(answers).collect())
            .collect()
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        input
            .iter()
            .map(|group| {
                group
                    .iter()
                    .fold(0, |anyone, person| anyone | person)
                    .count_ones()
            })
            .sum()
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        input
            .iter()
            .map(|group| {
                group
                    .iter()
                    .fold(u32::MAX, |everyone, person| everyone & person)
                    .count_ones()
            })
            .sum()
    }
}

fn answers(person: &str) -> u32 {
    person.bytes().fold(0, |mask, question| {
        assert!(question.is_ascii_lowercase(), "malformed answer sheet");
        mask | 1 << (question - b'a')
    })
}
