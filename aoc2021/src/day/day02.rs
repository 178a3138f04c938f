use crate::prelude::*;
use std::num::ParseIntError;

pub struct Answer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl FromStr for Command {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, n) = scan_fmt!(s, "{} {d}", String, i64).expect("malformed course line");
        Ok(match verb.as_str() {
            "forward" => Command::Forward(n),
            "down" => Command::Down(n),
            "up" => Command::Up(n),
            other => panic!("unknown course command {:?}", other),
        })
    }
}

impl Solver for Answer {
    type Input = Vec<Command>;
    type Output1 = i64;
    type Output2 = i64;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        read_lines(r)
            .map(|line| line.parse().expect("malformed course line"))
            .collect()
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        let (position, depth) = input.iter().fold((0, 0), |(pos, depth), &cmd| match cmd {
            Command::Forward(n) => (pos + n, depth),
            Command::Down(n) => (pos, depth + n),
            Command::Up(n) => (pos, depth - n),
        });
        position * depth
    }

    /// Down and up trim the aim; forward moves and dives by the aim.
    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        let (position, depth, _) =
            input
                .iter()
                .fold((0, 0, 0), |(pos, depth, aim), &cmd| match cmd {
                    Command::Forward(n) => (pos + n, depth + aim * n, aim),
                    Command::Down(n) => (pos, depth, aim + n),
                    Command::Up(n) => (pos, depth, aim - n),
                });
        position * depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const COURSE: &str = "forward 5
down 5
forward 8
up 3
down 8
forward 2";

    #[test]
    fn part_one() {
        let course = Answer.parse_input(Cursor::new(COURSE));
        assert_eq!(Answer.solve_first(&course), 150);
    }

    #[test]
    fn part_two() {
        let course = Answer.parse_input(Cursor::new(COURSE));
        assert_eq!(Answer.solve_second(&course), 900);
    }
}
