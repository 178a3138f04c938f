use crate::prelude::*;
use hex2d::{Coordinate, Direction};

pub struct Answer;

pub type Coord = Coordinate<i32>;

impl Solver for Answer {
    type Input = Vec<Direction>;
    type Output1 = i32;
    type Output2 = i32;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        parse_string(r)
            .trim()
            .split(',')
            .map(direction)
            .collect()
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        let origin = Coord::new(0, 0);
        let end = input.iter().fold(origin, |pos, &dir| pos + dir);
        end.distance(origin)
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        let origin = Coord::new(0, 0);
        input
            .iter()
            .scan(origin, |pos, &dir| {
                *pos = *pos + dir;
                Some(pos.distance(origin))
            })
            .max()
            .expect("empty path")
    }
}

fn direction(token: &str) -> Direction {
    match token {
        "n" => Direction::YZ,
        "s" => Direction::ZY,
        "ne" => Direction::XZ,
        "sw" => Direction::ZX,
        "nw" => Direction::YX,
        "se" => Direction::XY,
        other => panic!("unknown hex step {:?}", other),
    }
}
