use crate::prelude::*;
use std::num::ParseIntError;

pub struct Answer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up(i64),
    Down(i64),
    Left(i64),
    Right(i64),
}

impl FromStr for Step {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dir, dist) = s.split_at(1);
        let dist = dist.parse()?;
        Ok(match dir {
            "U" => Step::Up(dist),
            "D" => Step::Down(dist),
            "L" => Step::Left(dist),
            "R" => Step::Right(dist),
            other => panic!("unknown wire direction {:?}", other),
        })
    }
}

pub type Wire = Vec<Step>;

impl Solver for Answer {
    type Input = (Wire, Wire);
    type Output1 = i64;
    type Output2 = usize;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        let mut wires = read_lines(r).map(|line| parse_list(&line, ","));
        let first = wires.next().expect("missing first wire");
        let second = wires.next().expect("missing second wire");
        (first, second)
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        let (first, second) = (trace(&input.0), trace(&input.1));
        first
            .keys()
            .filter(|point| second.contains_key(point))
            .map(|&(x, y)| x.abs() + y.abs())
            .min()
            .expect("wires never cross")
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        let (first, second) = (trace(&input.0), trace(&input.1));
        first
            .iter()
            .filter_map(|(point, steps)| second.get(point).map(|other| steps + other))
            .min()
            .expect("wires never cross")
    }
}

/// Every point the wire covers, mapped to the step count of its first visit.
fn trace(wire: &Wire) -> HashMap<(i64, i64), usize> {
    let mut seen = HashMap::default();
    let (mut x, mut y) = (0, 0);
    let mut steps = 0;

    for &step in wire {
        let (dx, dy, dist) = match step {
            Step::Up(n) => (0, 1, n),
            Step::Down(n) => (0, -1, n),
            Step::Left(n) => (-1, 0, n),
            Step::Right(n) => (1, 0, n),
        };
        for _ in 0..dist {
            x += dx;
            y += dy;
            steps += 1;
            seen.entry((x, y)).or_insert(steps);
        }
    }

    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn wires(s: &str) -> (Wire, Wire) {
        Answer.parse_input(Cursor::new(s))
    }

    #[test]
    fn part_one() {
        assert_eq!(Answer.solve_first(&wires("R8,U5,L5,D3\nU7,R6,D4,L4")), 6);
        assert_eq!(
            Answer.solve_first(&wires(
                "R75,D30,R83,U83,L12,D49,R71,U7,L72\nU62,R66,U55,R34,D71,R55,D58,R83"
            )),
            159
        );
        assert_eq!(
            Answer.solve_first(&wires(
                "R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51\nU98,R91,D20,R16,D67,R40,U7,R15,U6,R7"
            )),
            135
        );
    }

    #[test]
    fn part_two() {
        assert_eq!(Answer.solve_second(&wires("R8,U5,L5,D3\nU7,R6,D4,L4")), 30);
        assert_eq!(
            Answer.solve_second(&wires(
                "R75,D30,R83,U83,L12,D49,R71,U7,L72\nU62,R66,U55,R34,D71,R55,D58,R83"
            )),
            610
        );
        assert_eq!(
            Answer.solve_second(&wires(
                "R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51\nU98,R91,D20,R16,D67,R40,U7,R15,U6,R7"
            )),
            410
        );
    }
}
