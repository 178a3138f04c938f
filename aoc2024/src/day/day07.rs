use crate::prelude::*;
use rayon::prelude::*;

pub struct Answer;

/// Operators are applied strictly left to right; there is no precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Mul,
    Concat,
}

impl Op {
    fn apply(self, a: u64, b: u64) -> u64 {
        match self {
            Op::Add => a + b,
            Op::Mul => a * b,
            Op::Concat => {
                let shift = b.checked_ilog10().unwrap_or(0) + 1;
                a * 10u64.pow(shift) + b
            }
        }
    }
}

pub type Equation = (u64, Vec<u64>);

impl Solver for Answer {
    type Input = Vec<Equation>;
    type Output1 = u64;
    type Output2 = u64;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        read_lines(r)
            .map(|line| {
                let (target, operands) = line.split_once(": ").expect("malformed equation");
                (
                    target.parse().expect("malformed test value"),
                    operands
                        .split_whitespace()
                        .map(|n| n.parse().expect("malformed operand"))
                        .collect(),
                )
            })
            .collect()
    }

    /// Correct: `1298103531759`
    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        calibration(input, &[Op::Add, Op::Mul])
    }

    /// Correct: `140575048428831`
    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        calibration(input, &[Op::Add, Op::Mul, Op::Concat])
    }

    fn accepted(&self) -> (Option<&'static str>, Option<&'static str>) {
        (Some("1298103531759"), Some("140575048428831"))
    }
}

/// Sum of the targets that at least one operator assignment can produce.
fn calibration(equations: &[Equation], ops: &[Op]) -> u64 {
    equations
        .par_iter()
        .filter(|(target, operands)| reachable(*target, operands[0], &operands[1..], ops))
        .map(|(target, _)| target)
        .sum()
}

fn reachable(target: u64, acc: u64, rest: &[u64], ops: &[Op]) -> bool {
    // Every operator grows the running value, so an overshoot is final.
    if acc > target {
        return false;
    }
    match rest.split_first() {
        None => acc == target,
        Some((&next, rest)) => ops
            .iter()
            .any(|op| reachable(target, op.apply(acc, next), rest, ops)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const EQUATIONS: &str = "190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20";

    #[test]
    fn part_one() {
        let equations = Answer.parse_input(Cursor::new(EQUATIONS));
        assert_eq!(Answer.solve_first(&equations), 3749);
    }

    #[test]
    fn part_two() {
        let equations = Answer.parse_input(Cursor::new(EQUATIONS));
        assert_eq!(Answer.solve_second(&equations), 11387);
    }

    #[test]
    fn concatenation_alone_unlocks_7290() {
        assert!(!reachable(7290, 6, &[8, 6, 15], &[Op::Add, Op::Mul]));
        assert!(reachable(7290, 6, &[8, 6, 15], &[Op::Add, Op::Mul, Op::Concat]));
    }
}
