use crate::prelude::*;

pub struct Answer;

impl Solver for Answer {
    type Input = Vec<i64>;
    type Output1 = i64;
    type Output2 = i64;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        parse_to(r)
    }

    /// Correct: `3366415`
    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        input.iter().map(|&mass| fuel(mass)).sum()
    }

    /// Correct: `5046772`
    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        input.iter().map(|&mass| total_fuel(mass)).sum()
    }

    fn accepted(&self) -> (Option<&'static str>, Option<&'static str>) {
        (Some("3366415"), Some("5046772"))
    }
}

fn fuel(mass: i64) -> i64 {
    mass / 3 - 2
}

/// The fuel itself needs fuel, until the requirement rounds to nothing.
fn total_fuel(mass: i64) -> i64 {
    itertools::iterate(fuel(mass), |&f| fuel(f))
        .take_while(|&f| f > 0)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_one() {
        assert_eq!(fuel(12), 2);
        assert_eq!(fuel(14), 2);
        assert_eq!(fuel(1969), 654);
        assert_eq!(fuel(100_756), 33583);
    }

    #[test]
    fn part_two() {
        assert_eq!(total_fuel(14), 2);
        assert_eq!(total_fuel(1969), 966);
        assert_eq!(total_fuel(100_756), 50346);
    }
}
