use crate::prelude::*;

pub struct Answer;

impl Solver for Answer {
    type Input = Vec<u64>;
    type Output1 = u64;
    type Output2 = u64;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        parse_to(r)
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        let jolts: Vec<u64> = input.iter().copied().sorted().collect();

        let (mut ones, mut threes) = (0, 0);
        for (a, b) in std::iter::once(0).chain(jolts.iter().copied()).tuple_windows() {
            match b - a {
                1 => ones += 1,
                3 => threes += 1,
                _ => {}
            }
        }

        // The device itself is three jolts above the highest adapter.
        ones * (threes + 1)
    }

    /// Number of distinct adapter chains, counted by a running tally of the
    /// ways to reach each adapter.
    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        let jolts: Vec<u64> = input.iter().copied().sorted().collect();

        let mut ways: HashMap<u64, u64> = HashMap::default();
        ways.insert(0, 1);

        for &jolt in &jolts {
            let reachable = (1..=3)
                .filter_map(|gap| jolt.checked_sub(gap))
                .filter_map(|from| ways.get(&from))
                .sum();
            ways.insert(jolt, reachable);
        }

        ways[jolts.last().expect("no adapters")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: [u64; 11] = [16, 10, 15, 5, 1, 11, 7, 19, 6, 12, 4];
    const LARGE: [u64; 31] = [
        28, 33, 18, 42, 31, 14, 46, 20, 48, 47, 24, 23, 49, 45, 19, 38, 39, 11,
        1, 32, 25, 35, 8, 17, 7, 9, 4, 2, 34, 10, 3,
    ];

    #[test]
    fn part_one() {
        assert_eq!(Answer.solve_first(&SMALL.to_vec()), 35);
        assert_eq!(Answer.solve_first(&LARGE.to_vec()), 220);
    }

    #[test]
    fn part_two() {
        assert_eq!(Answer.solve_second(&SMALL.to_vec()), 8);
        assert_eq!(Answer.solve_second(&LARGE.to_vec()), 19208);
    }
}
