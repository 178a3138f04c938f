use crate::prelude::*;

pub struct Answer;

impl Solver for Answer {
    type Input = Vec<u64>;
    type Output1 = u64;
    type Output2 = u64;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        parse_string(r)
            .split_whitespace()
            .map(|stone| stone.parse().expect("malformed stone"))
            .collect()
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        stones_after(input, 25)
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        stones_after(input, 75)
    }
}

/// The cache is keyed by (stone, remaining blinks) and lives only for this
/// query, so separate inputs can never contaminate each other.
fn stones_after(stones: &[u64], blinks: usize) -> u64 {
    let mut cache: HashMap<(u64, usize), u64> = HashMap::default();
    stones
        .iter()
        .map(|&stone| count(stone, blinks, &mut cache))
        .sum()
}

fn count(stone: u64, blinks: usize, cache: &mut HashMap<(u64, usize), u64>) -> u64 {
    if blinks == 0 {
        return 1;
    }
    if let Some(&known) = cache.get(&(stone, blinks)) {
        return known;
    }

    let total = match stone {
        0 => count(1, blinks - 1, cache),
        engraved => {
            let digits = engraved.ilog10() + 1;
            if digits % 2 == 0 {
                let split = 10u64.pow(digits / 2);
                count(engraved / split, blinks - 1, cache)
                    + count(engraved % split, blinks - 1, cache)
            } else {
                count(engraved * 2024, blinks - 1, cache)
            }
        }
    };

    cache.insert((stone, blinks), total);
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_blinks() {
        assert_eq!(stones_after(&[125, 17], 6), 22);
    }

    #[test]
    fn part_one() {
        assert_eq!(stones_after(&[125, 17], 25), 55312);
    }

    #[test]
    fn caches_are_scoped_per_query() {
        assert_eq!(stones_after(&[0], 1), 1);
        assert_eq!(stones_after(&[0], 2), 1);
        assert_eq!(stones_after(&[0], 3), 2);
    }
}
