use crate::prelude::*;

pub struct Answer;

impl Solver for Answer {
    type Input = Vec<usize>;
    type Output1 = u64;
    type Output2 = u64;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        parse_list(&parse_string(r), ",")
    }

    /// Correct: `365862`
    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        school_after(input, 80)
    }

    /// Correct: `1653250886439`
    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        school_after(input, 256)
    }

    fn accepted(&self) -> (Option<&'static str>, Option<&'static str>) {
        (Some("365862"), Some("1653250886439"))
    }
}

/// Fish are indistinguishable, so only the count per timer value matters.
fn school_after(timers: &[usize], days: usize) -> u64 {
    let mut counts = [0u64; 9];
    for &timer in timers {
        counts[timer] += 1;
    }

    for _ in 0..days {
        let spawning = counts[0];
        counts.rotate_left(1);
        counts[6] += spawning;
        // rotate_left already parked the spawners' offspring at timer 8.
    }

    counts.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMERS: [usize; 5] = [3, 4, 3, 1, 2];

    #[test]
    fn eighteen_days() {
        assert_eq!(school_after(&TIMERS, 18), 26);
    }

    #[test]
    fn part_one() {
        assert_eq!(school_after(&TIMERS, 80), 5934);
    }

    #[test]
    fn part_two() {
        assert_eq!(school_after(&TIMERS, 256), 26_984_457_539);
    }
}
