use crate::prelude::*;

pub struct Answer;

impl Solver for Answer {
    type Input = Vec<i64>;
    type Output1 = usize;
    type Output2 = usize;

    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        parse_to(r)
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        steps_to_escape(input, |_| 1)
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        steps_to_escape(input, |offset| if offset >= 3 { -1 } else { 1 })
    }
}

/// Follow the jump offsets until the cursor leaves the list, adjusting each
/// visited offset by `tweak` after the jump is taken.
fn steps_to_escape(offsets: &[i64], tweak: impl Fn(i64) -> i64) -> usize {
    let mut offsets = offsets.to_vec();
    let mut cursor = 0i64;
    let mut steps = 0;

    while cursor >= 0 && (cursor as usize) < offsets.len() {
        let slot = cursor as usize;
        let offset = offsets[slot];
        offsets[slot] += tweak(offset);
        cursor += offset;
        steps += 1;
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_one() {
        assert_eq!(Answer.solve_first(&vec![0, 3, 0, 1, -3]), 5);
    }

    #[test]
    fn part_two() {
        assert_eq!(Answer.solve_second(&vec![0, 3, 0, 1, -3]), 10);
    }
}
